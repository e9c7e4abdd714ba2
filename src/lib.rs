pub mod auth;
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod utils;
pub mod views;
