use crate::auth::{AuthPolicy, SessionMap};
use crate::store::Store;

/// Shared handles cloned into every handler. The pool inside `Store` is
/// the only connection to the outside world; the session map is the only
/// other in-process shared state.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub sessions: SessionMap,
    pub policy: AuthPolicy,
}
