pub fn login() -> String {
    "<form method=\"post\" action=\"/login\">\
     <label>Username <input name=\"username\"></label>\
     <label>Password <input type=\"password\" name=\"password\"></label>\
     <button type=\"submit\">Log in</button></form>"
        .to_string()
}
