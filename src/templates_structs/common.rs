use askama::Template;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub notice: Option<String>,
    pub app_name: &'static str,
    pub csrf_token: String,
    pub bot_name: String,
    pub dev_auth: bool,
}
