pub mod html;
pub mod time;
pub mod validator;
