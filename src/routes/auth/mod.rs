mod post_login;
mod post_register;

pub use post_login::{post_login, LoginRequest, LoginResponseBody};
pub use post_register::{post_register, RegisterRequest};

pub use post_login::__path_post_login;
pub use post_register::__path_post_register;
