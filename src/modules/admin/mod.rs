// Admin session module

pub mod session;

pub use session::{AdminSession, ADMIN_LOGIN_PATH};
