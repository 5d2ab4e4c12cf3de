// CSRF session module

pub mod session;

pub use session::{CsrfSession, CSRF_HEADER};
