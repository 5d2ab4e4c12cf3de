pub mod observed;
pub mod scenario;

pub use observed::{decode_body, parse_set_cookie, Observed};
pub use scenario::{Method, RequestSpec, Scenario};
