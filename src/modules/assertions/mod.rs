// Assertion layer: translate raw HTTP and SQL outcomes into verdicts

pub mod body;
pub mod status;
pub mod violation;

pub use body::{
    check_country_filter, decode_admin_token, decode_csrf_token, decode_package_list,
    validate_shape, AdminLoginResponse, BodyContract, CsrfTokenResponse, PackageListResponse,
    PackageRecord,
};
pub use status::StatusSet;
pub use violation::ConstraintKind;
