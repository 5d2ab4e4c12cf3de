pub mod fixture;
pub mod probe_repository;

pub use fixture::{with_db_fixture, DbFixture};
pub use probe_repository::ProbeRepository;
