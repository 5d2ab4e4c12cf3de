use uuid::Uuid;

/// Rows a probe inserted and must not leave behind
///
/// Orders are not tracked: they either cascade away with their user or are
/// removed by user id during cleanup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProbeRecords {
    pub users: Vec<Uuid>,
    pub packages: Vec<Uuid>,
}

impl ProbeRecords {
    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.packages.is_empty()
    }

    /// Unique throwaway e-mail, so concurrent or repeated runs never collide
    pub fn probe_email(user_id: Uuid) -> String {
        format!("probe-{}@example.com", user_id.simple())
    }

    pub fn probe_package_name(package_id: Uuid) -> String {
        format!("probe-package-{}", package_id.simple())
    }
}
