use crate::core::Result;
use crate::modules::admin::AdminSession;
use crate::modules::contracts::models::{CaseVerdict, ContractCase, ContractReport, Resource};
use crate::modules::csrf::CsrfSession;
use crate::modules::scenarios::models::RequestSpec;
use crate::modules::scenarios::services::ScenarioRunner;
use uuid::Uuid;

/// Sends contract cases to their real endpoints and records the verdicts
pub struct ContractVerifier<'a> {
    runner: &'a ScenarioRunner,
    target_id: String,
    admin: Option<AdminSession>,
}

impl<'a> ContractVerifier<'a> {
    /// `{id}` paths target a random UUID that no order or package can own
    pub fn new(runner: &'a ScenarioRunner) -> Self {
        Self {
            runner,
            target_id: Uuid::new_v4().to_string(),
            admin: None,
        }
    }

    /// A verifier holding the admin session the runner's configuration asks for
    pub async fn connect(runner: &'a ScenarioRunner) -> Result<Self> {
        let admin = AdminSession::from_config(runner).await?;
        Ok(Self {
            admin,
            ..Self::new(runner)
        })
    }

    /// Target an existing order or package instead
    pub fn with_target_id(mut self, id: impl Into<String>) -> Self {
        self.target_id = id.into();
        self
    }

    pub fn with_admin(mut self, session: AdminSession) -> Self {
        self.admin = Some(session);
        self
    }

    /// Build the request for one case, without sending it.
    ///
    /// Admin-gated resources carry the bearer token when a session is held.
    pub fn request_for(&self, resource: Resource, case: &ContractCase) -> RequestSpec {
        let request = RequestSpec::new(resource.method(), resource.path(&self.target_id))
            .json(case.payload.clone());
        match &self.admin {
            Some(admin) if resource.requires_admin() => admin.authorize(request),
            _ => request,
        }
    }

    pub async fn verify_case(
        &self,
        resource: Resource,
        case: &ContractCase,
    ) -> Result<CaseVerdict> {
        let mut request = self.request_for(resource, case);
        if resource.requires_csrf() {
            // fresh token per case so a rejected case cannot poison the next one
            let session = CsrfSession::acquire(self.runner).await?;
            request = session.authorize(request);
        }

        let observed = self.runner.execute(&request).await?;
        let verdict = CaseVerdict::new(resource, case, observed.status);

        tracing::info!(
            resource = %resource,
            case = %case.label,
            expected = %verdict.expected,
            observed = %verdict.observed,
            status = verdict.status,
            "contract case verified"
        );

        Ok(verdict)
    }

    /// Run every case of `resource` in table order.
    ///
    /// Stops at the first environment failure; mismatches are collected in the report.
    pub async fn verify_resource(
        &self,
        resource: Resource,
        cases: &[ContractCase],
    ) -> Result<ContractReport> {
        if resource.requires_admin() && self.admin.is_none() {
            tracing::warn!(
                resource = %resource,
                "no admin session configured; gated cases may stop at the auth check"
            );
        }

        let mut report = ContractReport::new(resource);
        for case in cases {
            report.verdicts.push(self.verify_case(resource, case).await?);
        }
        Ok(report)
    }
}
