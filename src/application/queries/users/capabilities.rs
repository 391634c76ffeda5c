use super::UserQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CapabilityView},
        error::ApplicationResult,
    },
    domain::user::Capability,
};

impl UserQueryService {
    /// The full permission catalog, for admin UIs assigning grants.
    pub fn capability_catalog(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<CapabilityView>> {
        self.ensure_can_read(actor)?;
        Ok(Capability::catalog()
            .into_iter()
            .map(CapabilityView::from)
            .collect())
    }
}
