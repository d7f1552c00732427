use certreg_cert_types::OrgId;

use crate::IdentityError;

/// Authenticated principal executing the current transaction.
#[cfg_attr(feature = "test-utils", mockall::automock)]
pub trait CallerIdentity {
    /// Resolves the organization the caller belongs to.
    fn msp_id(&self) -> Result<OrgId, IdentityError>;
}

/// Identity that always resolves to the same organization.
///
/// Useful when the host has already authenticated the caller by other means.
#[derive(Clone, Debug)]
pub struct FixedIdentity(OrgId);

impl FixedIdentity {
    pub fn new(org: impl Into<OrgId>) -> Self {
        Self(org.into())
    }
}

impl CallerIdentity for FixedIdentity {
    fn msp_id(&self) -> Result<OrgId, IdentityError> {
        if self.0.as_str().is_empty() {
            return Err(IdentityError::MissingMspId);
        }

        Ok(self.0.clone())
    }
}
