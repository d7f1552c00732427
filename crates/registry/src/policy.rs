//! Operation → organization authorization table.

use std::fmt;

use certreg_cert_types::OrgId;
use certreg_ledger_types::CallerIdentity;
use thiserror::Error;
use tracing::*;

use crate::{RegistryError, RegistryResult};

/// MSP ID of the organization allowed to issue by default.
pub const DEFAULT_ISSUER_ORG: &str = "Org1MSP";

/// MSP ID of the organization allowed to revoke by default.
pub const DEFAULT_REVOKER_ORG: &str = "Org2MSP";

/// Externally invokable registry operations.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Operation {
    Issue,
    Revoke,
    Verify,
    Exists,
    Read,
    QueryAll,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::Issue,
        Operation::Revoke,
        Operation::Verify,
        Operation::Exists,
        Operation::Read,
        Operation::QueryAll,
    ];

    /// Contract function name the operation is invoked by.
    pub fn function_name(&self) -> &'static str {
        match self {
            Operation::Issue => "IssueCertificate",
            Operation::Revoke => "RevokeCertificate",
            Operation::Verify => "VerifyCertificate",
            Operation::Exists => "CertificateExists",
            Operation::Read => "ReadCertificate",
            Operation::QueryAll => "QueryAllCertificates",
        }
    }

    pub fn from_function_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.function_name() == name)
    }

    /// Whether the operation may write to the ledger.
    pub fn is_mutating(&self) -> bool {
        matches!(self, Operation::Issue | Operation::Revoke)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.function_name())
    }
}

/// Who may perform an operation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Access<'p> {
    /// Anyone, without resolving their identity.
    Open,

    /// Only members of this organization.
    Org(&'p OrgId),
}

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("issuing and revoking organization must differ, both are {0}")]
    RoleOverlap(OrgId),

    #[error("no organization given for {0}")]
    EmptyOrg(Operation),
}

/// The authorization table.
///
/// Issuance and revocation each belong to exactly one organization, and never
/// the same one, so nobody can both mint and invalidate a certificate.  Reads
/// are open.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessPolicy {
    issuer: OrgId,
    revoker: OrgId,
}

impl AccessPolicy {
    pub fn new(issuer: OrgId, revoker: OrgId) -> Result<Self, PolicyError> {
        if issuer.as_str().is_empty() {
            return Err(PolicyError::EmptyOrg(Operation::Issue));
        }

        if revoker.as_str().is_empty() {
            return Err(PolicyError::EmptyOrg(Operation::Revoke));
        }

        if issuer == revoker {
            return Err(PolicyError::RoleOverlap(issuer));
        }

        Ok(Self { issuer, revoker })
    }

    pub fn issuer(&self) -> &OrgId {
        &self.issuer
    }

    pub fn revoker(&self) -> &OrgId {
        &self.revoker
    }

    /// Looks up who may perform `op`.
    pub fn access(&self, op: Operation) -> Access<'_> {
        match op {
            Operation::Issue => Access::Org(&self.issuer),
            Operation::Revoke => Access::Org(&self.revoker),
            Operation::Verify | Operation::Exists | Operation::Read | Operation::QueryAll => {
                Access::Open
            }
        }
    }

    /// Checks that `caller` may perform `op`.
    ///
    /// The caller's identity is only resolved for restricted operations, and
    /// failing to resolve it is an error on its own.
    pub fn authorize(&self, op: Operation, caller: &impl CallerIdentity) -> RegistryResult<()> {
        let Access::Org(required) = self.access(op) else {
            return Ok(());
        };

        let org = caller.msp_id()?;
        if org != *required {
            warn!(%op, caller = %org, %required, "rejecting unauthorized caller");
            return Err(RegistryError::Unauthorized {
                op,
                caller: org,
                required: required.clone(),
            });
        }

        trace!(%op, caller = %org, "caller authorized");
        Ok(())
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self {
            issuer: OrgId::new(DEFAULT_ISSUER_ORG),
            revoker: OrgId::new(DEFAULT_REVOKER_ORG),
        }
    }
}
