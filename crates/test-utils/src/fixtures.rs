use certreg_cert_types::IssueArgs;
use certreg_ledger_types::FixedIdentity;

/// Organization allowed to issue under the default policy.
pub const ISSUER_MSP: &str = "Org1MSP";

/// Organization allowed to revoke under the default policy.
pub const REVOKER_MSP: &str = "Org2MSP";

/// An organization with no write rights at all.
pub const OUTSIDER_MSP: &str = "Org3MSP";

pub fn issuer() -> FixedIdentity {
    FixedIdentity::new(ISSUER_MSP)
}

pub fn revoker() -> FixedIdentity {
    FixedIdentity::new(REVOKER_MSP)
}

pub fn outsider() -> FixedIdentity {
    FixedIdentity::new(OUTSIDER_MSP)
}

/// The canonical `cert-1` issuance.
pub fn sample_issue_args() -> IssueArgs {
    IssueArgs::new("cert-1", "Alice", "BSc", "Org1", "2024-01-01", "abc123")
}

/// Valid issuance inputs for `id`, with a hash derived from it.
pub fn issue_args_for(id: &str) -> IssueArgs {
    IssueArgs::new(
        id,
        format!("Student {id}"),
        "Bachelor of Computer Science",
        "Digital University",
        "2024-06-30",
        format!("hash-of-{id}"),
    )
}
