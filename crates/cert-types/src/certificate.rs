#[cfg(feature = "arbitrary")]
use arbitrary::Arbitrary;
use serde::{Deserialize, Serialize};

use crate::CertificateId;

/// Inputs to certificate issuance.
///
/// Field order matches the positional argument order callers use when
/// invoking issuance by name.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "arbitrary", derive(Arbitrary))]
pub struct IssueArgs {
    pub id: CertificateId,
    pub student_name: String,
    pub degree: String,
    pub issuer: String,
    pub issue_date: String,
    pub cert_hash: String,
}

impl IssueArgs {
    pub fn new(
        id: impl Into<CertificateId>,
        student_name: impl Into<String>,
        degree: impl Into<String>,
        issuer: impl Into<String>,
        issue_date: impl Into<String>,
        cert_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            student_name: student_name.into(),
            degree: degree.into(),
            issuer: issuer.into(),
            issue_date: issue_date.into(),
            cert_hash: cert_hash.into(),
        }
    }

    /// Returns true if any of the six inputs is the empty string.
    ///
    /// Only emptiness is checked.  Whitespace is a value like any other.
    pub fn has_empty_field(&self) -> bool {
        self.id.is_empty()
            || self.student_name.is_empty()
            || self.degree.is_empty()
            || self.issuer.is_empty()
            || self.issue_date.is_empty()
            || self.cert_hash.is_empty()
    }
}

/// A certificate as stored on the ledger.
///
/// The descriptive fields and the hash are fixed at construction and have no
/// setters.  The revocation flag can only be raised, via [`Self::revoke`].
///
/// The serde field names are the on-ledger record keys and must not change.
/// Missing keys decode to their zero value and unknown keys are ignored, so
/// records written by older encoders still load.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(Arbitrary))]
#[serde(default)]
pub struct Certificate {
    #[serde(rename = "ID")]
    id: CertificateId,

    #[serde(rename = "StudentName")]
    student_name: String,

    #[serde(rename = "Degree")]
    degree: String,

    #[serde(rename = "Issuer")]
    issuer: String,

    #[serde(rename = "IssueDate")]
    issue_date: String,

    #[serde(rename = "CertHash")]
    cert_hash: String,

    #[serde(rename = "IsRevoked")]
    is_revoked: bool,
}

impl Certificate {
    /// Constructs a freshly issued, unrevoked certificate.
    pub fn new(args: IssueArgs) -> Self {
        let IssueArgs {
            id,
            student_name,
            degree,
            issuer,
            issue_date,
            cert_hash,
        } = args;

        Self {
            id,
            student_name,
            degree,
            issuer,
            issue_date,
            cert_hash,
            is_revoked: false,
        }
    }

    pub fn id(&self) -> &CertificateId {
        &self.id
    }

    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    pub fn degree(&self) -> &str {
        &self.degree
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn issue_date(&self) -> &str {
        &self.issue_date
    }

    pub fn cert_hash(&self) -> &str {
        &self.cert_hash
    }

    pub fn is_revoked(&self) -> bool {
        self.is_revoked
    }

    /// Checks the supplied hash against the stored one.
    pub fn hash_matches(&self, cert_hash: &str) -> bool {
        self.cert_hash == cert_hash
    }

    /// Marks the certificate revoked.
    ///
    /// Returns `false` if it already was, in which case nothing changes.
    pub fn revoke(&mut self) -> bool {
        if self.is_revoked {
            return false;
        }

        self.is_revoked = true;
        true
    }
}
