/// Result of a successful revocation request.
///
/// None of these are errors.  A record that isn't there yet may simply not
/// have become visible on this peer.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RevokeOutcome {
    /// No record under the ID.  Nothing was written.
    NotFound,

    /// The record was active and is now revoked.
    Revoked,

    /// The record was already revoked.  Nothing was written.
    AlreadyRevoked,
}

impl RevokeOutcome {
    /// Whether the ledger was written to.
    pub fn changed_state(&self) -> bool {
        matches!(self, RevokeOutcome::Revoked)
    }
}

/// Result of checking a certificate against a document hash.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum VerifyOutcome {
    NotFound,

    /// Hash matches and the certificate is not revoked.
    Valid,

    /// Stored hash differs from the supplied one.  Reported regardless of
    /// revocation.
    HashMismatch,

    /// Hash matches but the certificate has been revoked.
    Revoked,
}

impl VerifyOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, VerifyOutcome::Valid)
    }
}
