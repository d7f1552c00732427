use certreg_cert_types::{Certificate, CertificateId, IssueArgs, decode_record, encode_record};
use certreg_ledger_types::{CallerIdentity, LedgerScan, LedgerStore};
use tracing::*;

use crate::{
    AccessPolicy, Operation, RegistryError, RegistryResult, RevokeOutcome, VerifyOutcome,
};

const ALL_FIELDS_REQUIRED: &str = "all fields are required";
const ID_REQUIRED: &str = "certificate ID is required";
const ID_AND_HASH_REQUIRED: &str = "certificate ID and hash are required";

/// Entry point for all certificate operations.
///
/// Holds nothing but the authorization policy.  The ledger and the caller are
/// passed to each call, so one registry can serve any number of concurrent
/// transactions.
#[derive(Clone, Debug, Default)]
pub struct CertificateRegistry {
    policy: AccessPolicy,
}

impl CertificateRegistry {
    pub fn new(policy: AccessPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    /// Records a new certificate.
    ///
    /// Fails if the caller isn't the issuing organization, if any input is
    /// empty, or if the ID is taken.  Nothing is written unless all three
    /// checks pass.
    #[instrument(skip_all, fields(cert_id = %args.id))]
    pub fn issue_certificate(
        &self,
        ledger: &mut impl LedgerStore,
        caller: &impl CallerIdentity,
        args: IssueArgs,
    ) -> RegistryResult<()> {
        self.policy.authorize(Operation::Issue, caller)?;

        if args.has_empty_field() {
            return Err(RegistryError::Validation(ALL_FIELDS_REQUIRED));
        }

        if certificate_exists(&*ledger, &args.id)? {
            return Err(RegistryError::AlreadyExists(args.id));
        }

        let cert = Certificate::new(args);
        let buf = encode_record(&cert)?;
        ledger.put_state(cert.id().as_str(), buf)?;

        info!(issuer = %cert.issuer(), "issued certificate");
        Ok(())
    }

    /// Revokes a certificate.
    ///
    /// Revoking an unknown or already revoked certificate succeeds without
    /// touching the ledger.  Only the revocation flag ever changes.
    #[instrument(skip_all, fields(cert_id = %id))]
    pub fn revoke_certificate(
        &self,
        ledger: &mut impl LedgerStore,
        caller: &impl CallerIdentity,
        id: &CertificateId,
    ) -> RegistryResult<RevokeOutcome> {
        self.policy.authorize(Operation::Revoke, caller)?;

        if id.is_empty() {
            return Err(RegistryError::Validation(ID_REQUIRED));
        }

        let Some(mut cert) = load_certificate(&*ledger, id)? else {
            debug!("no such certificate, nothing to revoke");
            return Ok(RevokeOutcome::NotFound);
        };

        if !cert.revoke() {
            debug!("certificate already revoked");
            return Ok(RevokeOutcome::AlreadyRevoked);
        }

        let buf = encode_record(&cert)?;
        ledger.put_state(id.as_str(), buf)?;

        info!("revoked certificate");
        Ok(RevokeOutcome::Revoked)
    }

    /// Checks a certificate against the hash of the document presented for
    /// it.  Open to any caller and never writes.
    #[instrument(skip_all, fields(cert_id = %id))]
    pub fn verify_certificate(
        &self,
        ledger: &impl LedgerStore,
        caller: &impl CallerIdentity,
        id: &CertificateId,
        cert_hash: &str,
    ) -> RegistryResult<VerifyOutcome> {
        self.policy.authorize(Operation::Verify, caller)?;

        if id.is_empty() || cert_hash.is_empty() {
            return Err(RegistryError::Validation(ID_AND_HASH_REQUIRED));
        }

        let Some(cert) = load_certificate(ledger, id)? else {
            debug!("no such certificate");
            return Ok(VerifyOutcome::NotFound);
        };

        let outcome = if !cert.hash_matches(cert_hash) {
            VerifyOutcome::HashMismatch
        } else if cert.is_revoked() {
            VerifyOutcome::Revoked
        } else {
            VerifyOutcome::Valid
        };

        debug!(?outcome, "verified certificate");
        Ok(outcome)
    }

    #[instrument(skip_all, fields(cert_id = %id))]
    pub fn certificate_exists(
        &self,
        ledger: &impl LedgerStore,
        caller: &impl CallerIdentity,
        id: &CertificateId,
    ) -> RegistryResult<bool> {
        self.policy.authorize(Operation::Exists, caller)?;
        certificate_exists(ledger, id)
    }

    /// Returns the full stored record, if there is one.
    #[instrument(skip_all, fields(cert_id = %id))]
    pub fn read_certificate(
        &self,
        ledger: &impl LedgerStore,
        caller: &impl CallerIdentity,
        id: &CertificateId,
    ) -> RegistryResult<Option<Certificate>> {
        self.policy.authorize(Operation::Read, caller)?;

        if id.is_empty() {
            return Err(RegistryError::Validation(ID_REQUIRED));
        }

        load_certificate(ledger, id)
    }

    /// Returns every stored certificate in ID order.
    ///
    /// One undecodable record fails the whole query.
    #[instrument(skip_all)]
    pub fn query_all_certificates(
        &self,
        ledger: &impl LedgerScan,
        caller: &impl CallerIdentity,
    ) -> RegistryResult<Vec<Certificate>> {
        self.policy.authorize(Operation::QueryAll, caller)?;

        let entries = ledger.scan_range("", "")?;
        let certs = entries
            .iter()
            .map(|(key, buf)| decode_record(key, buf))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = certs.len(), "queried all certificates");
        Ok(certs)
    }
}

fn certificate_exists(ledger: &impl LedgerStore, id: &CertificateId) -> RegistryResult<bool> {
    Ok(ledger.get_state(id.as_str())?.is_some())
}

fn load_certificate(
    ledger: &impl LedgerStore,
    id: &CertificateId,
) -> RegistryResult<Option<Certificate>> {
    let Some(buf) = ledger.get_state(id.as_str())? else {
        return Ok(None);
    };

    Ok(Some(decode_record(id.as_str(), &buf)?))
}
