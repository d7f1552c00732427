//! Invocation by contract function name.
//!
//! The hosting framework hands us a function name and positional string
//! arguments, and expects an opaque payload back.

use certreg_cert_types::{Certificate, CertificateId, IssueArgs, encode_record, encode_records};
use certreg_ledger_types::{CallerIdentity, LedgerScan};
use thiserror::Error;
use tracing::*;

use crate::{CertificateRegistry, Operation, RegistryResult};

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("unknown function {0:?}")]
    UnknownFunction(String),

    #[error("{op} takes {expected} arguments, got {got}")]
    ArgCount {
        op: Operation,
        expected: usize,
        got: usize,
    },
}

/// A parsed contract invocation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ContractCall {
    Issue(IssueArgs),
    Revoke(CertificateId),
    Verify {
        id: CertificateId,
        cert_hash: String,
    },
    Exists(CertificateId),
    Read(CertificateId),
    QueryAll,
}

impl ContractCall {
    /// Parses a function name and its positional arguments.
    ///
    /// Only the function name and argument count are checked here; argument
    /// contents are validated by the operation itself.
    pub fn parse(function: &str, args: &[String]) -> Result<Self, DispatchError> {
        let op = Operation::from_function_name(function)
            .ok_or_else(|| DispatchError::UnknownFunction(function.to_owned()))?;

        let expected = arity(op);
        if args.len() != expected {
            return Err(DispatchError::ArgCount {
                op,
                expected,
                got: args.len(),
            });
        }

        let id = || CertificateId::new(args[0].clone());
        let call = match op {
            Operation::Issue => ContractCall::Issue(IssueArgs::new(
                id(),
                args[1].clone(),
                args[2].clone(),
                args[3].clone(),
                args[4].clone(),
                args[5].clone(),
            )),
            Operation::Revoke => ContractCall::Revoke(id()),
            Operation::Verify => ContractCall::Verify {
                id: id(),
                cert_hash: args[1].clone(),
            },
            Operation::Exists => ContractCall::Exists(id()),
            Operation::Read => ContractCall::Read(id()),
            Operation::QueryAll => ContractCall::QueryAll,
        };

        Ok(call)
    }

    pub fn operation(&self) -> Operation {
        match self {
            ContractCall::Issue(_) => Operation::Issue,
            ContractCall::Revoke(_) => Operation::Revoke,
            ContractCall::Verify { .. } => Operation::Verify,
            ContractCall::Exists(_) => Operation::Exists,
            ContractCall::Read(_) => Operation::Read,
            ContractCall::QueryAll => Operation::QueryAll,
        }
    }
}

fn arity(op: Operation) -> usize {
    match op {
        Operation::Issue => 6,
        Operation::Verify => 2,
        Operation::Revoke | Operation::Exists | Operation::Read => 1,
        Operation::QueryAll => 0,
    }
}

/// What a contract call returned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Response {
    Empty,
    Bool(bool),
    Certificate(Option<Certificate>),
    Certificates(Vec<Certificate>),
}

impl Response {
    /// Renders the response the way the framework returns it to clients.
    ///
    /// Booleans are `true`/`false`, records are their ledger encoding, and a
    /// missing record or a unit result is an empty payload.
    pub fn to_payload(&self) -> RegistryResult<Vec<u8>> {
        let buf = match self {
            Response::Empty | Response::Certificate(None) => Vec::new(),
            Response::Bool(b) => b.to_string().into_bytes(),
            Response::Certificate(Some(cert)) => encode_record(cert)?,
            Response::Certificates(certs) => encode_records(certs)?,
        };

        Ok(buf)
    }
}

impl CertificateRegistry {
    /// Executes a parsed call.
    pub fn invoke(
        &self,
        ledger: &mut impl LedgerScan,
        caller: &impl CallerIdentity,
        call: ContractCall,
    ) -> RegistryResult<Response> {
        let resp = match call {
            ContractCall::Issue(args) => {
                self.issue_certificate(ledger, caller, args)?;
                Response::Empty
            }
            ContractCall::Revoke(id) => {
                self.revoke_certificate(ledger, caller, &id)?;
                Response::Empty
            }
            ContractCall::Verify { id, cert_hash } => {
                let outcome = self.verify_certificate(&*ledger, caller, &id, &cert_hash)?;
                Response::Bool(outcome.is_valid())
            }
            ContractCall::Exists(id) => {
                Response::Bool(self.certificate_exists(&*ledger, caller, &id)?)
            }
            ContractCall::Read(id) => {
                Response::Certificate(self.read_certificate(&*ledger, caller, &id)?)
            }
            ContractCall::QueryAll => {
                Response::Certificates(self.query_all_certificates(&*ledger, caller)?)
            }
        };

        Ok(resp)
    }

    /// Parses, executes, and renders a call in one step.
    pub fn invoke_by_name(
        &self,
        ledger: &mut impl LedgerScan,
        caller: &impl CallerIdentity,
        function: &str,
        args: &[String],
    ) -> RegistryResult<Vec<u8>> {
        let call = ContractCall::parse(function, args)?;
        debug!(op = %call.operation(), "dispatching contract call");
        self.invoke(ledger, caller, call)?.to_payload()
    }
}
