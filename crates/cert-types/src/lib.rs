//! Certificate record types.
//!
//! This crate defines the one entity the registry manages, the academic
//! certificate, along with the identifier newtypes used to key it on the
//! ledger and to name the organizations acting on it.  It also owns the
//! ledger record encoding, which must stay field-compatible with records
//! already written by earlier deployments: the same key names and the same
//! seven fields.

mod certificate;
mod codec;
mod id;

pub use certificate::{Certificate, IssueArgs};
pub use codec::{RecordCodecError, decode_record, encode_record, encode_records};
pub use id::{CertificateId, OrgId};
