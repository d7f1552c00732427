//! Ledger record encoding.
//!
//! Records are compact JSON objects keyed by the [`Certificate`] serde names,
//! in declaration order.

use thiserror::Error;

use crate::{Certificate, CertificateId};

#[derive(Debug, Error)]
pub enum RecordCodecError {
    #[error("failed to encode certificate {id}: {source}")]
    Encode {
        id: CertificateId,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode {count} certificates: {source}")]
    EncodeList {
        count: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode record at key {key:?}: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Encodes a certificate into its ledger record bytes.
pub fn encode_record(cert: &Certificate) -> Result<Vec<u8>, RecordCodecError> {
    serde_json::to_vec(cert).map_err(|source| RecordCodecError::Encode {
        id: cert.id().clone(),
        source,
    })
}

/// Encodes several certificates as one JSON array of records.
pub fn encode_records(certs: &[Certificate]) -> Result<Vec<u8>, RecordCodecError> {
    serde_json::to_vec(certs).map_err(|source| RecordCodecError::EncodeList {
        count: certs.len(),
        source,
    })
}

/// Decodes the record stored under `key`.
pub fn decode_record(key: &str, buf: &[u8]) -> Result<Certificate, RecordCodecError> {
    serde_json::from_slice(buf).map_err(|source| RecordCodecError::Decode {
        key: key.to_owned(),
        source,
    })
}
