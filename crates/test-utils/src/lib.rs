//! Test helpers for the certificate registry.
//!
//! Fixed identities for the two default organizations, canned issuance
//! inputs, proptest strategies, and an arbitrary-data generator for records.

mod arbitrary_gen;
mod fixtures;
mod strategies;

pub use arbitrary_gen::ArbitraryGenerator;
pub use fixtures::{
    ISSUER_MSP, OUTSIDER_MSP, REVOKER_MSP, issue_args_for, issuer, outsider, revoker,
    sample_issue_args,
};
pub use strategies::{field_strategy, issue_args_strategy};
