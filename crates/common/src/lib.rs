//! Shared runtime plumbing for hosts embedding the registry.

pub mod logging;
