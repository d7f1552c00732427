use arbitrary::{Arbitrary, Unstructured};
use certreg_cert_types::{Certificate, IssueArgs};
use rand_core::{OsRng, RngCore};

/// Large enough for a handful of string fields.
const ARB_GEN_LEN: usize = 4096;

const MAX_ATTEMPTS: usize = 16;

/// Produces arbitrary values from OS randomness.
#[derive(Debug)]
pub struct ArbitraryGenerator {
    buf: Vec<u8>,
}

impl Default for ArbitraryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ArbitraryGenerator {
    pub fn new() -> Self {
        Self::new_with_size(ARB_GEN_LEN)
    }

    pub fn new_with_size(s: usize) -> Self {
        Self { buf: vec![0u8; s] }
    }

    /// Generates an arbitrary instance of `T`.
    ///
    /// # Panics
    ///
    /// If no instance could be built from several fresh buffers.
    pub fn generate<T>(&mut self) -> T
    where
        T: for<'a> Arbitrary<'a>,
    {
        self.generate_with(|u| T::arbitrary(u))
    }

    /// Generates issuance inputs with every field non-empty.
    pub fn generate_issue_args(&mut self) -> IssueArgs {
        self.generate_with(|u| {
            Ok(IssueArgs::new(
                non_empty_string(u)?,
                non_empty_string(u)?,
                non_empty_string(u)?,
                non_empty_string(u)?,
                non_empty_string(u)?,
                non_empty_string(u)?,
            ))
        })
    }

    /// Generates a fresh, unrevoked certificate with every field non-empty.
    pub fn generate_certificate(&mut self) -> Certificate {
        Certificate::new(self.generate_issue_args())
    }

    fn generate_with<T>(
        &mut self,
        build: impl Fn(&mut Unstructured<'_>) -> arbitrary::Result<T>,
    ) -> T {
        let mut last_error = None;

        for _ in 0..MAX_ATTEMPTS {
            OsRng.fill_bytes(&mut self.buf);
            let mut u = Unstructured::new(&self.buf);
            match build(&mut u) {
                Ok(value) => return value,
                Err(err) => last_error = Some(err),
            }
        }

        let error_msg = last_error
            .map(|err| err.to_string())
            .unwrap_or_else(|| "no attempts made".to_string());
        panic!("Failed to generate arbitrary instance: {error_msg}");
    }
}

/// A leading char followed by an arbitrary, possibly empty, tail.
///
/// Derived `String`s stop at the first invalid UTF-8 byte, so from random
/// input they are usually empty.
fn non_empty_string(u: &mut Unstructured<'_>) -> arbitrary::Result<String> {
    let head: char = u.arbitrary()?;
    let tail: String = u.arbitrary()?;
    Ok(format!("{head}{tail}"))
}
