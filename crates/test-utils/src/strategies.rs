use certreg_cert_types::IssueArgs;
use proptest::prelude::*;

/// Non-empty printable field contents, including whitespace-only values.
pub fn field_strategy() -> impl Strategy<Value = String> {
    "[ -~]{1,24}"
}

/// Issuance inputs with every field non-empty.
pub fn issue_args_strategy() -> impl Strategy<Value = IssueArgs> {
    (
        field_strategy(),
        field_strategy(),
        field_strategy(),
        field_strategy(),
        field_strategy(),
        field_strategy(),
    )
        .prop_map(|(id, student_name, degree, issuer, issue_date, cert_hash)| {
            IssueArgs::new(id, student_name, degree, issuer, issue_date, cert_hash)
        })
}
