use certreg_cert_types::{CertificateId, decode_record, encode_record};
use certreg_ledger_types::LedgerScan;
use certreg_registry::{CertificateRegistry, RevokeOutcome, VerifyOutcome};
use certreg_test_utils::{
    ArbitraryGenerator, issue_args_for, issuer, outsider, revoker, sample_issue_args,
};

fn keys(entries: &[(String, Vec<u8>)]) -> Vec<&str> {
    entries.iter().map(|(k, _)| k.as_str()).collect()
}

pub fn test_get_missing(ledger: &mut impl LedgerScan) {
    assert!(ledger.get_state("cert-1").expect("test: get").is_none());
}

pub fn test_put_then_get(ledger: &mut impl LedgerScan) {
    let cert = ArbitraryGenerator::new().generate_certificate();
    let key = cert.id().as_str().to_owned();
    let buf = encode_record(&cert).expect("test: encode");

    ledger.put_state(&key, buf.clone()).expect("test: put");

    let stored = ledger
        .get_state(&key)
        .expect("test: get")
        .expect("test: present");
    assert_eq!(stored, buf);
    assert_eq!(decode_record(&key, &stored).expect("test: decode"), cert);
}

pub fn test_put_overwrites(ledger: &mut impl LedgerScan) {
    ledger
        .put_state("cert-1", b"first".to_vec())
        .expect("test: put");
    ledger
        .put_state("cert-1", b"second".to_vec())
        .expect("test: put");

    let stored = ledger.get_state("cert-1").expect("test: get");
    assert_eq!(stored.as_deref(), Some(&b"second"[..]));
    assert_eq!(ledger.scan_range("", "").expect("test: scan").len(), 1);
}

pub fn test_scan_all_in_key_order(ledger: &mut impl LedgerScan) {
    for key in ["cert-3", "cert-10", "cert-1", "cert-2"] {
        ledger
            .put_state(key, key.as_bytes().to_vec())
            .expect("test: put");
    }

    let entries = ledger.scan_range("", "").expect("test: scan");
    // byte order, so "cert-10" sorts before "cert-2"
    assert_eq!(keys(&entries), ["cert-1", "cert-10", "cert-2", "cert-3"]);
    for (k, v) in &entries {
        assert_eq!(k.as_bytes(), v.as_slice());
    }
}

pub fn test_scan_bounds(ledger: &mut impl LedgerScan) {
    for key in ["a", "b", "c", "d"] {
        ledger.put_state(key, vec![0]).expect("test: put");
    }

    let half_open = ledger.scan_range("b", "d").expect("test: scan");
    assert_eq!(keys(&half_open), ["b", "c"]);

    let from = ledger.scan_range("c", "").expect("test: scan");
    assert_eq!(keys(&from), ["c", "d"]);

    let until = ledger.scan_range("", "b").expect("test: scan");
    assert_eq!(keys(&until), ["a"]);
}

pub fn test_scan_inverted_is_empty(ledger: &mut impl LedgerScan) {
    ledger.put_state("b", vec![0]).expect("test: put");
    assert!(ledger.scan_range("c", "a").expect("test: scan").is_empty());
    assert!(ledger.scan_range("b", "b").expect("test: scan").is_empty());
}

/// Runs the whole certificate lifecycle against the backend.
pub fn test_registry_lifecycle(ledger: &mut impl LedgerScan) {
    let reg = CertificateRegistry::default();
    let id = CertificateId::new("cert-1");

    reg.issue_certificate(ledger, &issuer(), sample_issue_args())
        .expect("test: issue");
    reg.issue_certificate(ledger, &issuer(), issue_args_for("cert-2"))
        .expect("test: issue");

    let outcome = reg
        .verify_certificate(&*ledger, &outsider(), &id, "abc123")
        .expect("test: verify");
    assert_eq!(outcome, VerifyOutcome::Valid);

    let outcome = reg
        .revoke_certificate(ledger, &revoker(), &id)
        .expect("test: revoke");
    assert_eq!(outcome, RevokeOutcome::Revoked);

    let outcome = reg
        .verify_certificate(&*ledger, &outsider(), &id, "abc123")
        .expect("test: verify");
    assert_eq!(outcome, VerifyOutcome::Revoked);

    let all = reg
        .query_all_certificates(&*ledger, &outsider())
        .expect("test: query all");
    assert_eq!(all.len(), 2);
    assert!(all[0].is_revoked());
    assert!(!all[1].is_revoked());
}

#[macro_export]
macro_rules! ledger_store_tests {
    ($setup_expr:expr) => {
        #[test]
        fn test_get_missing() {
            let mut ledger = $setup_expr;
            $crate::ledger_tests::test_get_missing(&mut ledger);
        }

        #[test]
        fn test_put_then_get() {
            let mut ledger = $setup_expr;
            $crate::ledger_tests::test_put_then_get(&mut ledger);
        }

        #[test]
        fn test_put_overwrites() {
            let mut ledger = $setup_expr;
            $crate::ledger_tests::test_put_overwrites(&mut ledger);
        }

        #[test]
        fn test_scan_all_in_key_order() {
            let mut ledger = $setup_expr;
            $crate::ledger_tests::test_scan_all_in_key_order(&mut ledger);
        }

        #[test]
        fn test_scan_bounds() {
            let mut ledger = $setup_expr;
            $crate::ledger_tests::test_scan_bounds(&mut ledger);
        }

        #[test]
        fn test_scan_inverted_is_empty() {
            let mut ledger = $setup_expr;
            $crate::ledger_tests::test_scan_inverted_is_empty(&mut ledger);
        }

        #[test]
        fn test_registry_lifecycle() {
            let mut ledger = $setup_expr;
            $crate::ledger_tests::test_registry_lifecycle(&mut ledger);
        }
    };
}
