//! End-to-end checks: registry lookups feeding negotiation, the advisor
//! and the derivation paths, the way a handshake driver uses them.

use std::sync::Mutex;

use tlsuite::crypto::{
    ActiveKeyExchange, CryptoBackend, Decapsulator, Encapsulator, HandshakeSchedule, SecretBlock,
    SecretPadding,
};
#[cfg(feature = "tls12")]
use tlsuite::crypto::{LegacyPrf, MasterSecret};
use tlsuite::error::Error;
use tlsuite::negotiation::{AllowAnySuite, EphemeralEcKeys};
#[cfg(feature = "tls12")]
use tlsuite::negotiation::SecurityPolicy;
use tlsuite::suites::{AuthAlgorithm, KxAlgorithm};
#[cfg(feature = "tls12")]
use tlsuite::suites::{BulkCipher, HandshakePrf};
use tlsuite::{
    choose, CipherSuite, HandshakeSecrets, HashAlgorithm, LocalCredentials, NegotiationPolicy,
    ProtocolVersion, Registry,
};

fn init_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .try_init();
}

fn by_name(name: &str) -> &'static CipherSuite {
    Registry::get()
        .find_by_standard_name(name)
        .unwrap()
}

struct AllEcKeys;

impl EphemeralEcKeys for AllEcKeys {
    fn compatible_key_available(&self, _suite: &CipherSuite) -> bool {
        true
    }
}

fn server_creds(ec: &dyn EphemeralEcKeys) -> LocalCredentials<'_> {
    LocalCredentials {
        mask_k: KxAlgorithm::RSA | KxAlgorithm::DHE | KxAlgorithm::ECDHE | KxAlgorithm::ANY_PSK,
        mask_a: AuthAlgorithm::RSA | AuthAlgorithm::ECDSA | AuthAlgorithm::PSK,
        srp_enabled: false,
        psk_server_configured: true,
        has_certificate: true,
        ephemeral_ec: ec,
    }
}

#[derive(Default)]
struct TestBackend {
    seen_premaster: Mutex<Vec<u8>>,
}

#[cfg(feature = "tls12")]
impl LegacyPrf for TestBackend {
    fn generate_master_secret(
        &self,
        _prf: HandshakePrf,
        premaster: &[u8],
    ) -> Result<MasterSecret, Error> {
        *self.seen_premaster.lock().unwrap() = premaster.to_vec();
        let mut out = [0u8; 48];
        for (i, b) in premaster.iter().enumerate() {
            out[i % 48] = out[i % 48].wrapping_add(*b);
        }
        Ok(MasterSecret::new(out))
    }
}

impl HandshakeSchedule for TestBackend {
    fn early_secret(&self, digest: HashAlgorithm) -> Result<SecretBlock, Error> {
        let len = if digest == HashAlgorithm::SHA384 { 48 } else { 32 };
        Ok(SecretBlock::new(&vec![0x11; len]))
    }

    fn handshake_secret(
        &self,
        _digest: HashAlgorithm,
        early: &SecretBlock,
        shared: &[u8],
    ) -> Result<SecretBlock, Error> {
        *self.seen_premaster.lock().unwrap() = shared.to_vec();
        let mut buf = early.as_ref().to_vec();
        for (i, b) in shared.iter().enumerate() {
            let len = buf.len();
            buf[i % len] = buf[i % len].wrapping_add(*b);
        }
        Ok(SecretBlock::new(&buf))
    }
}

impl CryptoBackend for TestBackend {
    #[cfg(feature = "tls12")]
    fn legacy_prf(&self) -> &dyn LegacyPrf {
        self
    }

    fn handshake_schedule(&self) -> &dyn HandshakeSchedule {
        self
    }
}

/// A key agreement with a fixed shared value, recording the padding it
/// was asked for.
struct TestKx {
    shared: Vec<u8>,
    ffdhe: bool,
    asked_padding: Mutex<Option<SecretPadding>>,
}

impl TestKx {
    fn new(shared: &[u8], ffdhe: bool) -> Self {
        Self {
            shared: shared.to_vec(),
            ffdhe,
            asked_padding: Mutex::new(None),
        }
    }
}

impl ActiveKeyExchange for TestKx {
    fn shared_secret_len(&self, peer_pub_key: &[u8]) -> Result<usize, Error> {
        if peer_pub_key.is_empty() {
            return Err(Error::Crypto(tlsuite::error::CryptoError::KeyAgreementFailed));
        }
        Ok(self.shared.len())
    }

    fn complete(
        &self,
        _peer_pub_key: &[u8],
        padding: SecretPadding,
        output: &mut [u8],
    ) -> Result<usize, Error> {
        *self.asked_padding.lock().unwrap() = Some(padding);
        output[..self.shared.len()].copy_from_slice(&self.shared);
        Ok(self.shared.len())
    }

    fn is_ffdhe(&self) -> bool {
        self.ffdhe
    }
}

/// A KEM with fixed ciphertext and secret.
struct TestKem {
    ciphertext: Vec<u8>,
    secret: Vec<u8>,
}

impl Encapsulator for TestKem {
    fn output_lens(&self) -> Result<(usize, usize), Error> {
        Ok((self.ciphertext.len(), self.secret.len()))
    }

    fn encapsulate(
        &self,
        ciphertext: &mut [u8],
        secret: &mut [u8],
    ) -> Result<(usize, usize), Error> {
        ciphertext[..self.ciphertext.len()].copy_from_slice(&self.ciphertext);
        secret[..self.secret.len()].copy_from_slice(&self.secret);
        Ok((self.ciphertext.len(), self.secret.len()))
    }
}

impl Decapsulator for TestKem {
    fn secret_len(&self, ciphertext: &[u8]) -> Result<usize, Error> {
        assert_eq!(ciphertext, &self.ciphertext[..]);
        Ok(self.secret.len())
    }

    fn decapsulate(&self, _ciphertext: &[u8], secret: &mut [u8]) -> Result<usize, Error> {
        secret[..self.secret.len()].copy_from_slice(&self.secret);
        Ok(self.secret.len())
    }
}

#[test]
fn negotiate_then_derive_tls13() {
    init_logging();

    let offered = [
        by_name("TLS_AES_256_GCM_SHA384"),
        by_name("TLS_AES_128_GCM_SHA256"),
    ];
    let enabled = [
        by_name("TLS_AES_128_GCM_SHA256"),
        by_name("TLS_AES_256_GCM_SHA384"),
    ];
    let policy = NegotiationPolicy {
        suite_b: false,
        server_preference: true,
        prioritize: None,
        version: ProtocolVersion::TLSv1_3,
        is_datagram: false,
        security: &AllowAnySuite,
        certless_psk_prefers: None,
        prefer_first_ecdhe_ecdsa_match: false,
    };
    let creds = server_creds(&AllEcKeys);

    let suite = choose(&offered, &enabled, &policy, &creds).unwrap();
    assert_eq!(suite.rfc_name, Some("TLS_AES_128_GCM_SHA256"));

    let backend = TestBackend::default();
    let mut secrets = HandshakeSecrets::new(suite, ProtocolVersion::TLSv1_3, &backend);
    let kx = TestKx::new(&[3u8; 32], false);
    secrets.derive(&kx, b"peer-share", true).unwrap();

    assert!(secrets.handshake_secret().is_some());
    assert_eq!(*backend.seen_premaster.lock().unwrap(), vec![3u8; 32]);
    assert_eq!(
        *kx.asked_padding.lock().unwrap(),
        Some(SecretPadding::Unpadded)
    );
}

#[test]
fn ffdhe_under_tls13_requests_padded_output() {
    let backend = TestBackend::default();
    let suite = by_name("TLS_AES_128_GCM_SHA256");
    let mut secrets = HandshakeSecrets::new(suite, ProtocolVersion::TLSv1_3, &backend);

    let kx = TestKx::new(&[0, 0, 9, 9], true);
    secrets.derive(&kx, b"peer-share", true).unwrap();
    assert_eq!(
        *kx.asked_padding.lock().unwrap(),
        Some(SecretPadding::ZeroPadded)
    );
}

#[cfg(feature = "tls12")]
#[test]
fn ffdhe_under_tls12_stays_unpadded() {
    let backend = TestBackend::default();
    let suite = by_name("TLS_DHE_RSA_WITH_AES_128_GCM_SHA256");
    let mut secrets = HandshakeSecrets::new(suite, ProtocolVersion::TLSv1_2, &backend);

    let kx = TestKx::new(&[9u8; 16], true);
    secrets.derive(&kx, b"peer-share", true).unwrap();
    assert_eq!(
        *kx.asked_padding.lock().unwrap(),
        Some(SecretPadding::Unpadded)
    );
}

#[test]
fn encapsulate_returns_ciphertext_and_feeds_secret() {
    let backend = TestBackend::default();
    let suite = by_name("TLS_AES_128_GCM_SHA256");
    let mut secrets = HandshakeSecrets::new(suite, ProtocolVersion::TLSv1_3, &backend);

    let kem = TestKem {
        ciphertext: vec![0xc7; 64],
        secret: vec![0x3a; 32],
    };
    let ciphertext = secrets.encapsulate(&kem, true).unwrap();
    assert_eq!(ciphertext, vec![0xc7; 64]);
    assert_eq!(*backend.seen_premaster.lock().unwrap(), vec![0x3a; 32]);
    assert!(secrets.handshake_secret().is_some());
}

#[test]
fn decapsulate_recovers_the_same_secret() {
    let backend = TestBackend::default();
    let suite = by_name("TLS_AES_128_GCM_SHA256");
    let mut secrets = HandshakeSecrets::new(suite, ProtocolVersion::TLSv1_3, &backend);

    let kem = TestKem {
        ciphertext: vec![0xc7; 64],
        secret: vec![0x3a; 32],
    };
    secrets
        .decapsulate(&kem, &[0xc7; 64], false)
        .unwrap();
    let pms = secrets.take_premaster().unwrap();
    assert_eq!(&pms[..], &[0x3a; 32]);
}

#[test]
fn derive_failure_is_fatal_and_distinct_from_negotiation_failure() {
    let backend = TestBackend::default();
    let suite = by_name("TLS_AES_128_GCM_SHA256");
    let mut secrets = HandshakeSecrets::new(suite, ProtocolVersion::TLSv1_3, &backend);

    let kx = TestKx::new(&[1u8; 32], false);
    // invalid peer key surfaces as a crypto error, not an empty result
    let err = secrets.derive(&kx, b"", true).unwrap_err();
    assert!(matches!(err, Error::Crypto(_)));
}

#[cfg(feature = "tls12")]
mod tls12 {
    use super::*;

    /// For two suites differing only in PSK-vs-plain exchange, the
    /// pure-PSK "other secret" is all-zero bytes of the same length the
    /// real shared value has.
    #[test]
    fn pure_psk_other_secret_mirrors_shared_length() {
        init_logging();

        let shared = vec![0x77u8; 16];
        let psk = vec![0xaa_u8; 16];

        // real (EC)DH shared value, PSK mixed in
        let backend = TestBackend::default();
        let dhe_psk = by_name("TLS_DHE_PSK_WITH_AES_128_GCM_SHA256");
        let mut secrets = HandshakeSecrets::new(dhe_psk, ProtocolVersion::TLSv1_2, &backend);
        secrets.set_psk(psk.clone());
        let kx = TestKx::new(&shared, false);
        secrets.derive(&kx, b"peer", true).unwrap();
        let mixed_dhe = backend.seen_premaster.lock().unwrap().clone();

        // pure PSK: same layout, zeroes where the shared value was
        let backend = TestBackend::default();
        let psk_only = by_name("TLS_PSK_WITH_AES_128_GCM_SHA256");
        let mut secrets = HandshakeSecrets::new(psk_only, ProtocolVersion::TLSv1_2, &backend);
        secrets.set_psk(psk.clone());
        let kx = TestKx::new(&shared, false);
        secrets.derive(&kx, b"peer", true).unwrap();
        let mixed_psk = backend.seen_premaster.lock().unwrap().clone();

        assert_eq!(mixed_dhe.len(), mixed_psk.len());
        assert_eq!(&mixed_dhe[..2], &mixed_psk[..2]);
        assert_eq!(&mixed_dhe[2..18], &shared[..]);
        assert_eq!(&mixed_psk[2..18], &[0u8; 16]);
        assert_eq!(&mixed_dhe[18..], &mixed_psk[18..]);
    }

    #[test]
    fn full_server_negotiation_with_family_priority() {
        init_logging();

        let chacha = by_name("TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256");
        let gcm = by_name("TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256");
        let cbc = by_name("TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA");

        let policy = NegotiationPolicy {
            suite_b: false,
            server_preference: true,
            prioritize: Some(BulkCipher::ChaCha20Poly1305),
            version: ProtocolVersion::TLSv1_2,
            is_datagram: false,
            security: &AllowAnySuite,
            certless_psk_prefers: None,
            prefer_first_ecdhe_ecdsa_match: false,
        };
        let creds = server_creds(&AllEcKeys);

        // a mobile client leading with chacha wins over the server's
        // gcm-first ordering, but only because the server has chacha too
        let suite = choose(&[chacha, gcm, cbc], &[gcm, chacha, cbc], &policy, &creds).unwrap();
        assert!(std::ptr::eq(suite, chacha));
    }

    #[test]
    fn strength_floor_is_applied_to_shared_suites() {
        struct Floor(u16);
        impl SecurityPolicy for Floor {
            fn permits(&self, strength_bits: u16, _suite: &CipherSuite) -> bool {
                strength_bits >= self.0
            }
        }

        let aes128 = by_name("TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256");
        let aes256 = by_name("TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384");
        let floor = Floor(200);
        let policy = NegotiationPolicy {
            suite_b: false,
            server_preference: true,
            prioritize: None,
            version: ProtocolVersion::TLSv1_2,
            is_datagram: false,
            security: &floor,
            certless_psk_prefers: None,
            prefer_first_ecdhe_ecdsa_match: false,
        };
        let creds = server_creds(&AllEcKeys);

        let suite = choose(&[aes128, aes256], &[aes128, aes256], &policy, &creds).unwrap();
        assert!(std::ptr::eq(suite, aes256));
    }

    #[test]
    fn datagram_negotiation_respects_dtls_ranges() {
        // chacha suites are DTLS 1.2-only; CBC-SHA reaches back further
        let chacha = by_name("TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256");
        let cbc = by_name("TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA");
        let policy = NegotiationPolicy {
            suite_b: false,
            server_preference: true,
            prioritize: None,
            version: ProtocolVersion::DTLSv1_0,
            is_datagram: true,
            security: &AllowAnySuite,
            certless_psk_prefers: None,
            prefer_first_ecdhe_ecdsa_match: false,
        };
        let creds = server_creds(&AllEcKeys);

        let suite = choose(&[chacha, cbc], &[chacha, cbc], &policy, &creds).unwrap();
        assert!(std::ptr::eq(suite, cbc));
    }

    #[test]
    fn legacy_master_secret_round_trip() {
        let backend = TestBackend::default();
        let suite = by_name("TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256");
        let mut secrets = HandshakeSecrets::new(suite, ProtocolVersion::TLSv1_2, &backend);

        let kx = TestKx::new(&[0xd4; 32], false);
        secrets.derive(&kx, b"peer", true).unwrap();
        let master = secrets.master_secret().unwrap();
        assert_eq!(master.as_bytes().len(), 48);
    }
}

#[test]
fn registry_enumeration_contract() {
    let registry = Registry::get();

    // forward iteration ascends; indexed access counts from the end
    let forward: Vec<u32> = registry.legacy_iter().map(|s| s.id).collect();
    let mut indexed = Vec::new();
    for i in 0..registry.legacy_count() {
        indexed.push(registry.legacy_by_index(i).unwrap().id);
    }
    indexed.reverse();
    assert_eq!(forward, indexed);
}

#[test]
fn signaling_suites_resolve_but_are_invalid() {
    let registry = Registry::get();
    let scsv = registry.find_by_id(0x0300_00ff).unwrap();
    assert!(!scsv.valid);
    assert_eq!(scsv.wire_code(), Some([0x00, 0xff]));
}
