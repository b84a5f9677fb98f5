//! The process-wide cipher-suite tables.
//!
//! Three tables partition the catalog: TLS 1.3-only suites, suites for the
//! 3.x/TLS 1.0–1.2 protocols, and the signaling pseudo-suites that occupy
//! cipher-suite-shaped wire values without selecting a cipher.  The tables
//! are copied and sorted by id exactly once, on first use, and are
//! immutable afterwards; lookups by id run a binary search per table in a
//! fixed priority order.

use std::sync::OnceLock;

use crate::enums::ProtocolVersion;
use crate::suites::{
    AuthAlgorithm, BulkCipher, CipherSuite, HandshakePrf, KxAlgorithm, MacAlgorithm, SuiteFlags,
    VersionRange,
};

const TLS13_ONLY: Option<VersionRange> = Some(VersionRange::single(ProtocolVersion::TLSv1_3));
#[cfg(feature = "tls12")]
const SSL3_TO_TLS12: Option<VersionRange> = Some(VersionRange::new(
    ProtocolVersion::SSLv3,
    ProtocolVersion::TLSv1_2,
));
#[cfg(feature = "tls12")]
const TLS1_TO_TLS12: Option<VersionRange> = Some(VersionRange::new(
    ProtocolVersion::TLSv1_0,
    ProtocolVersion::TLSv1_2,
));
#[cfg(feature = "tls12")]
const TLS12_ONLY: Option<VersionRange> = Some(VersionRange::single(ProtocolVersion::TLSv1_2));
#[cfg(feature = "tls12")]
const DTLS_ANY: Option<VersionRange> = Some(VersionRange::new(
    ProtocolVersion::DTLSv0_9,
    ProtocolVersion::DTLSv1_2,
));
#[cfg(feature = "tls12")]
const DTLS12_ONLY: Option<VersionRange> = Some(VersionRange::single(ProtocolVersion::DTLSv1_2));

/// The list of available TLS 1.3 suites.
static TLS13_SUITES: &[CipherSuite] = &[
    CipherSuite {
        valid: true,
        name: "TLS_AES_128_GCM_SHA256",
        rfc_name: Some("TLS_AES_128_GCM_SHA256"),
        id: 0x0300_1301,
        kx: KxAlgorithm::ANY,
        auth: AuthAlgorithm::ANY,
        enc: BulkCipher::Aes128Gcm,
        mac: MacAlgorithm::Aead,
        tls: TLS13_ONLY,
        dtls: None,
        flags: SuiteFlags::HIGH,
        prf: HandshakePrf::DIGEST_SHA256,
        strength_bits: 128,
        algorithm_bits: 128,
    },
    CipherSuite {
        valid: true,
        name: "TLS_AES_256_GCM_SHA384",
        rfc_name: Some("TLS_AES_256_GCM_SHA384"),
        id: 0x0300_1302,
        kx: KxAlgorithm::ANY,
        auth: AuthAlgorithm::ANY,
        enc: BulkCipher::Aes256Gcm,
        mac: MacAlgorithm::Aead,
        tls: TLS13_ONLY,
        dtls: None,
        flags: SuiteFlags::HIGH,
        prf: HandshakePrf::DIGEST_SHA384,
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "TLS_CHACHA20_POLY1305_SHA256",
        rfc_name: Some("TLS_CHACHA20_POLY1305_SHA256"),
        id: 0x0300_1303,
        kx: KxAlgorithm::ANY,
        auth: AuthAlgorithm::ANY,
        enc: BulkCipher::ChaCha20Poly1305,
        mac: MacAlgorithm::Aead,
        tls: TLS13_ONLY,
        dtls: None,
        flags: SuiteFlags::HIGH,
        prf: HandshakePrf::DIGEST_SHA256,
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "TLS_AES_128_CCM_SHA256",
        rfc_name: Some("TLS_AES_128_CCM_SHA256"),
        id: 0x0300_1304,
        kx: KxAlgorithm::ANY,
        auth: AuthAlgorithm::ANY,
        enc: BulkCipher::Aes128Ccm,
        mac: MacAlgorithm::Aead,
        tls: TLS13_ONLY,
        dtls: None,
        flags: SuiteFlags::NOT_DEFAULT.union(SuiteFlags::HIGH),
        prf: HandshakePrf::DIGEST_SHA256,
        strength_bits: 128,
        algorithm_bits: 128,
    },
    CipherSuite {
        valid: true,
        name: "TLS_AES_128_CCM_8_SHA256",
        rfc_name: Some("TLS_AES_128_CCM_8_SHA256"),
        id: 0x0300_1305,
        kx: KxAlgorithm::ANY,
        auth: AuthAlgorithm::ANY,
        enc: BulkCipher::Aes128Ccm8,
        mac: MacAlgorithm::Aead,
        tls: TLS13_ONLY,
        dtls: None,
        flags: SuiteFlags::NOT_DEFAULT.union(SuiteFlags::HIGH),
        prf: HandshakePrf::DIGEST_SHA256,
        strength_bits: 128,
        algorithm_bits: 128,
    },
];

/// The list of available 3.x/TLS 1.0–1.2 suites.
#[cfg(feature = "tls12")]
static LEGACY_SUITES: &[CipherSuite] = &[
    CipherSuite {
        valid: true,
        name: "NULL-SHA",
        rfc_name: Some("TLS_RSA_WITH_NULL_SHA"),
        id: 0x0300_0002,
        kx: KxAlgorithm::RSA,
        auth: AuthAlgorithm::RSA,
        enc: BulkCipher::Null,
        mac: MacAlgorithm::Sha1,
        tls: SSL3_TO_TLS12,
        dtls: DTLS_ANY,
        flags: SuiteFlags::STRONG_NONE.union(SuiteFlags::FIPS),
        prf: HandshakePrf::DEFAULT,
        strength_bits: 0,
        algorithm_bits: 0,
    },
    CipherSuite {
        valid: true,
        name: "PSK-NULL-SHA",
        rfc_name: Some("TLS_PSK_WITH_NULL_SHA"),
        id: 0x0300_002c,
        kx: KxAlgorithm::PSK,
        auth: AuthAlgorithm::PSK,
        enc: BulkCipher::Null,
        mac: MacAlgorithm::Sha1,
        tls: SSL3_TO_TLS12,
        dtls: DTLS_ANY,
        flags: SuiteFlags::STRONG_NONE.union(SuiteFlags::FIPS),
        prf: HandshakePrf::DEFAULT,
        strength_bits: 0,
        algorithm_bits: 0,
    },
    CipherSuite {
        valid: true,
        name: "AES128-SHA",
        rfc_name: Some("TLS_RSA_WITH_AES_128_CBC_SHA"),
        id: 0x0300_002f,
        kx: KxAlgorithm::RSA,
        auth: AuthAlgorithm::RSA,
        enc: BulkCipher::Aes128,
        mac: MacAlgorithm::Sha1,
        tls: SSL3_TO_TLS12,
        dtls: DTLS_ANY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::DEFAULT,
        strength_bits: 128,
        algorithm_bits: 128,
    },
    CipherSuite {
        valid: true,
        name: "DHE-RSA-AES128-SHA",
        rfc_name: Some("TLS_DHE_RSA_WITH_AES_128_CBC_SHA"),
        id: 0x0300_0033,
        kx: KxAlgorithm::DHE,
        auth: AuthAlgorithm::RSA,
        enc: BulkCipher::Aes128,
        mac: MacAlgorithm::Sha1,
        tls: SSL3_TO_TLS12,
        dtls: DTLS_ANY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::DEFAULT,
        strength_bits: 128,
        algorithm_bits: 128,
    },
    CipherSuite {
        valid: true,
        name: "ADH-AES128-SHA",
        rfc_name: Some("TLS_DH_anon_WITH_AES_128_CBC_SHA"),
        id: 0x0300_0034,
        kx: KxAlgorithm::DHE,
        auth: AuthAlgorithm::ANON,
        enc: BulkCipher::Aes128,
        mac: MacAlgorithm::Sha1,
        tls: SSL3_TO_TLS12,
        dtls: DTLS_ANY,
        flags: SuiteFlags::NOT_DEFAULT
            .union(SuiteFlags::HIGH)
            .union(SuiteFlags::FIPS),
        prf: HandshakePrf::DEFAULT,
        strength_bits: 128,
        algorithm_bits: 128,
    },
    CipherSuite {
        valid: true,
        name: "AES256-SHA",
        rfc_name: Some("TLS_RSA_WITH_AES_256_CBC_SHA"),
        id: 0x0300_0035,
        kx: KxAlgorithm::RSA,
        auth: AuthAlgorithm::RSA,
        enc: BulkCipher::Aes256,
        mac: MacAlgorithm::Sha1,
        tls: SSL3_TO_TLS12,
        dtls: DTLS_ANY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::DEFAULT,
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "DHE-RSA-AES256-SHA",
        rfc_name: Some("TLS_DHE_RSA_WITH_AES_256_CBC_SHA"),
        id: 0x0300_0039,
        kx: KxAlgorithm::DHE,
        auth: AuthAlgorithm::RSA,
        enc: BulkCipher::Aes256,
        mac: MacAlgorithm::Sha1,
        tls: SSL3_TO_TLS12,
        dtls: DTLS_ANY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::DEFAULT,
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "NULL-SHA256",
        rfc_name: Some("TLS_RSA_WITH_NULL_SHA256"),
        id: 0x0300_003b,
        kx: KxAlgorithm::RSA,
        auth: AuthAlgorithm::RSA,
        enc: BulkCipher::Null,
        mac: MacAlgorithm::Sha256,
        tls: TLS12_ONLY,
        dtls: DTLS12_ONLY,
        flags: SuiteFlags::STRONG_NONE.union(SuiteFlags::FIPS),
        prf: HandshakePrf::SHA256,
        strength_bits: 0,
        algorithm_bits: 0,
    },
    CipherSuite {
        valid: true,
        name: "AES128-SHA256",
        rfc_name: Some("TLS_RSA_WITH_AES_128_CBC_SHA256"),
        id: 0x0300_003c,
        kx: KxAlgorithm::RSA,
        auth: AuthAlgorithm::RSA,
        enc: BulkCipher::Aes128,
        mac: MacAlgorithm::Sha256,
        tls: TLS12_ONLY,
        dtls: DTLS12_ONLY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::SHA256,
        strength_bits: 128,
        algorithm_bits: 128,
    },
    CipherSuite {
        valid: true,
        name: "AES256-SHA256",
        rfc_name: Some("TLS_RSA_WITH_AES_256_CBC_SHA256"),
        id: 0x0300_003d,
        kx: KxAlgorithm::RSA,
        auth: AuthAlgorithm::RSA,
        enc: BulkCipher::Aes256,
        mac: MacAlgorithm::Sha256,
        tls: TLS12_ONLY,
        dtls: DTLS12_ONLY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::SHA256,
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "DHE-RSA-AES128-SHA256",
        rfc_name: Some("TLS_DHE_RSA_WITH_AES_128_CBC_SHA256"),
        id: 0x0300_0067,
        kx: KxAlgorithm::DHE,
        auth: AuthAlgorithm::RSA,
        enc: BulkCipher::Aes128,
        mac: MacAlgorithm::Sha256,
        tls: TLS12_ONLY,
        dtls: DTLS12_ONLY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::SHA256,
        strength_bits: 128,
        algorithm_bits: 128,
    },
    CipherSuite {
        valid: true,
        name: "DHE-RSA-AES256-SHA256",
        rfc_name: Some("TLS_DHE_RSA_WITH_AES_256_CBC_SHA256"),
        id: 0x0300_006b,
        kx: KxAlgorithm::DHE,
        auth: AuthAlgorithm::RSA,
        enc: BulkCipher::Aes256,
        mac: MacAlgorithm::Sha256,
        tls: TLS12_ONLY,
        dtls: DTLS12_ONLY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::SHA256,
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "PSK-AES128-CBC-SHA",
        rfc_name: Some("TLS_PSK_WITH_AES_128_CBC_SHA"),
        id: 0x0300_008c,
        kx: KxAlgorithm::PSK,
        auth: AuthAlgorithm::PSK,
        enc: BulkCipher::Aes128,
        mac: MacAlgorithm::Sha1,
        tls: SSL3_TO_TLS12,
        dtls: DTLS_ANY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::DEFAULT,
        strength_bits: 128,
        algorithm_bits: 128,
    },
    CipherSuite {
        valid: true,
        name: "DHE-PSK-AES128-CBC-SHA",
        rfc_name: Some("TLS_DHE_PSK_WITH_AES_128_CBC_SHA"),
        id: 0x0300_0090,
        kx: KxAlgorithm::DHE_PSK,
        auth: AuthAlgorithm::PSK,
        enc: BulkCipher::Aes128,
        mac: MacAlgorithm::Sha1,
        tls: SSL3_TO_TLS12,
        dtls: DTLS_ANY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::DEFAULT,
        strength_bits: 128,
        algorithm_bits: 128,
    },
    CipherSuite {
        valid: true,
        name: "RSA-PSK-AES128-CBC-SHA",
        rfc_name: Some("TLS_RSA_PSK_WITH_AES_128_CBC_SHA"),
        id: 0x0300_0094,
        kx: KxAlgorithm::RSA_PSK,
        auth: AuthAlgorithm::RSA,
        enc: BulkCipher::Aes128,
        mac: MacAlgorithm::Sha1,
        tls: SSL3_TO_TLS12,
        dtls: DTLS_ANY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::DEFAULT,
        strength_bits: 128,
        algorithm_bits: 128,
    },
    CipherSuite {
        valid: true,
        name: "AES128-GCM-SHA256",
        rfc_name: Some("TLS_RSA_WITH_AES_128_GCM_SHA256"),
        id: 0x0300_009c,
        kx: KxAlgorithm::RSA,
        auth: AuthAlgorithm::RSA,
        enc: BulkCipher::Aes128Gcm,
        mac: MacAlgorithm::Aead,
        tls: TLS12_ONLY,
        dtls: DTLS12_ONLY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::SHA256,
        strength_bits: 128,
        algorithm_bits: 128,
    },
    CipherSuite {
        valid: true,
        name: "AES256-GCM-SHA384",
        rfc_name: Some("TLS_RSA_WITH_AES_256_GCM_SHA384"),
        id: 0x0300_009d,
        kx: KxAlgorithm::RSA,
        auth: AuthAlgorithm::RSA,
        enc: BulkCipher::Aes256Gcm,
        mac: MacAlgorithm::Aead,
        tls: TLS12_ONLY,
        dtls: DTLS12_ONLY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::SHA384,
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "DHE-RSA-AES128-GCM-SHA256",
        rfc_name: Some("TLS_DHE_RSA_WITH_AES_128_GCM_SHA256"),
        id: 0x0300_009e,
        kx: KxAlgorithm::DHE,
        auth: AuthAlgorithm::RSA,
        enc: BulkCipher::Aes128Gcm,
        mac: MacAlgorithm::Aead,
        tls: TLS12_ONLY,
        dtls: DTLS12_ONLY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::SHA256,
        strength_bits: 128,
        algorithm_bits: 128,
    },
    CipherSuite {
        valid: true,
        name: "DHE-RSA-AES256-GCM-SHA384",
        rfc_name: Some("TLS_DHE_RSA_WITH_AES_256_GCM_SHA384"),
        id: 0x0300_009f,
        kx: KxAlgorithm::DHE,
        auth: AuthAlgorithm::RSA,
        enc: BulkCipher::Aes256Gcm,
        mac: MacAlgorithm::Aead,
        tls: TLS12_ONLY,
        dtls: DTLS12_ONLY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::SHA384,
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "DHE-DSS-AES128-GCM-SHA256",
        rfc_name: Some("TLS_DHE_DSS_WITH_AES_128_GCM_SHA256"),
        id: 0x0300_00a2,
        kx: KxAlgorithm::DHE,
        auth: AuthAlgorithm::DSS,
        enc: BulkCipher::Aes128Gcm,
        mac: MacAlgorithm::Aead,
        tls: TLS12_ONLY,
        dtls: DTLS12_ONLY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::SHA256,
        strength_bits: 128,
        algorithm_bits: 128,
    },
    CipherSuite {
        valid: true,
        name: "ADH-AES128-GCM-SHA256",
        rfc_name: Some("TLS_DH_anon_WITH_AES_128_GCM_SHA256"),
        id: 0x0300_00a6,
        kx: KxAlgorithm::DHE,
        auth: AuthAlgorithm::ANON,
        enc: BulkCipher::Aes128Gcm,
        mac: MacAlgorithm::Aead,
        tls: TLS12_ONLY,
        dtls: DTLS12_ONLY,
        flags: SuiteFlags::NOT_DEFAULT
            .union(SuiteFlags::HIGH)
            .union(SuiteFlags::FIPS),
        prf: HandshakePrf::SHA256,
        strength_bits: 128,
        algorithm_bits: 128,
    },
    CipherSuite {
        valid: true,
        name: "PSK-AES128-GCM-SHA256",
        rfc_name: Some("TLS_PSK_WITH_AES_128_GCM_SHA256"),
        id: 0x0300_00a8,
        kx: KxAlgorithm::PSK,
        auth: AuthAlgorithm::PSK,
        enc: BulkCipher::Aes128Gcm,
        mac: MacAlgorithm::Aead,
        tls: TLS12_ONLY,
        dtls: DTLS12_ONLY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::SHA256,
        strength_bits: 128,
        algorithm_bits: 128,
    },
    CipherSuite {
        valid: true,
        name: "PSK-AES256-GCM-SHA384",
        rfc_name: Some("TLS_PSK_WITH_AES_256_GCM_SHA384"),
        id: 0x0300_00a9,
        kx: KxAlgorithm::PSK,
        auth: AuthAlgorithm::PSK,
        enc: BulkCipher::Aes256Gcm,
        mac: MacAlgorithm::Aead,
        tls: TLS12_ONLY,
        dtls: DTLS12_ONLY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::SHA384,
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "DHE-PSK-AES128-GCM-SHA256",
        rfc_name: Some("TLS_DHE_PSK_WITH_AES_128_GCM_SHA256"),
        id: 0x0300_00aa,
        kx: KxAlgorithm::DHE_PSK,
        auth: AuthAlgorithm::PSK,
        enc: BulkCipher::Aes128Gcm,
        mac: MacAlgorithm::Aead,
        tls: TLS12_ONLY,
        dtls: DTLS12_ONLY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::SHA256,
        strength_bits: 128,
        algorithm_bits: 128,
    },
    CipherSuite {
        valid: true,
        name: "RSA-PSK-AES128-GCM-SHA256",
        rfc_name: Some("TLS_RSA_PSK_WITH_AES_128_GCM_SHA256"),
        id: 0x0300_00ac,
        kx: KxAlgorithm::RSA_PSK,
        auth: AuthAlgorithm::RSA,
        enc: BulkCipher::Aes128Gcm,
        mac: MacAlgorithm::Aead,
        tls: TLS12_ONLY,
        dtls: DTLS12_ONLY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::SHA256,
        strength_bits: 128,
        algorithm_bits: 128,
    },
    CipherSuite {
        valid: true,
        name: "ECDHE-ECDSA-AES128-SHA",
        rfc_name: Some("TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA"),
        id: 0x0300_c009,
        kx: KxAlgorithm::ECDHE,
        auth: AuthAlgorithm::ECDSA,
        enc: BulkCipher::Aes128,
        mac: MacAlgorithm::Sha1,
        tls: TLS1_TO_TLS12,
        dtls: DTLS_ANY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::DEFAULT,
        strength_bits: 128,
        algorithm_bits: 128,
    },
    CipherSuite {
        valid: true,
        name: "ECDHE-ECDSA-AES256-SHA",
        rfc_name: Some("TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA"),
        id: 0x0300_c00a,
        kx: KxAlgorithm::ECDHE,
        auth: AuthAlgorithm::ECDSA,
        enc: BulkCipher::Aes256,
        mac: MacAlgorithm::Sha1,
        tls: TLS1_TO_TLS12,
        dtls: DTLS_ANY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::DEFAULT,
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "ECDHE-RSA-AES128-SHA",
        rfc_name: Some("TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA"),
        id: 0x0300_c013,
        kx: KxAlgorithm::ECDHE,
        auth: AuthAlgorithm::RSA,
        enc: BulkCipher::Aes128,
        mac: MacAlgorithm::Sha1,
        tls: TLS1_TO_TLS12,
        dtls: DTLS_ANY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::DEFAULT,
        strength_bits: 128,
        algorithm_bits: 128,
    },
    CipherSuite {
        valid: true,
        name: "ECDHE-RSA-AES256-SHA",
        rfc_name: Some("TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA"),
        id: 0x0300_c014,
        kx: KxAlgorithm::ECDHE,
        auth: AuthAlgorithm::RSA,
        enc: BulkCipher::Aes256,
        mac: MacAlgorithm::Sha1,
        tls: TLS1_TO_TLS12,
        dtls: DTLS_ANY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::DEFAULT,
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "SRP-AES-128-CBC-SHA",
        rfc_name: Some("TLS_SRP_SHA_WITH_AES_128_CBC_SHA"),
        id: 0x0300_c01d,
        kx: KxAlgorithm::SRP,
        auth: AuthAlgorithm::SRP,
        enc: BulkCipher::Aes128,
        mac: MacAlgorithm::Sha1,
        tls: SSL3_TO_TLS12,
        dtls: DTLS_ANY,
        flags: SuiteFlags::HIGH,
        prf: HandshakePrf::DEFAULT,
        strength_bits: 128,
        algorithm_bits: 128,
    },
    CipherSuite {
        valid: true,
        name: "SRP-RSA-AES-128-CBC-SHA",
        rfc_name: Some("TLS_SRP_SHA_RSA_WITH_AES_128_CBC_SHA"),
        id: 0x0300_c01e,
        kx: KxAlgorithm::SRP,
        auth: AuthAlgorithm::RSA,
        enc: BulkCipher::Aes128,
        mac: MacAlgorithm::Sha1,
        tls: SSL3_TO_TLS12,
        dtls: DTLS_ANY,
        flags: SuiteFlags::HIGH,
        prf: HandshakePrf::DEFAULT,
        strength_bits: 128,
        algorithm_bits: 128,
    },
    CipherSuite {
        valid: true,
        name: "SRP-DSS-AES-128-CBC-SHA",
        rfc_name: Some("TLS_SRP_SHA_DSS_WITH_AES_128_CBC_SHA"),
        id: 0x0300_c01f,
        kx: KxAlgorithm::SRP,
        auth: AuthAlgorithm::DSS,
        enc: BulkCipher::Aes128,
        mac: MacAlgorithm::Sha1,
        tls: SSL3_TO_TLS12,
        dtls: DTLS_ANY,
        flags: SuiteFlags::NOT_DEFAULT.union(SuiteFlags::HIGH),
        prf: HandshakePrf::DEFAULT,
        strength_bits: 128,
        algorithm_bits: 128,
    },
    CipherSuite {
        valid: true,
        name: "ECDHE-ECDSA-AES128-SHA256",
        rfc_name: Some("TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA256"),
        id: 0x0300_c023,
        kx: KxAlgorithm::ECDHE,
        auth: AuthAlgorithm::ECDSA,
        enc: BulkCipher::Aes128,
        mac: MacAlgorithm::Sha256,
        tls: TLS12_ONLY,
        dtls: DTLS12_ONLY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::SHA256,
        strength_bits: 128,
        algorithm_bits: 128,
    },
    CipherSuite {
        valid: true,
        name: "ECDHE-ECDSA-AES256-SHA384",
        rfc_name: Some("TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA384"),
        id: 0x0300_c024,
        kx: KxAlgorithm::ECDHE,
        auth: AuthAlgorithm::ECDSA,
        enc: BulkCipher::Aes256,
        mac: MacAlgorithm::Sha384,
        tls: TLS12_ONLY,
        dtls: DTLS12_ONLY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::SHA384,
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "ECDHE-RSA-AES128-SHA256",
        rfc_name: Some("TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA256"),
        id: 0x0300_c027,
        kx: KxAlgorithm::ECDHE,
        auth: AuthAlgorithm::RSA,
        enc: BulkCipher::Aes128,
        mac: MacAlgorithm::Sha256,
        tls: TLS12_ONLY,
        dtls: DTLS12_ONLY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::SHA256,
        strength_bits: 128,
        algorithm_bits: 128,
    },
    CipherSuite {
        valid: true,
        name: "ECDHE-RSA-AES256-SHA384",
        rfc_name: Some("TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA384"),
        id: 0x0300_c028,
        kx: KxAlgorithm::ECDHE,
        auth: AuthAlgorithm::RSA,
        enc: BulkCipher::Aes256,
        mac: MacAlgorithm::Sha384,
        tls: TLS12_ONLY,
        dtls: DTLS12_ONLY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::SHA384,
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "ECDHE-ECDSA-AES128-GCM-SHA256",
        rfc_name: Some("TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256"),
        id: 0x0300_c02b,
        kx: KxAlgorithm::ECDHE,
        auth: AuthAlgorithm::ECDSA,
        enc: BulkCipher::Aes128Gcm,
        mac: MacAlgorithm::Aead,
        tls: TLS12_ONLY,
        dtls: DTLS12_ONLY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::SHA256,
        strength_bits: 128,
        algorithm_bits: 128,
    },
    CipherSuite {
        valid: true,
        name: "ECDHE-ECDSA-AES256-GCM-SHA384",
        rfc_name: Some("TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384"),
        id: 0x0300_c02c,
        kx: KxAlgorithm::ECDHE,
        auth: AuthAlgorithm::ECDSA,
        enc: BulkCipher::Aes256Gcm,
        mac: MacAlgorithm::Aead,
        tls: TLS12_ONLY,
        dtls: DTLS12_ONLY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::SHA384,
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "ECDHE-RSA-AES128-GCM-SHA256",
        rfc_name: Some("TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256"),
        id: 0x0300_c02f,
        kx: KxAlgorithm::ECDHE,
        auth: AuthAlgorithm::RSA,
        enc: BulkCipher::Aes128Gcm,
        mac: MacAlgorithm::Aead,
        tls: TLS12_ONLY,
        dtls: DTLS12_ONLY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::SHA256,
        strength_bits: 128,
        algorithm_bits: 128,
    },
    CipherSuite {
        valid: true,
        name: "ECDHE-RSA-AES256-GCM-SHA384",
        rfc_name: Some("TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384"),
        id: 0x0300_c030,
        kx: KxAlgorithm::ECDHE,
        auth: AuthAlgorithm::RSA,
        enc: BulkCipher::Aes256Gcm,
        mac: MacAlgorithm::Aead,
        tls: TLS12_ONLY,
        dtls: DTLS12_ONLY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::SHA384,
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "ECDHE-PSK-AES128-CBC-SHA",
        rfc_name: Some("TLS_ECDHE_PSK_WITH_AES_128_CBC_SHA"),
        id: 0x0300_c035,
        kx: KxAlgorithm::ECDHE_PSK,
        auth: AuthAlgorithm::PSK,
        enc: BulkCipher::Aes128,
        mac: MacAlgorithm::Sha1,
        tls: TLS1_TO_TLS12,
        dtls: DTLS_ANY,
        flags: SuiteFlags::HIGH.union(SuiteFlags::FIPS),
        prf: HandshakePrf::DEFAULT,
        strength_bits: 128,
        algorithm_bits: 128,
    },
    CipherSuite {
        valid: true,
        name: "ECDHE-RSA-CHACHA20-POLY1305",
        rfc_name: Some("TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256"),
        id: 0x0300_cca8,
        kx: KxAlgorithm::ECDHE,
        auth: AuthAlgorithm::RSA,
        enc: BulkCipher::ChaCha20Poly1305,
        mac: MacAlgorithm::Aead,
        tls: TLS12_ONLY,
        dtls: DTLS12_ONLY,
        flags: SuiteFlags::HIGH,
        prf: HandshakePrf::SHA256,
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "ECDHE-ECDSA-CHACHA20-POLY1305",
        rfc_name: Some("TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256"),
        id: 0x0300_cca9,
        kx: KxAlgorithm::ECDHE,
        auth: AuthAlgorithm::ECDSA,
        enc: BulkCipher::ChaCha20Poly1305,
        mac: MacAlgorithm::Aead,
        tls: TLS12_ONLY,
        dtls: DTLS12_ONLY,
        flags: SuiteFlags::HIGH,
        prf: HandshakePrf::SHA256,
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "DHE-RSA-CHACHA20-POLY1305",
        rfc_name: Some("TLS_DHE_RSA_WITH_CHACHA20_POLY1305_SHA256"),
        id: 0x0300_ccaa,
        kx: KxAlgorithm::DHE,
        auth: AuthAlgorithm::RSA,
        enc: BulkCipher::ChaCha20Poly1305,
        mac: MacAlgorithm::Aead,
        tls: TLS12_ONLY,
        dtls: DTLS12_ONLY,
        flags: SuiteFlags::HIGH,
        prf: HandshakePrf::SHA256,
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "PSK-CHACHA20-POLY1305",
        rfc_name: Some("TLS_PSK_WITH_CHACHA20_POLY1305_SHA256"),
        id: 0x0300_ccab,
        kx: KxAlgorithm::PSK,
        auth: AuthAlgorithm::PSK,
        enc: BulkCipher::ChaCha20Poly1305,
        mac: MacAlgorithm::Aead,
        tls: TLS12_ONLY,
        dtls: DTLS12_ONLY,
        flags: SuiteFlags::HIGH,
        prf: HandshakePrf::SHA256,
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "ECDHE-PSK-CHACHA20-POLY1305",
        rfc_name: Some("TLS_ECDHE_PSK_WITH_CHACHA20_POLY1305_SHA256"),
        id: 0x0300_ccac,
        kx: KxAlgorithm::ECDHE_PSK,
        auth: AuthAlgorithm::PSK,
        enc: BulkCipher::ChaCha20Poly1305,
        mac: MacAlgorithm::Aead,
        tls: TLS12_ONLY,
        dtls: DTLS12_ONLY,
        flags: SuiteFlags::HIGH,
        prf: HandshakePrf::SHA256,
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "DHE-PSK-CHACHA20-POLY1305",
        rfc_name: Some("TLS_DHE_PSK_WITH_CHACHA20_POLY1305_SHA256"),
        id: 0x0300_ccad,
        kx: KxAlgorithm::DHE_PSK,
        auth: AuthAlgorithm::PSK,
        enc: BulkCipher::ChaCha20Poly1305,
        mac: MacAlgorithm::Aead,
        tls: TLS12_ONLY,
        dtls: DTLS12_ONLY,
        flags: SuiteFlags::HIGH,
        prf: HandshakePrf::SHA256,
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "RSA-PSK-CHACHA20-POLY1305",
        rfc_name: Some("TLS_RSA_PSK_WITH_CHACHA20_POLY1305_SHA256"),
        id: 0x0300_ccae,
        kx: KxAlgorithm::RSA_PSK,
        auth: AuthAlgorithm::RSA,
        enc: BulkCipher::ChaCha20Poly1305,
        mac: MacAlgorithm::Aead,
        tls: TLS12_ONLY,
        dtls: DTLS12_ONLY,
        flags: SuiteFlags::HIGH,
        prf: HandshakePrf::SHA256,
        strength_bits: 256,
        algorithm_bits: 256,
    },
];

/// The GOST suites, both algorithm generations.
#[cfg(all(feature = "tls12", feature = "gost"))]
static GOST_SUITES: &[CipherSuite] = &[
    CipherSuite {
        valid: true,
        name: "GOST2001-GOST89-GOST89",
        rfc_name: Some("TLS_GOSTR341001_WITH_28147_CNT_IMIT"),
        id: 0x0300_0081,
        kx: KxAlgorithm::GOST,
        auth: AuthAlgorithm::GOST01,
        enc: BulkCipher::Gost89Cnt,
        mac: MacAlgorithm::Gost89,
        tls: TLS1_TO_TLS12,
        dtls: None,
        flags: SuiteFlags::HIGH,
        prf: HandshakePrf::DIGEST_GOST94
            .union(HandshakePrf::PRF_GOST94)
            .union(HandshakePrf::STREAM_MAC),
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "GOST2001-NULL-GOST94",
        rfc_name: Some("TLS_GOSTR341001_WITH_NULL_GOSTR3411"),
        id: 0x0300_0083,
        kx: KxAlgorithm::GOST,
        auth: AuthAlgorithm::GOST01,
        enc: BulkCipher::Null,
        mac: MacAlgorithm::Gost94,
        tls: TLS1_TO_TLS12,
        dtls: None,
        flags: SuiteFlags::STRONG_NONE,
        prf: HandshakePrf::DIGEST_GOST94.union(HandshakePrf::PRF_GOST94),
        strength_bits: 0,
        algorithm_bits: 0,
    },
    CipherSuite {
        valid: true,
        name: "GOST2012-KUZNYECHIK-KUZNYECHIKOMAC",
        rfc_name: None,
        id: 0x0300_c100,
        kx: KxAlgorithm::GOST18,
        auth: AuthAlgorithm::GOST12,
        enc: BulkCipher::Kuznyechik,
        mac: MacAlgorithm::KuznyechikOmac,
        tls: TLS12_ONLY,
        dtls: None,
        flags: SuiteFlags::HIGH,
        prf: HandshakePrf::DIGEST_GOST12_256
            .union(HandshakePrf::PRF_GOST12_256)
            .union(HandshakePrf::TLSTREE),
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "GOST2012-MAGMA-MAGMAOMAC",
        rfc_name: None,
        id: 0x0300_c101,
        kx: KxAlgorithm::GOST18,
        auth: AuthAlgorithm::GOST12,
        enc: BulkCipher::Magma,
        mac: MacAlgorithm::MagmaOmac,
        tls: TLS12_ONLY,
        dtls: None,
        flags: SuiteFlags::HIGH,
        prf: HandshakePrf::DIGEST_GOST12_256
            .union(HandshakePrf::PRF_GOST12_256)
            .union(HandshakePrf::TLSTREE),
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "IANA-GOST2012-GOST8912-GOST8912",
        rfc_name: None,
        id: 0x0300_c102,
        kx: KxAlgorithm::GOST,
        auth: AuthAlgorithm::GOST12.union(AuthAlgorithm::GOST01),
        enc: BulkCipher::Gost89Cnt12,
        mac: MacAlgorithm::Gost89_12,
        tls: TLS1_TO_TLS12,
        dtls: None,
        flags: SuiteFlags::HIGH,
        prf: HandshakePrf::DIGEST_GOST12_256
            .union(HandshakePrf::PRF_GOST12_256)
            .union(HandshakePrf::STREAM_MAC),
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "LEGACY-GOST2012-GOST8912-GOST8912",
        rfc_name: None,
        id: 0x0300_ff85,
        kx: KxAlgorithm::GOST,
        auth: AuthAlgorithm::GOST12.union(AuthAlgorithm::GOST01),
        enc: BulkCipher::Gost89Cnt12,
        mac: MacAlgorithm::Gost89_12,
        tls: TLS1_TO_TLS12,
        dtls: None,
        flags: SuiteFlags::HIGH,
        prf: HandshakePrf::DIGEST_GOST12_256
            .union(HandshakePrf::PRF_GOST12_256)
            .union(HandshakePrf::STREAM_MAC),
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "GOST2012-NULL-GOST12",
        rfc_name: None,
        id: 0x0300_ff87,
        kx: KxAlgorithm::GOST,
        auth: AuthAlgorithm::GOST12.union(AuthAlgorithm::GOST01),
        enc: BulkCipher::Null,
        mac: MacAlgorithm::Gost12_256,
        tls: TLS1_TO_TLS12,
        dtls: None,
        flags: SuiteFlags::STRONG_NONE,
        prf: HandshakePrf::DIGEST_GOST12_256
            .union(HandshakePrf::PRF_GOST12_256)
            .union(HandshakePrf::STREAM_MAC),
        strength_bits: 0,
        algorithm_bits: 0,
    },
];

/// The bign/belt national suites.
#[cfg(all(feature = "tls12", feature = "bign"))]
static BIGN_SUITES: &[CipherSuite] = &[
    CipherSuite {
        valid: true,
        name: "DHE-BIGN-WITH-BELT-CTR-MAC-HBELT",
        rfc_name: Some("TLS_DHE_BIGN_WITH_BELT_CTR_MAC_HBELT"),
        id: 0x0300_ff15,
        kx: KxAlgorithm::BDHE,
        auth: AuthAlgorithm::BIGN,
        enc: BulkCipher::BeltCtr,
        mac: MacAlgorithm::BeltMac,
        tls: TLS12_ONLY,
        dtls: None,
        flags: SuiteFlags::HIGH,
        prf: HandshakePrf::DIGEST_HBELT.union(HandshakePrf::PRF_HBELT),
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "DHE-BIGN-WITH-BELT-DWP-HBELT",
        rfc_name: Some("TLS_DHE_BIGN_WITH_BELT_DWP_HBELT"),
        id: 0x0300_ff16,
        kx: KxAlgorithm::BDHE,
        auth: AuthAlgorithm::BIGN,
        enc: BulkCipher::BeltDwp,
        mac: MacAlgorithm::Aead,
        tls: TLS12_ONLY,
        dtls: None,
        flags: SuiteFlags::HIGH,
        prf: HandshakePrf::DIGEST_HBELT.union(HandshakePrf::PRF_HBELT),
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "DHT-BIGN-WITH-BELT-CTR-MAC-HBELT",
        rfc_name: Some("TLS_DHT_BIGN_WITH_BELT_CTR_MAC_HBELT"),
        id: 0x0300_ff17,
        kx: KxAlgorithm::BDHT,
        auth: AuthAlgorithm::BIGN,
        enc: BulkCipher::BeltCtr,
        mac: MacAlgorithm::BeltMac,
        tls: TLS12_ONLY,
        dtls: None,
        flags: SuiteFlags::HIGH,
        prf: HandshakePrf::DIGEST_HBELT.union(HandshakePrf::PRF_HBELT),
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "DHT-BIGN-WITH-BELT-DWP-HBELT",
        rfc_name: Some("TLS_DHT_BIGN_WITH_BELT_DWP_HBELT"),
        id: 0x0300_ff18,
        kx: KxAlgorithm::BDHT,
        auth: AuthAlgorithm::BIGN,
        enc: BulkCipher::BeltDwp,
        mac: MacAlgorithm::Aead,
        tls: TLS12_ONLY,
        dtls: None,
        flags: SuiteFlags::HIGH,
        prf: HandshakePrf::DIGEST_HBELT.union(HandshakePrf::PRF_HBELT),
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "DHE-PSK-BIGN-WITH-BELT-CTR-MAC-HBELT",
        rfc_name: Some("TLS_DHE_PSK_BIGN_WITH_BELT_CTR_MAC_HBELT"),
        id: 0x0300_ff19,
        kx: KxAlgorithm::BDHE_PSK,
        auth: AuthAlgorithm::PSK,
        enc: BulkCipher::BeltCtr,
        mac: MacAlgorithm::BeltMac,
        tls: TLS12_ONLY,
        dtls: None,
        flags: SuiteFlags::HIGH,
        prf: HandshakePrf::DIGEST_HBELT.union(HandshakePrf::PRF_HBELT),
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "DHE-PSK-BIGN-WITH-BELT-DWP-HBELT",
        rfc_name: Some("TLS_DHE_PSK_BIGN_WITH_BELT_DWP_HBELT"),
        id: 0x0300_ff1a,
        kx: KxAlgorithm::BDHE_PSK,
        auth: AuthAlgorithm::PSK,
        enc: BulkCipher::BeltDwp,
        mac: MacAlgorithm::Aead,
        tls: TLS12_ONLY,
        dtls: None,
        flags: SuiteFlags::HIGH,
        prf: HandshakePrf::DIGEST_HBELT.union(HandshakePrf::PRF_HBELT),
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "DHT-PSK-BIGN-WITH-BELT-CTR-MAC-HBELT",
        rfc_name: Some("TLS_DHT_PSK_BIGN_WITH_BELT_CTR_MAC_HBELT"),
        id: 0x0300_ff1b,
        kx: KxAlgorithm::BDHT_PSK,
        auth: AuthAlgorithm::BIGN,
        enc: BulkCipher::BeltCtr,
        mac: MacAlgorithm::BeltMac,
        tls: TLS12_ONLY,
        dtls: None,
        flags: SuiteFlags::HIGH,
        prf: HandshakePrf::DIGEST_HBELT.union(HandshakePrf::PRF_HBELT),
        strength_bits: 256,
        algorithm_bits: 256,
    },
    CipherSuite {
        valid: true,
        name: "DHT-PSK-BIGN-WITH-BELT-DWP-HBELT",
        rfc_name: Some("TLS_DHT_PSK_BIGN_WITH_BELT_DWP_HBELT"),
        id: 0x0300_ff1c,
        kx: KxAlgorithm::BDHT_PSK,
        auth: AuthAlgorithm::BIGN,
        enc: BulkCipher::BeltDwp,
        mac: MacAlgorithm::Aead,
        tls: TLS12_ONLY,
        dtls: None,
        flags: SuiteFlags::HIGH,
        prf: HandshakePrf::DIGEST_HBELT.union(HandshakePrf::PRF_HBELT),
        strength_bits: 256,
        algorithm_bits: 256,
    },
];

/// The known Signaling Cipher Suite Values: non-valid entries stuffed into
/// the cipher-suite field of the wire protocol for signaling purposes.
static SIGNALING_SUITES: &[CipherSuite] = &[
    CipherSuite {
        valid: false,
        name: "TLS_EMPTY_RENEGOTIATION_INFO_SCSV",
        rfc_name: Some("TLS_EMPTY_RENEGOTIATION_INFO_SCSV"),
        id: 0x0300_00ff,
        kx: KxAlgorithm::NONE,
        auth: AuthAlgorithm::NONE,
        enc: BulkCipher::Null,
        mac: MacAlgorithm::Aead,
        tls: None,
        dtls: None,
        flags: SuiteFlags::NONE,
        prf: HandshakePrf::NONE,
        strength_bits: 0,
        algorithm_bits: 0,
    },
    CipherSuite {
        valid: false,
        name: "TLS_FALLBACK_SCSV",
        rfc_name: Some("TLS_FALLBACK_SCSV"),
        id: 0x0300_5600,
        kx: KxAlgorithm::NONE,
        auth: AuthAlgorithm::NONE,
        enc: BulkCipher::Null,
        mac: MacAlgorithm::Aead,
        tls: None,
        dtls: None,
        flags: SuiteFlags::NONE,
        prf: HandshakePrf::NONE,
        strength_bits: 0,
        algorithm_bits: 0,
    },
];

/// The sorted, process-wide view of the three suite tables.
///
/// Built exactly once behind a [`OnceLock`]; afterwards it is immutable
/// and safe for unsynchronized concurrent reads from any number of
/// connections.
pub struct Registry {
    tls13: Vec<&'static CipherSuite>,
    legacy: Vec<&'static CipherSuite>,
    signaling: Vec<&'static CipherSuite>,
}

impl Registry {
    /// The process-wide registry, sorting the tables on first use.
    pub fn get() -> &'static Self {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(Self::build_sorted)
    }

    fn build_sorted() -> Self {
        #[cfg_attr(not(feature = "tls12"), allow(unused_mut))]
        let mut legacy: Vec<&'static CipherSuite> = Vec::new();
        #[cfg(feature = "tls12")]
        legacy.extend(LEGACY_SUITES.iter());
        #[cfg(all(feature = "tls12", feature = "gost"))]
        legacy.extend(GOST_SUITES.iter());
        #[cfg(all(feature = "tls12", feature = "bign"))]
        legacy.extend(BIGN_SUITES.iter());

        let mut registry = Self {
            tls13: TLS13_SUITES.iter().collect(),
            legacy,
            signaling: SIGNALING_SUITES.iter().collect(),
        };

        for table in [
            &mut registry.tls13,
            &mut registry.legacy,
            &mut registry.signaling,
        ] {
            table.sort_unstable_by_key(|suite| suite.id);
            debug_assert!(
                table.windows(2).all(|w| w[0].id < w[1].id),
                "duplicate cipher suite id"
            );
        }

        registry
    }

    fn tables(&self) -> [&[&'static CipherSuite]; 3] {
        // lookup priority: TLS 1.3, then legacy, then signaling
        [&self.tls13, &self.legacy, &self.signaling]
    }

    /// Look up a suite by its numeric identifier.
    pub fn find_by_id(&self, id: u32) -> Option<&'static CipherSuite> {
        for table in self.tables() {
            if let Ok(i) = table.binary_search_by_key(&id, |suite| suite.id) {
                return Some(table[i]);
            }
        }
        None
    }

    /// Look up a suite by its 2-byte wire code.
    pub fn find_by_wire_code(&self, code: [u8; 2]) -> Option<&'static CipherSuite> {
        self.find_by_id(
            CipherSuite::WIRE_FLAG | (u32::from(code[0]) << 8) | u32::from(code[1]),
        )
    }

    /// Look up a suite by its canonical protocol name.
    ///
    /// This is a linear scan over all three tables; entries without a
    /// canonical name are skipped.  It is not performance-critical: it
    /// runs at configuration time, not per handshake.
    pub fn find_by_standard_name(&self, name: &str) -> Option<&'static CipherSuite> {
        for table in self.tables() {
            for suite in table {
                match suite.rfc_name {
                    Some(rfc_name) if rfc_name == name => return Some(suite),
                    _ => continue,
                }
            }
        }
        None
    }

    /// Number of entries in the legacy table.
    pub fn legacy_count(&self) -> usize {
        self.legacy.len()
    }

    /// The `i`-th legacy suite *counting from the end of the table*: index
    /// 0 is the numerically-highest entry.
    ///
    /// This preserves the ordering contract of historical index-based
    /// enumeration call sites; use [`Registry::legacy_iter`] for ordinary
    /// forward iteration in ascending id order.
    pub fn legacy_by_index(&self, i: usize) -> Option<&'static CipherSuite> {
        self.legacy
            .len()
            .checked_sub(1 + i)
            .map(|back| self.legacy[back])
    }

    /// Iterate the legacy table in ascending id order.
    pub fn legacy_iter(&self) -> impl Iterator<Item = &'static CipherSuite> + '_ {
        self.legacy.iter().copied()
    }

    /// Iterate the TLS 1.3 table in ascending id order.
    pub fn tls13_iter(&self) -> impl Iterator<Item = &'static CipherSuite> + '_ {
        self.tls13.iter().copied()
    }

    /// Iterate the signaling pseudo-suites in ascending id order.
    pub fn signaling_iter(&self) -> impl Iterator<Item = &'static CipherSuite> + '_ {
        self.signaling.iter().copied()
    }
}
