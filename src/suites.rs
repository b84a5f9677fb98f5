//! Cipher-suite descriptors and the algorithm bitmasks they are built from.

use core::fmt;

use crate::enums::{HashAlgorithm, ProtocolVersion};

bitmask_builder! {
    /// Key-exchange mechanisms a cipher suite is usable with.
    ///
    /// Bitmask-valued: a handful of suites are compatible with more than
    /// one mechanism, and negotiation tests membership with a bitwise AND
    /// against the mechanisms the local configuration supports.
    pub struct KxAlgorithm(u32)
    {
        RSA => 0x0000_0001,
        DHE => 0x0000_0002,
        ECDHE => 0x0000_0004,
        PSK => 0x0000_0008,
        RSA_PSK => 0x0000_0010,
        DHE_PSK => 0x0000_0020,
        ECDHE_PSK => 0x0000_0040,
        SRP => 0x0000_0080,
        GOST => 0x0000_0100,
        GOST18 => 0x0000_0200,
        BDHE => 0x0000_0400,
        BDHT => 0x0000_0800,
        BDHE_PSK => 0x0000_1000,
        BDHT_PSK => 0x0000_2000,
        ANY => 0x0000_4000,
    }
}

impl KxAlgorithm {
    /// Exchanges that mix a pre-shared key into the premaster secret.
    pub const ANY_PSK: Self = Self::PSK
        .union(Self::RSA_PSK)
        .union(Self::DHE_PSK)
        .union(Self::ECDHE_PSK)
        .union(Self::BDHE_PSK)
        .union(Self::BDHT_PSK);

    /// The GOST key-exchange family, both generations.
    pub const ANY_GOST: Self = Self::GOST.union(Self::GOST18);

    /// The bign key-exchange family.
    pub const ANY_BIGN: Self = Self::BDHE
        .union(Self::BDHT)
        .union(Self::BDHE_PSK)
        .union(Self::BDHT_PSK);

    /// Exchanges using an ephemeral elliptic-curve key.
    pub const ANY_ECDHE: Self = Self::ECDHE.union(Self::ECDHE_PSK);
}

bitmask_builder! {
    /// Authentication mechanisms a cipher suite is usable with.
    ///
    /// `ANON` marks unauthenticated suites.
    pub struct AuthAlgorithm(u32)
    {
        RSA => 0x0000_0001,
        DSS => 0x0000_0002,
        ANON => 0x0000_0004,
        ECDSA => 0x0000_0008,
        PSK => 0x0000_0010,
        SRP => 0x0000_0020,
        GOST01 => 0x0000_0040,
        GOST12 => 0x0000_0080,
        BIGN => 0x0000_0100,
        ANY => 0x0000_0200,
    }
}

bitmask_builder! {
    /// Strength classification and policy markers for a cipher suite.
    pub struct SuiteFlags(u32)
    {
        HIGH => 0x0000_0001,
        MEDIUM => 0x0000_0002,
        LOW => 0x0000_0004,
        STRONG_NONE => 0x0000_0008,
        NOT_DEFAULT => 0x0000_0010,
        FIPS => 0x0000_0020,
    }
}

bitmask_builder! {
    /// Which digest MACs the handshake transcript, and which PRF variant
    /// derives secrets, for a cipher suite.
    ///
    /// The low byte carries the handshake digest, the second byte the PRF
    /// selection; the top bits carry record-protection quirks that travel
    /// with the digest choice.
    pub struct HandshakePrf(u32)
    {
        DIGEST_DEFAULT => 0x0000_0001,
        DIGEST_SHA256 => 0x0000_0002,
        DIGEST_SHA384 => 0x0000_0004,
        DIGEST_GOST94 => 0x0000_0008,
        DIGEST_GOST12_256 => 0x0000_0010,
        DIGEST_GOST12_512 => 0x0000_0020,
        DIGEST_HBELT => 0x0000_0040,
        PRF_DEFAULT => 0x0000_0100,
        PRF_SHA256 => 0x0000_0200,
        PRF_SHA384 => 0x0000_0400,
        PRF_GOST94 => 0x0000_0800,
        PRF_GOST12_256 => 0x0000_1000,
        PRF_HBELT => 0x0000_2000,
        STREAM_MAC => 0x0001_0000,
        TLSTREE => 0x0002_0000,
    }
}

impl HandshakePrf {
    /// The legacy default pairing (MD5/SHA-1 digest, TLS 1.0/1.1 PRF).
    pub const DEFAULT: Self = Self::DIGEST_DEFAULT.union(Self::PRF_DEFAULT);

    /// The SHA-256 pairing used by TLS 1.2 and most modern suites.
    pub const SHA256: Self = Self::DIGEST_SHA256.union(Self::PRF_SHA256);

    /// The SHA-384 pairing.
    pub const SHA384: Self = Self::DIGEST_SHA384.union(Self::PRF_SHA384);

    /// The digest this selection uses for the handshake transcript, where
    /// it is one the modern secret schedule can run.  National digests and
    /// the legacy MD5/SHA-1 pair return `None`.
    pub fn digest(self) -> Option<HashAlgorithm> {
        if self.intersects(Self::DIGEST_SHA256) {
            Some(HashAlgorithm::SHA256)
        } else if self.intersects(Self::DIGEST_SHA384) {
            Some(HashAlgorithm::SHA384)
        } else {
            None
        }
    }
}

/// The symmetric cipher of a suite.  `Null` marks unencrypted suites.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum BulkCipher {
    Null,
    TripleDes,
    Aes128,
    Aes256,
    Aes128Gcm,
    Aes256Gcm,
    Aes128Ccm,
    Aes256Ccm,
    Aes128Ccm8,
    ChaCha20Poly1305,
    Gost89Cnt,
    Gost89Cnt12,
    Kuznyechik,
    Magma,
    BeltCtr,
    BeltDwp,
}

/// The MAC scheme of a suite.
///
/// `Aead` marks suites where the bulk cipher itself provides integrity.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum MacAlgorithm {
    Aead,
    Md5,
    Sha1,
    Sha256,
    Sha384,
    Gost89,
    Gost89_12,
    Gost94,
    Gost12_256,
    KuznyechikOmac,
    MagmaOmac,
    BeltMac,
}

/// An inclusive protocol-version range for one transport family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionRange {
    /// Oldest version the suite may be used with.
    pub min: ProtocolVersion,
    /// Newest version the suite may be used with.
    pub max: ProtocolVersion,
}

impl VersionRange {
    /// A range covering `min` through `max`.
    pub const fn new(min: ProtocolVersion, max: ProtocolVersion) -> Self {
        Self { min, max }
    }

    /// A range covering exactly one version.
    pub const fn single(version: ProtocolVersion) -> Self {
        Self {
            min: version,
            max: version,
        }
    }

    fn contains_tls(&self, version: u16) -> bool {
        u16::from(self.min) <= version && version <= u16::from(self.max)
    }

    fn contains_dtls(&self, version: u16) -> bool {
        !dtls_older(version, u16::from(self.min)) && !dtls_older(u16::from(self.max), version)
    }
}

// DTLS version numbers decrease on the wire as the protocol gets newer;
// the pre-standard 0x0100 sorts oldest of all.
fn dtls_ordinal(version: u16) -> u16 {
    match version {
        0x0100 => 0xff00,
        v => v,
    }
}

fn dtls_older(a: u16, b: u16) -> bool {
    dtls_ordinal(a) > dtls_ordinal(b)
}

/// A single cipher-suite descriptor.
///
/// All instances live in the process-wide registry tables
/// ([`Registry`](crate::registry::Registry)); per-connection offered and
/// enabled lists hold `&'static` references into those tables, and
/// negotiation matches entries by identity.
pub struct CipherSuite {
    /// Whether this entry selects a real cipher.  Signaling pseudo-suites
    /// are not valid and must never be offered or selected.
    pub valid: bool,

    /// Implementation-local name, e.g. `"ECDHE-RSA-AES128-GCM-SHA256"`.
    pub name: &'static str,

    /// Canonical protocol name, e.g. `"TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256"`.
    ///
    /// Absent for suites that never received one.
    pub rfc_name: Option<&'static str>,

    /// Canonical numeric identifier.  For wire-encodable suites the low 16
    /// bits are the 2-byte cipher-suite code and the high byte carries
    /// [`CipherSuite::WIRE_FLAG`].
    pub id: u32,

    /// Key-exchange mechanisms this suite is usable with.
    pub kx: KxAlgorithm,

    /// Authentication mechanisms this suite is usable with.
    pub auth: AuthAlgorithm,

    /// The bulk cipher.
    pub enc: BulkCipher,

    /// The MAC scheme.
    pub mac: MacAlgorithm,

    /// Stream-transport applicability, or `None` if the suite cannot be
    /// used over a stream transport.
    pub tls: Option<VersionRange>,

    /// Datagram-transport applicability, or `None` if the suite cannot be
    /// used over a datagram transport.
    pub dtls: Option<VersionRange>,

    /// Strength class and policy markers.
    pub flags: SuiteFlags,

    /// Handshake digest and PRF selection.
    pub prf: HandshakePrf,

    /// Nominal key strength in bits (0 for non-encrypting suites).
    pub strength_bits: u16,

    /// Real key strength in bits.
    pub algorithm_bits: u16,
}

impl CipherSuite {
    /// High-byte marker carried by the `id` of every suite whose low 16
    /// bits are a 2-byte wire code.
    pub const WIRE_FLAG: u32 = 0x0300_0000;

    /// The 2-byte wire code, if this suite's `id` carries [`Self::WIRE_FLAG`].
    pub fn wire_code(&self) -> Option<[u8; 2]> {
        if self.id & 0xff00_0000 != Self::WIRE_FLAG {
            return None;
        }
        Some([(self.id >> 8) as u8, self.id as u8])
    }

    /// Append this suite's 2-byte wire code to `out`.
    ///
    /// Returns the number of bytes written: 2 for wire-encodable suites,
    /// 0 (successfully) for suites with a different encoding convention,
    /// which the caller handles itself.
    pub fn encode_wire_code(&self, out: &mut Vec<u8>) -> usize {
        match self.wire_code() {
            Some(code) => {
                out.extend_from_slice(&code);
                2
            }
            None => 0,
        }
    }

    /// Whether this suite may be used with `version` on the given
    /// transport family.  The version ranges are separate per family, and
    /// a missing range excludes the suite from that family entirely.
    pub fn usable_for_version(&self, version: ProtocolVersion, is_datagram: bool) -> bool {
        let v = u16::from(version);
        if is_datagram {
            self.dtls
                .as_ref()
                .is_some_and(|range| range.contains_dtls(v))
        } else {
            self.tls
                .as_ref()
                .is_some_and(|range| range.contains_tls(v))
        }
    }

    /// True if the suite mixes a pre-shared key into its premaster secret.
    pub fn is_psk_keyed(&self) -> bool {
        self.kx.intersects(KxAlgorithm::ANY_PSK)
    }

    /// The handshake digest/PRF selection actually used once the
    /// negotiated protocol is taken into account.
    ///
    /// `sha256_prf_default` is true when the negotiated protocol's
    /// encryption method defaults the PRF to SHA-256 (TLS 1.2 and later):
    /// there the legacy default pairing resolves to SHA-256.  Under older
    /// regimes a PSK-keyed suite declaring the SHA-384 pairing falls back
    /// to the default pairing instead.
    pub fn resolved_prf(&self, sha256_prf_default: bool) -> HandshakePrf {
        if sha256_prf_default {
            if self.prf == HandshakePrf::DEFAULT {
                return HandshakePrf::SHA256;
            }
        } else if self.is_psk_keyed() && self.prf == HandshakePrf::SHA384 {
            return HandshakePrf::DEFAULT;
        }
        self.prf
    }

    /// The digest this suite uses for the handshake transcript, where the
    /// modern secret schedule can run it.
    pub fn handshake_digest(&self) -> Option<HashAlgorithm> {
        self.prf.digest()
    }
}

impl PartialEq for CipherSuite {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for CipherSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherSuite")
            .field("name", &self.name)
            .field("id", &format_args!("0x{:08x}", self.id))
            .finish()
    }
}
