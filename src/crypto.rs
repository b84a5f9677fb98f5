//! The seams to the cryptographic backend.
//!
//! This crate decides *which* algorithms run and *what* flows into them;
//! the primitives themselves (DH/ECDH math, KEMs, the PRF and the
//! extract/expand schedule) live behind these traits.  A backend crate
//! implements them with its primitive library of choice.
//!
//! Key agreement and both KEM directions are two-phase: a size query
//! first, then the operation into a caller-provided buffer.  The caller
//! owns the buffer and is responsible for wiping it.

use zeroize::Zeroize;

use crate::enums::HashAlgorithm;
use crate::error::Error;
use crate::suites::HandshakePrf;

/// How a completed key agreement should present the shared value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretPadding {
    /// The backend's native encoding.
    Unpadded,

    /// Fixed-width output, left-padded with zeros to the group size.
    /// Required for finite-field Diffie-Hellman under the modern secret
    /// schedule.
    ZeroPadded,
}

/// An in-progress key agreement: a local private key ready to combine
/// with a peer public key.
pub trait ActiveKeyExchange: Send + Sync {
    /// Phase one: an upper bound on the shared-secret length for
    /// `peer_pub_key`.
    ///
    /// This must return an error if `peer_pub_key` is invalid: either
    /// misencoded, or an invalid public key (such as, but not limited to,
    /// being in a small order subgroup).
    fn shared_secret_len(&self, peer_pub_key: &[u8]) -> Result<usize, Error>;

    /// Phase two: derive the shared secret into `output`, returning the
    /// number of bytes written (at most the phase-one answer).
    fn complete(
        &self,
        peer_pub_key: &[u8],
        padding: SecretPadding,
        output: &mut [u8],
    ) -> Result<usize, Error>;

    /// True for finite-field Diffie-Hellman, which needs
    /// [`SecretPadding::ZeroPadded`] under the modern secret schedule.
    fn is_ffdhe(&self) -> bool {
        false
    }
}

/// The encapsulating side of a KEM: a peer public key ready to produce a
/// (ciphertext, shared secret) pair.
pub trait Encapsulator: Send + Sync {
    /// Phase one: the (ciphertext, shared secret) lengths this KEM
    /// produces.
    fn output_lens(&self) -> Result<(usize, usize), Error>;

    /// Phase two: encapsulate into the caller's buffers, returning the
    /// number of bytes written to each.
    fn encapsulate(&self, ciphertext: &mut [u8], secret: &mut [u8])
        -> Result<(usize, usize), Error>;
}

/// The decapsulating side of a KEM: a local private key ready to recover
/// the shared secret from a received ciphertext.
pub trait Decapsulator: Send + Sync {
    /// Phase one: an upper bound on the shared-secret length for
    /// `ciphertext`.
    fn secret_len(&self, ciphertext: &[u8]) -> Result<usize, Error>;

    /// Phase two: decapsulate into `secret`, returning the number of
    /// bytes written.
    fn decapsulate(&self, ciphertext: &[u8], secret: &mut [u8]) -> Result<usize, Error>;
}

/// A derived 48-byte master secret, wiped on drop.
pub struct MasterSecret {
    buf: [u8; 48],
}

impl MasterSecret {
    /// Wrap a freshly derived master secret.
    pub fn new(buf: [u8; 48]) -> Self {
        Self { buf }
    }

    /// The secret bytes.
    pub fn as_bytes(&self) -> &[u8; 48] {
        &self.buf
    }
}

impl Drop for MasterSecret {
    fn drop(&mut self) {
        self.buf.zeroize();
    }
}

/// An intermediate secret of the extract/expand schedule, sized to its
/// digest and wiped on drop.
pub struct SecretBlock {
    buf: [u8; Self::MAX_LEN],
    used: usize,
}

impl SecretBlock {
    /// Maximum supported digest output: up to SHA-512.
    pub const MAX_LEN: usize = 64;

    /// Build a `SecretBlock` from at most [`Self::MAX_LEN`] bytes.
    pub fn new(bytes: &[u8]) -> Self {
        debug_assert!(bytes.len() <= Self::MAX_LEN);
        let mut block = Self {
            buf: [0u8; Self::MAX_LEN],
            used: bytes.len(),
        };
        block.buf[..bytes.len()].copy_from_slice(bytes);
        block
    }
}

impl AsRef<[u8]> for SecretBlock {
    fn as_ref(&self) -> &[u8] {
        &self.buf[..self.used]
    }
}

impl Drop for SecretBlock {
    fn drop(&mut self) {
        self.buf.zeroize();
    }
}

/// The legacy (3.x through TLS 1.2) master-secret derivation.
///
/// The premaster passed in is either a raw shared secret or, for
/// PSK-keyed suites, the synthetic length-prefixed construction built by
/// the orchestrator; the backend does not need to distinguish them.
pub trait LegacyPrf: Send + Sync {
    /// Run the PRF selected by `prf` over `premaster` to produce the
    /// master secret.
    fn generate_master_secret(
        &self,
        prf: HandshakePrf,
        premaster: &[u8],
    ) -> Result<MasterSecret, Error>;
}

/// The modern (extract/expand) secret schedule, keyed by the negotiated
/// handshake digest.
pub trait HandshakeSchedule: Send + Sync {
    /// The early secret: an extract over all-zero input keying material.
    fn early_secret(&self, digest: HashAlgorithm) -> Result<SecretBlock, Error>;

    /// The handshake secret: an extract mixing the (EC)DH/KEM shared
    /// value into the derived form of `early`.
    fn handshake_secret(
        &self,
        digest: HashAlgorithm,
        early: &SecretBlock,
        shared: &[u8],
    ) -> Result<SecretBlock, Error>;
}

/// The full set of backend services the orchestrator needs.
pub trait CryptoBackend: Send + Sync {
    /// The legacy master-secret derivation.
    #[cfg(feature = "tls12")]
    fn legacy_prf(&self) -> &dyn LegacyPrf;

    /// The modern secret schedule.
    fn handshake_schedule(&self) -> &dyn HandshakeSchedule;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_block_truncates_to_used() {
        let block = SecretBlock::new(&[7u8; 32]);
        assert_eq!(block.as_ref().len(), 32);
        assert!(block.as_ref().iter().all(|&b| b == 7));
    }
}
