//! Drives secret derivation for a single connection.
//!
//! Once negotiation has settled on a suite, the handshake driver feeds
//! key material through one of three acquisition paths (key agreement,
//! KEM encapsulation, KEM decapsulation) and this module routes the
//! resulting premaster value into the correct schedule: the modern
//! extract/expand schedule, the PSK-mixed legacy derivation, or the
//! plain legacy derivation.
//!
//! Every transient secret buffer is wiped on every exit path, success or
//! failure; wiping is done by drop guards rather than cleanup calls at
//! each return site.

use zeroize::{Zeroize, Zeroizing};

use crate::crypto::{
    ActiveKeyExchange, CryptoBackend, Decapsulator, Encapsulator, SecretBlock, SecretPadding,
};
#[cfg(feature = "tls12")]
use crate::crypto::MasterSecret;
use crate::enums::ProtocolVersion;
use crate::error::{CryptoError, Error};
#[cfg(feature = "logging")]
use crate::log::{debug, warn};
use crate::suites::CipherSuite;
#[cfg(feature = "tls12")]
use crate::suites::KxAlgorithm;

/// Wipes the wrapped buffer when dropped, whichever exit path runs.
struct WipeOnDrop<'a>(&'a mut [u8]);

impl Drop for WipeOnDrop<'_> {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Per-connection secret-derivation state.
///
/// Created fresh for each handshake and discarded afterwards; dropping
/// it wipes everything still held.
pub struct HandshakeSecrets<'b> {
    suite: &'static CipherSuite,
    version: ProtocolVersion,
    backend: &'b dyn CryptoBackend,
    resumed: bool,
    psk: Option<Zeroizing<Vec<u8>>>,
    stashed: Option<Zeroizing<Vec<u8>>>,
    #[cfg(feature = "tls12")]
    master_secret: Option<MasterSecret>,
    early_secret: Option<SecretBlock>,
    handshake_secret: Option<SecretBlock>,
}

impl<'b> HandshakeSecrets<'b> {
    /// State for one connection that negotiated `suite` at `version`.
    pub fn new(
        suite: &'static CipherSuite,
        version: ProtocolVersion,
        backend: &'b dyn CryptoBackend,
    ) -> Self {
        Self {
            suite,
            version,
            backend,
            resumed: false,
            psk: None,
            stashed: None,
            #[cfg(feature = "tls12")]
            master_secret: None,
            early_secret: None,
            handshake_secret: None,
        }
    }

    /// Mark this connection as resuming a previous session.  The early
    /// secret is then expected to have been installed already (it was
    /// derived when the first flight was built).
    pub fn set_resumed(&mut self, resumed: bool) {
        self.resumed = resumed;
    }

    /// Install the PSK to mix into the next derivation.  Consumed (and
    /// wiped) by the first derivation that uses it.
    pub fn set_psk(&mut self, psk: Vec<u8>) {
        self.psk = Some(Zeroizing::new(psk));
    }

    /// Install an externally derived early secret (resumption).
    pub fn set_early_secret(&mut self, secret: SecretBlock) {
        self.early_secret = Some(secret);
    }

    /// Run the schedule appropriate to the negotiated suite and version
    /// over `premaster`.
    ///
    /// `premaster` is wiped before this returns, success or failure.
    pub fn generate_secret(&mut self, premaster: &mut [u8]) -> Result<(), Error> {
        let premaster = WipeOnDrop(premaster);

        if self.version.is_tls13() {
            let digest = self
                .suite
                .handshake_digest()
                .ok_or(CryptoError::UnsupportedHandshakeDigest)?;
            let schedule = self.backend.handshake_schedule();

            // If we are resuming then we already generated the early
            // secret when the first flight was built, so don't recreate it.
            if !self.resumed {
                self.early_secret = Some(schedule.early_secret(digest)?);
            }
            let early = self
                .early_secret
                .as_ref()
                .ok_or(CryptoError::MissingEarlySecret)?;

            self.handshake_secret = Some(schedule.handshake_secret(digest, early, premaster.0)?);
            debug!("derived handshake secret for {}", self.suite.name);
            return Ok(());
        }

        self.legacy_master_secret(premaster.0)
    }

    #[cfg(not(feature = "tls12"))]
    fn legacy_master_secret(&mut self, _premaster: &[u8]) -> Result<(), Error> {
        warn!("legacy secret schedule reached without tls12 support");
        Err(CryptoError::SecretScheduleFailed.into())
    }

    #[cfg(feature = "tls12")]
    fn legacy_master_secret(&mut self, premaster: &[u8]) -> Result<(), Error> {
        let prf = self
            .suite
            .resolved_prf(sha256_prf_default(self.version));

        if self.suite.is_psk_keyed() {
            let psk = self
                .psk
                .take()
                .ok_or(CryptoError::MissingPreSharedKey)?;

            // For plain PSK the "other secret" is a run of zeroes as long
            // as the PSK itself.
            let pure_psk = self.suite.kx.intersects(KxAlgorithm::PSK);
            let other_len = if pure_psk { psk.len() } else { premaster.len() };

            let mut mixed = Zeroizing::new(Vec::with_capacity(4 + other_len + psk.len()));
            mixed.extend_from_slice(&(other_len as u16).to_be_bytes());
            if pure_psk {
                let new_len = mixed.len() + other_len;
                mixed.resize(new_len, 0);
            } else {
                mixed.extend_from_slice(premaster);
            }
            mixed.extend_from_slice(&(psk.len() as u16).to_be_bytes());
            mixed.extend_from_slice(&psk);

            self.master_secret = Some(
                self.backend
                    .legacy_prf()
                    .generate_master_secret(prf, &mixed)?,
            );
        } else {
            self.master_secret = Some(
                self.backend
                    .legacy_prf()
                    .generate_master_secret(prf, premaster)?,
            );
        }

        debug!("derived master secret for {}", self.suite.name);
        Ok(())
    }

    /// Complete a DH/ECDH key agreement against `peer_pub_key`.
    ///
    /// With `gensecret` the shared value feeds straight into
    /// [`Self::generate_secret`]; without it the value is stashed for
    /// [`Self::take_premaster`].  Either way the transient buffer is
    /// wiped here.
    pub fn derive(
        &mut self,
        kx: &dyn ActiveKeyExchange,
        peer_pub_key: &[u8],
        gensecret: bool,
    ) -> Result<(), Error> {
        let len = kx.shared_secret_len(peer_pub_key)?;

        // Modern finite-field DH wants fixed-width output.
        let padding = if self.version.is_tls13() && kx.is_ffdhe() {
            SecretPadding::ZeroPadded
        } else {
            SecretPadding::Unpadded
        };

        let mut premaster = Zeroizing::new(vec![0u8; len]);
        let written = kx.complete(peer_pub_key, padding, &mut premaster)?;
        if written > len {
            warn!("key agreement overran its size query");
            return Err(CryptoError::ShortSecretBuffer.into());
        }
        premaster.truncate(written);

        self.consume(premaster, gensecret)
    }

    /// Recover the shared secret from a received KEM ciphertext.
    pub fn decapsulate(
        &mut self,
        kem: &dyn Decapsulator,
        ciphertext: &[u8],
        gensecret: bool,
    ) -> Result<(), Error> {
        let len = kem.secret_len(ciphertext)?;

        let mut premaster = Zeroizing::new(vec![0u8; len]);
        let written = kem.decapsulate(ciphertext, &mut premaster)?;
        if written > len {
            warn!("decapsulation overran its size query");
            return Err(CryptoError::ShortSecretBuffer.into());
        }
        premaster.truncate(written);

        self.consume(premaster, gensecret)
    }

    /// Encapsulate a fresh shared secret to the peer's KEM public key.
    ///
    /// The secret is consumed locally (per `gensecret`, as for
    /// [`Self::derive`]); the returned ciphertext is for the peer.
    pub fn encapsulate(
        &mut self,
        kem: &dyn Encapsulator,
        gensecret: bool,
    ) -> Result<Vec<u8>, Error> {
        let (ciphertext_len, secret_len) = kem.output_lens()?;
        if ciphertext_len == 0 || secret_len == 0 {
            return Err(CryptoError::EncapsulationFailed.into());
        }

        let mut ciphertext = vec![0u8; ciphertext_len];
        let mut premaster = Zeroizing::new(vec![0u8; secret_len]);
        let (ct_written, pms_written) = kem.encapsulate(&mut ciphertext, &mut premaster)?;
        if ct_written > ciphertext_len || pms_written > secret_len {
            warn!("encapsulation overran its size query");
            return Err(CryptoError::ShortSecretBuffer.into());
        }
        ciphertext.truncate(ct_written);
        premaster.truncate(pms_written);

        self.consume(premaster, gensecret)?;
        Ok(ciphertext)
    }

    fn consume(&mut self, mut premaster: Zeroizing<Vec<u8>>, gensecret: bool) -> Result<(), Error> {
        if gensecret {
            // the buffer is wiped by generate_secret and again on drop
            self.generate_secret(&mut premaster)
        } else {
            self.stashed = Some(premaster);
            Ok(())
        }
    }

    /// Hand out the stashed premaster secret, at most once.  The caller
    /// takes over the wiping obligation (the wrapper wipes on drop).
    pub fn take_premaster(&mut self) -> Option<Zeroizing<Vec<u8>>> {
        self.stashed.take()
    }

    /// The legacy master secret, once derived.
    #[cfg(feature = "tls12")]
    pub fn master_secret(&self) -> Option<&MasterSecret> {
        self.master_secret.as_ref()
    }

    /// The early secret, once derived or installed.
    pub fn early_secret(&self) -> Option<&SecretBlock> {
        self.early_secret.as_ref()
    }

    /// The handshake secret, once derived.
    pub fn handshake_secret(&self) -> Option<&SecretBlock> {
        self.handshake_secret.as_ref()
    }
}

/// True when the negotiated protocol's encryption method defaults the
/// PRF to SHA-256.
#[cfg(feature = "tls12")]
fn sha256_prf_default(version: ProtocolVersion) -> bool {
    matches!(
        version,
        ProtocolVersion::TLSv1_2
            | ProtocolVersion::TLSv1_3
            | ProtocolVersion::DTLSv1_2
            | ProtocolVersion::DTLSv1_3
    )
}
