//! The crate's error type and its variants.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// tlsuite reports problems using this type.
///
/// A failed negotiation is *not* an error: [`choose()`] reports it by
/// returning `None`, and callers abort the handshake with the appropriate
/// alert.  Errors of this type are either configuration mistakes (report to
/// the application, recoverable) or cryptographic/internal failures (always
/// fatal to the connection).
///
/// [`choose()`]: crate::negotiation::choose
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A configuration value supplied by the application is malformed.
    ///
    /// This is reported immediately by the API that received the value and
    /// never silently ignored.
    InvalidConfig(ConfigError),

    /// A cryptographic primitive failed while deriving secrets.
    ///
    /// This is always fatal to the connection, and is distinct from a
    /// negotiation failure so that callers can send a different alert.
    Crypto(CryptoError),

    /// Any other error.
    ///
    /// This variant should only be used when the error is not better
    /// described by a more specific variant: for example, if a custom
    /// cryptographic backend returns a backend-specific error.
    ///
    /// Enums holding this variant will never compare equal to each other.
    Other(OtherError),
}

/// The set of malformed configuration values we reject.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A custom certificate-type list was empty.
    EmptyCustomCertificateTypes,

    /// A custom certificate-type list had more entries than the wire
    /// format can carry (255).
    CustomCertificateTypesTooLong,
}

/// The set of cryptographic failures surfaced during secret derivation.
///
/// These are deliberately coarse: the handshake driver maps all of them to
/// an internal-error alert, and the underlying backend error (if any) is
/// carried alongside where available.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum CryptoError {
    /// A key-agreement (DH/ECDH) size query or derivation call failed.
    KeyAgreementFailed,

    /// A KEM encapsulation call failed or reported zero-length output.
    EncapsulationFailed,

    /// A KEM decapsulation call failed.
    DecapsulationFailed,

    /// A primitive wrote more bytes than its size query promised.
    ShortSecretBuffer,

    /// The secret schedule (master secret or extract/expand) failed.
    SecretScheduleFailed,

    /// A PSK-keyed suite was negotiated but no PSK was installed.
    MissingPreSharedKey,

    /// A resumed connection reached secret generation without its early
    /// secret installed.
    MissingEarlySecret,

    /// The negotiated suite selects a handshake digest the modern secret
    /// schedule cannot run.
    UnsupportedHandshakeDigest,
}

impl From<ConfigError> for Error {
    #[inline]
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfig(e)
    }
}

impl From<CryptoError> for Error {
    #[inline]
    fn from(e: CryptoError) -> Self {
        Self::Crypto(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::InvalidConfig(ref err) => write!(f, "invalid configuration: {:?}", err),
            Self::Crypto(ref err) => write!(f, "cryptographic failure: {:?}", err),
            Self::Other(ref err) => write!(f, "other error: {}", err),
        }
    }
}

impl StdError for Error {}

/// Any other error that cannot be expressed by a more specific [`Error`]
/// variant.
///
/// For example, an `OtherError` could be produced by a custom cryptographic
/// backend exposing a backend-specific error.
///
/// Enums holding this type will never compare equal to each other.
#[derive(Debug, Clone)]
pub struct OtherError(pub Arc<dyn StdError + Send + Sync>);

impl PartialEq<Self> for OtherError {
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}

impl From<OtherError> for Error {
    fn from(value: OtherError) -> Self {
        Self::Other(value)
    }
}

impl fmt::Display for OtherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for OtherError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.0.as_ref())
    }
}
