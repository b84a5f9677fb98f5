//! # tlsuite — cipher-suite negotiation for TLS/DTLS
//!
//! This crate is the cipher-suite registry and negotiation engine of a
//! TLS/DTLS stack: the component that decides, for a given connection,
//! which symmetric cipher, key-exchange method, authentication method and
//! MAC/PRF combination both peers will use, and which then drives
//! derivation of the shared secret material.
//!
//! ## What lives here
//!
//! * An immutable catalog of cipher-suite descriptors, partitioned into
//!   TLS 1.3, legacy (3.x/TLS 1.0–1.2) and signaling tables, sorted once
//!   and binary-searchable by numeric id ([`registry`]).
//! * Lookups by id, by 2-byte wire code and by canonical name, plus wire
//!   code encoding ([`registry`], [`suites`]).
//! * The negotiation engine: given the client-offered and server-enabled
//!   lists, apply protocol-version, capability, security-policy and
//!   interoperability filters and select exactly one suite, or none
//!   ([`negotiation`]).
//! * The certificate-type advisor for protocol versions whose
//!   CertificateRequest carries certificate types ([`cert_types`]).
//! * The key-derivation orchestrator: route (EC)DH shared values and KEM
//!   encapsulation/decapsulation results into the legacy, PSK-mixed or
//!   modern secret schedule, wiping every transient buffer on every exit
//!   path ([`secrets`]).
//!
//! ## What deliberately does not live here
//!
//! Record/handshake framing and wire I/O, the handshake state machine,
//! certificate chain handling, session/ticket storage, and the
//! cryptographic primitives themselves.  Primitives are reached through
//! the traits in [`crypto`]; a backend crate implements them.
//!
//! ## Concurrency
//!
//! The registry is built and sorted exactly once, on first use, and is
//! immutable afterwards: unsynchronized concurrent reads from any number
//! of connection-handling threads are safe.  Everything else operates on
//! per-connection state and needs no locking.
//!
//! # Crate features
//!
//! - `logging`: this makes the crate depend on the `log` crate.
//!   Negotiation emits candidate-by-candidate decisions at `trace!` level
//!   and selections at `debug!` level.  The log messages do not contain
//!   secret key data, and so are safe to archive without affecting
//!   session security.  This feature is in the default set.
//!
//! - `tls12`: enables the legacy suite table and the legacy secret
//!   schedule.  This feature is in the default set.
//!
//! - `gost`: enables the GOST suite family.  This feature is in the
//!   default set; restricted builds may remove it.
//!
//! - `bign`: enables the bign/belt suite family.  This feature is in the
//!   default set; restricted builds may remove it.

// Require docs for public APIs, deny unsafe code, etc.
#![forbid(unsafe_code, unused_must_use)]
#![deny(
    clippy::use_self,
    trivial_casts,
    trivial_numeric_casts,
    missing_docs,
    unreachable_pub,
    unused_import_braces,
    unused_extern_crates,
    unused_qualifications
)]
// Relax these clippy lints:
// - single_component_path_imports: our top-level `use log` import causes
//   a false positive, https://github.com/rust-lang/rust-clippy/issues/5210
#![allow(clippy::single_component_path_imports)]

// log for logging (optional).
#[cfg(feature = "logging")]
use log;

#[cfg(not(feature = "logging"))]
#[macro_use]
mod log {
    macro_rules! trace    ( ($($tt:tt)*) => {{}} );
    macro_rules! debug    ( ($($tt:tt)*) => {{}} );
    macro_rules! warn     ( ($($tt:tt)*) => {{}} );
}

#[macro_use]
mod macros;

pub mod cert_types;
pub mod crypto;
pub mod enums;
pub mod error;
pub mod negotiation;
pub mod registry;
pub mod secrets;
pub mod suites;

// The most commonly used names, at the top level:
pub use crate::cert_types::{request_cert_types, CertTypeConfig, CustomCertTypes};
pub use crate::enums::{ClientCertificateType, HashAlgorithm, ProtocolVersion};
pub use crate::error::Error;
pub use crate::negotiation::{choose, LocalCredentials, NegotiationPolicy};
pub use crate::registry::Registry;
pub use crate::secrets::HandshakeSecrets;
pub use crate::suites::CipherSuite;
