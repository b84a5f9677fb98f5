//! Advises which client-certificate types to request, for protocol
//! versions whose CertificateRequest message carries them.
//!
//! The advice is derived from the negotiated suite's key-exchange and
//! authentication algorithms and the protocol version; an explicit
//! custom list configured by the application overrides it entirely.

use crate::enums::{ClientCertificateType, ProtocolVersion};
use crate::error::{ConfigError, Error};
use crate::suites::{AuthAlgorithm, CipherSuite, KxAlgorithm};

/// A validated custom certificate-type list.
///
/// The wire format carries at most 255 entries and an empty request is
/// meaningless, so both are rejected at configuration time.
#[derive(Debug, Clone)]
pub struct CustomCertTypes(Vec<ClientCertificateType>);

impl CustomCertTypes {
    /// Validate and store `types`.
    pub fn new(types: &[ClientCertificateType]) -> Result<Self, Error> {
        if types.is_empty() {
            return Err(ConfigError::EmptyCustomCertificateTypes.into());
        }
        if types.len() > 0xff {
            return Err(ConfigError::CustomCertificateTypesTooLong.into());
        }
        Ok(Self(types.to_vec()))
    }

    /// The validated list.
    pub fn as_slice(&self) -> &[ClientCertificateType] {
        &self.0
    }
}

/// Configuration consulted when requesting client certificates.
#[derive(Debug, Clone, Default)]
pub struct CertTypeConfig {
    /// An explicit list that overrides all derivation when present.
    pub custom: Option<CustomCertTypes>,

    /// Authentication mechanisms excluded by the configured signature
    /// algorithms; their certificate types are not requested.
    pub excluded_auth: AuthAlgorithm,
}

/// The ordered certificate types to ask the peer for, given the
/// negotiated suite and protocol version.
pub fn request_cert_types(
    suite: &CipherSuite,
    version: ProtocolVersion,
    config: &CertTypeConfig,
) -> Vec<ClientCertificateType> {
    // If we have custom certificate types set, use them
    if let Some(custom) = &config.custom {
        return custom.as_slice().to_vec();
    }

    let mut types = Vec::new();
    let v = u16::from(version);
    let tls1_or_later = v >= u16::from(ProtocolVersion::TLSv1_0);
    let excluded = config.excluded_auth;

    #[cfg(feature = "gost")]
    {
        if tls1_or_later && suite.kx.intersects(KxAlgorithm::GOST) {
            types.extend_from_slice(&[
                ClientCertificateType::GostSign01,
                ClientCertificateType::GostSign12_256,
                ClientCertificateType::GostSign12_512,
                ClientCertificateType::GostSign12Legacy_256,
                ClientCertificateType::GostSign12Legacy_512,
            ]);
        }
        if v >= u16::from(ProtocolVersion::TLSv1_2) && suite.kx.intersects(KxAlgorithm::GOST18) {
            types.extend_from_slice(&[
                ClientCertificateType::GostSign12_256,
                ClientCertificateType::GostSign12_512,
            ]);
        }
    }

    #[cfg(feature = "bign")]
    if tls1_or_later && suite.kx.intersects(KxAlgorithm::ANY_BIGN) {
        types.push(ClientCertificateType::BignSign);
        return types;
    }

    if version == ProtocolVersion::SSLv3 && suite.kx.intersects(KxAlgorithm::DHE) {
        types.push(ClientCertificateType::RSAEphemeralDH);
        if !excluded.intersects(AuthAlgorithm::DSS) {
            types.push(ClientCertificateType::DSSEphemeralDH);
        }
    }

    if !excluded.intersects(AuthAlgorithm::RSA) {
        types.push(ClientCertificateType::RSASign);
    }
    if !excluded.intersects(AuthAlgorithm::DSS) {
        types.push(ClientCertificateType::DSSSign);
    }

    // ECDSA certs can be used with RSA cipher suites too, so there is no
    // key-exchange restriction here.
    if tls1_or_later && !excluded.intersects(AuthAlgorithm::ECDSA) {
        types.push(ClientCertificateType::ECDSASign);
    }

    types
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;

    fn by_name(name: &str) -> &'static CipherSuite {
        Registry::get()
            .find_by_standard_name(name)
            .unwrap()
    }

    #[test]
    fn custom_list_overrides_everything() {
        let custom =
            CustomCertTypes::new(&[ClientCertificateType::ECDSASign]).unwrap();
        let config = CertTypeConfig {
            custom: Some(custom),
            excluded_auth: AuthAlgorithm::ECDSA,
        };
        let suite = by_name("TLS_AES_128_GCM_SHA256");
        assert_eq!(
            request_cert_types(suite, ProtocolVersion::TLSv1_3, &config),
            vec![ClientCertificateType::ECDSASign]
        );
    }

    #[test]
    fn custom_list_is_validated() {
        assert_eq!(
            CustomCertTypes::new(&[]).unwrap_err(),
            ConfigError::EmptyCustomCertificateTypes.into()
        );
        let too_long = vec![ClientCertificateType::RSASign; 256];
        assert_eq!(
            CustomCertTypes::new(&too_long).unwrap_err(),
            ConfigError::CustomCertificateTypesTooLong.into()
        );
    }

    #[test]
    fn generic_path_emits_signing_types() {
        let suite = by_name("TLS_AES_128_GCM_SHA256");
        let config = CertTypeConfig::default();
        assert_eq!(
            request_cert_types(suite, ProtocolVersion::TLSv1_2, &config),
            vec![
                ClientCertificateType::RSASign,
                ClientCertificateType::DSSSign,
                ClientCertificateType::ECDSASign,
            ]
        );
    }

    #[test]
    fn exclusion_mask_drops_types() {
        let suite = by_name("TLS_AES_128_GCM_SHA256");
        let config = CertTypeConfig {
            custom: None,
            excluded_auth: AuthAlgorithm::DSS | AuthAlgorithm::ECDSA,
        };
        assert_eq!(
            request_cert_types(suite, ProtocolVersion::TLSv1_2, &config),
            vec![ClientCertificateType::RSASign]
        );
    }

    #[test]
    fn ecdsa_needs_tls1() {
        let suite = by_name("TLS_AES_128_GCM_SHA256");
        let config = CertTypeConfig::default();
        let types = request_cert_types(suite, ProtocolVersion::SSLv3, &config);
        assert!(!types.contains(&ClientCertificateType::ECDSASign));
    }

    #[cfg(feature = "tls12")]
    #[test]
    fn sslv3_ephemeral_dh_types() {
        let suite = by_name("TLS_DHE_RSA_WITH_AES_128_CBC_SHA");
        let config = CertTypeConfig::default();
        let types = request_cert_types(suite, ProtocolVersion::SSLv3, &config);
        assert_eq!(
            &types[..2],
            &[
                ClientCertificateType::RSAEphemeralDH,
                ClientCertificateType::DSSEphemeralDH,
            ]
        );
    }

    #[cfg(all(feature = "tls12", feature = "gost"))]
    #[test]
    fn gost_suites_emit_gost_types_first() {
        let suite = by_name("TLS_GOSTR341001_WITH_28147_CNT_IMIT");
        let config = CertTypeConfig::default();
        let types = request_cert_types(suite, ProtocolVersion::TLSv1_2, &config);
        assert_eq!(
            &types[..5],
            &[
                ClientCertificateType::GostSign01,
                ClientCertificateType::GostSign12_256,
                ClientCertificateType::GostSign12_512,
                ClientCertificateType::GostSign12Legacy_256,
                ClientCertificateType::GostSign12Legacy_512,
            ]
        );
        // the generic path still follows
        assert!(types.contains(&ClientCertificateType::RSASign));
    }

    #[cfg(all(feature = "tls12", feature = "bign"))]
    #[test]
    fn bign_suites_emit_a_single_type() {
        let suite = by_name("TLS_DHE_BIGN_WITH_BELT_CTR_MAC_HBELT");
        let config = CertTypeConfig::default();
        assert_eq!(
            request_cert_types(suite, ProtocolVersion::TLSv1_2, &config),
            vec![ClientCertificateType::BignSign]
        );
    }
}
