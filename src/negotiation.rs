//! Cipher-suite negotiation.
//!
//! [`choose()`] picks exactly one mutually supported suite from the
//! client-offered and server-enabled lists, or none.  Which list drives
//! the scan is decided by the policy (Suite-B profile and server
//! preference); the other list is the allow-set, matched by entry
//! identity so that duplicate ids cannot confuse the scan.

use crate::enums::{HashAlgorithm, ProtocolVersion};
#[cfg(feature = "logging")]
use crate::log::trace;
use crate::suites::{AuthAlgorithm, BulkCipher, CipherSuite, KxAlgorithm};

/// A pluggable acceptance policy consulted for every candidate suite,
/// e.g. a minimum strength floor.
pub trait SecurityPolicy {
    /// True if the candidate is acceptable at this strength.
    fn permits(&self, strength_bits: u16, suite: &CipherSuite) -> bool;
}

/// A [`SecurityPolicy`] that accepts every candidate.
#[derive(Debug, Default)]
pub struct AllowAnySuite;

impl SecurityPolicy for AllowAnySuite {
    fn permits(&self, _strength_bits: u16, _suite: &CipherSuite) -> bool {
        true
    }
}

/// Answers whether a compatible ephemeral elliptic-curve key or group can
/// be obtained for a candidate suite, from the groups the peer offered
/// and the local configuration.
pub trait EphemeralEcKeys {
    /// True if an ephemeral EC key usable with `suite` is obtainable.
    fn compatible_key_available(&self, suite: &CipherSuite) -> bool;
}

/// What the local configuration can actually support, independent of any
/// particular candidate suite.
///
/// The masks describe the key-exchange and authentication mechanisms
/// backed by configured certificates and parameters; a candidate's
/// algorithm bits must intersect both masks to survive.
pub struct LocalCredentials<'a> {
    /// Key-exchange mechanisms the local configuration supports.
    pub mask_k: KxAlgorithm,

    /// Authentication mechanisms the local configuration supports.
    pub mask_a: AuthAlgorithm,

    /// An SRP verifier is configured; adds the SRP bits to both masks.
    pub srp_enabled: bool,

    /// A server-side PSK callback is configured.  PSK-keyed suites are
    /// skipped without one.
    pub psk_server_configured: bool,

    /// At least one local certificate is configured.
    pub has_certificate: bool,

    /// Source of ephemeral EC keys for ECDHE candidates.
    pub ephemeral_ec: &'a dyn EphemeralEcKeys,
}

impl LocalCredentials<'_> {
    fn masks(&self) -> (KxAlgorithm, AuthAlgorithm) {
        let mut mask_k = self.mask_k;
        let mut mask_a = self.mask_a;
        if self.srp_enabled {
            mask_k = mask_k | KxAlgorithm::SRP;
            mask_a = mask_a | AuthAlgorithm::SRP;
        }
        (mask_k, mask_a)
    }
}

/// Configuration driving one negotiation.
pub struct NegotiationPolicy<'a> {
    /// The restricted high-assurance profile: forces the server list as
    /// priority and the client list as allow-set, overriding every other
    /// preference setting.
    pub suite_b: bool,

    /// The server's list takes priority (when Suite-B is off).
    pub server_preference: bool,

    /// Under server preference: if the client's single most-preferred
    /// suite uses this bulk cipher, all server suites using it are moved
    /// to the front of the server's list, preserving relative order.
    pub prioritize: Option<BulkCipher>,

    /// The negotiated protocol version.
    pub version: ProtocolVersion,

    /// Whether the transport is datagram (DTLS) rather than stream.
    pub is_datagram: bool,

    /// Pluggable acceptance policy.
    pub security: &'a dyn SecurityPolicy,

    /// When set and no local certificate exists (so only PSK can
    /// succeed), prefer a suite whose handshake digest matches this one
    /// over an earlier otherwise-eligible suite.  Models protocols whose
    /// PSK default assumes a specific digest.
    pub certless_psk_prefers: Option<HashAlgorithm>,

    /// Compatibility accommodation for a legacy client quirk: adopt the
    /// first eligible ECDHE + signature-authenticated match only as a
    /// fallback, letting any later non-quirky match win.
    pub prefer_first_ecdhe_ecdsa_match: bool,
}

/// Select exactly one suite both peers support, or none.
///
/// `offered` is the client's list in client preference order; `enabled`
/// is the server's list in configured order.  Entries are matched by
/// identity: both lists must hold references into the registry tables.
///
/// Returning `None` is a normal negotiation failure, not an error; the
/// caller aborts the handshake with the appropriate alert.
pub fn choose(
    offered: &[&'static CipherSuite],
    enabled: &[&'static CipherSuite],
    policy: &NegotiationPolicy<'_>,
    creds: &LocalCredentials<'_>,
) -> Option<&'static CipherSuite> {
    // The two sub-policies belong to different protocol regimes and must
    // not be combined; there is no defined precedence between them.
    debug_assert!(
        !(policy.prefer_first_ecdhe_ecdsa_match && policy.certless_psk_prefers.is_some()),
        "mutually exclusive negotiation sub-policies enabled together"
    );

    trace!(
        "choosing a cipher suite: {} offered, {} enabled",
        offered.len(),
        enabled.len()
    );

    // SUITE-B takes precedence over server preference and family priority.
    let (prio, allow): (&[&'static CipherSuite], _) = if policy.suite_b {
        (enabled, offered)
    } else if policy.server_preference {
        (enabled, offered)
    } else {
        (offered, enabled)
    };

    // If the flagged family is at the top of the client's preference list
    // and the server list contains it too, temporarily move all its
    // suites to the front of the server's list.  A stable partition, not
    // a sort: relative order is preserved on both sides of the split.
    let reordered;
    let prio = match family_first(prio, offered, policy) {
        Some(list) => {
            reordered = list;
            &reordered[..]
        }
        None => prio,
    };

    let prefer_digest = match policy.certless_psk_prefers {
        Some(digest) if creds.psk_server_configured && !creds.has_certificate => Some(digest),
        _ => None,
    };

    let mut fallback = None;

    for &candidate in prio {
        if !candidate.usable_for_version(policy.version, policy.is_datagram) {
            continue;
        }

        // TLS 1.3 suites are independent of certificate configuration, so
        // the key-exchange/auth checks only apply to older versions.
        if !policy.version.is_tls13() {
            let (mask_k, mask_a) = creds.masks();

            // with PSK there must be a server callback set
            if candidate.is_psk_keyed() && !creds.psk_server_configured {
                continue;
            }

            let mut ok = candidate.kx.intersects(mask_k) && candidate.auth.intersects(mask_a);

            if candidate.kx.intersects(KxAlgorithm::ANY_ECDHE) {
                ok = ok
                    && creds
                        .ephemeral_ec
                        .compatible_key_available(candidate);
            }

            trace!(
                "{}:[{:?}:{:?}:{:?}:{:?}]:{}",
                ok as u8,
                candidate.kx,
                candidate.auth,
                mask_k,
                mask_a,
                candidate.name
            );

            if !ok {
                continue;
            }
        }

        let Some(matched) = find_by_identity(allow, candidate) else {
            continue;
        };

        if !policy
            .security
            .permits(candidate.strength_bits, candidate)
        {
            continue;
        }

        if policy.prefer_first_ecdhe_ecdsa_match
            && candidate.kx.intersects(KxAlgorithm::ECDHE)
            && candidate.auth.intersects(AuthAlgorithm::ECDSA)
        {
            if fallback.is_none() {
                fallback = Some(matched);
            }
            continue;
        }

        if let Some(digest) = prefer_digest {
            if candidate.handshake_digest() == Some(digest) {
                trace!("selected {} (digest preference)", matched.name);
                return Some(matched);
            }
            if fallback.is_none() {
                fallback = Some(matched);
            }
            continue;
        }

        trace!("selected {}", matched.name);
        return Some(matched);
    }

    if let Some(suite) = fallback {
        trace!("selected {} (fallback)", suite.name);
        return Some(suite);
    }
    None
}

/// Build the reordered priority list for the family-prioritization quirk,
/// or `None` when the quirk does not apply.
///
/// Failure to allocate the working copy is non-fatal: the caller degrades
/// to the unmodified priority list.
fn family_first(
    prio: &[&'static CipherSuite],
    offered: &[&'static CipherSuite],
    policy: &NegotiationPolicy<'_>,
) -> Option<Vec<&'static CipherSuite>> {
    if policy.suite_b || !policy.server_preference {
        return None;
    }
    let family = policy.prioritize?;

    // the quirk only fires when the family is the client's first choice
    if offered.first()?.enc != family {
        return None;
    }
    if !prio.iter().any(|suite| suite.enc == family) {
        return None;
    }

    let mut reordered = Vec::new();
    if reordered.try_reserve_exact(prio.len()).is_err() {
        return None;
    }
    reordered.extend(prio.iter().filter(|suite| suite.enc == family));
    reordered.extend(prio.iter().filter(|suite| suite.enc != family));
    Some(reordered)
}

/// Find `suite` in `list` by identity, preserving encounter order.
///
/// Identity, not value: the lists hold references into the registry
/// tables, and two tables may never be confused even if an id collided.
fn find_by_identity(
    list: &[&'static CipherSuite],
    suite: &'static CipherSuite,
) -> Option<&'static CipherSuite> {
    list.iter()
        .find(|entry| std::ptr::eq(**entry, suite))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;

    struct NoEcKeys;

    impl EphemeralEcKeys for NoEcKeys {
        fn compatible_key_available(&self, _suite: &CipherSuite) -> bool {
            false
        }
    }

    struct AllEcKeys;

    impl EphemeralEcKeys for AllEcKeys {
        fn compatible_key_available(&self, _suite: &CipherSuite) -> bool {
            true
        }
    }

    fn tls13_policy<'a>() -> NegotiationPolicy<'a> {
        NegotiationPolicy {
            suite_b: false,
            server_preference: false,
            prioritize: None,
            version: ProtocolVersion::TLSv1_3,
            is_datagram: false,
            security: &AllowAnySuite,
            certless_psk_prefers: None,
            prefer_first_ecdhe_ecdsa_match: false,
        }
    }

    fn open_creds(ec: &dyn EphemeralEcKeys) -> LocalCredentials<'_> {
        LocalCredentials {
            mask_k: KxAlgorithm::NONE
                | KxAlgorithm::RSA
                | KxAlgorithm::DHE
                | KxAlgorithm::ECDHE
                | KxAlgorithm::ANY_PSK,
            mask_a: AuthAlgorithm::RSA | AuthAlgorithm::ECDSA | AuthAlgorithm::PSK,
            srp_enabled: false,
            psk_server_configured: true,
            has_certificate: true,
            ephemeral_ec: ec,
        }
    }

    fn by_name(name: &str) -> &'static CipherSuite {
        Registry::get()
            .find_by_standard_name(name)
            .unwrap()
    }

    #[test]
    fn empty_offer_selects_nothing() {
        let aes128 = by_name("TLS_AES_128_GCM_SHA256");
        let policy = tls13_policy();
        assert_eq!(
            choose(&[], &[aes128], &policy, &open_creds(&NoEcKeys)),
            None
        );
    }

    #[test]
    fn client_preference_takes_client_order() {
        let aes128 = by_name("TLS_AES_128_GCM_SHA256");
        let aes256 = by_name("TLS_AES_256_GCM_SHA384");
        let policy = tls13_policy();
        let creds = open_creds(&NoEcKeys);

        let chosen = choose(&[aes128, aes256], &[aes256, aes128], &policy, &creds);
        assert!(std::ptr::eq(chosen.unwrap(), aes128));
    }

    #[test]
    fn server_preference_takes_server_order() {
        let aes128 = by_name("TLS_AES_128_GCM_SHA256");
        let aes256 = by_name("TLS_AES_256_GCM_SHA384");
        let mut policy = tls13_policy();
        policy.server_preference = true;
        let creds = open_creds(&NoEcKeys);

        let chosen = choose(&[aes128, aes256], &[aes256, aes128], &policy, &creds);
        assert!(std::ptr::eq(chosen.unwrap(), aes256));
    }

    #[test]
    fn version_mismatch_selects_nothing() {
        let aes128 = by_name("TLS_AES_128_GCM_SHA256");
        let mut policy = tls13_policy();
        policy.version = ProtocolVersion::TLSv1_2;
        let creds = open_creds(&NoEcKeys);

        assert_eq!(choose(&[aes128], &[aes128], &policy, &creds), None);
    }

    #[cfg(feature = "tls12")]
    mod tls12 {
        use super::*;

        fn tls12_policy<'a>() -> NegotiationPolicy<'a> {
            NegotiationPolicy {
                version: ProtocolVersion::TLSv1_2,
                ..tls13_policy()
            }
        }

        #[test]
        fn disjoint_lists_select_nothing() {
            let a = by_name("TLS_RSA_WITH_AES_128_CBC_SHA");
            let b = by_name("TLS_RSA_WITH_AES_128_GCM_SHA256");
            let policy = tls12_policy();
            let creds = open_creds(&NoEcKeys);
            assert_eq!(choose(&[a], &[b], &policy, &creds), None);
        }

        #[test]
        fn example_scenario_server_preference() {
            // offered = [A(0x002F), B(0x009C)], enabled = [B, A] -> B
            let a = by_name("TLS_RSA_WITH_AES_128_CBC_SHA");
            let b = by_name("TLS_RSA_WITH_AES_128_GCM_SHA256");
            let mut policy = tls12_policy();
            policy.server_preference = true;
            let creds = open_creds(&NoEcKeys);

            let chosen = choose(&[a, b], &[b, a], &policy, &creds);
            assert!(std::ptr::eq(chosen.unwrap(), b));
        }

        #[test]
        fn suite_b_forces_server_priority() {
            let a = by_name("TLS_RSA_WITH_AES_128_CBC_SHA");
            let b = by_name("TLS_RSA_WITH_AES_128_GCM_SHA256");
            let mut policy = tls12_policy();
            policy.suite_b = true;
            let creds = open_creds(&NoEcKeys);

            let chosen = choose(&[a, b], &[b, a], &policy, &creds);
            assert!(std::ptr::eq(chosen.unwrap(), b));
        }

        #[test]
        fn kx_mask_filters_candidates() {
            let rsa = by_name("TLS_RSA_WITH_AES_128_GCM_SHA256");
            let dhe = by_name("TLS_DHE_RSA_WITH_AES_128_GCM_SHA256");
            let policy = tls12_policy();
            let mut creds = open_creds(&NoEcKeys);
            creds.mask_k = KxAlgorithm::DHE;

            let chosen = choose(&[rsa, dhe], &[rsa, dhe], &policy, &creds);
            assert!(std::ptr::eq(chosen.unwrap(), dhe));
        }

        #[test]
        fn psk_requires_server_callback() {
            let psk = by_name("TLS_PSK_WITH_AES_128_GCM_SHA256");
            let policy = tls12_policy();
            let mut creds = open_creds(&NoEcKeys);
            creds.psk_server_configured = false;

            assert_eq!(choose(&[psk], &[psk], &policy, &creds), None);
        }

        #[test]
        fn ecdhe_requires_compatible_key() {
            let ecdhe = by_name("TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256");
            let rsa = by_name("TLS_RSA_WITH_AES_128_GCM_SHA256");
            let policy = tls12_policy();

            let creds = open_creds(&NoEcKeys);
            let chosen = choose(&[ecdhe, rsa], &[ecdhe, rsa], &policy, &creds);
            assert!(std::ptr::eq(chosen.unwrap(), rsa));

            let creds = open_creds(&AllEcKeys);
            let chosen = choose(&[ecdhe, rsa], &[ecdhe, rsa], &policy, &creds);
            assert!(std::ptr::eq(chosen.unwrap(), ecdhe));
        }

        #[test]
        fn srp_widens_the_masks() {
            let srp = by_name("TLS_SRP_SHA_WITH_AES_128_CBC_SHA");
            let policy = tls12_policy();
            let mut creds = open_creds(&NoEcKeys);
            creds.mask_k = KxAlgorithm::NONE;
            creds.mask_a = AuthAlgorithm::NONE;

            assert_eq!(choose(&[srp], &[srp], &policy, &creds), None);

            creds.srp_enabled = true;
            let chosen = choose(&[srp], &[srp], &policy, &creds);
            assert!(std::ptr::eq(chosen.unwrap(), srp));
        }

        #[test]
        fn security_policy_can_reject() {
            struct Min256;
            impl SecurityPolicy for Min256 {
                fn permits(&self, strength_bits: u16, _suite: &CipherSuite) -> bool {
                    strength_bits >= 256
                }
            }

            let aes128 = by_name("TLS_RSA_WITH_AES_128_GCM_SHA256");
            let aes256 = by_name("TLS_RSA_WITH_AES_256_GCM_SHA384");
            let mut policy = tls12_policy();
            policy.security = &Min256;
            let creds = open_creds(&NoEcKeys);

            let chosen = choose(&[aes128, aes256], &[aes128, aes256], &policy, &creds);
            assert!(std::ptr::eq(chosen.unwrap(), aes256));
        }

        #[test]
        fn family_prioritization_reorders_server_list() {
            let chacha = by_name("TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256");
            let gcm = by_name("TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256");
            let mut policy = tls12_policy();
            policy.server_preference = true;
            policy.prioritize = Some(BulkCipher::ChaCha20Poly1305);
            let creds = open_creds(&AllEcKeys);

            // client leads with chacha: the server's gcm-first order flips
            let chosen = choose(&[chacha, gcm], &[gcm, chacha], &policy, &creds);
            assert!(std::ptr::eq(chosen.unwrap(), chacha));

            // client leads with gcm: the server order stands
            let chosen = choose(&[gcm, chacha], &[gcm, chacha], &policy, &creds);
            assert!(std::ptr::eq(chosen.unwrap(), gcm));
        }

        #[test]
        fn first_match_quirk_prefers_later_non_ecdsa() {
            let ecdsa = by_name("TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256");
            let rsa = by_name("TLS_RSA_WITH_AES_128_GCM_SHA256");
            let mut policy = tls12_policy();
            policy.prefer_first_ecdhe_ecdsa_match = true;
            let creds = open_creds(&AllEcKeys);

            // a later non-quirky suite wins over the earlier quirky one
            let chosen = choose(&[ecdsa, rsa], &[ecdsa, rsa], &policy, &creds);
            assert!(std::ptr::eq(chosen.unwrap(), rsa));

            // with nothing else eligible, the quirky fallback is used
            let chosen = choose(&[ecdsa], &[ecdsa], &policy, &creds);
            assert!(std::ptr::eq(chosen.unwrap(), ecdsa));
        }
    }

    #[test]
    fn certless_psk_digest_preference() {
        let sha384 = by_name("TLS_AES_256_GCM_SHA384");
        let sha256 = by_name("TLS_AES_128_GCM_SHA256");
        let mut policy = tls13_policy();
        policy.certless_psk_prefers = Some(HashAlgorithm::SHA256);
        let mut creds = open_creds(&NoEcKeys);
        creds.has_certificate = false;

        // an exact digest match later in the list beats the earlier suite
        let chosen = choose(&[sha384, sha256], &[sha384, sha256], &policy, &creds);
        assert!(std::ptr::eq(chosen.unwrap(), sha256));

        // without any match, the first eligible suite is the fallback
        let chosen = choose(&[sha384], &[sha384], &policy, &creds);
        assert!(std::ptr::eq(chosen.unwrap(), sha384));

        // with a certificate present the preference is inert
        creds.has_certificate = true;
        let chosen = choose(&[sha384, sha256], &[sha384, sha256], &policy, &creds);
        assert!(std::ptr::eq(chosen.unwrap(), sha384));
    }

    #[test]
    fn choose_is_deterministic() {
        let aes128 = by_name("TLS_AES_128_GCM_SHA256");
        let aes256 = by_name("TLS_AES_256_GCM_SHA384");
        let policy = tls13_policy();
        let creds = open_creds(&NoEcKeys);

        let first = choose(&[aes128, aes256], &[aes256, aes128], &policy, &creds);
        for _ in 0..16 {
            let again = choose(&[aes128, aes256], &[aes256, aes128], &policy, &creds);
            assert_eq!(first, again);
        }
    }
}
