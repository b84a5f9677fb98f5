#![allow(missing_docs)]
#![allow(clippy::upper_case_acronyms)]
#![allow(non_camel_case_types)]

enum_builder! {
    /// The `ProtocolVersion` TLS protocol enum.  Values in this enum are taken
    /// from the various RFCs covering TLS, and are listed by IANA.
    /// The `Unknown` item is used when processing unrecognized ordinals,
    /// and `Unknown(0)` doubles as "no version" in suite applicability
    /// ranges.
    ///
    /// `DTLSv0_9` is the pre-standard version of DTLS 1.0 that some
    /// deployments still speak.
    #[repr(u16)]
    pub enum ProtocolVersion {
        SSLv2 => 0x0002,
        SSLv3 => 0x0300,
        TLSv1_0 => 0x0301,
        TLSv1_1 => 0x0302,
        TLSv1_2 => 0x0303,
        TLSv1_3 => 0x0304,
        DTLSv0_9 => 0x0100,
        DTLSv1_0 => 0xFEFF,
        DTLSv1_2 => 0xFEFD,
        DTLSv1_3 => 0xFEFC,
    }
}

impl ProtocolVersion {
    /// True for the datagram family of versions.
    pub fn is_dtls(&self) -> bool {
        matches!(
            self,
            Self::DTLSv0_9 | Self::DTLSv1_0 | Self::DTLSv1_2 | Self::DTLSv1_3
        )
    }

    /// True for versions using the modern (extract/expand) secret schedule.
    pub fn is_tls13(&self) -> bool {
        matches!(self, Self::TLSv1_3 | Self::DTLSv1_3)
    }
}

enum_builder! {
    /// The `HashAlgorithm` TLS protocol enum.  Values in this enum are taken
    /// from the various RFCs covering TLS, and are listed by IANA.
    /// The `Unknown` item is used when processing unrecognized ordinals.
    #[repr(u8)]
    pub enum HashAlgorithm {
        NONE => 0x00,
        MD5 => 0x01,
        SHA1 => 0x02,
        SHA224 => 0x03,
        SHA256 => 0x04,
        SHA384 => 0x05,
        SHA512 => 0x06,
    }
}

enum_builder! {
    /// The `ClientCertificateType` TLS protocol enum.  Values in this enum
    /// are taken from the various RFCs covering TLS, and are listed by IANA.
    /// The `Unknown` item is used when processing unrecognized ordinals.
    ///
    /// The GOST values cover both the IANA registrations and the legacy
    /// pre-registration code points; `BignSign` is the code point used by
    /// the bign/belt national suites.
    #[repr(u8)]
    pub enum ClientCertificateType {
        RSASign => 0x01,
        DSSSign => 0x02,
        RSAFixedDH => 0x03,
        DSSFixedDH => 0x04,
        RSAEphemeralDH => 0x05,
        DSSEphemeralDH => 0x06,
        FortezzaDMS => 0x14,
        GostSign01 => 0x15,
        ECDSASign => 0x40,
        RSAFixedECDH => 0x41,
        ECDSAFixedECDH => 0x42,
        GostSign12_256 => 0x43,
        GostSign12_512 => 0x44,
        BignSign => 0xe7,
        GostSign12Legacy_256 => 0xee,
        GostSign12Legacy_512 => 0xef,
    }
}
