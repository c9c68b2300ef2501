// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! X.509 certificate structure and decoding.
//!
//! The decoder makes a single forward pass over a DER buffer and fills a
//! [`Certificate`] whose every byte field is a borrowed view into that
//! buffer; nothing is copied and the record cannot outlive the input. The
//! raw TBSCertificate span is captured as encoded so chain validation can
//! hand the exact signed bytes to the signature primitive.
//!
//! ```text
//! Certificate  ::=  SEQUENCE  {
//!     tbsCertificate       TBSCertificate,
//!     signatureAlgorithm   AlgorithmIdentifier,
//!     signatureValue       BIT STRING
//! }
//! ```
//!
//! Decoding is fail-fast: the first structural error aborts the whole
//! parse, and a failed parse must be treated as "no certificate".

pub mod name;
pub mod spki;

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use ::spki::AlgorithmIdentifierRef;
use der::Decode;

use self::name::Name;
use self::spki::SubjectPublicKeyInfo;
use crate::error::{Error, MalformedKind, PemError, Result};
use crate::time::Validity;
use crate::tlv::{self, tag, Cursor, Tlv};
use crate::x509::extensions::Extensions;

// ============================================================================
// Version - RFC 5280 Section 4.1.2.1
// ============================================================================

/// X.509 certificate version.
///
/// ```text
/// Version  ::=  INTEGER  {  v1(0), v2(1), v3(2)  }
/// ```
///
/// The field is optional in the encoding and defaults to v1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Version {
    /// Version 1 (value 0) - the default when the field is absent
    #[default]
    V1 = 0,
    /// Version 2 (value 1)
    V2 = 1,
    /// Version 3 (value 2) - required for extensions
    V3 = 2,
}

impl Version {
    /// The integer value of the version.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Create a Version from its integer value.
    pub fn from_value(value: u32) -> Result<Self> {
        match value {
            0 => Ok(Version::V1),
            1 => Ok(Version::V2),
            2 => Ok(Version::V3),
            v => Err(Error::Malformed(MalformedKind::InvalidVersion(
                v.min(u32::from(u8::MAX)) as u8,
            ))),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::V1 => write!(f, "v1"),
            Version::V2 => write!(f, "v2"),
            Version::V3 => write!(f, "v3"),
        }
    }
}

// ============================================================================
// TBSCertificate - RFC 5280 Section 4.1
// ============================================================================

/// The to-be-signed certificate body.
///
/// ```text
/// TBSCertificate  ::=  SEQUENCE  {
///     version         [0]  EXPLICIT Version DEFAULT v1,
///     serialNumber         CertificateSerialNumber,
///     signature            AlgorithmIdentifier,
///     issuer               Name,
///     validity             Validity,
///     subject              Name,
///     subjectPublicKeyInfo SubjectPublicKeyInfo,
///     issuerUniqueID  [1]  IMPLICIT UniqueIdentifier OPTIONAL,
///     subjectUniqueID [2]  IMPLICIT UniqueIdentifier OPTIONAL,
///     extensions      [3]  EXPLICIT Extensions OPTIONAL
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TbsCertificate<'a> {
    /// The complete DER encoding of the TBSCertificate, header included.
    /// These are the exact bytes the issuer signed.
    pub raw: &'a [u8],

    /// Certificate version; v1 when the field is absent.
    pub version: Version,

    /// Serial number content octets, as encoded.
    pub serial_number: &'a [u8],

    /// Signature algorithm declared inside the TBS. The decoder checks it
    /// structurally but does not require byte-equality with the outer
    /// signatureAlgorithm.
    pub signature: AlgorithmIdentifierRef<'a>,

    /// Issuer Distinguished Name.
    pub issuer: Name<'a>,

    /// Validity period.
    pub validity: Validity,

    /// Subject Distinguished Name.
    pub subject: Name<'a>,

    /// Subject's public key.
    pub subject_public_key_info: SubjectPublicKeyInfo<'a>,

    /// Issuer unique identifier payload (v2/v3, rarely used).
    pub issuer_unique_id: Option<&'a [u8]>,

    /// Subject unique identifier payload (v2/v3, rarely used).
    pub subject_unique_id: Option<&'a [u8]>,

    /// Recognized extensions; defaults when the certificate carries none.
    pub extensions: Extensions<'a>,
}

impl<'a> TbsCertificate<'a> {
    fn parse(unit: &Tlv<'a>) -> Result<Self> {
        let mut cursor = unit.cursor();

        let version = match cursor.peek_tag() {
            Some(t) if t == tag::context(0) => {
                let wrapper = cursor.read()?;
                let mut inner = wrapper.cursor();
                let value = tlv::small_uint(&inner.expect(tag::INTEGER)?)?;
                inner.finish()?;
                Version::from_value(value)?
            }
            _ => Version::V1,
        };

        let serial_number = cursor.expect(tag::INTEGER)?.value;
        let signature = AlgorithmIdentifierRef::from_der(cursor.expect(tag::SEQUENCE)?.raw)?;
        let issuer = Name::parse(&cursor.expect(tag::SEQUENCE)?)?;
        let validity = Validity::parse(&cursor.expect(tag::SEQUENCE)?)?;
        let subject = Name::parse(&cursor.expect(tag::SEQUENCE)?)?;
        let subject_public_key_info = SubjectPublicKeyInfo::parse(&cursor.expect(tag::SEQUENCE)?)?;

        let issuer_unique_id = match cursor.peek_tag() {
            Some(t) if t == tag::context_primitive(1) => {
                let unit = cursor.read()?;
                let (_, payload) = tlv::bit_string(&unit)?;
                Some(payload)
            }
            _ => None,
        };
        let subject_unique_id = match cursor.peek_tag() {
            Some(t) if t == tag::context_primitive(2) => {
                let unit = cursor.read()?;
                let (_, payload) = tlv::bit_string(&unit)?;
                Some(payload)
            }
            _ => None,
        };
        let extensions = match cursor.peek_tag() {
            Some(t) if t == tag::context(3) => {
                let wrapper = cursor.read()?;
                let mut inner = wrapper.cursor();
                let extensions = Extensions::parse(&inner.expect(tag::SEQUENCE)?)?;
                inner.finish()?;
                extensions
            }
            _ => Extensions::default(),
        };

        cursor.finish()?;

        Ok(Self {
            raw: unit.raw,
            version,
            serial_number,
            signature,
            issuer,
            validity,
            subject,
            subject_public_key_info,
            issuer_unique_id,
            subject_unique_id,
            extensions,
        })
    }
}

// ============================================================================
// Certificate - RFC 5280 Section 4.1
// ============================================================================

/// A decoded X.509 certificate: a read-only structured view over the
/// original DER buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate<'a> {
    /// The certificate body covered by the signature.
    pub tbs_certificate: TbsCertificate<'a>,

    /// The signature algorithm declared by the issuer.
    pub signature_algorithm: AlgorithmIdentifierRef<'a>,

    /// Signature BIT STRING payload.
    pub signature_value: &'a [u8],
}

impl<'a> Certificate<'a> {
    /// Decode a certificate from a DER buffer.
    ///
    /// The whole buffer must be exactly one certificate: trailing bytes
    /// after the outer SEQUENCE are an error, as is any truncated or
    /// ill-typed field inside it.
    pub fn from_der(bytes: &'a [u8]) -> Result<Self> {
        let mut outer = Cursor::new(bytes);
        let cert_unit = outer.expect(tag::SEQUENCE)?;
        outer.finish()?;

        let mut cursor = cert_unit.cursor();
        let tbs_certificate = TbsCertificate::parse(&cursor.expect(tag::SEQUENCE)?)?;
        let signature_algorithm =
            AlgorithmIdentifierRef::from_der(cursor.expect(tag::SEQUENCE)?.raw)?;
        let sig_unit = cursor.expect(tag::BIT_STRING)?;
        let (unused, signature_value) = tlv::bit_string(&sig_unit)?;
        if unused != 0 {
            return Err(Error::Malformed(MalformedKind::InvalidBitString));
        }
        cursor.finish()?;

        Ok(Self {
            tbs_certificate,
            signature_algorithm,
            signature_value,
        })
    }

    /// The subject Distinguished Name.
    pub fn subject(&self) -> &Name<'a> {
        &self.tbs_certificate.subject
    }

    /// The issuer Distinguished Name.
    pub fn issuer(&self) -> &Name<'a> {
        &self.tbs_certificate.issuer
    }

    /// Serial number content octets.
    pub fn serial_number(&self) -> &'a [u8] {
        self.tbs_certificate.serial_number
    }

    /// The validity period.
    pub fn validity(&self) -> &Validity {
        &self.tbs_certificate.validity
    }

    /// The certificate version.
    pub fn version(&self) -> Version {
        self.tbs_certificate.version
    }

    /// The recognized extension set.
    pub fn extensions(&self) -> &Extensions<'a> {
        &self.tbs_certificate.extensions
    }

    /// The subject's public key.
    pub fn subject_public_key_info(&self) -> &SubjectPublicKeyInfo<'a> {
        &self.tbs_certificate.subject_public_key_info
    }

    /// The exact signed bytes, for the signature primitive.
    pub fn tbs_raw(&self) -> &'a [u8] {
        self.tbs_certificate.raw
    }

    /// Signature payload bytes.
    pub fn signature_bytes(&self) -> &'a [u8] {
        self.signature_value
    }

    /// Whether basicConstraints marks this certificate as a CA.
    pub fn is_ca(&self) -> bool {
        self.tbs_certificate.extensions.basic_constraints.ca
    }

    /// Whether subject and issuer are the same encoded name.
    pub fn is_self_issued(&self) -> bool {
        self.tbs_certificate.subject == self.tbs_certificate.issuer
    }
}

impl fmt::Display for Certificate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Certificate:")?;
        writeln!(f, "  Version: {}", self.tbs_certificate.version)?;
        writeln!(f, "  Serial Number: {:02x?}", self.serial_number())?;
        writeln!(f, "  Signature Algorithm: {}", self.signature_algorithm.oid)?;
        writeln!(f, "  Issuer: {}", self.tbs_certificate.issuer)?;
        writeln!(
            f,
            "  Not Before: {}",
            self.tbs_certificate.validity.not_before.to_date_time()
        )?;
        writeln!(
            f,
            "  Not After: {}",
            self.tbs_certificate.validity.not_after.to_date_time()
        )?;
        writeln!(f, "  Subject: {}", self.tbs_certificate.subject)?;
        Ok(())
    }
}

// ============================================================================
// PEM input
// ============================================================================

/// Decode one PEM-armored certificate into its DER bytes.
///
/// The returned buffer is what [`Certificate::from_der`] borrows from; the
/// caller keeps it alive for as long as the record is used.
pub fn decode_pem(pem: &str) -> Result<Vec<u8>> {
    let (label, der_bytes) = pem_rfc7468::decode_vec(pem.as_bytes())?;
    if label != "CERTIFICATE" {
        return Err(Error::Pem(PemError::UnexpectedLabel(
            alloc::string::String::from(label),
        )));
    }
    Ok(der_bytes)
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::*;
    use crate::certificate::spki::PublicKey;
    use crate::testutil::{self, tlv_vec, CertBuilder};
    use crate::x509::extensions::KeyUsage;
    use crate::x509::oids;
    use alloc::vec::Vec;

    #[test]
    fn test_decode_v3_certificate() {
        let der_bytes = CertBuilder::new()
            .serial(&[0x01, 0x02, 0x03])
            .extensions(alloc::vec![
                testutil::ext_basic_constraints(false, None),
                testutil::ext_key_usage(&[0x80], 7),
            ])
            .build();
        let cert = Certificate::from_der(&der_bytes).unwrap();

        assert_eq!(cert.version(), Version::V3);
        assert_eq!(cert.serial_number(), &[0x01, 0x02, 0x03]);
        assert_eq!(cert.signature_algorithm.oid, oids::ECDSA_WITH_SHA256);
        assert_eq!(cert.issuer().common_name, Some("CA1"));
        assert_eq!(cert.subject().common_name, Some("leaf"));
        assert!(!cert.is_ca());
        assert!(cert
            .extensions()
            .key_usage
            .unwrap()
            .has(KeyUsage::DIGITAL_SIGNATURE));
        assert!(matches!(
            cert.subject_public_key_info().key,
            PublicKey::Ec(_)
        ));
        assert_eq!(
            cert.signature_bytes(),
            &[0xde, 0xad, 0xbe, 0xef, 0x10, 0x32, 0x54, 0x76]
        );
    }

    #[test]
    fn test_decode_v1_certificate() {
        // No [0] version, no extensions.
        let der_bytes = CertBuilder::new().version(None).build();
        let cert = Certificate::from_der(&der_bytes).unwrap();

        assert_eq!(cert.version(), Version::V1);
        assert!(!cert.extensions().basic_constraints.ca);
        assert!(cert.extensions().key_usage.is_none());
        assert!(cert.extensions().subject_alt_name.names.is_empty());
    }

    #[test]
    fn test_tbs_raw_span() {
        let der_bytes = CertBuilder::new().build();
        let cert = Certificate::from_der(&der_bytes).unwrap();

        let tbs = cert.tbs_raw();
        assert_eq!(tbs[0], 0x30);
        // The span is a window of the input, located right after the outer
        // SEQUENCE header.
        assert!(der_bytes
            .windows(tbs.len())
            .any(|window| window == tbs));
        assert!(tbs.len() < der_bytes.len());
    }

    #[test]
    fn test_unique_ids() {
        let der_bytes = CertBuilder::new()
            .issuer_unique_id(&[0xaa, 0xbb])
            .subject_unique_id(&[0xcc])
            .build();
        let cert = Certificate::from_der(&der_bytes).unwrap();
        assert_eq!(cert.tbs_certificate.issuer_unique_id, Some(&[0xaa, 0xbb][..]));
        assert_eq!(cert.tbs_certificate.subject_unique_id, Some(&[0xcc][..]));
    }

    #[test]
    fn test_unique_ids_absent() {
        let der_bytes = CertBuilder::new().build();
        let cert = Certificate::from_der(&der_bytes).unwrap();
        assert_eq!(cert.tbs_certificate.issuer_unique_id, None);
        assert_eq!(cert.tbs_certificate.subject_unique_id, None);
    }

    #[test]
    fn test_invalid_version_rejected() {
        let der_bytes = CertBuilder::new().version(Some(3)).build();
        assert!(matches!(
            Certificate::from_der(&der_bytes),
            Err(Error::Malformed(MalformedKind::InvalidVersion(3)))
        ));
    }

    #[test]
    fn test_signature_algorithm_mismatch_decodes() {
        // The decoder checks structure only; byte-equality between the
        // inner and outer algorithm is the validator's concern, if anyone's.
        let der_bytes = CertBuilder::new()
            .outer_sig_alg(testutil::alg_id(oids::ECDSA_WITH_SHA384))
            .build();
        let cert = Certificate::from_der(&der_bytes).unwrap();
        assert_eq!(cert.tbs_certificate.signature.oid, oids::ECDSA_WITH_SHA256);
        assert_eq!(cert.signature_algorithm.oid, oids::ECDSA_WITH_SHA384);
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let mut der_bytes = CertBuilder::new().build();
        der_bytes.push(0x00);
        assert!(matches!(
            Certificate::from_der(&der_bytes),
            Err(Error::Malformed(MalformedKind::TrailingBytes))
        ));
    }

    #[test]
    fn test_every_prefix_rejected() {
        // No strict prefix may decode: truncation anywhere must surface as
        // a malformed encoding, never as a shorter "successful" parse.
        let der_bytes = CertBuilder::new()
            .extensions(alloc::vec![testutil::ext_basic_constraints(true, Some(1))])
            .build();
        for len in 0..der_bytes.len() {
            let result = Certificate::from_der(&der_bytes[..len]);
            assert!(
                result.as_ref().is_err_and(Error::is_malformed),
                "prefix of length {} decoded",
                len
            );
        }
    }

    #[test]
    fn test_reparse_is_identical() {
        let der_bytes = CertBuilder::new()
            .extensions(alloc::vec![
                testutil::ext_basic_constraints(true, Some(2)),
                testutil::ext_key_usage(&[0x04], 2),
            ])
            .build();
        let first = Certificate::from_der(&der_bytes).unwrap();
        let second = Certificate::from_der(&der_bytes).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_field_rejected() {
        // TBS with only a serial number.
        let tbs = tlv_vec(0x30, &testutil::uint_der(&[0x01]));
        let mut content = tbs;
        content.extend_from_slice(&testutil::alg_id(oids::ECDSA_WITH_SHA256));
        content.extend_from_slice(&testutil::bit_string_der(0, &[0x00]));
        let der_bytes = tlv_vec(0x30, &content);
        assert!(Certificate::from_der(&der_bytes)
            .as_ref()
            .is_err_and(Error::is_malformed));
    }

    #[test]
    fn test_is_self_issued() {
        let ca = testutil::ca_cert("Root CA", None);
        let cert = Certificate::from_der(&ca).unwrap();
        assert!(cert.is_self_issued());
        assert!(cert.is_ca());

        let leaf = CertBuilder::new().build();
        let cert = Certificate::from_der(&leaf).unwrap();
        assert!(!cert.is_self_issued());
    }

    #[test]
    fn test_nested_indefinite_length_rejected() {
        // Splice an indefinite-length TBS into an otherwise fine shell.
        let mut content: Vec<u8> = alloc::vec![0x30, 0x80, 0x00, 0x00];
        content.extend_from_slice(&testutil::alg_id(oids::ECDSA_WITH_SHA256));
        content.extend_from_slice(&testutil::bit_string_der(0, &[0x00]));
        let der_bytes = tlv_vec(0x30, &content);
        assert!(matches!(
            Certificate::from_der(&der_bytes),
            Err(Error::Malformed(MalformedKind::IndefiniteLength))
        ));
    }

    #[test]
    fn test_decode_pem_roundtrip() {
        let der_bytes = CertBuilder::new().build();
        let pem = pem_rfc7468::encode_string(
            "CERTIFICATE",
            pem_rfc7468::LineEnding::LF,
            &der_bytes,
        )
        .unwrap();
        let decoded = decode_pem(&pem).unwrap();
        assert_eq!(decoded, der_bytes);
        let cert = Certificate::from_der(&decoded).unwrap();
        assert_eq!(cert.subject().common_name, Some("leaf"));
    }

    #[test]
    fn test_decode_pem_wrong_label() {
        let der_bytes = CertBuilder::new().build();
        let pem = pem_rfc7468::encode_string(
            "PRIVATE KEY",
            pem_rfc7468::LineEnding::LF,
            &der_bytes,
        )
        .unwrap();
        assert!(matches!(
            decode_pem(&pem),
            Err(Error::Pem(PemError::UnexpectedLabel(_)))
        ));
    }

    #[test]
    fn test_display() {
        let der_bytes = CertBuilder::new().build();
        let cert = Certificate::from_der(&der_bytes).unwrap();
        let rendered = alloc::format!("{}", cert);
        assert!(rendered.contains("Subject: CN=leaf"));
        assert!(rendered.contains("Version: v3"));
    }
}
