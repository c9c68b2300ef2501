// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! X.509 v3 certificate extensions.
//!
//! ```text
//! Extensions  ::=  SEQUENCE SIZE (1..MAX) OF Extension
//! Extension   ::=  SEQUENCE  {
//!     extnID      OBJECT IDENTIFIER,
//!     critical    BOOLEAN DEFAULT FALSE,
//!     extnValue   OCTET STRING
//! }
//! ```
//!
//! Each recognized extnID selects a decoder for the OCTET STRING's inner
//! content. Unrecognized extensions are skipped; when one is marked
//! critical its OID is recorded so the validator (or the caller) can apply
//! policy. Malformed content inside a *recognized* extension aborts the
//! whole certificate decode: no partial extension state is ever exposed.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use const_oid::ObjectIdentifier;

use crate::certificate::name::GeneralName;
use crate::certificate::spki::parse_oid;
use crate::error::{Error, MalformedKind, Result};
use crate::tlv::{self, tag, Tlv};
use crate::x509::oids;

/// Fixed capacity of the subject-alternative-name list.
///
/// Entries past the capacity are still structurally validated but not
/// stored, so the same input always produces the same (possibly capped)
/// output.
pub const MAX_SUBJECT_ALT_NAMES: usize = 4;

// ============================================================================
// Basic Constraints - RFC 5280 Section 4.2.1.9
// ============================================================================

/// Basic Constraints extension.
///
/// ```text
/// BasicConstraints ::= SEQUENCE {
///     cA                      BOOLEAN DEFAULT FALSE,
///     pathLenConstraint       INTEGER (0..MAX) OPTIONAL
/// }
/// ```
///
/// An absent extension decodes to the default value, which is
/// indistinguishable from an explicit `{ cA FALSE }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BasicConstraints {
    /// Whether the subject may act as a CA.
    pub ca: bool,
    /// Maximum number of non-self-issued intermediate certificates that
    /// may follow this one in a valid path.
    pub path_len_constraint: Option<u32>,
}

impl BasicConstraints {
    fn parse(content: &[u8]) -> Result<Self> {
        let mut outer = tlv::Cursor::new(content);
        let seq = outer.expect(tag::SEQUENCE)?;
        outer.finish()?;

        let mut cursor = seq.cursor();
        let ca = match cursor.peek_tag() {
            Some(tag::BOOLEAN) => parse_boolean(&cursor.read()?)?,
            _ => false,
        };
        let path_len_constraint = match cursor.peek_tag() {
            Some(tag::INTEGER) => Some(tlv::small_uint(&cursor.read()?)?),
            _ => None,
        };
        cursor.finish()?;

        Ok(Self {
            ca,
            path_len_constraint,
        })
    }
}

// ============================================================================
// Key Usage - RFC 5280 Section 4.2.1.3
// ============================================================================

/// Key Usage bit flags.
///
/// ```text
/// KeyUsage ::= BIT STRING {
///     digitalSignature        (0),
///     nonRepudiation          (1),
///     keyEncipherment         (2),
///     dataEncipherment        (3),
///     keyAgreement            (4),
///     keyCertSign             (5),
///     cRLSign                 (6),
///     encipherOnly            (7),
///     decipherOnly            (8)
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyUsage {
    bits: u16,
}

impl KeyUsage {
    // Bit positions match DER BIT STRING numbering: bit 0 is the MSB of
    // byte 0, bit 8 the MSB of byte 1. The two payload bytes are stored as
    // a big-endian u16 so these constants work directly with `has()`.

    /// Digital signature (bit 0)
    pub const DIGITAL_SIGNATURE: u16 = 1 << 15;
    /// Non-repudiation / content commitment (bit 1)
    pub const NON_REPUDIATION: u16 = 1 << 14;
    /// Key encipherment (bit 2)
    pub const KEY_ENCIPHERMENT: u16 = 1 << 13;
    /// Data encipherment (bit 3)
    pub const DATA_ENCIPHERMENT: u16 = 1 << 12;
    /// Key agreement (bit 4)
    pub const KEY_AGREEMENT: u16 = 1 << 11;
    /// Certificate signing (bit 5)
    pub const KEY_CERT_SIGN: u16 = 1 << 10;
    /// CRL signing (bit 6)
    pub const CRL_SIGN: u16 = 1 << 9;
    /// Encipher only (bit 7)
    pub const ENCIPHER_ONLY: u16 = 1 << 8;
    /// Decipher only (bit 8)
    pub const DECIPHER_ONLY: u16 = 1 << 7;

    /// Create a KeyUsage from raw bit flags.
    pub fn new(bits: u16) -> Self {
        Self { bits }
    }

    /// Whether a specific usage bit is set.
    pub fn has(&self, usage: u16) -> bool {
        (self.bits & usage) != 0
    }

    /// Raw flag word.
    pub fn bits(&self) -> u16 {
        self.bits
    }

    fn parse(content: &[u8]) -> Result<Self> {
        let mut outer = tlv::Cursor::new(content);
        let unit = outer.expect(tag::BIT_STRING)?;
        outer.finish()?;

        let (unused, payload) = tlv::bit_string(&unit)?;
        let b0 = payload.first().copied().unwrap_or(0);
        let b1 = payload.get(1).copied().unwrap_or(0);
        let mut bits = u16::from_be_bytes([b0, b1]);

        // Trailing unused bits carry no meaning; clear them so two
        // encodings of the same flag set compare equal.
        match payload.len() {
            1 => bits &= !(((1u16 << unused) - 1) << 8),
            2 => bits &= !((1u16 << unused) - 1),
            _ => {}
        }

        Ok(Self { bits })
    }
}

impl fmt::Display for KeyUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let named = [
            (Self::DIGITAL_SIGNATURE, "digitalSignature"),
            (Self::NON_REPUDIATION, "nonRepudiation"),
            (Self::KEY_ENCIPHERMENT, "keyEncipherment"),
            (Self::DATA_ENCIPHERMENT, "dataEncipherment"),
            (Self::KEY_AGREEMENT, "keyAgreement"),
            (Self::KEY_CERT_SIGN, "keyCertSign"),
            (Self::CRL_SIGN, "cRLSign"),
            (Self::ENCIPHER_ONLY, "encipherOnly"),
            (Self::DECIPHER_ONLY, "decipherOnly"),
        ];

        let mut first = true;
        for (bit, label) in named {
            if self.has(bit) {
                if !first {
                    write!(f, ", ")?;
                }
                write!(f, "{}", label)?;
                first = false;
            }
        }
        Ok(())
    }
}

// ============================================================================
// Extended Key Usage - RFC 5280 Section 4.2.1.12
// ============================================================================

/// Extended Key Usage purpose OIDs.
pub mod extended_key_usage_oids {
    use const_oid::ObjectIdentifier;

    /// TLS Web Server Authentication - 1.3.6.1.5.5.7.3.1
    pub const SERVER_AUTH: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.6.1.5.5.7.3.1");

    /// TLS Web Client Authentication - 1.3.6.1.5.5.7.3.2
    pub const CLIENT_AUTH: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.6.1.5.5.7.3.2");

    /// Code Signing - 1.3.6.1.5.5.7.3.3
    pub const CODE_SIGNING: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.6.1.5.5.7.3.3");

    /// Email Protection - 1.3.6.1.5.5.7.3.4
    pub const EMAIL_PROTECTION: ObjectIdentifier =
        ObjectIdentifier::new_unwrap("1.3.6.1.5.5.7.3.4");

    /// Time Stamping - 1.3.6.1.5.5.7.3.8
    pub const TIME_STAMPING: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.6.1.5.5.7.3.8");

    /// OCSP Signing - 1.3.6.1.5.5.7.3.9
    pub const OCSP_SIGNING: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.6.1.5.5.7.3.9");
}

/// Extended Key Usage extension: the list of purpose OIDs, stored as
/// parsed.
///
/// ```text
/// ExtKeyUsageSyntax ::= SEQUENCE SIZE (1..MAX) OF KeyPurposeId
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedKeyUsage {
    /// Purpose OIDs in encoding order.
    pub key_purposes: Vec<ObjectIdentifier>,
}

impl ExtendedKeyUsage {
    fn parse(content: &[u8]) -> Result<Self> {
        let mut outer = tlv::Cursor::new(content);
        let seq = outer.expect(tag::SEQUENCE)?;
        outer.finish()?;

        let mut key_purposes = Vec::new();
        let mut cursor = seq.cursor();
        while !cursor.is_empty() {
            key_purposes.push(parse_oid(&cursor.expect(tag::OID)?)?);
        }

        Ok(Self { key_purposes })
    }

    /// Whether a specific purpose is present.
    pub fn has_purpose(&self, oid: &ObjectIdentifier) -> bool {
        self.key_purposes.iter().any(|p| p == oid)
    }

    /// Whether the certificate may authenticate a TLS server.
    pub fn is_server_auth(&self) -> bool {
        self.has_purpose(&extended_key_usage_oids::SERVER_AUTH)
    }

    /// Whether the certificate may authenticate a TLS client.
    pub fn is_client_auth(&self) -> bool {
        self.has_purpose(&extended_key_usage_oids::CLIENT_AUTH)
    }
}

// ============================================================================
// Netscape certificate type
// ============================================================================

/// Netscape certificate type flags (legacy private extension).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NsCertType {
    bits: u8,
}

impl NsCertType {
    /// SSL client (bit 0)
    pub const SSL_CLIENT: u8 = 0x80;
    /// SSL server (bit 1)
    pub const SSL_SERVER: u8 = 0x40;
    /// SSL CA (bit 5)
    pub const SSL_CA: u8 = 0x04;

    fn parse(content: &[u8]) -> Result<Self> {
        let mut outer = tlv::Cursor::new(content);
        let unit = outer.expect(tag::BIT_STRING)?;
        outer.finish()?;

        let (unused, payload) = tlv::bit_string(&unit)?;
        let mut bits = payload.first().copied().unwrap_or(0);
        if payload.len() == 1 {
            bits &= 0xffu8 << unused;
        }
        Ok(Self { bits })
    }

    /// Whether a specific flag is set.
    pub fn has(&self, flag: u8) -> bool {
        (self.bits & flag) != 0
    }

    /// Whether the certificate may be used by an SSL/TLS client.
    pub fn ssl_client(&self) -> bool {
        self.has(Self::SSL_CLIENT)
    }

    /// Whether the certificate may be used by an SSL/TLS server.
    pub fn ssl_server(&self) -> bool {
        self.has(Self::SSL_SERVER)
    }

    /// Whether the certificate may issue SSL/TLS certificates.
    pub fn ssl_ca(&self) -> bool {
        self.has(Self::SSL_CA)
    }
}

// ============================================================================
// Subject Alternative Name - RFC 5280 Section 4.2.1.6
// ============================================================================

/// Subject Alternative Name extension, capped at
/// [`MAX_SUBJECT_ALT_NAMES`] entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubjectAltName<'a> {
    /// The first [`MAX_SUBJECT_ALT_NAMES`] general names, in encoding
    /// order.
    pub names: Vec<GeneralName<'a>>,
}

impl<'a> SubjectAltName<'a> {
    fn parse(content: &'a [u8]) -> Result<Self> {
        let mut outer = tlv::Cursor::new(content);
        let seq = outer.expect(tag::SEQUENCE)?;
        outer.finish()?;

        let mut names = Vec::new();
        let mut cursor = seq.cursor();
        while !cursor.is_empty() {
            // Every entry must decode even when the list is full; a
            // malformed tail is still a malformed certificate.
            let name = GeneralName::parse(&cursor.read()?)?;
            if names.len() < MAX_SUBJECT_ALT_NAMES {
                names.push(name);
            }
        }

        Ok(Self { names })
    }

    /// All DNS names.
    pub fn dns_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.names.iter().filter_map(|n| match n {
            GeneralName::DnsName(dns) => Some(*dns),
            _ => None,
        })
    }

    /// All email addresses.
    pub fn email_addresses(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.names.iter().filter_map(|n| match n {
            GeneralName::Rfc822Name(email) => Some(*email),
            _ => None,
        })
    }

    /// All IP addresses, as raw octets.
    pub fn ip_addresses(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        self.names.iter().filter_map(|n| match n {
            GeneralName::IpAddress(ip) => Some(*ip),
            _ => None,
        })
    }
}

// ============================================================================
// Extension set
// ============================================================================

/// The recognized extensions of one certificate.
///
/// Populated by a single pass over the extensions SEQUENCE; defaults apply
/// for everything the certificate does not carry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extensions<'a> {
    /// Basic constraints; defaults to `cA FALSE` when absent.
    pub basic_constraints: BasicConstraints,
    /// Key usage flags, when the extension is present.
    pub key_usage: Option<KeyUsage>,
    /// Subject alternative names (empty when absent).
    pub subject_alt_name: SubjectAltName<'a>,
    /// Subject key identifier octets.
    pub subject_key_id: Option<&'a [u8]>,
    /// Authority key identifier's keyIdentifier sub-field octets.
    pub authority_key_id: Option<&'a [u8]>,
    /// Extended key usage purposes, when the extension is present.
    pub ext_key_usage: Option<ExtendedKeyUsage>,
    /// Netscape certificate type flags, when present.
    pub ns_cert_type: Option<NsCertType>,
    /// Content octets of the first critical extnID outside the recognized
    /// set. The decoder never rejects on this; policy belongs to the
    /// validator or the caller.
    pub unrecognized_critical: Option<&'a [u8]>,
}

impl<'a> Extensions<'a> {
    /// Decode the extensions SEQUENCE.
    pub(crate) fn parse(unit: &Tlv<'a>) -> Result<Self> {
        if unit.tag != tag::SEQUENCE {
            return Err(Error::unexpected_tag(tag::SEQUENCE, unit.tag));
        }

        let mut extensions = Extensions::default();
        let mut cursor = unit.cursor();
        while !cursor.is_empty() {
            let entry = cursor.expect(tag::SEQUENCE)?;
            let mut fields = entry.cursor();

            let extn_id = fields.expect(tag::OID)?;
            let critical = match fields.peek_tag() {
                Some(tag::BOOLEAN) => parse_boolean(&fields.read()?)?,
                _ => false,
            };
            let extn_value = fields.expect(tag::OCTET_STRING)?;
            fields.finish()?;

            extensions.dispatch(extn_id.value, critical, extn_value.value)?;
        }

        Ok(extensions)
    }

    fn dispatch(&mut self, extn_id: &'a [u8], critical: bool, content: &'a [u8]) -> Result<()> {
        if extn_id == oids::BASIC_CONSTRAINTS.as_bytes() {
            self.basic_constraints = BasicConstraints::parse(content)?;
        } else if extn_id == oids::KEY_USAGE.as_bytes() {
            self.key_usage = Some(KeyUsage::parse(content)?);
        } else if extn_id == oids::SUBJECT_ALT_NAME.as_bytes() {
            self.subject_alt_name = SubjectAltName::parse(content)?;
        } else if extn_id == oids::SUBJECT_KEY_IDENTIFIER.as_bytes() {
            self.subject_key_id = Some(parse_subject_key_id(content)?);
        } else if extn_id == oids::AUTHORITY_KEY_IDENTIFIER.as_bytes() {
            self.authority_key_id = parse_authority_key_id(content)?;
        } else if extn_id == oids::EXTENDED_KEY_USAGE.as_bytes() {
            self.ext_key_usage = Some(ExtendedKeyUsage::parse(content)?);
        } else if extn_id == oids::NS_CERT_TYPE.as_bytes() {
            self.ns_cert_type = Some(NsCertType::parse(content)?);
        } else if critical && self.unrecognized_critical.is_none() {
            self.unrecognized_critical = Some(extn_id);
        }
        Ok(())
    }
}

/// SubjectKeyIdentifier ::= OCTET STRING (nested inside extnValue).
fn parse_subject_key_id(content: &[u8]) -> Result<&[u8]> {
    let mut outer = tlv::Cursor::new(content);
    let unit = outer.expect(tag::OCTET_STRING)?;
    outer.finish()?;
    Ok(unit.value)
}

/// AuthorityKeyIdentifier ::= SEQUENCE {
///     keyIdentifier             [0] KeyIdentifier           OPTIONAL,
///     authorityCertIssuer       [1] GeneralNames            OPTIONAL,
///     authorityCertSerialNumber [2] CertificateSerialNumber OPTIONAL }
///
/// Only the keyIdentifier sub-field is extracted.
fn parse_authority_key_id(content: &[u8]) -> Result<Option<&[u8]>> {
    let mut outer = tlv::Cursor::new(content);
    let seq = outer.expect(tag::SEQUENCE)?;
    outer.finish()?;

    let mut key_id = None;
    let mut cursor = seq.cursor();
    while !cursor.is_empty() {
        let field = cursor.read()?;
        if field.tag == tag::context_primitive(0) {
            key_id = Some(field.value);
        }
    }
    Ok(key_id)
}

fn parse_boolean(unit: &Tlv<'_>) -> Result<bool> {
    match unit.value {
        [octet] => Ok(*octet != 0),
        _ => Err(Error::Malformed(MalformedKind::InvalidBoolean)),
    }
}
