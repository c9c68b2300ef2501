// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Distinguished Name (DN) and GeneralName support.
//!
//! A Name is an RDNSequence: SEQUENCE OF SET OF { type OID, value }. The
//! decoder populates one borrowed field per well-known attribute type and
//! always keeps the raw encoded span, which is what issuer/subject linkage
//! compares during chain validation. Equality between two names is
//! byte-exact equality of the raw spans; two names that render identically
//! but encode differently are different names.

extern crate alloc;

use alloc::string::String;
use core::fmt;

use const_oid::ObjectIdentifier;

use crate::error::{Error, MalformedKind, Result};
use crate::tlv::{tag, Tlv};

// ============================================================================
// Attribute type OIDs (RFC 5280, Appendix A.1)
// ============================================================================

/// Common Name (CN) - 2.5.4.3
pub const COMMON_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.3");

/// Surname (SN) - 2.5.4.4
pub const SURNAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.4");

/// Serial Number - 2.5.4.5
pub const SERIAL_NUMBER: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.5");

/// Country (C) - 2.5.4.6
pub const COUNTRY_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.6");

/// Locality (L) - 2.5.4.7
pub const LOCALITY_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.7");

/// State or Province (ST) - 2.5.4.8
pub const STATE_OR_PROVINCE_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.8");

/// Organization (O) - 2.5.4.10
pub const ORGANIZATION_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.10");

/// Organizational Unit (OU) - 2.5.4.11
pub const ORGANIZATIONAL_UNIT_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.11");

/// Title - 2.5.4.12
pub const TITLE: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.12");

/// Name - 2.5.4.41
pub const NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.41");

/// Given Name - 2.5.4.42
pub const GIVEN_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.42");

/// Initials - 2.5.4.43
pub const INITIALS: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.43");

/// Generation Qualifier - 2.5.4.44
pub const GENERATION_QUALIFIER: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.44");

/// DN Qualifier - 2.5.4.46
pub const DN_QUALIFIER: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.46");

/// Pseudonym - 2.5.4.65
pub const PSEUDONYM: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.65");

// ============================================================================
// Name - RFC 5280 Section 4.1.2.4
// ============================================================================

/// A decoded Distinguished Name.
///
/// Every field is a borrowed view into the buffer the certificate was
/// decoded from. A field is `Some` only when its attribute type occurred in
/// the encoding with a textual value; when an attribute type recurs, the
/// later occurrence wins. Attribute types outside the well-known set are
/// skipped for field lookup but remain part of [`Name::raw`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Name<'a> {
    /// The complete DER encoding of the name, header included. Chain
    /// validation compares issuer and subject through this span alone.
    pub raw: &'a [u8],
    /// commonName
    pub common_name: Option<&'a str>,
    /// surname
    pub surname: Option<&'a str>,
    /// serialNumber
    pub serial_number: Option<&'a str>,
    /// countryName
    pub country_name: Option<&'a str>,
    /// localityName
    pub locality_name: Option<&'a str>,
    /// stateOrProvinceName
    pub state_or_province_name: Option<&'a str>,
    /// organizationName
    pub organization_name: Option<&'a str>,
    /// organizationalUnitName
    pub organizational_unit_name: Option<&'a str>,
    /// title
    pub title: Option<&'a str>,
    /// name
    pub name: Option<&'a str>,
    /// givenName
    pub given_name: Option<&'a str>,
    /// initials
    pub initials: Option<&'a str>,
    /// generationQualifier
    pub generation_qualifier: Option<&'a str>,
    /// dnQualifier
    pub dn_qualifier: Option<&'a str>,
    /// pseudonym
    pub pseudonym: Option<&'a str>,
}

impl<'a> Name<'a> {
    /// Decode a Name from its SEQUENCE unit.
    pub(crate) fn parse(unit: &Tlv<'a>) -> Result<Self> {
        if unit.tag != tag::SEQUENCE {
            return Err(Error::unexpected_tag(tag::SEQUENCE, unit.tag));
        }

        let mut name = Name {
            raw: unit.raw,
            ..Name::default()
        };

        let mut rdns = unit.cursor();
        while !rdns.is_empty() {
            let rdn = rdns.expect(tag::SET)?;
            let mut attrs = rdn.cursor();
            // SET OF AttributeTypeAndValue: usually one attribute, but
            // multi-valued RDNs are legal.
            while !attrs.is_empty() {
                let attr = attrs.expect(tag::SEQUENCE)?;
                let mut fields = attr.cursor();
                let attr_type = fields.expect(tag::OID)?;
                let attr_value = fields.read()?;
                fields.finish()?;
                name.assign(attr_type.value, &attr_value);
            }
        }
        rdns.finish()?;

        Ok(name)
    }

    /// Route one attribute value to its destination field. Unknown
    /// attribute types and values that are not textual are skipped without
    /// error; the raw span still carries them.
    fn assign(&mut self, attr_type: &[u8], value: &Tlv<'a>) {
        let text = match value.tag {
            tag::UTF8_STRING
            | tag::PRINTABLE_STRING
            | tag::IA5_STRING
            | tag::TELETEX_STRING
            | tag::BMP_STRING => match core::str::from_utf8(value.value) {
                Ok(text) => text,
                Err(_) => return,
            },
            _ => return,
        };

        let field = if attr_type == COMMON_NAME.as_bytes() {
            &mut self.common_name
        } else if attr_type == SURNAME.as_bytes() {
            &mut self.surname
        } else if attr_type == SERIAL_NUMBER.as_bytes() {
            &mut self.serial_number
        } else if attr_type == COUNTRY_NAME.as_bytes() {
            &mut self.country_name
        } else if attr_type == LOCALITY_NAME.as_bytes() {
            &mut self.locality_name
        } else if attr_type == STATE_OR_PROVINCE_NAME.as_bytes() {
            &mut self.state_or_province_name
        } else if attr_type == ORGANIZATION_NAME.as_bytes() {
            &mut self.organization_name
        } else if attr_type == ORGANIZATIONAL_UNIT_NAME.as_bytes() {
            &mut self.organizational_unit_name
        } else if attr_type == TITLE.as_bytes() {
            &mut self.title
        } else if attr_type == NAME.as_bytes() {
            &mut self.name
        } else if attr_type == GIVEN_NAME.as_bytes() {
            &mut self.given_name
        } else if attr_type == INITIALS.as_bytes() {
            &mut self.initials
        } else if attr_type == GENERATION_QUALIFIER.as_bytes() {
            &mut self.generation_qualifier
        } else if attr_type == DN_QUALIFIER.as_bytes() {
            &mut self.dn_qualifier
        } else if attr_type == PSEUDONYM.as_bytes() {
            &mut self.pseudonym
        } else {
            return;
        };

        // Last occurrence wins on duplicates.
        *field = Some(text);
    }
}

/// Byte-exact equality on the raw encoded span; the individual fields are
/// derived views and carry no extra information.
impl PartialEq for Name<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Name<'_> {}

impl fmt::Display for Name<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs = [
            ("C", self.country_name),
            ("ST", self.state_or_province_name),
            ("L", self.locality_name),
            ("O", self.organization_name),
            ("OU", self.organizational_unit_name),
            ("CN", self.common_name),
        ];

        let mut first = true;
        for (label, value) in pairs {
            if let Some(value) = value {
                if !first {
                    write!(f, ", ")?;
                }
                write!(f, "{}={}", label, value)?;
                first = false;
            }
        }
        Ok(())
    }
}

// ============================================================================
// GeneralName - RFC 5280 Section 4.2.1.6
// ============================================================================

/// GeneralName as used by the subjectAltName extension.
///
/// Only the DNS, email, URI and IP address forms are interpreted; the
/// remaining forms are retained as opaque content spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneralName<'a> {
    /// otherName `[0]`
    Other(&'a [u8]),
    /// rfc822Name `[1]` - email address
    Rfc822Name(&'a str),
    /// dNSName `[2]` - DNS hostname
    DnsName(&'a str),
    /// x400Address `[3]`
    X400Address(&'a [u8]),
    /// directoryName `[4]`
    DirectoryName(&'a [u8]),
    /// ediPartyName `[5]`
    EdiPartyName(&'a [u8]),
    /// uniformResourceIdentifier `[6]`
    Uri(&'a str),
    /// iPAddress `[7]` - 4 octets for IPv4, 16 for IPv6
    IpAddress(&'a [u8]),
    /// registeredID `[8]` - OID content octets
    RegisteredId(&'a [u8]),
}

impl<'a> GeneralName<'a> {
    /// Decode one GeneralName from its context-tagged unit.
    pub(crate) fn parse(unit: &Tlv<'a>) -> Result<Self> {
        if !unit.is_context_specific() {
            return Err(Error::Malformed(MalformedKind::UnexpectedTag {
                expected: None,
                found: unit.tag,
            }));
        }

        match unit.tag_number() {
            0 => Ok(GeneralName::Other(unit.value)),
            1 => Ok(GeneralName::Rfc822Name(ia5(unit.value)?)),
            2 => Ok(GeneralName::DnsName(ia5(unit.value)?)),
            3 => Ok(GeneralName::X400Address(unit.value)),
            4 => Ok(GeneralName::DirectoryName(unit.value)),
            5 => Ok(GeneralName::EdiPartyName(unit.value)),
            6 => Ok(GeneralName::Uri(ia5(unit.value)?)),
            7 => Ok(GeneralName::IpAddress(unit.value)),
            8 => Ok(GeneralName::RegisteredId(unit.value)),
            _ => Err(Error::Malformed(MalformedKind::UnexpectedTag {
                expected: None,
                found: unit.tag,
            })),
        }
    }

    /// Render an IP address form, when the octet count matches IPv4/IPv6.
    pub fn ip_address_string(&self) -> Option<String> {
        let GeneralName::IpAddress(octets) = self else {
            return None;
        };
        match octets.len() {
            4 => Some(alloc::format!(
                "{}.{}.{}.{}",
                octets[0],
                octets[1],
                octets[2],
                octets[3]
            )),
            16 => {
                let mut out = String::new();
                for (i, pair) in octets.chunks(2).enumerate() {
                    if i > 0 {
                        out.push(':');
                    }
                    let group = u16::from_be_bytes([pair[0], pair[1]]);
                    let _ = fmt::write(&mut out, format_args!("{:x}", group));
                }
                Some(out)
            }
            _ => None,
        }
    }
}

fn ia5(bytes: &[u8]) -> Result<&str> {
    core::str::from_utf8(bytes).map_err(|_| Error::Malformed(MalformedKind::InvalidString))
}

impl fmt::Display for GeneralName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneralName::Other(_) => write!(f, "otherName:<unsupported>"),
            GeneralName::Rfc822Name(email) => write!(f, "email:{}", email),
            GeneralName::DnsName(dns) => write!(f, "DNS:{}", dns),
            GeneralName::X400Address(_) => write!(f, "X400:<unsupported>"),
            GeneralName::DirectoryName(_) => write!(f, "DirName:<unsupported>"),
            GeneralName::EdiPartyName(_) => write!(f, "EDI:<unsupported>"),
            GeneralName::Uri(uri) => write!(f, "URI:{}", uri),
            GeneralName::IpAddress(_) => match self.ip_address_string() {
                Some(ip) => write!(f, "IP:{}", ip),
                None => write!(f, "IP:<invalid>"),
            },
            GeneralName::RegisteredId(_) => write!(f, "RegID:<oid>"),
        }
    }
}
