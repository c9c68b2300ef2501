// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! SubjectPublicKeyInfo decoding.
//!
//! ```text
//! SubjectPublicKeyInfo ::= SEQUENCE {
//!     algorithm            AlgorithmIdentifier,
//!     subjectPublicKey     BIT STRING
//! }
//! ```
//!
//! The algorithm OID selects a family-specific decoder for the BIT STRING
//! payload and, for DSA and EC, the algorithm parameters. Exactly one
//! family's fields are populated. An algorithm OID outside the supported
//! set is not an error at this layer: the OID and the raw key bytes are
//! still recorded, and key extraction downstream decides whether it can
//! use them.

use const_oid::ObjectIdentifier;

use crate::error::{Error, MalformedKind, Result};
use crate::tlv::{self, tag, Tlv};
use crate::x509::oids;

/// A decoded SubjectPublicKeyInfo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectPublicKeyInfo<'a> {
    /// Key algorithm OID.
    pub algorithm: ObjectIdentifier,
    /// Raw BIT STRING payload, whatever the algorithm. This is the byte
    /// span the signature primitive consumes.
    pub subject_public_key: &'a [u8],
    /// Family-specific decoded key material.
    pub key: PublicKey<'a>,
}

/// Key material per algorithm family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicKey<'a> {
    /// RSA modulus and public exponent.
    Rsa(RsaPublicKey<'a>),
    /// DSA domain parameters and public value.
    Dsa(DsaPublicKey<'a>),
    /// EC named curve and encoded point.
    Ec(EcPublicKey<'a>),
    /// Unrecognized algorithm; only the OID and raw payload are recorded.
    Unknown,
}

/// RSA public key material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsaPublicKey<'a> {
    /// Modulus n, leading sign octet stripped.
    pub modulus: &'a [u8],
    /// Public exponent e.
    pub public_exponent: &'a [u8],
}

/// DSA domain parameters and public value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DsaPublicKey<'a> {
    /// Prime modulus p.
    pub p: &'a [u8],
    /// Subprime q.
    pub q: &'a [u8],
    /// Generator g.
    pub g: &'a [u8],
    /// Public value y.
    pub y: &'a [u8],
}

/// EC public key material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcPublicKey<'a> {
    /// Named curve OID from the algorithm parameters.
    pub named_curve: ObjectIdentifier,
    /// Encoded curve point, usually the uncompressed `04 || x || y` form.
    pub point: &'a [u8],
}

impl<'a> SubjectPublicKeyInfo<'a> {
    /// Decode a SubjectPublicKeyInfo from its SEQUENCE unit.
    pub(crate) fn parse(unit: &Tlv<'a>) -> Result<Self> {
        let mut cursor = unit.cursor();

        let alg_unit = cursor.expect(tag::SEQUENCE)?;
        let mut alg = alg_unit.cursor();
        let algorithm = parse_oid(&alg.expect(tag::OID)?)?;
        let parameters = if alg.is_empty() { None } else { Some(alg.read()?) };
        alg.finish()?;

        let key_unit = cursor.expect(tag::BIT_STRING)?;
        let (unused, subject_public_key) = tlv::bit_string(&key_unit)?;
        // Key material is always a whole number of octets.
        if unused != 0 {
            return Err(Error::Malformed(MalformedKind::InvalidBitString));
        }
        cursor.finish()?;

        let key = if algorithm == oids::RSA_ENCRYPTION {
            PublicKey::Rsa(RsaPublicKey::parse(subject_public_key)?)
        } else if algorithm == oids::DSA {
            let params = parameters.ok_or(Error::missing_field("dsa parameters"))?;
            PublicKey::Dsa(DsaPublicKey::parse(&params, subject_public_key)?)
        } else if algorithm == oids::EC_PUBLIC_KEY {
            let params = parameters.ok_or(Error::missing_field("ec parameters"))?;
            if params.tag != tag::OID {
                return Err(Error::unexpected_tag(tag::OID, params.tag));
            }
            PublicKey::Ec(EcPublicKey {
                named_curve: parse_oid(&params)?,
                point: subject_public_key,
            })
        } else {
            PublicKey::Unknown
        };

        Ok(Self {
            algorithm,
            subject_public_key,
            key,
        })
    }
}

impl<'a> RsaPublicKey<'a> {
    /// ```text
    /// RSAPublicKey ::= SEQUENCE {
    ///     modulus            INTEGER,
    ///     publicExponent     INTEGER
    /// }
    /// ```
    fn parse(payload: &'a [u8]) -> Result<Self> {
        let mut outer = tlv::Cursor::new(payload);
        let seq = outer.expect(tag::SEQUENCE)?;
        outer.finish()?;

        let mut cursor = seq.cursor();
        let modulus = uint_bytes(&cursor.expect(tag::INTEGER)?)?;
        let public_exponent = uint_bytes(&cursor.expect(tag::INTEGER)?)?;
        cursor.finish()?;

        Ok(Self {
            modulus,
            public_exponent,
        })
    }
}

impl<'a> DsaPublicKey<'a> {
    /// Domain parameters come from the algorithm identifier; the public
    /// value y is the BIT STRING payload.
    ///
    /// ```text
    /// Dss-Parms ::= SEQUENCE { p INTEGER, q INTEGER, g INTEGER }
    /// DSAPublicKey ::= INTEGER
    /// ```
    fn parse(params: &Tlv<'a>, payload: &'a [u8]) -> Result<Self> {
        if params.tag != tag::SEQUENCE {
            return Err(Error::unexpected_tag(tag::SEQUENCE, params.tag));
        }
        let mut cursor = params.cursor();
        let p = uint_bytes(&cursor.expect(tag::INTEGER)?)?;
        let q = uint_bytes(&cursor.expect(tag::INTEGER)?)?;
        let g = uint_bytes(&cursor.expect(tag::INTEGER)?)?;
        cursor.finish()?;

        let mut outer = tlv::Cursor::new(payload);
        let y = uint_bytes(&outer.expect(tag::INTEGER)?)?;
        outer.finish()?;

        Ok(Self { p, q, g, y })
    }
}

/// Parse an OID unit's content octets.
pub(crate) fn parse_oid(unit: &Tlv<'_>) -> Result<ObjectIdentifier> {
    ObjectIdentifier::from_bytes(unit.value)
        .map_err(|_| Error::Malformed(MalformedKind::InvalidOid))
}

/// The content octets of a non-negative INTEGER with the sign octet
/// stripped. Rejects negative and non-minimal encodings.
fn uint_bytes<'a>(unit: &Tlv<'a>) -> Result<&'a [u8]> {
    let bytes = unit.value;
    match bytes {
        [] => Err(Error::Malformed(MalformedKind::InvalidInteger)),
        [first, ..] if first & 0x80 != 0 => Err(Error::Malformed(MalformedKind::InvalidInteger)),
        [0, second, ..] => {
            if second & 0x80 == 0 {
                // The leading zero was not needed.
                return Err(Error::Malformed(MalformedKind::InvalidInteger));
            }
            Ok(&bytes[1..])
        }
        _ => Ok(bytes),
    }
}
