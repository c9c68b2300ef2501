// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Test-only DER construction helpers.
//!
//! Tests assemble certificates byte-by-byte with these helpers instead of
//! shipping fixture files, so every test input is visible at the call site
//! and deliberately malformed variants are easy to splice together.

extern crate alloc;

use alloc::vec::Vec;

use const_oid::ObjectIdentifier;

use crate::x509::oids;

/// Encode one TLV with a minimal DER length.
pub fn tlv_vec(tag: u8, content: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(content.len() + 4);
    out.push(tag);
    let len = content.len();
    if len < 0x80 {
        out.push(len as u8);
    } else if len <= 0xff {
        out.push(0x81);
        out.push(len as u8);
    } else {
        out.push(0x82);
        out.push((len >> 8) as u8);
        out.push(len as u8);
    }
    out.extend_from_slice(content);
    out
}

/// OBJECT IDENTIFIER.
pub fn oid_der(oid: ObjectIdentifier) -> Vec<u8> {
    tlv_vec(0x06, oid.as_bytes())
}

/// UTF8String.
pub fn utf8_der(s: &str) -> Vec<u8> {
    tlv_vec(0x0c, s.as_bytes())
}

/// Unsigned INTEGER; prepends the sign octet when the high bit is set.
pub fn uint_der(bytes: &[u8]) -> Vec<u8> {
    if bytes.first().is_some_and(|b| b & 0x80 != 0) {
        let mut content = Vec::with_capacity(bytes.len() + 1);
        content.push(0);
        content.extend_from_slice(bytes);
        tlv_vec(0x02, &content)
    } else {
        tlv_vec(0x02, bytes)
    }
}

/// BIT STRING with an explicit unused-bit count.
pub fn bit_string_der(unused: u8, payload: &[u8]) -> Vec<u8> {
    let mut content = Vec::with_capacity(payload.len() + 1);
    content.push(unused);
    content.extend_from_slice(payload);
    tlv_vec(0x03, &content)
}

/// UTCTime from its string form, e.g. `"200101000000Z"`.
pub fn utc_der(s: &str) -> Vec<u8> {
    tlv_vec(0x17, s.as_bytes())
}

/// A Name: one single-attribute RDN per pair, values as UTF8String.
pub fn name(attrs: &[(ObjectIdentifier, &str)]) -> Vec<u8> {
    let mut content = Vec::new();
    for (attr_type, value) in attrs {
        let mut attr = oid_der(*attr_type);
        attr.extend_from_slice(&utf8_der(value));
        let attr_seq = tlv_vec(0x30, &attr);
        content.extend_from_slice(&tlv_vec(0x31, &attr_seq));
    }
    tlv_vec(0x30, &content)
}

/// Validity from two UTCTime strings.
pub fn validity(not_before: &str, not_after: &str) -> Vec<u8> {
    let mut content = utc_der(not_before);
    content.extend_from_slice(&utc_der(not_after));
    tlv_vec(0x30, &content)
}

/// AlgorithmIdentifier without parameters.
pub fn alg_id(oid: ObjectIdentifier) -> Vec<u8> {
    tlv_vec(0x30, &oid_der(oid))
}

/// AlgorithmIdentifier with NULL parameters.
pub fn alg_id_null(oid: ObjectIdentifier) -> Vec<u8> {
    let mut content = oid_der(oid);
    content.extend_from_slice(&[0x05, 0x00]);
    tlv_vec(0x30, &content)
}

/// An uncompressed P-256 point of deterministic nonsense.
pub fn sample_p256_point() -> Vec<u8> {
    let mut point = Vec::with_capacity(65);
    point.push(0x04);
    for i in 0..64u8 {
        point.push(i.wrapping_mul(37).wrapping_add(11));
    }
    point
}

/// SubjectPublicKeyInfo for an EC key on `curve`.
pub fn ec_spki(curve: ObjectIdentifier, point: &[u8]) -> Vec<u8> {
    let mut alg_content = oid_der(oids::EC_PUBLIC_KEY);
    alg_content.extend_from_slice(&oid_der(curve));
    let mut content = tlv_vec(0x30, &alg_content);
    content.extend_from_slice(&bit_string_der(0, point));
    tlv_vec(0x30, &content)
}

/// SubjectPublicKeyInfo for an RSA key.
pub fn rsa_spki(modulus: &[u8], exponent: &[u8]) -> Vec<u8> {
    let mut rsa_content = uint_der(modulus);
    rsa_content.extend_from_slice(&uint_der(exponent));
    let rsa_seq = tlv_vec(0x30, &rsa_content);

    let mut content = alg_id_null(oids::RSA_ENCRYPTION);
    content.extend_from_slice(&bit_string_der(0, &rsa_seq));
    tlv_vec(0x30, &content)
}

/// SubjectPublicKeyInfo for a DSA key.
pub fn dsa_spki(p: &[u8], q: &[u8], g: &[u8], y: &[u8]) -> Vec<u8> {
    let mut params_content = uint_der(p);
    params_content.extend_from_slice(&uint_der(q));
    params_content.extend_from_slice(&uint_der(g));
    let params = tlv_vec(0x30, &params_content);

    let mut alg_content = oid_der(oids::DSA);
    alg_content.extend_from_slice(&params);

    let mut content = tlv_vec(0x30, &alg_content);
    content.extend_from_slice(&bit_string_der(0, &uint_der(y)));
    tlv_vec(0x30, &content)
}

/// One extension entry. The critical BOOLEAN is emitted only when set,
/// matching DER's DEFAULT FALSE rule.
pub fn extension(extn_id: ObjectIdentifier, critical: bool, inner: &[u8]) -> Vec<u8> {
    let mut content = oid_der(extn_id);
    if critical {
        content.extend_from_slice(&[0x01, 0x01, 0xff]);
    }
    content.extend_from_slice(&tlv_vec(0x04, inner));
    tlv_vec(0x30, &content)
}

/// The extensions SEQUENCE (without the `[3]` wrapper).
pub fn extensions(entries: &[Vec<u8>]) -> Vec<u8> {
    let mut content = Vec::new();
    for entry in entries {
        content.extend_from_slice(entry);
    }
    tlv_vec(0x30, &content)
}

/// basicConstraints extension entry (critical, as CAs emit it).
pub fn ext_basic_constraints(ca: bool, path_len: Option<u32>) -> Vec<u8> {
    let mut content = Vec::new();
    if ca {
        content.extend_from_slice(&[0x01, 0x01, 0xff]);
    }
    if let Some(path_len) = path_len {
        content.extend_from_slice(&uint_der(&[path_len as u8]));
    }
    extension(oids::BASIC_CONSTRAINTS, true, &tlv_vec(0x30, &content))
}

/// keyUsage extension entry from a raw BIT STRING payload.
pub fn ext_key_usage(payload: &[u8], unused: u8) -> Vec<u8> {
    extension(oids::KEY_USAGE, true, &bit_string_der(unused, payload))
}

/// subjectAltName extension entry from pre-encoded GeneralNames.
pub fn ext_subject_alt_name(names: &[Vec<u8>]) -> Vec<u8> {
    let mut content = Vec::new();
    for name in names {
        content.extend_from_slice(name);
    }
    extension(oids::SUBJECT_ALT_NAME, false, &tlv_vec(0x30, &content))
}

/// extKeyUsage extension entry from purpose OIDs.
pub fn ext_extended_key_usage(purposes: &[ObjectIdentifier]) -> Vec<u8> {
    let mut content = Vec::new();
    for purpose in purposes {
        content.extend_from_slice(&oid_der(*purpose));
    }
    extension(oids::EXTENDED_KEY_USAGE, false, &tlv_vec(0x30, &content))
}

/// Assembles whole certificates; every field has a sane default so a test
/// only spells out what it is about.
pub struct CertBuilder {
    version: Option<u8>,
    serial: Vec<u8>,
    sig_alg: Vec<u8>,
    outer_sig_alg: Option<Vec<u8>>,
    issuer: Vec<u8>,
    validity: Vec<u8>,
    subject: Vec<u8>,
    spki: Vec<u8>,
    issuer_unique_id: Option<Vec<u8>>,
    subject_unique_id: Option<Vec<u8>>,
    extensions: Option<Vec<Vec<u8>>>,
    signature: Vec<u8>,
}

impl CertBuilder {
    /// A v3 leaf: CN=leaf issued by CN=CA1, valid 2020-2040, P-256 key,
    /// ECDSA-SHA256 signature algorithm.
    pub fn new() -> Self {
        Self {
            version: Some(2),
            serial: alloc::vec![0x01],
            sig_alg: alg_id(oids::ECDSA_WITH_SHA256),
            outer_sig_alg: None,
            issuer: name(&[(crate::certificate::name::COMMON_NAME, "CA1")]),
            validity: validity("200101000000Z", "400101000000Z"),
            subject: name(&[(crate::certificate::name::COMMON_NAME, "leaf")]),
            spki: ec_spki(oids::SECP256R1, &sample_p256_point()),
            issuer_unique_id: None,
            subject_unique_id: None,
            extensions: None,
            signature: alloc::vec![0xde, 0xad, 0xbe, 0xef, 0x10, 0x32, 0x54, 0x76],
        }
    }

    pub fn version(mut self, version: Option<u8>) -> Self {
        self.version = version;
        self
    }

    pub fn serial(mut self, serial: &[u8]) -> Self {
        self.serial = serial.to_vec();
        self
    }

    pub fn sig_alg(mut self, der: Vec<u8>) -> Self {
        self.sig_alg = der;
        self
    }

    /// Outer signatureAlgorithm when it should differ from the TBS one.
    pub fn outer_sig_alg(mut self, der: Vec<u8>) -> Self {
        self.outer_sig_alg = Some(der);
        self
    }

    pub fn issuer(mut self, der: Vec<u8>) -> Self {
        self.issuer = der;
        self
    }

    pub fn validity(mut self, not_before: &str, not_after: &str) -> Self {
        self.validity = validity(not_before, not_after);
        self
    }

    pub fn subject(mut self, der: Vec<u8>) -> Self {
        self.subject = der;
        self
    }

    pub fn spki(mut self, der: Vec<u8>) -> Self {
        self.spki = der;
        self
    }

    pub fn issuer_unique_id(mut self, payload: &[u8]) -> Self {
        self.issuer_unique_id = Some(payload.to_vec());
        self
    }

    pub fn subject_unique_id(mut self, payload: &[u8]) -> Self {
        self.subject_unique_id = Some(payload.to_vec());
        self
    }

    pub fn extensions(mut self, entries: Vec<Vec<u8>>) -> Self {
        self.extensions = Some(entries);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut tbs = Vec::new();
        if let Some(version) = self.version {
            let version_int = tlv_vec(0x02, &[version]);
            tbs.extend_from_slice(&tlv_vec(0xa0, &version_int));
        }
        tbs.extend_from_slice(&uint_der(&self.serial));
        tbs.extend_from_slice(&self.sig_alg);
        tbs.extend_from_slice(&self.issuer);
        tbs.extend_from_slice(&self.validity);
        tbs.extend_from_slice(&self.subject);
        tbs.extend_from_slice(&self.spki);
        if let Some(payload) = &self.issuer_unique_id {
            let mut content = alloc::vec![0u8];
            content.extend_from_slice(payload);
            tbs.extend_from_slice(&tlv_vec(0x81, &content));
        }
        if let Some(payload) = &self.subject_unique_id {
            let mut content = alloc::vec![0u8];
            content.extend_from_slice(payload);
            tbs.extend_from_slice(&tlv_vec(0x82, &content));
        }
        if let Some(entries) = &self.extensions {
            let ext_seq = extensions(entries);
            tbs.extend_from_slice(&tlv_vec(0xa3, &ext_seq));
        }
        let tbs_seq = tlv_vec(0x30, &tbs);

        let mut cert = tbs_seq;
        cert.extend_from_slice(self.outer_sig_alg.as_ref().unwrap_or(&self.sig_alg));
        cert.extend_from_slice(&bit_string_der(0, &self.signature));
        tlv_vec(0x30, &cert)
    }
}

/// A CA certificate for `cn`: basicConstraints cA=TRUE plus keyCertSign,
/// self-issued.
pub fn ca_cert(cn: &str, path_len: Option<u32>) -> Vec<u8> {
    CertBuilder::new()
        .issuer(name(&[(crate::certificate::name::COMMON_NAME, cn)]))
        .subject(name(&[(crate::certificate::name::COMMON_NAME, cn)]))
        .extensions(alloc::vec![
            ext_basic_constraints(true, path_len),
            ext_key_usage(&[0x04], 2), // keyCertSign
        ])
        .build()
}
