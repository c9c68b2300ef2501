// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Object identifier constants used for dispatch.
//!
//! This is the only shared resource in the crate: an immutable,
//! process-wide table of well-known OIDs. Decoders compare a parsed OID's
//! content octets against these constants to select an algorithm or
//! extension decoder.

use const_oid::ObjectIdentifier;

// =============================================================================
// Public key algorithm OIDs
// =============================================================================

/// RSA Encryption - 1.2.840.113549.1.1.1
pub const RSA_ENCRYPTION: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

/// DSA - 1.2.840.10040.4.1
pub const DSA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10040.4.1");

/// EC Public Key - 1.2.840.10045.2.1
/// Used as algorithm OID in SubjectPublicKeyInfo for ECDSA keys
pub const EC_PUBLIC_KEY: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");

// =============================================================================
// Named curve OIDs
// =============================================================================

/// NIST P-256 (secp256r1) - 1.2.840.10045.3.1.7
pub const SECP256R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");

/// NIST P-384 (secp384r1) - 1.3.132.0.34
pub const SECP384R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.34");

/// NIST P-521 (secp521r1) - 1.3.132.0.35
pub const SECP521R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.35");

// =============================================================================
// Signature algorithm OIDs
// =============================================================================

/// ECDSA with SHA-256 - 1.2.840.10045.4.3.2
pub const ECDSA_WITH_SHA256: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.4.3.2");

/// ECDSA with SHA-384 - 1.2.840.10045.4.3.3
pub const ECDSA_WITH_SHA384: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.4.3.3");

/// RSA PKCS#1 v1.5 with SHA-256 - 1.2.840.113549.1.1.11
pub const SHA256_WITH_RSA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.11");

/// RSA PKCS#1 v1.5 with SHA-384 - 1.2.840.113549.1.1.12
pub const SHA384_WITH_RSA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.12");

/// RSA PKCS#1 v1.5 with SHA-512 - 1.2.840.113549.1.1.13
pub const SHA512_WITH_RSA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.13");

/// RSASSA-PSS - 1.2.840.113549.1.1.10
/// The hash is carried in the RSASSA-PSS-params of the algorithm identifier.
pub const RSA_PSS: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.10");

/// EdDSA Ed25519 - 1.3.101.112
pub const ED25519: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.112");

// =============================================================================
// Hash algorithm OIDs (RSASSA-PSS parameter dispatch)
// =============================================================================

/// SHA-256 - 2.16.840.1.101.3.4.2.1
pub const SHA256: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.2.1");

/// SHA-384 - 2.16.840.1.101.3.4.2.2
pub const SHA384: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.2.2");

/// SHA-512 - 2.16.840.1.101.3.4.2.3
pub const SHA512: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.2.3");

// =============================================================================
// Extension OIDs - RFC 5280 Section 4.2
// =============================================================================

/// Subject Key Identifier - 2.5.29.14
pub const SUBJECT_KEY_IDENTIFIER: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.14");

/// Key Usage - 2.5.29.15
pub const KEY_USAGE: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.15");

/// Subject Alternative Name - 2.5.29.17
pub const SUBJECT_ALT_NAME: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.17");

/// Basic Constraints - 2.5.29.19
pub const BASIC_CONSTRAINTS: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.19");

/// Authority Key Identifier - 2.5.29.35
pub const AUTHORITY_KEY_IDENTIFIER: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.35");

/// Extended Key Usage - 2.5.29.37
pub const EXTENDED_KEY_USAGE: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.29.37");

/// Netscape certificate type - 2.16.840.1.113730.1.1
pub const NS_CERT_TYPE: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.16.840.1.113730.1.1");

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_key_algorithm_oids() {
        assert_eq!(RSA_ENCRYPTION.to_string(), "1.2.840.113549.1.1.1");
        assert_eq!(DSA.to_string(), "1.2.840.10040.4.1");
        assert_eq!(EC_PUBLIC_KEY.to_string(), "1.2.840.10045.2.1");
    }

    #[test]
    fn test_extension_oids() {
        assert_eq!(BASIC_CONSTRAINTS.to_string(), "2.5.29.19");
        assert_eq!(KEY_USAGE.to_string(), "2.5.29.15");
        assert_eq!(SUBJECT_ALT_NAME.to_string(), "2.5.29.17");
        assert_eq!(NS_CERT_TYPE.to_string(), "2.16.840.1.113730.1.1");
    }

    #[test]
    fn test_curve_oids_are_distinct() {
        assert_ne!(SECP256R1, SECP384R1);
        assert_ne!(SECP384R1, SECP521R1);
    }
}
