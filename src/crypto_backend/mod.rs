// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Cryptographic backend abstraction for signature verification.
//!
//! The chain validator never performs signature math itself; it extracts
//! the signed bytes, the signature, and the issuer's public key, and hands
//! all three to an implementation of [`CryptoBackend`]. The trait keeps the
//! crypto library swappable without touching any validation logic.

use const_oid::ObjectIdentifier;
use der::asn1::AnyRef;

use crate::error::{Error, Result};
use crate::x509::oids;

#[cfg(feature = "ring-backend")]
mod ring;
#[cfg(feature = "ring-backend")]
pub use self::ring::RingBackend;

/// Signature algorithms the verification seam understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureAlgorithm {
    /// ECDSA with P-256 curve and SHA-256
    EcdsaP256Sha256,
    /// ECDSA with P-256 curve and SHA-384
    EcdsaP256Sha384,
    /// ECDSA with P-384 curve and SHA-256
    EcdsaP384Sha256,
    /// ECDSA with P-384 curve and SHA-384
    EcdsaP384Sha384,
    /// RSA PKCS#1 v1.5 with SHA-256
    RsaPkcs1Sha256,
    /// RSA PKCS#1 v1.5 with SHA-384
    RsaPkcs1Sha384,
    /// RSA PKCS#1 v1.5 with SHA-512
    RsaPkcs1Sha512,
    /// RSA PSS with SHA-256
    RsaPssSha256,
    /// RSA PSS with SHA-384
    RsaPssSha384,
    /// RSA PSS with SHA-512
    RsaPssSha512,
    /// EdDSA Ed25519 (hash is intrinsic)
    Ed25519,
}

impl SignatureAlgorithm {
    /// Map a signature algorithm OID, an optional named-curve OID and the
    /// optional algorithm parameters to a [`SignatureAlgorithm`].
    ///
    /// For ECDSA the curve comes from the issuer's public key parameters.
    /// For RSA-PSS the hash is read from the RSASSA-PSS-params carried in
    /// the signature AlgorithmIdentifier.
    pub fn from_oid_with_params(
        sig_oid: &ObjectIdentifier,
        curve_oid: Option<&ObjectIdentifier>,
        params: Option<&AnyRef<'_>>,
    ) -> Result<Self> {
        match *sig_oid {
            oids::ECDSA_WITH_SHA256 => match curve_oid {
                Some(&oids::SECP256R1) => Ok(SignatureAlgorithm::EcdsaP256Sha256),
                Some(&oids::SECP384R1) => Ok(SignatureAlgorithm::EcdsaP384Sha256),
                _ => Err(Error::UnsupportedAlgorithm(*sig_oid)),
            },
            oids::ECDSA_WITH_SHA384 => match curve_oid {
                Some(&oids::SECP256R1) => Ok(SignatureAlgorithm::EcdsaP256Sha384),
                Some(&oids::SECP384R1) => Ok(SignatureAlgorithm::EcdsaP384Sha384),
                _ => Err(Error::UnsupportedAlgorithm(*sig_oid)),
            },
            oids::SHA256_WITH_RSA => Ok(SignatureAlgorithm::RsaPkcs1Sha256),
            oids::SHA384_WITH_RSA => Ok(SignatureAlgorithm::RsaPkcs1Sha384),
            oids::SHA512_WITH_RSA => Ok(SignatureAlgorithm::RsaPkcs1Sha512),
            oids::RSA_PSS => Self::parse_rsa_pss_params(params),
            oids::ED25519 => Ok(SignatureAlgorithm::Ed25519),
            _ => Err(Error::UnsupportedAlgorithm(*sig_oid)),
        }
    }

    /// Map an OID without parameters.
    pub fn from_oid(oid: &ObjectIdentifier) -> Result<Self> {
        Self::from_oid_with_params(oid, None, None)
    }

    /// Parse RSASSA-PSS-params to pick the hash algorithm.
    ///
    /// ```text
    /// RSASSA-PSS-params ::= SEQUENCE {
    ///     hashAlgorithm     [0] HashAlgorithm DEFAULT sha1,
    ///     maskGenAlgorithm  [1] MaskGenAlgorithm DEFAULT mgf1SHA1,
    ///     saltLength        [2] INTEGER DEFAULT 20,
    ///     trailerField      [3] TrailerField DEFAULT trailerFieldBC
    /// }
    /// ```
    ///
    /// The ASN.1 defaults are all SHA-1 based; absent parameters or an
    /// absent hashAlgorithm therefore mean SHA-1, which is rejected.
    fn parse_rsa_pss_params(params: Option<&AnyRef<'_>>) -> Result<Self> {
        use der::{Reader, SliceReader, TagMode, TagNumber};
        use spki::AlgorithmIdentifierRef;

        let params = params.ok_or(Error::UnsupportedAlgorithm(oids::RSA_PSS))?;

        let mut reader =
            SliceReader::new(params.value()).map_err(|_| Error::UnsupportedAlgorithm(oids::RSA_PSS))?;

        let hash_oid: Option<ObjectIdentifier> = reader
            .context_specific::<AlgorithmIdentifierRef<'_>>(TagNumber::N0, TagMode::Explicit)
            .ok()
            .flatten()
            .map(|ai| ai.oid);

        match hash_oid {
            Some(oid) if oid == oids::SHA256 => Ok(SignatureAlgorithm::RsaPssSha256),
            Some(oid) if oid == oids::SHA384 => Ok(SignatureAlgorithm::RsaPssSha384),
            Some(oid) if oid == oids::SHA512 => Ok(SignatureAlgorithm::RsaPssSha512),
            _ => Err(Error::UnsupportedAlgorithm(oids::RSA_PSS)),
        }
    }
}

/// Signature verification seam.
///
/// `verify_signature` returns `Ok(())` when `signature` over `tbs_data`
/// checks out under `public_key`, and
/// [`ValidationFailure::SignatureInvalid`](crate::error::ValidationFailure::SignatureInvalid)
/// otherwise.
pub trait CryptoBackend {
    /// Verify a signature.
    fn verify_signature(
        &self,
        algorithm: SignatureAlgorithm,
        tbs_data: &[u8],
        signature: &[u8],
        public_key: &[u8],
    ) -> Result<()>;
}
