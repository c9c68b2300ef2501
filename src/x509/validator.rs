// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Certificate chain validation.
//!
//! One verification attempt runs a fixed sequence of checks over a decoded
//! certificate and its issuer's decoded certificate:
//!
//! ```text
//! temporal → name linkage → basic constraints → key usage → signature
//! ```
//!
//! The first failing check decides the outcome; later checks never run.
//! Signature math is delegated to a [`CryptoBackend`]; the validator only
//! extracts the signed bytes, the signature, and the issuer's public key.
//! Both certificates are read-only borrowed views, and the validator takes
//! no ownership of the underlying buffers.

use crate::certificate::{spki::PublicKey, Certificate};
use crate::crypto_backend::{CryptoBackend, SignatureAlgorithm};
#[cfg(feature = "ring-backend")]
use crate::crypto_backend::RingBackend;
use crate::error::{Result, ValidationFailure};
use crate::time::{current_time, Time};
use crate::x509::extensions::KeyUsage;

// ============================================================================
// Validation options
// ============================================================================

/// Options for one verification attempt.
#[derive(Debug, Clone)]
pub struct ValidationOptions {
    /// Reference time for the temporal check; wall clock when `None`.
    pub reference_time: Option<Time>,

    /// Whether to run the signature check. Disabling it turns the
    /// validator into a structural path check only.
    pub check_signature: bool,

    /// Whether a certificate bearing an unrecognized critical extension is
    /// rejected (RFC 5280 behavior, the default) or tolerated.
    pub reject_unknown_critical: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            reference_time: None,
            check_signature: true,
            reject_unknown_critical: true,
        }
    }
}

impl ValidationOptions {
    /// Options with every check enabled and wall-clock time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the temporal check against `time` instead of the wall clock.
    pub fn at_time(mut self, time: Time) -> Self {
        self.reference_time = Some(time);
        self
    }

    /// Skip the signature check.
    pub fn skip_signature_check(mut self) -> Self {
        self.check_signature = false;
        self
    }

    /// Tolerate unrecognized critical extensions.
    pub fn allow_unknown_critical(mut self) -> Self {
        self.reject_unknown_critical = false;
        self
    }
}

// ============================================================================
// Chain validator
// ============================================================================

/// Validates certificates against their issuers.
pub struct ChainValidator<B: CryptoBackend> {
    backend: B,
}

#[cfg(feature = "ring-backend")]
impl ChainValidator<RingBackend> {
    /// A validator backed by ring.
    pub fn new() -> Self {
        Self::with_backend(RingBackend)
    }
}

#[cfg(feature = "ring-backend")]
impl Default for ChainValidator<RingBackend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: CryptoBackend> ChainValidator<B> {
    /// A validator using a specific crypto backend.
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Validate `cert` against its issuer's certificate.
    ///
    /// `path_len` is the number of non-self-issued intermediate
    /// certificates between `cert` and `issuer` in the path being built;
    /// it is what the issuer's pathLenConstraint bounds. Passing 0 is
    /// correct when `issuer` directly issued `cert` with nothing between.
    pub fn validate(
        &self,
        cert: &Certificate<'_>,
        issuer: &Certificate<'_>,
        path_len: usize,
        options: &ValidationOptions,
    ) -> Result<()> {
        log::trace!(
            "validate: subject={} issuer={}",
            cert.subject(),
            issuer.subject()
        );

        self.check_temporal(cert, options)?;
        self.check_name_link(cert, issuer)?;
        self.check_constraints(cert, issuer, path_len, options)?;
        self.check_key_usage(issuer)?;
        self.check_signature(cert, issuer, options)?;

        log::trace!("validate: all checks passed");
        Ok(())
    }

    /// Validate a whole chain ordered leaf to root.
    ///
    /// Each link runs the pairwise checks with the non-self-issued
    /// intermediate count computed from the chain; the root is checked for
    /// temporal validity and its own (self-)signature.
    pub fn validate_chain(
        &self,
        chain: &[Certificate<'_>],
        options: &ValidationOptions,
    ) -> Result<()> {
        if chain.is_empty() {
            return Err(ValidationFailure::EmptyChain.into());
        }

        for (idx, cert) in chain.iter().enumerate() {
            match chain.get(idx + 1) {
                Some(issuer) => {
                    // Intermediates strictly below this issuer, leaf
                    // excluded, self-issued entries excluded.
                    let path_len = chain
                        .iter()
                        .take(idx + 1)
                        .skip(1)
                        .filter(|c| !c.is_self_issued())
                        .count();
                    self.validate(cert, issuer, path_len, options)?;
                }
                None => {
                    self.check_temporal(cert, options)?;
                    if options.reject_unknown_critical
                        && cert.extensions().unrecognized_critical.is_some()
                    {
                        return Err(ValidationFailure::UnknownCriticalExtension.into());
                    }
                    self.check_signature(cert, cert, options)?;
                }
            }
        }

        Ok(())
    }

    fn check_temporal(&self, cert: &Certificate<'_>, options: &ValidationOptions) -> Result<()> {
        let now = match options.reference_time {
            Some(time) => time,
            None => current_time()?,
        };

        let validity = cert.validity();
        if now.is_before(&validity.not_before) {
            log::error!("validate: certificate not yet valid");
            return Err(ValidationFailure::NotYetValid.into());
        }
        if now.is_after(&validity.not_after) {
            log::error!("validate: certificate expired");
            return Err(ValidationFailure::Expired.into());
        }
        Ok(())
    }

    fn check_name_link(&self, cert: &Certificate<'_>, issuer: &Certificate<'_>) -> Result<()> {
        // Byte-exact comparison of the encoded names; attribute order and
        // string types matter.
        if cert.issuer() != issuer.subject() {
            log::error!("validate: issuer name mismatch");
            return Err(ValidationFailure::IssuerMismatch.into());
        }
        Ok(())
    }

    fn check_constraints(
        &self,
        cert: &Certificate<'_>,
        issuer: &Certificate<'_>,
        path_len: usize,
        options: &ValidationOptions,
    ) -> Result<()> {
        if options.reject_unknown_critical && cert.extensions().unrecognized_critical.is_some() {
            log::error!("validate: unrecognized critical extension on subject");
            return Err(ValidationFailure::UnknownCriticalExtension.into());
        }

        let constraints = &issuer.extensions().basic_constraints;
        if !constraints.ca {
            log::error!("validate: issuer is not a CA");
            return Err(ValidationFailure::ConstraintViolation.into());
        }
        if let Some(limit) = constraints.path_len_constraint {
            if path_len > limit as usize {
                log::error!(
                    "validate: path length {} exceeds constraint {}",
                    path_len,
                    limit
                );
                return Err(ValidationFailure::ConstraintViolation.into());
            }
        }
        Ok(())
    }

    fn check_key_usage(&self, issuer: &Certificate<'_>) -> Result<()> {
        if let Some(key_usage) = issuer.extensions().key_usage {
            if !key_usage.has(KeyUsage::KEY_CERT_SIGN) {
                log::error!("validate: issuer key usage lacks keyCertSign");
                return Err(ValidationFailure::KeyUsageViolation.into());
            }
        }
        Ok(())
    }

    fn check_signature(
        &self,
        cert: &Certificate<'_>,
        issuer: &Certificate<'_>,
        options: &ValidationOptions,
    ) -> Result<()> {
        if !options.check_signature {
            return Ok(());
        }

        let issuer_spki = issuer.subject_public_key_info();
        let curve_oid = match &issuer_spki.key {
            PublicKey::Ec(ec) => Some(ec.named_curve),
            _ => None,
        };

        let algorithm = SignatureAlgorithm::from_oid_with_params(
            &cert.signature_algorithm.oid,
            curve_oid.as_ref(),
            cert.signature_algorithm.parameters.as_ref(),
        )?;

        self.backend.verify_signature(
            algorithm,
            cert.tbs_raw(),
            cert.signature_bytes(),
            issuer_spki.subject_public_key,
        )
    }
}
