// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! X.509 Certificate Parsing and Chain Validation
//!
//! A no_std-compatible, zero-copy X.509 certificate decoder and chain
//! validator for TLS stacks on constrained targets. The decoder makes one
//! forward pass over a DER buffer and produces a record whose byte fields
//! all borrow from that buffer; the validator checks a decoded certificate
//! against its issuer and delegates signature math to a pluggable crypto
//! backend.
//!
//! # Features
//! - Parse X.509 v1-v3 certificates from DER (PEM via a decode helper)
//! - Distinguished names, RSA/DSA/EC public keys, the common extension set
//! - Temporal, name-linkage, basic-constraints, key-usage and signature
//!   checks, fail-fast with the first failure's reason
//!
//! # Example
//! ```no_run
//! use tls_x509::{Certificate, ChainValidator, ValidationOptions};
//!
//! # fn example(leaf_der: &[u8], ca_der: &[u8]) -> tls_x509::Result<()> {
//! let leaf = Certificate::from_der(leaf_der)?;
//! let ca = Certificate::from_der(ca_der)?;
//!
//! let validator = ChainValidator::new();
//! validator.validate(&leaf, &ca, 0, &ValidationOptions::default())?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod certificate;
pub mod crypto_backend;
pub mod error;
pub mod time;
pub mod tlv;
pub mod x509;

#[cfg(test)]
pub(crate) mod testutil;

pub use certificate::{decode_pem, Certificate, TbsCertificate, Version};
pub use error::{Error, Result, ValidationFailure};
pub use x509::extensions::{
    BasicConstraints, ExtendedKeyUsage, Extensions, KeyUsage, MAX_SUBJECT_ALT_NAMES,
};
pub use x509::{ChainValidator, ValidationOptions};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::certificate::name::{GeneralName, Name};
    pub use crate::certificate::spki::{PublicKey, SubjectPublicKeyInfo};
    pub use crate::crypto_backend::{CryptoBackend, SignatureAlgorithm};
    pub use crate::time::{Time, Validity};
    pub use crate::{Certificate, ChainValidator, Error, Result, ValidationOptions};
}
