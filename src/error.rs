// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Error types for certificate decoding and chain validation.
//!
//! Decoding is fail-fast: the first structural error aborts the whole
//! certificate decode and the caller must treat the result as "no
//! certificate". Chain validation is likewise fail-fast and reports the
//! first failing check only.

extern crate alloc;

use alloc::string::ToString;
use core::fmt;

use const_oid::ObjectIdentifier;

/// Result type alias for decoding and validation operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type covering certificate decoding and chain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Structural DER violation detected by the TLV cursor or a structure
    /// decoder built on it.
    Malformed(MalformedKind),

    /// Structural DER violation detected while decoding a leaf value
    /// (INTEGER, time, OID, algorithm identifier) with the `der` crate.
    Asn1(der::Error),

    /// Invalid PEM framing.
    Pem(PemError),

    /// The structure decoded but the algorithm identifier is not one the
    /// signature collaborator implements.
    UnsupportedAlgorithm(ObjectIdentifier),

    /// No caller-supplied reference time and no wall clock available.
    TimeUnavailable,

    /// A chain-validation check failed.
    Validation(ValidationFailure),
}

/// Structural DER violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    /// Input ended before a complete tag/length header or declared value.
    Truncated,

    /// A declared length exceeds the remaining input.
    LengthOverflow,

    /// Indefinite-length encoding (BER, not DER).
    IndefiniteLength,

    /// A tag other than the one the grammar requires at this position.
    UnexpectedTag {
        /// Expected tag byte, if the caller expected one specific tag.
        expected: Option<u8>,
        /// Tag byte actually found.
        found: u8,
    },

    /// Bytes left over after a structure consumed its declared extent.
    TrailingBytes,

    /// Multi-byte tag numbers; the certificate grammar never uses them.
    UnsupportedTag,

    /// BOOLEAN with a content length other than one byte.
    InvalidBoolean,

    /// INTEGER that is empty, negative, or too large for its destination.
    InvalidInteger,

    /// BIT STRING with no unused-bit octet or an unused-bit count above 7,
    /// or a nonzero count where the payload must be whole bytes.
    InvalidBitString,

    /// String value that is not valid UTF-8 where a textual field requires it.
    InvalidString,

    /// OBJECT IDENTIFIER whose content octets do not form a valid OID.
    InvalidOid,

    /// Certificate version outside v1..v3.
    InvalidVersion(u8),

    /// A required field is absent.
    MissingField(&'static str),
}

/// PEM framing errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PemError {
    /// The PEM label is not `CERTIFICATE`.
    UnexpectedLabel(alloc::string::String),

    /// Base64 or pre/post-encapsulation framing error.
    Decode(alloc::string::String),
}

/// Terminal outcomes of the chain validator's failing states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    /// Reference time is past the subject certificate's notAfter.
    Expired,

    /// Reference time is before the subject certificate's notBefore.
    NotYetValid,

    /// The subject's issuer name does not byte-compare equal to the
    /// issuer's subject name.
    IssuerMismatch,

    /// The issuer is not a CA, or a path length constraint is exceeded.
    ConstraintViolation,

    /// The issuer carries a key usage extension without keyCertSign.
    KeyUsageViolation,

    /// The signature primitive rejected the TBS/signature pair.
    SignatureInvalid,

    /// The subject certificate carries a critical extension this
    /// implementation does not recognize (policy-controlled, see
    /// `ValidationOptions::reject_unknown_critical`).
    UnknownCriticalExtension,

    /// A whole-chain walk was handed an empty chain.
    EmptyChain,
}

impl Error {
    /// Whether this error is a structural decode failure (the
    /// specification's `MalformedEncoding` condition).
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::Malformed(_) | Error::Asn1(_))
    }

    /// Truncated input.
    pub(crate) fn truncated() -> Self {
        Error::Malformed(MalformedKind::Truncated)
    }

    /// A tag other than `expected` was found.
    pub(crate) fn unexpected_tag(expected: u8, found: u8) -> Self {
        Error::Malformed(MalformedKind::UnexpectedTag {
            expected: Some(expected),
            found,
        })
    }

    /// A required field is absent.
    pub(crate) fn missing_field(field: &'static str) -> Self {
        Error::Malformed(MalformedKind::MissingField(field))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Malformed(kind) => write!(f, "Malformed encoding: {}", kind),
            Error::Asn1(e) => write!(f, "Malformed encoding: {}", e),
            Error::Pem(e) => write!(f, "PEM error: {}", e),
            Error::UnsupportedAlgorithm(oid) => write!(f, "Unsupported algorithm: {}", oid),
            Error::TimeUnavailable => write!(f, "No reference time available"),
            Error::Validation(failure) => write!(f, "Validation failed: {}", failure),
        }
    }
}

impl fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedKind::Truncated => write!(f, "truncated input"),
            MalformedKind::LengthOverflow => {
                write!(f, "declared length exceeds remaining input")
            }
            MalformedKind::IndefiniteLength => {
                write!(f, "indefinite length is not valid DER")
            }
            MalformedKind::UnexpectedTag {
                expected: Some(expected),
                found,
            } => write!(
                f,
                "unexpected tag: expected 0x{:02x}, found 0x{:02x}",
                expected, found
            ),
            MalformedKind::UnexpectedTag {
                expected: None,
                found,
            } => write!(f, "unexpected tag 0x{:02x}", found),
            MalformedKind::TrailingBytes => write!(f, "trailing bytes after structure"),
            MalformedKind::UnsupportedTag => write!(f, "multi-byte tag numbers are not supported"),
            MalformedKind::InvalidBoolean => write!(f, "invalid BOOLEAN"),
            MalformedKind::InvalidInteger => write!(f, "invalid INTEGER"),
            MalformedKind::InvalidBitString => write!(f, "invalid BIT STRING"),
            MalformedKind::InvalidString => write!(f, "invalid string value"),
            MalformedKind::InvalidOid => write!(f, "invalid object identifier"),
            MalformedKind::InvalidVersion(v) => write!(f, "invalid certificate version: {}", v),
            MalformedKind::MissingField(field) => write!(f, "missing required field: {}", field),
        }
    }
}

impl fmt::Display for PemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PemError::UnexpectedLabel(label) => {
                write!(f, "expected CERTIFICATE label, found '{}'", label)
            }
            PemError::Decode(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::Expired => write!(f, "certificate has expired"),
            ValidationFailure::NotYetValid => write!(f, "certificate is not yet valid"),
            ValidationFailure::IssuerMismatch => {
                write!(f, "issuer name does not match the issuer certificate's subject")
            }
            ValidationFailure::ConstraintViolation => {
                write!(f, "basic constraints violated")
            }
            ValidationFailure::KeyUsageViolation => {
                write!(f, "issuer key usage does not permit certificate signing")
            }
            ValidationFailure::SignatureInvalid => write!(f, "signature verification failed"),
            ValidationFailure::UnknownCriticalExtension => {
                write!(f, "unrecognized critical extension")
            }
            ValidationFailure::EmptyChain => write!(f, "certificate chain is empty"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<der::Error> for Error {
    fn from(err: der::Error) -> Self {
        Error::Asn1(err)
    }
}

impl From<pem_rfc7468::Error> for Error {
    fn from(err: pem_rfc7468::Error) -> Self {
        Error::Pem(PemError::Decode(err.to_string()))
    }
}

impl From<ValidationFailure> for Error {
    fn from(failure: ValidationFailure) -> Self {
        Error::Validation(failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Validation(ValidationFailure::Expired);
        assert_eq!(err.to_string(), "Validation failed: certificate has expired");

        let err = Error::unexpected_tag(0x30, 0x31);
        assert_eq!(
            err.to_string(),
            "Malformed encoding: unexpected tag: expected 0x30, found 0x31"
        );
    }

    #[test]
    fn test_is_malformed() {
        assert!(Error::truncated().is_malformed());
        assert!(Error::Asn1(der::Error::new(der::ErrorKind::Failed, der::Length::ZERO))
            .is_malformed());
        assert!(!Error::Validation(ValidationFailure::Expired).is_malformed());
        assert!(!Error::TimeUnavailable.is_malformed());
    }

    #[test]
    fn test_der_error_conversion() {
        let der_err = der::Error::new(der::ErrorKind::Failed, der::Length::ZERO);
        let err: Error = der_err.into();
        assert!(matches!(err, Error::Asn1(_)));
    }

    #[test]
    fn test_validation_failure_conversion() {
        let err: Error = ValidationFailure::IssuerMismatch.into();
        assert!(matches!(
            err,
            Error::Validation(ValidationFailure::IssuerMismatch)
        ));
    }
}
