// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Time handling for certificate validity periods.
//!
//! Supports both UTCTime and GeneralizedTime as defined in RFC 5280.
//! UTCTime years follow the RFC 5280 window: 50-99 mean 1950-1999 and
//! 00-49 mean 2000-2049 (the `der` crate applies this mapping).
//!
//! The decoder does not compare `not_before` and `not_after` against each
//! other; an inverted validity window decodes fine and only surfaces from
//! the validator's temporal check.

use core::cmp::Ordering;

use der::asn1::{GeneralizedTime, UtcTime};
use der::Decode;

use crate::error::{Error, Result};
use crate::tlv::{tag, Tlv};

/// A timestamp that can be either UTCTime or GeneralizedTime.
///
/// RFC 5280 mandates UTCTime for dates through 2049 and GeneralizedTime
/// for 2050 or later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Time {
    /// UTCTime format (YYMMDDHHMMSSZ)
    UtcTime(UtcTime),
    /// GeneralizedTime format (YYYYMMDDHHMMSSZ)
    GeneralizedTime(GeneralizedTime),
}

impl Time {
    /// Decode a single time value from its TLV unit.
    pub(crate) fn parse(unit: &Tlv<'_>) -> Result<Self> {
        match unit.tag {
            tag::UTC_TIME => Ok(Time::UtcTime(UtcTime::from_der(unit.raw)?)),
            tag::GENERALIZED_TIME => {
                Ok(Time::GeneralizedTime(GeneralizedTime::from_der(unit.raw)?))
            }
            found => Err(Error::unexpected_tag(tag::UTC_TIME, found)),
        }
    }

    /// The calendar representation.
    pub fn to_date_time(&self) -> der::DateTime {
        match self {
            Time::UtcTime(utc) => utc.to_date_time(),
            Time::GeneralizedTime(gen) => gen.to_date_time(),
        }
    }

    /// Whether this time is strictly before `other`.
    pub fn is_before(&self, other: &Time) -> bool {
        self.to_date_time().unix_duration() < other.to_date_time().unix_duration()
    }

    /// Whether this time is strictly after `other`.
    pub fn is_after(&self, other: &Time) -> bool {
        self.to_date_time().unix_duration() > other.to_date_time().unix_duration()
    }

    /// Whether this time is before or equal to `other`.
    pub fn is_before_or_equal(&self, other: &Time) -> bool {
        self.to_date_time().unix_duration() <= other.to_date_time().unix_duration()
    }

    /// Whether this time is after or equal to `other`.
    pub fn is_after_or_equal(&self, other: &Time) -> bool {
        self.to_date_time().unix_duration() >= other.to_date_time().unix_duration()
    }
}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Time {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_date_time()
            .unix_duration()
            .cmp(&other.to_date_time().unix_duration())
    }
}

/// Certificate validity period.
///
/// ```text
/// Validity ::= SEQUENCE {
///     notBefore      Time,
///     notAfter       Time
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validity {
    /// The time before which the certificate is not valid.
    pub not_before: Time,
    /// The time after which the certificate is not valid.
    pub not_after: Time,
}

impl Validity {
    /// Decode a Validity from its SEQUENCE unit. Both times must decode or
    /// the whole certificate fails to parse.
    pub(crate) fn parse(unit: &Tlv<'_>) -> Result<Self> {
        let mut cursor = unit.cursor();
        let not_before = Time::parse(&cursor.read()?)?;
        let not_after = Time::parse(&cursor.read()?)?;
        cursor.finish()?;
        Ok(Validity {
            not_before,
            not_after,
        })
    }

    /// Whether `check_time` lies within `[not_before, not_after]`.
    pub fn is_valid_at(&self, check_time: &Time) -> bool {
        self.not_before.is_before_or_equal(check_time)
            && self.not_after.is_after_or_equal(check_time)
    }
}

/// The current wall-clock time as an X.509 time value.
pub fn current_time() -> Result<Time> {
    #[cfg(feature = "std")]
    {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_err(|_| Error::TimeUnavailable)?;
        let now_dt = der::DateTime::from_unix_duration(now).map_err(|_| Error::TimeUnavailable)?;
        Ok(Time::GeneralizedTime(GeneralizedTime::from_date_time(
            now_dt,
        )))
    }

    #[cfg(not(feature = "std"))]
    {
        Err(Error::TimeUnavailable)
    }
}
