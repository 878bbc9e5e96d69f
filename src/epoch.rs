// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Reference epoch window.
//!
//! An [`Epoch`] holds the three instants that anchor every astronomical
//! argument: the model **spinup** (warm-up start), the nominal simulation
//! **start**, and the simulation **end**. Construction validates
//! `spinup < start < end` eagerly; an `Epoch` that exists is always valid.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use tidefac::Epoch;
//!
//! let start = Utc.with_ymd_and_hms(2020, 2, 1, 0, 0, 0).unwrap();
//! let end = Utc.with_ymd_and_hms(2020, 3, 1, 0, 0, 0).unwrap();
//! let epoch = Epoch::new(start, end, None).unwrap();
//!
//! // Spinup defaults to fifteen days before the start.
//! assert_eq!(epoch.spinup_date(), Utc.with_ymd_and_hms(2020, 1, 17, 0, 0, 0).unwrap());
//! ```

use crate::error::{TideError, TideResult};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Timelike, Utc};
use qtty::{Day, Days, Seconds};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Days between the default spinup instant and the simulation start.
pub const DEFAULT_SPINUP_DAYS: i64 = 15;

/// Naive layouts accepted by [`Epoch::parse`], tried after RFC 3339.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Validated `(spinup, start, end)` window.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Epoch {
    spinup_date: DateTime<Utc>,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    #[cfg_attr(feature = "serde", serde(skip))]
    spinup_defaulted: bool,
}

impl Epoch {
    // ── constructors ──────────────────────────────────────────────────

    /// Validate the window and resolve the spinup instant.
    ///
    /// Fails with [`TideError::InvalidDateOrder`] when `end <= start` or when a
    /// supplied `spinup >= start`. A missing `spinup` becomes
    /// `start − 15 days`.
    pub fn new(
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        spinup_date: Option<DateTime<Utc>>,
    ) -> TideResult<Self> {
        if end_date <= start_date {
            return Err(TideError::invalid_date_order(format!(
                "end_date ({end_date}) must be larger than start_date ({start_date})"
            )));
        }

        let (spinup_date, spinup_defaulted) = match spinup_date {
            Some(spinup) if spinup >= start_date => {
                return Err(TideError::invalid_date_order(format!(
                    "spinup_date ({spinup}) must be smaller than start_date ({start_date})"
                )));
            }
            Some(spinup) => (spinup, false),
            None => {
                let spinup = start_date
                    .checked_sub_signed(Duration::days(DEFAULT_SPINUP_DAYS))
                    .ok_or_else(|| {
                        TideError::invalid_date_type("spinup_date", start_date.to_rfc3339())
                    })?;
                (spinup, true)
            }
        };

        let epoch = Self {
            spinup_date,
            start_date,
            end_date,
            spinup_defaulted,
        };

        debug!(
            spinup = %spinup_date,
            start = %start_date,
            end = %end_date,
            spinup_defaulted,
            record_days = epoch.record_days().value(),
            "resolved epoch window"
        );

        Ok(epoch)
    }

    /// Parse the three instants from text, then validate as [`Epoch::new`].
    ///
    /// Accepts RFC 3339 and the naive layouts `YYYY-MM-DDTHH:MM[:SS[.f]]`,
    /// `YYYY-MM-DD HH:MM[:SS[.f]]` and `YYYY-MM-DD`; naive values are read as
    /// UTC. Unparseable text fails with [`TideError::InvalidDateType`].
    pub fn parse(start_date: &str, end_date: &str, spinup_date: Option<&str>) -> TideResult<Self> {
        let start = parse_timestamp("start_date", start_date)?;
        let end = parse_timestamp("end_date", end_date)?;
        let spinup = spinup_date
            .map(|s| parse_timestamp("spinup_date", s))
            .transpose()?;
        Self::new(start, end, spinup)
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn spinup_date(&self) -> DateTime<Utc> {
        self.spinup_date
    }

    #[inline]
    pub const fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    #[inline]
    pub const fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    /// `true` when the spinup instant was derived rather than supplied.
    #[inline]
    pub const fn spinup_defaulted(&self) -> bool {
        self.spinup_defaulted
    }

    // ── record span ───────────────────────────────────────────────────

    /// Elapsed time from spinup to end, in seconds.
    pub fn record_seconds(&self) -> Seconds {
        let span = self.end_date - self.spinup_date;
        let nanos = span.subsec_nanos() as f64 / 1e9;
        Seconds::new(span.num_seconds() as f64 + nanos)
    }

    /// Elapsed time from spinup to end, in days.
    #[inline]
    pub fn record_days(&self) -> Days {
        self.record_seconds().to::<Day>()
    }

    // ── calendar quantities feeding the orbital polynomials ───────────

    /// Years elapsed since 1900 at the spinup instant (`DYR`).
    #[inline]
    pub fn dyr(&self) -> f64 {
        (self.spinup_date.year() - 1900) as f64
    }

    /// Day-of-year of the spinup instant plus the leap days since 1901,
    /// zero based (`DDAY`).
    #[inline]
    pub fn dday(&self) -> f64 {
        let year = self.spinup_date.year() as i64;
        let leap_days = (year - 1901) / 4;
        (self.spinup_date.ordinal() as i64 + leap_days - 1) as f64
    }

    /// Whole hour-of-day of the spinup instant.
    ///
    /// Minutes and seconds are deliberately dropped.
    #[inline]
    pub fn spinup_hour(&self) -> f64 {
        self.spinup_date.hour() as f64
    }

    /// Spinup hour-of-day plus half the hours elapsed until `end_date`.
    ///
    /// References the lunar node and perigee to the middle of the record.
    #[inline]
    pub fn hour_middle(&self) -> f64 {
        self.spinup_hour() + (self.record_seconds().value() / 3600.0) / 2.0
    }
}

impl std::fmt::Display for Epoch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "spinup {} / start {} / end {}",
            self.spinup_date, self.start_date, self.end_date
        )
    }
}

/// Interpret `value` as a UTC timestamp.
pub(crate) fn parse_timestamp(field: &'static str, value: &str) -> TideResult<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| TideError::invalid_date_type(field, value))
}
