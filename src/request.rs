// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Forcing request: the textual input of a tidal argument computation.
//!
//! A [`ForcingRequest`] is what a model-setup tool reads from its
//! configuration: two mandatory timestamps, an optional spinup timestamp and
//! an optional ordered list of constituent codes. With the `serde` feature it
//! deserialises directly from JSON/TOML/YAML documents such as
//!
//! ```json
//! { "start_date": "2020-01-01T00:00", "end_date": "2020-02-01T00:00",
//!   "constituents": ["M2", "S2", "K1"] }
//! ```

use crate::epoch::Epoch;
use crate::error::TideResult;
use crate::table::TidalArgumentTable;

#[cfg(feature = "serde")]
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct ForcingRequest {
    pub start_date: String,
    pub end_date: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub spinup_date: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub constituents: Option<Vec<String>>,
}

impl ForcingRequest {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            ..Self::default()
        }
    }

    pub fn with_spinup(mut self, spinup_date: impl Into<String>) -> Self {
        self.spinup_date = Some(spinup_date.into());
        self
    }

    pub fn with_constituents<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constituents = Some(codes.into_iter().map(Into::into).collect());
        self
    }

    /// Parse and validate the epoch window.
    pub fn epoch(&self) -> TideResult<Epoch> {
        Epoch::parse(
            &self.start_date,
            &self.end_date,
            self.spinup_date.as_deref(),
        )
    }

    /// Validate everything and evaluate the table.
    ///
    /// Dates are checked before constituents; the first failure is returned.
    pub fn build(&self) -> TideResult<TidalArgumentTable> {
        let epoch = self.epoch()?;
        match &self.constituents {
            Some(codes) => TidalArgumentTable::with_constituents(epoch, codes),
            None => Ok(TidalArgumentTable::new(epoch)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TideError;

    #[test]
    fn builder_fills_optional_fields() {
        let request = ForcingRequest::new("2020-01-01", "2020-02-01")
            .with_spinup("2019-12-20")
            .with_constituents(["M2", "K1"]);
        assert_eq!(request.spinup_date.as_deref(), Some("2019-12-20"));
        assert_eq!(
            request.constituents,
            Some(vec!["M2".to_string(), "K1".to_string()])
        );
    }

    #[test]
    fn build_uses_default_vocabulary_without_selection() {
        let table = ForcingRequest::new("2020-01-01T00:00", "2020-02-01T00:00")
            .build()
            .unwrap();
        assert_eq!(table.len(), 15);
        assert!(table.epoch().spinup_defaulted());
    }

    #[test]
    fn date_errors_take_precedence() {
        let err = ForcingRequest::new("2020-01-01", "garbage")
            .with_constituents(["Zx"])
            .build()
            .unwrap_err();
        assert!(matches!(err, TideError::InvalidDateType { field: "end_date", .. }));
    }

    #[test]
    fn unknown_constituent_is_reported() {
        let err = ForcingRequest::new("2020-01-01", "2020-02-01")
            .with_constituents(["M2", "M6"])
            .build()
            .unwrap_err();
        assert!(matches!(err, TideError::UnknownConstituent { .. }));
    }
}
