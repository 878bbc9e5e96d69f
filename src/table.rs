// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Tidal argument table.
//!
//! [`TidalArgumentTable`] joins the static [catalog](crate::catalog) records
//! with the nodal factors and Greenwich arguments evaluated for one
//! [`Epoch`]. Entries keep the order in which constituents were requested,
//! or the catalog declaration order when no selection is given.
//!
//! ```
//! use tidefac::{Epoch, TidalArgumentTable};
//!
//! let epoch = Epoch::parse("2020-01-01T00:00", "2020-02-01T00:00", None).unwrap();
//! let table = TidalArgumentTable::build(epoch, Some(&["M2", "K1"])).unwrap();
//!
//! let m2 = table.get_str("M2").unwrap();
//! assert!((0.0..360.0).contains(&m2.greenwich_term));
//! assert_eq!(table.units(), "rad/sec");
//! ```

use crate::catalog::{self, DoodsonCoefficients, FREQUENCY_UNITS};
use crate::constituent::{unknown_constituent, ConstituentCode};
use crate::epoch::Epoch;
use crate::error::TideResult;
use crate::greenwich::greenwich_term;
use crate::nodal::nodal_factor;
use crate::orbital::OrbitalElements;
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{ser::SerializeMap, ser::SerializeStruct, Serialize, Serializer};

/// One row of the table.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Constituent {
    #[cfg_attr(feature = "serde", serde(skip))]
    pub code: ConstituentCode,
    /// Angular frequency in rad/s.
    pub orbital_frequency: f64,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub doodson_coefficient: Option<DoodsonCoefficients>,
    /// Equilibrium tidal potential amplitude in metres.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub tidal_potential_amplitude: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub earth_tidal_potential_reduction_factor: Option<f64>,
    /// Dimensionless amplitude correction.
    pub nodal_factor: f64,
    /// Equilibrium argument at Greenwich in degrees, `[0, 360)`.
    pub greenwich_term: f64,
}

impl Constituent {
    /// Evaluate a constituent against shared orbital elements.
    pub fn evaluate(code: ConstituentCode, elements: &OrbitalElements) -> Self {
        let entry = catalog::lookup(code);
        Self {
            code,
            orbital_frequency: entry.orbital_frequency,
            doodson_coefficient: entry.doodson_coefficient,
            tidal_potential_amplitude: entry.tidal_potential_amplitude,
            earth_tidal_potential_reduction_factor: entry.earth_tidal_potential_reduction_factor,
            nodal_factor: nodal_factor(code, elements),
            greenwich_term: greenwich_term(code, elements),
        }
    }
}

/// Ordered `code → Constituent` records for one epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct TidalArgumentTable {
    epoch: Epoch,
    elements: OrbitalElements,
    entries: Vec<Constituent>,
}

impl TidalArgumentTable {
    /// Table over the full default vocabulary.
    pub fn new(epoch: Epoch) -> Self {
        Self::assemble(epoch, &ConstituentCode::DEFAULT)
    }

    /// Table over `selected` codes, or the default vocabulary when `None`.
    ///
    /// Every code must belong to [`ConstituentCode::DEFAULT`]; otherwise the
    /// whole build fails with
    /// [`UnknownConstituent`](crate::TideError::UnknownConstituent).
    pub fn build(epoch: Epoch, selected: Option<&[&str]>) -> TideResult<Self> {
        match selected {
            Some(codes) => Self::with_constituents(epoch, codes.iter().copied()),
            None => Ok(Self::new(epoch)),
        }
    }

    /// Table over an explicit list of code spellings, kept in order.
    pub fn with_constituents<I>(epoch: Epoch, selected: I) -> TideResult<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let codes = selected
            .into_iter()
            .map(|code| ConstituentCode::parse_selectable(code.as_ref()))
            .collect::<TideResult<Vec<_>>>()?;
        Ok(Self::assemble(epoch, &codes))
    }

    /// Table over typed codes, kept in order.
    pub fn from_codes(epoch: Epoch, codes: &[ConstituentCode]) -> TideResult<Self> {
        if let Some(code) = codes.iter().find(|code| !code.is_default()) {
            return Err(unknown_constituent(code.as_str()));
        }
        Ok(Self::assemble(epoch, codes))
    }

    fn assemble(epoch: Epoch, codes: &[ConstituentCode]) -> Self {
        let elements = OrbitalElements::compute(&epoch);
        let mut entries: Vec<Constituent> = Vec::with_capacity(codes.len());
        for &code in codes {
            // A repeated code keeps its first position.
            if entries.iter().any(|c| c.code == code) {
                continue;
            }
            let constituent = Constituent::evaluate(code, &elements);
            trace!(
                code = code.as_str(),
                nodal_factor = constituent.nodal_factor,
                greenwich_term = constituent.greenwich_term,
                "evaluated constituent"
            );
            entries.push(constituent);
        }
        debug!(constituents = entries.len(), "built tidal argument table");
        Self {
            epoch,
            elements,
            entries,
        }
    }

    // ── lookup ────────────────────────────────────────────────────────

    pub fn get(&self, code: ConstituentCode) -> Option<&Constituent> {
        self.entries.iter().find(|c| c.code == code)
    }

    /// Look up by spelling (`"M2"`, `"2N2"`, …).
    pub fn get_str(&self, code: &str) -> Option<&Constituent> {
        code.parse::<ConstituentCode>()
            .ok()
            .and_then(|code| self.get(code))
    }

    #[inline]
    pub fn contains(&self, code: ConstituentCode) -> bool {
        self.get(code).is_some()
    }

    /// Records in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, Constituent> {
        self.entries.iter()
    }

    /// Codes in table order.
    pub fn codes(&self) -> impl Iterator<Item = ConstituentCode> + '_ {
        self.entries.iter().map(|c| c.code)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn epoch(&self) -> &Epoch {
        &self.epoch
    }

    /// The orbital elements every row was evaluated against.
    #[inline]
    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    /// Unit of [`Constituent::orbital_frequency`].
    #[inline]
    pub fn units(&self) -> &'static str {
        FREQUENCY_UNITS
    }
}

impl<'a> IntoIterator for &'a TidalArgumentTable {
    type Item = &'a Constituent;
    type IntoIter = std::slice::Iter<'a, Constituent>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Ordered map view used for serialisation.
#[cfg(feature = "serde")]
struct Entries<'a>(&'a [Constituent]);

#[cfg(feature = "serde")]
impl Serialize for Entries<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for constituent in self.0 {
            map.serialize_entry(constituent.code.as_str(), constituent)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl Serialize for TidalArgumentTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("TidalArgumentTable", 3)?;
        s.serialize_field("epoch", &self.epoch)?;
        s.serialize_field("units", self.units())?;
        s.serialize_field("constituents", &Entries(&self.entries))?;
        s.end()
    }
}
