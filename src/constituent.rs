// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Tidal constituent codes.
//!
//! [`ConstituentCode`] is the closed vocabulary of every constituent this
//! crate has formulas for. Only the [`DEFAULT`](ConstituentCode::DEFAULT)
//! subset (the fifteen constituents carried by the TPXO harmonic dataset)
//! can be selected when building a [`TidalArgumentTable`](crate::TidalArgumentTable).
//! The remaining codes are reachable through the formula engines directly and
//! exist because composite constituents are defined in terms of them.
//!
//! | Family | Codes |
//! |--------|-------|
//! | Long period | `Mm`, `Mf`, `Msf`, `Sa`, `Ssa` |
//! | Diurnal | `Q1`, `2Q1`, `RHO`, `O1`, `OO1`, `M1`, `P1`, `S1`, `K1`, `J1` |
//! | Semidiurnal | `2N2`, `MU2`, `N2`, `Nu2`, `M2`, `lambda2`, `L2`, `T2`, `S2`, `R2`, `K2`, `2SM2` |
//! | Shallow water / higher harmonics | `M3`, `MK3`, `2MK3`, `MN4`, `M4`, `MS4`, `S4`, `M6`, `S6`, `M8` |

use crate::error::TideError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// A tidal constituent code.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConstituentCode {
    Mm,
    Mf,
    Q1,
    O1,
    P1,
    S1,
    K1,
    TwoN2,
    N2,
    M2,
    S2,
    K2,
    MN4,
    M4,
    MS4,
    M6,
    MK3,
    S4,
    Nu2,
    S6,
    MU2,
    OO1,
    Lambda2,
    M1,
    J1,
    Ssa,
    Sa,
    Msf,
    Rho,
    T2,
    R2,
    TwoQ1,
    TwoSM2,
    M3,
    L2,
    TwoMK3,
    M8,
}

impl ConstituentCode {
    /// The selectable vocabulary, in catalog declaration order.
    pub const DEFAULT: [Self; 15] = [
        Self::Mm,
        Self::Mf,
        Self::Q1,
        Self::O1,
        Self::P1,
        Self::S1,
        Self::K1,
        Self::TwoN2,
        Self::N2,
        Self::M2,
        Self::S2,
        Self::K2,
        Self::MN4,
        Self::M4,
        Self::MS4,
    ];

    /// Every code the formula engines understand.
    pub const ALL: [Self; 37] = [
        Self::Mm,
        Self::Mf,
        Self::Q1,
        Self::O1,
        Self::P1,
        Self::S1,
        Self::K1,
        Self::TwoN2,
        Self::N2,
        Self::M2,
        Self::S2,
        Self::K2,
        Self::MN4,
        Self::M4,
        Self::MS4,
        Self::M6,
        Self::MK3,
        Self::S4,
        Self::Nu2,
        Self::S6,
        Self::MU2,
        Self::OO1,
        Self::Lambda2,
        Self::M1,
        Self::J1,
        Self::Ssa,
        Self::Sa,
        Self::Msf,
        Self::Rho,
        Self::T2,
        Self::R2,
        Self::TwoQ1,
        Self::TwoSM2,
        Self::M3,
        Self::L2,
        Self::TwoMK3,
        Self::M8,
    ];

    /// Conventional spelling of the code (`"2N2"`, `"lambda2"`, …).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mm => "Mm",
            Self::Mf => "Mf",
            Self::Q1 => "Q1",
            Self::O1 => "O1",
            Self::P1 => "P1",
            Self::S1 => "S1",
            Self::K1 => "K1",
            Self::TwoN2 => "2N2",
            Self::N2 => "N2",
            Self::M2 => "M2",
            Self::S2 => "S2",
            Self::K2 => "K2",
            Self::MN4 => "MN4",
            Self::M4 => "M4",
            Self::MS4 => "MS4",
            Self::M6 => "M6",
            Self::MK3 => "MK3",
            Self::S4 => "S4",
            Self::Nu2 => "Nu2",
            Self::S6 => "S6",
            Self::MU2 => "MU2",
            Self::OO1 => "OO1",
            Self::Lambda2 => "lambda2",
            Self::M1 => "M1",
            Self::J1 => "J1",
            Self::Ssa => "Ssa",
            Self::Sa => "Sa",
            Self::Msf => "Msf",
            Self::Rho => "RHO",
            Self::T2 => "T2",
            Self::R2 => "R2",
            Self::TwoQ1 => "2Q1",
            Self::TwoSM2 => "2SM2",
            Self::M3 => "M3",
            Self::L2 => "L2",
            Self::TwoMK3 => "2MK3",
            Self::M8 => "M8",
        }
    }

    /// Whether the code belongs to the selectable vocabulary.
    #[inline]
    pub fn is_default(&self) -> bool {
        Self::DEFAULT.contains(self)
    }

    /// Parse a code and require it to be selectable.
    pub fn parse_selectable(code: &str) -> Result<Self, TideError> {
        match code.parse::<Self>() {
            Ok(parsed) if parsed.is_default() => Ok(parsed),
            _ => Err(unknown_constituent(code)),
        }
    }
}

/// Builds the error listing the selectable vocabulary.
pub(crate) fn unknown_constituent(code: &str) -> TideError {
    let valid = ConstituentCode::DEFAULT
        .iter()
        .map(ConstituentCode::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    TideError::UnknownConstituent {
        code: code.to_string(),
        valid,
    }
}

impl fmt::Display for ConstituentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ConstituentCode {
    type Err = TideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| unknown_constituent(s))
    }
}

#[cfg(feature = "serde")]
impl Serialize for ConstituentCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_roundtrips_through_its_spelling() {
        for code in ConstituentCode::ALL {
            assert_eq!(code.as_str().parse::<ConstituentCode>(), Ok(code));
        }
    }

    #[test]
    fn all_codes_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for code in ConstituentCode::ALL {
            assert!(seen.insert(code.as_str()), "duplicate code {code}");
        }
        assert_eq!(seen.len(), 37);
    }

    #[test]
    fn default_vocabulary_is_the_head_of_all() {
        assert_eq!(&ConstituentCode::ALL[..15], &ConstituentCode::DEFAULT[..]);
        assert!(ConstituentCode::M2.is_default());
        assert!(!ConstituentCode::M6.is_default());
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("m2".parse::<ConstituentCode>().is_err());
        assert_eq!("lambda2".parse::<ConstituentCode>(), Ok(ConstituentCode::Lambda2));
        assert_eq!("2MK3".parse::<ConstituentCode>(), Ok(ConstituentCode::TwoMK3));
    }

    #[test]
    fn extended_codes_are_not_selectable() {
        let err = ConstituentCode::parse_selectable("MK3").unwrap_err();
        assert!(matches!(err, TideError::UnknownConstituent { ref code, .. } if code == "MK3"));
    }

    #[test]
    fn unknown_code_lists_default_vocabulary() {
        let msg = ConstituentCode::parse_selectable("Zx").unwrap_err().to_string();
        for code in ConstituentCode::DEFAULT {
            assert!(msg.contains(code.as_str()), "missing {code} in: {msg}");
        }
    }
}
