// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Nodal factors
//!
//! The nodal (satellite) factor `f` scales a constituent's amplitude for the
//! 18.6-year regression of the lunar node. Every constituent maps, through
//! the [`nodal_formula`] dispatch table, to one of a handful of base formulas
//! from Schureman (1958) or to a fixed product of them:
//!
//! | Formula | Expression |
//! |---------|------------|
//! | `f73` | `(2/3 − sin²I) / 0.5021` |
//! | `f74` | `sin²I / 0.1578` |
//! | `f75` | `sin I · cos²(I/2) / 0.37988` |
//! | `f76` | `sin 2I / 0.7214` |
//! | `f77` | `sin I · sin²(I/2) / 0.0164` |
//! | `f78` | `cos⁴(I/2) / 0.91544` |
//! | `f149` | `cos⁶(I/2) / 0.8758` |
//! | `f197` | `√(2.310 + 1.435 cos 2(P − ξ))` |
//! | `f207` | `f75 · f197` |
//! | `f213` | `√(1 − 12 tan²(I/2) cos 2P + 36 tan⁴(I/2))` |
//! | `f215` | `f78 · f213` |
//! | `f227` | `√(0.8965 sin²2I + 0.6001 sin 2I cos ν + 0.1006)` |
//! | `f235` | `0.001 + √(19.0444 sin⁴I + 2.7702 sin²I cos 2ν + 0.0981)` |
//!
//! Each divisor is the formula's value at the mean inclination, so factors
//! hover around 1.

use crate::constituent::ConstituentCode;
use crate::orbital::OrbitalElements;

/// Which closed-form expression yields a constituent's nodal factor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NodalFormula {
    /// No lunar dependence: the factor is exactly `1.0`.
    Unity,
    F73,
    F74,
    F75,
    F76,
    F77,
    F78,
    F149,
    F207,
    F215,
    F227,
    F235,
    /// `f78` raised to an integer power.
    F78Pow(i32),
    /// `f78 · f227`
    F78TimesF227,
    /// `f227 · f78²`
    F227TimesF78Squared,
}

/// Dispatch table from constituent to nodal formula.
#[rustfmt::skip]
pub const fn nodal_formula(code: ConstituentCode) -> NodalFormula {
    use ConstituentCode::*;
    use NodalFormula as F;
    match code {
        S1 | S2 | S4 | S6 | T2 | R2 | Sa | Ssa | P1 => F::Unity,
        M2 | N2 | Nu2 | MU2 | TwoN2 | Lambda2 | Msf | TwoSM2 | MS4 => F::F78,
        M4 | MN4 => F::F78Pow(2),
        M6       => F::F78Pow(3),
        M8       => F::F78Pow(4),
        K1       => F::F227,
        O1 | Rho | Q1 | TwoQ1 => F::F75,
        OO1      => F::F77,
        M1       => F::F207,
        J1       => F::F76,
        Mm       => F::F73,
        Mf       => F::F74,
        M3       => F::F149,
        L2       => F::F215,
        K2       => F::F235,
        MK3      => F::F78TimesF227,
        TwoMK3   => F::F227TimesF78Squared,
    }
}

/// Nodal factor of `code` at the epoch described by `elements`.
#[inline]
pub fn nodal_factor(code: ConstituentCode, elements: &OrbitalElements) -> f64 {
    nodal_formula(code).evaluate(elements)
}

impl NodalFormula {
    /// Evaluate this formula against the shared orbital elements.
    pub fn evaluate(&self, elements: &OrbitalElements) -> f64 {
        let base = BaseFactors::new(elements);
        match *self {
            Self::Unity => 1.0,
            Self::F73 => base.f73(),
            Self::F74 => base.f74(),
            Self::F75 => base.f75(),
            Self::F76 => base.f76(),
            Self::F77 => base.f77(),
            Self::F78 => base.f78(),
            Self::F149 => base.f149(),
            Self::F207 => base.f207(),
            Self::F215 => base.f215(),
            Self::F227 => base.f227(),
            Self::F235 => base.f235(),
            Self::F78Pow(n) => base.f78().powi(n),
            Self::F78TimesF227 => base.f78() * base.f227(),
            Self::F227TimesF78Squared => base.f227() * base.f78().powi(2),
        }
    }
}

/// Base formulas over a borrowed set of orbital elements.
#[derive(Debug, Copy, Clone)]
pub struct BaseFactors<'a> {
    elements: &'a OrbitalElements,
}

impl<'a> BaseFactors<'a> {
    #[inline]
    pub fn new(elements: &'a OrbitalElements) -> Self {
        Self { elements }
    }

    #[inline]
    fn i(&self) -> f64 {
        self.elements.i().radians()
    }

    pub fn f73(&self) -> f64 {
        (2.0 / 3.0 - self.i().sin().powi(2)) / 0.5021
    }

    pub fn f74(&self) -> f64 {
        self.i().sin().powi(2) / 0.1578
    }

    pub fn f75(&self) -> f64 {
        let i = self.i();
        i.sin() * (i / 2.0).cos().powi(2) / 0.37988
    }

    pub fn f76(&self) -> f64 {
        (2.0 * self.i()).sin() / 0.7214
    }

    pub fn f77(&self) -> f64 {
        let i = self.i();
        i.sin() * (i / 2.0).sin().powi(2) / 0.0164
    }

    pub fn f78(&self) -> f64 {
        (self.i() / 2.0).cos().powi(4) / 0.91544
    }

    pub fn f149(&self) -> f64 {
        (self.i() / 2.0).cos().powi(6) / 0.8758
    }

    pub fn f197(&self) -> f64 {
        let p_minus_xi = self.elements.p().radians() - self.elements.xi().radians();
        (2.310 + 1.435 * (2.0 * p_minus_xi).cos()).sqrt()
    }

    pub fn f207(&self) -> f64 {
        self.f75() * self.f197()
    }

    pub fn f213(&self) -> f64 {
        let tan_half_i = (self.i() / 2.0).tan();
        let p = self.elements.p().radians();
        (1.0 - 12.0 * tan_half_i.powi(2) * (2.0 * p).cos() + 36.0 * tan_half_i.powi(4)).sqrt()
    }

    pub fn f215(&self) -> f64 {
        self.f78() * self.f213()
    }

    pub fn f227(&self) -> f64 {
        let sin_2i = (2.0 * self.i()).sin();
        let nu = self.elements.nu().radians();
        (0.8965 * sin_2i.powi(2) + 0.6001 * sin_2i * nu.cos() + 0.1006).sqrt()
    }

    pub fn f235(&self) -> f64 {
        let sin_i = self.i().sin();
        let nu = self.elements.nu().radians();
        0.001 + (19.0444 * sin_i.powi(4) + 2.7702 * sin_i.powi(2) * (2.0 * nu).cos() + 0.0981).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::epoch::Epoch;
    use chrono::{TimeZone, Utc};

    fn elements(y: i32, m: u32, d: u32) -> OrbitalElements {
        let start = Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap();
        let end = start + chrono::Duration::days(31);
        OrbitalElements::compute(&Epoch::new(start, end, None).unwrap())
    }

    #[test]
    fn nodal_formula_table_is_total() {
        for code in ConstituentCode::ALL {
            let f = nodal_factor(code, &elements(2020, 1, 1));
            assert!(f.is_finite() && f > 0.0, "{code}: {f}");
        }
    }

    #[test]
    fn solar_constituents_have_unit_factor() {
        use ConstituentCode::*;
        for year in [1950, 1985, 2003, 2020, 2031] {
            let el = elements(year, 3, 1);
            for code in [S1, S2, S4, S6, T2, R2, Sa, Ssa] {
                assert_eq!(nodal_factor(code, &el), 1.0, "{code} in {year}");
            }
        }
    }

    #[test]
    fn composite_formulas_are_products_of_their_parts() {
        use ConstituentCode::*;
        let el = elements(2021, 6, 1);
        let m2 = nodal_factor(M2, &el);
        let k1 = nodal_factor(K1, &el);
        assert!((nodal_factor(M4, &el) - m2 * m2).abs() < 1e-12);
        assert!((nodal_factor(MK3, &el) - m2 * k1).abs() < 1e-12);
        assert!((nodal_factor(TwoMK3, &el) - k1 * m2 * m2).abs() < 1e-12);
        assert!((nodal_factor(M8, &el) - m2.powi(4)).abs() < 1e-12);
        assert!((nodal_factor(MS4, &el) - m2).abs() < 1e-15);
    }

    #[test]
    fn reference_factors_for_january_2020() {
        use ConstituentCode::*;
        let el = elements(2020, 1, 1);
        let cases = [
            (Mm, 1.0165243164624584),
            (Mf, 0.9903029617925617),
            (Msf, 1.005206768345234),
            (Sa, 1.0),
            (Ssa, 1.0),
            (Q1, 0.9982372080521992),
            (TwoQ1, 0.9982372080521992),
            (Rho, 0.9982372080521992),
            (O1, 0.9982372080521992),
            (OO1, 0.9816713838270192),
            (M1, 1.8884352304035374),
            (J1, 1.0066840584976608),
            (P1, 1.0),
            (S1, 1.0),
            (K1, 0.9990305366743276),
            (TwoN2, 1.005206768345234),
            (MU2, 1.005206768345234),
            (N2, 1.005206768345234),
            (Nu2, 1.005206768345234),
            (Lambda2, 1.005206768345234),
            (L2, 0.7499850428008339),
            (M2, 1.005206768345234),
            (T2, 1.0),
            (S2, 1.0),
            (R2, 1.0),
            (K2, 0.9768625775949423),
            (TwoSM2, 1.005206768345234),
            (M3, 1.007912874766964),
            (MK3, 1.0042322572486055),
            (TwoMK3, 1.0094610619769104),
            (MN4, 1.0104406471270688),
            (M4, 1.0104406471270688),
            (MS4, 1.005206768345234),
            (S4, 1.0),
            (M6, 1.0157017775032677),
            (S6, 1.0),
            (M8, 1.0209903013665695),
        ];
        assert_eq!(cases.len(), ConstituentCode::ALL.len());
        for (code, expected) in cases {
            let actual = nodal_factor(code, &el);
            assert!((actual - expected).abs() < 1e-9, "{code}: {actual} != {expected}");
        }
    }

    #[test]
    fn base_formulas_match_reference_values() {
        let el = elements(2020, 1, 1);
        let base = BaseFactors::new(&el);
        for (name, actual, expected) in [
            ("f73", base.f73(), 1.0165243164624584),
            ("f74", base.f74(), 0.9903029617925617),
            ("f75", base.f75(), 0.9982372080521992),
            ("f76", base.f76(), 1.0066840584976608),
            ("f77", base.f77(), 0.9816713838270192),
            ("f78", base.f78(), 1.005206768345234),
            ("f149", base.f149(), 1.007912874766964),
            ("f197", base.f197(), 1.8917700273748848),
            ("f207", base.f207(), 1.8884352304035374),
            ("f213", base.f213(), 0.7461002715246887),
            ("f215", base.f215(), 0.7499850428008339),
            ("f227", base.f227(), 0.9990305366743276),
            ("f235", base.f235(), 0.9768625775949423),
        ] {
            assert!((actual - expected).abs() < 1e-9, "{name}: {actual} != {expected}");
        }
    }

    #[test]
    fn base_factors_are_close_to_one_at_mean_inclination() {
        let el = elements(2015, 1, 1);
        let base = BaseFactors::new(&el);
        for (name, value) in [
            ("f73", base.f73()),
            ("f74", base.f74()),
            ("f75", base.f75()),
            ("f76", base.f76()),
            ("f78", base.f78()),
            ("f149", base.f149()),
            ("f213", base.f213()),
            ("f215", base.f215()),
            ("f227", base.f227()),
            ("f235", base.f235()),
        ] {
            assert!((value - 1.0).abs() < 0.5, "{name} = {value}");
        }
    }
}
