// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Greenwich equilibrium arguments
//!
//! The equilibrium argument `V₀ + u` of a constituent at the Greenwich
//! meridian is a fixed linear combination of the orbital angles:
//!
//! ```text
//! V₀ + u = c_T·T + c_s·s + c_h·h + c_p·p + c_p1·p₁
//!        + c_ξ·ξ + c_ν·ν + c_ν′·ν′ + c_ν″·ν″ + c_R·R + c_Q·Q + c₀
//! ```
//!
//! all in degrees, reduced to `[0, 360)` after summation. The coefficients
//! per constituent live in the [`greenwich_argument`] dispatch table.

use crate::constituent::ConstituentCode;
use crate::orbital::{normalize_degrees, OrbitalElements};

/// Coefficients of the orbital angles in one constituent's argument.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GreenwichArgument {
    pub t: f64,
    pub s: f64,
    pub h: f64,
    pub p: f64,
    pub p1: f64,
    pub xi: f64,
    pub nu: f64,
    pub nup: f64,
    pub nup2: f64,
    pub r: f64,
    pub q: f64,
    /// Constant phase offset in degrees.
    pub constant: f64,
}

impl GreenwichArgument {
    pub const ZERO: Self = Self {
        t: 0.0,
        s: 0.0,
        h: 0.0,
        p: 0.0,
        p1: 0.0,
        xi: 0.0,
        nu: 0.0,
        nup: 0.0,
        nup2: 0.0,
        r: 0.0,
        q: 0.0,
        constant: 0.0,
    };

    /// Unreduced argument in degrees.
    pub fn sum(&self, el: &OrbitalElements) -> f64 {
        self.t * el.t().degrees()
            + self.s * el.s().degrees()
            + self.h * el.h().degrees()
            + self.p * el.p().degrees()
            + self.p1 * el.p1().degrees()
            + self.xi * el.xi().degrees()
            + self.nu * el.nu().degrees()
            + self.nup * el.nup().degrees()
            + self.nup2 * el.nup2().degrees()
            + self.r * el.r().degrees()
            + self.q * el.q().degrees()
            + self.constant
    }

    /// Argument in degrees, reduced to `[0, 360)`.
    #[inline]
    pub fn evaluate(&self, el: &OrbitalElements) -> f64 {
        normalize_degrees(self.sum(el))
    }
}

/// `n·(T − s + h) + n·(ξ − ν)`: the `n`-th harmonic of the principal lunar
/// semidiurnal argument (`M2` for `n = 2`).
const fn lunar_harmonic(n: f64) -> GreenwichArgument {
    GreenwichArgument {
        t: n,
        s: -n,
        h: n,
        xi: n,
        nu: -n,
        ..GreenwichArgument::ZERO
    }
}

/// Dispatch table from constituent to argument coefficients.
pub const fn greenwich_argument(code: ConstituentCode) -> GreenwichArgument {
    use ConstituentCode::*;
    const Z: GreenwichArgument = GreenwichArgument::ZERO;
    match code {
        // long period
        Mm => GreenwichArgument { s: 1.0, p: -1.0, ..Z },
        Mf => GreenwichArgument { s: 2.0, xi: -2.0, ..Z },
        Msf => GreenwichArgument { s: 2.0, h: -2.0, ..Z },
        Sa => GreenwichArgument { h: 1.0, ..Z },
        Ssa => GreenwichArgument { h: 2.0, ..Z },

        // diurnal
        Q1 => GreenwichArgument {
            t: 1.0,
            s: -3.0,
            h: 1.0,
            p: 1.0,
            xi: 2.0,
            nu: -1.0,
            constant: 90.0,
            ..Z
        },
        TwoQ1 => GreenwichArgument {
            t: 1.0,
            s: -4.0,
            h: 1.0,
            p: 2.0,
            xi: 2.0,
            nu: -1.0,
            constant: 90.0,
            ..Z
        },
        Rho => GreenwichArgument {
            t: 1.0,
            s: -3.0,
            h: 3.0,
            p: -1.0,
            xi: 2.0,
            nu: -1.0,
            constant: 90.0,
            ..Z
        },
        O1 => GreenwichArgument {
            t: 1.0,
            s: -2.0,
            h: 1.0,
            xi: 2.0,
            nu: -1.0,
            constant: 90.0,
            ..Z
        },
        OO1 => GreenwichArgument {
            t: 1.0,
            s: 2.0,
            h: 1.0,
            xi: -2.0,
            nu: -1.0,
            constant: -90.0,
            ..Z
        },
        M1 => GreenwichArgument {
            t: 1.0,
            s: -1.0,
            h: 1.0,
            xi: 1.0,
            nu: -1.0,
            q: 1.0,
            constant: -90.0,
            ..Z
        },
        P1 => GreenwichArgument {
            t: 1.0,
            h: -1.0,
            constant: 90.0,
            ..Z
        },
        S1 => GreenwichArgument { t: 1.0, ..Z },
        K1 => GreenwichArgument {
            t: 1.0,
            h: 1.0,
            nup: -1.0,
            constant: -90.0,
            ..Z
        },
        J1 => GreenwichArgument {
            t: 1.0,
            s: 1.0,
            h: 1.0,
            p: -1.0,
            nu: -1.0,
            constant: -90.0,
            ..Z
        },

        // semidiurnal
        TwoN2 => GreenwichArgument {
            t: 2.0,
            s: -4.0,
            h: 2.0,
            p: 2.0,
            xi: 2.0,
            nu: -2.0,
            ..Z
        },
        MU2 => GreenwichArgument {
            t: 2.0,
            s: -4.0,
            h: 4.0,
            xi: 2.0,
            nu: -2.0,
            ..Z
        },
        N2 => GreenwichArgument {
            t: 2.0,
            s: -3.0,
            h: 2.0,
            p: 1.0,
            xi: 2.0,
            nu: -2.0,
            ..Z
        },
        Nu2 => GreenwichArgument {
            t: 2.0,
            s: -3.0,
            h: 4.0,
            p: -1.0,
            xi: 2.0,
            nu: -2.0,
            ..Z
        },
        M2 => lunar_harmonic(2.0),
        Lambda2 => GreenwichArgument {
            t: 2.0,
            s: -1.0,
            p: 1.0,
            xi: 2.0,
            nu: -2.0,
            constant: 180.0,
            ..Z
        },
        L2 => GreenwichArgument {
            t: 2.0,
            s: -1.0,
            h: 2.0,
            p: -1.0,
            xi: 2.0,
            nu: -2.0,
            r: -1.0,
            constant: 180.0,
            ..Z
        },
        T2 => GreenwichArgument {
            t: 2.0,
            h: -1.0,
            p1: 1.0,
            ..Z
        },
        S2 => GreenwichArgument { t: 2.0, ..Z },
        R2 => GreenwichArgument {
            t: 2.0,
            h: 1.0,
            p1: -1.0,
            constant: 180.0,
            ..Z
        },
        K2 => GreenwichArgument {
            t: 2.0,
            h: 2.0,
            nup2: -2.0,
            ..Z
        },
        TwoSM2 => GreenwichArgument {
            t: 2.0,
            s: 2.0,
            h: -2.0,
            xi: -2.0,
            nu: 2.0,
            ..Z
        },

        // terdiurnal and shallow water
        M3 => lunar_harmonic(3.0),
        MK3 => GreenwichArgument {
            t: 3.0,
            s: -2.0,
            h: 3.0,
            xi: 2.0,
            nu: -2.0,
            nup: -1.0,
            constant: -90.0,
            ..Z
        },
        TwoMK3 => GreenwichArgument {
            t: 3.0,
            s: -4.0,
            h: 3.0,
            xi: 4.0,
            nu: -4.0,
            nup: 1.0,
            constant: 90.0,
            ..Z
        },
        MN4 => GreenwichArgument {
            t: 4.0,
            s: -5.0,
            h: 4.0,
            p: 1.0,
            xi: 4.0,
            nu: -4.0,
            ..Z
        },
        M4 => lunar_harmonic(4.0),
        MS4 => GreenwichArgument {
            t: 4.0,
            s: -2.0,
            h: 2.0,
            xi: 2.0,
            nu: -2.0,
            ..Z
        },
        S4 => GreenwichArgument { t: 4.0, ..Z },
        M6 => lunar_harmonic(6.0),
        S6 => GreenwichArgument { t: 6.0, ..Z },
        M8 => lunar_harmonic(8.0),
    }
}

/// Greenwich argument of `code` in degrees, in `[0, 360)`.
#[inline]
pub fn greenwich_term(code: ConstituentCode, elements: &OrbitalElements) -> f64 {
    greenwich_argument(code).evaluate(elements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::epoch::Epoch;
    use chrono::{TimeZone, Utc};

    fn elements(start: (i32, u32, u32), end: (i32, u32, u32)) -> OrbitalElements {
        let start = Utc.with_ymd_and_hms(start.0, start.1, start.2, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(end.0, end.1, end.2, 0, 0, 0).unwrap();
        OrbitalElements::compute(&Epoch::new(start, end, None).unwrap())
    }

    #[test]
    fn every_argument_is_reduced() {
        for year in [1901, 1950, 1999, 2020, 2047] {
            let el = elements((year, 5, 1), (year, 6, 1));
            for code in ConstituentCode::ALL {
                let g = greenwich_term(code, &el);
                assert!((0.0..360.0).contains(&g), "{code} in {year}: {g}");
            }
        }
    }

    #[test]
    fn solar_arguments_at_midnight() {
        use ConstituentCode::*;
        // T = 180° at 00:00 UT.
        let el = elements((2020, 1, 1), (2020, 2, 1));
        assert_eq!(greenwich_term(S1, &el), 180.0);
        assert_eq!(greenwich_term(S2, &el), 0.0);
        assert_eq!(greenwich_term(S4, &el), 0.0);
        assert_eq!(greenwich_term(S6, &el), 0.0);
    }

    #[test]
    fn harmonics_scale_the_principal_argument() {
        use ConstituentCode::*;
        let el = elements((2020, 1, 1), (2020, 2, 1));
        let m2 = greenwich_argument(M2).sum(&el);
        assert!((greenwich_argument(M4).sum(&el) - 2.0 * m2).abs() < 1e-9);
        assert!((greenwich_argument(M8).sum(&el) - 4.0 * m2).abs() < 1e-9);
        assert!((greenwich_argument(M6).sum(&el) - 3.0 * m2).abs() < 1e-9);
    }

    #[test]
    fn reference_arguments_for_january_2020() {
        use ConstituentCode::*;
        let el = elements((2020, 1, 1), (2020, 2, 1));
        let cases = [
            (Mm, 329.67204295999727),
            (Mf, 271.4944845523711),
            (Msf, 124.66409661759667),
            (Sa, 265.3415654432),
            (Ssa, 170.68313088640002),
            (Q1, 281.1828912012542),
            (TwoQ1, 311.51084824125695),
            (Rho, 95.8628805036521),
            (O1, 250.85493416125146),
            (OO1, 253.84390326599362),
            (M1, 19.765610684216995),
            (J1, 312.02146167361985),
            (P1, 4.658434556799989),
            (S1, 180.0),
            (K1, 346.4398306906617),
            (TwoN2, 293.86026695487953),
            (MU2, 108.5402562572774),
            (N2, 263.5323099148768),
            (Nu2, 78.21229921727468),
            (Lambda2, 208.19640653247347),
            (L2, 31.608260053443473),
            (M2, 233.20435287487408),
            (T2, 17.941353552800024),
            (S2, 0.0),
            (R2, 162.05864644719998),
            (K2, 152.8710761065447),
            (TwoSM2, 126.79564712512595),
            (M3, 169.8065293123111),
            (MK3, 219.64418356553563),
            (TwoMK3, 119.96887505908637),
            (MN4, 136.73666278975088),
            (M4, 106.40870574974815),
            (MS4, 233.20435287487408),
            (S4, 0.0),
            (M6, 339.6130586246222),
            (S6, 0.0),
            (M8, 212.8174114994963),
        ];
        assert_eq!(cases.len(), ConstituentCode::ALL.len());
        for (code, expected) in cases {
            let actual = greenwich_term(code, &el);
            assert!((actual - expected).abs() < 1e-9, "{code}: {actual} != {expected}");
        }
    }

    #[test]
    fn zero_coefficients_give_zero() {
        let el = elements((2020, 1, 1), (2020, 2, 1));
        assert_eq!(GreenwichArgument::ZERO.evaluate(&el), 0.0);
    }
}
