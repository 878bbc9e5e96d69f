// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Constituent catalog
//!
//! Four tables keyed by [`ConstituentCode`]:
//!
//! | Table | Unit | Coverage |
//! |-------|------|----------|
//! | orbital frequency | rad/s | every code |
//! | Doodson coefficients | | principal and default constituents |
//! | tidal potential amplitude | m | constituents forced by the equilibrium tide |
//! | Earth tidal potential reduction factor | | same as amplitude |
//!
//! Frequencies are the ADCIRC/`tide_fac` values. Doodson coefficients are the
//! Doodson numbers with the customary `5` offset removed from the last five
//! digits. Amplitudes and reduction factors follow Reid (1990).
//!
//! Missing entries are not errors: a constituent simply lacks that field.

use crate::constituent::ConstituentCode;

/// Six signed Doodson multipliers `(τ, s, h, p, N', p₁)`.
pub type DoodsonCoefficients = [i32; 6];

/// Physical unit of [`CatalogEntry::orbital_frequency`].
pub const FREQUENCY_UNITS: &str = "rad/sec";

/// The static part of a constituent record.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CatalogEntry {
    /// Angular frequency in radians per second.
    pub orbital_frequency: f64,
    pub doodson_coefficient: Option<DoodsonCoefficients>,
    /// Equilibrium tidal potential amplitude in metres.
    pub tidal_potential_amplitude: Option<f64>,
    pub earth_tidal_potential_reduction_factor: Option<f64>,
}

/// Look up the static record of a constituent.
///
/// Every [`ConstituentCode`] has an orbital frequency, so this only returns
/// `None` for spellings outside the vocabulary.
pub fn lookup_str(code: &str) -> Option<CatalogEntry> {
    code.parse::<ConstituentCode>().ok().map(lookup)
}

/// Static record of a known constituent.
pub fn lookup(code: ConstituentCode) -> CatalogEntry {
    let (amplitude, reduction) = match potential(code) {
        Some((a, r)) => (Some(a), Some(r)),
        None => (None, None),
    };
    CatalogEntry {
        orbital_frequency: orbital_frequency(code),
        doodson_coefficient: doodson_coefficient(code),
        tidal_potential_amplitude: amplitude,
        earth_tidal_potential_reduction_factor: reduction,
    }
}

/// Angular frequency in rad/s.
#[rustfmt::skip]
pub fn orbital_frequency(code: ConstituentCode) -> f64 {
    use ConstituentCode::*;
    match code {
        M4      => 0.000_281_037_805_017_3,
        M6      => 0.000_421_556_708_010_7,
        MK3     => 0.000_213_440_061_351_3,
        S4      => 0.000_290_888_208_665_7,
        MN4     => 0.000_278_398_601_995_2,
        S6      => 0.000_436_332_312_998_6,
        M3      => 0.000_210_778_353_763_0,
        TwoMK3  => 0.000_208_116_646_659_4,
        M8      => 0.000_562_075_609_064_9,
        MS4     => 0.000_285_963_006_841_5,
        M2      => 0.000_140_518_902_508_6,
        S2      => 0.000_145_444_104_332_9,
        N2      => 0.000_137_879_699_486_5,
        Nu2     => 0.000_138_232_903_706_5,
        MU2     => 0.000_135_593_700_684_4,
        TwoN2   => 0.000_135_240_496_464_4,
        Lambda2 => 0.000_142_804_901_310_8,
        T2      => 0.000_145_245_007_352_9,
        R2      => 0.000_145_643_201_312_8,
        TwoSM2  => 0.000_150_369_306_157_1,
        L2      => 0.000_143_158_105_530_7,
        K2      => 0.000_145_842_317_200_6,
        K1      => 0.000_072_921_158_357_9,
        O1      => 0.000_067_597_744_150_8,
        OO1     => 0.000_078_244_573_049_8,
        S1      => 0.000_072_722_052_166_4,
        M1      => 0.000_070_259_451_254_3,
        J1      => 0.000_075_560_361_380_0,
        Rho     => 0.000_065_311_745_348_7,
        Q1      => 0.000_064_958_541_128_7,
        TwoQ1   => 0.000_062_319_338_106_6,
        P1      => 0.000_072_522_945_975_0,
        Mm      => 0.000_002_639_203_022_1,
        Ssa     => 0.000_000_398_212_867_7,
        Sa      => 0.000_000_199_106_191_4,
        Msf     => 0.000_004_925_201_824_2,
        Mf      => 0.000_005_323_414_691_9,
    }
}

#[rustfmt::skip]
fn doodson_coefficient(code: ConstituentCode) -> Option<DoodsonCoefficients> {
    use ConstituentCode::*;
    let coefficients = match code {
        Mm    => [0,  1,  0, -1, 0,  0],
        Mf    => [0,  2,  0,  0, 0,  0],
        Msf   => [0,  2, -2,  0, 0,  0],
        Sa    => [0,  0,  1,  0, 0, -1],
        Ssa   => [0,  0,  2,  0, 0,  0],
        Q1    => [1, -2,  0,  1, 0,  0],
        O1    => [1, -1,  0,  0, 0,  0],
        P1    => [1,  1, -2,  0, 0,  0],
        S1    => [1,  1, -1,  0, 0,  1],
        K1    => [1,  1,  0,  0, 0,  0],
        TwoN2 => [2, -2,  0,  2, 0,  0],
        N2    => [2, -1,  0,  1, 0,  0],
        M2    => [2,  0,  0,  0, 0,  0],
        S2    => [2,  2, -2,  0, 0,  0],
        K2    => [2,  2,  0,  0, 0,  0],
        MN4   => [4, -1,  0,  1, 0,  0],
        M4    => [4,  0,  0,  0, 0,  0],
        MS4   => [4,  2, -2,  0, 0,  0],
        _ => return None,
    };
    Some(coefficients)
}

/// `(amplitude [m], Earth reduction factor)`.
#[rustfmt::skip]
fn potential(code: ConstituentCode) -> Option<(f64, f64)> {
    use ConstituentCode::*;
    match code {
        M2    => Some((0.242_334, 0.693)),
        S2    => Some((0.112_841, 0.693)),
        N2    => Some((0.046_398, 0.693)),
        K2    => Some((0.030_704, 0.693)),
        TwoN2 => Some((0.006_141, 0.693)),
        K1    => Some((0.141_565, 0.736)),
        O1    => Some((0.100_514, 0.695)),
        P1    => Some((0.046_843, 0.706)),
        Q1    => Some((0.019_256, 0.695)),
        Mf    => Some((0.042_041, 0.693)),
        Mm    => Some((0.022_191, 0.693)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_has_a_positive_frequency() {
        for code in ConstituentCode::ALL {
            assert!(orbital_frequency(code) > 0.0, "{code}");
        }
    }

    #[test]
    fn semidiurnal_solar_frequency_is_two_cycles_per_day() {
        let expected = 2.0 * std::f64::consts::TAU / 86_400.0;
        assert!((orbital_frequency(ConstituentCode::S2) - expected).abs() < 1e-15);
    }

    #[test]
    fn compound_frequencies_add_up() {
        use ConstituentCode::*;
        let f = orbital_frequency;
        assert!((f(MS4) - (f(M2) + f(S2))).abs() < 1e-15);
        assert!((f(MN4) - (f(M2) + f(N2))).abs() < 1e-15);
        assert!((f(M4) - 2.0 * f(M2)).abs() < 1e-15);
    }

    #[test]
    fn default_constituents_all_carry_doodson_coefficients() {
        for code in ConstituentCode::DEFAULT {
            let entry = lookup(code);
            let d = entry.doodson_coefficient.expect("doodson");
            assert_eq!(d[0] as usize, species(code), "{code}");
        }
    }

    fn species(code: ConstituentCode) -> usize {
        use ConstituentCode::*;
        match code {
            Mm | Mf => 0,
            Q1 | O1 | P1 | S1 | K1 => 1,
            MN4 | M4 | MS4 => 4,
            _ => 2,
        }
    }

    #[test]
    fn amplitude_and_reduction_factor_come_together() {
        for code in ConstituentCode::ALL {
            let entry = lookup(code);
            assert_eq!(
                entry.tidal_potential_amplitude.is_some(),
                entry.earth_tidal_potential_reduction_factor.is_some()
            );
        }
        let m2 = lookup(ConstituentCode::M2);
        assert_eq!(m2.tidal_potential_amplitude, Some(0.242_334));
        assert_eq!(lookup(ConstituentCode::S1).tidal_potential_amplitude, None);
    }

    #[test]
    fn lookup_str_rejects_unknown_spelling() {
        assert!(lookup_str("Zx").is_none());
        assert_eq!(
            lookup_str("M6").map(|e| e.orbital_frequency),
            Some(0.000_421_556_708_010_7)
        );
    }
}
