// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Orbital elements
//!
//! [`OrbitalElements::compute`] evaluates, once per [`Epoch`], every angle the
//! nodal-factor and Greenwich-argument formulas draw on. The result is an
//! immutable value; the formula engines borrow it and never mutate it, so
//! per-constituent evaluation can run in any order or in parallel.
//!
//! ## Mean elements
//!
//! Linear polynomials in `(DYR, DDAY, hour)` reduced modulo 360°:
//!
//! | Symbol | Element | Hour argument |
//! |--------|---------|---------------|
//! | `N` | longitude of the Moon's ascending node | middle of record |
//! | `P` | lunar perigee | middle of record |
//! | `S` | Moon's mean longitude | spinup hour |
//! | `P1` | solar perigee | spinup hour |
//! | `H` | Sun's mean longitude | spinup hour |
//! | `T` | hour angle of the mean Sun, `180° + 15°·hour` | spinup hour |
//!
//! The node and perigee are the only angles referenced to the middle of the
//! record; this asymmetry is part of the reference formulation and must be
//! kept as is.
//!
//! ## Derived angles
//!
//! | Symbol | Definition |
//! |--------|------------|
//! | `I` | `acos(0.9136949 − 0.0356926·cos N)` |
//! | `ν` | `asin(0.0897056·sin N / sin I)` |
//! | `ξ` | `N − 2·atan(0.64412·tan(N/2)) − ν` |
//! | `ν′` | `atan(sin ν / (cos ν + 0.334766 / sin 2I))` |
//! | `P−ξ` | `(P − ξ) mod 360` |
//! | `R` | `atan(sin 2(P−ξ) / (cot²(I/2)/6 − cos 2(P−ξ)))` |
//! | `ν″` | `atan(sin 2ν / (cos 2ν + 0.0726184 / sin² I)) / 2` |
//! | `Q` | `atan2((5 cos I − 1)·sin(P−ξ), (7 cos I + 1)·cos(P−ξ))` |
//!
//! ## References
//! * Schureman (1958), *Manual of Harmonic Analysis and Prediction of Tides*,
//!   USC&GS Special Publication 98.

use crate::epoch::Epoch;
use qtty::Degrees;
use tracing::debug;

/// Reduce an angle in degrees to `[0, 360)`.
///
/// `rem_euclid` may round up to exactly 360 for tiny negative inputs; that
/// case folds back to zero.
#[inline]
pub fn normalize_degrees(value: f64) -> f64 {
    let reduced = value.rem_euclid(360.0);
    if reduced >= 360.0 {
        0.0
    } else {
        reduced
    }
}

/// An angle carried in both degree and radian form.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Angle {
    degrees: Degrees,
    radians: f64,
}

impl Angle {
    #[inline]
    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            degrees: Degrees::new(degrees),
            radians: degrees.to_radians(),
        }
    }

    #[inline]
    pub fn from_radians(radians: f64) -> Self {
        Self {
            degrees: Degrees::new(radians.to_degrees()),
            radians,
        }
    }

    #[inline]
    pub fn degrees(&self) -> f64 {
        self.degrees.value()
    }

    #[inline]
    pub fn radians(&self) -> f64 {
        self.radians
    }
}

/// `c0 + c_dyr·DYR + c_dday·DDAY + c_hour·hour`, reduced to `[0, 360)`.
#[derive(Debug, Copy, Clone)]
struct MeanElement {
    c0: f64,
    c_dyr: f64,
    c_dday: f64,
    c_hour: f64,
}

impl MeanElement {
    #[inline]
    fn evaluate(&self, dyr: f64, dday: f64, hour: f64) -> Angle {
        let value = self.c0 + self.c_dyr * dyr + self.c_dday * dday + self.c_hour * hour;
        Angle::from_degrees(normalize_degrees(value))
    }
}

const LUNAR_NODE: MeanElement = MeanElement {
    c0: 259.1560564,
    c_dyr: -19.328185764,
    c_dday: -0.0529539336,
    c_hour: -0.0022064139,
};

const LUNAR_PERIGEE: MeanElement = MeanElement {
    c0: 334.3837214,
    c_dyr: 40.66246584,
    c_dday: 0.111404016,
    c_hour: 0.004641834,
};

const LUNAR_MEAN_LONGITUDE: MeanElement = MeanElement {
    c0: 277.0256206,
    c_dyr: 129.38482032,
    c_dday: 13.176396768,
    c_hour: 0.549016532,
};

const SOLAR_PERIGEE: MeanElement = MeanElement {
    c0: 281.2208569,
    c_dyr: 0.01717836,
    c_dday: 0.000047064,
    c_hour: 0.000001961,
};

const SOLAR_MEAN_LONGITUDE: MeanElement = MeanElement {
    c0: 280.1895014,
    c_dyr: -0.238724988,
    c_dday: 0.9856473288,
    c_hour: 0.0410686387,
};

/// Degrees of mean-Sun hour angle per hour.
const HOUR_ANGLE_RATE: f64 = 360.0 / 24.0;

/// Lunar/solar angles at a reference epoch.
///
/// Built exactly once per [`Epoch`] by [`OrbitalElements::compute`]; the
/// angles are read back through accessors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrbitalElements {
    n: Angle,
    p: Angle,
    h: Angle,
    s: Angle,
    p1: Angle,
    t: Angle,
    i: Angle,
    nu: Angle,
    xi: Angle,
    nup: Angle,
    pc: Angle,
    r: Angle,
    nup2: Angle,
    q: Angle,
}

impl OrbitalElements {
    /// Evaluate every orbital angle for `epoch`.
    pub fn compute(epoch: &Epoch) -> Self {
        let dyr = epoch.dyr();
        let dday = epoch.dday();
        let hour = epoch.spinup_hour();
        let hour_middle = epoch.hour_middle();

        let n = LUNAR_NODE.evaluate(dyr, dday, hour_middle);
        let p = LUNAR_PERIGEE.evaluate(dyr, dday, hour_middle);
        let h = SOLAR_MEAN_LONGITUDE.evaluate(dyr, dday, hour);
        let s = LUNAR_MEAN_LONGITUDE.evaluate(dyr, dday, hour);
        let p1 = SOLAR_PERIGEE.evaluate(dyr, dday, hour);
        let t = Angle::from_degrees(normalize_degrees(180.0 + hour * HOUR_ANGLE_RATE));

        let n_rad = n.radians();
        let i = (0.9136949 - 0.0356926 * n_rad.cos()).acos();
        let nu = (0.0897056 * n_rad.sin() / i.sin()).asin();
        let xi = n_rad - 2.0 * (0.64412 * (n_rad / 2.0).tan()).atan() - nu;
        let nup = (nu.sin() / (nu.cos() + 0.334766 / (2.0 * i).sin())).atan();

        let xi = Angle::from_radians(xi);
        let pc = Angle::from_degrees(normalize_degrees(p.degrees() - xi.degrees()));
        let pc_rad = pc.radians();

        let cot_half_i = 1.0 / (0.5 * i).tan();
        let r = ((2.0 * pc_rad).sin()
            / ((1.0 / 6.0) * cot_half_i.powi(2) - (2.0 * pc_rad).cos()))
        .atan();
        let nup2 =
            ((2.0 * nu).sin() / ((2.0 * nu).cos() + 0.0726184 / i.sin().powi(2))).atan() / 2.0;
        let q = ((5.0 * i.cos() - 1.0) * pc_rad.sin()).atan2((7.0 * i.cos() + 1.0) * pc_rad.cos());

        let elements = Self {
            n,
            p,
            h,
            s,
            p1,
            t,
            i: Angle::from_radians(i),
            nu: Angle::from_radians(nu),
            xi,
            nup: Angle::from_radians(nup),
            pc,
            r: Angle::from_radians(r),
            nup2: Angle::from_radians(nup2),
            q: Angle::from_radians(q),
        };

        debug!(
            dyr,
            dday,
            hour_middle,
            node_deg = elements.n.degrees(),
            perigee_deg = elements.p.degrees(),
            inclination_deg = elements.i.degrees(),
            "computed orbital elements"
        );

        elements
    }

    // ── accessors ─────────────────────────────────────────────────────────

    /// Longitude of the Moon's ascending node `N`.
    #[inline]
    pub fn n(&self) -> Angle {
        self.n
    }

    /// Longitude of the lunar perigee `P`.
    #[inline]
    pub fn p(&self) -> Angle {
        self.p
    }

    /// Mean longitude of the Sun `h`.
    #[inline]
    pub fn h(&self) -> Angle {
        self.h
    }

    /// Mean longitude of the Moon `s`.
    #[inline]
    pub fn s(&self) -> Angle {
        self.s
    }

    /// Longitude of the solar perigee `p₁`.
    #[inline]
    pub fn p1(&self) -> Angle {
        self.p1
    }

    /// Hour angle of the mean Sun `T`.
    #[inline]
    pub fn t(&self) -> Angle {
        self.t
    }

    /// Inclination `I` of the lunar orbit to the celestial equator.
    #[inline]
    pub fn i(&self) -> Angle {
        self.i
    }

    /// Right ascension `ν` of the lunar intersection.
    #[inline]
    pub fn nu(&self) -> Angle {
        self.nu
    }

    /// Longitude `ξ` in the Moon's orbit of the lunar intersection.
    #[inline]
    pub fn xi(&self) -> Angle {
        self.xi
    }

    /// Term `ν′` in the argument of the lunisolar `K1`.
    #[inline]
    pub fn nup(&self) -> Angle {
        self.nup
    }

    /// `P − ξ`, reduced to `[0, 360)`.
    #[inline]
    pub fn pc(&self) -> Angle {
        self.pc
    }

    /// Term `R` in the argument of `L2`.
    #[inline]
    pub fn r(&self) -> Angle {
        self.r
    }

    /// Term `ν″` in the argument of the lunisolar `K2`.
    #[inline]
    pub fn nup2(&self) -> Angle {
        self.nup2
    }

    /// Term `Q` in the argument of `M1`.
    #[inline]
    pub fn q(&self) -> Angle {
        self.q
    }
}

impl From<&Epoch> for OrbitalElements {
    fn from(epoch: &Epoch) -> Self {
        Self::compute(epoch)
    }
}
