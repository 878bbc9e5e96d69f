// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Tidal Forcing Arguments
//!
//! This crate computes the astronomical inputs of harmonic tide models: for
//! each requested constituent, a dimensionless **nodal factor** and the
//! **Greenwich equilibrium argument** at a reference epoch.
//!
//! # Core types
//!
//! - [`Epoch`]: validated `(spinup, start, end)` window.
//! - [`OrbitalElements`]: lunar/solar angles evaluated once per epoch.
//! - [`ConstituentCode`]: the closed constituent vocabulary.
//! - [`TidalArgumentTable`]: ordered `code → Constituent` records.
//! - [`ForcingRequest`]: textual input, deserialisable with the `serde` feature.
//!
//! # Data flow
//!
//! ```text
//! Epoch ──► OrbitalElements ──┬─► nodal_factor(code)    ──┐
//!                             └─► greenwich_term(code)  ──┴─► TidalArgumentTable
//! ```
//!
//! # Quick example
//!
//! ```
//! use tidefac::{ForcingRequest, TideError};
//!
//! let table = ForcingRequest::new("2020-01-01T00:00", "2020-02-01T00:00").build()?;
//! for constituent in &table {
//!     println!(
//!         "{:>4}  f = {:.4}  V0+u = {:7.3}°",
//!         constituent.code, constituent.nodal_factor, constituent.greenwich_term
//!     );
//! }
//! # Ok::<(), TideError>(())
//! ```
//!
//! # Logging
//!
//! Diagnostics are emitted through [`tracing`] at `debug`/`trace` level. The
//! crate never installs a subscriber.

pub mod catalog;
mod constituent;
mod dataset;
mod epoch;
mod error;
pub mod greenwich;
pub mod nodal;
pub(crate) mod orbital;
mod request;
mod table;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use catalog::{CatalogEntry, DoodsonCoefficients, FREQUENCY_UNITS};
pub use constituent::ConstituentCode;
pub use dataset::{CacheDirProvider, FnCacheDir, HarmonicDataset, StaticCacheDir};
pub use epoch::{Epoch, DEFAULT_SPINUP_DAYS};
pub use error::{TideError, TideResult};
pub use greenwich::{greenwich_term, GreenwichArgument};
pub use nodal::{nodal_factor, NodalFormula};
pub use orbital::{normalize_degrees, Angle, OrbitalElements};
pub use request::ForcingRequest;
pub use table::{Constituent, TidalArgumentTable};
