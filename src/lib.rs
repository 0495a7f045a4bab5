//! Exact-decimal linear systems.
//!
//! This crate models a system of linear equations as a list of [`Hyperplane`]s (`n · x = k`)
//! and solves it by Gaussian elimination, classifying the result as a unique [`Vector`], no
//! solution, or infinitely many solutions (see [`Solution`]).
//!
//! ```
//! use linsys::{Hyperplane, LinearSystem, Solution};
//!
//! let system = LinearSystem::new([
//!     "0 1 1 = 1".parse::<Hyperplane>()?,
//!     "1 -1 1 = 2".parse()?,
//!     "1 2 -5 = 3".parse()?,
//! ])?;
//!
//! let solution = system.compute_solution()?;
//! assert!(matches!(solution, Solution::Unique(_)));
//! assert_eq!(format!("{solution:.3}"), "(2.556, 0.778, 0.222)");
//! # Ok::<_, linsys::Error>(())
//! ```
//!
//! # Numerics
//!
//! All arithmetic is done on [`Decimal`]s, and every "is this zero?" decision uses the
//! [`NEAR_ZERO`] tolerance of `1e-10`. The vector algebra itself lives in the `linsys-linalg`
//! crate, re-exported here as [`linalg`].
//!
//! # Logging
//!
//! Row operations are logged at *trace* level and solution classifications at *debug* level via
//! the [`log`] crate. Binaries can call [`init_logger!`] to route these to *stderr*.

use log::LevelFilter;

pub mod hyperplane;
pub mod line;
pub mod system;

pub use hyperplane::{Hyperplane, Plane};
pub use line::{Intersection, Line};
pub use linsys_linalg as linalg;
pub use linsys_linalg::{Decimal, Error, Result, Vector, NEAR_ZERO};
pub use system::{LinearSystem, Solution};

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and `linsys` will log at *trace*
/// level. Otherwise, they will log at *debug* level. `RUST_LOG` can override both.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
