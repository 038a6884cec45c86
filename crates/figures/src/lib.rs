//! Quadrilateral figures and a shared-handle container.
//!
//! Overview
//! - `Point<T>` is a 2D coordinate over any `Coord` scalar (integers or floats).
//! - `Figure<T>` is the capability set shared by `Square`, `Rectangle` and
//!   `Trapezoid`; every variant validates its four points eagerly.
//! - `Array<T>` stores reference-counted handles to figures; `push` shares,
//!   `clone` deep-copies.
//!
//! Numerics
//! - Distances and dot/cross products are computed in `T`, then compared
//!   against `cfg::EPS` after promotion to `f64`. Integer scalars therefore get
//!   exact comparisons and truncated square roots.
//! - Integer arithmetic is checked; overflow is reported as `FigureError::Overflow`.

pub mod array;
pub mod cfg;
pub mod error;
pub mod figure;
pub mod point;
pub mod sample;
pub mod shapes;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use array::Array;
pub use error::FigureError;
pub use figure::{Figure, FigureKind, FigureRef};
pub use point::{Coord, Point};
pub use shapes::{Rectangle, Square, Trapezoid};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::array::Array;
    pub use crate::error::FigureError;
    pub use crate::figure::{Figure, FigureKind, FigureRef};
    pub use crate::point::{Coord, Point};
    pub use crate::sample::{ReplayToken, SampleCfg};
    pub use crate::shapes::{Rectangle, Square, Trapezoid};
}
