//! Quadrilateral shape variants.
//!
//! Each variant owns exactly four points in winding order and validates them
//! on construction and on `read`:
//! - `Square`: four equal sides and a right angle at the second vertex.
//! - `Rectangle`: equal opposite sides and four right angles.
//! - `Trapezoid`: at least one pair of opposite sides parallel.
//!
//! Code cross-refs: `util::{distance, is_right_angle, are_parallel, line_distance}`, `cfg::EPS`

mod rectangle;
mod square;
mod trapezoid;
mod util;

pub use rectangle::Rectangle;
pub use square::Square;
pub use trapezoid::Trapezoid;
