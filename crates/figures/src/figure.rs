//! The capability set every shape variant implements.
//!
//! Equality is gated on `FigureKind`: a square and a rectangle with identical
//! points compare unequal. Shared handles are `Rc<dyn Figure<T>>`; nothing here
//! is meant to cross threads.

use std::fmt;
use std::io::{BufRead, Write};
use std::rc::Rc;

use crate::error::FigureError;
use crate::point::{Coord, Point};

/// Closed tag over the shape variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FigureKind {
    Square,
    Rectangle,
    Trapezoid,
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FigureKind::Square => "square",
            FigureKind::Rectangle => "rectangle",
            FigureKind::Trapezoid => "trapezoid",
        })
    }
}

/// Reference-counted handle to a figure.
pub type FigureRef<T> = Rc<dyn Figure<T>>;

/// Polymorphic figure over an ordered point sequence.
pub trait Figure<T: Coord>: fmt::Debug {
    fn kind(&self) -> FigureKind;

    fn points(&self) -> &[Point<T>];

    /// Variant-specific area, promoted to `f64` at the end.
    ///
    /// Area and center are measured once, at construction, where integer
    /// overflow surfaces as `FigureError::Overflow`.
    fn area(&self) -> f64;

    /// Replace the points with four `(x, y)` pairs from `input`.
    ///
    /// The new points are validated before they are stored; on error the
    /// figure keeps its previous points.
    fn read(&mut self, input: &mut dyn BufRead) -> Result<(), FigureError>;

    /// Deep copy preserving the concrete variant.
    fn clone_box(&self) -> Box<dyn Figure<T>>;

    /// Arithmetic mean of the points, computed in `T` (integer division for integers).
    fn center(&self) -> Point<T>;

    /// Writes `(x1,y1) ... (x4,y4) Area = <a> Center: (cx,cy)` and a newline.
    fn print(&self, out: &mut dyn Write) -> std::io::Result<()> {
        for p in self.points() {
            write!(out, "{p} ")?;
        }
        writeln!(out, "Area = {} Center: {}", self.area(), self.center())
    }

    fn equals(&self, other: &dyn Figure<T>) -> bool {
        self.kind() == other.kind() && self.points() == other.points()
    }
}

impl<T: Coord> PartialEq for dyn Figure<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Coord> Clone for Box<dyn Figure<T>> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl<'a, 'b, T: Coord> From<&'a (dyn Figure<T> + 'b)> for f64 {
    fn from(fig: &'a (dyn Figure<T> + 'b)) -> f64 {
        fig.area()
    }
}
