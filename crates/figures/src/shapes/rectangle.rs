//! Rectangle: equal opposite sides and four right angles.

use std::io::BufRead;

use super::util::{distance, is_right_angle, mean, mul, read_quad, same_length};
use crate::error::FigureError;
use crate::figure::{Figure, FigureKind};
use crate::point::{Coord, Point};

/// Rectangle given by four vertices in winding order.
///
/// Invariants:
/// - Opposite sides have equal length (within `EPS`).
/// - Every corner is a right angle.
/// - `width`, `height`, `area` and `center` are measured at construction.
#[derive(Clone, Debug)]
pub struct Rectangle<T: Coord> {
    points: [Point<T>; 4],
    width: T,
    height: T,
    area: f64,
    center: Point<T>,
}

impl<T: Coord> Rectangle<T> {
    pub fn new(
        p1: Point<T>,
        p2: Point<T>,
        p3: Point<T>,
        p4: Point<T>,
    ) -> Result<Self, FigureError> {
        Self::from_points([p1, p2, p3, p4])
    }

    pub fn from_points(points: [Point<T>; 4]) -> Result<Self, FigureError> {
        let p = &points;
        let s1 = distance(p[0], p[1])?;
        let s2 = distance(p[1], p[2])?;
        let s3 = distance(p[2], p[3])?;
        let s4 = distance(p[3], p[0])?;
        let sides = same_length(s1, s3)? && same_length(s2, s4)?;
        let mut corners = true;
        for i in 0..4 {
            corners &= is_right_angle(p[i], p[(i + 1) % 4], p[(i + 2) % 4])?;
        }
        if !(sides && corners) {
            tracing::debug!(points = ?p, sides, corners, "rejected rectangle");
            return Err(FigureError::InvalidShape(FigureKind::Rectangle));
        }
        Ok(Self {
            width: s1,
            height: s2,
            area: mul(s1, s2)?.to_f64(),
            center: mean(p)?,
            points,
        })
    }

    pub fn read_from(input: &mut dyn BufRead) -> Result<Self, FigureError> {
        Self::from_points(read_quad(input)?)
    }

    /// Length of the first side.
    pub fn width(&self) -> T {
        self.width
    }

    /// Length of the second side.
    pub fn height(&self) -> T {
        self.height
    }
}

impl<T: Coord> PartialEq for Rectangle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl<T: Coord> Figure<T> for Rectangle<T> {
    fn kind(&self) -> FigureKind {
        FigureKind::Rectangle
    }

    fn points(&self) -> &[Point<T>] {
        &self.points
    }

    fn area(&self) -> f64 {
        self.area
    }

    fn center(&self) -> Point<T> {
        self.center
    }

    fn read(&mut self, input: &mut dyn BufRead) -> Result<(), FigureError> {
        *self = Self::read_from(input)?;
        Ok(())
    }

    fn clone_box(&self) -> Box<dyn Figure<T>> {
        Box::new(self.clone())
    }
}

impl<T: Coord> From<&Rectangle<T>> for f64 {
    fn from(r: &Rectangle<T>) -> f64 {
        r.area()
    }
}
