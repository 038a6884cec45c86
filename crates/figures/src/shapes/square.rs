//! Square: four equal sides and a right angle at the second vertex.

use std::io::BufRead;

use super::util::{distance, is_right_angle, mean, mul, read_quad, same_length};
use crate::error::FigureError;
use crate::figure::{Figure, FigureKind};
use crate::point::{Coord, Point};

/// Square given by four vertices in winding order.
///
/// Invariants:
/// - All four consecutive sides have equal length (within `EPS`).
/// - The angle at the second vertex is right.
/// - `side`, `area` and `center` are measured from `points` at construction.
#[derive(Clone, Debug)]
pub struct Square<T: Coord> {
    points: [Point<T>; 4],
    side: T,
    area: f64,
    center: Point<T>,
}

impl<T: Coord> Square<T> {
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
        let sides = same_length(s1, s2)? && same_length(s2, s3)? && same_length(s3, s4)?;
        let corner = is_right_angle(p[0], p[1], p[2])?;
        if !(sides && corner) {
            tracing::debug!(points = ?p, sides, corner, "rejected square");
            return Err(FigureError::InvalidShape(FigureKind::Square));
        }
        Ok(Self {
            side: s1,
            area: mul(s1, s1)?.to_f64(),
            center: mean(p)?,
            points,
        })
    }

    /// Read and validate a square from `input`.
    pub fn read_from(input: &mut dyn BufRead) -> Result<Self, FigureError> {
        Self::from_points(read_quad(input)?)
    }

    pub fn side_length(&self) -> T {
        self.side
    }
}

impl<T: Coord> PartialEq for Square<T> {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl<T: Coord> Figure<T> for Square<T> {
    fn kind(&self) -> FigureKind {
        FigureKind::Square
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

impl<T: Coord> From<&Square<T>> for f64 {
    fn from(s: &Square<T>) -> f64 {
        s.area()
    }
}
