//! Trapezoid: at least one pair of opposite sides parallel.

use std::io::BufRead;

use super::util::{add, are_parallel, distance, line_distance, mean, mul, read_quad};
use crate::error::FigureError;
use crate::figure::{Figure, FigureKind};
use crate::point::{Coord, Point};

/// Trapezoid given by four vertices in winding order.
///
/// Invariant: side 1-2 is parallel to side 3-4, or side 2-3 to side 4-1.
/// No side-length or angle constraint beyond that.
#[derive(Clone, Debug)]
pub struct Trapezoid<T: Coord> {
    points: [Point<T>; 4],
    area: f64,
    center: Point<T>,
}

impl<T: Coord> Trapezoid<T> {
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
        // The pair 1-2 / 3-4 wins when both pairs are parallel.
        let (b1, b2, h) = if are_parallel(p[0], p[1], p[2], p[3])? {
            (distance(p[0], p[1])?, distance(p[2], p[3])?, line_distance(p[0], p[1], p[2])?)
        } else if are_parallel(p[1], p[2], p[3], p[0])? {
            (distance(p[1], p[2])?, distance(p[3], p[0])?, line_distance(p[1], p[2], p[3])?)
        } else {
            tracing::debug!(points = ?p, "rejected trapezoid");
            return Err(FigureError::InvalidShape(FigureKind::Trapezoid));
        };
        Ok(Self {
            area: mul(add(b1, b2)?, h)?.to_f64() / 2.0,
            center: mean(p)?,
            points,
        })
    }

    pub fn read_from(input: &mut dyn BufRead) -> Result<Self, FigureError> {
        Self::from_points(read_quad(input)?)
    }
}

impl<T: Coord> PartialEq for Trapezoid<T> {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl<T: Coord> Figure<T> for Trapezoid<T> {
    fn kind(&self) -> FigureKind {
        FigureKind::Trapezoid
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

impl<T: Coord> From<&Trapezoid<T>> for f64 {
    fn from(t: &Trapezoid<T>) -> f64 {
        t.area()
    }
}
