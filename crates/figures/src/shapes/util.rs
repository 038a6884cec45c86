use std::io::BufRead;

use nalgebra::Vector2;

use crate::cfg::near_zero;
use crate::error::FigureError;
use crate::point::{Coord, Point};

#[inline]
pub(crate) fn add<T: Coord>(a: T, b: T) -> Result<T, FigureError> {
    a.checked_add(b).ok_or(FigureError::Overflow)
}

#[inline]
fn sub<T: Coord>(a: T, b: T) -> Result<T, FigureError> {
    a.checked_sub(b).ok_or(FigureError::Overflow)
}

#[inline]
pub(crate) fn mul<T: Coord>(a: T, b: T) -> Result<T, FigureError> {
    a.checked_mul(b).ok_or(FigureError::Overflow)
}

#[inline]
fn edge<T: Coord>(a: Point<T>, b: Point<T>) -> Result<Vector2<T>, FigureError> {
    Ok(Vector2::new(sub(b.x, a.x)?, sub(b.y, a.y)?))
}

#[inline]
fn dot<T: Coord>(u: Vector2<T>, v: Vector2<T>) -> Result<T, FigureError> {
    add(mul(u.x, v.x)?, mul(u.y, v.y)?)
}

#[inline]
fn cross<T: Coord>(u: Vector2<T>, v: Vector2<T>) -> Result<T, FigureError> {
    sub(mul(u.x, v.y)?, mul(u.y, v.x)?)
}

/// Euclidean distance evaluated in `T`; the root is truncated for integer scalars.
pub(crate) fn distance<T: Coord>(a: Point<T>, b: Point<T>) -> Result<T, FigureError> {
    let d = edge(a, b)?;
    Ok(add(mul(d.x, d.x)?, mul(d.y, d.y)?)?.sqrt())
}

#[inline]
pub(crate) fn same_length<T: Coord>(a: T, b: T) -> Result<bool, FigureError> {
    Ok(near_zero(sub(a, b)?.to_f64()))
}

/// Edges `a→b` and `b→c` are perpendicular.
pub(crate) fn is_right_angle<T: Coord>(
    a: Point<T>,
    b: Point<T>,
    c: Point<T>,
) -> Result<bool, FigureError> {
    Ok(near_zero(dot(edge(a, b)?, edge(b, c)?)?.to_f64()))
}

/// Segment `a1→a2` is parallel to segment `b1→b2`.
pub(crate) fn are_parallel<T: Coord>(
    a1: Point<T>,
    a2: Point<T>,
    b1: Point<T>,
    b2: Point<T>,
) -> Result<bool, FigureError> {
    Ok(near_zero(cross(edge(a1, a2)?, edge(b1, b2)?)?.to_f64()))
}

/// Distance from `p` to the line through `l1` and `l2`, `|Ax + By + C| / sqrt(A² + B²)`.
///
/// The coefficients live in `T`; the quotient is taken in `f64` and narrowed back.
pub(crate) fn line_distance<T: Coord>(
    l1: Point<T>,
    l2: Point<T>,
    p: Point<T>,
) -> Result<T, FigureError> {
    let a = sub(l2.y, l1.y)?;
    let b = sub(l1.x, l2.x)?;
    let c = sub(mul(l2.x, l1.y)?, mul(l1.x, l2.y)?)?;
    let num = add(add(mul(a, p.x)?, mul(b, p.y)?)?, c)?.to_f64().abs();
    let den = add(mul(a, a)?, mul(b, b)?)?.to_f64().sqrt();
    Ok(T::from_f64(num / den))
}

/// Arithmetic mean of the points, computed in `T` (integer division for integers).
pub(crate) fn mean<T: Coord>(points: &[Point<T>; 4]) -> Result<Point<T>, FigureError> {
    let mut cx = T::default();
    let mut cy = T::default();
    for p in points {
        cx = add(cx, p.x)?;
        cy = add(cy, p.y)?;
    }
    let n = T::from_f64(points.len() as f64);
    Ok(Point::new(cx / n, cy / n))
}

/// Read one whitespace-delimited token, consuming nothing past it.
fn next_token(input: &mut dyn BufRead) -> Result<Option<String>, FigureError> {
    let mut token = Vec::new();
    loop {
        let buf = input.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        let mut used = 0;
        let mut done = false;
        for &byte in buf {
            if byte.is_ascii_whitespace() {
                if !token.is_empty() {
                    done = true;
                    break;
                }
            } else {
                token.push(byte);
            }
            used += 1;
        }
        input.consume(used);
        if done {
            break;
        }
    }
    if token.is_empty() {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&token).into_owned()))
}

/// Parse `x1 y1 x2 y2 x3 y3 x4 y4` from `input`.
pub(crate) fn read_quad<T: Coord>(input: &mut dyn BufRead) -> Result<[Point<T>; 4], FigureError> {
    let mut coords = [T::default(); 8];
    for (found, slot) in coords.iter_mut().enumerate() {
        let token = next_token(input)?.ok_or(FigureError::UnexpectedEof { expected: 8, found })?;
        *slot = token.parse().map_err(|_| FigureError::BadNumber { token })?;
    }
    let mut pts = [Point::default(); 4];
    for (p, xy) in pts.iter_mut().zip(coords.chunks_exact(2)) {
        *p = Point::new(xy[0], xy[1]);
    }
    Ok(pts)
}
