//! Growable container of shared figure handles.
//!
//! Ownership
//! - `push` stores the caller's handle as-is; both sides share one figure.
//! - `Clone` deep-copies every figure via `clone_box`, so the copy owns
//!   independent figures.
//! - `take` moves the storage out and leaves an empty array (size 0, capacity 0).
//!
//! Out-of-range access never fails: `get` returns `None` and `remove` is a no-op.
//! `try_get` is the strict alternative.

use std::io::Write;
use std::rc::Rc;

use crate::error::FigureError;
use crate::figure::{Figure, FigureRef};
use crate::point::Coord;

/// Capacity used by `Array::new` and `Default`.
pub const DEFAULT_CAPACITY: usize = 4;

/// Ordered sequence of `FigureRef<T>` with an explicit logical capacity.
///
/// Invariants:
/// - `len() <= capacity()`.
/// - Capacity only grows, by `max(2 * cap, cap + 1)` when a push finds it full.
#[derive(Debug)]
pub struct Array<T: Coord> {
    items: Vec<FigureRef<T>>,
    capacity: usize,
}

impl<T: Coord> Array<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a shared handle, growing capacity when full.
    pub fn push(&mut self, figure: FigureRef<T>) {
        if self.items.len() == self.capacity {
            self.grow();
        }
        self.items.push(figure);
    }

    fn grow(&mut self) {
        let new_cap = (self.capacity * 2).max(self.capacity + 1);
        tracing::debug!(from = self.capacity, to = new_cap, "growing figure array");
        self.items.reserve_exact(new_cap - self.items.len());
        self.capacity = new_cap;
    }

    /// Remove the handle at `index`, shifting later elements left.
    ///
    /// Returns `None` without touching the array when `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Option<FigureRef<T>> {
        if index >= self.items.len() {
            tracing::trace!(index, len = self.items.len(), "remove out of range ignored");
            return None;
        }
        let removed = self.items.remove(index);
        tracing::debug!(index, kind = %removed.kind(), "removed figure");
        Some(removed)
    }

    /// Shared handle at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<FigureRef<T>> {
        self.items.get(index).cloned()
    }

    pub fn get_ref(&self, index: usize) -> Option<&FigureRef<T>> {
        self.items.get(index)
    }

    /// Like `get`, but out-of-range is an error.
    pub fn try_get(&self, index: usize) -> Result<FigureRef<T>, FigureError> {
        self.get(index).ok_or(FigureError::OutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Sum of all areas; 0 for an empty array.
    pub fn total_area(&self) -> f64 {
        self.items.iter().map(|f| f.area()).sum()
    }

    pub fn print_figures_to(&self, out: &mut dyn Write) -> std::io::Result<()> {
        for f in &self.items {
            f.print(out)?;
        }
        Ok(())
    }

    /// Print every figure to stdout.
    pub fn print_figures(&self) -> std::io::Result<()> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.print_figures_to(&mut lock)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FigureRef<T>> {
        self.items.iter()
    }

    /// Move the contents out, leaving `self` with size 0 and capacity 0.
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::with_capacity(0))
    }
}

impl<T: Coord> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Coord> Clone for Array<T> {
    fn clone(&self) -> Self {
        let mut items: Vec<FigureRef<T>> = Vec::with_capacity(self.capacity);
        items.extend(self.items.iter().map(|f| Rc::from(f.clone_box())));
        Self {
            items,
            capacity: self.capacity,
        }
    }
}

impl<'a, T: Coord> IntoIterator for &'a Array<T> {
    type Item = &'a FigureRef<T>;
    type IntoIter = std::slice::Iter<'a, FigureRef<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
