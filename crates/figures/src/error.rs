//! Error type shared by shape construction, stream reading and strict array access.

use thiserror::Error;

use crate::figure::FigureKind;

#[derive(Debug, Error)]
pub enum FigureError {
    /// The four points fail the variant's geometric predicate.
    #[error("points do not form a {0}")]
    InvalidShape(FigureKind),

    #[error("expected {expected} numbers, found {found}")]
    UnexpectedEof { expected: usize, found: usize },

    #[error("cannot parse {token:?} as a coordinate")]
    BadNumber { token: String },

    /// An intermediate product or sum does not fit the integer scalar.
    #[error("coordinate arithmetic overflowed")]
    Overflow,

    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("index {index} out of range for array of size {len}")]
    OutOfRange { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_variant() {
        let e = FigureError::InvalidShape(FigureKind::Trapezoid);
        assert_eq!(e.to_string(), "points do not form a trapezoid");
        let e = FigureError::OutOfRange { index: 7, len: 2 };
        assert_eq!(e.to_string(), "index 7 out of range for array of size 2");
    }
}
