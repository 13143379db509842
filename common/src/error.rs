use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeError {
    InvalidAabbDims { width: f32, height: f32 },
    InvalidCircleRadius { radius: f32 },
    TooFewVertices { count: usize },
    NonFiniteVertex { x: f32, y: f32 },
    ZeroLengthDirection,
    InvalidRayLength { length: f32 },
}

pub type ShapeResult<T> = Result<T, ShapeError>;

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::InvalidAabbDims { width, height } => {
                write!(
                    f,
                    "aabb width/height must be finite and non-negative (width: {}, height: {})",
                    width, height
                )
            }
            ShapeError::InvalidCircleRadius { radius } => {
                write!(
                    f,
                    "circle radius must be finite and non-negative (radius: {})",
                    radius
                )
            }
            ShapeError::TooFewVertices { count } => {
                write!(f, "polygon needs at least 3 vertices (got {})", count)
            }
            ShapeError::NonFiniteVertex { x, y } => {
                write!(f, "polygon vertex must be finite (x: {}, y: {})", x, y)
            }
            ShapeError::ZeroLengthDirection => {
                write!(f, "ray direction must have a nonzero length")
            }
            ShapeError::InvalidRayLength { length } => {
                write!(
                    f,
                    "ray length must be finite and non-negative (length: {})",
                    length
                )
            }
        }
    }
}

impl std::error::Error for ShapeError {}
