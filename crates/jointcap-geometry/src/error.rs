/// An error type for the geometry module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GeometryError {
    /// The pose cannot be inverted because one scale axis is exactly zero.
    #[error("Cannot invert a pose with a zero scale axis: {scale:?}")]
    DegenerateScale {
        /// The offending scale as [x, y, z].
        scale: [f64; 3],
    },
}
