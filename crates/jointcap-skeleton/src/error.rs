/// An error type for skeletal keypoint export.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SkeletonError {
    /// The joint names and positions handed to the exporter differ in length.
    #[error("Inconsistent array lengths: {names} bone names but {positions} positions")]
    InconsistentArrayLength {
        /// Number of joint names.
        names: usize,
        /// Number of positions.
        positions: usize,
    },
}
