/// Errors raised while configuring a ribbon trail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TrailError {
    /// A trail needs at least one segment to have a valid vertex capacity.
    #[error("ribbon trail needs at least 1 segment, got {requested}")]
    InvalidSegmentCount { requested: usize },

    /// The vertex capacity would not be addressable with 32-bit indices.
    #[error("ribbon trail of {requested} segments exceeds the 32-bit index range")]
    TooManySegments { requested: usize },
}
