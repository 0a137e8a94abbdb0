//! Error types raised by the DCEL, the monotone partition pass and the
//! monotone triangulation pass.
//!
//! All of these indicate a violated precondition: bad input winding, a
//! caller bug when splitting a face, or a degenerate/self-intersecting
//! polygon tripping up the sweep-line status. None of them are retryable;
//! they propagate straight to the caller of the top level entry point.

/// The crate's result type.
pub type TriangulationResult<T = ()> = Result<T, TriangulationError>;

/// Errors raised by `Dcel::add_diagonal` (the half-edge form).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SplitError {
    EdgesAreEqual,
    DifferentFaces,
    AlreadyAdjacent,
    OuterFace,
    NotOnSameCycle,
}

impl core::fmt::Display for SplitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SplitError::EdgesAreEqual => {
                write!(f, "the two edges are equal")
            }
            SplitError::DifferentFaces => {
                write!(f, "the two edges are not on the same face")
            }
            SplitError::AlreadyAdjacent => {
                write!(f, "the two edges are already adjacent")
            }
            SplitError::OuterFace => {
                write!(f, "cannot split the outer face")
            }
            SplitError::NotOnSameCycle => {
                write!(f, "the two edges are not on the same face cycle")
            }
        }
    }
}

impl std::error::Error for SplitError {}

/// Describes a violated precondition of the sweep-line status used during
/// monotone partitioning. Only ever observed on degenerate or
/// self-intersecting input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SweepStatusError {
    HelperMissing,
    NoLeftEdge,
}

impl core::fmt::Display for SweepStatusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SweepStatusError::HelperMissing => {
                write!(f, "no helper recorded for this edge")
            }
            SweepStatusError::NoLeftEdge => {
                write!(f, "no edge to the left of this vertex at the current sweep height")
            }
        }
    }
}

impl std::error::Error for SweepStatusError {}

/// The crate's top level error enumeration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TriangulationError {
    /// `init_ccw` was handed a vertex sequence whose signed area is not
    /// strictly positive.
    NotCounterClockwise,
    /// An operation that requires an initialized DCEL (`inner_face`,
    /// `extract_triangles`, ...) was called before `init_ccw`.
    Uninitialized,
    /// `add_diagonal` (half-edge form) failed.
    Split(SplitError),
    /// `add_diagonal` (vertex form) could not find a bounded face shared by
    /// both endpoints.
    NoSharedFace,
    /// The monotone partition's sweep-line status hit a violated
    /// precondition.
    SweepStatus(SweepStatusError),
    /// `extract_triangles` encountered a bounded face with more than three
    /// edges. Triangulation must precede extraction.
    NotTriangulated,
}

impl core::fmt::Display for TriangulationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TriangulationError::NotCounterClockwise => {
                write!(f, "input vertices are not in counter-clockwise order")
            }
            TriangulationError::Uninitialized => {
                write!(f, "the DCEL has not been initialized")
            }
            TriangulationError::Split(e) => {
                write!(f, "could not split face: {e}")
            }
            TriangulationError::NoSharedFace => {
                write!(f, "the two vertices do not share a bounded face")
            }
            TriangulationError::SweepStatus(e) => {
                write!(f, "sweep-line status error: {e}")
            }
            TriangulationError::NotTriangulated => {
                write!(f, "encountered a non-triangular face at extraction time")
            }
        }
    }
}

impl std::error::Error for TriangulationError {}

impl core::convert::From<SplitError> for TriangulationError {
    fn from(value: SplitError) -> Self {
        Self::Split(value)
    }
}

impl core::convert::From<SweepStatusError> for TriangulationError {
    fn from(value: SweepStatusError) -> Self {
        Self::SweepStatus(value)
    }
}
