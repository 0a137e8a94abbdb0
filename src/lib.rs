//! Triangulation of simple (non-self-intersecting) polygons, built on top of
//! a doubly connected edge list (DCEL / half-edge mesh).
//!
//! ## Overview
//!
//! The most interesting types and functions of this crate are:
//!
//! * [`Dcel`](dcel::Dcel) - the half-edge mesh: storage, the `add_diagonal`
//!   family of operations, iterators, and triangle extraction.
//! * [`driver::triangulate`] - the top level entry point. Takes an
//!   initialized [`Dcel`](dcel::Dcel) and triangulates every bounded face.
//!
//! ## The triangulation pipeline
//!
//! 1. [`Dcel::init_ccw`](dcel::Dcel::init_ccw) builds the half-edge mesh from
//!    a counter-clockwise vertex sequence.
//! 2. [`monotone_partition::split_to_monotone`] partitions the interior face
//!    into y-monotone sub-faces by a single sweep over its vertices,
//!    classifying each one and inserting diagonals that remove split and
//!    merge vertices.
//! 3. [`monotone::triangulate_monotone`] triangulates each y-monotone face in
//!    linear time with the stack-based algorithm of de Berg et al.
//! 4. [`Dcel::extract_triangles`](dcel::Dcel::extract_triangles) reads the
//!    fully triangulated mesh back out as a vertex buffer and an index
//!    buffer of flat triangles.
//!
//! [`driver::triangulate`] drives steps 2-3 over every bounded face,
//! fast-pathing faces that are already triangles or quads.
//!
//! ### Input
//!
//! The DCEL is built from a `&[Point]` or `&[Point3]` (z is accepted for
//! caller convenience and dropped) describing a simple polygon boundary in
//! counter-clockwise order. [`polygon::remove_duplicates_and_collinear`] is
//! provided to clean up input vertex sequences that may contain duplicate or
//! collinear points, which would otherwise violate `init_ccw`'s simple
//! polygon precondition.
//!
//! ### Output
//!
//! [`Dcel::extract_triangles`](dcel::Dcel::extract_triangles) fills a
//! `Vec<Point3>` and a `Vec<u32>` index buffer with the triangulated mesh,
//! clearing and reusing the caller's buffers rather than allocating fresh
//! ones, so repeated triangulation passes in a hot loop don't churn the
//! allocator.
//!
//! ### Errors
//!
//! Every fallible operation returns [`error::TriangulationResult`]. Errors
//! indicate a violated precondition: non-counter-clockwise input, an
//! uninitialized DCEL, a caller bug when splitting a face, or a degenerate
//! input tripping up the sweep-line status. None of them are retryable.

#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::too_many_arguments)]

pub mod dcel;
pub mod driver;
pub mod error;
pub mod math_utils;
pub mod monotone;
pub mod monotone_partition;
pub mod polygon;
pub mod sweep;

#[doc(inline)]
pub use crate::dcel::{Chain, Dcel, EdgeAssign, FaceId, HalfEdgeId, VertexId};

#[doc(inline)]
pub use crate::driver::triangulate;

#[doc(inline)]
pub use crate::error::{SplitError, SweepStatusError, TriangulationError, TriangulationResult};

#[doc(inline)]
pub use crate::math_utils::{point, Point, Point3, Winding};
