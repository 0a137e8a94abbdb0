//! The top-level entry point: splits the inner face to monotone
//! sub-polygons, then triangulates every bounded face, fast-pathing
//! triangles and quads.

use crate::dcel::{Dcel, EdgeAssign, FaceId, HalfEdgeId};
use crate::error::TriangulationResult;
use crate::math_utils::oriented_angle;
use crate::monotone::MonotoneTriangulator;
use crate::monotone_partition::MonotonePartition;

enum FaceKind {
    Triangle,
    Quad,
    Polygon,
}

/// Classifies a face by edge count via a constant-time unrolled walk.
fn classify_face(dcel: &Dcel, face: FaceId) -> FaceKind {
    let first = dcel.outer_component(face);
    let second_next = dcel.next(dcel.next(first));

    if dcel.next(second_next) == first {
        return FaceKind::Triangle;
    }

    let third_next = dcel.next(second_next);
    if dcel.next(third_next) == first {
        return FaceKind::Quad;
    }

    FaceKind::Polygon
}

fn max_inner_angle_edge(dcel: &Dcel, face: FaceId) -> HalfEdgeId {
    let start = dcel.outer_component(face);
    let mut max_angle = 0.0f32;
    let mut max_edge = start;

    for edge in dcel.half_edges_of_face(start) {
        let prev_dir = dcel.direction(dcel.prev(edge)).normalize();
        let current_dir = dcel.direction(edge).normalize();
        let mut angle = oriented_angle(current_dir, prev_dir);
        if angle < 0.0 {
            angle += 2.0 * std::f32::consts::PI;
        }
        if angle > max_angle {
            max_angle = angle;
            max_edge = edge;
        }
    }

    max_edge
}

/// Splits a quad by the diagonal between the two vertices not adjacent to
/// the one with the maximum interior angle. Correct for both convex and
/// reflex quads.
fn triangulate_quad(dcel: &mut Dcel, face: FaceId) -> TriangulationResult<()> {
    let max_edge = max_inner_angle_edge(dcel, face);
    let opposite = dcel.next(dcel.next(max_edge));
    dcel.add_diagonal(max_edge, opposite, EdgeAssign::None)?;
    Ok(())
}

/// Triangulates an initialized DCEL: every bounded face becomes a triangle.
pub fn triangulate(dcel: &mut Dcel) -> TriangulationResult<()> {
    let inner_face = dcel.inner_face()?;

    MonotonePartition::new().execute(dcel, inner_face)?;

    // Snapshot: newly created sub-faces that are already triangles need not
    // be revisited.
    let faces: Vec<FaceId> = dcel.faces_iter().collect();
    let mut pending = Vec::new();

    for face in faces {
        match classify_face(dcel, face) {
            FaceKind::Triangle => {}
            FaceKind::Quad => triangulate_quad(dcel, face)?,
            FaceKind::Polygon => pending.push(face),
        }
    }

    let mut triangulator = MonotoneTriangulator::new();
    while let Some(face) = pending.pop() {
        // Precondition of triangulate_monotone: every boundary vertex's
        // incident edge lies on this face.
        let start = dcel.outer_component(face);
        let edges: Vec<_> = dcel.half_edges_of_face(start).collect();
        for edge in edges {
            dcel.set_incident_edge(dcel.origin(edge), edge);
        }
        triangulator.execute(dcel, face)?;
    }

    Ok(())
}
