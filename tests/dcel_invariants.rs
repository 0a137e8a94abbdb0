//! Black-box invariant checks against the public `Dcel` API: twin symmetry,
//! next/prev symmetry, face consistency, vertex-origin consistency after a
//! split, and the Euler relation on a fully triangulated simple polygon.

use polygon_triangulation::dcel::{Dcel, EdgeAssign};
use polygon_triangulation::math_utils::point;
use polygon_triangulation::{driver, Winding};

fn unit_square() -> Dcel {
    let mut dcel = Dcel::new();
    dcel.init_ccw(&[point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0), point(0.0, 1.0)]).unwrap();
    dcel
}

#[test]
fn twin_symmetry_holds_on_every_half_edge() {
    let dcel = unit_square();
    let inner = dcel.inner_face().unwrap();
    for edge in dcel.half_edges_of_face(dcel.outer_component(inner)) {
        assert_eq!(dcel.twin(dcel.twin(edge)), edge);
    }
}

#[test]
fn next_prev_symmetry_holds_on_every_half_edge() {
    let dcel = unit_square();
    let inner = dcel.inner_face().unwrap();
    for edge in dcel.half_edges_of_face(dcel.outer_component(inner)) {
        assert_eq!(dcel.next(dcel.prev(edge)), edge);
        assert_eq!(dcel.prev(dcel.next(edge)), edge);
    }
}

#[test]
fn face_consistency_after_init() {
    let dcel = unit_square();
    let inner = dcel.inner_face().unwrap();
    for edge in dcel.half_edges_of_face(dcel.outer_component(inner)) {
        assert_eq!(dcel.incident_face(edge), inner);
    }
}

#[test]
fn vertex_origin_consistency_after_split() {
    let mut dcel = unit_square();
    let inner = dcel.inner_face().unwrap();
    let start = dcel.outer_component(inner);
    let v0_edge = start;
    let v2_edge = dcel.next(dcel.next(start));

    let diagonal = dcel.add_diagonal(v0_edge, v2_edge, EdgeAssign::None).unwrap();
    assert_eq!(dcel.origin(diagonal), dcel.origin(v0_edge));
    assert_eq!(dcel.origin(dcel.twin(diagonal)), dcel.origin(v2_edge));
}

#[test]
fn euler_relation_on_triangulated_pentagon() {
    let n = 5usize;
    let mut dcel = Dcel::new();
    dcel.init_ccw(&[
        point(0.0, 0.0),
        point(1.0, 0.0),
        point(2.0, 1.0),
        point(1.0, 2.0),
        point(0.0, 1.0),
    ])
    .unwrap();
    driver::triangulate(&mut dcel).unwrap();

    // F = (n - 2) bounded faces, each a triangle: 3 half-edges apiece, each
    // geometric edge shared by exactly two half-edges (either two bounded
    // faces, or one bounded face and the outer face).
    let bounded_faces: Vec<_> = dcel.faces_iter().collect();
    assert_eq!(bounded_faces.len(), n - 2);

    let half_edge_count: usize =
        bounded_faces.iter().map(|&f| dcel.half_edges_of_face(dcel.outer_component(f)).count()).sum();
    // 3 half-edges per bounded face plus the matching outer-face half-edges
    // along the original boundary (n of them) gives the total half-edge count.
    assert_eq!(half_edge_count + n, 4 * n - 6);
}

#[test]
fn faces_on_vertex_skips_outer_face_on_pentagon() {
    let mut dcel = Dcel::new();
    dcel.init_ccw(&[
        point(0.0, 0.0),
        point(1.0, 0.0),
        point(2.0, 1.0),
        point(1.0, 1.0),
        point(0.0, 1.0),
    ])
    .unwrap();
    let inner = dcel.inner_face().unwrap();
    let start = dcel.outer_component(inner);
    let v0_edge = start;
    let v2_edge = dcel.next(dcel.next(start));
    dcel.add_diagonal(v0_edge, v2_edge, EdgeAssign::None).unwrap();

    let v0 = dcel.origin(v0_edge);
    let faces: Vec<_> = dcel.faces_on_vertex_iter(v0).collect();
    assert_eq!(faces.len(), 2);
    for f in &faces {
        assert_eq!(dcel.winding_order_of_face(*f), Winding::CounterClockwise);
    }
}
