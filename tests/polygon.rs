//! Black-box checks for `polygon` helpers and the `add_diagonal`
//! boundary behaviors from the end-to-end scenarios.

use polygon_triangulation::dcel::{Dcel, EdgeAssign};
use polygon_triangulation::math_utils::point;
use polygon_triangulation::polygon::{random_monotone_polygon, random_polygon, remove_duplicates_and_collinear};
use polygon_triangulation::{TriangulationError, Winding};

#[test]
fn pentagon_with_collinear_point_collapses_to_a_square() {
    let mut vertices = vec![point(0.0, 0.0), point(1.0, 0.0), point(1.0, 0.5), point(1.0, 1.0), point(0.0, 1.0)];
    remove_duplicates_and_collinear(&mut vertices, 1e-3);
    assert_eq!(vertices, vec![point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0), point(0.0, 1.0)]);
}

#[test]
fn add_diagonal_of_adjacent_vertices_is_rejected() {
    let mut dcel = Dcel::new();
    dcel.init_ccw(&[point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0), point(0.0, 1.0)]).unwrap();
    let inner = dcel.inner_face().unwrap();
    let start = dcel.outer_component(inner);

    let err = dcel.add_diagonal(start, dcel.next(start), EdgeAssign::None).unwrap_err();
    assert_eq!(err, TriangulationError::Split(polygon_triangulation::SplitError::AlreadyAdjacent));
}

#[test]
fn add_diagonal_on_the_outer_face_is_rejected() {
    let mut dcel = Dcel::new();
    dcel.init_ccw(&[point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0), point(0.0, 1.0)]).unwrap();
    let inner = dcel.inner_face().unwrap();
    let start = dcel.outer_component(inner);

    let outer_a = dcel.twin(start);
    let outer_b = dcel.twin(dcel.next(dcel.next(start)));
    let err = dcel.add_diagonal(outer_a, outer_b, EdgeAssign::None).unwrap_err();
    assert_eq!(err, TriangulationError::Split(polygon_triangulation::SplitError::OuterFace));
}

#[test]
fn diagonal_on_a_square_yields_two_triangles() {
    let mut dcel = Dcel::new();
    dcel.init_ccw(&[point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0), point(0.0, 1.0)]).unwrap();
    let inner = dcel.inner_face().unwrap();
    let start = dcel.outer_component(inner);
    let v0_edge = start;
    let v2_edge = dcel.next(dcel.next(start));

    dcel.add_diagonal(v0_edge, v2_edge, EdgeAssign::None).unwrap();

    let faces: Vec<_> = dcel.faces_iter().collect();
    assert_eq!(faces.len(), 2);
    for f in faces {
        assert_eq!(dcel.half_edges_of_face(dcel.outer_component(f)).count(), 3);
    }
}

#[test]
fn random_polygon_sizes_are_simple_and_ccw() {
    for n in [12usize, 25, 40, 63] {
        let vertices = random_polygon(n);
        assert_eq!(vertices.len(), n);

        let mut dcel = Dcel::new();
        assert!(dcel.init_ccw(&vertices).is_ok());
        let inner = dcel.inner_face().unwrap();
        assert_eq!(dcel.winding_order_of_face(inner), Winding::CounterClockwise);
    }
}

#[test]
fn random_monotone_polygon_sizes_initialize_cleanly() {
    for n in [12usize, 25, 40, 63] {
        let vertices = random_monotone_polygon(n);
        assert_eq!(vertices.len(), n);

        let mut dcel = Dcel::new();
        assert!(dcel.init_ccw(&vertices).is_ok());
    }
}
