//! Partitions one face of a DCEL into y-monotone sub-faces by classifying
//! boundary vertices and inserting diagonals that eliminate split and merge
//! vertices.

use std::collections::HashMap;

use crate::dcel::{Dcel, EdgeAssign, FaceId, VertexId};
use crate::error::TriangulationResult;
use crate::sweep::{SweepStatus, VertexSweepOrder};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum VertexType {
    Start,
    Stop,
    Split,
    Merge,
    Regular,
}

fn classify_vertex(dcel: &Dcel, vertex: VertexId) -> VertexType {
    let order = VertexSweepOrder;
    let incident = dcel.incident_edge(vertex);
    let prev_edge = dcel.prev(incident);

    let angle = crate::math_utils::oriented_angle(dcel.direction(prev_edge).normalize(), dcel.direction(incident).normalize());

    let prev_vertex = dcel.origin(prev_edge);
    let next_vertex = dcel.destination(incident);

    // `prev_above`: prev sorts before vertex in sweep order (prev is above).
    // `next_below`: vertex sorts before next in sweep order (next is below).
    let prev_above = order.compare(dcel.position(prev_vertex), dcel.position(vertex)) == std::cmp::Ordering::Less;
    let next_below = order.compare(dcel.position(vertex), dcel.position(next_vertex)) == std::cmp::Ordering::Less;

    if prev_above && !next_below {
        return if angle > 0.0 { VertexType::Stop } else { VertexType::Merge };
    }
    if !prev_above && next_below {
        return if angle > 0.0 { VertexType::Start } else { VertexType::Split };
    }
    VertexType::Regular
}

/// Reusable working state for `split_to_monotone`, so repeated calls across
/// the faces of one driver run reuse allocations instead of building fresh
/// scratch buffers each time.
#[derive(Default)]
pub struct MonotonePartition {
    sweep_status: SweepStatus,
    classification: HashMap<VertexId, VertexType>,
    vertices: Vec<VertexId>,
}

impl MonotonePartition {
    pub fn new() -> Self {
        MonotonePartition::default()
    }

    fn diagonal_to_previous_edge_helper(&mut self, dcel: &mut Dcel, vertex: VertexId) -> TriangulationResult<()> {
        let incident = dcel.incident_edge(vertex);
        let prev_edge = dcel.prev(incident);
        let helper = self.sweep_status.helper(prev_edge)?;

        if self.classification.get(&helper) == Some(&VertexType::Merge) {
            dcel.add_diagonal_edge_vertex(incident, helper, EdgeAssign::None)?;
        }

        self.sweep_status.remove(prev_edge);
        Ok(())
    }

    fn diagonal_to_left_edge_helper(&mut self, dcel: &mut Dcel, vertex: VertexId) -> TriangulationResult<()> {
        let incident = dcel.incident_edge(vertex);
        let left_edge = self.sweep_status.find_left(dcel, vertex)?;
        let left_helper = self.sweep_status.helper(left_edge)?;

        if self.classification.get(&left_helper) == Some(&VertexType::Merge) {
            dcel.add_diagonal_edge_vertex(incident, left_helper, EdgeAssign::None)?;
        }

        self.sweep_status.update_helper(left_edge, vertex)?;
        Ok(())
    }

    fn handle_start(&mut self, dcel: &Dcel, vertex: VertexId) {
        let incident = dcel.incident_edge(vertex);
        self.sweep_status.insert(dcel, incident, vertex);
    }

    fn handle_stop(&mut self, dcel: &mut Dcel, vertex: VertexId) -> TriangulationResult<()> {
        self.diagonal_to_previous_edge_helper(dcel, vertex)
    }

    fn handle_split(&mut self, dcel: &mut Dcel, vertex: VertexId) -> TriangulationResult<()> {
        let incident = dcel.incident_edge(vertex);
        let left_edge = self.sweep_status.find_left(dcel, vertex)?;
        let left_helper = self.sweep_status.helper(left_edge)?;

        dcel.add_diagonal_edge_vertex(incident, left_helper, EdgeAssign::None)?;
        self.sweep_status.update_helper(left_edge, vertex)?;
        self.sweep_status.insert(dcel, dcel.incident_edge(vertex), vertex);
        Ok(())
    }

    fn handle_merge(&mut self, dcel: &mut Dcel, vertex: VertexId) -> TriangulationResult<()> {
        self.diagonal_to_previous_edge_helper(dcel, vertex)?;
        self.diagonal_to_left_edge_helper(dcel, vertex)
    }

    fn handle_regular(&mut self, dcel: &mut Dcel, vertex: VertexId) -> TriangulationResult<()> {
        let incident = dcel.incident_edge(vertex);
        let direction = dcel.direction(incident);

        // Interior lies to the right of `vertex` when its outgoing edge
        // heads downward (ties broken by heading rightward).
        let interior_on_right = direction.y < 0.0 || (direction.y == 0.0 && direction.x > 0.0);

        if interior_on_right {
            self.diagonal_to_previous_edge_helper(dcel, vertex)?;
            self.sweep_status.insert(dcel, dcel.incident_edge(vertex), vertex);
            Ok(())
        } else {
            self.diagonal_to_left_edge_helper(dcel, vertex)
        }
    }

    /// Partitions `face` into y-monotone sub-faces.
    pub fn execute(&mut self, dcel: &mut Dcel, face: FaceId) -> TriangulationResult<()> {
        self.sweep_status.clear();
        self.classification.clear();
        self.vertices.clear();

        let start = dcel.outer_component(face);
        for edge in dcel.half_edges_of_face(start) {
            let vertex = dcel.origin(edge);
            self.vertices.push(vertex);
            self.classification.insert(vertex, classify_vertex(dcel, vertex));
        }

        let order = VertexSweepOrder;
        self.vertices.sort_by(|&a, &b| order.compare(dcel.position(a), dcel.position(b)));

        let vertices = std::mem::take(&mut self.vertices);
        for &vertex in &vertices {
            self.sweep_status.set_sweep_y(dcel.position(vertex).y);

            match self.classification[&vertex] {
                VertexType::Start => self.handle_start(dcel, vertex),
                VertexType::Stop => self.handle_stop(dcel, vertex)?,
                VertexType::Split => self.handle_split(dcel, vertex)?,
                VertexType::Merge => self.handle_merge(dcel, vertex)?,
                VertexType::Regular => self.handle_regular(dcel, vertex)?,
            }
        }
        self.vertices = vertices;

        Ok(())
    }
}

/// Partitions `face` into y-monotone sub-faces. Convenience wrapper around
/// a one-shot [`MonotonePartition`] for callers that don't need to reuse
/// scratch buffers across faces.
pub fn split_to_monotone(dcel: &mut Dcel, face: FaceId) -> TriangulationResult<()> {
    MonotonePartition::new().execute(dcel, face)
}
