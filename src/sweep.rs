//! The two sweep-line comparators and the sweep-line status structure used
//! by `monotone_partition::split_to_monotone`.
//!
//! Both comparators are small value types with a comparison method,
//! constructed fresh for each face/sweep-height rather than kept as
//! stateful singletons: `HalfEdgeSweepOrder` closes over the current sweep
//! height, `VertexSweepOrder` needs no state at all.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::dcel::{Dcel, HalfEdgeId, VertexId};
use crate::error::{SweepStatusError, TriangulationResult};
use crate::math_utils::{sweep_intersection, Point};

/// Total order of vertices in sweep order: top to bottom, left to right at
/// ties. `a` sorts before `b` when `a.y > b.y`, or `a.y == b.y && a.x < b.x`.
#[derive(Copy, Clone, Default)]
pub struct VertexSweepOrder;

impl VertexSweepOrder {
    pub fn compare(&self, a: Point, b: Point) -> Ordering {
        if a.y == b.y {
            a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal)
        } else if a.y > b.y {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

/// Orders half-edges by the x-coordinate of their intersection with the
/// horizontal line `y = sweep_y`. Only meaningful for edges that actually
/// cross the sweep line at that height.
#[derive(Copy, Clone)]
pub struct HalfEdgeSweepOrder {
    sweep_y: f32,
}

impl HalfEdgeSweepOrder {
    pub fn new(sweep_y: f32) -> Self {
        HalfEdgeSweepOrder { sweep_y }
    }

    pub fn x_at(&self, dcel: &Dcel, edge: HalfEdgeId) -> Option<f32> {
        let origin = dcel.position(dcel.origin(edge));
        let destination = dcel.position(dcel.destination(edge));
        sweep_intersection(origin, destination, self.sweep_y).map(|p| p.x)
    }

    pub fn compare(&self, dcel: &Dcel, a: HalfEdgeId, b: HalfEdgeId) -> Ordering {
        let ax = self.x_at(dcel, a).unwrap_or(f32::NAN);
        let bx = self.x_at(dcel, b).unwrap_or(f32::NAN);
        ax.partial_cmp(&bx).unwrap_or(Ordering::Equal)
    }
}

/// The set of half-edges currently crossing the sweep line, each carrying a
/// helper vertex, ordered left-to-right at the current sweep height.
///
/// Helpers are kept in a hash map, as in the source, rather than an
/// index-keyed array: the edge set grows by diagonals added mid-pass, so a
/// fixed-size array would need its own growth bookkeeping for no asymptotic
/// gain at the sizes this crate targets.
#[derive(Default)]
pub struct SweepStatus {
    helpers: HashMap<HalfEdgeId, VertexId>,
    edges: Vec<HalfEdgeId>,
    sweep_y: f32,
}

impl SweepStatus {
    pub fn new() -> Self {
        SweepStatus::default()
    }

    pub fn clear(&mut self) {
        self.helpers.clear();
        self.edges.clear();
        self.sweep_y = 0.0;
    }

    pub fn sweep_y(&self) -> f32 {
        self.sweep_y
    }

    pub fn set_sweep_y(&mut self, sweep_y: f32) {
        self.sweep_y = sweep_y;
    }

    /// Adds `edge` to the status with the given helper, re-sorting the
    /// left-to-right order at the current sweep height.
    pub fn insert(&mut self, dcel: &Dcel, edge: HalfEdgeId, helper: VertexId) {
        self.helpers.insert(edge, helper);
        self.edges.push(edge);
        let order = HalfEdgeSweepOrder::new(self.sweep_y);
        self.edges.sort_by(|&a, &b| order.compare(dcel, a, b));
    }

    pub fn remove(&mut self, edge: HalfEdgeId) {
        self.helpers.remove(&edge);
        self.edges.retain(|&e| e != edge);
    }

    pub fn update_helper(&mut self, edge: HalfEdgeId, helper: VertexId) -> TriangulationResult<()> {
        match self.helpers.get_mut(&edge) {
            Some(h) => {
                *h = helper;
                Ok(())
            }
            None => {
                log::debug!("update_helper: no helper recorded for this edge");
                Err(SweepStatusError::HelperMissing.into())
            }
        }
    }

    pub fn helper(&self, edge: HalfEdgeId) -> TriangulationResult<VertexId> {
        self.helpers.get(&edge).copied().ok_or_else(|| {
            log::debug!("helper: no helper recorded for this edge");
            SweepStatusError::HelperMissing.into()
        })
    }

    /// The edge directly to the left of `vertex` at the current sweep
    /// height. Precondition: `vertex` is strictly inside the polygon at
    /// this height.
    pub fn find_left(&self, dcel: &Dcel, vertex: VertexId) -> TriangulationResult<HalfEdgeId> {
        let vertex_x = dcel.position(vertex).x;
        let order = HalfEdgeSweepOrder::new(self.sweep_y);

        // Rightmost edges sort to the end; scan from there so the first hit
        // is the nearest one to the left.
        for &edge in self.edges.iter().rev() {
            if dcel.destination(edge) == vertex {
                continue;
            }
            if let Some(x) = order.x_at(dcel, edge) {
                if vertex_x > x {
                    return Ok(edge);
                }
            }
        }

        log::debug!("find_left: no edge to the left of this vertex");
        Err(SweepStatusError::NoLeftEdge.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math_utils::point;

    #[test]
    fn vertex_sweep_order_descending_y() {
        let order = VertexSweepOrder;
        assert_eq!(order.compare(point(0.0, 1.0), point(0.0, 0.0)), Ordering::Less);
        assert_eq!(order.compare(point(0.0, 0.0), point(0.0, 1.0)), Ordering::Greater);
    }

    #[test]
    fn vertex_sweep_order_x_tiebreak() {
        let order = VertexSweepOrder;
        assert_eq!(order.compare(point(0.0, 0.0), point(1.0, 0.0)), Ordering::Less);
        assert_eq!(order.compare(point(1.0, 0.0), point(0.0, 0.0)), Ordering::Greater);
    }

    #[test]
    fn half_edge_sweep_order_by_x_at_height() {
        let mut dcel = Dcel::new();
        dcel.init_ccw(&[point(0.0, 2.0), point(2.0, 2.0), point(2.0, 0.0), point(0.0, 0.0)]).unwrap();
        // Inner-face edges 1 (v1->v2, vertical at x=2) and 3 (v3->v0, vertical at x=0).
        let e1 = HalfEdgeId(1);
        let e3 = HalfEdgeId(3);
        let order = HalfEdgeSweepOrder::new(1.0);
        assert_eq!(order.compare(&dcel, e3, e1), Ordering::Less);
    }

    #[test]
    fn sweep_status_insert_remove_and_helper() {
        let mut dcel = Dcel::new();
        dcel.init_ccw(&[point(0.0, 2.0), point(2.0, 2.0), point(2.0, 0.0), point(0.0, 0.0)]).unwrap();
        let mut status = SweepStatus::new();
        status.set_sweep_y(2.0);

        let v0 = VertexId(0);
        let edge = dcel.incident_edge(v0);

        status.insert(&dcel, edge, v0);
        assert_eq!(status.helper(edge).unwrap(), v0);

        status.update_helper(edge, v0).unwrap();
        status.remove(edge);
        assert!(status.helper(edge).is_err());
    }
}
