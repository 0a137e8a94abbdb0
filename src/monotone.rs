//! Triangulates one y-monotone face in linear time: merges its two chains
//! into sweep order, then runs the stack-based diagonal insertion of de
//! Berg et al., closing with a final fan from the last vertex.

use std::cmp::Ordering;

use crate::dcel::{Chain, Dcel, EdgeAssign, FaceId, HalfEdgeId, VertexId};
use crate::error::TriangulationResult;
use crate::math_utils::{oriented_angle, point};
use crate::sweep::VertexSweepOrder;

fn top_and_bottom_edges(dcel: &Dcel, face: FaceId) -> (HalfEdgeId, HalfEdgeId) {
    let order = VertexSweepOrder;
    let start = dcel.outer_component(face);
    let mut top = start;
    let mut bottom = start;

    for edge in dcel.half_edges_of_face(start) {
        if order.compare(dcel.position(dcel.origin(edge)), dcel.position(dcel.origin(top))) == Ordering::Less {
            top = edge;
        } else if order.compare(dcel.position(dcel.origin(bottom)), dcel.position(dcel.origin(edge))) == Ordering::Less {
            bottom = edge;
        }
    }

    (top, bottom)
}

fn label_chains(dcel: &mut Dcel, top: HalfEdgeId, bottom: HalfEdgeId) {
    let mut edge = top;
    loop {
        dcel.set_chain(dcel.origin(edge), Chain::Left);
        edge = dcel.next(edge);
        if edge == bottom {
            break;
        }
    }

    let mut edge = bottom;
    loop {
        dcel.set_chain(dcel.origin(edge), Chain::Right);
        edge = dcel.next(edge);
        if edge == top {
            break;
        }
    }
}

/// Merges the left chain (top chain order, FIFO) and the right chain
/// (bottom chain order, LIFO) into one vertex-sweep-ordered sequence.
fn sort_sweep_monotone(dcel: &Dcel, top: HalfEdgeId, bottom: HalfEdgeId) -> Vec<VertexId> {
    let mut queue = std::collections::VecDeque::new();
    let mut stack = Vec::new();

    let mut edge = top;
    loop {
        queue.push_back(dcel.origin(edge));
        edge = dcel.next(edge);
        if edge == bottom {
            break;
        }
    }

    let mut edge = bottom;
    loop {
        stack.push(dcel.origin(edge));
        edge = dcel.next(edge);
        if edge == top {
            break;
        }
    }

    let order = VertexSweepOrder;
    let mut merged = Vec::with_capacity(queue.len() + stack.len());

    while !queue.is_empty() && !stack.is_empty() {
        let front = *queue.front().unwrap();
        let top_of_stack = *stack.last().unwrap();
        if order.compare(dcel.position(front), dcel.position(top_of_stack)) == Ordering::Less {
            merged.push(front);
            queue.pop_front();
        } else {
            merged.push(top_of_stack);
            stack.pop();
        }
    }

    merged.extend(queue);
    while let Some(v) = stack.pop() {
        merged.push(v);
    }

    merged
}

/// Whether the diagonal from `vertex` to `popped` stays inside the polygon,
/// deduced from the angle it makes with the diagonal to the
/// previously-popped vertex.
fn is_inside(dcel: &Dcel, vertex: VertexId, vertex_chain: Chain, popped: VertexId, prev_popped: VertexId) -> bool {
    let v = dcel.position(vertex);
    let current_edge = dcel.position(popped) - v;
    let prev_edge = dcel.position(prev_popped) - v;
    let alpha = oriented_angle(prev_edge.normalize(), current_edge.normalize());

    if vertex_chain == Chain::Left {
        alpha <= 0.0
    } else {
        alpha >= 0.0
    }
}

/// Which vertex should keep its incident edge on the face still to be
/// processed, after adding the diagonal `origin -> destination`.
fn get_edge_assign(dcel: &Dcel, origin: VertexId, destination: VertexId) -> EdgeAssign {
    let origin_chain = dcel.chain(origin);
    let destination_chain = dcel.chain(destination);
    let origin_y = dcel.position(origin).y;
    let destination_y = dcel.position(destination).y;

    if origin_chain == destination_chain {
        return if origin_chain == Chain::Left {
            if origin_y > destination_y { EdgeAssign::Origin } else { EdgeAssign::Destination }
        } else if origin_y < destination_y {
            EdgeAssign::Origin
        } else {
            EdgeAssign::Destination
        };
    }

    if origin_chain == Chain::Left { EdgeAssign::Destination } else { EdgeAssign::Origin }
}

/// Reusable working state for `triangulate_monotone`.
#[derive(Default)]
pub struct MonotoneTriangulator {
    vertices: Vec<VertexId>,
    stack: Vec<VertexId>,
    pending: Vec<VertexId>,
}

impl MonotoneTriangulator {
    pub fn new() -> Self {
        MonotoneTriangulator::default()
    }

    /// Triangulates `face`, which must be y-monotone with every boundary
    /// vertex's incident edge lying on this face.
    pub fn execute(&mut self, dcel: &mut Dcel, face: FaceId) -> TriangulationResult<()> {
        let (top, bottom) = top_and_bottom_edges(dcel, face);
        label_chains(dcel, top, bottom);

        let merged = sort_sweep_monotone(dcel, top, bottom);
        self.vertices.clear();
        self.vertices.extend(merged);

        self.stack.clear();
        self.pending.clear();

        let n = self.vertices.len();
        self.stack.push(self.vertices[0]);
        self.stack.push(self.vertices[1]);

        for i in 2..n.saturating_sub(1) {
            let current = self.vertices[i];
            let current_chain = dcel.chain(current);
            let stack_top_chain = dcel.chain(*self.stack.last().expect("triangulation stack is never empty mid-pass"));

            if current_chain != stack_top_chain {
                while self.stack.len() > 1 {
                    self.pending.push(self.stack.pop().unwrap());
                }
                while let Some(vertex) = self.pending.pop() {
                    let assign = get_edge_assign(dcel, vertex, current);
                    let edge_v = dcel.incident_edge(vertex);
                    let edge_c = dcel.incident_edge(current);
                    dcel.add_diagonal(edge_v, edge_c, assign)?;
                }
                self.stack.clear();
                self.stack.push(self.vertices[i - 1]);
                self.stack.push(current);
            } else {
                let mut last_popped = self.stack.pop().expect("triangulation stack is never empty mid-pass");
                while let Some(&stack_top) = self.stack.last() {
                    if !is_inside(dcel, current, current_chain, stack_top, last_popped) {
                        break;
                    }
                    let assign = get_edge_assign(dcel, current, stack_top);
                    let edge_c = dcel.incident_edge(current);
                    let edge_top = dcel.incident_edge(stack_top);
                    dcel.add_diagonal(edge_c, edge_top, assign)?;
                    last_popped = self.stack.pop().unwrap();
                }
                self.stack.push(last_popped);
                self.stack.push(current);
            }
        }

        // Closing pass: fan the remaining stack vertices from the last one.
        self.stack.pop();
        self.pending.clear();
        while self.stack.len() > 1 {
            self.pending.push(self.stack.pop().unwrap());
        }

        let last = *self.vertices.last().expect("monotone face has at least one vertex");
        while let Some(vertex) = self.pending.pop() {
            let direction = dcel.direction(dcel.incident_edge(vertex)).normalize();
            let assign =
                if oriented_angle(point(0.0, 1.0), direction) > 0.0 { EdgeAssign::Origin } else { EdgeAssign::Destination };
            let edge_v = dcel.incident_edge(vertex);
            let edge_last = dcel.incident_edge(last);
            dcel.add_diagonal(edge_v, edge_last, assign)?;
        }

        Ok(())
    }
}

/// Triangulates `face`. Convenience wrapper around a one-shot
/// [`MonotoneTriangulator`] for callers that don't need to reuse scratch
/// buffers across faces.
pub fn triangulate_monotone(dcel: &mut Dcel, face: FaceId) -> TriangulationResult<()> {
    MonotoneTriangulator::new().execute(dcel, face)
}
