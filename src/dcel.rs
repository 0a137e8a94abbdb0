//! The doubly connected edge list: storage, handles, initialization, the
//! `add_diagonal` family of operations, iterators and triangle extraction.
//!
//! Storage lives in three parallel arrays owned by [`Dcel`] (one per
//! attribute, arena + index style, see the crate-level design notes).
//! [`VertexId`], [`HalfEdgeId`] and [`FaceId`] are small `Copy` indices into
//! those arrays; [`VertexRef`], [`HalfEdgeRef`] and [`FaceRef`] pair an id
//! with a `&Dcel` for read-only, ergonomic traversal (`edge.next().origin()`).
//! Mutating operations go through `&mut Dcel` and plain ids instead, since a
//! borrowed ref handle can't coexist with a mutable borrow of the arena it
//! points into.

use crate::error::{SplitError, TriangulationError, TriangulationResult};
use crate::math_utils::{winding_of, Point, Point3, Winding};

/// Identifies a vertex in a [`Dcel`]. Cheap to copy, stable across
/// `add_diagonal` calls (never reused, never invalidated).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct VertexId(pub(crate) u32);

/// Identifies a half-edge in a [`Dcel`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct HalfEdgeId(pub(crate) u32);

/// Identifies a face in a [`Dcel`]. Index 0 is always the outer face; index
/// 1, once present, is always the original inner face.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct FaceId(pub(crate) u32);

impl VertexId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl HalfEdgeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl FaceId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Identifies which of the two monotone chains a vertex belongs to, during
/// `triangulate_monotone`. Transient scratch state, reset on every pass.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Chain {
    #[default]
    None,
    Left,
    Right,
}

/// Which vertex's incident edge to reassign after `add_diagonal` splits a
/// face, so a vertex's incident edge keeps lying on a specified sub-face.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum EdgeAssign {
    #[default]
    None,
    Origin,
    Destination,
}

struct VertexData {
    position: Point,
    chain: Chain,
    incident_edge: HalfEdgeId,
}

struct HalfEdgeData {
    origin: VertexId,
    incident_face: FaceId,
    twin: HalfEdgeId,
    prev: HalfEdgeId,
    next: HalfEdgeId,
}

struct FaceData {
    outer_component: HalfEdgeId,
}

/// A mutable doubly connected edge list. Created empty, initialized exactly
/// once from a CCW vertex sequence, then only ever grown (via
/// `add_diagonal`); nothing is ever removed.
#[derive(Default)]
pub struct Dcel {
    vertices: Vec<VertexData>,
    edges: Vec<HalfEdgeData>,
    faces: Vec<FaceData>,
}

impl Dcel {
    pub fn new() -> Self {
        Dcel { vertices: Vec::new(), edges: Vec::new(), faces: Vec::new() }
    }

    /// Index of the unbounded outer face. Always 0.
    #[inline]
    pub fn outer_face_index() -> FaceId {
        FaceId(0)
    }

    /// Index of the original bounded face. Always 1, once initialized.
    #[inline]
    pub fn inner_face_index() -> FaceId {
        FaceId(1)
    }

    fn is_initialized(&self) -> bool {
        self.faces.len() >= 2
    }

    /// The bounded face created by `init_ccw`. Fails with `Uninitialized`
    /// if `init_ccw` has not run yet.
    pub fn inner_face(&self) -> TriangulationResult<FaceId> {
        if !self.is_initialized() {
            return Err(TriangulationError::Uninitialized);
        }
        Ok(Self::inner_face_index())
    }

    /// Initializes the DCEL from a counter-clockwise vertex sequence of
    /// length >= 3. Allocates `n` vertices, `2n` half-edges and 2 faces.
    ///
    /// Fails with `NotCounterClockwise` if the signed area of `vertices` is
    /// not strictly positive (checked whenever the `strict` feature is on,
    /// or always in debug builds).
    pub fn init_ccw(&mut self, vertices: &[Point]) -> TriangulationResult<()> {
        if cfg!(any(feature = "strict", debug_assertions))
            && winding_of(vertices) != Winding::CounterClockwise
        {
            log::debug!("init_ccw: input vertices are not counter-clockwise");
            return Err(TriangulationError::NotCounterClockwise);
        }

        let n = vertices.len();
        self.vertices.clear();
        self.vertices.reserve(n);
        self.edges.clear();
        self.edges.resize_with(2 * n, || HalfEdgeData {
            origin: VertexId(0),
            incident_face: FaceId(0),
            twin: HalfEdgeId(0),
            prev: HalfEdgeId(0),
            next: HalfEdgeId(0),
        });
        self.faces.clear();
        self.faces.resize_with(2, || FaceData { outer_component: HalfEdgeId(0) });

        self.faces[0].outer_component = HalfEdgeId(n as u32);
        self.faces[1].outer_component = HalfEdgeId(0);

        for i in 0..n {
            let next_i = (i + 1) % n;
            let prev_i = (i + n - 1) % n;

            self.vertices.push(VertexData {
                position: vertices[i],
                chain: Chain::None,
                incident_edge: HalfEdgeId(i as u32),
            });

            self.edges[i] = HalfEdgeData {
                origin: VertexId(i as u32),
                incident_face: FaceId(1),
                twin: HalfEdgeId((i + n) as u32),
                prev: HalfEdgeId(prev_i as u32),
                next: HalfEdgeId(next_i as u32),
            };

            self.edges[i + n] = HalfEdgeData {
                origin: VertexId(next_i as u32),
                incident_face: FaceId(0),
                twin: HalfEdgeId(i as u32),
                prev: HalfEdgeId((prev_i + n) as u32),
                next: HalfEdgeId((next_i + n) as u32),
            };
        }

        Ok(())
    }

    /// Initializes from a sequence of 3D points; the z coordinate is
    /// dropped.
    pub fn init_ccw_3d(&mut self, vertices: &[Point3]) -> TriangulationResult<()> {
        let flat: Vec<Point> = vertices.iter().map(|&p| Point::from(p)).collect();
        self.init_ccw(&flat)
    }

    // -- Vertex attribute access -------------------------------------------------

    #[inline]
    pub fn position(&self, v: VertexId) -> Point {
        self.vertices[v.index()].position
    }

    #[inline]
    pub fn chain(&self, v: VertexId) -> Chain {
        self.vertices[v.index()].chain
    }

    #[inline]
    pub fn set_chain(&mut self, v: VertexId, chain: Chain) {
        self.vertices[v.index()].chain = chain;
    }

    #[inline]
    pub fn incident_edge(&self, v: VertexId) -> HalfEdgeId {
        self.vertices[v.index()].incident_edge
    }

    #[inline]
    pub fn set_incident_edge(&mut self, v: VertexId, e: HalfEdgeId) {
        self.vertices[v.index()].incident_edge = e;
    }

    // -- Half-edge attribute access ----------------------------------------------

    #[inline]
    pub fn twin(&self, e: HalfEdgeId) -> HalfEdgeId {
        self.edges[e.index()].twin
    }

    #[inline]
    pub fn next(&self, e: HalfEdgeId) -> HalfEdgeId {
        self.edges[e.index()].next
    }

    #[inline]
    pub fn prev(&self, e: HalfEdgeId) -> HalfEdgeId {
        self.edges[e.index()].prev
    }

    #[inline]
    pub fn origin(&self, e: HalfEdgeId) -> VertexId {
        self.edges[e.index()].origin
    }

    #[inline]
    pub fn destination(&self, e: HalfEdgeId) -> VertexId {
        self.origin(self.twin(e))
    }

    #[inline]
    pub fn incident_face(&self, e: HalfEdgeId) -> FaceId {
        self.edges[e.index()].incident_face
    }

    /// Vector from `e`'s origin to its destination.
    #[inline]
    pub fn direction(&self, e: HalfEdgeId) -> Point {
        self.position(self.destination(e)) - self.position(self.origin(e))
    }

    fn set_origin(&mut self, e: HalfEdgeId, v: VertexId) {
        self.edges[e.index()].origin = v;
    }

    fn set_twin(&mut self, e: HalfEdgeId, twin: HalfEdgeId) {
        self.edges[e.index()].twin = twin;
    }

    fn set_prev(&mut self, e: HalfEdgeId, prev: HalfEdgeId) {
        self.edges[e.index()].prev = prev;
    }

    fn set_next(&mut self, e: HalfEdgeId, next: HalfEdgeId) {
        self.edges[e.index()].next = next;
    }

    fn set_incident_face(&mut self, e: HalfEdgeId, f: FaceId) {
        self.edges[e.index()].incident_face = f;
    }

    // -- Face attribute access ----------------------------------------------

    #[inline]
    pub fn outer_component(&self, f: FaceId) -> HalfEdgeId {
        self.faces[f.index()].outer_component
    }

    fn set_outer_component(&mut self, f: FaceId, e: HalfEdgeId) {
        self.faces[f.index()].outer_component = e;
    }

    fn create_edge(&mut self) -> HalfEdgeId {
        let id = HalfEdgeId(self.edges.len() as u32);
        self.edges.push(HalfEdgeData {
            origin: VertexId(0),
            incident_face: FaceId(0),
            twin: HalfEdgeId(0),
            prev: HalfEdgeId(0),
            next: HalfEdgeId(0),
        });
        id
    }

    fn create_face(&mut self) -> FaceId {
        let id = FaceId(self.faces.len() as u32);
        self.faces.push(FaceData { outer_component: HalfEdgeId(0) });
        id
    }

    /// The winding order of one face's boundary, in world coordinates.
    pub fn winding_order_of_face(&self, f: FaceId) -> Winding {
        let positions: Vec<Point> =
            self.half_edges_of_face(self.outer_component(f)).map(|e| self.position(self.origin(e))).collect();
        winding_of(&positions)
    }

    fn half_edge_count_of_face(&self, f: FaceId) -> usize {
        self.half_edges_of_face(self.outer_component(f)).count()
    }

    // -- Iterators -----------------------------------------------------------

    /// Iterates the boundary of one face cycle, starting at `start`,
    /// visiting each half-edge of the cycle exactly once.
    pub fn half_edges_of_face(&self, start: HalfEdgeId) -> HalfEdgesIter<'_> {
        HalfEdgesIter { dcel: self, start, current: start, done: false }
    }

    /// Iterates every bounded face (skips the outer face).
    pub fn faces_iter(&self) -> impl Iterator<Item = FaceId> + '_ {
        (1..self.faces.len() as u32).map(FaceId)
    }

    /// Iterates one half-edge per bounded face incident to `v`, walking the
    /// vertex fan via `prev().twin()` and skipping the outer face.
    pub fn faces_on_vertex_iter(&self, v: VertexId) -> FacesOnVertexIter<'_> {
        let start = self.incident_edge(v);
        FacesOnVertexIter { dcel: self, start, current: start, done: false }
    }

    // -- Diagonals -------------------------------------------------------------

    fn can_split(&self, a: HalfEdgeId, b: HalfEdgeId) -> Result<(), SplitError> {
        if a == b {
            log::debug!("add_diagonal: the two edges are equal");
            return Err(SplitError::EdgesAreEqual);
        }

        if self.incident_face(a) != self.incident_face(b) {
            log::debug!("add_diagonal: edges are not on the same face");
            return Err(SplitError::DifferentFaces);
        }

        if !cfg!(any(feature = "strict", debug_assertions)) {
            return Ok(());
        }

        if self.incident_face(a) == Self::outer_face_index() {
            log::debug!("add_diagonal: cannot split the outer face");
            return Err(SplitError::OuterFace);
        }

        if self.origin(a) == self.destination(b) || self.destination(a) == self.origin(b) {
            log::debug!("add_diagonal: edges are already adjacent");
            return Err(SplitError::AlreadyAdjacent);
        }

        let mut e = a;
        loop {
            e = self.next(e);
            if e == b {
                return Ok(());
            }
            if e == a {
                break;
            }
        }

        log::debug!("add_diagonal: edges are not on the same cycle");
        Err(SplitError::NotOnSameCycle)
    }

    fn split_face_internal(&mut self, a: HalfEdgeId, b: HalfEdgeId, assign: EdgeAssign) -> HalfEdgeId {
        let face = self.incident_face(a);
        let old_prev_a = self.prev(a);
        let old_prev_b = self.prev(b);

        let h = self.create_edge();
        self.set_origin(h, self.origin(a));
        self.set_incident_face(h, face);
        self.set_outer_component(face, h);

        let h_twin = self.create_edge();
        self.set_origin(h_twin, self.origin(b));
        let new_face = self.create_face();
        self.set_outer_component(new_face, h_twin);

        self.set_twin(h, h_twin);
        self.set_twin(h_twin, h);

        self.set_prev(h, old_prev_a);
        self.set_next(h, b);
        self.set_prev(h_twin, old_prev_b);
        self.set_next(h_twin, a);

        self.set_next(old_prev_a, h);
        self.set_next(old_prev_b, h_twin);
        self.set_prev(b, h);
        self.set_prev(a, h_twin);

        match assign {
            EdgeAssign::None => {}
            EdgeAssign::Origin => {
                let o = self.origin(h);
                self.set_incident_edge(o, h);
            }
            EdgeAssign::Destination => {
                let o = self.origin(h_twin);
                self.set_incident_edge(o, h_twin);
            }
        }

        let mut e = h_twin;
        loop {
            self.set_incident_face(e, new_face);
            e = self.next(e);
            if e == h_twin {
                break;
            }
        }
        self.set_incident_face(h, face);

        h
    }

    /// Splits the bounded face shared by `a` and `b` by adding one pair of
    /// half-edges between them. Returns the new half-edge on `a`'s side of
    /// the split; its origin is `a`'s origin, and its twin's origin is `b`'s
    /// origin.
    pub fn add_diagonal(&mut self, a: HalfEdgeId, b: HalfEdgeId, assign: EdgeAssign) -> TriangulationResult<HalfEdgeId> {
        self.can_split(a, b)?;
        let half_edges_before = if cfg!(debug_assertions) { self.half_edge_count_of_face(self.incident_face(a)) } else { 0 };

        let new_edge = self.split_face_internal(a, b, assign);

        debug_assert_eq!(
            half_edges_before + 2,
            self.half_edge_count_of_face(self.incident_face(new_edge))
                + self.half_edge_count_of_face(self.incident_face(self.twin(new_edge))),
            "half-edge count mismatch after split"
        );

        Ok(new_edge)
    }

    /// Splits the bounded face shared by `edge` and `vertex`, searching
    /// `vertex`'s incident faces for the one `edge` lies on.
    pub fn add_diagonal_edge_vertex(&mut self, edge: HalfEdgeId, vertex: VertexId, assign: EdgeAssign) -> TriangulationResult<HalfEdgeId> {
        let target_face = self.incident_face(edge);
        let candidates: Vec<HalfEdgeId> = self.faces_on_vertex_iter(vertex).collect();
        for candidate in candidates {
            if self.incident_face(candidate) == target_face {
                return self.add_diagonal(edge, candidate, assign);
            }
        }
        log::debug!("add_diagonal: vertex has no face in common with edge");
        Err(TriangulationError::NoSharedFace)
    }

    /// Splits the bounded face shared by `vertex` and `edge`, searching
    /// `vertex`'s incident faces for the one `edge` lies on.
    pub fn add_diagonal_vertex_edge(&mut self, vertex: VertexId, edge: HalfEdgeId, assign: EdgeAssign) -> TriangulationResult<HalfEdgeId> {
        let target_face = self.incident_face(edge);
        let candidates: Vec<HalfEdgeId> = self.faces_on_vertex_iter(vertex).collect();
        for candidate in candidates {
            if self.incident_face(candidate) == target_face {
                return self.add_diagonal(candidate, edge, assign);
            }
        }
        log::debug!("add_diagonal: vertex has no face in common with edge");
        Err(TriangulationError::NoSharedFace)
    }

    /// Searches for a bounded face shared by `a` and `b`, walking the fan
    /// around `a` and, for each of its incident faces, the fan around `b`.
    pub fn add_diagonal_vertices(&mut self, a: VertexId, b: VertexId, assign: EdgeAssign) -> TriangulationResult<HalfEdgeId> {
        let edges_a: Vec<HalfEdgeId> = self.faces_on_vertex_iter(a).collect();
        let edges_b: Vec<HalfEdgeId> = self.faces_on_vertex_iter(b).collect();
        for &edge_a in &edges_a {
            let face = self.incident_face(edge_a);
            for &edge_b in &edges_b {
                if self.incident_face(edge_b) == face {
                    return self.add_diagonal(edge_a, edge_b, assign);
                }
            }
        }
        log::debug!("add_diagonal: vertices share no bounded face");
        Err(TriangulationError::NoSharedFace)
    }

    /// Writes one triangle per bounded face, in face-index order, as three
    /// origin-vertex indices per triangle, into `out_vertices`/`out_indices`
    /// (cleared and repopulated on each call, to allow buffer reuse across
    /// triangulations).
    pub fn extract_triangles(&self, out_vertices: &mut Vec<Point3>, out_indices: &mut Vec<u32>) -> TriangulationResult<()> {
        if !self.is_initialized() {
            return Err(TriangulationError::Uninitialized);
        }

        out_indices.clear();
        out_indices.reserve((self.faces.len() - 1) * 3);

        for i in 1..self.faces.len() {
            let f = FaceId(i as u32);
            let e0 = self.outer_component(f);
            let e1 = self.next(e0);
            let e2 = self.next(e1);
            out_indices.push(self.origin(e0).0);
            out_indices.push(self.origin(e1).0);
            out_indices.push(self.origin(e2).0);

            if cfg!(any(feature = "strict", debug_assertions)) && self.next(e2) != e0 {
                log::warn!("extract_triangles: face {i} is not a triangle");
                return Err(TriangulationError::NotTriangulated);
            }
        }

        out_vertices.clear();
        out_vertices.extend(self.vertices.iter().map(|v| Point3::from(v.position)));

        Ok(())
    }

    // -- Ergonomic read-only handles ------------------------------------------

    pub fn vertex(&self, id: VertexId) -> VertexRef<'_> {
        VertexRef { dcel: self, id }
    }

    pub fn half_edge(&self, id: HalfEdgeId) -> HalfEdgeRef<'_> {
        HalfEdgeRef { dcel: self, id }
    }

    pub fn face(&self, id: FaceId) -> FaceRef<'_> {
        FaceRef { dcel: self, id }
    }
}

/// Walks the boundary of a face cycle exactly once.
pub struct HalfEdgesIter<'d> {
    dcel: &'d Dcel,
    start: HalfEdgeId,
    current: HalfEdgeId,
    done: bool,
}

impl Iterator for HalfEdgesIter<'_> {
    type Item = HalfEdgeId;

    fn next(&mut self) -> Option<HalfEdgeId> {
        if self.done {
            return None;
        }
        let current = self.current;
        self.current = self.dcel.next(current);
        if self.current == self.start {
            self.done = true;
        }
        Some(current)
    }
}

/// Walks one half-edge per bounded face incident to a vertex.
pub struct FacesOnVertexIter<'d> {
    dcel: &'d Dcel,
    start: HalfEdgeId,
    current: HalfEdgeId,
    done: bool,
}

impl Iterator for FacesOnVertexIter<'_> {
    type Item = HalfEdgeId;

    fn next(&mut self) -> Option<HalfEdgeId> {
        loop {
            if self.done {
                return None;
            }
            let edge = self.current;
            self.current = self.dcel.twin(self.dcel.prev(edge));
            if self.current == self.start {
                self.done = true;
            }
            if self.dcel.incident_face(edge) != Dcel::outer_face_index() {
                return Some(edge);
            }
        }
    }
}

macro_rules! ref_handle {
    ($name:ident, $id:ty) => {
        #[derive(Copy, Clone)]
        pub struct $name<'d> {
            dcel: &'d Dcel,
            id: $id,
        }

        impl $name<'_> {
            #[inline]
            pub fn id(&self) -> $id {
                self.id
            }
        }

        impl PartialEq for $name<'_> {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id
            }
        }
        impl Eq for $name<'_> {}
    };
}

ref_handle!(VertexRef, VertexId);
ref_handle!(HalfEdgeRef, HalfEdgeId);
ref_handle!(FaceRef, FaceId);

impl<'d> VertexRef<'d> {
    #[inline]
    pub fn position(&self) -> Point {
        self.dcel.position(self.id)
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.position().x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.position().y
    }

    #[inline]
    pub fn chain(&self) -> Chain {
        self.dcel.chain(self.id)
    }

    #[inline]
    pub fn incident_edge(&self) -> HalfEdgeRef<'d> {
        self.dcel.half_edge(self.dcel.incident_edge(self.id))
    }
}

impl<'d> HalfEdgeRef<'d> {
    #[inline]
    pub fn twin(&self) -> HalfEdgeRef<'d> {
        self.dcel.half_edge(self.dcel.twin(self.id))
    }

    #[inline]
    pub fn next(&self) -> HalfEdgeRef<'d> {
        self.dcel.half_edge(self.dcel.next(self.id))
    }

    #[inline]
    pub fn prev(&self) -> HalfEdgeRef<'d> {
        self.dcel.half_edge(self.dcel.prev(self.id))
    }

    #[inline]
    pub fn origin(&self) -> VertexRef<'d> {
        self.dcel.vertex(self.dcel.origin(self.id))
    }

    #[inline]
    pub fn destination(&self) -> VertexRef<'d> {
        self.dcel.vertex(self.dcel.destination(self.id))
    }

    #[inline]
    pub fn incident_face(&self) -> FaceRef<'d> {
        self.dcel.face(self.dcel.incident_face(self.id))
    }

    #[inline]
    pub fn direction(&self) -> Point {
        self.dcel.direction(self.id)
    }
}

impl<'d> FaceRef<'d> {
    #[inline]
    pub fn outer_component(&self) -> HalfEdgeRef<'d> {
        self.dcel.half_edge(self.dcel.outer_component(self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math_utils::point;

    fn unit_square() -> Dcel {
        let mut dcel = Dcel::new();
        dcel.init_ccw(&[point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0), point(0.0, 1.0)]).unwrap();
        dcel
    }

    #[test]
    fn init_allocates_expected_storage() {
        let dcel = unit_square();
        assert_eq!(dcel.vertices.len(), 4);
        assert_eq!(dcel.edges.len(), 8);
        assert_eq!(dcel.faces.len(), 2);
    }

    #[test]
    fn rejects_clockwise_input() {
        let mut dcel = Dcel::new();
        let cw = [point(0.0, 0.0), point(0.0, 1.0), point(1.0, 1.0), point(1.0, 0.0)];
        assert_eq!(dcel.init_ccw(&cw), Err(TriangulationError::NotCounterClockwise));
    }

    #[test]
    fn twin_symmetry_and_cycles() {
        let dcel = unit_square();
        for i in 0..8 {
            let e = HalfEdgeId(i);
            assert_eq!(dcel.twin(dcel.twin(e)), e);
            assert_ne!(dcel.twin(e), e);
            assert_eq!(dcel.next(dcel.prev(e)), e);
            assert_eq!(dcel.prev(dcel.next(e)), e);
        }
    }

    #[test]
    fn inner_face_is_ccw_outer_is_cw() {
        let dcel = unit_square();
        assert_eq!(dcel.winding_order_of_face(Dcel::inner_face_index()), Winding::CounterClockwise);
        assert_eq!(dcel.winding_order_of_face(Dcel::outer_face_index()), Winding::Clockwise);
    }

    #[test]
    fn add_diagonal_rejects_adjacent_vertices() {
        let mut dcel = unit_square();
        let v0 = VertexId(0);
        let v1 = VertexId(1);
        let err = dcel.add_diagonal_vertices(v0, v1, EdgeAssign::None).unwrap_err();
        assert_eq!(err, TriangulationError::Split(SplitError::AlreadyAdjacent));
    }

    #[test]
    fn add_diagonal_rejects_outer_face() {
        let mut dcel = unit_square();
        // The two outer half-edges opposite v0 and v2's inner edges.
        let e0 = HalfEdgeId(0 + 4);
        let e2 = HalfEdgeId(2 + 4);
        let err = dcel.add_diagonal(e0, e2, EdgeAssign::None).unwrap_err();
        assert_eq!(err, TriangulationError::Split(SplitError::OuterFace));
    }

    #[test]
    fn add_diagonal_splits_square_into_two_triangles() {
        let mut dcel = unit_square();
        let v0 = VertexId(0);
        let v2 = VertexId(2);
        dcel.add_diagonal_vertices(v0, v2, EdgeAssign::None).unwrap();

        let faces: Vec<FaceId> = dcel.faces_iter().collect();
        assert_eq!(faces.len(), 2);
        for f in faces {
            assert_eq!(dcel.half_edges_of_face(dcel.outer_component(f)).count(), 3);
        }
    }

    #[test]
    fn faces_on_vertex_skips_outer_face() {
        let mut dcel = Dcel::new();
        dcel.init_ccw(&[
            point(0.0, 0.0),
            point(1.0, 0.0),
            point(2.0, 1.0),
            point(1.0, 1.0),
            point(0.0, 1.0),
        ])
        .unwrap();
        dcel.add_diagonal_vertices(VertexId(0), VertexId(2), EdgeAssign::None).unwrap();

        let count = dcel.faces_on_vertex_iter(VertexId(0)).count();
        assert_eq!(count, 2);
    }

    #[test]
    fn extract_triangles_on_triangle_is_trivial() {
        let mut dcel = Dcel::new();
        dcel.init_ccw(&[point(0.0, 0.0), point(1.0, 0.0), point(0.0, 1.0)]).unwrap();
        let mut verts = Vec::new();
        let mut idx = Vec::new();
        dcel.extract_triangles(&mut verts, &mut idx).unwrap();
        assert_eq!(verts.len(), 3);
        assert_eq!(idx, vec![0, 1, 2]);
    }

    #[test]
    fn extract_triangles_fails_before_init() {
        let dcel = Dcel::new();
        let mut verts = Vec::new();
        let mut idx = Vec::new();
        assert_eq!(dcel.extract_triangles(&mut verts, &mut idx), Err(TriangulationError::Uninitialized));
    }
}
