//! 2D point/vector types and the geometry primitives the sweep passes are
//! built on: the signed cross product, signed polygon area, oriented angle
//! between two vectors, and the sweep-line/segment intersection test.

/// A point (or vector) in the plane.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.square_length().sqrt()
    }

    #[inline]
    pub fn square_length(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return self;
        }
        Point::new(self.x / len, self.y / len)
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }
}

impl core::ops::Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl core::ops::Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[inline]
pub const fn point(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

/// A point with a (caller-supplied, otherwise ignored) z component.
///
/// Accepted on input for caller convenience; the z coordinate is dropped.
/// Produced on output by `extract_triangles`, with z always 0.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Point> for Point3 {
    #[inline]
    fn from(p: Point) -> Self {
        Point3 { x: p.x, y: p.y, z: 0.0 }
    }
}

impl From<Point3> for Point {
    #[inline]
    fn from(p: Point3) -> Self {
        Point::new(p.x, p.y)
    }
}

/// The 2D cross product `a.x * b.y - b.x * a.y`.
///
/// Positive when `b` is a counter-clockwise rotation of `a`.
#[inline]
pub fn cross(a: Point, b: Point) -> f32 {
    a.x * b.y - b.x * a.y
}

/// Twice the signed area of the polygon described by `vertices`.
///
/// Positive for a counter-clockwise polygon, negative for clockwise, zero
/// for a degenerate (collinear or self-cancelling) one.
pub fn signed_area(vertices: &[Point]) -> f32 {
    let len = vertices.len();
    if len < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..len {
        let p1 = vertices[i];
        let p2 = vertices[(i + 1) % len];
        sum += (p2.x - p1.x) * (p2.y + p1.y);
    }

    // The shoelace sum above is positive for clockwise loops in the usual
    // (x right, y up) convention; negate so positive means CCW, matching
    // the rest of the crate's convention (cross product sign).
    -sum
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
    Undefined,
}

pub fn winding_of(vertices: &[Point]) -> Winding {
    let area = signed_area(vertices);
    if area > 0.0 {
        Winding::CounterClockwise
    } else if area < 0.0 {
        Winding::Clockwise
    } else {
        Winding::Undefined
    }
}

/// The oriented angle from unit vector `a` to unit vector `b`, in
/// `(-pi, pi]`. Positive means `b` is a counter-clockwise rotation of `a`.
#[inline]
pub fn oriented_angle(a: Point, b: Point) -> f32 {
    a.x.mul_add(b.y, -(b.x * a.y)).atan2(a.dot(b))
}

/// Intersection of segment `(origin, destination)` with the horizontal line
/// `y = sweep_y`.
///
/// Returns `None` when the parametric intersection falls outside `[0, 1]`.
/// Endpoints exactly on the sweep line are tolerated (returned as found).
pub fn sweep_intersection(origin: Point, destination: Point, sweep_y: f32) -> Option<Point> {
    let r = (origin.y - sweep_y) / (origin.y - destination.y);
    if !(0.0..=1.0).contains(&r) {
        return None;
    }
    Some(lerp(origin, destination, r))
}

#[inline]
fn lerp(a: Point, b: Point, t: f32) -> Point {
    Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}
