//! Exact 2D predicates: orientation, segment intersection classification,
//! and point-in-polygon containment. Every function here is pure and
//! deterministic; callers within the same `plan` invocation get consistent
//! answers on shared inputs.

use num_traits::Float;

use crate::Point;

/// Severity of an intersection between a segment and a polygon (or another
/// segment). Ordered `None < Touch < Cross` so callers can fold several
/// per-edge results with a simple `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intersection {
    /// The segment and the polygon/segment share no points.
    None,
    /// They meet only at a shared endpoint/vertex.
    Touch,
    /// The segment enters the polygon's interior (or the two segments
    /// properly cross, including collinear overlap).
    Cross,
}

/// Signed area of the triangle `(A, B, C)`, times two: the cross product of
/// `(B - A)` and `(C - A)`. Positive when `C` is left of the directed line
/// `A -> B`, negative when right, zero when collinear.
pub fn orientation<T: Float>(a: Point<T>, b: Point<T>, c: Point<T>) -> T {
    let ab_x = b.x - a.x;
    let ab_y = b.y - a.y;
    let ac_x = c.x - a.x;
    let ac_y = c.y - a.y;
    ab_x * ac_y - ab_y * ac_x
}

/// Lexicographic order on coordinates: `(x, y)` tuple order.
fn lex_le<T: Float>(p: Point<T>, q: Point<T>) -> bool {
    p.x < q.x || (p.x == q.x && p.y <= q.y)
}

fn lex_lt<T: Float>(p: Point<T>, q: Point<T>) -> bool {
    p.x < q.x || (p.x == q.x && p.y < q.y)
}

/// Canonicalizes a segment so its first endpoint is lexicographically
/// `<=` the second.
fn canonical<T: Float>(a: Point<T>, b: Point<T>) -> (Point<T>, Point<T>) {
    if lex_le(a, b) {
        (a, b)
    } else {
        (b, a)
    }
}

/// Classifies the intersection of segments `L1 = (A, B)` and `L2 = (C, D)`.
///
/// Shared-endpoint configurations classify as `Cross` at this layer — the
/// distinction between "crosses an interior" and "touches at a shared
/// vertex" is made one layer up, by [`segment_intersects_polygon`].
pub fn segments_intersect<T: Float>(l1: (Point<T>, Point<T>), l2: (Point<T>, Point<T>)) -> Intersection {
    let (a, b) = canonical(l1.0, l1.1);
    let (c, d) = canonical(l2.0, l2.1);

    let abc = orientation(a, b, c);
    let abd = orientation(a, b, d);
    let cda = orientation(c, d, a);
    let cdb = orientation(c, d, b);

    let zero = T::zero();

    if abc == zero && abd == zero {
        // Collinear: all four points lie on one line.
        if lex_lt(b, c) || lex_lt(d, a) {
            Intersection::None
        } else if b == c || d == a {
            Intersection::Touch
        } else {
            Intersection::Cross
        }
    } else if abc * abd <= zero && cda * cdb <= zero {
        Intersection::Cross
    } else {
        Intersection::None
    }
}

/// Classifies the intersection of segment `l` with polygon `polygon`
/// (vertices in cyclic order; edge *i* connects vertex *i-1* to vertex *i*).
///
/// An endpoint of `l` coinciding with a polygon vertex upgrades the result
/// to at least `Touch` without examining that edge's interior crossing.
pub fn segment_intersects_polygon<T: Float>(l: (Point<T>, Point<T>), polygon: &[Point<T>]) -> Intersection {
    let n = polygon.len();
    let mut result = Intersection::None;

    for i in 0..n {
        let prev = polygon[(i + n - 1) % n];
        let curr = polygon[i];

        if l.0 == curr || l.1 == curr || l.0 == prev || l.1 == prev {
            result = result.max(Intersection::Touch);
            continue;
        }

        if segments_intersect(l, (prev, curr)) == Intersection::Cross {
            result = Intersection::Cross;
        }
    }

    result
}

/// Ray-casts from `q` in direction `(+inf, +1)` (a horizontal ray tilted by
/// one unit in y, to dodge degenerate hits exactly at vertices) and counts
/// polygon edges the ray crosses. Odd count means `q` is inside.
pub fn point_in_polygon<T: Float>(polygon: &[Point<T>], q: Point<T>) -> bool {
    // A large finite coordinate stands in for "+infinity": far enough past
    // any realistic obstacle that it never participates in a genuine
    // collinear overlap, while staying finite so the cross-product math in
    // `orientation` never produces NaN the way true infinity can.
    let big = T::from(1.0e18_f64).unwrap_or_else(T::max_value);
    let far = Point::new(big, q.y + T::one());
    let ray = (q, far);

    let n = polygon.len();
    let mut count = 0usize;
    for i in 0..n {
        let prev = polygon[(i + n - 1) % n];
        let curr = polygon[i];
        if segments_intersect(ray, (prev, curr)) != Intersection::None {
            count += 1;
        }
    }

    count % 2 == 1
}
