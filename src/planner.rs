//! The planner facade (§4.5) and the recursive route refiner (§4.4) that
//! sits behind it.

use num_traits::Float;

use crate::error::PlannerError;
use crate::graph::{VisibilityGraph, END, START};
use crate::search::shortest_path;
use crate::{Point, Polygon};

/// Recursion depth past which the refiner gives up and falls back to the
/// straight segment, rather than risk an unbounded recursion on a
/// pathological obstacle configuration.
pub const MAX_REFINE_DEPTH: u32 = 100;

/// Plans a polyline from `start` to `end` around `obstacles`.
///
/// Total: every input produces a polyline. `start == end` returns a
/// single-point route. An unreachable goal, or a recursion depth past
/// [`MAX_REFINE_DEPTH`], both fall back to the direct `[start, end]`
/// segment — callers that need a correctness guarantee under adversarial
/// obstacle sets should run [`crate::validate::safety`] on the result.
pub fn plan<T: Float + std::fmt::Debug>(
    start: Point<T>,
    end: Point<T>,
    obstacles: &[Polygon<T>],
) -> Vec<Point<T>> {
    if start == end {
        return vec![start];
    }
    refine(start, end, obstacles, 0)
}

/// Like [`plan`], but first validates every obstacle's invariants (`>= 3`
/// vertices, no coincident cyclically-consecutive vertices) and reports the
/// first violation instead of planning through it.
pub fn plan_checked<T: Float + std::fmt::Debug>(
    start: Point<T>,
    end: Point<T>,
    obstacles: &[Vec<Point<T>>],
) -> Result<Vec<Point<T>>, PlannerError> {
    let mut polygons = Vec::with_capacity(obstacles.len());
    for (index, vertices) in obstacles.iter().enumerate() {
        Polygon::validate(vertices, index)?;
        polygons.push(Polygon::new(vertices.clone()).expect("just validated"));
    }
    Ok(plan(start, end, &polygons))
}

/// Re-plans each edge of the provisional visibility-graph path against the
/// full obstacle universe, recursively, until every segment of the result
/// has been validated against every obstacle at least once.
fn refine<T: Float + std::fmt::Debug>(
    start: Point<T>,
    end: Point<T>,
    obstacles: &[Polygon<T>],
    depth: u32,
) -> Vec<Point<T>> {
    if depth > MAX_REFINE_DEPTH {
        log::warn!(
            "refine: depth cap ({MAX_REFINE_DEPTH}) exceeded for segment {start:?} -> {end:?}; \
             falling back to straight segment"
        );
        return vec![start, end];
    }

    let graph = VisibilityGraph::build(start, end, obstacles);
    let path = match shortest_path(&graph) {
        Some(path) => path,
        None => return vec![start, end],
    };

    if path.len() == 2 {
        debug_assert_eq!(path[0], START);
        debug_assert_eq!(path[1], END);
        return vec![start, end];
    }

    let nodes = graph.nodes();
    let mut route = Vec::new();
    for window in path.windows(2) {
        let (a, b) = (nodes[window[0]], nodes[window[1]]);
        let mut segment = refine(a, b, obstacles, depth + 1);
        if !route.is_empty() {
            segment.remove(0); // drop the duplicated join point
        }
        route.append(&mut segment);
    }

    route
}
