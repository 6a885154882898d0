//! A*-style shortest-path search over a [`VisibilityGraph`], with a
//! Euclidean heuristic to the goal.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use num_traits::Float;

use crate::graph::{VisibilityGraph, END, START};
use crate::Point;

#[derive(Clone, Copy)]
struct SearchNode<T> {
    vertex: usize,
    g_score: T,
    f_score: T,
}

impl<T: Float> PartialEq for SearchNode<T> {
    fn eq(&self, other: &Self) -> bool {
        self.f_score == other.f_score
    }
}
impl<T: Float> Eq for SearchNode<T> {}

impl<T: Float> PartialOrd for SearchNode<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Float> Ord for SearchNode<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so `BinaryHeap` (a max-heap) pops the smallest f-score
        // first.
        other
            .f_score
            .partial_cmp(&self.f_score)
            .unwrap_or(Ordering::Equal)
    }
}

/// Runs A* from [`START`] to [`END`] over `graph`, returning the node-index
/// path `start = x0, x1, ..., xk = end` if one exists.
pub fn shortest_path<T: Float>(graph: &VisibilityGraph<T>) -> Option<Vec<usize>> {
    if graph.is_empty() {
        return None;
    }

    let n = graph.len();
    let mut g_score = vec![None::<T>; n];
    let mut came_from = vec![None::<usize>; n];

    let goal = graph.nodes()[END];
    let heuristic = |v: Point<T>| v.distance(goal);

    let mut open = BinaryHeap::new();
    g_score[START] = Some(T::zero());
    open.push(SearchNode {
        vertex: START,
        g_score: T::zero(),
        f_score: heuristic(graph.nodes()[START]),
    });

    while let Some(current) = open.pop() {
        // Stale entry: a better path to this vertex was already found.
        if Some(current.g_score) != g_score[current.vertex] {
            continue;
        }

        if current.vertex == END {
            return Some(reconstruct(&came_from, END));
        }

        for &neighbor in graph.neighbors(current.vertex) {
            let tentative_g =
                current.g_score + graph.nodes()[current.vertex].distance(graph.nodes()[neighbor]);

            let better = match g_score[neighbor] {
                None => true,
                Some(existing) => tentative_g < existing,
            };

            if better {
                g_score[neighbor] = Some(tentative_g);
                came_from[neighbor] = Some(current.vertex);
                open.push(SearchNode {
                    vertex: neighbor,
                    g_score: tentative_g,
                    f_score: tentative_g + heuristic(graph.nodes()[neighbor]),
                });
            }
        }
    }

    None
}

fn reconstruct(came_from: &[Option<usize>], goal: usize) -> Vec<usize> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(prev) = came_from[current] {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Polygon;

    fn p(x: f64, y: f64) -> Point<f64> {
        Point::new(x, y)
    }

    #[test]
    fn direct_path_in_empty_world() {
        let graph = VisibilityGraph::build(p(0.0, 0.0), p(10.0, 0.0), &[]);
        let path = shortest_path(&graph).unwrap();
        assert_eq!(path, vec![START, END]);
    }

    #[test]
    fn routes_around_an_off_axis_corner() {
        let obstacle = Polygon::new(vec![p(5.0, -5.0), p(5.0, 5.0), p(15.0, 5.0), p(15.0, -5.0)])
            .unwrap();
        let graph = VisibilityGraph::build(p(0.0, 0.0), p(20.0, 0.0), &[obstacle]);
        let path = shortest_path(&graph).unwrap();
        assert!(path.len() > 2, "path should detour around the obstacle");
        assert_eq!(*path.first().unwrap(), START);
        assert_eq!(*path.last().unwrap(), END);
    }

    #[test]
    fn start_enclosed_in_an_obstacle_still_finds_a_path_via_its_vertices() {
        // Touching a polygon's own vertices from inside is permitted (only
        // crossing an edge's interior is forbidden), so a trapped start can
        // still reach a corner of its enclosing obstacle and route out from
        // there. Safety of that route is a separate, later check
        // (`validate::safety`), not something the search itself enforces.
        let obstacle =
            Polygon::new(vec![p(-1.0, -1.0), p(-1.0, 1.0), p(1.0, 1.0), p(1.0, -1.0)]).unwrap();
        let graph = VisibilityGraph::build(p(0.0, 0.0), p(10.0, 0.0), &[obstacle]);
        assert!(shortest_path(&graph).is_some());
    }

    #[test]
    fn heuristic_is_admissible_so_cost_never_exceeds_manhattan_like_detours() {
        let obstacle = Polygon::new(vec![p(5.0, -5.0), p(5.0, 5.0), p(15.0, 5.0), p(15.0, -5.0)])
            .unwrap();
        let graph = VisibilityGraph::build(p(0.0, 0.0), p(20.0, 0.0), &[obstacle]);
        let path = shortest_path(&graph).unwrap();
        let nodes = graph.nodes();
        let length: f64 = path
            .windows(2)
            .map(|w| nodes[w[0]].distance(nodes[w[1]]))
            .sum();
        let direct = nodes[START].distance(nodes[END]);
        assert!(length >= direct - 1e-9);
    }
}
