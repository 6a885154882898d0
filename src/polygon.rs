use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::Point;

/// A simple closed polygon: an ordered sequence of `>= 3` vertices. Edge
/// *i* connects vertex *i-1* (cyclically) to vertex *i*. Vertex order (CW
/// vs CCW) is not significant to the planner. Obstacles are treated as
/// forbidden interior, passable boundary (at vertices only).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon<T = f64> {
    vertices: Vec<Point<T>>,
}

impl<T: Float> Polygon<T> {
    /// Builds a polygon, rejecting inputs that violate the obstacle
    /// invariants: fewer than three vertices, or two cyclically-consecutive
    /// vertices that coincide.
    pub fn new(vertices: Vec<Point<T>>) -> Result<Self, PlannerError> {
        Self::validate(&vertices, 0)?;
        Ok(Self { vertices })
    }

    pub(crate) fn validate(vertices: &[Point<T>], index: usize) -> Result<(), PlannerError> {
        if vertices.len() < 3 {
            return Err(PlannerError::InvalidObstacle {
                index,
                reason: format!("polygon has {} vertices, need at least 3", vertices.len()),
            });
        }

        let n = vertices.len();
        for i in 0..n {
            let next = (i + 1) % n;
            if vertices[i] == vertices[next] {
                return Err(PlannerError::InvalidObstacle {
                    index,
                    reason: format!("vertices {i} and {next} coincide"),
                });
            }
        }

        Ok(())
    }

    /// Vertices in their original cyclic order.
    pub fn vertices(&self) -> &[Point<T>] {
        &self.vertices
    }

    /// Cyclic edges `(vertex[i-1], vertex[i])`, computed on demand rather
    /// than materialized as a separate graph of edge objects.
    pub fn edges(&self) -> impl Iterator<Item = (Point<T>, Point<T>)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[(i + n - 1) % n], self.vertices[i]))
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
