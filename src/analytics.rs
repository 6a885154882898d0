//! Pure, read-only analytics over an already-planned polyline (§4.7): total
//! length, straight-line distance, efficiency ratio, and segment count.

use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Point;

/// Total length of a polyline: the sum of consecutive-point distances.
pub fn route_length<T: Float>(route: &[Point<T>]) -> T {
    route
        .windows(2)
        .fold(T::zero(), |acc, w| acc + w[0].distance(w[1]))
}

/// Efficiency/summary metrics for one polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RouteAnalysis {
    pub length: f64,
    pub straight_line_distance: f64,
    pub efficiency_ratio: f64,
    pub number_of_segments: usize,
}

/// Analyzes a route's efficiency: how close its actual length is to the
/// straight-line distance between its endpoints. Routes shorter than two
/// points report all-zero metrics with a ratio of `1.0`.
pub fn analyze_efficiency<T: Float>(route: &[Point<T>]) -> RouteAnalysis {
    if route.len() < 2 {
        return RouteAnalysis {
            length: 0.0,
            straight_line_distance: 0.0,
            efficiency_ratio: 1.0,
            number_of_segments: 0,
        };
    }

    let length = route_length(route).to_f64().unwrap_or(f64::INFINITY);
    let straight_line_distance = route[0]
        .distance(route[route.len() - 1])
        .to_f64()
        .unwrap_or(f64::INFINITY);
    let efficiency_ratio = straight_line_distance / length.max(1e-3);

    RouteAnalysis {
        length,
        straight_line_distance,
        efficiency_ratio,
        number_of_segments: route.len() - 1,
    }
}

/// Compares several already-planned routes and picks the shortest. Returns
/// `None` for an empty slice, otherwise the index of the shortest route
/// alongside its analysis.
pub fn compare_routes<T: Float>(routes: &[Vec<Point<T>>]) -> Option<(usize, RouteAnalysis)> {
    routes
        .iter()
        .map(analyze_efficiency)
        .enumerate()
        .min_by(|(_, a), (_, b)| a.length.partial_cmp(&b.length).unwrap_or(std::cmp::Ordering::Equal))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point<f64> {
        Point::new(x, y)
    }

    #[test]
    fn empty_world_route_length_is_euclidean_distance() {
        let route = vec![p(0.0, 0.0), p(10.0, 0.0)];
        assert_eq!(route_length(&route), 10.0);
    }

    #[test]
    fn efficiency_of_a_straight_route_is_one() {
        let route = vec![p(0.0, 0.0), p(10.0, 0.0)];
        let analysis = analyze_efficiency(&route);
        assert_eq!(analysis.length, 10.0);
        assert_eq!(analysis.straight_line_distance, 10.0);
        assert!((analysis.efficiency_ratio - 1.0).abs() < 1e-9);
        assert_eq!(analysis.number_of_segments, 1);
    }

    #[test]
    fn efficiency_of_a_detour_is_less_than_one() {
        let route = vec![p(0.0, 0.0), p(5.0, 5.0), p(10.0, 0.0)];
        let analysis = analyze_efficiency(&route);
        assert!(analysis.efficiency_ratio < 1.0);
    }

    #[test]
    fn short_routes_report_all_zero_metrics() {
        let route = vec![p(0.0, 0.0)];
        let analysis = analyze_efficiency(&route);
        assert_eq!(analysis.length, 0.0);
        assert_eq!(analysis.straight_line_distance, 0.0);
        assert_eq!(analysis.efficiency_ratio, 1.0);
        assert_eq!(analysis.number_of_segments, 0);

        let empty: Vec<Point<f64>> = vec![];
        let analysis = analyze_efficiency(&empty);
        assert_eq!(analysis.number_of_segments, 0);
    }

    #[test]
    fn compare_routes_picks_the_shortest() {
        let routes = vec![
            vec![p(0.0, 0.0), p(5.0, 5.0), p(10.0, 0.0)],
            vec![p(0.0, 0.0), p(10.0, 0.0)],
        ];
        let (index, analysis) = compare_routes(&routes).unwrap();
        assert_eq!(index, 1);
        assert_eq!(analysis.length, 10.0);
    }

    #[test]
    fn compare_routes_of_empty_slice_is_none() {
        let routes: Vec<Vec<Point<f64>>> = vec![];
        assert!(compare_routes(&routes).is_none());
    }
}
