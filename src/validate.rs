//! Pure, read-only predicates over a finished polyline (§4.6): feasibility
//! against a drone's battery/time budget, and safety against map bounds and
//! obstacle interiors. Neither predicate ever fails — both report `(bool,
//! text)` and leave policy to the caller.

use num_traits::{Float, ToPrimitive};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::analytics::route_length;
use crate::geometry::point_in_polygon;
use crate::{Point, Polygon};

/// A drone's battery/speed envelope, plus the two host-supplied process-wide
/// constants (`battery_life_seconds`, `max_order_delay_seconds`) that bound
/// feasibility. Carried as plain fields rather than ambient globals.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DroneSpec {
    /// Fraction of a full charge remaining, in `[0, 1]`.
    pub battery_level: f64,
    /// Cruise speed, distance units per second. Must be `> 0`.
    pub speed: f64,
    /// Seconds a fully-charged battery lasts at cruise speed.
    pub battery_life_seconds: f64,
    /// Maximum seconds an order delivery is allowed to take.
    pub max_order_delay_seconds: f64,
}

/// The bounded world a route is checked against: overall extent plus the
/// obstacle set a position may or may not collide with.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorldSpec<T = f64> {
    pub width: T,
    pub height: T,
    pub obstacles: Vec<Polygon<T>>,
}

impl<T: Float> WorldSpec<T> {
    /// The index of the first obstacle containing `point`, if any.
    pub fn building_at(&self, point: Point<T>) -> Option<usize> {
        self.obstacles
            .iter()
            .position(|polygon| point_in_polygon(polygon.vertices(), point))
    }

    fn in_bounds(&self, point: Point<T>) -> bool {
        point.x >= T::zero()
            && point.x <= self.width
            && point.y >= T::zero()
            && point.y <= self.height
    }
}

/// The tagged `(ok, reason)` result every validation predicate returns.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationResult {
    pub ok: bool,
    pub reason: String,
}

impl ValidationResult {
    fn ok(reason: impl Into<String>) -> Self {
        Self {
            ok: true,
            reason: reason.into(),
        }
    }

    fn fail(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            reason: reason.into(),
        }
    }
}

/// `ok` iff the route's total length fits within the drone's battery range
/// and its estimated travel time fits within the maximum order delay.
pub fn feasibility<T: Float + std::fmt::Display>(route: &[Point<T>], drone: &DroneSpec) -> ValidationResult {
    let total_distance = route_length(route).to_f64().unwrap_or(f64::INFINITY);
    let max_distance = drone.battery_level * drone.speed * drone.battery_life_seconds;

    if total_distance > max_distance {
        return ValidationResult::fail(format!(
            "route distance {total_distance:.2} exceeds battery range {max_distance:.2}"
        ));
    }

    let estimated_time = total_distance / drone.speed;
    if estimated_time > drone.max_order_delay_seconds {
        return ValidationResult::fail(format!(
            "estimated delivery time {estimated_time:.2}s exceeds maximum {:.2}s",
            drone.max_order_delay_seconds
        ));
    }

    ValidationResult::ok("route is feasible")
}

/// `ok` iff every vertex of the route lies within world bounds and outside
/// every obstacle polygon.
pub fn safety<T: Float + std::fmt::Display>(route: &[Point<T>], world: &WorldSpec<T>) -> ValidationResult {
    for position in route {
        if !world.in_bounds(*position) {
            return ValidationResult::fail(format!("position {position} is outside map bounds"));
        }

        if let Some(building) = world.building_at(*position) {
            return ValidationResult::fail(format!(
                "position {position} collides with building {building}"
            ));
        }
    }

    ValidationResult::ok("route is safe")
}
