use crate::progress::Intersection;

use serde::{Deserialize, Serialize};

/// The stretch of a leg between two maneuvers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    /// Intersections along the step, in traversal order.
    pub intersections: Vec<Intersection>,

    /// Length of the step, in meters.
    pub distance: f64,
}

/// The stretch of a route between two waypoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    pub steps: Vec<RouteStep>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub legs: Vec<RouteLeg>,
}

impl RouteStep {
    pub fn new(intersections: Vec<Intersection>, distance: f64) -> Self {
        Self {
            intersections,
            distance,
        }
    }
}

impl RouteLeg {
    pub fn new(steps: impl IntoIterator<Item = RouteStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }
}

impl Route {
    pub fn new(legs: impl IntoIterator<Item = RouteLeg>) -> Self {
        Self {
            legs: legs.into_iter().collect(),
        }
    }
}
