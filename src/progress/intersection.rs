use crate::road::RoadClasses;

use geo::Point;
use serde::{Deserialize, Serialize};

/// A branching point along the geometry of a step.
///
/// The outlet road classes describe the road segment leaving the
/// intersection in the direction of travel, and are `None` when the
/// route response did not classify it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    pub location: Point,
    pub outlet_road_classes: Option<RoadClasses>,
}

impl Intersection {
    pub fn new(location: Point) -> Self {
        Self {
            location,
            outlet_road_classes: None,
        }
    }

    /// An intersection whose outgoing segment enters, or continues, a tunnel.
    pub fn tunnel(location: Point) -> Self {
        Self::new(location).with_outlet_road_classes(RoadClasses::TUNNEL)
    }

    pub fn with_outlet_road_classes(mut self, classes: RoadClasses) -> Self {
        self.outlet_road_classes = Some(classes);
        self
    }

    /// Whether the outgoing road segment is classified as a tunnel.
    #[inline]
    pub fn is_tunnel(&self) -> bool {
        self.outlet_road_classes
            .is_some_and(|classes| classes.contains_tunnel())
    }
}
