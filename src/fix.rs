use chrono::{DateTime, Utc};
use geo::Point;
use serde::{Deserialize, Serialize};

/// A single raw location observation, as handed to the
/// location-filtering pipeline by the platform location source.
///
/// Optional readings are `None` when the source did not report them.
/// A `horizontal_accuracy` of `Some(0.0)` is the best possible reading,
/// whereas `None` is unknown, and is treated as unqualified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationFix {
    /// Position of the fix, `x` being the longitude and `y` the latitude.
    pub coordinate: Point,

    /// Radius of uncertainty, in meters.
    pub horizontal_accuracy: Option<f64>,

    /// Ground speed, in meters per second.
    pub speed: Option<f64>,

    /// Heading of travel, in degrees clockwise from true north.
    pub course: Option<f64>,

    pub timestamp: DateTime<Utc>,
}

impl LocationFix {
    pub fn new(coordinate: Point) -> Self {
        Self {
            coordinate,
            horizontal_accuracy: None,
            speed: None,
            course: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_horizontal_accuracy(mut self, accuracy: f64) -> Self {
        self.horizontal_accuracy = Some(accuracy);
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn with_course(mut self, course: f64) -> Self {
        self.course = Some(course);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// The reported speed, if one was reported and it is a number.
    #[inline]
    pub fn measured_speed(&self) -> Option<f64> {
        self.speed.filter(|speed| !speed.is_nan())
    }
}
