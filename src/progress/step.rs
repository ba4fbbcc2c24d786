use crate::progress::{Intersection, RouteStep};

/// Progress of the traveler within the step being traversed.
///
/// Every progress field starts unset, and is filled in by the progress
/// tracker as the traveler moves along the step. Nothing in this crate
/// advances them.
#[derive(Debug, Clone, PartialEq)]
pub struct StepProgress {
    pub step: RouteStep,

    /// Index of the most recently passed intersection within
    /// [`StepProgress::intersections`], `None` before the first one.
    pub intersection_index: Option<usize>,

    /// The intersections of the step, followed by the intersection
    /// of the upcoming maneuver. `None` until computed.
    pub intersections_including_upcoming_maneuver_intersection: Option<Vec<Intersection>>,

    /// Distance from the traveler to the upcoming intersection, in meters.
    pub user_distance_to_upcoming_intersection: Option<f64>,
}

impl StepProgress {
    pub fn new(step: RouteStep) -> Self {
        Self {
            step,
            intersection_index: None,
            intersections_including_upcoming_maneuver_intersection: None,
            user_distance_to_upcoming_intersection: None,
        }
    }

    /// Fills the intersection sequence with those of this step, followed by
    /// the first intersection of the upcoming step, if there is one.
    pub fn with_upcoming_maneuver(&mut self, upcoming: Option<&RouteStep>) {
        let maneuver = upcoming.and_then(|step| step.intersections.first());

        let intersections = self
            .step
            .intersections
            .iter()
            .chain(maneuver)
            .copied()
            .collect();

        self.intersections_including_upcoming_maneuver_intersection = Some(intersections);
    }

    /// The intersection sequence, empty when it is yet to be computed.
    #[inline]
    pub fn intersections(&self) -> &[Intersection] {
        self.intersections_including_upcoming_maneuver_intersection
            .as_deref()
            .unwrap_or_default()
    }

    /// The most recently passed intersection, if the index refers to one.
    pub fn current_intersection(&self) -> Option<&Intersection> {
        self.intersections().get(self.intersection_index?)
    }

    /// The next intersection ahead of the traveler. Before the
    /// first intersection has been passed, this is the first one.
    pub fn upcoming_intersection(&self) -> Option<&Intersection> {
        let upcoming = self
            .intersection_index
            .map_or(Some(0), |index| index.checked_add(1))?;

        self.intersections().get(upcoming)
    }
}
