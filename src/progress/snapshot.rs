use crate::error::ProgressError;
use crate::progress::{LegProgress, Route};

/// The live bookkeeping of where the traveler is along the route.
///
/// This is the single aggregate handed to the classifier on every fix,
/// after the progress tracker has advanced it.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteProgress {
    pub route: Route,
    leg_index: usize,
    pub current_leg_progress: LegProgress,
}

impl RouteProgress {
    /// Starts progress at the first step of the first leg.
    pub fn new(route: Route) -> Result<Self, ProgressError> {
        let leg = route.legs.first().cloned().ok_or(ProgressError::EmptyRoute)?;

        Ok(Self {
            current_leg_progress: LegProgress::new(leg)?,
            leg_index: 0,
            route,
        })
    }

    #[inline]
    pub fn leg_index(&self) -> usize {
        self.leg_index
    }

    /// Moves onto the leg at `index`, restarting at its first step.
    pub fn set_leg_index(&mut self, index: usize) -> Result<(), ProgressError> {
        let leg = self
            .route
            .legs
            .get(index)
            .cloned()
            .ok_or(ProgressError::LegOutOfRange {
                index,
                count: self.route.legs.len(),
            })?;

        self.current_leg_progress = LegProgress::new(leg).map_err(|err| match err {
            ProgressError::EmptyLeg(_) => ProgressError::EmptyLeg(index),
            other => other,
        })?;

        self.leg_index = index;
        Ok(())
    }
}
