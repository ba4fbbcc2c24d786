use crate::error::ProgressError;
use crate::progress::{RouteLeg, RouteStep, StepProgress};

/// Progress of the traveler along the leg being traversed.
#[derive(Debug, Clone, PartialEq)]
pub struct LegProgress {
    pub leg: RouteLeg,
    step_index: usize,
    pub current_step_progress: StepProgress,
}

impl LegProgress {
    pub fn new(leg: RouteLeg) -> Result<Self, ProgressError> {
        let first = leg
            .steps
            .first()
            .cloned()
            .ok_or(ProgressError::EmptyLeg(0))?;

        Ok(Self {
            leg,
            step_index: 0,
            current_step_progress: StepProgress::new(first),
        })
    }

    #[inline]
    pub fn step_index(&self) -> usize {
        self.step_index
    }

    /// Moves onto the step at `index`, starting a fresh [`StepProgress`] for it.
    pub fn set_step_index(&mut self, index: usize) -> Result<(), ProgressError> {
        let step = self
            .leg
            .steps
            .get(index)
            .cloned()
            .ok_or(ProgressError::StepOutOfRange {
                index,
                count: self.leg.steps.len(),
            })?;

        self.step_index = index;
        self.current_step_progress = StepProgress::new(step);
        Ok(())
    }

    pub fn current_step(&self) -> &RouteStep {
        &self.current_step_progress.step
    }

    pub fn upcoming_step(&self) -> Option<&RouteStep> {
        self.leg.steps.get(self.step_index + 1)
    }

    /// Fills the current step's intersection sequence, including the
    /// maneuver intersection at the start of the upcoming step.
    pub fn load_intersections(&mut self) {
        let upcoming = self.leg.steps.get(self.step_index + 1);
        self.current_step_progress.with_upcoming_maneuver(upcoming);
    }
}
