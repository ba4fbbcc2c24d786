use crate::fix::LocationFix;
use crate::progress::{Intersection, RouteProgress};
use crate::tunnel::{Traversal, TunnelPolicy};

use geo::{Distance, Haversine};
use itertools::Itertools;
use log::trace;
#[cfg(feature = "tracing")]
use tracing::Level;

impl Traversal for TunnelPolicy {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = Level::TRACE))]
    fn is_in_tunnel(&self, fix: &LocationFix, progress: &RouteProgress) -> bool {
        if !self.is_qualified(fix) {
            trace!("Unqualified fix (accuracy={:?})", fix.horizontal_accuracy);
            return false;
        }

        let fast_enough = fix
            .measured_speed()
            .is_some_and(|speed| speed >= self.minimum_entrance_speed);

        if !fast_enough {
            trace!("Fix too slow for tunnel entrance (speed={:?})", fix.speed);
            return false;
        }

        let step = &progress.current_leg_progress.current_step_progress;
        let intersections = step.intersections();

        if intersections.is_empty() {
            trace!("No intersections available for the current step");
            return false;
        }

        // Past the entrance, and yet to pass the intersection ending the segment.
        if step.current_intersection().is_some_and(Intersection::is_tunnel) {
            trace!("Current intersection outlet is a tunnel");
            return true;
        }

        let approaching = step
            .upcoming_intersection()
            .is_some_and(Intersection::is_tunnel);

        if approaching {
            let distance = step.user_distance_to_upcoming_intersection;
            if distance.is_some_and(|distance| distance < self.entrance_radius) {
                trace!("Within tunnel entrance radius (distance={distance:?})");
                return true;
            }
        }

        step.intersection_index
            .is_some_and(|index| self.bridges_surface_gap(intersections, index))
    }
}

impl TunnelPolicy {
    /// Whether the traveler, having just passed the exit of one tunnel at
    /// `index`, reaches the entrance of another before covering more than
    /// `maximum_surface_gap` meters of open road.
    fn bridges_surface_gap(&self, intersections: &[Intersection], index: usize) -> bool {
        let exited = index
            .checked_sub(1)
            .and_then(|previous| intersections.get(previous))
            .is_some_and(Intersection::is_tunnel);

        if !exited {
            return false;
        }

        let Some(ahead) = intersections.get(index..) else {
            return false;
        };

        let mut gap = 0.0;
        for (from, to) in ahead.iter().tuple_windows() {
            gap += Haversine.distance(from.location, to.location);
            if gap > self.maximum_surface_gap {
                return false;
            }

            if to.is_tunnel() {
                trace!("Between tunnels, surface gap of {gap:.1}m");
                return true;
            }
        }

        false
    }
}

/// Classifies the fix against the default [`TunnelPolicy`].
///
/// ```rust
/// use routers_tunnel::{LocationFix, Route, RouteLeg, RouteProgress, RouteStep, is_in_tunnel};
/// use geo::Point;
///
/// let route = Route::new([RouteLeg::new([RouteStep::default()])]);
/// let progress = RouteProgress::new(route).expect("route has a step");
///
/// let fix = LocationFix::new(Point::new(-77.02397, 38.890774))
///     .with_horizontal_accuracy(5.0)
///     .with_speed(12.0);
///
/// // No intersections are loaded for the step, so no tunnel can be inferred.
/// assert!(!is_in_tunnel(&fix, &progress));
/// ```
#[inline]
pub fn is_in_tunnel(fix: &LocationFix, progress: &RouteProgress) -> bool {
    TunnelPolicy::default().is_in_tunnel(fix, progress)
}
