//! Read-only snapshots of the traveler's progress along a route.
//!
//! The progress tracker owns and advances these structures; the
//! classifier only ever borrows them for the duration of a call.

#[doc(hidden)]
pub mod intersection;
#[doc(hidden)]
pub mod leg;
#[doc(hidden)]
pub mod route;
#[doc(hidden)]
pub mod snapshot;
#[doc(hidden)]
pub mod step;


#[doc(inline)]
pub use intersection::Intersection;
#[doc(inline)]
pub use leg::LegProgress;
#[doc(inline)]
pub use route::{Route, RouteLeg, RouteStep};
#[doc(inline)]
pub use snapshot::RouteProgress;
#[doc(inline)]
pub use step::StepProgress;
