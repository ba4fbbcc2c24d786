#![doc = include_str!("../README.md")]

#[doc(hidden)]
pub mod error;
pub mod fix;
pub mod progress;
pub mod road;
pub mod tunnel;
pub mod util;

#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use fix::LocationFix;
#[doc(inline)]
pub use progress::{
    Intersection, LegProgress, Route, RouteLeg, RouteProgress, RouteStep, StepProgress,
};
#[doc(inline)]
pub use road::{RoadClass, RoadClasses};
#[doc(inline)]
pub use tunnel::{Traversal, TunnelPolicy, is_in_tunnel, is_qualified};
