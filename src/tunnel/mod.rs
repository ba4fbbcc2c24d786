//! Tunnel traversal classification.
//!
//! Answers, for every accepted location fix during guidance, whether the
//! traveler is inside a tunnel segment of the active route. While inside,
//! the location-filtering pipeline suspends corrections which rely on
//! GPS accuracy (course smoothing, snapping, accuracy-weighted fusion).
//!
//! ## Qualification
//! Only fixes with a known horizontal accuracy within
//! [`QUALIFIED_HORIZONTAL_ACCURACY`], travelling at or above
//! [`MINIMUM_TUNNEL_ENTRANCE_SPEED`], may be classified as in a tunnel.
//!
//! ## Classification
//! A qualified fix is in a tunnel when one of the following holds:
//!
//! - The most recently passed intersection has a tunnel outlet.
//! - The upcoming intersection has a tunnel outlet, and the traveler is
//!   within [`TUNNEL_ENTRANCE_RADIUS`] of it.
//! - The traveler has just left a tunnel, and the next tunnel begins within
//!   [`MAXIMUM_SURFACE_GAP`] meters of road, so a short open-air stretch
//!   between two tunnels does not flicker out of the tunnel state.
//!
//! Thresholds are held by [`TunnelPolicy`], which implements [`Traversal`].

#[doc(hidden)]
pub mod definition;
#[doc(hidden)]
pub mod implementation;
#[doc(hidden)]
pub mod policy;

#[cfg(test)]
mod fixture;

#[doc(inline)]
pub use definition::Traversal;
#[doc(inline)]
pub use implementation::is_in_tunnel;
#[doc(inline)]
pub use policy::*;
