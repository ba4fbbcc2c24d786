use crate::fix::LocationFix;
use crate::progress::RouteProgress;

/// Classifies whether a traveler is inside a tunnel segment of the active route.
pub trait Traversal {
    /// Returns `true` when the fix, taken at the given progress along the
    /// route, places the traveler inside (or entering) a tunnel.
    ///
    /// This is a pure function of its inputs. Any missing or unqualified
    /// input resolves to `false`, so a consumer only suspends GPS-sensitive
    /// corrections on positive evidence of a tunnel.
    fn is_in_tunnel(&self, fix: &LocationFix, progress: &RouteProgress) -> bool;
}
