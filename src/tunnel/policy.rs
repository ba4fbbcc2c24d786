use crate::error::ConfigError;
use crate::fix::LocationFix;

use log::debug;
use serde::{Deserialize, Serialize};
use std::env;

/// Speed (m/s) below which a fix is too slow to be entering, or
/// traversing, a tunnel. Slow fixes are either maneuvering at an
/// intersection or dominated by positional noise.
pub const MINIMUM_TUNNEL_ENTRANCE_SPEED: f64 = 5.0;

/// Distance (m) from a tunnel-classified upcoming intersection within
/// which the traveler is considered to be entering the tunnel.
pub const TUNNEL_ENTRANCE_RADIUS: f64 = 15.0;

/// Worst horizontal accuracy (m) a fix may report and still be qualified.
pub const QUALIFIED_HORIZONTAL_ACCURACY: f64 = 100.0;

/// Longest open-air stretch (m) between a tunnel exit and the next
/// tunnel entrance which is still treated as part of the same tunnel.
pub const MAXIMUM_SURFACE_GAP: f64 = 50.0;

const ENV_MINIMUM_ENTRANCE_SPEED: &str = "TUNNEL_MINIMUM_ENTRANCE_SPEED";
const ENV_ENTRANCE_RADIUS: &str = "TUNNEL_ENTRANCE_RADIUS";
const ENV_QUALIFIED_HORIZONTAL_ACCURACY: &str = "TUNNEL_QUALIFIED_HORIZONTAL_ACCURACY";
const ENV_MAXIMUM_SURFACE_GAP: &str = "TUNNEL_MAXIMUM_SURFACE_GAP";

/// The thresholds used to qualify fixes and classify tunnel traversal.
///
/// The [`Default`] policy uses the module constants. Thresholds may be
/// tuned per deployment, either through `serde` or [`TunnelPolicy::from_env`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TunnelPolicy {
    pub minimum_entrance_speed: f64,
    pub entrance_radius: f64,
    pub qualified_horizontal_accuracy: f64,
    pub maximum_surface_gap: f64,
}

impl Default for TunnelPolicy {
    fn default() -> Self {
        Self {
            minimum_entrance_speed: MINIMUM_TUNNEL_ENTRANCE_SPEED,
            entrance_radius: TUNNEL_ENTRANCE_RADIUS,
            qualified_horizontal_accuracy: QUALIFIED_HORIZONTAL_ACCURACY,
            maximum_surface_gap: MAXIMUM_SURFACE_GAP,
        }
    }
}

impl TunnelPolicy {
    /// Builds a policy from the default thresholds, overridden by any of
    /// the `TUNNEL_*` environment variables which are set. A `.env` file
    /// in the working directory is loaded first, if one exists.
    ///
    /// ```bash
    /// TUNNEL_MINIMUM_ENTRANCE_SPEED=5
    /// TUNNEL_ENTRANCE_RADIUS=15
    /// TUNNEL_QUALIFIED_HORIZONTAL_ACCURACY=100
    /// TUNNEL_MAXIMUM_SURFACE_GAP=50
    /// ```
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&'static str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut policy = Self::default();

        let overrides: [(&'static str, &mut f64); 4] = [
            (ENV_MINIMUM_ENTRANCE_SPEED, &mut policy.minimum_entrance_speed),
            (ENV_ENTRANCE_RADIUS, &mut policy.entrance_radius),
            (
                ENV_QUALIFIED_HORIZONTAL_ACCURACY,
                &mut policy.qualified_horizontal_accuracy,
            ),
            (ENV_MAXIMUM_SURFACE_GAP, &mut policy.maximum_surface_gap),
        ];

        for (key, threshold) in overrides {
            if let Some(value) = lookup(key) {
                *threshold = parse_threshold(key, value)?;
                debug!("Overriding {key} with {threshold}");
            }
        }

        Ok(policy)
    }

    /// A fix is qualified when its horizontal accuracy is known and lies
    /// within `0..=qualified_horizontal_accuracy` meters. Unknown, negative
    /// or non-numeric accuracies are never qualified.
    #[inline]
    pub fn is_qualified(&self, fix: &LocationFix) -> bool {
        fix.horizontal_accuracy
            .is_some_and(|accuracy| (0.0..=self.qualified_horizontal_accuracy).contains(&accuracy))
    }
}

fn parse_threshold(key: &'static str, value: String) -> Result<f64, ConfigError> {
    match value.trim().parse::<f64>() {
        Ok(threshold) if threshold.is_finite() && threshold >= 0.0 => Ok(threshold),
        _ => Err(ConfigError::InvalidValue { key, value }),
    }
}

/// Qualifies a fix against the default policy. See [`TunnelPolicy::is_qualified`].
#[inline]
pub fn is_qualified(fix: &LocationFix) -> bool {
    TunnelPolicy::default().is_qualified(fix)
}
