use bitflags::bitflags;
use log::debug;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// A classification of the road leaving an intersection, as annotated
/// by the route decoder from the road-class tags of the route response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum RoadClass {
    /// The road requires a toll, or other fee, to traverse.
    Toll,

    /// Access to the road is restricted, e.g. a gated or
    /// private road, or one with a time-based restriction.
    Restricted,

    /// A controlled-access, divided highway.
    Motorway,

    /// The road is a ferry crossing.
    Ferry,

    /// The road runs underground, within a tunnel.
    Tunnel,
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct RoadClasses: u8 {
        const TOLL = 1 << 0;
        const RESTRICTED = 1 << 1;
        const MOTORWAY = 1 << 2;
        const FERRY = 1 << 3;
        const TUNNEL = 1 << 4;
    }
}

impl RoadClass {
    pub const fn to_flag(self) -> RoadClasses {
        match self {
            RoadClass::Toll => RoadClasses::TOLL,
            RoadClass::Restricted => RoadClasses::RESTRICTED,
            RoadClass::Motorway => RoadClasses::MOTORWAY,
            RoadClass::Ferry => RoadClasses::FERRY,
            RoadClass::Tunnel => RoadClasses::TUNNEL,
        }
    }
}

impl From<RoadClass> for RoadClasses {
    fn from(value: RoadClass) -> Self {
        value.to_flag()
    }
}

impl FromIterator<RoadClass> for RoadClasses {
    fn from_iter<I: IntoIterator<Item = RoadClass>>(iter: I) -> Self {
        iter.into_iter()
            .fold(RoadClasses::empty(), |set, class| set | class.to_flag())
    }
}

impl RoadClasses {
    /// Collects the recognised classes from a list of road-class tags.
    /// Tags which do not name a known [`RoadClass`] are skipped.
    pub fn parse_all<'a>(tags: impl IntoIterator<Item = &'a str>) -> Self {
        tags.into_iter()
            .filter_map(|tag| match tag.parse::<RoadClass>() {
                Ok(class) => Some(class),
                Err(_) => {
                    debug!("Ignoring unrecognised road class: {tag}");
                    None
                }
            })
            .collect()
    }

    #[inline]
    pub const fn contains_tunnel(&self) -> bool {
        self.contains(RoadClasses::TUNNEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_string_conversion() {
        assert_eq!(RoadClass::from_str("tunnel").unwrap(), RoadClass::Tunnel);
        assert_eq!(RoadClass::from_str("toll").unwrap(), RoadClass::Toll);
        assert_eq!(RoadClass::Motorway.to_string(), "motorway");
        assert!(RoadClass::from_str("bridge").is_err());
    }

    #[test]
    fn test_flags_are_distinct() {
        let all = RoadClass::iter().collect::<RoadClasses>();
        assert_eq!(all.bits().count_ones() as usize, RoadClass::iter().count());
    }

    #[test_log::test]
    fn test_parse_all_skips_unknown() {
        let classes = RoadClasses::parse_all(["motorway", "bridge", "tunnel"]);

        assert!(classes.contains_tunnel());
        assert!(classes.contains(RoadClasses::MOTORWAY));
        assert!(!classes.contains(RoadClasses::TOLL));
    }

    #[test]
    fn test_unrelated_classes_have_no_tunnel() {
        assert!(!RoadClasses::parse_all(["bridge"]).contains_tunnel());
        assert!(!RoadClasses::from(RoadClass::Ferry).contains_tunnel());
    }
}
