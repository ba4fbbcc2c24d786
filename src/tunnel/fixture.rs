//! A southbound route along 9th Street SW, Washington DC, passing
//! through the expressway tunnels beneath the National Mall.
//!
//! The second step holds two tunnels separated by a long surface stretch,
//! followed by a third tunnel only a short open-air gap beyond the second.

use crate::fix::LocationFix;
use crate::progress::{Intersection, Route, RouteLeg, RouteProgress, RouteStep};
use crate::tunnel::MINIMUM_TUNNEL_ENTRANCE_SPEED;

use geo::{LineString, Point, wkt};

pub(crate) const START: Point = Point(geo::Coord {
    x: -77.023970,
    y: 38.890774,
});

/// Whether the outlet of each intersection of the tunnel step is a tunnel.
pub(crate) const TUNNEL_STEP_OUTLETS: [bool; 8] = [false, true, false, true, false, true, false, false];

fn intersections(line: LineString, outlets: &[bool]) -> Vec<Intersection> {
    line.points()
        .zip(outlets)
        .map(|(location, &tunnel)| {
            if tunnel {
                Intersection::tunnel(location)
            } else {
                Intersection::new(location)
            }
        })
        .collect()
}

pub(crate) fn tunnel_step() -> RouteStep {
    let line = wkt! {
        LINESTRING (
            -77.023970 38.890774,
            -77.024000 38.889900,
            -77.024050 38.886900,
            -77.024100 38.885400,
            -77.024150 38.884000,
            -77.024160 38.883700,
            -77.024400 38.881500,
            -77.024718 38.880612
        )
    };

    RouteStep::new(intersections(line, &TUNNEL_STEP_OUTLETS), 1130.0)
}

pub(crate) fn ninth_street_route() -> Route {
    let departure = wkt! { LINESTRING (-77.023500 38.890800, -77.023970 38.890774) };
    let arrival = Intersection::new(Point::new(-77.024718, 38.880612));

    Route::new([RouteLeg::new([
        RouteStep::new(intersections(departure, &[false, false]), 41.0),
        tunnel_step(),
        RouteStep::new(vec![arrival], 0.0),
    ])])
}

pub(crate) fn ninth_street_progress() -> RouteProgress {
    RouteProgress::new(ninth_street_route()).expect("fixture route must have a step")
}

/// A fix at the start of the route, qualified and exactly at the
/// minimum tunnel entrance speed.
pub(crate) fn qualified_fix() -> LocationFix {
    LocationFix::new(START)
        .with_horizontal_accuracy(0.0)
        .with_course(0.0)
        .with_speed(MINIMUM_TUNNEL_ENTRANCE_SPEED)
}
