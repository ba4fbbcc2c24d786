use criterion::criterion_main;
use geo::{Point, wkt};
use routers_tunnel::{
    Intersection, LocationFix, Route, RouteLeg, RouteProgress, RouteStep, Traversal,
    TunnelPolicy,
};

struct ClassifierScenario {
    name: &'static str,
    intersection_index: Option<usize>,
    distance: Option<f64>,
    expected: bool,
}

const CLASSIFY_CASES: [ClassifierScenario; 4] = [
    ClassifierScenario {
        name: "approaching",
        intersection_index: Some(0),
        distance: Some(120.0),
        expected: false,
    },
    ClassifierScenario {
        name: "entering",
        intersection_index: Some(0),
        distance: Some(10.0),
        expected: true,
    },
    ClassifierScenario {
        name: "inside",
        intersection_index: Some(1),
        distance: None,
        expected: true,
    },
    ClassifierScenario {
        name: "between_tunnels",
        intersection_index: Some(4),
        distance: Some(40.0),
        expected: true,
    },
];

const OUTLETS: [bool; 8] = [false, true, false, true, false, true, false, false];

fn ninth_street_progress() -> RouteProgress {
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

    let intersections = line
        .points()
        .zip(OUTLETS)
        .map(|(location, tunnel)| {
            if tunnel {
                Intersection::tunnel(location)
            } else {
                Intersection::new(location)
            }
        })
        .collect();

    let route = Route::new([RouteLeg::new([RouteStep::new(intersections, 1130.0)])]);
    let mut progress = RouteProgress::new(route).expect("Route must have a step");
    progress.current_leg_progress.load_intersections();
    progress
}

fn target_benchmark(c: &mut criterion::Criterion) {
    let mut group = c.benchmark_group("classify");
    group.significance_level(0.1).sample_size(100);

    let policy = TunnelPolicy::default();
    let fix = LocationFix::new(Point::new(-77.024, 38.889))
        .with_horizontal_accuracy(12.0)
        .with_speed(14.0);

    CLASSIFY_CASES.into_iter().for_each(|sc| {
        let mut progress = ninth_street_progress();
        let step = &mut progress.current_leg_progress.current_step_progress;
        step.intersection_index = sc.intersection_index;
        step.user_distance_to_upcoming_intersection = sc.distance;

        group.bench_function(format!("classify: {}", sc.name), |b| {
            b.iter(|| {
                let result = policy.is_in_tunnel(
                    std::hint::black_box(&fix),
                    std::hint::black_box(&progress),
                );
                assert_eq!(result, sc.expected);
            })
        });
    });

    group.finish();
}

criterion::criterion_group!(targeted_benches, target_benchmark);
criterion_main!(targeted_benches);
