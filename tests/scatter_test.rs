use orrery::scene::scatter::{ScatterKind, scatter_positions};
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn scatter_counts_equal_the_request() {
    let mut rng = StdRng::seed_from_u64(7);
    for kind in [ScatterKind::Star, ScatterKind::Asteroid, ScatterKind::Comet] {
        let positions = scatter_positions(&mut rng, kind.count(), kind.range());
        assert_eq!(positions.len(), kind.count());
    }
}

#[test]
fn every_kind_requests_the_expected_population() {
    assert_eq!(ScatterKind::Star.count(), 1000);
    assert_eq!(ScatterKind::Asteroid.count(), 10);
    assert_eq!(ScatterKind::Comet.count(), 10);
}

#[test]
fn scatter_positions_stay_within_the_symmetric_range() {
    let mut rng = StdRng::seed_from_u64(42);
    for kind in [ScatterKind::Star, ScatterKind::Asteroid, ScatterKind::Comet] {
        let half = kind.range() / 2.0;
        for position in scatter_positions(&mut rng, kind.count(), kind.range()) {
            for coordinate in [position.x, position.y, position.z] {
                assert!(
                    (-half..half).contains(&coordinate),
                    "{} outside [-{half}, {half})",
                    coordinate
                );
            }
        }
    }
}

#[test]
fn axes_are_sampled_independently() {
    // With a thousand samples every octant should be populated; a sampler
    // that reused one draw across axes would only ever hit two of them.
    let mut rng = StdRng::seed_from_u64(0);
    let positions = scatter_positions(&mut rng, 1000, 400.0);

    let mut octants = [false; 8];
    for p in &positions {
        let index = ((p.x >= 0.0) as usize) << 2 | ((p.y >= 0.0) as usize) << 1 | (p.z >= 0.0) as usize;
        octants[index] = true;
    }
    assert!(octants.iter().all(|&seen| seen));
}

#[test]
fn zero_count_yields_an_empty_field() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(scatter_positions(&mut rng, 0, 250.0).is_empty());
}
