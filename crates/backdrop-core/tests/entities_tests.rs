// Host-side tests for the entity factory.

use backdrop_core::constants::{HUE_PEACH, HUE_PEACH_MAX};
use backdrop_core::{create_blobs, create_flow_particles, Config, Viewport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::TAU;

#[test]
fn blob_count_and_radius_bounds_hold() {
    let viewports = [
        Viewport::new(1920.0, 1080.0, 1.0),
        Viewport::new(390.0, 844.0, 3.0),
        Viewport::new(640.0, 640.0, 2.0),
    ];
    for (seed, vp) in viewports.iter().enumerate() {
        for k in 1..=12 {
            let cfg = Config {
                blob_count: k,
                ..Config::default()
            };
            let mut rng = StdRng::seed_from_u64(seed as u64 * 31 + k as u64);
            let blobs = create_blobs(&cfg, vp, &mut rng);
            assert_eq!(blobs.len(), k);
            let m = vp.extent_min();
            for b in &blobs {
                assert!(
                    b.radius >= 0.32 * m && b.radius <= 0.50 * m,
                    "radius {} outside [{}, {}]",
                    b.radius,
                    0.32 * m,
                    0.50 * m
                );
            }
        }
    }
}

#[test]
fn blob_hues_fall_in_one_of_two_clusters() {
    for bias in [0.0, 0.3, 1.0] {
        let cfg = Config {
            blob_count: 200,
            teal_bias: bias,
            ..Config::default()
        };
        let teal_max = cfg.hue_teal_max();
        let mut rng = StdRng::seed_from_u64(9);
        let blobs = create_blobs(&cfg, &Viewport::new(800.0, 600.0, 1.0), &mut rng);
        let (mut peach, mut teal) = (0, 0);
        for b in &blobs {
            if (HUE_PEACH..HUE_PEACH_MAX).contains(&b.hue) {
                peach += 1;
            } else {
                assert!(
                    (teal_max - 15.0..teal_max).contains(&b.hue),
                    "hue {} not in teal band below {}",
                    b.hue,
                    teal_max
                );
                teal += 1;
            }
        }
        // Both clusters show up with a fair coin over 200 draws.
        assert!(peach > 50 && teal > 50, "peach={peach} teal={teal}");
    }
}

#[test]
fn blob_speeds_and_phases_scale_and_wrap() {
    let cfg = Config {
        blob_count: 64,
        intensity: 2.0,
        ..Config::default()
    };
    let mut rng = StdRng::seed_from_u64(3);
    for b in create_blobs(&cfg, &Viewport::new(800.0, 600.0, 1.0), &mut rng) {
        assert!(b.speed.x >= 0.24 && b.speed.x <= 0.60);
        assert!(b.speed.y >= 0.20 && b.speed.y <= 0.52);
        assert!(b.phase.x >= 0.0 && b.phase.x < TAU);
        assert!(b.phase.y >= 0.0 && b.phase.y < TAU);
    }
}

#[test]
fn no_particles_without_flow() {
    let cfg = Config {
        show_flow: false,
        ..Config::default()
    };
    let mut rng = StdRng::seed_from_u64(1);
    assert!(create_flow_particles(&cfg, &Viewport::new(800.0, 600.0, 1.0), &mut rng).is_empty());
}

#[test]
fn particles_sample_configured_ranges() {
    let cfg = Config {
        intensity: 1.5,
        ..Config::default()
    };
    let vp = Viewport::new(1024.0, 768.0, 1.0);
    let mut rng = StdRng::seed_from_u64(5);
    let particles = create_flow_particles(&cfg, &vp, &mut rng);
    assert_eq!(particles.len(), 210);
    let width_scale = 0.9 + 0.3 * 1.5;
    let teal_max = cfg.hue_teal_max();
    for p in &particles {
        assert!(p.pos.x >= 0.0 && p.pos.x < vp.width);
        assert!(p.pos.y >= 0.0 && p.pos.y < vp.height);
        assert!(p.v >= 0.7 * 1.5 && p.v <= 2.0 * 1.5);
        assert!(p.w >= 1.0 * width_scale && p.w <= 2.8 * width_scale);
        assert!(p.life >= 70.0 && p.life <= 210.0);
        assert!(p.hue >= HUE_PEACH && p.hue < teal_max);
    }
}

#[test]
fn zero_sized_viewport_does_not_panic() {
    let mut rng = StdRng::seed_from_u64(2);
    let vp = Viewport::new(0.0, 0.0, 1.0);
    let cfg = Config::default();
    let blobs = create_blobs(&cfg, &vp, &mut rng);
    assert!(blobs.iter().all(|b| b.radius == 0.0));
    let particles = create_flow_particles(&cfg, &vp, &mut rng);
    assert!(particles.iter().all(|p| p.pos.x == 0.0 && p.pos.y == 0.0));
}
