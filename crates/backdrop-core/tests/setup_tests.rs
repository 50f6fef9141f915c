// Host-side tests for guarded startup against a fake host.

use backdrop_core::config::ConfigError;
use backdrop_core::setup::{bootstrap, Host, InertReason, SetupError};
use backdrop_core::surface::{RecordingSurface, SurfaceError};
use backdrop_core::{RunState, Viewport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

#[derive(Default)]
struct FakeHost {
    disabled: bool,
    missing_surface: bool,
    broken_context: bool,
    broken_viewport: bool,
    reduced_motion: bool,
    attrs: HashMap<&'static str, &'static str>,
    acquired: bool,
}

impl Host for FakeHost {
    type Surface = RecordingSurface;

    fn disabled(&self) -> bool {
        self.disabled
    }

    fn acquire_surface(&mut self) -> Result<Option<RecordingSurface>, SetupError> {
        self.acquired = true;
        if self.missing_surface {
            return Ok(None);
        }
        if self.broken_context {
            return Err(SurfaceError::Unavailable("no 2d".into()).into());
        }
        Ok(Some(RecordingSurface::new()))
    }

    fn viewport(&self) -> Result<Viewport, SetupError> {
        if self.broken_viewport {
            return Err(SetupError::Host("innerWidth unavailable".into()));
        }
        Ok(Viewport::new(1024.0, 768.0, 1.0))
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn config_value(&self, key: &str) -> Option<String> {
        self.attrs.get(key).map(|v| v.to_string())
    }

    fn now(&self) -> f64 {
        250.0
    }

    fn rng(&mut self) -> StdRng {
        StdRng::seed_from_u64(17)
    }
}

#[test]
fn disable_flag_short_circuits_before_touching_surface() {
    let mut host = FakeHost {
        disabled: true,
        ..FakeHost::default()
    };
    let setup = bootstrap(&mut host);
    assert_eq!(setup.inert_reason(), Some(&InertReason::DisabledByFlag));
    assert!(!host.acquired);
}

#[test]
fn missing_surface_is_a_quiet_no_op() {
    let mut host = FakeHost {
        missing_surface: true,
        ..FakeHost::default()
    };
    assert_eq!(
        bootstrap(&mut host).inert_reason(),
        Some(&InertReason::SurfaceMissing)
    );
}

#[test]
fn unsupported_context_disables_instead_of_failing() {
    let mut host = FakeHost {
        broken_context: true,
        ..FakeHost::default()
    };
    let setup = bootstrap(&mut host);
    assert!(matches!(
        setup.inert_reason(),
        Some(InertReason::Failed(SetupError::Surface(SurfaceError::Unavailable(_))))
    ));
}

#[test]
fn bad_config_disables() {
    let mut host = FakeHost::default();
    host.attrs.insert("teal-bias", "2");
    let setup = bootstrap(&mut host);
    assert!(matches!(
        setup.inert_reason(),
        Some(InertReason::Failed(SetupError::Config(ConfigError::UnitRange { .. })))
    ));
}

#[test]
fn viewport_failure_disables() {
    let mut host = FakeHost {
        broken_viewport: true,
        ..FakeHost::default()
    };
    assert!(matches!(
        bootstrap(&mut host).inert_reason(),
        Some(InertReason::Failed(SetupError::Host(_)))
    ));
}

#[test]
fn ready_backdrop_uses_overrides_and_host_clock() {
    let mut host = FakeHost::default();
    host.attrs.insert("blob-count", "3");
    host.attrs.insert("show-flow", "false");
    let setup = bootstrap(&mut host);
    assert!(setup.is_ready());
    let mut b = setup.ready().unwrap();
    assert_eq!(b.scene().blobs.len(), 3);
    assert!(b.scene().particles.is_empty());
    assert_eq!(b.surface().backing, (1024, 768));
    assert_eq!(b.clock().last, 250.0);
    assert!(b.start(250.0));
}

#[test]
fn reduced_motion_host_yields_paused_backdrop() {
    let mut host = FakeHost {
        reduced_motion: true,
        ..FakeHost::default()
    };
    let b = bootstrap(&mut host).ready().unwrap();
    assert_eq!(b.state(), RunState::Paused);
}

#[test]
fn huge_counts_disable_instead_of_panicking() {
    for (key, value) in [
        ("blob-count", "18446744073709551615"),
        ("intensity", "1e300"),
    ] {
        let mut host = FakeHost::default();
        host.attrs.insert(key, value);
        let setup = bootstrap(&mut host);
        assert!(
            matches!(
                setup.inert_reason(),
                Some(InertReason::Failed(SetupError::Config(_)))
            ),
            "{}={} should leave the backdrop inert",
            key,
            value
        );
    }
}
