//! Platform-free core of the ambient backdrop: drifting gradient blobs and a
//! flow-field particle layer composited onto any [`Surface`].

pub mod clock;
pub mod color;
pub mod config;
pub mod constants;
pub mod driver;
pub mod entities;
pub mod field;
pub mod lifecycle;
pub mod scene;
pub mod setup;
pub mod surface;
pub mod viewport;

pub use clock::Clock;
pub use color::Hsla;
pub use config::{Config, ConfigError};
pub use driver::FixedTickDriver;
pub use entities::{create_blobs, create_flow_particles, Blob, FlowParticle};
pub use field::field;
pub use lifecycle::{Backdrop, FrameOutcome, RunState};
pub use scene::Scene;
pub use setup::{bootstrap, Host, InertReason, Setup, SetupError};
pub use surface::{CompositeMode, DrawCall, Paint, RecordingSurface, Surface, SurfaceError};
pub use viewport::Viewport;
