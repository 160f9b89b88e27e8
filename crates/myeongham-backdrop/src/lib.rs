//! Animated particle-network backdrop for the myeongham portfolio.
//!
//! The field owns plain particle records and advances them with free
//! functions; it paints through the [`Surface`] port and schedules frames
//! through the [`TickScheduler`] port. Hosts hand it a real canvas and an
//! interval scheduler, tests hand it a recorder and a manual scheduler, and
//! both drive exactly the same cycle.

mod color;
mod field;
mod links;
mod particle;
mod rng;
mod scheduler;
mod shapes;
mod surface;
mod tunables;

pub use color::fade_color;
pub use field::{Bounds, ParticleField, SetupError};
pub use particle::Particle;
pub use scheduler::{IntervalScheduler, ManualScheduler, NullScheduler, TickHandle, TickScheduler};
pub use shapes::{PlacedShape, Shape, ShapeLayer};
pub use surface::{LinkKind, RecordingSurface, Surface};
pub use tunables::FieldTunables;
