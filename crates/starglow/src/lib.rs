//! Animation core for the galaxy backdrop: twinkling starfield, shooting
//! stars, and cursor glow/trail state.
//!
//! The core owns all particle state and timing rules and is fully
//! deterministic given a seed. It knows nothing about canvases or the DOM:
//! drawing goes through the [`Surface`] trait and pointer input arrives as
//! [`InputEvent`]s pushed by the host. The `starglow-web` crate provides
//! the browser side of both seams.

pub mod api;
pub mod core;
pub mod input;
pub mod render;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::backdrop::Backdrop;
pub use api::config::BackdropConfig;
pub use crate::core::rng::Rng;
pub use crate::core::time::Throttle;
pub use input::queue::{InputEvent, InputQueue};
pub use render::record::{DrawOp, RecordingSurface};
pub use render::surface::{GradientStop, Rgba, Surface};
pub use systems::pointer::{GlowState, PointerFx, TrailParticle};
pub use systems::shooting::{ShootingStar, ShootingStars};
pub use systems::starfield::{Star, StarField};
