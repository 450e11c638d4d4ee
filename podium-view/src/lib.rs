//! Scene controller for the podium showcase
//!
//! This crate owns the interactive part of the system: the controller that
//! runs the render loop, adapts camera and surface to the viewport, loads
//! the one model asset asynchronously, turns pointer drags into model
//! rotation, and plays the scroll-triggered pop-in/pop-out animation. The
//! hero overlay rides along on the same scroll trigger and exposes the
//! `on_explore` callback to the host.

pub mod controller;
pub mod disposer;
pub mod hero;
pub mod loader;
pub mod pointer;
pub mod scroll;
pub mod surface;
pub mod tween;
pub mod viewer;

pub use controller::{ControllerConfig, SceneController, SceneSession};
pub use disposer::{Disposer, DisposerStack};
pub use hero::HeroOverlay;
pub use loader::{spawn_load, LoadComplete};
pub use pointer::{PointerTracker, ROTATE_GAIN};
pub use scroll::{BandPosition, ScrollAnimator, VisibilityBand};
pub use surface::{GpuSurface, RecordingSurface, RenderSurface};
pub use tween::{Ease, Timeline, Tween};
pub use viewer::{run, ViewerConfig};
