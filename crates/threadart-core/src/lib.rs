pub mod config;
pub mod constants;
pub mod crop;
pub mod error;
pub mod generation;
pub mod geometry;
pub mod idle;
pub mod radial;
pub mod scene;
pub mod schedule;
pub mod signals;
pub mod storage;
pub mod surface;
pub mod threads;

pub use config::*;
pub use crop::{preview_size_for_viewport, CropState, Cropper};
pub use error::*;
pub use generation::*;
pub use geometry::*;
pub use idle::IdleTracker;
pub use radial::{PointerOffset, RadialPattern};
pub use scene::*;
pub use schedule::*;
pub use signals::*;
pub use storage::*;
pub use surface::*;
pub use threads::*;
