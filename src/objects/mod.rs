//! Model object managers
//!
//! One manager per drawable object kind: points, frames, cables, tendons,
//! areas, solids and links. Each pairs top-level geometry and lifecycle
//! operations with `set`/`get` assignment sub-facades.

mod area;
mod cable;
mod frame;
mod link;
mod point;
mod solid;
mod tendon;

pub use area::{AreaGet, AreaObj, AreaSet};
pub use cable::{CableGet, CableObj, CableSet};
pub use frame::{FrameGet, FrameObj, FrameSet};
pub use link::{LinkGet, LinkObj, LinkSet};
pub use point::{PointGet, PointObj, PointSet};
pub use solid::{SolidGet, SolidObj, SolidSet};
pub use tendon::{TendonGet, TendonObj, TendonSet};
