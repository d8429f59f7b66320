//! Field diagram, batted-ball projection and interactive plot state.
//!
//! - `geometry`: static field landmarks
//! - `projection`: polar → Cartesian mapping
//! - `hover`: hover/tooltip state machine
//! - `scene`: declarative scene built from the above
//! - `svg`: scene serialization
//! - `session`: one rendering session tying it together

pub mod geometry;
pub mod hover;
pub mod projection;
pub mod scene;
pub mod session;
pub mod svg;


pub use geometry::FieldGeometry;
pub use hover::{Clock, HoverMachine, HoverPhase, ManualClock, SystemClock};
pub use projection::{project, FieldPoint};
pub use scene::{build_scene, Scene, Shape};
pub use session::PlotSession;
