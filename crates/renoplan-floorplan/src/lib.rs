//! # Renoplan Floorplan
//!
//! The interactive floorplan geometry engine: a coupled-wall editing model
//! for multi-room, axis-aligned floor plans. Moving or resizing a wall keeps
//! adjacent rooms, shared walls, and door/window openings consistent, under
//! pixel/millimeter/centimeter unit conversion and a fixed outer boundary.
//!
//! The engine is a set of stateless transformations over [`model::Floor`]
//! data:
//! - `segments`: deduplicated wall segments for rendering
//! - `shared`: discovery of every room edge coincident with a wall
//! - `constraints`: the legal `[min, max]` range a wall may move to
//! - `mutate`: application of an approved wall position/length change
//! - `layout`: derivation of a floor from a centimeter-based spec
//!
//! [`editor::FloorplanEditor`] sequences those pieces into the
//! select → constrain → mutate → re-render cycle the UI drives, and
//! [`store`] provides the persistence boundary for the whole plan.

pub mod config;
pub mod constraints;
pub mod editor;
pub mod layout;
pub mod model;
pub mod mutate;
pub mod segments;
pub mod shared;
pub mod store;
pub mod wall;

pub use config::{FloorBounds, PlanConfig};
pub use constraints::{LengthConstraints, PositionConstraints};
pub use editor::{FloorplanEditor, MmRange, WallSelection};
pub use model::{Floor, FloorPlan, Opening, OpeningKind, Room};
pub use shared::SharedEdge;
pub use wall::{Axis, Orientation, Side, Wall, WallMeta};
