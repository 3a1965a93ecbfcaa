#![deny(missing_docs)]
#![doc = "Core types, errors and the record store capability for the CatApp scaling engine."]

pub mod errors;
pub mod reaction;
pub mod serde;
pub mod store;
pub mod surface;

pub use errors::{CatError, ErrorInfo};
pub use reaction::{EnergyType, ReactionDescriptor, DESCRIPTOR_SEPARATOR};
pub use store::{EnergyRecord, JoinedReactionRow, RecordStore, ScalingRow, SingleReactionRow};
pub use surface::{
    normalize_termination, SurfaceContext, CANONICAL_TERMINATION, LEGACY_TERMINATION,
};
