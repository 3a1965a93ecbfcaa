//! Scaling relations between reaction energies: retrieval, pairing,
//! least-squares fit and chart labels.

pub mod engine;
pub mod fit;
pub mod pairing;
pub mod plot;
pub mod retrieval;
pub mod wrap;

pub use engine::{ScalingEngine, ScalingOptions};
pub use fit::{compute_fit, fit_label, LinearFit};
pub use pairing::{normalize, ObservationPair};
pub use plot::{PlotPayload, ScalingPlot};
pub use retrieval::{fetch, ScalingQuery};
pub use wrap::{wrap, DEFAULT_LINE_WRAP};
