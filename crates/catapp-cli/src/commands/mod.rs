pub mod ingest;
pub mod plot;
pub mod reactions;
pub mod search;
