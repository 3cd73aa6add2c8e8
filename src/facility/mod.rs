mod build;
mod catalog;
mod model;
mod snapshot;

pub use build::build_facility;
pub use model::{BalanceSummary, EntityKind, Facility};
pub use snapshot::{load_snapshot, save_snapshot};
