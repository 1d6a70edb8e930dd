mod snapshot;
pub mod square;
pub mod values;

pub use snapshot::Snapshot;
