// Device inventory collection and export
pub mod types;
pub mod collector;
pub mod writer;

pub use collector::collect_inventory;
pub use types::CollectionReport;
pub use writer::write_inventory;
