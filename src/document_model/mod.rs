/// Document model subsystem - text storage and snapshot history
///
/// The document owns the text, snapshots capture it, and the history keeps
/// the undo/redo stacks of snapshots.

pub mod document;
pub mod history;
pub mod snapshot;

// Re-export main types for convenience
pub use document::Document;
pub use history::History;
pub use snapshot::Snapshot;
