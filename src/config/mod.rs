/// Configuration subsystem - Editor settings and preferences
///
/// This module handles loading settings from .mementorc files.

pub mod rc;

// Re-export public interface
pub use rc::{RcConfig, RcLoader};
