// Utility modules for shared functionality
pub mod fs;
pub use fs::{atomic_write, ensure_dir};
