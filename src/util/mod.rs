//! Small operating-system helpers

pub mod fs;

pub use fs::{create_dir, exist, file_size, PRIVATE_DIR_MODE};
