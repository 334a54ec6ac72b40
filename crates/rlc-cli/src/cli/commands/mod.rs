//! CLI command handlers. Each command is in its own file.

mod checksum;
mod console;
mod scan;
mod verify;

pub use checksum::run_checksum;
pub use scan::run_scan;
pub use verify::run_verify;
