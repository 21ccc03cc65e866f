//! CLI command handlers. Each command is in its own file.

mod count;
mod domains;
mod normalize;
mod report;
mod stats;

pub use count::run_count;
pub use domains::run_domains;
pub use normalize::run_normalize;
pub use report::run_report;
