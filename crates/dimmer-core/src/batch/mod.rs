pub mod config;
mod driver;
mod types;

pub use driver::{plan_outputs, run_batch, run_batch_reported};
pub use types::{BatchOutput, BatchReporter, BatchStage, WrittenProfile};
