pub mod batch_runner;
pub mod processor;

pub use batch_runner::BatchRunner;
pub use processor::MetabolismProcessor;
