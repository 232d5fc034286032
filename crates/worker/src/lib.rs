//! The explanation worker: a single long-running loop that drains
//! pending jobs from the registry and runs the slide pipeline on each.

pub mod config;
pub mod poll;

pub use config::WorkerConfig;
pub use poll::{WorkerError, WorkerLoop};
