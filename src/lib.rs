// Library root: re-exports all modules so integration tests and the binary
// can access the pipeline's public API.

pub mod cleaner;
pub mod config;
pub mod fetch;
pub mod matcher;
pub mod normalize;
pub mod pipeline;
pub mod players;
pub mod rankings;
