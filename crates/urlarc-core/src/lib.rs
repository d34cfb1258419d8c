pub mod config;
pub mod logging;

// Pipeline stages, in the order they run.
pub mod feed;
pub mod discovery;
pub mod extract;
pub mod archive;
pub mod report;
pub mod pipeline;
