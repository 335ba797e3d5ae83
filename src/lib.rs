pub mod app;
pub mod batch;
pub mod config;
pub mod http_probe;
pub mod input;
pub mod report;
