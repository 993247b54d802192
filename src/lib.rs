// Library target shared by the binary, the integration tests and the
// criterion benchmarks.

pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod generator;
pub mod session;
pub mod ui;
