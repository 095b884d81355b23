pub mod classify;
pub mod consts;
pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod resolver;
pub mod runner;
pub mod server;
