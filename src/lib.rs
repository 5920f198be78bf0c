// teachterm - teaching terminal
// Library exports

pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod session;
pub mod shell;
pub mod surface;
