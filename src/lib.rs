pub mod arg;
pub mod command;
pub mod config;
pub mod core;
pub mod errors;
pub mod extensions;
pub mod prompter;
pub mod logging;
pub mod scheduler;
pub mod ui;

