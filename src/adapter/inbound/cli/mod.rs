//! CLI module graph.

pub mod command;
pub mod config;
pub mod gather;
pub mod output;
pub mod push;
pub mod run;
