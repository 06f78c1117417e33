//! Core library components.
//!
//! Everything here is independent of the terminal: handlers log with
//! `tracing` and return typed results, the CLI decides what to print.

pub mod admin_key;
pub mod config;
pub mod constants;
pub mod domain;
pub mod health;
pub mod orchestrator;
pub mod prereq;
pub mod prompt;
pub mod runner;
pub mod scaffold;
pub mod stack;
pub mod store;

pub use orchestrator::Orchestrator;
