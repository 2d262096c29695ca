//! Terminal shell for the Shelf media catalog.
//!
//! The binary reads one command per line, drives a
//! [`shelf_core::Session`] and renders the catalog back as text. Config
//! loading and command parsing live here too so they can be tested without
//! spawning the binary.
#![allow(missing_docs)]

pub mod command;
pub mod config;
pub mod shell;

pub use config::{ConfigLoadError, ConfigLoader, ShellConfig};
pub use shell::{Flow, Shell};
