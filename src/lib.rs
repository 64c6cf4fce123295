#![doc = include_str!("../README.md")]

pub mod api;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod resolver;
pub mod selectors;
pub mod session;
pub mod sites;
pub mod tools;
pub mod types;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use types::*;
