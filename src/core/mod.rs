//! Core library components.
//!
//! This module contains the drag pipeline: manifest loading, compose file
//! generation, Vault access and writing secrets to disk.

pub mod compose;
pub mod constants;
pub mod manifest;
pub mod materialize;
pub mod secret;
pub mod vault;
