//! Core types and definitions for the RAMPART simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, spec tables, commands, state snapshots, events, effects and
//! constants. It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod effects;
pub mod enums;
pub mod error;
pub mod events;
pub mod specs;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
