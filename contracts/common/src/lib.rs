//! Shared utilities for the Fulcrum contract suite.
//!
//! This crate provides:
//! - [`admin_registry`]: the administrator membership set used to gate
//!   privileged contract calls.

#![no_std]

pub mod admin_registry;

pub use admin_registry::*;
