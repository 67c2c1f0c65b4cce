//! Core library components.
//!
//! This module contains the reusable logic: the encrypted record store,
//! its cipher backends, and configuration handling.

pub mod cipher;
pub mod codec;
pub mod config;
pub mod constants;
pub mod domain;
pub mod generate;
pub mod store;
pub mod validation;
pub mod vault;
pub mod workspace;
