//! Core library for the gradebook client.
//!
//! Holds everything that does not touch the terminal: the REST client for the
//! grade-record backend, the wire/domain models, input validation, pure
//! presentation mappings, configuration, and logging setup.

pub mod api;
pub mod config;
pub mod logging;
pub mod models;
pub mod validation;
pub mod view;
