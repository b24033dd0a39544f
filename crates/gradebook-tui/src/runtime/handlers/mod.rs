//! Effect handlers for the TUI runtime.
//!
//! Each handler performs one backend call and returns the `UiEvent` carrying
//! its result. Handlers never touch state.
//!
//! ## Pure Async Pattern
//!
//! The runtime uses `spawn_effect` to spawn a handler and send its result to
//! the inbox:
//!
//! ```ignore
//! let client = self.client.clone();
//! self.spawn_effect(move || handlers::students_load(client));
//! ```
//!
//! `ApiError`s are turned into their display text here, so the reducer only
//! ever sees `Result<T, String>`.

pub mod courses;
pub mod statistics;
pub mod students;

pub use courses::*;
pub use statistics::*;
pub use students::*;

#[cfg(test)]
mod tests;
