//! wordypond - Weekly vocabulary word lists
//!
//! Keeps an ordered collection of titled word lists ("weeks") in a key-value
//! store, loading it whole on open and rewriting it whole on every change.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use application::WeekStore;
pub use domain::{Week, WeekPatch};
pub use error::WordypondError;
