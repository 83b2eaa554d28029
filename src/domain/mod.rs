//! Domain layer - Week records and id generation

pub mod id;
pub mod week;

pub use id::{IdGenerator, IdStrategy, TimestampIdGenerator, UuidIdGenerator};
pub use week::{Week, WeekPatch};
