//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod week_store;

pub use manage_config::ConfigService;
pub use week_store::{open_workspace_store, WeekStore, WorkspaceWeekStore, WEEKS_KEY};
