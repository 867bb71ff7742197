pub mod loader;

pub use loader::{ServiceHistoryLoader, ServiceHistoryLoaderError, ServiceHistoryRow};
