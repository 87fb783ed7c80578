pub mod executor;
pub mod handlers;

pub use crate::events::PageCommand;
