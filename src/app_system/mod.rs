//! System orchestration, startup, and shutdown logic.

pub mod pizzeria_system;
pub mod tracing;

pub use self::pizzeria_system::*;
pub use self::tracing::*;
