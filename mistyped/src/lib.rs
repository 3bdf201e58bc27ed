pub mod handlers;
pub mod server;

// Re-export commonly used items for convenience
pub use handlers::{AppState, route};
pub use server::{bind, serve};
