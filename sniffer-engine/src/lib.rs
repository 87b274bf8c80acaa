pub mod error;
pub mod runtime;

// Re-export the runtime functions so frontends can simply do:
pub use error::EngineError;
pub use runtime::{list_interfaces, process_frame, run_capture_mode};
