// ============================================================================
// STATE MODULE - persisted client state
// ============================================================================

pub mod session_state;

pub use session_state::*;
