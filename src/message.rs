//! Static greeting message

/// Greeting printed by the demo entry point
pub const MSG: &str = "hello gweid utils";
