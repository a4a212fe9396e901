/// Event model and time ranges.
pub mod core;
/// Error taxonomy.
pub mod error;
