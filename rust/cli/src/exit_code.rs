//! Exit code constants for the CLI application.
//!
//! Every command maps its outcome to one of these values.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code: bad arguments, bad configuration, I/O failure,
/// or a hunt that ran out of boards.
pub const ERROR: i32 = 2;
