//! Process exit codes expected by the toolchain's wrapper scripts

/// Successful termination (including help/version display)
pub const OK: i32 = 0;

/// Command line usage error: unknown option, unsupported value,
/// missing experiment file
pub const USAGE: i32 = 1;
