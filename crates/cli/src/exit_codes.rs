//! CLI exit code registry.
//!
//! Exit codes are part of the shell contract; batch scripts branch on them.
//!
//! | Code | Meaning                                     |
//! |------|---------------------------------------------|
//! | 0    | Success                                     |
//! | 2    | Usage or configuration error                |
//! | 3    | IO error (unreadable input, unwritable out) |
//! | 4    | Data error (malformed CSV row)              |

pub const EXIT_SUCCESS: u8 = 0;

/// Bad arguments or an invalid configuration file.
pub const EXIT_USAGE: u8 = 2;

/// Filesystem failure reading input or writing output.
pub const EXIT_IO: u8 = 3;

/// Input data that could not be decoded (CSV shape).
pub const EXIT_PARSE: u8 = 4;
