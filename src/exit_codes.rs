//! Standard exit codes for the splashgen binary
//!
//! Every precondition failure and generation error maps to a non-zero code,
//! so scripts can rely on the exit status rather than scraping console lines.

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// Generic error (avoid using - be more specific)
pub const EXIT_ERROR: i32 = 1;

/// Panic or unrecoverable error
pub const EXIT_PANIC: i32 = 101;

/// A precondition check failed (no platforms, missing splash.png or config.xml)
pub const EXIT_PRECONDITION_ERROR: i32 = 102;

/// Descriptor could not be parsed or has no name field
pub const EXIT_DESCRIPTOR_ERROR: i32 = 103;

/// At least one splashscreen failed to generate
pub const EXIT_GENERATION_ERROR: i32 = 104;

/// Platform registry file is malformed
pub const EXIT_REGISTRY_ERROR: i32 = 105;

/// I/O error (file not found, permission denied, disk error)
pub const EXIT_IO_ERROR: i32 = 106;
