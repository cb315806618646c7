//! Console output helpers
//!
//! Human-readable progress lines, mirroring the check/generate flow. Not a
//! stable contract and not machine-parseable.

/// Print a success line
pub fn success(msg: &str) {
    println!("  ✓  {msg}");
}

/// Print an error line
pub fn error(msg: &str) {
    println!("  ✗  {msg}");
}

/// Print a section header
pub fn header(msg: &str) {
    println!();
    println!(" {msg}");
    println!();
}
