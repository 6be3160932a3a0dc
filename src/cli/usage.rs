//! Usage text and error reporting on stderr.

// ANSI color codes
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print an error message to stderr (red). Errors are always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}rpass: {msg}{RESET}");
}

/// Print the usage summary to stderr.
pub fn usage() {
    eprintln!("usage: rpass [-aulnp] [-c length]");
    eprintln!("  -a  use uppercase, lowercase, numeric and punctuation characters");
    eprintln!("  -u  use uppercase characters");
    eprintln!("  -l  use lowercase characters");
    eprintln!("  -n  use numeric characters");
    eprintln!("  -p  use punctuation characters");
    eprintln!("  -c <number>  length of the password (20-1024, default 20)");
}
