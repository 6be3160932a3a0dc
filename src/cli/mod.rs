mod flags;
mod parse;
mod usage;

pub use flags::CliFlags;
pub use parse::{parse, ParseError};

use std::io::Write;
use std::process;

use crate::pass::output::SecureBufWriter;
use crate::pass::{charset, generate, GenerationRequest};
use crate::rand::Entropy;

/// Run the CLI: parse flags, validate the request, stream one password to
/// stdout. Exits the process on any error; returns on success.
pub fn run(args: &[String]) {
    let flags = match parse(args) {
        Ok(flags) => flags,
        Err(e) => usage_error(&e.to_string()),
    };

    let selection = charset::compose(&flags.classes);
    let request = match GenerationRequest::new(selection, flags.length) {
        Ok(request) => request,
        Err(e) => usage_error(&e.to_string()),
    };

    let mut entropy = match Entropy::open() {
        Ok(entropy) => entropy,
        Err(e) => fatal(&e.to_string()),
    };

    let stdout = std::io::stdout();
    let mut out = SecureBufWriter::new(stdout.lock());

    if let Err(e) = generate(&request, &mut entropy, &mut out) {
        drop(out); // flush whatever was already produced
        fatal(&e.to_string());
    }

    if let Err(e) = out.write_all(b"\n").and_then(|_| out.flush()) {
        fatal(&format!("write failed: {}", e));
    }
}

fn usage_error(msg: &str) -> ! {
    usage::error(msg);
    usage::usage();
    process::exit(1);
}

fn fatal(msg: &str) -> ! {
    usage::error(msg);
    process::exit(1);
}
