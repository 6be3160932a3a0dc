//! RNG test binary - streams entropy draws to stdout for statistical testing.
//!
//! Usage:
//!   ./rng_test              # raw 32-bit reads from /dev/urandom
//!   ./rng_test -n 26        # uniform(26) draws, one byte per draw
//!
//! Pipe to test suites:
//!   ./rng_test | dieharder -a -g 200
//!   ./rng_test | RNG_test stdin -tlmax 1TB

use std::io::{self, Write};
use std::process;

mod entropy {
    // Inline the entropy source to avoid module path issues in bin target
    include!("../src/rand/entropy.rs");
}

use entropy::Entropy;

fn print_help() {
    eprintln!("Usage: rng_test [OPTIONS]");
    eprintln!();
    eprintln!("Outputs entropy draws to stdout for statistical testing.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -n <N>     Stream uniform(N) draws (N in 1..=256), one byte each");
    eprintln!("  -h, --help Show this help");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  rng_test | dieharder -a -g 200");
    eprintln!("  rng_test -n 26 | ent");
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        process::exit(0);
    }

    let n = match n_arg(&args) {
        Ok(n) => n,
        Err(()) => {
            eprintln!("rng_test: -n takes a number in 1..=256");
            process::exit(1);
        }
    };

    let mut ent = Entropy::open().unwrap_or_else(|e| {
        eprintln!("rng_test: {e}");
        process::exit(1);
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut buf = [0u8; 8192];

    loop {
        let filled = match n {
            Some(n) => fill_uniform(&mut ent, n, &mut buf),
            None => fill_raw(&mut ent, &mut buf),
        };
        if let Err(e) = filled {
            eprintln!("rng_test: {e}");
            process::exit(1);
        }
        if out.write_all(&buf).is_err() {
            break;
        }
    }
}

/// Resolve `-n`: absent is raw mode; a missing, non-numeric, or
/// out-of-range value is an error.
fn n_arg(args: &[String]) -> Result<Option<u32>, ()> {
    match args.iter().position(|a| a == "-n") {
        None => Ok(None),
        Some(i) => match args.get(i + 1).and_then(|v| v.parse().ok()) {
            Some(n) if (1..=256).contains(&n) => Ok(Some(n)),
            _ => Err(()),
        },
    }
}

fn fill_raw(ent: &mut Entropy, buf: &mut [u8]) -> Result<(), entropy::EntropyError> {
    for chunk in buf.chunks_exact_mut(4) {
        chunk.copy_from_slice(&ent.next_u32()?.to_le_bytes());
    }
    Ok(())
}

fn fill_uniform(ent: &mut Entropy, n: u32, buf: &mut [u8]) -> Result<(), entropy::EntropyError> {
    for byte in buf.iter_mut() {
        *byte = ent.uniform(n)? as u8;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("rng_test")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_n_flag_is_raw_mode() {
        assert_eq!(n_arg(&args(&[])), Ok(None));
    }

    #[test]
    fn n_with_value_in_range() {
        assert_eq!(n_arg(&args(&["-n", "26"])), Ok(Some(26)));
        assert_eq!(n_arg(&args(&["-n", "1"])), Ok(Some(1)));
        assert_eq!(n_arg(&args(&["-n", "256"])), Ok(Some(256)));
    }

    #[test]
    fn n_without_value_is_an_error() {
        assert_eq!(n_arg(&args(&["-n"])), Err(()));
    }

    #[test]
    fn n_with_bad_value_is_an_error() {
        assert_eq!(n_arg(&args(&["-n", "0"])), Err(()));
        assert_eq!(n_arg(&args(&["-n", "257"])), Err(()));
        assert_eq!(n_arg(&args(&["-n", "abc"])), Err(()));
    }
}
