use std::env;

mod cli;
mod pass;
mod rand;

fn main() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };

    let args: Vec<String> = env::args().collect();
    cli::run(&args);
}
