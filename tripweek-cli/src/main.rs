//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = tripweek_cli::run() {
        eprintln!("tripweek: {err}");
        std::process::exit(1);
    }
}
