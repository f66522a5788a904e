//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = hoinar_cli::run() {
        eprintln!("hoinar: {err}");
        std::process::exit(1);
    }
}
