//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    match airfield_cli::run() {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("airfield: {err}");
            std::process::exit(1);
        }
    }
}
