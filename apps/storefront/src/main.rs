//! # BeesyBoutique Storefront Entry Point
//!
//! The setup lives in `lib.rs` for testability; this only maps the result
//! to an exit code.

use std::process::ExitCode;

fn main() -> ExitCode {
    match beesy_storefront::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("beesy-storefront: {err}");
            ExitCode::FAILURE
        }
    }
}
