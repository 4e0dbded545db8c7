//! cn - canistry binary entry point
//!
//! Thin wrapper over [`canistry::cli::run`]: the library layers return
//! typed results; this boundary converts an unrecovered error into a
//! printed message and a non-zero process exit.

fn main() {
    if let Err(e) = canistry::cli::run() {
        canistry::ui::output::error(format!("{:#}", e));
        std::process::exit(1);
    }
}
