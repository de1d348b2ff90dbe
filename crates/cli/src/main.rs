//! Command-line entry point for the `agentry` application.
//!
//! All functionality lives in the library crate; this binary only delegates.

fn main() -> anyhow::Result<()> {
    agentry::run()
}
