use miette::Result;

/// Main entry point for the tortoise-hare CLI tool
fn main() -> Result<()> {
    // Install miette's panic and error handler so broken path invariants are
    // reported readably
    miette::set_panic_hook();

    // Run the library's main function
    tortoise_hare::run()
}
