mod clipboard;
mod context;
mod flags;
mod help;
mod parse;
pub mod prompts;

pub use clipboard::copy as copy_to_clipboard;
pub use context::{Context, Stop};
pub use flags::CliFlags;
pub use parse::parse;

/// Run the CLI and return the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    let ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e);
            prompts::help_hint();
            return 2;
        }
    };

    match ctx.run() {
        Ok(()) | Err(Stop::Done) => 0,
        Err(Stop::Failed(e)) => {
            prompts::error(&format!("Error: {e}"));
            1
        }
    }
}
