use std::env;

mod cli;
mod exits;
mod terminal;
mod tui;

fn main() {
    exits::install_handlers();
    exits::harden_process();

    let args: Vec<String> = env::args().collect();
    std::process::exit(cli::run(args));
}
