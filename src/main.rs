mod check_main;
mod render_main;

use clap::{Parser, Subcommand};

use check_main::check_main;
use check_main::CheckCli;
use render_main::render_main;
use render_main::RenderCli;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check a flag set against the rules for a kind of declaration
    Check(CheckCli),
    /// Print a flag set as keywords
    Render(RenderCli),
}

fn real_main() -> i32 {
    let cli = Cli::parse();
    let res = match cli.command {
        Command::Check(cli) => check_main(cli),
        Command::Render(cli) => render_main(cli).map(|_| 0),
    };
    match res {
        Ok(code) => code,
        Err(err) => {
            println!("Error: {:?}", err);
            1
        }
    }
}
fn main() {
    env_logger::init();
    std::process::exit(real_main());
}
