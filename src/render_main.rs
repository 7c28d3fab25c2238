use anyhow::Result;
use clap::Parser;

use jmods::access_string;
use jmods::parse_flags;
use jmods::to_string;
use jmods::RenderContext;

#[derive(Parser)]
pub struct RenderCli {
    /// class, field, method or innerclass
    context: RenderContext,
    /// Flag keywords or numbers (0x prefix for hex), OR-ed together
    #[clap(required = true)]
    flags: Vec<String>,

    /// Leave out the Synthetic(Pseudo) and Deprecated(Pseudo) markers
    #[clap(long)]
    no_pseudo: bool,
}

pub fn render_main(cli: RenderCli) -> Result<()> {
    let mods = parse_flags(cli.flags.iter().map(String::as_str))?;
    let s = if cli.no_pseudo {
        access_string(mods, cli.context)
    } else {
        to_string(mods, cli.context)
    };
    println!("{}", s);
    Ok(())
}
