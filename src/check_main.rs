use anyhow::bail;
use anyhow::Result;
use clap::Parser;

use jmods::check_class_modifiers;
use jmods::check_field_modifiers;
use jmods::check_inner_class_modifiers;
use jmods::check_method_modifiers;
use jmods::parse_flags;
use jmods::Diagnostic;
use jmods::DiagnosticSink;
use jmods::EntityKind;
use jmods::LogSink;
use jmods::ModifierSet;
use jmods::Pos;

#[derive(Parser)]
pub struct CheckCli {
    /// class, field, method or innerclass
    kind: EntityKind,
    /// Flag keywords or numbers (0x prefix for hex), OR-ed together
    #[clap(required = true)]
    flags: Vec<String>,

    /// The enclosing class is an interface
    #[clap(short, long)]
    interface_owner: bool,
    /// The method is <init>
    #[clap(long)]
    init: bool,
    /// The method is <clinit>
    #[clap(long)]
    clinit: bool,
    /// Source position to report
    #[clap(long, default_value = "0")]
    pos: usize,
    /// Send warnings through the logger instead of stdout
    #[clap(long)]
    log: bool,
}

fn run(cli: &CheckCli, mods: ModifierSet, sink: &mut impl DiagnosticSink) -> Result<()> {
    let pos = Pos(cli.pos);
    let owner = cli.interface_owner;
    match cli.kind {
        EntityKind::Class => check_class_modifiers(sink, mods, pos),
        EntityKind::Field => check_field_modifiers(&owner, sink, mods, pos),
        EntityKind::Method => check_method_modifiers(&owner, sink, mods, pos, cli.init, cli.clinit),
        EntityKind::InnerClassRef => check_inner_class_modifiers(sink, mods, pos),
        kind => bail!("No check for '{}', use class, field, method or innerclass", kind),
    }
    Ok(())
}

pub fn check_main(cli: CheckCli) -> Result<i32> {
    let mods = parse_flags(cli.flags.iter().map(String::as_str))?;

    let warning_count = if cli.log {
        let mut sink = LogSink::default();
        run(&cli, mods, &mut sink)?;
        sink.count
    } else {
        let mut diags: Vec<Diagnostic> = Vec::new();
        run(&cli, mods, &mut diags)?;
        for d in &diags {
            println!("{}", d);
        }
        diags.len()
    };

    // set exit code 1 if there were warnings
    if warning_count > 0 {
        Ok(1)
    } else {
        Ok(0)
    }
}
