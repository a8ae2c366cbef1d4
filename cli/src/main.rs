mod commands;
mod terminal;

use commands::{CommandLine, convert};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet);
    print::banner(commands.no_banner, commands.quiet);

    let cfg = commands.config();

    print::header("converting ranges", commands.quiet);
    let stats = convert::convert(&commands, &cfg)?;
    convert::report(&stats, commands.quiet);

    Ok(())
}
