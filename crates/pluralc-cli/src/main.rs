//! pluralc CLI: the `pluralc` command.

mod cli;
mod commands;
mod render;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    support::init_logging(cli.verbose);

    match cli.command {
        Commands::Convert {
            cldr_dir,
            format,
            keep_going,
            languages,
        } => commands::convert::run(commands::convert::Args {
            cldr_dir,
            format,
            keep_going,
            languages,
        }),

        Commands::Compile {
            language,
            rules,
            json,
        } => commands::compile::run(language, rules, json),

        Commands::Lookup {
            locale,
            cldr_dir,
            json,
        } => commands::lookup::run(cldr_dir, locale, json),
    }
}
