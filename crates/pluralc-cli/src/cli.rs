use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "pluralc",
    about = "pluralc: compiles CLDR cardinal plural rules into gettext Plural-Forms formulas",
    version
)]
pub struct Cli {
    /// Log more on stderr (-v info, -vv debug); RUST_LOG applies otherwise
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert every CLDR locale into one gettext plural rules document
    Convert {
        /// CLDR JSON root holding main/en-US/ and supplemental/
        #[arg(long, default_value = "cldr")]
        cldr_dir: String,

        /// Output document format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Report failing locales and keep converting the rest
        #[arg(long)]
        keep_going: bool,

        /// Only convert this locale (repeatable; `pt-PT` or `pt_PT`)
        #[arg(long = "language")]
        languages: Vec<String>,
    },

    /// Compile one ad-hoc rule set
    Compile {
        /// Label used in diagnostics
        #[arg(long, default_value = "und")]
        language: String,

        /// CATEGORY=RULE, with CLDR sample sections allowed (repeatable)
        #[arg(long = "rule", required = true)]
        rules: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve one locale id (`sr-Latn-BA`) to its name and compiled rules
    Lookup {
        /// Locale id; the script is ignored and a territory falls back to its language
        locale: String,

        /// CLDR JSON root holding main/en-US/ and supplemental/
        #[arg(long, default_value = "cldr")]
        cldr_dir: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[value(name = "html")]
    Html,
    #[value(name = "json")]
    Json,
    #[value(name = "prettyjson")]
    PrettyJson,
    #[value(name = "php")]
    Php,
}
