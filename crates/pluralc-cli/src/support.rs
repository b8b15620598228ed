use pluralc_cldr::{BatchOptions, CldrData, Conversion, convert_all};
use tracing_subscriber::EnvFilter;

/// Route `tracing` output to stderr; stdout carries only the document.
pub fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn load_cldr_or_exit(cldr_dir: &str) -> CldrData {
    CldrData::load(cldr_dir).unwrap_or_else(|e| {
        eprintln!("error: failed to load CLDR data from {cldr_dir}: {e}");
        std::process::exit(1);
    })
}

pub fn convert_or_exit(data: &CldrData, options: &BatchOptions) -> Conversion {
    convert_all(data, options).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

/// Split a `CATEGORY=RULE` argument.
pub fn parse_rule_arg_or_exit(arg: &str) -> (String, String) {
    match arg.split_once('=') {
        Some((category, rule)) if !category.trim().is_empty() => {
            (category.trim().to_string(), rule.to_string())
        }
        _ => {
            eprintln!("error: invalid --rule `{arg}`; expected CATEGORY=RULE");
            std::process::exit(1);
        }
    }
}
