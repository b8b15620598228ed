use crate::cli::OutputFormat;
use crate::render::render_document;
use crate::support::{convert_or_exit, load_cldr_or_exit};
use pluralc_cldr::BatchOptions;

pub struct Args {
    pub cldr_dir: String,
    pub format: OutputFormat,
    pub keep_going: bool,
    pub languages: Vec<String>,
}

pub fn run(args: Args) {
    let data = load_cldr_or_exit(&args.cldr_dir);
    let options = BatchOptions {
        fail_fast: !args.keep_going,
        languages: args.languages,
    };
    let conversion = convert_or_exit(&data, &options);

    let document = render_document(args.format, &conversion.languages);
    tracing::debug!(
        format = ?args.format,
        locales = conversion.languages.len(),
        bytes = document.len(),
        "rendered document"
    );
    print!("{document}");

    if !conversion.is_complete() {
        for failure in &conversion.failures {
            eprintln!("error: {}: {}", failure.locale, failure.error);
        }
        eprintln!(
            "error: {} of {} locales failed to convert",
            conversion.failures.len(),
            conversion.failures.len() + conversion.languages.len()
        );
        std::process::exit(1);
    }
}
