use crate::support::load_cldr_or_exit;
use pluralc_cldr::{CldrError, DisplayName, display_name, normalize_locale};
use pluralc_kernel::compile_entries;

fn exit_with(error: CldrError) -> ! {
    eprintln!("error: {error}");
    std::process::exit(1);
}

pub fn run(cldr_dir: String, locale: String, json_output: bool) {
    let data = load_cldr_or_exit(&cldr_dir);
    let (rules_locale, rules) = data
        .rules_for(&locale)
        .unwrap_or_else(|| exit_with(CldrError::NoRules(locale.clone())));
    let (name, superseded_by) = match display_name(&data, &locale) {
        Ok(DisplayName::Named(name)) => (name, None),
        Ok(DisplayName::Superseded { by, name }) => (name, Some(by)),
        Err(error) => exit_with(error),
    };
    let set = compile_entries(&normalize_locale(rules_locale), rules)
        .unwrap_or_else(|e| exit_with(e.into()));
    tracing::debug!(locale = %locale, rules = %rules_locale, "resolved locale");

    if json_output {
        let payload = serde_json::json!({
            "locale": locale,
            "name": name,
            "superseded_by": superseded_by,
            "rules": normalize_locale(rules_locale),
            "plurals": set.category_count(),
            "formula": set.formula,
            "cases": set.categories,
            "examples": set.examples,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
    } else {
        let cases: Vec<String> = set.categories.iter().map(ToString::to_string).collect();
        println!("pluralc lookup {locale}");
        println!("  Name: {name}");
        if let Some(by) = &superseded_by {
            println!("  Superseded by: {by}");
        }
        println!("  Rules: {}", normalize_locale(rules_locale));
        println!("  Plurals: {}", set.category_count());
        println!("  Formula: {}", set.formula);
        println!("  Cases: {}", cases.join(", "));
        println!(
            "  Plural-Forms: nplurals={}; plural=({});",
            set.category_count(),
            set.formula
        );
    }
}
