use crate::support::parse_rule_arg_or_exit;
use pluralc_kernel::compile_entries;

pub fn run(language: String, rules: Vec<String>, json_output: bool) {
    let entries: Vec<(String, String)> = rules
        .iter()
        .map(|arg| parse_rule_arg_or_exit(arg))
        .collect();
    let set = compile_entries(&language, entries).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&set).expect("json serialization")
        );
    } else {
        let cases: Vec<String> = set.categories.iter().map(ToString::to_string).collect();
        println!("pluralc compile {language}");
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
