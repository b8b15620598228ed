//! Output documents for `pluralc convert`.

use crate::cli::OutputFormat;
use pluralc_cldr::LanguageEntry;
use std::collections::BTreeMap;
use std::fmt::Write;

pub fn render_document(format: OutputFormat, languages: &BTreeMap<String, LanguageEntry>) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(languages).expect("json serialization"),
        OutputFormat::PrettyJson => {
            serde_json::to_string_pretty(languages).expect("json serialization") + "\n"
        }
        OutputFormat::Php => render_php(languages),
        OutputFormat::Html => render_html(languages),
    }
}

fn php_quote(text: &str) -> String {
    format!("'{}'", text.replace('\\', "\\\\").replace('\'', "\\'"))
}

fn render_php(languages: &BTreeMap<String, LanguageEntry>) -> String {
    let mut out = String::from("<?php\nreturn array(");
    for (locale, entry) in languages {
        let cases: Vec<String> = entry
            .cases
            .iter()
            .map(|case| php_quote(case.as_str()))
            .collect();
        // Writing to a String cannot fail.
        let _ = write!(
            out,
            "\n    {} => array(\
             \n        'name' => {},\
             \n        'plurals' => {},\
             \n        'formula' => {},\
             \n        'cases' => array({}),\
             \n        'examples' => array(",
            php_quote(locale),
            php_quote(&entry.name),
            entry.plurals,
            php_quote(&entry.formula),
            cases.join(", "),
        );
        for (case, example) in &entry.examples {
            let _ = write!(
                out,
                "\n            {} => {},",
                php_quote(case.as_str()),
                php_quote(example)
            );
        }
        out.push_str("\n        ),\n    ),");
    }
    out.push_str("\n);\n");
    out
}

fn html_escape(text: &str) -> String {
    v_htmlescape::escape(text).to_string()
}

const HTML_HEAD: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>gettext plural rules - built from CLDR</title>
<meta name="description" content="gettext plural rules for .po files generated from the Unicode CLDR data">
<style>
table { border-collapse: collapse; }
th, td { border: 1px solid #ccc; padding: 2px 6px; vertical-align: top; }
ol.cases code { white-space: nowrap; display: block; }
</style>
</head>
<body>
<table>
<thead>
<tr><th>Language code</th><th>Language name</th><th># plurals</th><th>Formula</th><th>Plurals</th></tr>
</thead>
<tbody>
"#;

const HTML_TAIL: &str = "</tbody>\n</table>\n</body>\n</html>\n";

fn render_html(languages: &BTreeMap<String, LanguageEntry>) -> String {
    let mut out = String::from(HTML_HEAD);
    for (locale, entry) in languages {
        let _ = write!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td><ol class=\"cases\" start=\"0\">",
            html_escape(locale),
            html_escape(&entry.name),
            entry.plurals,
            html_escape(&entry.formula),
        );
        for case in &entry.cases {
            let _ = write!(out, "<li><span>{}</span>", html_escape(case.as_str()));
            if let Some(example) = entry.examples.get(case) {
                let _ = write!(out, "<code>{}</code>", html_escape(example));
            }
            out.push_str("</li>");
        }
        out.push_str("</ol></td></tr>\n");
    }
    out.push_str(HTML_TAIL);
    out
}
