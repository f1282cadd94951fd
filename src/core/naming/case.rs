//! Filename case conversion
//!
//! Every case style is derived from one canonical kebab form: lowercase,
//! whitespace runs collapsed to single hyphens, repeated hyphens collapsed,
//! edge hyphens trimmed. `FileCase::Original` is the exception: it is a
//! true passthrough and skips normalization entirely.

use crate::domain::FileCase;
use regex::Regex;
use std::sync::OnceLock;

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

fn multiple_hyphens() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-+").expect("valid regex"))
}

/// Applies a case style to `text`
///
/// Pure and total over any input; the empty string maps to the empty
/// string. Kebab normalization is idempotent, so
/// `apply_case(apply_case(s, Kebab), Kebab) == apply_case(s, Kebab)`.
pub fn apply_case(text: &str, case: FileCase) -> String {
    // Original is a documented passthrough, not an alias for Pascal.
    if case == FileCase::Original {
        return text.to_string();
    }

    let kebab = to_kebab(text);

    match case {
        FileCase::Kebab => kebab,
        FileCase::Snake => kebab.replace('-', "_"),
        FileCase::Camel => camelize(&kebab, false),
        FileCase::Pascal => camelize(&kebab, true),
        FileCase::Original => unreachable!("handled above"),
    }
}

/// Normalizes text to the canonical kebab form
fn to_kebab(text: &str) -> String {
    let lowered = text.to_lowercase();
    let hyphenated = whitespace_runs().replace_all(&lowered, "-");
    let collapsed = multiple_hyphens().replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}

/// Removes hyphens, uppercasing the letter that follows each one
fn camelize(kebab: &str, capitalize_first: bool) -> String {
    let mut result = String::with_capacity(kebab.len());
    let mut uppercase_next = capitalize_first;

    for ch in kebab.chars() {
        if ch == '-' {
            uppercase_next = true;
            continue;
        }
        if uppercase_next {
            result.extend(ch.to_uppercase());
            uppercase_next = false;
        } else {
            result.push(ch);
        }
    }

    result
}
