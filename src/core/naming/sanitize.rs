//! Filename sanitization
//!
//! Strips characters that are unsafe in filenames on common filesystems.
//! Sanitization runs on the fully resolved filename stem, after template
//! resolution and before case conversion.

use regex::Regex;
use std::sync::OnceLock;

fn illegal_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"[<>:"/\\|?*]"#).expect("valid regex"))
}

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

fn non_word_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\-.]").expect("valid regex"))
}

fn multiple_hyphens() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-+").expect("valid regex"))
}

/// Sanitizes a filename stem
///
/// When `enabled` is `false` the input is returned unchanged. Otherwise:
/// filesystem-reserved characters (`< > : " / \ | ? *`) are removed,
/// whitespace runs become single hyphens, anything outside word
/// characters, hyphens, and dots is dropped, repeated hyphens collapse,
/// and leading/trailing hyphens are trimmed.
///
/// Idempotent: sanitizing already-sanitized output is a no-op.
pub fn sanitize(text: &str, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }

    let no_illegal = illegal_chars().replace_all(text, "");
    let hyphenated = whitespace_runs().replace_all(&no_illegal, "-");
    let word_only = non_word_chars().replace_all(&hyphenated, "");
    let collapsed = multiple_hyphens().replace_all(&word_only, "-");
    collapsed.trim_matches('-').to_string()
}
