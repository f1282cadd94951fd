//! Color injection for SVG icon bodies
//!
//! Iconify bodies are raw inner markup, so color overrides work on the text
//! itself. The rules, in order:
//!
//! 1. No override requested (`currentColor`/empty): return the body as-is.
//! 2. The body already declares `fill` or `stroke` attributes: rewrite only
//!    the empty ones (`fill=""`, `fill="none"`, same for `stroke`) to the
//!    requested color; bodies with real paint values are left alone.
//! 3. No paint attributes at all: inject `fill="..."` into the opening tag
//!    of every shape element.
//!
//! The color value is injected verbatim; no color-syntax validation happens
//! here.

use crate::domain::is_color_override;
use regex::{Captures, Regex};
use std::sync::OnceLock;

fn paint_attribute() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(fill|stroke)=("|')[^"']*("|')"#).expect("valid regex"))
}

fn empty_paint_attribute() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(fill|stroke)=("|')(?:none)?("|')"#).expect("valid regex"))
}

fn shape_opening_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"<(path|circle|rect|ellipse|polygon|polyline)([\s/>])").expect("valid regex")
    })
}

/// Applies a color override to an icon body
pub fn apply_color(body: &str, color: &str) -> String {
    if !is_color_override(color) {
        return body.to_string();
    }

    if paint_attribute().is_match(body) {
        if empty_paint_attribute().is_match(body) {
            return empty_paint_attribute()
                .replace_all(body, |caps: &Captures| {
                    format!("{}={}{}{}", &caps[1], &caps[2], color, &caps[3])
                })
                .into_owned();
        }
        // Explicit paint values are the designer's intent.
        return body.to_string();
    }

    shape_opening_tag()
        .replace_all(body, |caps: &Captures| {
            format!(r#"<{} fill="{}"{}"#, &caps[1], color, &caps[2])
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_override_is_passthrough() {
        let body = r#"<path d="M1 1"/>"#;
        assert_eq!(apply_color(body, "currentColor"), body);
        assert_eq!(apply_color(body, ""), body);
    }

    #[test]
    fn test_injects_fill_when_no_paint_declared() {
        let body = r#"<path d="M1 1"/>"#;
        assert_eq!(
            apply_color(body, "#FF0000"),
            r##"<path fill="#FF0000" d="M1 1"/>"##
        );
    }

    #[test]
    fn test_injects_fill_into_every_shape_element() {
        let body = r#"<circle cx="8" cy="8" r="4"/><rect x="0" y="0"/>"#;
        let colored = apply_color(body, "red");
        assert_eq!(
            colored,
            r#"<circle fill="red" cx="8" cy="8" r="4"/><rect fill="red" x="0" y="0"/>"#
        );
    }

    #[test]
    fn test_rewrites_fill_none() {
        let body = r#"<path fill="none" d="M1 1"/>"#;
        assert_eq!(
            apply_color(body, "#00FF00"),
            r##"<path fill="#00FF00" d="M1 1"/>"##
        );
    }

    #[test]
    fn test_rewrites_empty_fill_and_stroke() {
        let body = r#"<path fill="" stroke="" d="M1 1"/>"#;
        assert_eq!(
            apply_color(body, "blue"),
            r#"<path fill="blue" stroke="blue" d="M1 1"/>"#
        );
    }

    #[test]
    fn test_preserves_explicit_paint_values() {
        let body = r##"<path fill="#123456" d="M1 1"/>"##;
        assert_eq!(apply_color(body, "#FF0000"), body);
    }

    #[test]
    fn test_preserves_single_quoted_style() {
        let body = r#"<path fill='none' d="M1 1"/>"#;
        assert_eq!(
            apply_color(body, "red"),
            r#"<path fill='red' d="M1 1"/>"#
        );
    }

    #[test]
    fn test_non_shape_elements_untouched() {
        let body = r#"<g><path d="M1 1"/></g>"#;
        assert_eq!(
            apply_color(body, "red"),
            r#"<g><path fill="red" d="M1 1"/></g>"#
        );
    }
}
