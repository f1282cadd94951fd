//! Per-icon outcome accounting
//!
//! Each icon task produces an [`IconOutcome`]; the coordinator folds them
//! into the run summary after every batch settles, so counters never need
//! shared mutable state.

use crate::domain::{IconSize, OutputFormat};

/// Outcome of processing one icon's full variant set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IconOutcome {
    /// Variants written successfully
    pub processed: usize,
    /// Variant attempts that failed
    pub errors: usize,
    /// 1 when the icon was skipped before attempting variants
    pub skipped: usize,
}

impl IconOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self) {
        self.processed += 1;
    }

    pub fn record_error(&mut self) {
        self.errors += 1;
    }

    /// Marks the whole icon as skipped, charging its entire variant set as
    /// errors so run totals still account for every planned attempt
    pub fn record_skip(&mut self, variant_set: usize) {
        self.skipped += 1;
        self.errors += variant_set;
    }
}

/// Number of variant attempts one icon expands into
pub fn variant_set_size(sizes: &[IconSize], colors: &[String], formats: &[OutputFormat]) -> usize {
    sizes.len() * colors.len() * formats.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_set_size_is_cross_product() {
        let sizes = vec![IconSize::Square(24), IconSize::Square(48)];
        let colors = vec!["currentColor".to_string(), "#FF0000".to_string()];
        let formats = vec![OutputFormat::Svg, OutputFormat::Png, OutputFormat::Webp];
        assert_eq!(variant_set_size(&sizes, &colors, &formats), 12);
    }

    #[test]
    fn test_record_skip_charges_full_variant_set() {
        let mut outcome = IconOutcome::new();
        outcome.record_skip(6);
        assert_eq!(outcome.skipped, 1);
        assert_eq!(outcome.errors, 6);
        assert_eq!(outcome.processed, 0);
    }

    #[test]
    fn test_success_and_error_counters() {
        let mut outcome = IconOutcome::new();
        outcome.record_success();
        outcome.record_success();
        outcome.record_error();
        assert_eq!(outcome.processed, 2);
        assert_eq!(outcome.errors, 1);
    }
}
