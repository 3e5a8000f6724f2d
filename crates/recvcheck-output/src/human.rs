use crate::human_helpers::{format_summary_human, format_violation_human};
use crate::OutputFormatter;
use recvcheck_enforce::types::CheckResult;

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_check(&self, result: &CheckResult) -> String {
        if result.is_clean() {
            return String::new(); // Clean check = empty stdout
        }

        let mut out = String::new();
        for v in &result.violations {
            out.push_str(&format_violation_human(v));
        }
        out.push_str(&format_summary_human(&result.summary));
        out
    }
}
