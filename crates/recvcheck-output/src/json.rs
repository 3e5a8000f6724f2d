use crate::OutputFormatter;
use recvcheck_enforce::types::CheckResult;

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_check(&self, result: &CheckResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
}
