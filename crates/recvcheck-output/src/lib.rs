//! Output formatters for recvcheck results.
//!
//! Provides two output modes:
//! - **Human** (default): `file:line:col: message` lines plus a summary
//! - **JSON** (`--json`): Machine-readable structured output

pub mod human;
pub(crate) mod human_helpers;
pub mod json;

use recvcheck_enforce::types::CheckResult;

pub trait OutputFormatter {
    fn format_check(&self, result: &CheckResult) -> String;
}
