use serde::{Deserialize, Serialize};

use recvcheck_core::types::ReceiverKind;

/// Result of `recvcheck check` over one or more packages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub version: String,
    pub command: String,
    pub status: String, // "ok" | "violations"
    pub summary: CheckSummary,
    pub violations: Vec<Violation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSummary {
    pub packages: u32,
    pub files_analyzed: u32,
    pub declarations: u32,
    /// Distinct types with at least one classified usage.
    pub types_checked: u32,
    pub types_with_violations: u32,
    pub findings: u32,
}

impl CheckResult {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// All findings, type by type, in report order.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.violations.iter().flat_map(|v| v.findings.iter())
    }
}

/// A type whose declarations use both pointer and value receivers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub type_name: String,
    /// Pointer users first, then value users, each in observation order.
    pub findings: Vec<Finding>,
}

/// Whether a finding came from a method receiver or a constructor result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclRole {
    Method,
    Constructor,
}

/// One offending declaration of a [`Violation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub type_name: String,
    /// Declared function or method name.
    pub declaration: String,
    pub role: DeclRole,
    pub kind: ReceiverKind,
    pub file: String,
    pub line: u32,
    pub column: u32,
    /// `"<Type>.<Name> uses pointer"` or `"<Type>.<Name> uses value"`.
    pub message: String,
}

/// Configuration rejected before any declaration is walked.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {field} pattern `{pattern}`: {source}")]
    InvalidPattern {
        field: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("constructor pattern `{pattern}` has no named capture group `Type`")]
    MissingTypeCapture { pattern: String },

    #[error("constructor prefix must not be empty")]
    EmptyPrefix,
}
