//! Configuration file loading for recvcheck.
//!
//! Reads `.recvcheck.json` from the project root and provides typed access to all settings.
//! Falls back to defaults when the config file is missing or incomplete.

use std::path::Path;

use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".recvcheck.json";

/// Default prefix for the fixed-prefix constructor strategy.
pub const DEFAULT_CONSTRUCTOR_PREFIX: &str = "New";

/// Default pattern for the pattern-with-capture constructor strategy.
pub const DEFAULT_CONSTRUCTOR_PATTERN: &str = "^New(?P<Type>.*)";

/// Methods whose receiver kind is dictated by standard library interfaces
/// (`encoding`, `encoding/json`, `encoding/xml`, `database/sql`, `fmt`, `io`).
pub const KNOWN_INTERFACE_METHODS: &[&str] = &[
    "UnmarshalJSON",
    "UnmarshalText",
    "UnmarshalBinary",
    "UnmarshalXML",
    "UnmarshalXMLAttr",
    "Scanner",
    "Scan",
    "Read",
];

/// Top-level recvcheck configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckerConfig {
    #[serde(default)]
    pub constructor: ConstructorConfig,
    #[serde(default = "default_true")]
    pub skip_known_interface_methods: bool,
    /// Extra method names excluded from classification.
    #[serde(default)]
    pub skip_methods: Vec<String>,
    /// Methods whose name matches this regex are excluded from classification.
    #[serde(default)]
    pub skip_pattern: Option<String>,
    #[serde(default = "default_true")]
    pub skip_generated: bool,
    /// Whether `_test.go` files take part in the check.
    #[serde(default = "default_true")]
    pub include_tests: bool,
    /// Glob patterns (relative to the project root) of files to leave out.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

/// How constructors are recognized, and whether they are checked at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub strategy: ConstructorStrategy,
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default = "default_pattern")]
    pub pattern: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConstructorStrategy {
    #[default]
    FixedPrefix,
    /// Regex with a named `Type` capture group.
    Pattern,
}

fn default_true() -> bool {
    true
}
fn default_prefix() -> String {
    DEFAULT_CONSTRUCTOR_PREFIX.to_string()
}
fn default_pattern() -> String {
    DEFAULT_CONSTRUCTOR_PATTERN.to_string()
}

impl Default for ConstructorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            strategy: ConstructorStrategy::default(),
            prefix: default_prefix(),
            pattern: default_pattern(),
        }
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            constructor: ConstructorConfig::default(),
            skip_known_interface_methods: true,
            skip_methods: vec![],
            skip_pattern: None,
            skip_generated: true,
            include_tests: true,
            ignore_patterns: vec![],
        }
    }
}

impl CheckerConfig {
    /// Load configuration from `.recvcheck.json` inside the given project root.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE_NAME);
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(
                    path = %config_path.display(),
                    error = %e,
                    "failed to parse config, using defaults"
                );
                Self::default()
            }
        }
    }
}
