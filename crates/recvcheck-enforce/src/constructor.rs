//! Constructor recognition and result-kind inspection.

use regex::Regex;

use crate::classifier::{classify, Classified};
use crate::types::ConfigError;
use recvcheck_core::config::{ConstructorConfig, ConstructorStrategy};
use recvcheck_core::types::FunctionDeclaration;

/// Name of the capture group that carries the constructed type's name.
pub const TYPE_CAPTURE: &str = "Type";

/// Decides whether a plain function is a constructor, and for which type.
#[derive(Debug, Clone)]
pub enum ConstructorDetector {
    /// `NewWidget` constructs `Widget`.
    FixedPrefix(String),
    /// The named `Type` capture group holds the type name.
    Pattern(Regex),
}

impl ConstructorDetector {
    pub fn fixed_prefix(prefix: &str) -> Result<Self, ConfigError> {
        if prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }
        Ok(ConstructorDetector::FixedPrefix(prefix.to_string()))
    }

    pub fn pattern(pattern: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
            field: "constructor",
            pattern: pattern.to_string(),
            source,
        })?;
        if !regex.capture_names().flatten().any(|n| n == TYPE_CAPTURE) {
            return Err(ConfigError::MissingTypeCapture {
                pattern: pattern.to_string(),
            });
        }
        Ok(ConstructorDetector::Pattern(regex))
    }

    /// Detector for the configured strategy. Validated whether or not
    /// constructor checking is switched on.
    pub fn from_config(config: &ConstructorConfig) -> Result<Self, ConfigError> {
        match config.strategy {
            ConstructorStrategy::FixedPrefix => Self::fixed_prefix(&config.prefix),
            ConstructorStrategy::Pattern => Self::pattern(&config.pattern),
        }
    }

    /// The constructed type's name, or `None` if `decl` is not a constructor.
    /// Methods are never constructors.
    pub fn detect<'d>(&self, decl: &'d FunctionDeclaration) -> Option<&'d str> {
        if decl.is_method() {
            return None;
        }
        let name = decl.name.as_deref()?;
        let type_name = match self {
            ConstructorDetector::FixedPrefix(prefix) => name.strip_prefix(prefix.as_str())?,
            ConstructorDetector::Pattern(regex) => regex.captures(name)?.name(TYPE_CAPTURE)?.as_str(),
        };
        (!type_name.is_empty()).then_some(type_name)
    }
}

/// Which kinds of `type_name` a constructor returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorMatch {
    pub type_name: String,
    pub returns_pointer: bool,
    pub returns_value: bool,
}

impl ConstructorMatch {
    pub fn returns_any(&self) -> bool {
        self.returns_pointer || self.returns_value
    }
}

/// Classify every declared result; results naming other types are ignored.
pub fn check_constructor_returns(type_name: &str, decl: &FunctionDeclaration) -> ConstructorMatch {
    let mut found = ConstructorMatch {
        type_name: type_name.to_string(),
        returns_pointer: false,
        returns_value: false,
    };
    for result in &decl.results {
        match classify(result) {
            Classified::Pointer(name) if name == type_name => found.returns_pointer = true,
            Classified::Value(name) if name == type_name => found.returns_value = true,
            _ => {}
        }
    }
    found
}
