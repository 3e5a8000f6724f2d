//! Function selectors: which methods take part in receiver classification.
//!
//! Selectors look at a declaration's name only, never at its receiver. The
//! name-based primitives reject unnamed declarations.

use std::collections::HashMap;
use std::fmt;

use regex::Regex;

use crate::types::ConfigError;
use recvcheck_core::config::{CheckerConfig, KNOWN_INTERFACE_METHODS};
use recvcheck_core::types::FunctionDeclaration;

pub trait FunctionSelector: fmt::Debug + Send + Sync {
    /// `true` means the declaration is classified.
    fn select(&self, decl: &FunctionDeclaration) -> bool;
}

/// Selects everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct AllFunctions;

impl FunctionSelector for AllFunctions {
    fn select(&self, _decl: &FunctionDeclaration) -> bool {
        true
    }
}

/// Selects declarations named exactly `name`.
#[derive(Debug, Clone)]
pub struct NameFunction {
    name: String,
}

impl NameFunction {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl FunctionSelector for NameFunction {
    fn select(&self, decl: &FunctionDeclaration) -> bool {
        decl.name.as_deref() == Some(self.name.as_str())
    }
}

/// Selects declarations whose name does *not* match the pattern.
#[derive(Debug, Clone)]
pub struct RegexExclude {
    regex: Regex,
}

impl RegexExclude {
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
            field: "skip",
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }
}

impl FunctionSelector for RegexExclude {
    fn select(&self, decl: &FunctionDeclaration) -> bool {
        match decl.name.as_deref() {
            Some(name) => !self.regex.is_match(name),
            None => false,
        }
    }
}

/// Looks the name up in an explicit allow/deny table, falling back to `default`.
#[derive(Debug, Clone)]
pub struct NameMap {
    names: HashMap<String, bool>,
    default: bool,
}

impl NameMap {
    pub fn new(default: bool) -> Self {
        Self {
            names: HashMap::new(),
            default,
        }
    }

    pub fn with(mut self, name: impl Into<String>, selected: bool) -> Self {
        self.names.insert(name.into(), selected);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FunctionSelector for NameMap {
    fn select(&self, decl: &FunctionDeclaration) -> bool {
        match decl.name.as_deref() {
            Some(name) => self.names.get(name).copied().unwrap_or(self.default),
            None => false,
        }
    }
}

/// Selects when every inner selector does. An empty conjunction selects everything.
#[derive(Debug, Default)]
pub struct AndFunctions {
    selectors: Vec<Box<dyn FunctionSelector>>,
}

impl AndFunctions {
    pub fn new(selectors: Vec<Box<dyn FunctionSelector>>) -> Self {
        Self { selectors }
    }
}

impl FunctionSelector for AndFunctions {
    fn select(&self, decl: &FunctionDeclaration) -> bool {
        self.selectors.iter().all(|s| s.select(decl))
    }
}

/// Inverts the inner selector.
#[derive(Debug)]
pub struct NotFunction {
    inner: Box<dyn FunctionSelector>,
}

impl NotFunction {
    pub fn new(inner: Box<dyn FunctionSelector>) -> Self {
        Self { inner }
    }
}

impl FunctionSelector for NotFunction {
    fn select(&self, decl: &FunctionDeclaration) -> bool {
        !self.inner.select(decl)
    }
}

/// The table installed by `skip_known_interface_methods`: standard interface
/// hooks map to `false`, every other name to `true`.
pub fn known_interface_methods() -> NameMap {
    KNOWN_INTERFACE_METHODS
        .iter()
        .fold(NameMap::new(true), |map, name| map.with(*name, false))
}

/// Build the selector described by `config`.
pub fn build_selector(config: &CheckerConfig) -> Result<Box<dyn FunctionSelector>, ConfigError> {
    let mut names = if config.skip_known_interface_methods {
        known_interface_methods()
    } else {
        NameMap::new(true)
    };
    for name in &config.skip_methods {
        names = names.with(name.clone(), false);
    }

    let mut parts: Vec<Box<dyn FunctionSelector>> = Vec::new();
    if !names.is_empty() {
        parts.push(Box::new(names));
    }
    if let Some(pattern) = config.skip_pattern.as_deref().filter(|p| !p.is_empty()) {
        parts.push(Box::new(RegexExclude::new(pattern)?));
    }

    Ok(match parts.len() {
        0 => Box::new(AllFunctions),
        1 => parts.remove(0),
        _ => Box::new(AndFunctions::new(parts)),
    })
}
