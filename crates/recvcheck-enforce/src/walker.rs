//! Declaration walker: feeds one compilation unit into a [`TypeRegistry`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::classifier::classify;
use crate::constructor::{check_constructor_returns, ConstructorDetector};
use crate::registry::{TypeRegistry, Usage};
use crate::selector::FunctionSelector;
use recvcheck_core::source::GeneratedFileDetector;
use recvcheck_core::types::{FunctionDeclaration, ReceiverKind};
use recvcheck_parsers::treesitter::is_go_source;

/// Compiled walk settings, shared read-only by every unit.
#[derive(Debug)]
pub struct WalkOptions {
    pub selector: Box<dyn FunctionSelector>,
    /// `Some` only when constructor checking is enabled.
    pub constructors: Option<ConstructorDetector>,
    pub skip_generated: bool,
}

/// Per-file admission decision, computed once per path.
struct FileGate<'a> {
    detector: &'a dyn GeneratedFileDetector,
    skip_generated: bool,
    cache: HashMap<PathBuf, bool>,
}

impl<'a> FileGate<'a> {
    fn new(detector: &'a dyn GeneratedFileDetector, skip_generated: bool) -> Self {
        Self {
            detector,
            skip_generated,
            cache: HashMap::new(),
        }
    }

    fn admits(&mut self, path: &Path) -> bool {
        if let Some(&admitted) = self.cache.get(path) {
            return admitted;
        }
        let admitted = self.decide(path);
        self.cache.insert(path.to_path_buf(), admitted);
        admitted
    }

    fn decide(&self, path: &Path) -> bool {
        if !is_go_source(path) {
            tracing::debug!(path = %path.display(), "not a Go source file, skipping");
            return false;
        }
        if !self.skip_generated {
            return true;
        }
        match self.detector.is_generated(path) {
            Ok(true) => {
                tracing::debug!(path = %path.display(), "generated file, skipping");
                false
            }
            Ok(false) => true,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "could not tell whether file is generated, checking it"
                );
                true
            }
        }
    }
}

/// Walk `decls` in order, recording every classified usage into a fresh
/// registry borrowed from the declarations.
pub fn walk<'d>(
    decls: impl IntoIterator<Item = &'d FunctionDeclaration>,
    options: &WalkOptions,
    detector: &dyn GeneratedFileDetector,
) -> TypeRegistry<'d> {
    let mut registry = TypeRegistry::new();
    let mut gate = FileGate::new(detector, options.skip_generated);

    for decl in decls {
        if !gate.admits(decl.source_file()) {
            continue;
        }
        if decl.is_method() {
            record_receivers(&mut registry, decl, options.selector.as_ref());
        } else if let Some(detector) = &options.constructors {
            record_constructor(&mut registry, decl, detector);
        }
    }
    registry
}

fn record_receivers<'d>(
    registry: &mut TypeRegistry<'d>,
    decl: &'d FunctionDeclaration,
    selector: &dyn FunctionSelector,
) {
    for binding in &decl.receivers {
        let Some(type_expr) = &binding.type_expr else {
            continue;
        };
        if !selector.select(decl) {
            tracing::debug!(method = decl.name_or_placeholder(), "method skipped by selector");
            continue;
        }
        let classified = classify(type_expr);
        match (classified.type_name(), classified.kind()) {
            (Some(name), Some(kind)) => registry.record(name, kind, Usage::method(decl)),
            _ => tracing::debug!(
                method = decl.name_or_placeholder(),
                receiver = %type_expr,
                "unrecognized receiver shape"
            ),
        }
    }
}

fn record_constructor<'d>(
    registry: &mut TypeRegistry<'d>,
    decl: &'d FunctionDeclaration,
    detector: &ConstructorDetector,
) {
    let Some(type_name) = detector.detect(decl) else {
        return;
    };
    let found = check_constructor_returns(type_name, decl);
    if found.returns_pointer {
        registry.record(type_name, ReceiverKind::Pointer, Usage::constructor(decl));
    }
    if found.returns_value {
        registry.record(type_name, ReceiverKind::Value, Usage::constructor(decl));
    }
}
