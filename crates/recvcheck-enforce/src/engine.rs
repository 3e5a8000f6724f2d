//! Validated entry point: one configuration, many compilation units.

use rayon::prelude::*;

use crate::aggregator::aggregate;
use crate::constructor::ConstructorDetector;
use crate::selector::build_selector;
use crate::types::{CheckResult, CheckSummary, ConfigError, Violation};
use crate::walker::{walk, WalkOptions};
use recvcheck_core::config::CheckerConfig;
use recvcheck_core::source::GeneratedFileDetector;
use recvcheck_core::types::FunctionDeclaration;
use recvcheck_parsers::package::Package;

/// Receiver-consistency checker with a validated configuration.
///
/// Holds no per-run state: every unit gets its own registry, so one engine
/// can check many units, concurrently or not.
#[derive(Debug)]
pub struct CheckEngine {
    options: WalkOptions,
}

struct UnitOutcome {
    types_checked: usize,
    violations: Vec<Violation>,
}

impl CheckEngine {
    /// Compile selectors and the constructor strategy. Any invalid pattern is
    /// reported here, before a single declaration is looked at.
    pub fn new(config: &CheckerConfig) -> Result<Self, ConfigError> {
        let selector = build_selector(config)?;
        let detector = ConstructorDetector::from_config(&config.constructor)?;
        Ok(Self {
            options: WalkOptions {
                selector,
                constructors: config.constructor.enabled.then_some(detector),
                skip_generated: config.skip_generated,
            },
        })
    }

    /// Violations of one compilation unit, in the order their types were
    /// first seen.
    pub fn check_unit(
        &self,
        decls: &[FunctionDeclaration],
        detector: &dyn GeneratedFileDetector,
    ) -> Vec<Violation> {
        self.run_unit(decls.iter(), detector).violations
    }

    fn run_unit<'d>(
        &self,
        decls: impl IntoIterator<Item = &'d FunctionDeclaration>,
        detector: &dyn GeneratedFileDetector,
    ) -> UnitOutcome {
        let registry = walk(decls, &self.options, detector);
        UnitOutcome {
            types_checked: registry.len(),
            violations: aggregate(&registry),
        }
    }

    /// Check every package independently and merge the results in package
    /// order.
    pub fn check_packages(
        &self,
        packages: &[Package],
        detector: &dyn GeneratedFileDetector,
    ) -> CheckResult {
        let outcomes: Vec<UnitOutcome> = packages
            .par_iter()
            .map(|pkg| {
                tracing::debug!(
                    dir = %pkg.dir.display(),
                    package = %pkg.name,
                    files = pkg.files.len(),
                    "checking package"
                );
                self.run_unit(pkg.declarations(), detector)
            })
            .collect();

        let mut summary = CheckSummary {
            packages: packages.len() as u32,
            files_analyzed: packages.iter().map(|p| p.files.len() as u32).sum(),
            declarations: packages.iter().map(|p| p.declaration_count() as u32).sum(),
            ..CheckSummary::default()
        };
        let mut violations = Vec::new();
        for outcome in outcomes {
            summary.types_checked += outcome.types_checked as u32;
            violations.extend(outcome.violations);
        }
        summary.types_with_violations = violations.len() as u32;
        summary.findings = violations.iter().map(|v| v.findings.len() as u32).sum();

        CheckResult {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: "check".to_string(),
            status: if violations.is_empty() { "ok" } else { "violations" }.to_string(),
            summary,
            violations,
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
