use recvcheck_enforce::types::{CheckSummary, Finding, Violation};

pub(crate) fn format_finding_human(f: &Finding) -> String {
    format!("{}:{}:{}: {}\n", f.file, f.line, f.column, f.message)
}

pub(crate) fn format_violation_human(v: &Violation) -> String {
    v.findings.iter().map(format_finding_human).collect()
}

pub(crate) fn format_summary_human(s: &CheckSummary) -> String {
    format!(
        "\n{} finding(s) on {} type(s) in {} file(s)\n",
        s.findings, s.types_with_violations, s.files_analyzed,
    )
}
