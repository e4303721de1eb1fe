//! Findings collected by `check`, kept in the order they were discovered.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    fn tag(self) -> &'static str {
        match self {
            Severity::Error => "[ERROR]",
            Severity::Warning => "[WARN]",
        }
    }
}

/// One problem with the launch, attributed to a repo name or step label.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub subject: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.severity.tag(), self.subject, self.message)
    }
}

#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn push(
        &mut self,
        severity: Severity,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.items.push(Diagnostic { severity, subject: subject.into(), message: message.into() });
    }

    pub fn push_error(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        self.push(Severity::Error, subject, message);
    }

    pub fn push_warning(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        self.push(Severity::Warning, subject, message);
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.items.iter().filter(|d| d.severity == severity).count()
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// 1 on any error; 2 when only warnings remain and `strict` is set.
    pub fn exit_code(&self, strict: bool) -> i32 {
        if self.error_count() > 0 {
            1
        } else if strict && self.warning_count() > 0 {
            2
        } else {
            0
        }
    }

    /// Rendered lines, errors before warnings, each group in discovery order.
    pub fn lines(&self) -> Vec<String> {
        [Severity::Error, Severity::Warning]
            .into_iter()
            .flat_map(|severity| self.items.iter().filter(move |d| d.severity == severity))
            .map(Diagnostic::to_string)
            .collect()
    }

    pub fn emit(&self) {
        for line in self.lines() {
            eprintln!("{}", line);
        }
    }
}
