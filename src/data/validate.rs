//! Offline catalog checks behind `rising validate`. The serve path stays
//! permissive; this is the authoring-time safety net for the data file.

use std::collections::HashSet;
use std::fmt;

use crate::data::catalog::Catalog;
use crate::page::PageKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }
}

pub fn validate_catalog(catalog: &Catalog) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (category, items) in &catalog.categories {
        let by_id = PageKind::from_segment(category).is_some_and(|kind| kind.selects_by_id());
        let mut seen_ids: HashSet<&str> = HashSet::new();

        for (index, item) in items.iter().enumerate() {
            let context = format!("{category}[{index}]");

            match item.id.as_deref() {
                Some(id) => {
                    if !seen_ids.insert(id) {
                        // Duplicate ids make id lookups ambiguous; harmless
                        // in first-item categories but still suspicious.
                        let severity = if by_id {
                            ValidationSeverity::Error
                        } else {
                            ValidationSeverity::Warning
                        };
                        report.push(
                            severity,
                            context.as_str(),
                            format!("duplicate id \"{id}\" within {category}"),
                        );
                    }
                }
                None => {
                    if by_id {
                        report.push(
                            ValidationSeverity::Error,
                            context.as_str(),
                            "item has no id and can never match a page",
                        );
                    } else if item.name_zh.is_none() {
                        report.push(
                            ValidationSeverity::Warning,
                            context.as_str(),
                            "item has neither id nor name_zh; its page would be untitled",
                        );
                    }
                }
            }

            if let Some(skills) = &item.skills {
                for (skill_index, skill) in skills.iter().enumerate() {
                    if skill.details.is_empty() {
                        report.push(
                            ValidationSeverity::Warning,
                            format!("{context}.skills[{skill_index}]"),
                            "skill has an empty detail table",
                        );
                    }
                }
            }
        }
    }

    report
}
