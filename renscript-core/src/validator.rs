//! Document-level consistency checks.
//!
//! [`validate`] is read-only and deterministic: issues come out in a fixed
//! two-pass scan order (definition collection, then per-element checks, then
//! label-usage and entry-point checks), never sorted by severity. `line` is
//! the 1-based element index, which is what the editor's list view keys on.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::model::{Script, ScriptElement};

static VARIABLE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Label a script is expected to start execution at.
const ENTRY_LABEL: &str = "start";

/// Sentinel character id for narration; never requires a definition.
const NARRATOR: &str = "narrator";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// One reported problem, consumed by the UI to annotate elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl Issue {
    fn error(element: &ScriptElement, index: usize, message: String) -> Self {
        Issue {
            severity: Severity::Error,
            element_id: Some(element.id().to_string()),
            message,
            line: Some(index + 1),
        }
    }

    fn warning(element: &ScriptElement, index: usize, message: String) -> Self {
        Issue {
            severity: Severity::Warning,
            element_id: Some(element.id().to_string()),
            message,
            line: Some(index + 1),
        }
    }
}

pub fn validate(script: &Script) -> Vec<Issue> {
    let mut issues = Vec::new();

    // Pass 1: collect label definitions (first occurrence wins, later ones
    // are flagged) and jump/call usage.
    let mut defined_labels: FxHashSet<&str> = FxHashSet::default();
    let mut definition_order: Vec<(usize, &str)> = Vec::new();
    let mut used_labels: FxHashSet<&str> = FxHashSet::default();

    for (index, element) in script.elements.iter().enumerate() {
        match element {
            ScriptElement::Label { label, .. } => {
                if defined_labels.contains(label.as_str()) {
                    issues.push(Issue::error(
                        element,
                        index,
                        format!("duplicate label definition: {label}"),
                    ));
                } else {
                    defined_labels.insert(label.as_str());
                    definition_order.push((index, label.as_str()));
                }
            }
            ScriptElement::Jump { label, .. } | ScriptElement::Call { label, .. } => {
                used_labels.insert(label.as_str());
            }
            _ => {}
        }
    }

    let defined_characters: FxHashSet<&str> =
        script.characters.iter().map(|c| c.id.as_str()).collect();

    // Pass 2: per-element checks, in element order.
    for (index, element) in script.elements.iter().enumerate() {
        match element {
            ScriptElement::Jump { label, .. } => {
                if !defined_labels.contains(label.as_str()) {
                    issues.push(Issue::error(
                        element,
                        index,
                        format!("jump to undefined label: {label}"),
                    ));
                }
            }
            ScriptElement::Call { label, .. } => {
                if !defined_labels.contains(label.as_str()) {
                    issues.push(Issue::error(
                        element,
                        index,
                        format!("call to undefined label: {label}"),
                    ));
                }
            }
            ScriptElement::Dialogue {
                character, content, ..
            } => {
                if let Some(speaker) = character {
                    if speaker != NARRATOR && !defined_characters.contains(speaker.as_str()) {
                        issues.push(Issue::warning(
                            element,
                            index,
                            format!("dialogue references undefined character: {speaker}"),
                        ));
                    }
                }
                if content.is_empty() {
                    issues.push(Issue::warning(
                        element,
                        index,
                        "dialogue has no content".to_string(),
                    ));
                }
            }
            ScriptElement::Menu { choices, .. } => {
                if choices.is_empty() {
                    issues.push(Issue::error(
                        element,
                        index,
                        "menu has no choices".to_string(),
                    ));
                } else if choices.len() == 1 {
                    issues.push(Issue::warning(
                        element,
                        index,
                        "menu has only one choice".to_string(),
                    ));
                }
            }
            ScriptElement::Variable { variable, .. } => {
                if !VARIABLE_NAME.is_match(variable) {
                    issues.push(Issue::error(
                        element,
                        index,
                        format!("invalid variable name: {variable}"),
                    ));
                }
            }
            _ => {}
        }
    }

    // Labels nothing ever jumps or calls to, the entry label excepted.
    for (index, label) in &definition_order {
        if *label != ENTRY_LABEL && !used_labels.contains(label) {
            issues.push(Issue::warning(
                &script.elements[*index],
                *index,
                format!("unused label: {label}"),
            ));
        }
    }

    if !defined_labels.contains(ENTRY_LABEL) {
        issues.push(Issue {
            severity: Severity::Warning,
            element_id: None,
            message: format!("missing '{ENTRY_LABEL}' label (script entry point)"),
            line: None,
        });
    }

    issues
}

/// One-line error/warning tally for the editor toolbar.
pub fn summarize(issues: &[Issue]) -> String {
    let errors = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    let warnings = issues
        .iter()
        .filter(|i| i.severity == Severity::Warning)
        .count();

    if errors == 0 && warnings == 0 {
        return "script OK".to_string();
    }

    let mut parts = Vec::new();
    if errors > 0 {
        parts.push(format!("{errors} error(s)"));
    }
    if warnings > 0 {
        parts.push(format!("{warnings} warning(s)"));
    }
    parts.join(", ")
}
