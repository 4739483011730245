//! Inverse of the parser: [`Script`] in, textual script source out.
//!
//! Total over any well-formed document; absent optional fields simply omit
//! their textual clause. Nested choice actions serialize only their dialogue
//! elements, so a menu round-trip is lossy for anything else. `condition`
//! and `code` elements have no stable textual form and are not emitted.

use crate::model::{Position, Script, ScriptElement};

const INDENT: &str = "    ";

pub fn generate(script: &Script) -> String {
    let mut lines: Vec<String> = Vec::new();

    for ch in &script.characters {
        let mut def = format!("define {} = Character(\"{}\"", ch.id, ch.name);
        if let Some(color) = &ch.color {
            def.push_str(&format!(", color=\"{color}\""));
        }
        def.push(')');
        lines.push(def);
    }
    if !script.characters.is_empty() {
        lines.push(String::new());
    }

    // 0 = top level, 1 = inside the most recently opened label.
    let mut indent = 0usize;
    for element in &script.elements {
        let pad = INDENT.repeat(indent);
        match element {
            ScriptElement::Label { label, .. } => {
                // Labels never nest.
                lines.push(format!("label {label}:"));
                indent = 1;
            }
            ScriptElement::Scene {
                image, transition, ..
            } => {
                let mut line = format!("{pad}scene {image}");
                if let Some(t) = transition {
                    line.push_str(&format!(" with {t}"));
                }
                lines.push(line);
            }
            ScriptElement::Show {
                image,
                position,
                transition,
                ..
            } => {
                let mut line = format!("{pad}show {image}");
                if *position != Position::Center {
                    line.push_str(&format!(" at {}", position.as_keyword()));
                }
                if let Some(t) = transition {
                    line.push_str(&format!(" with {t}"));
                }
                lines.push(line);
            }
            ScriptElement::Hide {
                image, transition, ..
            } => {
                let mut line = format!("{pad}hide {image}");
                if let Some(t) = transition {
                    line.push_str(&format!(" with {t}"));
                }
                lines.push(line);
            }
            ScriptElement::Dialogue {
                character, content, ..
            } => match character {
                Some(speaker) => lines.push(format!("{pad}{speaker} \"{content}\"")),
                None => lines.push(format!("{pad}\"{content}\"")),
            },
            ScriptElement::Menu { choices, .. } => {
                lines.push(format!("{pad}menu:"));
                for choice in choices {
                    match &choice.condition {
                        Some(cond) => {
                            lines.push(format!("{pad}{INDENT}\"{}\" if {cond}:", choice.text))
                        }
                        None => lines.push(format!("{pad}{INDENT}\"{}\":", choice.text)),
                    }
                    for action in &choice.actions {
                        if let ScriptElement::Dialogue { content, .. } = action {
                            lines.push(format!("{pad}{INDENT}{INDENT}\"{content}\""));
                        }
                    }
                }
            }
            ScriptElement::Play { channel, audio, .. } => {
                lines.push(format!("{pad}play {} \"{audio}\"", channel.as_keyword()));
            }
            ScriptElement::Stop { channel, .. } => {
                lines.push(format!("{pad}stop {}", channel.as_keyword()));
            }
            ScriptElement::Pause { duration, .. } => match duration {
                Some(seconds) => lines.push(format!("{pad}pause {seconds}")),
                None => lines.push(format!("{pad}pause")),
            },
            ScriptElement::Variable {
                variable, value, ..
            } => {
                lines.push(format!("{pad}$ {variable} = {value}"));
            }
            ScriptElement::Jump { label, .. } => {
                lines.push(format!("{pad}jump {label}"));
            }
            ScriptElement::Call { label, .. } => {
                lines.push(format!("{pad}call {label}"));
            }
            ScriptElement::Return { .. } => {
                lines.push(format!("{pad}return"));
                indent = 0;
            }
            ScriptElement::Condition { .. } | ScriptElement::Code { .. } => {}
        }
    }

    lines.join("\n")
}
