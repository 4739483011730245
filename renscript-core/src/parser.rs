//! Best-effort line parser: textual script source in, [`Script`] out.
//!
//! The parser never fails. Each line is classified against a fixed, ordered
//! set of statement patterns (keywords before dialogue, so `jump intro` is
//! never read as a speaker named `jump`); lines matching none of them are
//! dropped and reported only through `log::debug!`. Menu blocks are handled
//! by a small indentation-driven state machine, so the parser stays a single
//! forward pass over the input.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::ids::{IdGen, SequentialIds};
use crate::model::{AudioChannel, Character, Choice, Position, Script, ScriptElement};

/// One indentation level, as emitted by the generator. The parser measures
/// raw column width, this constant only anchors the choice-action depth rule.
const INDENT_WIDTH: usize = 4;

static CHARACTER_DEF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^define\s+(\w+)\s*=\s*Character\s*\(\s*["'](.+?)["'](.*?)\)"#).unwrap()
});
static CHARACTER_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"color\s*=\s*["'](.+?)["']"#).unwrap());
static LABEL_STMT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^label\s+(\w+)\s*:").unwrap());
static SCENE_STMT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^scene\s+(.+?)(?:\s+with\s+(\w+))?\s*$").unwrap());
static SHOW_STMT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^show\s+(\S+)(?:\s+(\w+))?(?:\s+at\s+(\w+))?(?:\s+with\s+(\w+))?\s*$").unwrap()
});
static HIDE_STMT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^hide\s+(\S+)(?:\s+with\s+(\w+))?\s*$").unwrap());
static PLAY_STMT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^play\s+(\w+)\s+["'](.+?)["']"#).unwrap());
static STOP_STMT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^stop\s+(\w+)\s*$").unwrap());
static PAUSE_STMT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^pause(?:\s+([0-9]+(?:\.[0-9]+)?))?\s*$").unwrap());
static JUMP_STMT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^jump\s+(\w+)").unwrap());
static CALL_STMT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^call\s+(\w+)").unwrap());
static VARIABLE_STMT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\$\s*(\w+)\s*=\s*(.+)$").unwrap());
static CHOICE_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^"(.+?)"(?:\s+if\s+(.+?))?\s*:\s*$"#).unwrap());
static CHAR_DIALOGUE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^(\w+)\s+"(.+?)""#).unwrap());

/// Menu-block state. Transitions are driven by (line pattern, indentation)
/// pairs; `indent` is the column of the opening `menu:` line.
enum MenuState {
    /// Not inside a menu block.
    Idle,
    /// Saw `menu:`, no choice header yet.
    InMenu { indent: usize, choices: Vec<Choice> },
    /// Populating the most recently opened choice.
    InChoice { indent: usize, choices: Vec<Choice> },
}

pub struct Parser<'a> {
    src: &'a str,
    ids: Box<dyn IdGen>,
    characters: Vec<Character>,
    elements: Vec<ScriptElement>,
    menu: MenuState,
    current_label: Option<String>,
}

/// Parses script source with the default `element-<n>` id scheme.
pub fn parse(src: &str) -> Script {
    Parser::new(src).parse()
}

impl<'a> Parser<'a> {
    pub fn new(src: &'a str) -> Self {
        Self::with_ids(src, Box::new(SequentialIds::new()))
    }

    /// Uses a caller-supplied id generator instead of [`SequentialIds`].
    pub fn with_ids(src: &'a str, ids: Box<dyn IdGen>) -> Self {
        Parser {
            src,
            ids,
            characters: Vec::new(),
            elements: Vec::new(),
            menu: MenuState::Idle,
            current_label: None,
        }
    }

    pub fn parse(mut self) -> Script {
        for raw in self.src.lines() {
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let indent = raw.chars().take_while(|c| c.is_whitespace()).count();
            self.line(indent, trimmed);
        }

        // A menu still open at end of input is flushed, not lost.
        if let MenuState::InMenu { choices, .. } | MenuState::InChoice { choices, .. } =
            std::mem::replace(&mut self.menu, MenuState::Idle)
        {
            self.emit_menu(choices);
        }

        Script {
            characters: self.characters,
            elements: self.elements,
            assets: Default::default(),
        }
    }

    fn line(&mut self, indent: usize, trimmed: &str) {
        match std::mem::replace(&mut self.menu, MenuState::Idle) {
            MenuState::Idle => {}
            MenuState::InMenu {
                indent: menu_indent,
                choices,
            } => {
                if indent <= menu_indent {
                    // Dedent closes the block; the line itself is then an
                    // ordinary statement.
                    self.emit_menu(choices);
                } else if let Some(choice) = self.choice_header(trimmed) {
                    let mut choices = choices;
                    choices.push(choice);
                    self.menu = MenuState::InChoice {
                        indent: menu_indent,
                        choices,
                    };
                    return;
                } else {
                    debug!("line inside menu matched no choice header: {trimmed:?}");
                    self.menu = MenuState::InMenu {
                        indent: menu_indent,
                        choices,
                    };
                    return;
                }
            }
            MenuState::InChoice {
                indent: menu_indent,
                mut choices,
            } => {
                if indent <= menu_indent {
                    self.emit_menu(choices);
                } else {
                    if let Some(choice) = self.choice_header(trimmed) {
                        choices.push(choice);
                    } else if indent > menu_indent + INDENT_WIDTH {
                        self.choice_action(&mut choices, trimmed);
                    } else {
                        debug!("line inside menu matched no rule: {trimmed:?}");
                    }
                    self.menu = MenuState::InChoice {
                        indent: menu_indent,
                        choices,
                    };
                    return;
                }
            }
        }
        self.statement(indent, trimmed);
    }

    fn choice_header(&mut self, trimmed: &str) -> Option<Choice> {
        let caps = CHOICE_HEADER.captures(trimmed)?;
        Some(Choice {
            id: self.ids.choice_id(),
            text: caps[1].to_string(),
            condition: caps.get(2).map(|m| m.as_str().to_string()),
            actions: Vec::new(),
        })
    }

    /// Lines nested under a choice become synthetic narrator dialogue.
    /// Jump/call/assignment statements inside choices are not modeled and
    /// are skipped here.
    fn choice_action(&mut self, choices: &mut [Choice], trimmed: &str) {
        if trimmed.starts_with('$') || trimmed.starts_with("jump") || trimmed.starts_with("call") {
            debug!("statement inside choice body not modeled, skipped: {trimmed:?}");
            return;
        }
        let current = choices
            .last_mut()
            .expect("InChoice state always holds at least one choice");
        current.actions.push(ScriptElement::Dialogue {
            id: self.ids.element_id(),
            character: None,
            content: strip_edge_quotes(trimmed).to_string(),
        });
    }

    fn emit_menu(&mut self, choices: Vec<Choice>) {
        let id = self.ids.element_id();
        self.elements.push(ScriptElement::Menu { id, choices });
    }

    /// Ordered statement dispatch. The order is fixed: keyword statements
    /// first, dialogue last, unmatched lines dropped.
    fn statement(&mut self, indent: usize, trimmed: &str) {
        if let Some(caps) = CHARACTER_DEF.captures(trimmed) {
            let mut character = Character::new(&caps[1], &caps[2]);
            if let Some(color) = CHARACTER_COLOR.captures(&caps[3]) {
                character.color = Some(color[1].to_string());
            }
            self.characters.push(character);
        } else if let Some(caps) = LABEL_STMT.captures(trimmed) {
            let label = caps[1].to_string();
            self.current_label = Some(label.clone());
            let id = self.ids.element_id();
            self.elements.push(ScriptElement::Label { id, label });
        } else if let Some(caps) = SCENE_STMT.captures(trimmed) {
            let id = self.ids.element_id();
            self.elements.push(ScriptElement::Scene {
                id,
                image: caps[1].to_string(),
                transition: caps.get(2).map(|m| m.as_str().to_string()),
            });
        } else if let Some(caps) = SHOW_STMT.captures(trimmed) {
            // An expression token is folded into the image name, the same
            // form sprite references use everywhere else.
            let mut image = caps[1].to_string();
            if let Some(expr) = caps.get(2) {
                image.push(' ');
                image.push_str(expr.as_str());
            }
            let id = self.ids.element_id();
            self.elements.push(ScriptElement::Show {
                id,
                image,
                position: caps
                    .get(3)
                    .and_then(|m| Position::from_keyword(m.as_str()))
                    .unwrap_or_default(),
                transition: caps.get(4).map(|m| m.as_str().to_string()),
            });
        } else if let Some(caps) = HIDE_STMT.captures(trimmed) {
            let id = self.ids.element_id();
            self.elements.push(ScriptElement::Hide {
                id,
                image: caps[1].to_string(),
                transition: caps.get(2).map(|m| m.as_str().to_string()),
            });
        } else if let Some(caps) = PLAY_STMT.captures(trimmed) {
            match AudioChannel::from_keyword(&caps[1]) {
                Some(channel) => {
                    let id = self.ids.element_id();
                    self.elements.push(ScriptElement::Play {
                        id,
                        channel,
                        audio: caps[2].to_string(),
                    });
                }
                None => debug!("unknown audio channel, line dropped: {trimmed:?}"),
            }
        } else if let Some(caps) = STOP_STMT.captures(trimmed) {
            match AudioChannel::from_keyword(&caps[1]) {
                Some(channel) => {
                    let id = self.ids.element_id();
                    self.elements.push(ScriptElement::Stop { id, channel });
                }
                None => debug!("unknown audio channel, line dropped: {trimmed:?}"),
            }
        } else if let Some(caps) = PAUSE_STMT.captures(trimmed) {
            let id = self.ids.element_id();
            self.elements.push(ScriptElement::Pause {
                id,
                duration: caps.get(1).and_then(|m| m.as_str().parse().ok()),
            });
        } else if trimmed == "menu:" {
            self.menu = MenuState::InMenu {
                indent,
                choices: Vec::new(),
            };
        } else if trimmed == "return" {
            let id = self.ids.element_id();
            self.elements.push(ScriptElement::Return { id });
        } else if let Some(caps) = JUMP_STMT.captures(trimmed) {
            let id = self.ids.element_id();
            self.elements.push(ScriptElement::Jump {
                id,
                label: caps[1].to_string(),
            });
        } else if let Some(caps) = CALL_STMT.captures(trimmed) {
            let id = self.ids.element_id();
            self.elements.push(ScriptElement::Call {
                id,
                label: caps[1].to_string(),
            });
        } else if let Some(caps) = VARIABLE_STMT.captures(trimmed) {
            let id = self.ids.element_id();
            self.elements.push(ScriptElement::Variable {
                id,
                variable: caps[1].to_string(),
                value: caps[2].to_string(),
            });
        } else if let Some(caps) = CHAR_DIALOGUE.captures(trimmed) {
            let id = self.ids.element_id();
            self.elements.push(ScriptElement::Dialogue {
                id,
                character: Some(caps[1].to_string()),
                content: caps[2].to_string(),
            });
        } else if trimmed.starts_with('"') || trimmed.starts_with('\'') {
            let id = self.ids.element_id();
            self.elements.push(ScriptElement::Dialogue {
                id,
                character: None,
                content: strip_edge_quotes(trimmed).to_string(),
            });
        } else {
            match &self.current_label {
                Some(label) => {
                    debug!("unrecognized line in label '{label}' dropped: {trimmed:?}")
                }
                None => debug!("unrecognized line dropped: {trimmed:?}"),
            }
        }
    }
}

/// Strips one leading and one trailing quote character, if present.
fn strip_edge_quotes(s: &str) -> &str {
    let s = s
        .strip_prefix('"')
        .or_else(|| s.strip_prefix('\''))
        .unwrap_or(s);
    s.strip_suffix('"')
        .or_else(|| s.strip_suffix('\''))
        .unwrap_or(s)
}
