//! Document model for the visual-novel script editor.
//!
//! [`Script`] is the shared contract between the parser, the generator and
//! the validator, and doubles as the JSON interchange format exchanged with
//! the editor UI and its storage layer. The serde shape mirrors the editor's
//! flat duck-typed records: elements serialize as one object tagged by a
//! lowercase `"type"` field, absent optional fields are omitted entirely.

use serde::{Deserialize, Serialize};

/// A whole script document: character roster, ordered statement list and an
/// opaque asset catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Script {
    pub characters: Vec<Character>,
    pub elements: Vec<ScriptElement>,
    #[serde(default)]
    pub assets: Assets,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes the document to the interchange JSON consumed by the UI
    /// and storage layers.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Reads a document back from interchange JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// A character that dialogue lines can be attributed to.
///
/// Only `id`, `name` and `color` participate in the textual DSL; the
/// remaining presentation fields ride along through JSON interchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub who_suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub what_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub what_suffix: Option<String>,
}

impl Character {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Character {
            id: id.into(),
            name: name.into(),
            color: None,
            image: None,
            who_suffix: None,
            what_prefix: None,
            what_suffix: None,
        }
    }
}

/// One statement-level unit of the script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScriptElement {
    /// A spoken line. No `character` means narration.
    Dialogue {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        character: Option<String>,
        #[serde(default)]
        content: String,
    },
    /// Replaces the background image.
    Scene {
        id: String,
        image: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        transition: Option<String>,
    },
    /// Displays a sprite. `image` may carry an expression suffix after a
    /// space (`"eileen happy"`).
    Show {
        id: String,
        image: String,
        #[serde(default)]
        position: Position,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        transition: Option<String>,
    },
    /// Removes a previously shown sprite.
    Hide {
        id: String,
        image: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        transition: Option<String>,
    },
    /// A branching menu presented to the player.
    Menu { id: String, choices: Vec<Choice> },
    /// A named jump target.
    Label { id: String, label: String },
    /// Unconditional transfer to a label.
    Jump { id: String, label: String },
    /// Subroutine-style transfer to a label.
    Call { id: String, label: String },
    /// Starts audio playback on a channel.
    Play {
        id: String,
        channel: AudioChannel,
        audio: String,
    },
    /// Stops audio playback on a channel.
    Stop { id: String, channel: AudioChannel },
    /// Pauses playback, optionally for a fixed number of seconds.
    Pause {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration: Option<f64>,
    },
    /// A `$ name = value` assignment; the value is kept verbatim, never
    /// evaluated.
    Variable {
        id: String,
        variable: String,
        value: String,
    },
    /// A conditional expression statement; kept verbatim, never evaluated.
    Condition { id: String, condition: String },
    /// An opaque inline code block.
    Code { id: String, code: String },
    /// Returns from the current label.
    Return { id: String },
}

impl ScriptElement {
    pub fn id(&self) -> &str {
        match self {
            ScriptElement::Dialogue { id, .. }
            | ScriptElement::Scene { id, .. }
            | ScriptElement::Show { id, .. }
            | ScriptElement::Hide { id, .. }
            | ScriptElement::Menu { id, .. }
            | ScriptElement::Label { id, .. }
            | ScriptElement::Jump { id, .. }
            | ScriptElement::Call { id, .. }
            | ScriptElement::Play { id, .. }
            | ScriptElement::Stop { id, .. }
            | ScriptElement::Pause { id, .. }
            | ScriptElement::Variable { id, .. }
            | ScriptElement::Condition { id, .. }
            | ScriptElement::Code { id, .. }
            | ScriptElement::Return { id } => id,
        }
    }

    /// The lowercase kind name, identical to the serialized `"type"` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            ScriptElement::Dialogue { .. } => "dialogue",
            ScriptElement::Scene { .. } => "scene",
            ScriptElement::Show { .. } => "show",
            ScriptElement::Hide { .. } => "hide",
            ScriptElement::Menu { .. } => "menu",
            ScriptElement::Label { .. } => "label",
            ScriptElement::Jump { .. } => "jump",
            ScriptElement::Call { .. } => "call",
            ScriptElement::Play { .. } => "play",
            ScriptElement::Stop { .. } => "stop",
            ScriptElement::Pause { .. } => "pause",
            ScriptElement::Variable { .. } => "variable",
            ScriptElement::Condition { .. } => "condition",
            ScriptElement::Code { .. } => "code",
            ScriptElement::Return { .. } => "return",
        }
    }
}

/// One selectable option inside a menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default)]
    pub actions: Vec<ScriptElement>,
}

/// Screen position for a shown sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Left,
    #[default]
    Center,
    Right,
    Truecenter,
}

impl Position {
    pub fn from_keyword(s: &str) -> Option<Position> {
        match s {
            "left" => Some(Position::Left),
            "center" => Some(Position::Center),
            "right" => Some(Position::Right),
            "truecenter" => Some(Position::Truecenter),
            _ => None,
        }
    }

    pub fn as_keyword(self) -> &'static str {
        match self {
            Position::Left => "left",
            Position::Center => "center",
            Position::Right => "right",
            Position::Truecenter => "truecenter",
        }
    }
}

/// Audio channel for `play` / `stop` statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioChannel {
    Music,
    Sound,
    Voice,
}

impl AudioChannel {
    pub fn from_keyword(s: &str) -> Option<AudioChannel> {
        match s {
            "music" => Some(AudioChannel::Music),
            "sound" => Some(AudioChannel::Sound),
            "voice" => Some(AudioChannel::Voice),
            _ => None,
        }
    }

    pub fn as_keyword(self) -> &'static str {
        match self {
            AudioChannel::Music => "music",
            AudioChannel::Sound => "sound",
            AudioChannel::Voice => "voice",
        }
    }
}

/// Opaque asset catalog. The transcoder never touches it; it only has to
/// survive JSON interchange intact.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Assets {
    #[serde(default)]
    pub images: Vec<Asset>,
    #[serde(default)]
    pub audio: Vec<Asset>,
    #[serde(default)]
    pub backgrounds: Vec<Asset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: String,
}
