use renscript_core::model::{AudioChannel, Position};
use renscript_core::{Character, Choice, Script, ScriptElement, generate};

fn script_with(elements: Vec<ScriptElement>) -> Script {
    Script {
        characters: Vec::new(),
        elements,
        assets: Default::default(),
    }
}

#[test]
fn character_block_is_separated_by_a_blank_line() {
    let mut script = script_with(vec![ScriptElement::Label {
        id: "e0".into(),
        label: "start".into(),
    }]);
    script.characters.push(Character::new("e", "Eileen"));
    let mut with_color = Character::new("m", "Mia");
    with_color.color = Some("#ffc8c8".into());
    script.characters.push(with_color);

    let text = generate(&script);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], r#"define e = Character("Eileen")"#);
    assert_eq!(lines[1], r##"define m = Character("Mia", color="#ffc8c8")"##);
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "label start:");
}

#[test]
fn label_indents_following_statements() {
    let script = script_with(vec![
        ScriptElement::Label {
            id: "e0".into(),
            label: "start".into(),
        },
        ScriptElement::Scene {
            id: "e1".into(),
            image: "bg room".into(),
            transition: Some("fade".into()),
        },
        ScriptElement::Dialogue {
            id: "e2".into(),
            character: Some("e".into()),
            content: "Hi".into(),
        },
        ScriptElement::Dialogue {
            id: "e3".into(),
            character: None,
            content: "Silence.".into(),
        },
    ]);
    assert_eq!(
        generate(&script),
        "label start:\n    scene bg room with fade\n    e \"Hi\"\n    \"Silence.\""
    );
}

#[test]
fn show_omits_default_center_position() {
    let script = script_with(vec![
        ScriptElement::Show {
            id: "e0".into(),
            image: "eileen happy".into(),
            position: Position::Center,
            transition: None,
        },
        ScriptElement::Show {
            id: "e1".into(),
            image: "eileen sad".into(),
            position: Position::Truecenter,
            transition: Some("dissolve".into()),
        },
    ]);
    assert_eq!(
        generate(&script),
        "show eileen happy\nshow eileen sad at truecenter with dissolve"
    );
}

#[test]
fn menu_serializes_only_dialogue_actions() {
    let script = script_with(vec![ScriptElement::Menu {
        id: "e0".into(),
        choices: vec![Choice {
            id: "c0".into(),
            text: "Fight".into(),
            condition: None,
            actions: vec![
                ScriptElement::Dialogue {
                    id: "e1".into(),
                    character: None,
                    content: "You draw your sword".into(),
                },
                ScriptElement::Jump {
                    id: "e2".into(),
                    label: "battle".into(),
                },
            ],
        }],
    }]);
    assert_eq!(
        generate(&script),
        "menu:\n    \"Fight\":\n        \"You draw your sword\""
    );
}

#[test]
fn choice_condition_is_emitted() {
    let script = script_with(vec![ScriptElement::Menu {
        id: "e0".into(),
        choices: vec![Choice {
            id: "c0".into(),
            text: "Sneak past".into(),
            condition: Some("agility > 3".into()),
            actions: Vec::new(),
        }],
    }]);
    assert_eq!(generate(&script), "menu:\n    \"Sneak past\" if agility > 3:");
}

#[test]
fn return_resets_indentation() {
    let script = script_with(vec![
        ScriptElement::Label {
            id: "e0".into(),
            label: "intro".into(),
        },
        ScriptElement::Return { id: "e1".into() },
        ScriptElement::Jump {
            id: "e2".into(),
            label: "intro".into(),
        },
    ]);
    assert_eq!(generate(&script), "label intro:\n    return\njump intro");
}

#[test]
fn audio_and_pause_statements() {
    let script = script_with(vec![
        ScriptElement::Play {
            id: "e0".into(),
            channel: AudioChannel::Music,
            audio: "bgm/theme.ogg".into(),
        },
        ScriptElement::Stop {
            id: "e1".into(),
            channel: AudioChannel::Music,
        },
        ScriptElement::Pause {
            id: "e2".into(),
            duration: Some(1.5),
        },
        ScriptElement::Pause {
            id: "e3".into(),
            duration: None,
        },
        ScriptElement::Call {
            id: "e4".into(),
            label: "credits".into(),
        },
    ]);
    assert_eq!(
        generate(&script),
        "play music \"bgm/theme.ogg\"\nstop music\npause 1.5\npause\ncall credits"
    );
}

#[test]
fn condition_and_code_elements_are_not_emitted() {
    let script = script_with(vec![
        ScriptElement::Condition {
            id: "e0".into(),
            condition: "points > 5".into(),
        },
        ScriptElement::Code {
            id: "e1".into(),
            code: "renpy.pause(1)".into(),
        },
        ScriptElement::Return { id: "e2".into() },
    ]);
    assert_eq!(generate(&script), "return");
}

#[test]
fn empty_script_generates_empty_text() {
    assert_eq!(generate(&Script::new()), "");
}
