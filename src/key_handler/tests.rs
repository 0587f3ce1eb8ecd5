//! Tests for key handler

use crate::key::{Key, KeyInput, Modifiers};
use crate::key_handler::{KeyAction, KeyHandler};
use crate::movement::Motion;

#[test]
fn test_motion_keys() {
    let cases = [
        ('w', Motion::WordForward),
        ('b', Motion::WordBackward),
        ('}', Motion::ParagraphForward),
        ('{', Motion::ParagraphBackward),
    ];
    for (c, motion) in cases {
        assert_eq!(
            KeyHandler::process_key(KeyInput::char(c)),
            KeyAction::Motion(motion)
        );
    }
}

#[test]
fn test_mode_keys() {
    assert_eq!(
        KeyHandler::process_key(KeyInput::char('v')),
        KeyAction::ToggleVisual
    );
    assert_eq!(KeyHandler::process_key(KeyInput::char('y')), KeyAction::Yank);
    assert_eq!(
        KeyHandler::process_key(KeyInput::plain(Key::Escape)),
        KeyAction::Cancel
    );
}

#[test]
fn test_modifiers_suppress_commands() {
    let modifiers = [
        Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        },
        Modifiers {
            alt: true,
            ..Modifiers::NONE
        },
        Modifiers {
            meta: true,
            ..Modifiers::NONE
        },
    ];
    for m in modifiers {
        for c in ['w', 'b', '{', '}', 'v', 'y'] {
            assert_eq!(
                KeyHandler::process_key(KeyInput::new(Key::Char(c), m)),
                KeyAction::Ignore,
                "{c} with {m:?}"
            );
        }
    }
}

#[test]
fn test_escape_ignores_modifiers() {
    let input = KeyInput::new(
        Key::Escape,
        Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        },
    );
    assert_eq!(KeyHandler::process_key(input), KeyAction::Cancel);
}

#[test]
fn test_other_keys_are_ignored() {
    for key in [
        Key::Char('W'),
        Key::Char('j'),
        Key::Char(' '),
        Key::Enter,
        Key::Tab,
        Key::Backspace,
        Key::F(2),
        Key::Other,
    ] {
        assert_eq!(KeyHandler::process_key(KeyInput::plain(key)), KeyAction::Ignore);
    }
}
