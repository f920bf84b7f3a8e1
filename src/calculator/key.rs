/// Characters a key may type into the display
pub const INPUT_CHARACTERS: &str = "0123456789.+-*/%()";

/// Button labels of the keypad, row by row
pub const KEYPAD: [[&str; 5]; 4] = [
    ["7", "8", "9", "/", "⌫"],
    ["4", "5", "6", "*", "C"],
    ["1", "2", "3", "-", "("],
    [".", "0", "=", "+", ")"],
];

/// A single keypad or keyboard action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Types one character into the display
    Input(char),
    Clear,
    Backspace,
    Equals,
}

impl Key {
    /// Maps a keypad button label to its key
    pub fn from_label(label: &str) -> Option<Key> {
        match label {
            "C" => Some(Key::Clear),
            "⌫" => Some(Key::Backspace),
            "=" => Some(Key::Equals),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::input(c),
                    _ => None,
                }
            }
        }
    }

    /// Maps a keyboard character to its key: the input characters type
    /// themselves, Enter evaluates, Backspace/Delete erase, Escape clears
    pub fn from_char(c: char) -> Option<Key> {
        match c {
            '\n' | '\r' => Some(Key::Equals),
            '\u{8}' | '\u{7f}' => Some(Key::Backspace),
            '\u{1b}' => Some(Key::Clear),
            c => Key::input(c),
        }
    }

    fn input(c: char) -> Option<Key> {
        INPUT_CHARACTERS.contains(c).then_some(Key::Input(c))
    }
}
