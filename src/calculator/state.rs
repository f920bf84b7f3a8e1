use log::debug;

use crate::calculator::key::Key;

/// Text shown after any failed evaluation
pub const ERROR_TEXT: &str = "Error";

/// Display state of the calculator. The evaluator never sees this state; it
/// only receives a copy of the text on [`Calculator::evaluate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calculator {
    display: String,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn press(&mut self, key: Key) {
        match key {
            Key::Input(c) => self.display.push(c),
            Key::Clear => self.clear(),
            Key::Backspace => self.backspace(),
            Key::Equals => self.evaluate(),
        }
    }

    pub fn append(&mut self, text: &str) {
        self.display.push_str(text);
    }

    pub fn clear(&mut self) {
        self.display.clear();
    }

    pub fn backspace(&mut self) {
        self.display.pop();
    }

    /// Replaces the display with the value of its expression, or with
    /// `Error` if it has none. An empty display is left untouched.
    pub fn evaluate(&mut self) {
        let expression = self.display.trim();
        if expression.is_empty() {
            return;
        }

        self.display = match crate::evaluate(expression) {
            Ok(value) => value.to_string(),
            Err(e) => {
                debug!("Evaluation of '{}' failed: {}", expression, e);
                ERROR_TEXT.to_string()
            }
        };
    }
}
