//! Calculator display state and the keys that drive it

mod key;
mod state;

pub use key::{INPUT_CHARACTERS, KEYPAD, Key};
pub use state::{Calculator, ERROR_TEXT};
