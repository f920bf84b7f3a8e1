use log::debug;

use crate::parser::constants::ALLOWED_CHARACTERS;
use crate::parser::errors::ParseError;

/// # Errors
///
/// Returns [`ParseError::InvalidCharacter`] for the first character outside
/// the calculator alphabet (digits, `.`, `+ - * / % ( )` and space).
pub fn validate_characters(expression: &str) -> Result<(), ParseError> {
    debug!("Validating characters of '{}'", expression);

    if let Some((position, character)) = expression
        .char_indices()
        .find(|&(_, c)| !ALLOWED_CHARACTERS.contains(c))
    {
        debug!(
            "Expression contains invalid character '{}' at position {}",
            character, position
        );
        return Err(ParseError::InvalidCharacter {
            character,
            position,
        });
    }

    debug!("Character validation successful");
    Ok(())
}
