// Character Codec
// Maps characters to block integers and back via little-endian UTF-8 bytes

use super::bigint::RsaBigInt;
use crate::error::{Error, Result};

/// Interpret the character's UTF-8 bytes as a little-endian unsigned integer.
pub fn char_to_number(character: char) -> RsaBigInt {
    let mut buf = [0u8; 4];
    RsaBigInt::from_bytes_le(character.encode_utf8(&mut buf).as_bytes())
}

/// Inverse of [`char_to_number`].
///
/// The integer is written out in its minimal little-endian byte form and
/// must decode to exactly one character.
pub fn number_to_char(number: &RsaBigInt) -> Result<char> {
    let bytes = number.to_bytes_le();
    let text = std::str::from_utf8(&bytes)
        .map_err(|e| Error::Decode(format!("Invalid UTF-8 in {}: {}", number, e)))?;

    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(character), None) => Ok(character),
        _ => Err(Error::Decode(format!(
            "{} decodes to {} characters, expected one",
            number,
            text.chars().count()
        ))),
    }
}

/// One block per character, in message order.
pub fn encode_message(message: &str) -> Vec<RsaBigInt> {
    message.chars().map(char_to_number).collect()
}
