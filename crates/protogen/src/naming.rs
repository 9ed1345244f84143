//! Identifier case conversions.
//!
//! All conversions are ASCII-only: non-ASCII characters are passed through by
//! [`camel_to_snake`] and dropped by the camel-case conversions.

/// Converts an `UpperCamel` or `lowerCamel` identifier to `snake_case`.
///
/// Underscores are kept as they are; an underscore is inserted before every
/// upper-case letter except the first character and letters that already
/// follow an underscore.
pub fn camel_to_snake(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    let mut is_first = true;
    for c in input.chars() {
        if c == '_' {
            result.push('_');
            continue;
        }
        if !is_first && c.is_ascii_uppercase() && !result.ends_with('_') {
            result.push('_');
        }
        result.push(c.to_ascii_lowercase());
        is_first = false;
    }
    result
}

/// Converts a `SCREAMING_SNAKE_CASE` identifier to `UpperCamelCase`.
///
/// A letter is upper-cased when it starts a word and lower-cased otherwise.
/// Words start at the beginning of the input, after a digit, and after any
/// character that is not alphanumeric. Digits are kept, everything else that
/// is not a letter is dropped.
pub fn screaming_snake_to_upper_camel(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut cap_next = true;
    for c in input.chars() {
        if c.is_ascii_alphabetic() {
            result.push(if cap_next {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            });
            cap_next = false;
        } else if c.is_ascii_digit() {
            result.push(c);
            cap_next = true;
        } else {
            cap_next = true;
        }
    }
    result
}

/// Converts an `underscore_separated` identifier to camel case, keeping the
/// case of letters that do not start a word.
///
/// This is the conversion used for generated type names: `my_enum` becomes
/// `MyEnum`, while `HTTPStatus` is left alone.
pub fn underscores_to_camel_case(input: &str, cap_first_letter: bool) -> String {
    let mut result = String::with_capacity(input.len());
    let mut cap_next = cap_first_letter;
    for (i, c) in input.chars().enumerate() {
        if c.is_ascii_lowercase() {
            result.push(if cap_next { c.to_ascii_uppercase() } else { c });
            cap_next = false;
        } else if c.is_ascii_uppercase() {
            result.push(if i == 0 && !cap_next {
                c.to_ascii_lowercase()
            } else {
                c
            });
            cap_next = false;
        } else if c.is_ascii_digit() {
            result.push(c);
            cap_next = true;
        } else {
            cap_next = true;
        }
    }
    result
}
