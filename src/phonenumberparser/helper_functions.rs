// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;

use regex::Regex;

use super::{errors::ParseError, phone_number_regexps::PHONE_NUMBER_REGEXPS};

/// Removes all whitespace from the raw input. Fails with
/// [`ParseError::EmptyNumber`] if nothing is left.
pub(crate) fn strip_whitespace(phone_number: &str) -> Result<Cow<'_, str>, ParseError> {
    let stripped = PHONE_NUMBER_REGEXPS
        .whitespace_pattern
        .replace_all(phone_number, "");
    if stripped.is_empty() {
        return Err(ParseError::EmptyNumber);
    }
    Ok(stripped)
}

/// Checks that `phone_number` has no match of `invalid_character_pattern`,
/// reporting the leftmost offending character otherwise.
pub(crate) fn check_valid_characters(
    phone_number: &str,
    invalid_character_pattern: &Regex,
) -> Result<(), ParseError> {
    match invalid_character_pattern
        .find(phone_number)
        .and_then(|found| found.as_str().chars().next())
    {
        Some(invalid) => Err(ParseError::InvalidCharacter(invalid)),
        None => Ok(()),
    }
}

/// Validates against the default alphabet (digits and `()+-`).
pub(crate) fn check_valid_characters_default(phone_number: &str) -> Result<(), ParseError> {
    check_valid_characters(phone_number, &PHONE_NUMBER_REGEXPS.invalid_character_pattern)
}

/// Returns only the ASCII digits of the number.
pub(crate) fn normalize_digits_only(phone_number: &str) -> String {
    phone_number.chars().filter(char::is_ascii_digit).collect()
}
