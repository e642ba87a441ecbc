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

use std::sync::LazyLock;

use regex::Regex;

use super::helper_constants::{DIGITS, VALID_PUNCTUATION, VALID_PUNCTUATION_WITHOUT_BRACKETS};

pub(crate) static PHONE_NUMBER_REGEXPS: LazyLock<PhoneNumberRegExps> =
    LazyLock::new(PhoneNumberRegExps::new);

pub(crate) struct PhoneNumberRegExps {
    /// Any run of whitespace, removed before anything else happens.
    pub whitespace_pattern: Regex,

    /// Matches a single character that is neither a digit nor valid
    /// punctuation. The first match is the character reported to the user.
    pub invalid_character_pattern: Regex,

    /// Same as `invalid_character_pattern` but only `-` is tolerated as
    /// punctuation.
    pub invalid_character_without_brackets_pattern: Regex,
}

impl PhoneNumberRegExps {
    fn new() -> Self {
        Self {
            whitespace_pattern: Regex::new(r"\s+").expect("Invalid constant pattern!"),
            invalid_character_pattern: Regex::new(
                &fast_cat::concat_str!("[^", DIGITS, VALID_PUNCTUATION, "]"),
            )
            .expect("Invalid constant pattern!"),
            invalid_character_without_brackets_pattern: Regex::new(
                &fast_cat::concat_str!("[^", DIGITS, VALID_PUNCTUATION_WITHOUT_BRACKETS, "]"),
            )
            .expect("Invalid constant pattern!"),
        }
    }
}
