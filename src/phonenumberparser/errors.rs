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

use std::fmt;

use thiserror::Error;

/// Reason why a single parsing stage rejected the input.
///
/// The `Display` text of every variant is a complete sentence, it is used
/// verbatim as the tail of [`InvalidPhoneNumberError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Nothing but whitespace was given.
    #[error("Phone number can not be empty.")]
    EmptyNumber,
    /// A `+` or `00` prefix was not followed by a digit.
    #[error("Country code must begin with a digit.")]
    InvalidCountryCodeStart,
    /// The first character that is neither a digit nor allowed punctuation.
    #[error("Phone number contains invalid character \"{0}\".")]
    InvalidCharacter(char),
    /// The national number has fewer digits than the country allows.
    #[error("Phone number is too short.")]
    TooShort {
        number: String,
        min_length: usize,
    },
    /// The part left after the area code is outside the allowed range.
    #[error(
        "Local part or phone number \"{local_number}\" must be between {min_length} and {max_length} digits."
    )]
    LocalNumberWrongLength {
        local_number: String,
        min_length: usize,
        max_length: usize,
    },
    /// The country only has numbers of one fixed length.
    #[error("Local part of number \"{number}\" must be {expected_length} digits.")]
    WrongLength {
        number: String,
        expected_length: usize,
    },
}

/// Error returned by [`crate::parse`]: the failing stage together with the
/// input that was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct InvalidPhoneNumberError {
    input: String,
    #[source]
    reason: ParseError,
}

impl InvalidPhoneNumberError {
    pub(crate) fn new(input: &str, reason: ParseError) -> Self {
        Self { input: input.to_owned(), reason }
    }

    /// The raw string passed to the parser.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn reason(&self) -> &ParseError {
        &self.reason
    }

    pub fn into_reason(self) -> ParseError {
        self.reason
    }
}

impl fmt::Display for InvalidPhoneNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            // there is nothing to quote
            ParseError::EmptyNumber => write!(f, "{}", self.reason),
            _ => write!(f, "Phone number \"{}\" is invalid: {}", self.input, self.reason),
        }
    }
}
