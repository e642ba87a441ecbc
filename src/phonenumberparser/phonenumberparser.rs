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

use log::{trace, warn};

use super::{
    enums::CountryCodeSource,
    errors::{InvalidPhoneNumberError, ParseError},
    helper_constants::{DEFAULT_COUNTRY_CODE, IDD_PREFIX, PLUS_SIGN, TRUNK_PREFIX},
    helper_functions::strip_whitespace,
    helper_types::NationalNumberWithCountryCode,
    phone_number::PhoneNumber,
};
use crate::{
    country_handlers::{COUNTRY_HANDLERS, country_handler_for_code},
    string_util::{drain_cow_prefix, trim_cow_start_matches},
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, InvalidPhoneNumberError>;

/// Turns free-form phone number strings into [`PhoneNumber`] values.
///
/// The parser itself only holds the country assumed for numbers without a
/// `+` or `00` prefix; the country handlers are process-wide statics, so a
/// parser is cheap to build and safe to share between threads.
#[derive(Debug, Clone)]
pub struct PhoneNumberParser {
    default_country_code: i32,
}

impl Default for PhoneNumberParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneNumberParser {
    /// Creates a parser that assumes Sweden (+46) for numbers without an
    /// explicit country code.
    pub fn new() -> Self {
        Self::with_default_country_code(DEFAULT_COUNTRY_CODE)
    }

    pub fn with_default_country_code(default_country_code: i32) -> Self {
        Self { default_country_code }
    }

    pub fn default_country_code(&self) -> i32 {
        self.default_country_code
    }

    /// Parses `phone_number`.
    ///
    /// # Errors
    /// Returns [`InvalidPhoneNumberError`] describing the first stage that
    /// rejected the input, e.g.
    /// `Phone number "FooBar" is invalid: Phone number contains invalid character "F".`
    pub fn parse(&self, phone_number: &str) -> Result<PhoneNumber> {
        self.parse_helper(phone_number)
            .map_err(|reason| InvalidPhoneNumberError::new(phone_number, reason))
    }

    /// Same as [`Self::parse`] but drops the error.
    pub fn try_parse(&self, phone_number: &str) -> Option<PhoneNumber> {
        self.parse_helper(phone_number).ok()
    }

    pub fn is_valid(&self, phone_number: &str) -> bool {
        self.parse_helper(phone_number).is_ok()
    }

    fn parse_helper(&self, phone_number: &str) -> std::result::Result<PhoneNumber, ParseError> {
        let stripped = strip_whitespace(phone_number)?;
        let NationalNumberWithCountryCode {
            national_number,
            country_code,
            country_code_source,
        } = self.extract_country_code(stripped)?;
        trace!(
            "Extracted country code {country_code} ({country_code_source:?}), national number '{national_number}'"
        );

        let country_handler = country_handler_for_code(country_code);
        let parts = country_handler.parse(&national_number)?;
        trace!("Parsed '{phone_number}' with {country_handler:?}: {parts:?}");

        Ok(PhoneNumber::new(country_handler, country_code, parts))
    }

    /// Splits the country calling code off a whitespace-free number.
    ///
    /// Without a `+` or `00` prefix the default country code is assumed and
    /// trunk zeros are removed. With one, the registry is scanned in table
    /// order and the first code the number starts with is taken; if none
    /// matches the first digit alone is used as the country code.
    pub(crate) fn extract_country_code<'a>(
        &self,
        phone_number: Cow<'a, str>,
    ) -> std::result::Result<NationalNumberWithCountryCode<'a>, ParseError> {
        let (phone_number, country_code_source) = if phone_number.starts_with(PLUS_SIGN) {
            (
                drain_cow_prefix(phone_number, PLUS_SIGN.len()),
                CountryCodeSource::FromNumberWithPlusSign,
            )
        } else if phone_number.starts_with(IDD_PREFIX) {
            (
                drain_cow_prefix(phone_number, IDD_PREFIX.len()),
                CountryCodeSource::FromNumberWithIdd,
            )
        } else {
            return Ok(NationalNumberWithCountryCode::new(
                trim_cow_start_matches(phone_number, TRUNK_PREFIX),
                self.default_country_code,
                CountryCodeSource::FromDefaultCountry,
            ));
        };

        let mut buf = itoa::Buffer::new();
        for (country_code, _) in COUNTRY_HANDLERS.iter() {
            let country_code_str = buf.format(*country_code);
            if phone_number.starts_with(country_code_str) {
                let len = country_code_str.len();
                return Ok(NationalNumberWithCountryCode::new(
                    drain_cow_prefix(phone_number, len),
                    *country_code,
                    country_code_source,
                ));
            }
        }

        match phone_number.chars().next().and_then(|c| c.to_digit(10)) {
            Some(digit) => {
                warn!(
                    "Country code of '{phone_number}' is not registered, using its first digit {digit}"
                );
                Ok(NationalNumberWithCountryCode::new(
                    drain_cow_prefix(phone_number, 1),
                    digit as i32,
                    country_code_source,
                ))
            }
            None => Err(ParseError::InvalidCountryCodeStart),
        }
    }
}
