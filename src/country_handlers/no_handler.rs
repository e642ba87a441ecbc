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

use super::CountryHandler;
use crate::{
    phonenumberparser::{
        errors::ParseError,
        helper_functions::{check_valid_characters, normalize_digits_only},
        helper_types::NationalNumberParts,
        phone_number_regexps::PHONE_NUMBER_REGEXPS,
    },
    string_util::group_digits,
};

const NUMBER_LENGTH: usize = 8;

/// Handler for Norwegian (+47) numbers. Norway has a closed numbering plan:
/// every number is eight digits and there are no area codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCountryHandler;

impl NoCountryHandler {
    fn format_local_number(local_number: &str) -> String {
        let groups: &[usize] = match local_number.as_bytes().first() {
            Some(b'2' | b'3' | b'5' | b'6' | b'7') => &[2, 2, 2, 2],
            Some(b'4' | b'8' | b'9') => &[3, 2, 3],
            // TODO: group the 0xx and 1xx service number ranges
            _ => return local_number.to_owned(),
        };
        group_digits(local_number, groups)
    }
}

impl CountryHandler for NoCountryHandler {
    fn parse(&self, national_number: &str) -> Result<NationalNumberParts, ParseError> {
        check_valid_characters(
            national_number,
            &PHONE_NUMBER_REGEXPS.invalid_character_without_brackets_pattern,
        )?;
        let digits = normalize_digits_only(national_number);
        if digits.len() != NUMBER_LENGTH {
            return Err(ParseError::WrongLength { number: digits, expected_length: NUMBER_LENGTH });
        }
        Ok(NationalNumberParts::without_area_code(digits))
    }

    fn format_international(&self, _area_code: &str, local_number: &str) -> String {
        Self::format_local_number(local_number)
    }

    fn format_national(&self, _area_code: &str, local_number: &str) -> String {
        Self::format_local_number(local_number)
    }

    fn format_msisdn(&self, _area_code: &str, local_number: &str) -> String {
        local_number.to_owned()
    }

    fn iso_country_code(&self) -> Option<&'static str> {
        Some("no")
    }
}
