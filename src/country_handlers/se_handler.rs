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

use std::ops::RangeInclusive;

use log::trace;

use super::CountryHandler;
use crate::{
    phonenumberparser::{
        errors::ParseError,
        helper_constants::TRUNK_PREFIX,
        helper_functions::{check_valid_characters_default, normalize_digits_only},
        helper_types::NationalNumberParts,
    },
    string_util::group_digits,
};

const MIN_NATIONAL_NUMBER_LENGTH: usize = 7;
const LOCAL_NUMBER_LENGTH: RangeInclusive<usize> = 5..=8;

/// Two digit area codes outside of the `7x` mobile range.
const TWO_DIGIT_AREA_CODES: [&str; 20] = [
    "11", "13", "16", "18", "19", "21", "23", "26", "31", "33",
    "35", "36", "40", "42", "44", "46", "54", "60", "63", "90",
];

/// Handler for Swedish (+46) numbers.
///
/// The stored area code keeps its trunk `0` (`"08"`, `"070"`, `"0480"`),
/// international and MSISDN renderings drop it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeCountryHandler;

impl SeCountryHandler {
    /// Length of the area code of a national number without trunk prefix.
    fn area_code_length(national_number: &str) -> usize {
        if national_number.starts_with('8') {
            return 1;
        }
        if national_number.starts_with('7') {
            return 2;
        }
        match national_number.get(..2) {
            Some(prefix) if TWO_DIGIT_AREA_CODES.contains(&prefix) => 2,
            _ => 3,
        }
    }

    fn format_local_number(local_number: &str) -> String {
        let groups: &[usize] = match local_number.len() {
            5 => &[3, 2],
            6 => &[2, 2, 2],
            7 => &[3, 2, 2],
            8 => &[3, 3, 2],
            _ => return local_number.to_owned(),
        };
        group_digits(local_number, groups)
    }

    fn area_code_without_trunk_prefix(area_code: &str) -> &str {
        area_code.strip_prefix(TRUNK_PREFIX).unwrap_or(area_code)
    }
}

impl CountryHandler for SeCountryHandler {
    fn parse(&self, national_number: &str) -> Result<NationalNumberParts, ParseError> {
        check_valid_characters_default(national_number)?;
        let digits = normalize_digits_only(national_number);
        // Accept the trunk prefix even after an explicit +46.
        let digits = digits.trim_start_matches(TRUNK_PREFIX);

        if digits.len() < MIN_NATIONAL_NUMBER_LENGTH {
            return Err(ParseError::TooShort {
                number: digits.to_owned(),
                min_length: MIN_NATIONAL_NUMBER_LENGTH,
            });
        }

        let (area_code, local_number) = digits.split_at(Self::area_code_length(digits));
        if !LOCAL_NUMBER_LENGTH.contains(&local_number.len()) {
            return Err(ParseError::LocalNumberWrongLength {
                local_number: local_number.to_owned(),
                min_length: *LOCAL_NUMBER_LENGTH.start(),
                max_length: *LOCAL_NUMBER_LENGTH.end(),
            });
        }
        trace!("Swedish number split into area code '{area_code}' and local number '{local_number}'");

        Ok(NationalNumberParts::new(
            fast_cat::concat_str!(TRUNK_PREFIX, area_code),
            local_number.to_owned(),
        ))
    }

    fn format_international(&self, area_code: &str, local_number: &str) -> String {
        let local_number = Self::format_local_number(local_number);
        let area_code = Self::area_code_without_trunk_prefix(area_code);
        fast_cat::concat_str!(area_code, " ", &local_number)
    }

    fn format_national(&self, area_code: &str, local_number: &str) -> String {
        let local_number = Self::format_local_number(local_number);
        fast_cat::concat_str!(area_code, "-", &local_number)
    }

    fn format_msisdn(&self, area_code: &str, local_number: &str) -> String {
        let area_code = Self::area_code_without_trunk_prefix(area_code);
        fast_cat::concat_str!(area_code, local_number)
    }

    fn iso_country_code(&self) -> Option<&'static str> {
        Some("se")
    }
}
