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

use super::enums::CountryCodeSource;

/// Output of country code extraction. `national_number` still contains the
/// punctuation of the input, handlers validate and strip it.
#[derive(Debug)]
pub struct NationalNumberWithCountryCode<'a> {
    pub national_number: Cow<'a, str>,
    pub country_code: i32,
    pub country_code_source: CountryCodeSource,
}

impl<'a> NationalNumberWithCountryCode<'a> {
    pub fn new(
        national_number: Cow<'a, str>,
        country_code: i32,
        country_code_source: CountryCodeSource,
    ) -> Self {
        Self { national_number, country_code, country_code_source }
    }
}

/// A national number split by a country handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NationalNumberParts {
    pub area_code: String,
    pub local_number: String,
}

impl NationalNumberParts {
    pub fn new(area_code: String, local_number: String) -> Self {
        Self { area_code, local_number }
    }

    /// Parts of a number for a country without area codes.
    pub fn without_area_code(local_number: String) -> Self {
        Self::new(String::new(), local_number)
    }
}
