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

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use super::{
    PHONE_NUMBER_PARSER, enums::PhoneNumberFormat, errors::InvalidPhoneNumberError,
    helper_constants::PLUS_SIGN, helper_types::NationalNumberParts,
};
use crate::country_handlers::CountryHandler;

/// A successfully parsed phone number.
///
/// Values are only produced by [`crate::PhoneNumberParser`] and never change
/// afterwards. Rendering is delegated to the country handler the number was
/// parsed with.
#[derive(Debug, Clone)]
pub struct PhoneNumber {
    country_handler: &'static dyn CountryHandler,
    country_code: i32,
    area_code: String,
    local_number: String,
    iso_country_code: Option<&'static str>,
}

impl PhoneNumber {
    pub(crate) fn new(
        country_handler: &'static dyn CountryHandler,
        country_code: i32,
        parts: NationalNumberParts,
    ) -> Self {
        Self {
            country_handler,
            country_code,
            area_code: parts.area_code,
            local_number: parts.local_number,
            iso_country_code: country_handler.iso_country_code(),
        }
    }

    /// E.164 country calling code, e.g. `46`.
    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    /// Area code, digits only. Swedish area codes keep their trunk `0`,
    /// countries without area codes return an empty string.
    pub fn area_code(&self) -> &str {
        &self.area_code
    }

    pub fn local_number(&self) -> &str {
        &self.local_number
    }

    /// Lowercase ISO 3166 alpha-2 code, `None` if the country calling code
    /// has no registered handler.
    pub fn iso_country_code(&self) -> Option<&'static str> {
        self.iso_country_code
    }

    /// `+` followed by the MSISDN, e.g. `+46701740605`.
    pub fn to_compact_format(&self) -> String {
        let msisdn = self.to_msisdn();
        fast_cat::concat_str!(PLUS_SIGN, &msisdn)
    }

    /// E.g. `+46 70 174 06 05`.
    pub fn to_international_format(&self) -> String {
        let national_part = self
            .country_handler
            .format_international(&self.area_code, &self.local_number);
        let mut buf = itoa::Buffer::new();
        let country_code = buf.format(self.country_code);
        fast_cat::concat_str!(PLUS_SIGN, country_code, " ", &national_part)
    }

    /// Country calling code and national significant number, digits only,
    /// e.g. `46701740605`.
    pub fn to_msisdn(&self) -> String {
        let national_part = self
            .country_handler
            .format_msisdn(&self.area_code, &self.local_number);
        let mut buf = itoa::Buffer::new();
        let country_code = buf.format(self.country_code);
        fast_cat::concat_str!(country_code, &national_part)
    }

    /// E.g. `070-174 06 05`.
    pub fn to_national_format(&self) -> String {
        self.country_handler
            .format_national(&self.area_code, &self.local_number)
    }

    pub fn format(&self, number_format: PhoneNumberFormat) -> String {
        match number_format {
            PhoneNumberFormat::Compact => self.to_compact_format(),
            PhoneNumberFormat::International => self.to_international_format(),
            PhoneNumberFormat::National => self.to_national_format(),
            PhoneNumberFormat::Msisdn => self.to_msisdn(),
        }
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_international_format())
    }
}

// The handler is a function of the country code, so it takes no part in
// comparisons.
impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.country_code == other.country_code
            && self.area_code == other.area_code
            && self.local_number == other.local_number
            && self.iso_country_code == other.iso_country_code
    }
}

impl Eq for PhoneNumber {}

impl Hash for PhoneNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.country_code.hash(state);
        self.area_code.hash(state);
        self.local_number.hash(state);
        self.iso_country_code.hash(state);
    }
}

impl FromStr for PhoneNumber {
    type Err = InvalidPhoneNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PHONE_NUMBER_PARSER.parse(s)
    }
}
