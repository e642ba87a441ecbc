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

mod default_handler;
mod metadata_only_handlers;
mod no_handler;
mod registry;
mod se_handler;

use std::fmt::Debug;

use crate::phonenumberparser::{
    errors::ParseError,
    helper_functions::{check_valid_characters_default, normalize_digits_only},
    helper_types::NationalNumberParts,
};

pub use default_handler::DefaultCountryHandler;
pub use metadata_only_handlers::{
    AtCountryHandler, AuCountryHandler, ChCountryHandler, CzCountryHandler, DeCountryHandler,
    DkCountryHandler, EeCountryHandler, FiCountryHandler, FrCountryHandler, GbCountryHandler,
    InCountryHandler, LvCountryHandler, NlCountryHandler, PlCountryHandler,
};
pub use no_handler::NoCountryHandler;
pub use registry::{
    country_handler_for_code, supported_calling_codes, supported_iso_country_codes,
};
pub(crate) use registry::COUNTRY_HANDLERS;
pub use se_handler::SeCountryHandler;

/// Country specific parsing and formatting rules.
///
/// Every method has a default that treats the whole national number as the
/// local number and renders it without separators, so a country only
/// overrides what differs. Handlers are stateless, one `&'static` instance
/// per country lives in the registry.
pub trait CountryHandler: Debug + Send + Sync {
    /// Validates the national number (everything after the country calling
    /// code, punctuation included) and splits it into area code and local
    /// number.
    fn parse(&self, national_number: &str) -> Result<NationalNumberParts, ParseError> {
        check_valid_characters_default(national_number)?;
        let digits = normalize_digits_only(national_number);
        if digits.is_empty() {
            return Err(ParseError::TooShort { number: digits, min_length: 1 });
        }
        Ok(NationalNumberParts::without_area_code(digits))
    }

    /// National part of the international format, the `+<code> ` prefix is
    /// added by the caller.
    fn format_international(&self, area_code: &str, local_number: &str) -> String {
        fast_cat::concat_str!(area_code, local_number)
    }

    fn format_national(&self, area_code: &str, local_number: &str) -> String {
        fast_cat::concat_str!(area_code, local_number)
    }

    /// National part of the MSISDN, the country calling code is prepended by
    /// the caller.
    fn format_msisdn(&self, area_code: &str, local_number: &str) -> String {
        fast_cat::concat_str!(area_code, local_number)
    }

    /// Lowercase ISO 3166 alpha-2 code, `None` for unknown calling codes.
    fn iso_country_code(&self) -> Option<&'static str> {
        None
    }
}
