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

//! Parsing and formatting of human-entered phone numbers.
//!
//! A number is split into country calling code, area code and local number
//! and can be rendered back in international, national, MSISDN and compact
//! form. Numbers without a `+` or `00` prefix are assumed to be Swedish.
//!
//! ```
//! let number = nordphone::parse("070-174 06 05").unwrap();
//! assert_eq!(number.country_code(), 46);
//! assert_eq!(number.area_code(), "070");
//! assert_eq!(number.to_international_format(), "+46 70 174 06 05");
//! assert_eq!(number.to_compact_format(), "+46701740605");
//! ```

pub mod country_handlers;
mod phonenumberparser;
pub(crate) mod string_util;

/// Boilerplate that repeats for every country handler is generated by
/// macros, the name of which describes what is happening more clearly than
/// the expanded code.
mod macros;

#[cfg(test)]
mod tests;

pub use phonenumberparser::{
    CountryCodeSource, DEFAULT_COUNTRY_CODE, NationalNumberParts, PHONE_NUMBER_PARSER,
    PhoneNumberFormat,
    errors::{InvalidPhoneNumberError, ParseError},
    phone_number::PhoneNumber,
    phonenumberparser::PhoneNumberParser,
};

/// Parses `phone_number` with the shared [`PHONE_NUMBER_PARSER`].
pub fn parse(phone_number: &str) -> Result<PhoneNumber, InvalidPhoneNumberError> {
    PHONE_NUMBER_PARSER.parse(phone_number)
}

/// Like [`parse`], returns `None` instead of an error.
pub fn try_parse(phone_number: &str) -> Option<PhoneNumber> {
    PHONE_NUMBER_PARSER.try_parse(phone_number)
}

pub fn is_valid(phone_number: &str) -> bool {
    PHONE_NUMBER_PARSER.is_valid(phone_number)
}
