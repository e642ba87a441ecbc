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

pub(crate) mod helper_constants;
pub(crate) mod helper_functions;
pub(crate) mod helper_types;
pub(crate) mod phone_number_regexps;
pub mod errors;
pub mod enums;
pub mod phone_number;
pub mod phonenumberparser;

use std::sync::LazyLock;

pub use enums::{CountryCodeSource, PhoneNumberFormat};
pub use helper_constants::DEFAULT_COUNTRY_CODE;
pub use helper_types::NationalNumberParts;
use crate::phonenumberparser::phonenumberparser::PhoneNumberParser;

/// Parser shared by the crate-level functions, assumes [`DEFAULT_COUNTRY_CODE`]
/// for numbers without an explicit country code.
pub static PHONE_NUMBER_PARSER: LazyLock<PhoneNumberParser> = LazyLock::new(|| {
    PhoneNumberParser::new()
});
