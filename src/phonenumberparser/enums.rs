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

use strum::EnumIter;

/// Textual representations a parsed phone number can be rendered into.
///
/// For the Swedish mobile number `070-174 06 05` these are:
/// - **Compact**: `+46701740605`
/// - **International**: `+46 70 174 06 05`
/// - **National**: `070-174 06 05`
/// - **Msisdn**: `46701740605`
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    /// **Compact format.**
    /// `+` followed by the MSISDN, no separators.
    /// Example: `+46701740605`.
    Compact,
    /// **International format.**
    /// `+`, the country calling code and a space, then the national number
    /// grouped by the country's conventions without the trunk prefix.
    /// Example: `+46 70 174 06 05`.
    International,
    /// **National format.**
    /// The number as dialled inside its own country, trunk prefix included.
    /// Example: `070-174 06 05`.
    National,
    /// **MSISDN.**
    /// Country calling code followed by the national significant number,
    /// digits only.
    /// Example: `46701740605`.
    Msisdn,
}

/// Tells how the country calling code of a number was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryCodeSource {
    /// The number started with `+`.
    FromNumberWithPlusSign,
    /// The number started with the `00` international dialling prefix.
    FromNumberWithIdd,
    /// No prefix was given, the parser's default country was assumed.
    FromDefaultCountry,
}

impl CountryCodeSource {
    pub fn is_explicit(&self) -> bool {
        !matches!(self, CountryCodeSource::FromDefaultCountry)
    }
}
