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

use log::trace;

use super::{
    AtCountryHandler, AuCountryHandler, ChCountryHandler, CountryHandler, CzCountryHandler,
    DeCountryHandler, DefaultCountryHandler, DkCountryHandler, EeCountryHandler,
    FiCountryHandler, FrCountryHandler, GbCountryHandler, InCountryHandler, LvCountryHandler,
    NlCountryHandler, NoCountryHandler, PlCountryHandler, SeCountryHandler,
};

/// Country calling code to handler table.
///
/// Explicit country codes are resolved by walking this table in order and
/// taking the first code that prefixes the number, so the order matters
/// whenever a short code is a prefix of a longer one.
pub(crate) static COUNTRY_HANDLERS: [(i32, &'static dyn CountryHandler); 16] = [
    (31, &NlCountryHandler),
    (33, &FrCountryHandler),
    (358, &FiCountryHandler),
    (371, &LvCountryHandler),
    (372, &EeCountryHandler),
    (39, &AuCountryHandler),
    (41, &ChCountryHandler),
    (420, &CzCountryHandler),
    (43, &AtCountryHandler),
    (44, &GbCountryHandler),
    (45, &DkCountryHandler),
    (46, &SeCountryHandler),
    (47, &NoCountryHandler),
    (48, &PlCountryHandler),
    (49, &DeCountryHandler),
    (91, &InCountryHandler),
];

static DEFAULT_COUNTRY_HANDLER: DefaultCountryHandler = DefaultCountryHandler;

/// Returns the handler registered for `country_calling_code`, or the
/// default handler if there is none.
pub fn country_handler_for_code(country_calling_code: i32) -> &'static dyn CountryHandler {
    match COUNTRY_HANDLERS
        .iter()
        .find(|(code, _)| *code == country_calling_code)
    {
        Some((_, handler)) => *handler,
        None => {
            trace!("No handler registered for country code {country_calling_code}, using default");
            &DEFAULT_COUNTRY_HANDLER
        }
    }
}

/// Calling codes with a registered handler, in table order.
pub fn supported_calling_codes() -> impl Iterator<Item = i32> {
    COUNTRY_HANDLERS.iter().map(|(code, _)| *code)
}

/// ISO 3166 codes of the registered handlers, in table order.
pub fn supported_iso_country_codes() -> impl Iterator<Item = &'static str> {
    COUNTRY_HANDLERS
        .iter()
        .filter_map(|(_, handler)| handler.iso_country_code())
}
