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

/// Declares a country handler that only differs from the default one by
/// the ISO 3166 code it reports.
///
/// ```ignore
/// metadata_only_country_handler!(GbCountryHandler, "gb");
/// ```
macro_rules! metadata_only_country_handler {
    ($name:ident, $iso:literal) => {
        #[doc = concat!("Handler for `", $iso, "` numbers, default rules.")]
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl $crate::country_handlers::CountryHandler for $name {
            fn iso_country_code(&self) -> Option<&'static str> {
                Some($iso)
            }
        }
    };
}

pub(crate) use metadata_only_country_handler;
