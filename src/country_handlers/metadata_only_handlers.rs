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

//! Countries that so far only carry their ISO 3166 code.

use crate::macros::metadata_only_country_handler;

metadata_only_country_handler!(NlCountryHandler, "nl");
metadata_only_country_handler!(FrCountryHandler, "fr");
metadata_only_country_handler!(FiCountryHandler, "fi");
metadata_only_country_handler!(LvCountryHandler, "lv");
metadata_only_country_handler!(EeCountryHandler, "ee");
metadata_only_country_handler!(AuCountryHandler, "au");
metadata_only_country_handler!(ChCountryHandler, "ch");
metadata_only_country_handler!(CzCountryHandler, "cz");
metadata_only_country_handler!(AtCountryHandler, "at");
metadata_only_country_handler!(GbCountryHandler, "gb");
metadata_only_country_handler!(DkCountryHandler, "dk");
metadata_only_country_handler!(PlCountryHandler, "pl");
metadata_only_country_handler!(DeCountryHandler, "de");
metadata_only_country_handler!(InCountryHandler, "in");
