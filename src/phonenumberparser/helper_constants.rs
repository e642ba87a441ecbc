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

/// Country calling code assumed when the number carries neither a `+` nor
/// an `00` prefix.
pub const DEFAULT_COUNTRY_CODE: i32 = 46;

pub const PLUS_SIGN: &'static str = "+";
/// International direct dialling prefix accepted in place of `+`.
pub const IDD_PREFIX: &'static str = "00";
pub const TRUNK_PREFIX: &'static str = "0";

// Punctuation tolerated inside a number. It carries no information and is
// dropped before the digits are split.
pub const VALID_PUNCTUATION: &'static str = r"()+\-";
// Norwegian numbers never use brackets or a second plus sign.
pub const VALID_PUNCTUATION_WITHOUT_BRACKETS: &'static str = r"\-";

pub const DIGITS: &'static str = "0-9";
