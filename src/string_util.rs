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

/// Removes the first `len` bytes of given string Cow. `len` must lie on a
/// char boundary.
///
/// Calls `drain` if string is owned and returns slice if string is borrowed
pub fn drain_cow_prefix(cow: Cow<'_, str>, len: usize) -> Cow<'_, str> {
    match cow {
        Cow::Borrowed(s) => Cow::Borrowed(&s[len..]),
        Cow::Owned(mut s) => {
            s.drain(..len);
            Cow::Owned(s)
        }
    }
}

/// Removes every leading occurrence of `pattern`, same allocation strategy as
/// [`drain_cow_prefix`].
pub fn trim_cow_start_matches<'a>(cow: Cow<'a, str>, pattern: &str) -> Cow<'a, str> {
    match cow {
        Cow::Borrowed(s) => Cow::Borrowed(s.trim_start_matches(pattern)),
        Cow::Owned(mut s) => {
            let trimmed = s.len() - s.trim_start_matches(pattern).len();
            s.drain(0..trimmed);
            Cow::Owned(s)
        }
    }
}

/// Joins consecutive slices of `digits` with single spaces, slice lengths
/// are taken from `groups`. Digits left over after the last group are
/// appended to it.
///
/// `digits` is expected to be ASCII.
pub fn group_digits(digits: &str, groups: &[usize]) -> String {
    let mut grouped = String::with_capacity(digits.len() + groups.len());
    let mut start = 0;
    for (i, &len) in groups.iter().enumerate() {
        if start >= digits.len() {
            break;
        }
        let end = if i + 1 == groups.len() {
            digits.len()
        } else {
            (start + len).min(digits.len())
        };
        if start > 0 {
            grouped.push(' ');
        }
        grouped.push_str(&digits[start..end]);
        start = end;
    }
    grouped
}
