/*  Testing library for the Elk programming language.
    Copyright (C) 2021 The Elk Developers

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program. If not, see <http://www.gnu.org/licenses/>.
*/

#[macro_use]
extern crate lazy_static;
extern crate proptest;

use std::collections::HashSet;

/// A logger that drops every record so test output stays readable.
pub fn quiet_logger() -> slog::Logger {
    slog::Logger::root(slog::Discard, slog::o!())
}

// Checks if a string can be used as a symbol
#[macro_export]
macro_rules! assume_symbol {
    ($a:ident) => {
        prop_assume!($a.len() > 0);
        prop_assume!(!$a.chars().any(char::is_whitespace));
    };
}

// Checks if all strings each can be used as a symbol
#[macro_export]
macro_rules! assume_symbols {
	($($a:ident),*) => ($(assume_symbol!($a);)*)
}

// A symbol names no built-in type
#[macro_export]
macro_rules! assume_not_builtin {
    ($a:ident) => {
        prop_assume!(!BUILTIN_TYPE_NAMES.contains($a.as_str()))
    };
}

// Common pattern in tests where a symbol is bound to a new integer.
#[macro_export]
macro_rules! let_integer {
    ($runtime:ident, $symbol:expr, $i:expr) => {
        $runtime
            .evaluate(&Expression::make_binding(
                $symbol,
                Expression::scalar("Int", $i as i64),
            ))
            .unwrap()
    };
}

lazy_static! {
    pub static ref BUILTIN_TYPE_NAMES: HashSet<&'static str> = {
        let mut names = HashSet::new();
        names.insert("Unit");
        names.insert("Int");
        names.insert("Char");
        names.insert("Function");
        names.insert("List");
        names
    };
}
