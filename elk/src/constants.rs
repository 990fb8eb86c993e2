//  Library for the Elk programming language.
// Copyright (C) 2021 The Elk Developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use crate::ids::TypeId;

pub const UNIT: TypeId = TypeId(0);
pub const INT: TypeId = TypeId(1);
pub const CHAR: TypeId = TypeId(2);
pub const FUNCTION: TypeId = TypeId(3);
pub const LIST: TypeId = TypeId(4);

/// The character every zero-argument `Char` construction yields.
pub const DEFAULT_CHAR: char = 'C';
