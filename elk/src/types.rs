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

use crate::{
    constants::DEFAULT_CHAR,
    errors::{ElkError, ElkResult},
    ids::{TypeId, ValueId},
    list::ListNode,
};
use std::{fmt, rc::Rc};

/// An externally supplied scalar handed to a one-argument constructor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scalar {
    Integer(i64),
    Character(char),
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<char> for Scalar {
    fn from(c: char) -> Self {
        Self::Character(c)
    }
}

/// The immutable contents of a value.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    Unit,
    Integer(i64),
    Character(char),
    List(Rc<ListNode>),
}

impl Payload {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_character(&self) -> Option<char> {
        match self {
            Self::Character(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Rc<ListNode>> {
        match self {
            Self::List(head) => Some(head),
            _ => None,
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => f.write_str("()"),
            Self::Integer(i) => fmt::Display::fmt(i, f),
            Self::Character(c) => write!(f, "{:?}", c),
            Self::List(head) => {
                f.write_str("[")?;
                for (index, element) in head.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(&element.payload, f)?;
                }
                f.write_str("]")
            },
        }
    }
}

pub type Factory = fn(&Type) -> ElkResult<Payload>;
pub type ScalarFactory = fn(&Type, Scalar) -> ElkResult<Payload>;

/// Whether a type can be constructed and how. Neither factory is called when `is_abstract` is set.
#[derive(Clone, Copy)]
pub struct Constructor {
    pub is_abstract: bool,
    pub make: Factory,
    pub make_with: ScalarFactory,
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("is_abstract", &self.is_abstract)
            .finish()
    }
}

fn mismatch(t: &Type, scalar: Option<Scalar>) -> ElkError {
    ElkError::ScalarTypeMismatch {
        type_name: t.name.clone(),
        scalar,
    }
}

impl Constructor {
    pub fn abstract_marker() -> Self {
        Self {
            is_abstract: true,
            make: |t| Err(mismatch(t, None)),
            make_with: |t, scalar| Err(mismatch(t, Some(scalar))),
        }
    }

    pub fn unit() -> Self {
        Self {
            is_abstract: false,
            make: |_| Ok(Payload::Unit),
            make_with: |t, scalar| Err(mismatch(t, Some(scalar))),
        }
    }

    pub fn integer() -> Self {
        Self {
            is_abstract: false,
            make: |_| Ok(Payload::Integer(0)),
            make_with: |t, scalar| match scalar {
                Scalar::Integer(i) => Ok(Payload::Integer(i)),
                other => Err(mismatch(t, Some(other))),
            },
        }
    }

    pub fn character() -> Self {
        Self {
            is_abstract: false,
            make: |_| Ok(Payload::Character(DEFAULT_CHAR)),
            make_with: |t, scalar| match scalar {
                Scalar::Character(c) => Ok(Payload::Character(c)),
                other => Err(mismatch(t, Some(other))),
            },
        }
    }

    /// Lists are only built element by element, never from nothing or from a scalar.
    pub fn list() -> Self {
        Self {
            is_abstract: false,
            make: |_| Err(ElkError::EmptyList),
            make_with: |t, scalar| Err(mismatch(t, Some(scalar))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Type {
    pub id: TypeId,
    pub name: String,
    pub constructor: Constructor,
}

impl Type {
    pub fn is_abstract(&self) -> bool {
        self.constructor.is_abstract
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Value {
    pub id: ValueId,
    pub type_id: TypeId,
    pub payload: Payload,
}

/// The types every runtime registers before anything else, in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinType {
    Unit,
    Int,
    Char,
    Function,
    List,
}

impl BuiltinType {
    pub const ALL: [BuiltinType; 5] = [
        BuiltinType::Unit,
        BuiltinType::Int,
        BuiltinType::Char,
        BuiltinType::Function,
        BuiltinType::List,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Unit => "Unit",
            Self::Int => "Int",
            Self::Char => "Char",
            Self::Function => "Function",
            Self::List => "List",
        }
    }

    pub fn constructor(self) -> Constructor {
        match self {
            Self::Unit => Constructor::unit(),
            Self::Int => Constructor::integer(),
            Self::Char => Constructor::character(),
            Self::Function => Constructor::abstract_marker(),
            Self::List => Constructor::list(),
        }
    }
}
