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

use std::{
    convert::TryFrom,
    fmt::{Debug, Display},
};

macro_rules! impl_id {
    ($name:ident, $label:expr) => {
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub struct $name(pub(crate) usize);

        impl $name {
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl From<usize> for $name {
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                Display::fmt($label, f)?;
                Display::fmt(&self.0, f)
            }
        }
    };
}

impl_id!(TypeId, "TypeID:");
impl_id!(ValueId, "ValueID:");
impl_id!(BindingId, "BindingID:");
impl_id!(FunctionId, "FunctionID:");
impl_id!(NodeId, "NodeID:");

/// Hands out identifiers in strictly increasing order. An identifier is never reused.
#[derive(Clone, Debug, Default)]
pub struct Counter(usize);

impl Counter {
    pub fn issue(&mut self) -> usize {
        let id = self.0;
        self.0 += 1;
        id
    }
}

/// The tagged identifier handed back to a driver for every evaluated expression.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Id {
    Type(TypeId),
    Value(ValueId),
    Binding(BindingId),
    Function(FunctionId),
}

impl Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Type(id) => Display::fmt(id, f),
            Self::Value(id) => Display::fmt(id, f),
            Self::Binding(id) => Display::fmt(id, f),
            Self::Function(id) => Display::fmt(id, f),
        }
    }
}

/// What a binding points at. Only `Binding` is non-terminal.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Referent {
    Type(TypeId),
    Value(ValueId),
    Function(FunctionId),
    Binding(BindingId),
}

impl From<Referent> for Id {
    fn from(referent: Referent) -> Self {
        match referent {
            Referent::Type(id) => Self::Type(id),
            Referent::Value(id) => Self::Value(id),
            Referent::Function(id) => Self::Function(id),
            Referent::Binding(id) => Self::Binding(id),
        }
    }
}

impl From<Id> for Referent {
    fn from(id: Id) -> Self {
        match id {
            Id::Type(id) => Self::Type(id),
            Id::Value(id) => Self::Value(id),
            Id::Function(id) => Self::Function(id),
            Id::Binding(id) => Self::Binding(id),
        }
    }
}

impl From<TypeId> for Id {
    fn from(id: TypeId) -> Self {
        Self::Type(id)
    }
}

impl From<ValueId> for Id {
    fn from(id: ValueId) -> Self {
        Self::Value(id)
    }
}

impl From<BindingId> for Id {
    fn from(id: BindingId) -> Self {
        Self::Binding(id)
    }
}

impl From<FunctionId> for Id {
    fn from(id: FunctionId) -> Self {
        Self::Function(id)
    }
}

impl TryFrom<Id> for ValueId {
    type Error = ();

    fn try_from(id: Id) -> Result<Self, Self::Error> {
        if let Id::Value(value_id) = id {
            Ok(value_id)
        } else {
            Err(())
        }
    }
}

impl TryFrom<Id> for TypeId {
    type Error = ();

    fn try_from(id: Id) -> Result<Self, Self::Error> {
        if let Id::Type(type_id) = id {
            Ok(type_id)
        } else {
            Err(())
        }
    }
}

impl TryFrom<Id> for BindingId {
    type Error = ();

    fn try_from(id: Id) -> Result<Self, Self::Error> {
        if let Id::Binding(binding_id) = id {
            Ok(binding_id)
        } else {
            Err(())
        }
    }
}

impl TryFrom<Id> for FunctionId {
    type Error = ();

    fn try_from(id: Id) -> Result<Self, Self::Error> {
        if let Id::Function(function_id) = id {
            Ok(function_id)
        } else {
            Err(())
        }
    }
}
