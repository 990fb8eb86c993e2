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
    ids::ValueId,
    types::{Constructor, Scalar},
};

pub type Symbol = String;

/// A structured Elk expression as submitted by a driver. Evaluating one always yields an [`Id`](crate::Id).
#[derive(Clone, Debug)]
pub enum Expression {
    /// Names a type in scope.
    TypeRef(Symbol),
    /// Names a binding in scope.
    BindingRef(Symbol),
    /// Constructs a value of the named type, from a scalar when one is given.
    MakeScalar {
        type_name: Symbol,
        scalar: Option<Scalar>,
    },
    /// Binds `symbol` in the current scope to whatever `value` denotes.
    MakeBinding {
        symbol: Symbol,
        value: Box<Expression>,
    },
    Function(FunctionDefinition),
    /// Constructs a list of the named list type from the values of `elements`.
    MakeList {
        type_name: Symbol,
        elements: Vec<Expression>,
    },
    /// Invokes the function bound to `function`.
    Call {
        function: Symbol,
        arguments: Vec<Argument<Expression>>,
    },
    /// A value that already lives in the store.
    Value(ValueId),
    /// Registers a new type named in the current scope.
    DefineType {
        name: Symbol,
        constructor: Constructor,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    pub name: Symbol,
    pub type_name: Symbol,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Argument<T> {
    pub name: Symbol,
    pub value: T,
}

#[derive(Clone, Debug)]
pub struct FunctionDefinition {
    pub parameters: Vec<Parameter>,
    pub return_type: Symbol,
    pub body: Vec<Expression>,
}

impl Expression {
    pub fn type_ref(name: &str) -> Self {
        Self::TypeRef(name.into())
    }

    pub fn binding_ref(name: &str) -> Self {
        Self::BindingRef(name.into())
    }

    pub fn scalar(type_name: &str, scalar: impl Into<Scalar>) -> Self {
        Self::MakeScalar {
            type_name: type_name.into(),
            scalar: Some(scalar.into()),
        }
    }

    pub fn construct(type_name: &str) -> Self {
        Self::MakeScalar {
            type_name: type_name.into(),
            scalar: None,
        }
    }

    pub fn make_binding(symbol: &str, value: Expression) -> Self {
        Self::MakeBinding {
            symbol: symbol.into(),
            value: Box::new(value),
        }
    }

    pub fn function(
        parameters: Vec<Parameter>,
        return_type: &str,
        body: Vec<Expression>,
    ) -> Self {
        Self::Function(FunctionDefinition {
            parameters,
            return_type: return_type.into(),
            body,
        })
    }

    pub fn list(type_name: &str, elements: Vec<Expression>) -> Self {
        Self::MakeList {
            type_name: type_name.into(),
            elements,
        }
    }

    pub fn call(function: &str, arguments: Vec<Argument<Expression>>) -> Self {
        Self::Call {
            function: function.into(),
            arguments,
        }
    }

    pub fn define_type(name: &str, constructor: Constructor) -> Self {
        Self::DefineType {
            name: name.into(),
            constructor,
        }
    }
}

impl Parameter {
    pub fn new(name: &str, type_name: &str) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

impl<T> Argument<T> {
    pub fn new(name: &str, value: T) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl From<ValueId> for Expression {
    fn from(id: ValueId) -> Self {
        Self::Value(id)
    }
}
