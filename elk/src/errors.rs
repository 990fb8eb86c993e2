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

use thiserror::Error;

use crate::{
    ids::{BindingId, FunctionId, NodeId, TypeId, ValueId},
    types::Scalar,
};

pub type ElkResult<T> = Result<T, ElkError>;

/// All the expected ways an Elk operation could fail.
#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum ElkError {
    /// When constructing a value of a type flagged as abstract.
    #[error("Cannot construct a value of the abstract type `{name}`.")]
    AbstractTypeConstruction {
        name: String,
    },
    #[error("There is no type with id {0}")]
    UnknownTypeId(TypeId),
    #[error("There is no value with id {0}")]
    UnknownValueId(ValueId),
    #[error("There is no binding with id {0} visible from this scope")]
    UnknownBindingId(BindingId),
    #[error("There is no function with id {0} visible from this scope")]
    UnknownFunctionId(FunctionId),
    #[error("There is no node with id {0} in the type forest")]
    UnknownTypeNode(NodeId),
    /// When a one-argument constructor cannot interpret the scalar it was given.
    #[error("The type `{type_name}` cannot be constructed from {scalar:?}")]
    ScalarTypeMismatch {
        type_name: String,
        scalar: Option<Scalar>,
    },
    #[error("A list needs at least one element.")]
    EmptyList,
    #[error("The value {0} does not hold a list")]
    NotAList(ValueId),
    #[error("The type `{type_name}` does not construct lists")]
    NotAListType {
        type_name: String,
    },
    /// When binding a symbol as an alias of itself.
    #[error("Cannot bind `{symbol}` as a reference to itself.")]
    SelfReferentialBinding {
        symbol: String,
    },
    #[error("Following the binding {0} loops back on itself.")]
    CyclicBinding(BindingId),
    /// Functions can only be invoked, never read as values.
    #[error("Cannot manifest {0} as a value, functions can only be invoked.")]
    CannotManifestFunction(FunctionId),
    #[error("Expected {expected} arguments but {found} were given.")]
    ArityMismatch {
        expected: usize,
        found: usize,
    },
    #[error("No argument was given for the parameter `{parameter}`")]
    MissingArgument {
        parameter: String,
    },
    #[error("The parameter `{parameter}` expects {expected} but the argument has {found}")]
    TypeMismatch {
        parameter: String,
        expected: TypeId,
        found: TypeId,
    },
    #[error("`{symbol}` does not denote a function")]
    NotAFunction {
        symbol: String,
    },
    #[error("No type named `{symbol}` is in scope")]
    UnresolvedType {
        symbol: String,
    },
    #[error("No binding named `{symbol}` is in scope")]
    UnresolvedBinding {
        symbol: String,
    },
}
