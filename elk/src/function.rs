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
    expression::{Expression, Symbol},
    ids::{FunctionId, TypeId},
    scope::ScopeIndex,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypedParameter {
    pub name: Symbol,
    pub type_id: TypeId,
}

/// A registered function. Parameter and return types were resolved in the defining scope; the
/// body is kept as written and only evaluated on invocation.
#[derive(Clone, Debug)]
pub struct Function {
    pub id: FunctionId,
    pub parameters: Vec<TypedParameter>,
    pub return_type: TypeId,
    pub body: Vec<Expression>,
    /// Where the function was defined. Invocations run in a child of this scope.
    pub scope: ScopeIndex,
}

impl Function {
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}
