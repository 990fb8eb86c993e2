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
    errors::{ElkError, ElkResult},
    expression::{Argument, Expression, FunctionDefinition},
    function::{Function, TypedParameter},
    ids::{BindingId, FunctionId, Id, Referent, TypeId, ValueId},
    logging::Logger,
    runtime::Runtime,
    types::{Constructor, Scalar},
};
use log::debug;
use maplit::hashset;
use slog::info;

/// What an identifier denotes once every alias has been followed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Manifested {
    Type(TypeId),
    Value(ValueId),
}

impl From<Manifested> for Id {
    fn from(manifested: Manifested) -> Self {
        match manifested {
            Manifested::Type(id) => Self::Type(id),
            Manifested::Value(id) => Self::Value(id),
        }
    }
}

impl Runtime {
    /// Evaluates one expression in the current scope.
    pub fn evaluate(&mut self, expression: &Expression) -> ElkResult<Id> {
        match expression {
            Expression::TypeRef(name) => self.scopes.find_type(name).map(Id::Type),
            Expression::BindingRef(name) => {
                self.scopes.find_binding(name).map(Id::Binding)
            },
            Expression::MakeScalar {
                type_name,
                scalar,
            } => self.make_scalar(type_name, *scalar).map(Id::Value),
            Expression::MakeBinding {
                symbol,
                value,
            } => self.make_binding(symbol, value).map(Id::Binding),
            Expression::Function(definition) => {
                self.define_function(definition).map(Id::Function)
            },
            Expression::MakeList {
                type_name,
                elements,
            } => self.make_list(type_name, elements).map(Id::Value),
            Expression::Call {
                function,
                arguments,
            } => self.call(function, arguments),
            Expression::Value(id) => {
                self.store.read_value(*id)?;
                Ok(Id::Value(*id))
            },
            Expression::DefineType {
                name,
                constructor,
            } => Ok(Id::Type(self.define_type(name, *constructor))),
        }
    }

    /// Registers a type and names it in the current scope only.
    pub fn define_type(&mut self, name: &str, constructor: Constructor) -> TypeId {
        let id = self.store.register_type(name, constructor);
        self.scopes.name_type(name, id);
        id
    }

    fn make_scalar(
        &mut self,
        type_name: &str,
        scalar: Option<Scalar>,
    ) -> ElkResult<ValueId> {
        let type_id = self.scopes.find_type(type_name)?;
        match scalar {
            None => self.store.construct(type_id),
            Some(scalar) => self.store.construct_with(type_id, scalar),
        }
    }

    fn make_list(
        &mut self,
        type_name: &str,
        elements: &[Expression],
    ) -> ElkResult<ValueId> {
        let type_id = self.scopes.find_type(type_name)?;
        self.atomically(|runtime| {
            let elements = elements
                .iter()
                .map(|element| {
                    let id = runtime.evaluate(element)?;
                    runtime.concrete_value(id)
                })
                .collect::<ElkResult<Vec<_>>>()?;
            runtime.store.construct_list(type_id, &elements)
        })
    }

    /// Runs `operation` and, if it fails, forgets whatever it named or bound in the current scope.
    fn atomically<T>(
        &mut self,
        operation: impl FnOnce(&mut Self) -> ElkResult<T>,
    ) -> ElkResult<T> {
        let snapshot = self.scopes.snapshot();
        let result = operation(self);
        if result.is_err() {
            self.scopes.restore(snapshot);
        }
        result
    }

    /// Binds `symbol` in the current scope to the terminal referent of `value`. Aliases are
    /// followed now, so later rebinding of the aliased symbol does not affect this binding.
    pub fn make_binding(
        &mut self,
        symbol: &str,
        value: &Expression,
    ) -> ElkResult<BindingId> {
        if let Expression::BindingRef(target) = value {
            if target == symbol {
                return Err(ElkError::SelfReferentialBinding {
                    symbol: symbol.into(),
                });
            }
        }
        let id = self.evaluate(value)?;
        let referent = self.resolve(id)?;
        let binding_id = BindingId(self.binding_ids.issue());
        self.scopes.bind(symbol, binding_id, referent);
        debug!("make_binding({}) = {} -> {:?}", symbol, binding_id, referent);
        Ok(binding_id)
    }

    fn resolve(&self, id: Id) -> ElkResult<Referent> {
        match id {
            Id::Binding(binding_id) => self.resolve_binding(binding_id),
            other => Ok(other.into()),
        }
    }

    /// Follows binding to binding indirection until reaching a type, value or function.
    pub fn resolve_binding(&self, id: BindingId) -> ElkResult<Referent> {
        let mut visited = hashset! {id};
        let mut referent = self.scopes.read_binding(id)?.referent;
        while let Referent::Binding(next) = referent {
            if !visited.insert(next) {
                return Err(ElkError::CyclicBinding(next));
            }
            referent = self.scopes.read_binding(next)?.referent;
        }
        Ok(referent)
    }

    /// Forces an identifier down to the type or value it denotes. Functions cannot be manifested.
    pub fn manifest(&self, id: Id) -> ElkResult<Manifested> {
        match self.resolve(id)? {
            Referent::Type(type_id) => {
                self.store.read_type(type_id)?;
                Ok(Manifested::Type(type_id))
            },
            Referent::Value(value_id) => {
                self.store.read_value(value_id)?;
                Ok(Manifested::Value(value_id))
            },
            Referent::Function(function_id) => {
                Err(ElkError::CannotManifestFunction(function_id))
            },
            Referent::Binding(binding_id) => Err(ElkError::CyclicBinding(binding_id)),
        }
    }

    /// Manifests `id` into a value, constructing the zero-argument value when it denotes a type.
    fn concrete_value(&mut self, id: Id) -> ElkResult<ValueId> {
        match self.manifest(id)? {
            Manifested::Value(value_id) => Ok(value_id),
            Manifested::Type(type_id) => self.store.construct(type_id),
        }
    }

    /// Registers a function in the current scope. Parameter and return types are resolved here.
    pub fn define_function(
        &mut self,
        definition: &FunctionDefinition,
    ) -> ElkResult<FunctionId> {
        let parameters = definition
            .parameters
            .iter()
            .map(|parameter| {
                Ok(TypedParameter {
                    name: parameter.name.clone(),
                    type_id: self.scopes.find_type(&parameter.type_name)?,
                })
            })
            .collect::<ElkResult<Vec<_>>>()?;
        let return_type = self.scopes.find_type(&definition.return_type)?;
        let id = FunctionId(self.function_ids.issue());
        if definition.body.is_empty() {
            info!(
                self.logger(),
                "Function {} has an empty body and will return a new {}",
                id,
                definition.return_type
            );
        }
        self.scopes.insert_function(Function {
            id,
            parameters,
            return_type,
            body: definition.body.clone(),
            scope: self.scopes.current(),
        });
        debug!("define_function = {}", id);
        Ok(id)
    }

    fn call(
        &mut self,
        function: &str,
        arguments: &[Argument<Expression>],
    ) -> ElkResult<Id> {
        let function_id = match self.resolve_binding(self.scopes.find_binding(function)?)? {
            Referent::Function(function_id) => function_id,
            _ => {
                return Err(ElkError::NotAFunction {
                    symbol: function.into(),
                })
            },
        };
        let arity = self.scopes.find_function(function_id)?.arity();
        if arity != arguments.len() {
            return Err(ElkError::ArityMismatch {
                expected: arity,
                found: arguments.len(),
            });
        }
        self.atomically(|runtime| {
            let arguments = arguments
                .iter()
                .map(|argument| {
                    Ok(Argument {
                        name: argument.name.clone(),
                        value: runtime.evaluate(&argument.value)?,
                    })
                })
                .collect::<ElkResult<Vec<_>>>()?;
            runtime.invoke(function_id, &arguments)
        })
    }

    /// Invokes a function with arguments matched to its parameters by name.
    ///
    /// Arguments are resolved in the caller's scope. The body runs in a new scope whose parent is
    /// the scope the function was defined in, and that scope is gone again when this returns,
    /// whether the body succeeded or not.
    pub fn invoke(
        &mut self,
        function_id: FunctionId,
        arguments: &[Argument<Id>],
    ) -> ElkResult<Id> {
        debug!("invoke({}, {:?})", function_id, arguments);
        let function = self.scopes.find_function(function_id)?.clone();
        if function.arity() != arguments.len() {
            return Err(ElkError::ArityMismatch {
                expected: function.arity(),
                found: arguments.len(),
            });
        }
        let checked = function
            .parameters
            .iter()
            .map(|parameter| self.argument_for(parameter, arguments))
            .collect::<ElkResult<Vec<_>>>()?;
        let values = checked
            .into_iter()
            .map(|argument| match argument {
                Manifested::Value(value_id) => Ok(value_id),
                Manifested::Type(type_id) => self.store.construct(type_id),
            })
            .collect::<ElkResult<Vec<_>>>()?;
        let mark = self.scopes.enter(function.scope);
        let result = self.run(&function, &values);
        self.scopes.leave(mark);
        result
    }

    /// Checks the argument named after `parameter` without constructing anything. A type argument
    /// stands for its zero-argument value and is checked by its own id.
    fn argument_for(
        &self,
        parameter: &TypedParameter,
        arguments: &[Argument<Id>],
    ) -> ElkResult<Manifested> {
        let argument = arguments
            .iter()
            .find(|argument| argument.name == parameter.name)
            .ok_or_else(|| ElkError::MissingArgument {
                parameter: parameter.name.clone(),
            })?;
        let manifested = self.manifest(argument.value)?;
        let found = match manifested {
            Manifested::Value(value_id) => self.store.type_of(value_id)?,
            Manifested::Type(type_id) => type_id,
        };
        if found == parameter.type_id {
            Ok(manifested)
        } else {
            Err(ElkError::TypeMismatch {
                parameter: parameter.name.clone(),
                expected: parameter.type_id,
                found,
            })
        }
    }

    /// Binds the parameters in the current scope then evaluates the body.
    fn run(&mut self, function: &Function, values: &[ValueId]) -> ElkResult<Id> {
        for (parameter, value) in function.parameters.iter().zip(values) {
            let binding_id = BindingId(self.binding_ids.issue());
            self.scopes
                .bind(&parameter.name, binding_id, Referent::Value(*value));
        }
        let mut last = None;
        for expression in &function.body {
            last = Some(self.evaluate(expression)?);
        }
        match last {
            None => self.store.construct(function.return_type).map(Id::Value),
            Some(id) => self.manifest(id).map(Id::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        errors::ElkError,
        expression::Expression,
        ids::{BindingId, FunctionId, Id, Referent},
        runtime::Runtime,
    };
    use assert_matches::assert_matches;
    use test_elk::quiet_logger;

    #[test]
    fn cyclic_bindings_are_detected() {
        let mut runtime = Runtime::with_logger(quiet_logger());
        runtime
            .scopes
            .bind("x", BindingId(0), Referent::Binding(BindingId(1)));
        runtime
            .scopes
            .bind("y", BindingId(1), Referent::Binding(BindingId(0)));
        assert_eq!(
            runtime.resolve_binding(BindingId(0)),
            Err(ElkError::CyclicBinding(BindingId(0)))
        );
        assert_matches!(
            runtime.manifest(Id::Binding(BindingId(1))),
            Err(ElkError::CyclicBinding(_))
        );
        assert_matches!(
            runtime.evaluate(&Expression::make_binding("z", Expression::binding_ref("x"))),
            Err(ElkError::CyclicBinding(_))
        );
        assert!(runtime.scopes.find_binding("z").is_err());
    }

    #[test]
    fn invoking_an_unknown_function() {
        let mut runtime = Runtime::with_logger(quiet_logger());
        assert_eq!(
            runtime.invoke(FunctionId(99), &[]),
            Err(ElkError::UnknownFunctionId(FunctionId(99)))
        );
        assert_eq!(runtime.scope_depth(), 1);
    }
}
