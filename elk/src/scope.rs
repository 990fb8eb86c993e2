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
    expression::Symbol,
    function::Function,
    ids::{BindingId, FunctionId, Referent, TypeId},
};
use log::debug;
use std::{collections::HashMap, rc::Rc};

/// Position of a scope in the arena of a [`ScopeChain`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScopeIndex(usize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub symbol: Symbol,
    pub referent: Referent,
}

#[derive(Clone, Debug, Default)]
pub struct Scope {
    type_names: HashMap<Symbol, TypeId>,
    binding_names: HashMap<Symbol, BindingId>,
    binding_values: HashMap<BindingId, Binding>,
    functions: HashMap<FunctionId, Rc<Function>>,
    /// Only used for lookup. Always lower than the index of this scope.
    parent: Option<ScopeIndex>,
}

/// Where to truncate the arena back to when a call returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScopeMark {
    len: usize,
    current: ScopeIndex,
}

/// The current scope as it was before an expression started adding names to it.
#[derive(Debug)]
pub struct ScopeSnapshot {
    index: ScopeIndex,
    scope: Scope,
}

/// Every live scope, innermost last. A scope only ever looks up through its parents so popping a
/// call is a truncation.
#[derive(Debug)]
pub struct ScopeChain {
    scopes: Vec<Scope>,
    current: ScopeIndex,
}

impl Default for ScopeChain {
    fn default() -> Self {
        Self {
            scopes: vec![Scope::default()],
            current: ScopeIndex(0),
        }
    }
}

impl ScopeChain {
    pub fn current(&self) -> ScopeIndex {
        self.current
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    fn current_scope(&mut self) -> &mut Scope {
        &mut self.scopes[self.current.0]
    }

    /// Pushes a scope whose parent is `parent` and makes it current.
    pub fn enter(&mut self, parent: ScopeIndex) -> ScopeMark {
        let mark = ScopeMark {
            len: self.scopes.len(),
            current: self.current,
        };
        self.scopes.push(Scope {
            parent: Some(parent),
            ..Scope::default()
        });
        self.current = ScopeIndex(mark.len);
        debug!("enter scope {} with parent {}", mark.len, parent.0);
        mark
    }

    /// Drops every scope pushed since `mark` was taken, along with their bindings and functions.
    pub fn leave(&mut self, mark: ScopeMark) {
        debug!("leave scope {}", self.current.0);
        self.scopes.truncate(mark.len);
        self.current = mark.current;
    }

    pub fn snapshot(&self) -> ScopeSnapshot {
        ScopeSnapshot {
            index: self.current,
            scope: self.scopes[self.current.0].clone(),
        }
    }

    /// Puts the snapshotted scope back, forgetting every name added to it since.
    pub fn restore(&mut self, snapshot: ScopeSnapshot) {
        debug!("restore scope {}", snapshot.index.0);
        if let Some(scope) = self.scopes.get_mut(snapshot.index.0) {
            *scope = snapshot.scope;
        }
        self.current = snapshot.index;
    }

    /// The current scope followed by each of its ancestors.
    fn chain(&self) -> impl Iterator<Item = &Scope> + '_ {
        let scopes = &self.scopes;
        std::iter::successors(scopes.get(self.current.0), move |scope| {
            scope.parent.and_then(|parent| scopes.get(parent.0))
        })
    }

    pub fn find_type(&self, name: &str) -> ElkResult<TypeId> {
        self.chain()
            .find_map(|scope| scope.type_names.get(name).copied())
            .ok_or_else(|| ElkError::UnresolvedType {
                symbol: name.into(),
            })
    }

    pub fn find_binding(&self, name: &str) -> ElkResult<BindingId> {
        self.chain()
            .find_map(|scope| scope.binding_names.get(name).copied())
            .ok_or_else(|| ElkError::UnresolvedBinding {
                symbol: name.into(),
            })
    }

    pub fn read_binding(&self, id: BindingId) -> ElkResult<&Binding> {
        self.chain()
            .find_map(|scope| scope.binding_values.get(&id))
            .ok_or(ElkError::UnknownBindingId(id))
    }

    pub fn find_function(&self, id: FunctionId) -> ElkResult<&Rc<Function>> {
        self.chain()
            .find_map(|scope| scope.functions.get(&id))
            .ok_or(ElkError::UnknownFunctionId(id))
    }

    /// Names a type in the current scope, shadowing any outer type of the same name.
    pub fn name_type(&mut self, name: &str, id: TypeId) {
        self.current_scope().type_names.insert(name.into(), id);
    }

    /// Binds `symbol` in the current scope. A previous binding of the same symbol in this scope is
    /// forgotten first.
    pub fn bind(&mut self, symbol: &str, id: BindingId, referent: Referent) {
        let scope = self.current_scope();
        if let Some(previous) = scope.binding_names.remove(symbol) {
            scope.binding_values.remove(&previous);
            debug!("unbind {} from {}", symbol, previous);
        }
        scope.binding_names.insert(symbol.into(), id);
        scope.binding_values.insert(
            id,
            Binding {
                symbol: symbol.into(),
                referent,
            },
        );
    }

    pub fn insert_function(&mut self, function: Function) {
        self.current_scope()
            .functions
            .insert(function.id, Rc::new(function));
    }

    pub fn binding_count(&self) -> usize {
        self.scopes.iter().map(|s| s.binding_values.len()).sum()
    }

    pub fn function_count(&self) -> usize {
        self.scopes.iter().map(|s| s.functions.len()).sum()
    }
}
