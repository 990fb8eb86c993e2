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
    errors::ElkResult,
    function::Function,
    ids::{BindingId, Counter, FunctionId, TypeId, ValueId},
    logging::{terminal_logger, Logger},
    scope::{Binding, ScopeChain},
    store::Store,
    types::{BuiltinType, Type, Value},
};
use slog::info;
use std::rc::Rc;

/// Owns the store and the scope chain for as long as a driver is evaluating expressions.
pub struct Runtime {
    pub(crate) store: Store,
    pub(crate) scopes: ScopeChain,
    pub(crate) binding_ids: Counter,
    pub(crate) function_ids: Counter,
    logger: slog::Logger,
}

/// What was still alive when a runtime was shut down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShutdownReport {
    pub types: usize,
    pub values: usize,
    pub bindings: usize,
    pub functions: usize,
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for Runtime {
    fn logger(&mut self) -> &mut slog::Logger {
        &mut self.logger
    }
}

impl Runtime {
    /// A runtime with the built-in types registered, logging to the terminal.
    pub fn new() -> Self {
        Self::with_logger(terminal_logger())
    }

    pub fn with_logger(logger: slog::Logger) -> Self {
        let mut runtime = Self {
            store: Store::default(),
            scopes: ScopeChain::default(),
            binding_ids: Counter::default(),
            function_ids: Counter::default(),
            logger,
        };
        let builtins = runtime.setup();
        info!(runtime.logger(), "Setup a new runtime: {:?}", builtins);
        runtime
    }

    /// Registers the built-in types in their fixed order and names them in the root scope.
    fn setup(&mut self) -> Vec<TypeId> {
        BuiltinType::ALL
            .iter()
            .map(|kind| {
                let id = self.store.register_builtin(*kind);
                self.scopes.name_type(kind.name(), id);
                id
            })
            .collect()
    }

    pub fn shutdown(mut self) -> ShutdownReport {
        let report = ShutdownReport {
            types: self.store.type_count(),
            values: self.store.value_count(),
            bindings: self.scopes.binding_count(),
            functions: self.scopes.function_count(),
        };
        info!(self.logger(), "Shutting down runtime: {:?}", report);
        report
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    pub fn builtin(&self, kind: BuiltinType) -> Option<TypeId> {
        self.store.builtin_type_id(kind)
    }

    pub fn read_type(&self, id: TypeId) -> ElkResult<&Type> {
        self.store.read_type(id)
    }

    pub fn read_value(&self, id: ValueId) -> ElkResult<&Value> {
        self.store.read_value(id)
    }

    /// Only bindings visible from the current scope can be read.
    pub fn read_binding(&self, id: BindingId) -> ElkResult<&Binding> {
        self.scopes.read_binding(id)
    }

    pub fn read_function(&self, id: FunctionId) -> ElkResult<&Rc<Function>> {
        self.scopes.find_function(id)
    }

    pub fn scope_depth(&self) -> usize {
        self.scopes.depth()
    }
}
