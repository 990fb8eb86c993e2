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
    ids::Id,
    runtime::Runtime,
    types::Payload,
};
use std::fmt;

/// A one-line description of anything an [`Id`] can denote.
#[derive(Clone, Debug, PartialEq)]
pub enum Summary {
    Type {
        name: String,
        is_abstract: bool,
    },
    Value {
        type_name: String,
        payload: Payload,
        reference_count: usize,
    },
    Binding {
        symbol: String,
        target: Box<Summary>,
    },
    Function {
        parameters: Vec<(String, String)>,
        return_type: String,
    },
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type {
                name,
                is_abstract,
            } => write!(
                f,
                "type ({}, {})",
                name,
                if *is_abstract { "abstract" } else { "concrete" }
            ),
            Self::Value {
                type_name,
                payload,
                reference_count,
            } => write!(
                f,
                "value ({}, {}, [references: {}])",
                type_name, payload, reference_count
            ),
            Self::Binding {
                symbol,
                target,
            } => write!(f, "binding {} -> {}", symbol, target),
            Self::Function {
                parameters,
                return_type,
            } => {
                f.write_str("function (")?;
                for (index, (name, type_name)) in parameters.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", name, type_name)?;
                }
                write!(f, ") -> {}", return_type)
            },
        }
    }
}

impl Runtime {
    pub fn summarize(&self, id: Id) -> ElkResult<Summary> {
        match id {
            Id::Type(type_id) => {
                let t = self.store.read_type(type_id)?;
                Ok(Summary::Type {
                    name: t.name.clone(),
                    is_abstract: t.is_abstract(),
                })
            },
            Id::Value(value_id) => {
                let value = self.store.read_value(value_id)?;
                Ok(Summary::Value {
                    type_name: self.store.read_type(value.type_id)?.name.clone(),
                    payload: value.payload.clone(),
                    reference_count: self.store.reference_count(value_id)?,
                })
            },
            Id::Binding(binding_id) => {
                let symbol = self.scopes.read_binding(binding_id)?.symbol.clone();
                let target = self.summarize(self.resolve_binding(binding_id)?.into())?;
                Ok(Summary::Binding {
                    symbol,
                    target: Box::new(target),
                })
            },
            Id::Function(function_id) => {
                let function = self.scopes.find_function(function_id)?;
                let parameters = function
                    .parameters
                    .iter()
                    .map(|parameter| {
                        Ok((
                            parameter.name.clone(),
                            self.store.read_type(parameter.type_id)?.name.clone(),
                        ))
                    })
                    .collect::<ElkResult<Vec<_>>>()?;
                Ok(Summary::Function {
                    parameters,
                    return_type: self.store.read_type(function.return_type)?.name.clone(),
                })
            },
        }
    }
}
