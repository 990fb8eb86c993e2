/*  Library for the Elk programming language.
    Copyright (C) 2021 The Elk Developers

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program. If not, see <http://www.gnu.org/licenses/>.
*/

//! # Evaluation core for the Elk programming language
//! Elk is an experimental typed expression language. This crate is the part of it that can be
//! embedded: a store of types and values, an interpreter that binds symbols and defines and
//! invokes functions in lexical scopes, and a forest of type relations that answers whether one
//! type can be converted into another.
//!
//! There is no parser. A driver builds [`Expression`]s and hands them to a [`Runtime`], which
//! answers each with an [`Id`] naming the type, value, binding or function the expression denotes.
//!
//! A new `Runtime` registers 5 built-in types, in this order so that their ids never change:
//! `Unit`, `Int`, `Char`, `Function` and `List`.
//!
//! # Examples
//!
//! ```
//! extern crate elk;
//! use elk::{Argument, ElkError, Expression, Id, Manifested, Parameter, Runtime};
//!
//! let mut runtime = Runtime::new();
//!
//! // four = Int(4)
//! let four = runtime
//!     .evaluate(&Expression::make_binding("four", Expression::scalar("Int", 4i64)))
//!     .unwrap();
//!
//! // also_four = four
//! runtime
//!     .evaluate(&Expression::make_binding("also_four", Expression::binding_ref("four")))
//!     .unwrap();
//!
//! // A binding cannot be an alias of itself
//! assert_eq!(
//!     runtime.evaluate(&Expression::make_binding("x", Expression::binding_ref("x"))),
//!     Err(ElkError::SelfReferentialBinding { symbol: "x".into() })
//! );
//!
//! // echo(in: Int) -> Int { in }
//! runtime
//!     .evaluate(&Expression::make_binding(
//!         "echo",
//!         Expression::function(
//!             vec![Parameter::new("in", "Int")],
//!             "Int",
//!             vec![Expression::binding_ref("in")],
//!         ),
//!     ))
//!     .unwrap();
//!
//! let returned = runtime
//!     .evaluate(&Expression::call(
//!         "echo",
//!         vec![Argument::new("in", Expression::binding_ref("also_four"))],
//!     ))
//!     .unwrap();
//! assert_eq!(runtime.manifest(returned), runtime.manifest(four));
//!
//! // Functions can be invoked but not read
//! let echo = runtime.evaluate(&Expression::binding_ref("echo")).unwrap();
//! assert!(matches!(
//!     runtime.manifest(echo),
//!     Err(ElkError::CannotManifestFunction(_))
//! ));
//!
//! if let Ok(Manifested::Value(value)) = runtime.manifest(returned) {
//!     assert_eq!(runtime.summarize(Id::Value(value)).unwrap().to_string(), "value (Int, 4, [references: 0])");
//! }
//! ```

/// Integers that identify the built-in types.
mod constants;

/// The errors that drivers could cause when submitting expressions.
mod errors;

/// The structured expressions a driver submits.
mod expression;

/// Functions as registered in the scope that defined them.
mod function;

/// Identifiers for everything the runtime hands out.
mod ids;

/// One-line descriptions of identifiers.
mod inspect;

/// Evaluating expressions, binding symbols and invoking functions.
mod interpreter;

/// Immutable linked lists of values that may share their tails.
mod list;

// Trait for logging.
mod logging;

/// The runtime context that owns the store and the scope chain.
mod runtime;

/// Nested lexical scopes kept in an arena.
mod scope;

/// The container of types and values.
mod store;

/// Specialization links between types and the conversions they allow.
mod type_forest;

/// Types, their constructors and the values they construct.
mod types;

pub use constants::{CHAR, DEFAULT_CHAR, FUNCTION, INT, LIST, UNIT};
pub use errors::{ElkError, ElkResult};
pub use expression::{Argument, Expression, FunctionDefinition, Parameter, Symbol};
pub use function::{Function, TypedParameter};
pub use ids::{BindingId, FunctionId, Id, NodeId, Referent, TypeId, ValueId};
pub use inspect::Summary;
pub use interpreter::Manifested;
pub use list::ListNode;
pub use logging::{terminal_logger, Logger};
pub use runtime::{Runtime, ShutdownReport};
pub use scope::{Binding, ScopeIndex};
pub use store::Store;
pub use type_forest::{TypeForest, TypeNode};
pub use types::{BuiltinType, Constructor, Payload, Scalar, Type, Value};
