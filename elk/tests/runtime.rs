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

#[macro_use]
extern crate assert_matches;
#[macro_use]
extern crate maplit;
#[macro_use]
extern crate test_elk;
extern crate elk;

use elk::{
    BuiltinType, Constructor, ElkError, Expression, Id, Manifested, Parameter, Payload, Runtime,
    Scalar, ShutdownReport, TypeId, ValueId, CHAR, FUNCTION, INT, LIST, UNIT,
};
use std::convert::TryFrom;
use test_elk::{quiet_logger, BUILTIN_TYPE_NAMES};

fn runtime() -> Runtime {
    Runtime::with_logger(quiet_logger())
}

#[test]
fn bootstrap_registers_the_builtins_in_order() {
    let mut runtime = runtime();
    let ids = BuiltinType::ALL
        .iter()
        .map(|kind| runtime.builtin(*kind).unwrap())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![UNIT, INT, CHAR, FUNCTION, LIST]);
    let by_name = BUILTIN_TYPE_NAMES
        .iter()
        .map(|name| match runtime.evaluate(&Expression::type_ref(name)) {
            Ok(Id::Type(id)) => id,
            other => panic!("{} resolved to {:?}", name, other),
        })
        .collect::<std::collections::HashSet<_>>();
    assert_eq!(by_name, hashset! {UNIT, INT, CHAR, FUNCTION, LIST});
    assert_eq!(
        runtime.summarize(Id::Type(FUNCTION)).unwrap().to_string(),
        "type (Function, abstract)"
    );
    assert_eq!(
        runtime.summarize(Id::Type(INT)).unwrap().to_string(),
        "type (Int, concrete)"
    );
    assert_eq!(
        runtime.shutdown(),
        ShutdownReport {
            types: 5,
            values: 0,
            bindings: 0,
            functions: 0,
        }
    );
}

#[test]
fn user_defined_types() {
    let mut runtime = runtime();
    let point = runtime
        .evaluate(&Expression::define_type("Point", Constructor::unit()))
        .unwrap();
    assert_matches!(point, Id::Type(_));
    let origin = runtime.evaluate(&Expression::construct("Point")).unwrap();
    assert_matches!(
        runtime.manifest(origin),
        Ok(Manifested::Value(value)) if runtime.read_value(value).unwrap().payload == Payload::Unit
    );
    runtime
        .evaluate(&Expression::define_type(
            "Shape",
            Constructor::abstract_marker(),
        ))
        .unwrap();
    assert_eq!(
        runtime.evaluate(&Expression::construct("Shape")),
        Err(ElkError::AbstractTypeConstruction {
            name: "Shape".into()
        })
    );
    assert_eq!(
        runtime.evaluate(&Expression::scalar("Shape", 1i64)),
        Err(ElkError::AbstractTypeConstruction {
            name: "Shape".into()
        })
    );
    assert_eq!(runtime.shutdown().types, 7);
}

#[test]
fn scalars_must_suit_the_type() {
    let mut runtime = runtime();
    assert_eq!(
        runtime.evaluate(&Expression::scalar("Int", 'c')),
        Err(ElkError::ScalarTypeMismatch {
            type_name: "Int".into(),
            scalar: Some(Scalar::Character('c')),
        })
    );
    assert_eq!(
        runtime.evaluate(&Expression::scalar("Unit", 0i64)),
        Err(ElkError::ScalarTypeMismatch {
            type_name: "Unit".into(),
            scalar: Some(Scalar::Integer(0)),
        })
    );
    assert_eq!(
        runtime.evaluate(&Expression::scalar("List", 0i64)),
        Err(ElkError::ScalarTypeMismatch {
            type_name: "List".into(),
            scalar: Some(Scalar::Integer(0)),
        })
    );
    assert_eq!(runtime.store().value_count(), 0);
}

#[test]
fn type_definitions_in_a_body_are_local() {
    let mut runtime = runtime();
    runtime
        .evaluate(&Expression::make_binding(
            "shadow",
            Expression::function(
                vec![],
                "Int",
                vec![
                    Expression::define_type("Int", Constructor::character()),
                    Expression::scalar("Int", 'x'),
                ],
            ),
        ))
        .unwrap();
    let returned = runtime
        .evaluate(&Expression::call("shadow", vec![]))
        .unwrap();
    let returned = ValueId::try_from(returned).unwrap();
    let value = runtime.read_value(returned).unwrap();
    assert_ne!(value.type_id, INT);
    assert_eq!(value.payload, Payload::Character('x'));
    assert_eq!(runtime.read_type(value.type_id).unwrap().name, "Int");
    assert_eq!(runtime.evaluate(&Expression::type_ref("Int")), Ok(Id::Type(INT)));
}

#[test]
fn unknown_identifiers() {
    let mut runtime = runtime();
    let missing = ValueId::from(42);
    assert_eq!(
        runtime.evaluate(&Expression::Value(missing)),
        Err(ElkError::UnknownValueId(missing))
    );
    assert_eq!(
        runtime.evaluate(&Expression::type_ref("Str")),
        Err(ElkError::UnresolvedType {
            symbol: "Str".into()
        })
    );
    assert_eq!(
        runtime.summarize(Id::Type(TypeId::from(42))),
        Err(ElkError::UnknownTypeId(TypeId::from(42)))
    );
    assert_matches!(
        runtime.manifest(Id::Value(missing)),
        Err(ElkError::UnknownValueId(_))
    );
}

#[test]
fn shutdown_counts_what_is_left() {
    let mut runtime = runtime();
    let_integer!(runtime, "one", 1);
    let_integer!(runtime, "one", 2);
    runtime
        .evaluate(&Expression::make_binding(
            "id",
            Expression::function(
                vec![Parameter::new("x", "Int")],
                "Int",
                vec![Expression::binding_ref("x")],
            ),
        ))
        .unwrap();
    runtime
        .evaluate(&Expression::call(
            "id",
            vec![elk::Argument::new("x", Expression::binding_ref("one"))],
        ))
        .unwrap();
    assert_eq!(runtime.scope_depth(), 1);
    assert_eq!(
        runtime.shutdown(),
        ShutdownReport {
            types: 5,
            values: 2,
            bindings: 2,
            functions: 1,
        }
    );
}
