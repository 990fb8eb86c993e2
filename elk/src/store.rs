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
    ids::{TypeId, ValueId},
    list::ListNode,
    types::{BuiltinType, Constructor, Payload, Scalar, Type, Value},
};
use bimap::BiMap;
use log::debug;
use std::rc::Rc;

/// Owns every type and value. Ids are indices that are handed out in order and never reused
/// because nothing is removed before the store itself is dropped.
#[derive(Debug, Default)]
pub struct Store {
    types: Vec<Type>,
    values: Vec<Rc<Value>>,
    builtins: BiMap<TypeId, BuiltinType>,
}

impl Store {
    pub fn register_type(&mut self, name: &str, constructor: Constructor) -> TypeId {
        let id = TypeId(self.types.len());
        debug!("register_type({}) = {}", name, id);
        self.types.push(Type {
            id,
            name: name.into(),
            constructor,
        });
        id
    }

    pub fn register_builtin(&mut self, kind: BuiltinType) -> TypeId {
        let id = self.register_type(kind.name(), kind.constructor());
        self.builtins.insert(id, kind);
        id
    }

    pub fn builtin_type_id(&self, kind: BuiltinType) -> Option<TypeId> {
        self.builtins.get_by_right(&kind).copied()
    }

    pub fn builtin_kind(&self, id: TypeId) -> Option<BuiltinType> {
        self.builtins.get_by_left(&id).copied()
    }

    pub fn read_type(&self, id: TypeId) -> ElkResult<&Type> {
        self.types.get(id.0).ok_or(ElkError::UnknownTypeId(id))
    }

    pub fn read_value(&self, id: ValueId) -> ElkResult<&Value> {
        self.shared_value(id).map(|v| &**v)
    }

    fn shared_value(&self, id: ValueId) -> ElkResult<&Rc<Value>> {
        self.values.get(id.0).ok_or(ElkError::UnknownValueId(id))
    }

    pub fn type_of(&self, id: ValueId) -> ElkResult<TypeId> {
        self.read_value(id).map(|v| v.type_id)
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn value_count(&self) -> usize {
        self.values.len()
    }

    /// How many list nodes hold the value.
    pub fn reference_count(&self, id: ValueId) -> ElkResult<usize> {
        self.shared_value(id).map(|v| Rc::strong_count(v) - 1)
    }

    fn insert_value(&mut self, type_id: TypeId, payload: Payload) -> ValueId {
        let id = ValueId(self.values.len());
        self.values.push(Rc::new(Value {
            id,
            type_id,
            payload,
        }));
        id
    }

    fn concrete_type(&self, id: TypeId) -> ElkResult<&Type> {
        let t = self.read_type(id)?;
        if t.is_abstract() {
            Err(ElkError::AbstractTypeConstruction {
                name: t.name.clone(),
            })
        } else {
            Ok(t)
        }
    }

    pub fn construct(&mut self, type_id: TypeId) -> ElkResult<ValueId> {
        let payload = {
            let t = self.concrete_type(type_id)?;
            (t.constructor.make)(t)?
        };
        let id = self.insert_value(type_id, payload);
        debug!("construct({}) = {}", type_id, id);
        Ok(id)
    }

    pub fn construct_with(
        &mut self,
        type_id: TypeId,
        scalar: Scalar,
    ) -> ElkResult<ValueId> {
        let payload = {
            let t = self.concrete_type(type_id)?;
            (t.constructor.make_with)(t, scalar)?
        };
        let id = self.insert_value(type_id, payload);
        debug!("construct_with({}, {:?}) = {}", type_id, scalar, id);
        Ok(id)
    }

    fn list_type(&self, id: TypeId) -> ElkResult<&Type> {
        let t = self.concrete_type(id)?;
        match self.builtin_kind(id) {
            Some(BuiltinType::List) => Ok(t),
            _ => Err(ElkError::NotAListType {
                type_name: t.name.clone(),
            }),
        }
    }

    pub fn construct_list(
        &mut self,
        list_type_id: TypeId,
        elements: &[ValueId],
    ) -> ElkResult<ValueId> {
        self.list_type(list_type_id)?;
        let elements = elements
            .iter()
            .map(|id| self.shared_value(*id).map(Rc::clone))
            .collect::<ElkResult<Vec<_>>>()?;
        let head = ListNode::from_elements(elements).ok_or(ElkError::EmptyList)?;
        let id = self.insert_value(list_type_id, Payload::List(head));
        debug!("construct_list({}) = {}", list_type_id, id);
        Ok(id)
    }

    /// A new list value whose first element is `element` followed by every node of `list`.
    pub fn prepend_to_list(
        &mut self,
        list: ValueId,
        element: ValueId,
    ) -> ElkResult<ValueId> {
        let (type_id, head) = {
            let value = self.read_value(list)?;
            let head = value.payload.as_list().ok_or(ElkError::NotAList(list))?;
            (value.type_id, head.spawn(self.shared_value(element)?.clone()))
        };
        Ok(self.insert_value(type_id, Payload::List(head)))
    }

    fn list_of(&self, list: ValueId) -> ElkResult<&Rc<ListNode>> {
        self.read_value(list)?
            .payload
            .as_list()
            .ok_or(ElkError::NotAList(list))
    }

    pub fn list_head(&self, list: ValueId) -> ElkResult<ValueId> {
        self.list_of(list).map(|head| head.element().id)
    }

    pub fn list_tail(&self, list: ValueId) -> ElkResult<ValueId> {
        self.list_of(list).map(|head| head.last().id)
    }

    pub fn list_elements(&self, list: ValueId) -> ElkResult<Vec<ValueId>> {
        self.list_of(list)
            .map(|head| head.iter().map(|element| element.id).collect())
    }

    pub fn list_len(&self, list: ValueId) -> ElkResult<usize> {
        self.list_of(list).map(|head| head.len())
    }
}

#[cfg(test)]
mod tests {
    use super::Store;
    use crate::{
        constants::{CHAR, DEFAULT_CHAR, FUNCTION, INT, LIST, UNIT},
        errors::ElkError,
        types::{BuiltinType, Constructor, Payload, Scalar},
    };
    use proptest::prelude::*;

    fn bootstrapped() -> Store {
        let mut store = Store::default();
        for kind in BuiltinType::ALL.iter() {
            store.register_builtin(*kind);
        }
        store
    }

    #[test]
    fn builtins_have_stable_ids() {
        let store = bootstrapped();
        assert_eq!(store.builtin_type_id(BuiltinType::Unit), Some(UNIT));
        assert_eq!(store.builtin_type_id(BuiltinType::Int), Some(INT));
        assert_eq!(store.builtin_type_id(BuiltinType::Char), Some(CHAR));
        assert_eq!(store.builtin_type_id(BuiltinType::Function), Some(FUNCTION));
        assert_eq!(store.builtin_type_id(BuiltinType::List), Some(LIST));
        assert_eq!(store.builtin_kind(LIST), Some(BuiltinType::List));
        assert_eq!(store.type_count(), 5);
    }

    #[test]
    fn type_ids_are_never_reused() {
        let mut store = bootstrapped();
        let a = store.register_type("A", Constructor::integer());
        let b = store.register_type("A", Constructor::integer());
        assert!(a < b);
        assert_eq!(store.read_type(a).unwrap().name, "A");
    }

    #[test]
    fn zero_argument_construction() {
        let mut store = bootstrapped();
        let zero = store.construct(INT).unwrap();
        let c = store.construct(CHAR).unwrap();
        let unit = store.construct(UNIT).unwrap();
        assert_eq!(store.read_value(zero).unwrap().payload, Payload::Integer(0));
        assert_eq!(
            store.read_value(c).unwrap().payload,
            Payload::Character(DEFAULT_CHAR)
        );
        assert_eq!(store.read_value(unit).unwrap().payload, Payload::Unit);
        assert_eq!(store.type_of(zero), Ok(INT));
    }

    #[test]
    fn abstract_types_cannot_be_constructed() {
        let mut store = bootstrapped();
        let expected = Err(ElkError::AbstractTypeConstruction {
            name: "Function".into(),
        });
        assert_eq!(store.construct(FUNCTION), expected);
        assert_eq!(store.construct_with(FUNCTION, Scalar::Integer(1)), expected);
        assert_eq!(store.value_count(), 0);
    }

    #[test]
    fn scalar_of_the_wrong_kind() {
        let mut store = bootstrapped();
        assert_eq!(
            store.construct_with(INT, Scalar::Character('x')),
            Err(ElkError::ScalarTypeMismatch {
                type_name: "Int".into(),
                scalar: Some(Scalar::Character('x')),
            })
        );
        assert_eq!(store.value_count(), 0);
    }

    #[test]
    fn unknown_ids() {
        let mut store = bootstrapped();
        let missing_type = crate::ids::TypeId(42);
        let missing_value = crate::ids::ValueId(42);
        assert_eq!(store.construct(missing_type), Err(ElkError::UnknownTypeId(missing_type)));
        assert_eq!(
            store.read_value(missing_value).map(|v| v.id),
            Err(ElkError::UnknownValueId(missing_value))
        );
    }

    #[test]
    fn list_head_and_tail() {
        let mut store = bootstrapped();
        let values: Vec<_> = (1..=3)
            .map(|i| store.construct_with(INT, Scalar::Integer(i)).unwrap())
            .collect();
        let list = store.construct_list(LIST, &values).unwrap();
        assert_eq!(store.list_head(list), Ok(values[0]));
        assert_eq!(store.list_tail(list), Ok(values[2]));
        assert_eq!(store.list_elements(list), Ok(values.clone()));
        assert_eq!(store.reference_count(values[1]), Ok(1));
    }

    #[test]
    fn empty_lists_are_rejected() {
        let mut store = bootstrapped();
        assert_eq!(store.construct_list(LIST, &[]), Err(ElkError::EmptyList));
        assert_eq!(store.construct(LIST), Err(ElkError::EmptyList));
    }

    #[test]
    fn only_the_list_type_builds_lists() {
        let mut store = bootstrapped();
        let one = store.construct_with(INT, Scalar::Integer(1)).unwrap();
        assert_eq!(
            store.construct_list(INT, &[one]),
            Err(ElkError::NotAListType {
                type_name: "Int".into()
            })
        );
        assert_eq!(store.list_head(one), Err(ElkError::NotAList(one)));
    }

    #[test]
    fn prepending_shares_the_existing_nodes() {
        let mut store = bootstrapped();
        let a = store.construct_with(INT, Scalar::Integer(1)).unwrap();
        let b = store.construct_with(INT, Scalar::Integer(2)).unwrap();
        let c = store.construct_with(INT, Scalar::Integer(3)).unwrap();
        let tail = store.construct_list(LIST, &[b, c]).unwrap();
        let longer = store.prepend_to_list(tail, a).unwrap();
        assert_eq!(store.list_elements(longer), Ok(vec![a, b, c]));
        assert_eq!(store.list_elements(tail), Ok(vec![b, c]));
        assert_eq!(store.list_len(longer), Ok(3));
        // `b` is held by the one node both lists share
        assert_eq!(store.reference_count(b), Ok(1));
    }

    proptest! {
        #[test]
        fn integers_round_trip(i: i64) {
            let mut store = bootstrapped();
            let id = store.construct_with(INT, Scalar::Integer(i)).unwrap();
            prop_assert_eq!(store.read_value(id).unwrap().payload.as_integer(), Some(i));
        }

        #[test]
        fn characters_round_trip(c: char) {
            let mut store = bootstrapped();
            let id = store.construct_with(CHAR, Scalar::Character(c)).unwrap();
            prop_assert_eq!(store.read_value(id).unwrap().payload.as_character(), Some(c));
        }
    }
}
