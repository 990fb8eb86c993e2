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

use crate::types::Value;
use std::rc::Rc;

/// One immutable cell of a persistent list. Nodes never change after creation so any number of
/// lists may share a tail.
#[derive(Debug, PartialEq)]
pub struct ListNode {
    element: Rc<Value>,
    next: Option<Rc<ListNode>>,
}

impl ListNode {
    /// Builds the nodes for `elements` in order and returns the head, or `None` if there are no elements.
    pub fn from_elements(elements: Vec<Rc<Value>>) -> Option<Rc<Self>> {
        elements.into_iter().rev().fold(None, |next, element| {
            Some(Rc::new(Self {
                element,
                next,
            }))
        })
    }

    /// A new head in front of `self`. The existing nodes are shared, not copied.
    pub fn spawn(self: &Rc<Self>, element: Rc<Value>) -> Rc<Self> {
        Rc::new(Self {
            element,
            next: Some(self.clone()),
        })
    }

    pub fn element(&self) -> &Rc<Value> {
        &self.element
    }

    pub fn next(&self) -> Option<&Rc<ListNode>> {
        self.next.as_ref()
    }

    /// The element of the rightmost node.
    pub fn last(&self) -> &Rc<Value> {
        let mut node = self;
        while let Some(next) = &node.next {
            node = &**next;
        }
        &node.element
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            node: Some(self),
        }
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }
}

pub struct Iter<'a> {
    node: Option<&'a ListNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Rc<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        self.node = node.next.as_deref();
        Some(&node.element)
    }
}
