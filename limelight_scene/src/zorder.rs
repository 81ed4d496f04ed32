// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt::{Debug, Formatter, Result as FmtResult};

/// Where a new object is placed in a [`ZOrderedList`].
pub enum ZInsert<'a, T: ?Sized> {
    /// Behind everything already in the list.
    Back,
    /// Immediately behind the referenced object.
    Behind(&'a T),
    /// Immediately in front of the referenced object.
    InFrontOf(&'a T),
    /// In front of everything already in the list.
    Front,
}

/// Where an existing object is moved within a [`ZOrderedList`].
pub enum ZMove<'a, T: ?Sized> {
    /// Behind everything else; the rest of the order is preserved.
    ToBack,
    /// One step backward, exchanging places with its back neighbor. A no-op
    /// for the backmost object.
    Backward,
    /// Exchange places with the referenced object, ending up where it was.
    Behind(&'a T),
    /// Exchange places with the referenced object, ending up where it was.
    InFrontOf(&'a T),
    /// One step forward, exchanging places with its front neighbor. A no-op
    /// for the frontmost object.
    Forward,
    /// In front of everything else; the rest of the order is preserved.
    ToFront,
}

impl<T: ?Sized> Debug for ZInsert<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Back => "Back",
            Self::Behind(_) => "Behind",
            Self::InFrontOf(_) => "InFrontOf",
            Self::Front => "Front",
        })
    }
}

impl<T: ?Sized> Debug for ZMove<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::ToBack => "ToBack",
            Self::Backward => "Backward",
            Self::Behind(_) => "Behind",
            Self::InFrontOf(_) => "InFrontOf",
            Self::Forward => "Forward",
            Self::ToFront => "ToFront",
        })
    }
}

/// An ordered collection from backmost (index zero) to frontmost.
///
/// Scenes order their layers and layers order their entities with this list.
/// Objects are located by equality against a caller-supplied key type, so a
/// list of owning records can be addressed by the handles the application
/// holds.
#[derive(Debug)]
pub struct ZOrderedList<T> {
    items: Vec<T>,
}

impl<T> ZOrderedList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The number of objects in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate from backmost to frontmost. Reverse for hit-testing order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterate mutably from backmost to frontmost.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    fn index_of<Q: ?Sized>(&self, object: &Q) -> Option<usize>
    where
        T: PartialEq<Q>,
    {
        self.items.iter().position(|item| item == object)
    }

    /// Insert `object` at the given position.
    ///
    /// # Panics
    ///
    /// Panics if `object` is already in the list, or if a referenced
    /// position object is not.
    pub fn insert<Q: ?Sized>(&mut self, object: T, at: ZInsert<'_, Q>)
    where
        T: PartialEq<T> + PartialEq<Q>,
    {
        assert!(
            !self.items.iter().any(|item| *item == object),
            "object is already present in the z-ordered list"
        );
        let index = match at {
            ZInsert::Back => 0,
            ZInsert::Behind(reference) => self.expect_index(reference),
            ZInsert::InFrontOf(reference) => self.expect_index(reference) + 1,
            ZInsert::Front => self.items.len(),
        };
        self.items.insert(index, object);
    }

    /// Move the object equal to `object` to the given position.
    ///
    /// `ToBack` and `ToFront` splice the object out and reinsert it at the
    /// end, shifting everything it passes. The other four exchange exactly
    /// two positions.
    ///
    /// # Panics
    ///
    /// Panics if `object`, or a referenced position object, is not in the
    /// list.
    pub fn move_z<Q: ?Sized>(&mut self, object: &Q, to: ZMove<'_, Q>)
    where
        T: PartialEq<Q>,
    {
        let index = self.expect_index(object);
        match to {
            ZMove::ToBack => {
                let item = self.items.remove(index);
                self.items.insert(0, item);
            }
            ZMove::Backward => {
                if index > 0 {
                    self.items.swap(index, index - 1);
                }
            }
            ZMove::Behind(reference) | ZMove::InFrontOf(reference) => {
                let other = self.expect_index(reference);
                self.items.swap(index, other);
            }
            ZMove::Forward => {
                if index + 1 < self.items.len() {
                    self.items.swap(index, index + 1);
                }
            }
            ZMove::ToFront => {
                let item = self.items.remove(index);
                self.items.push(item);
            }
        }
    }

    /// Remove and return the object equal to `object`, if present.
    pub fn remove<Q: ?Sized>(&mut self, object: &Q) -> Option<T>
    where
        T: PartialEq<Q>,
    {
        self.index_of(object).map(|index| self.items.remove(index))
    }

    fn expect_index<Q: ?Sized>(&self, object: &Q) -> usize
    where
        T: PartialEq<Q>,
    {
        self.index_of(object)
            .expect("object is not in the z-ordered list")
    }
}

impl<T> Default for ZOrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a ZOrderedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
