// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::rc::Rc;

use crate::EventHandler;

/// An ordered registry of handlers for one event kind, keyed by handler
/// name. Invocation order is registration order.
pub(crate) struct HandlerRegistry<H: ?Sized> {
    kind: &'static str,
    entries: Vec<(String, Rc<RefCell<H>>)>,
}

impl<H: EventHandler + ?Sized> HandlerRegistry<H> {
    pub(crate) fn new(kind: &'static str) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Registers a handler under its own name.
    ///
    /// Panics if a handler with the same name is already registered.
    pub(crate) fn register(&mut self, handler: Rc<RefCell<H>>) {
        let name = handler.borrow().name().to_string();
        assert!(
            !self.contains(&name),
            "a {} handler named '{name}' is already registered",
            self.kind
        );
        self.entries.push((name, handler));
    }

    /// Removes the handler registered under `name`.
    ///
    /// Panics if no such handler is registered.
    pub(crate) fn unregister(&mut self, name: &str) {
        let index = self
            .entries
            .iter()
            .position(|(n, _)| n == name)
            .unwrap_or_else(|| panic!("no {} handler named '{name}' is registered", self.kind));
        self.entries.remove(index);
    }

    /// Invokes `action` on every registered handler, in registration order.
    pub(crate) fn for_each(&self, mut action: impl FnMut(&mut H)) {
        for (_, handler) in &self.entries {
            action(&mut handler.borrow_mut());
        }
    }

    /// Invokes `action` on the handler registered under `name`, if any.
    /// Returns whether a handler was found.
    pub(crate) fn with_named(&self, name: &str, action: impl FnOnce(&mut H)) -> bool {
        match self.entries.iter().find(|(n, _)| n == name) {
            Some((_, handler)) => {
                action(&mut handler.borrow_mut());
                true
            }
            None => false,
        }
    }
}

impl<H: ?Sized> Debug for HandlerRegistry<H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("HandlerRegistry")
            .field("kind", &self.kind)
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl EventHandler for Named {
        fn name(&self) -> &str {
            self.0
        }
    }

    fn boxed(name: &'static str) -> Rc<RefCell<Named>> {
        Rc::new(RefCell::new(Named(name)))
    }

    #[test]
    fn registers_and_invokes_in_order() {
        let mut registry: HandlerRegistry<Named> = HandlerRegistry::new("test");
        registry.register(boxed("a"));
        registry.register(boxed("b"));
        let mut seen = Vec::new();
        registry.for_each(|h| seen.push(h.name().to_string()));
        assert_eq!(seen, ["a", "b"]);
        assert!(registry.contains("a"));
        assert!(!registry.contains("c"));
    }

    #[test]
    fn with_named_targets_a_single_handler() {
        let mut registry: HandlerRegistry<Named> = HandlerRegistry::new("test");
        registry.register(boxed("a"));
        let mut hit = false;
        assert!(registry.with_named("a", |_| hit = true));
        assert!(hit);
        assert!(!registry.with_named("b", |_| {}));
    }

    #[test]
    fn unregister_removes_the_entry() {
        let mut registry: HandlerRegistry<Named> = HandlerRegistry::new("test");
        registry.register(boxed("a"));
        registry.unregister("a");
        assert!(registry.is_empty());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn duplicate_names_are_rejected() {
        let mut registry: HandlerRegistry<Named> = HandlerRegistry::new("test");
        registry.register(boxed("a"));
        registry.register(boxed("a"));
    }

    #[test]
    #[should_panic(expected = "no test handler named 'missing'")]
    fn unregistering_an_absent_name_is_rejected() {
        let mut registry: HandlerRegistry<Named> = HandlerRegistry::new("test");
        registry.unregister("missing");
    }
}
