// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bitflags::bitflags;
use kurbo::Point;

bitflags! {
    /// Modifier keys held during a keyboard event.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
    pub struct KeyModifiers: u8 {
        /// The control key.
        const CTRL = 1 << 0;
        /// The shift key.
        const SHIFT = 1 << 1;
        /// The alt (option) key.
        const ALT = 1 << 2;
        /// The meta (command, windows) key.
        const META = 1 << 3;
    }
}

/// A keyboard event as reported by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyInfo {
    /// The logical key value, such as `"a"` or `"Enter"`.
    pub key: String,
    /// The physical key code, such as `"KeyA"`.
    pub code: String,
    /// Modifier keys held when the event fired.
    pub modifiers: KeyModifiers,
}

impl KeyInfo {
    /// Create a `KeyInfo` from the host's key and code strings.
    pub fn new(
        key: impl Into<String>,
        code: impl Into<String>,
        modifiers: KeyModifiers,
    ) -> Self {
        Self {
            key: key.into(),
            code: code.into(),
            modifiers,
        }
    }
}

/// Resolves the entity under a pointer location.
///
/// Implemented by the scene side and lent to the dispatcher's pointer
/// `raise_*` methods. The result is the unique name of the frontmost entity
/// whose hit test contains `global_location`, scanning front to back across
/// the visible z-stack.
pub trait HitScan {
    /// The name of the frontmost entity at `global_location`, if any.
    ///
    /// When `exclude_mouse_transparent` is true, entities that declare
    /// themselves transparent to the pointer are skipped, letting entities
    /// behind them receive the event.
    fn front_most_entity_at(
        &self,
        global_location: Point,
        exclude_mouse_transparent: bool,
    ) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_combine_and_query() {
        let modifiers = KeyModifiers::CTRL | KeyModifiers::SHIFT;
        assert!(modifiers.contains(KeyModifiers::CTRL));
        assert!(!modifiers.contains(KeyModifiers::META));
        assert_eq!(KeyModifiers::default(), KeyModifiers::empty());
    }

    #[test]
    fn key_info_carries_key_and_code() {
        let info = KeyInfo::new("a", "KeyA", KeyModifiers::ALT);
        assert_eq!(info.key, "a");
        assert_eq!(info.code, "KeyA");
        assert!(info.modifiers.contains(KeyModifiers::ALT));
    }
}
