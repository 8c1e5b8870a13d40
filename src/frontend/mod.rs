// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Frontend helpers
//!
//! Windowing and audio backends live outside this crate; the core exposes
//! everything a frontend needs (the framebuffer snapshot, the buzz signal
//! from the frame loop, and the keyboard mutators). What this module
//! carries is the conventional COSMAC VIP key layout mapped onto a QWERTY
//! host keyboard, so every frontend agrees on which physical key drives
//! which logical key.

/// Mapping between host keyboard characters and logical keypad keys
///
/// The layout follows the common COSMAC VIP convention:
///
/// ```text
/// 1 2 3 4        1 2 3 C
/// Q W E R   ->   4 5 6 D
/// A S D F        7 8 9 E
/// Z X C V        A 0 B F
/// ```
///
/// # Example
///
/// ```
/// use octo8::frontend::KeyMap;
///
/// let map = KeyMap::qwerty();
/// assert_eq!(map.key_for('x'), Some(0x0));
/// assert_eq!(map.key_for('v'), Some(0xF));
/// assert_eq!(map.key_for('p'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMap {
    /// Host character for each logical key 0x0-0xF
    chars: [char; 16],
}

impl KeyMap {
    /// Create the standard QWERTY layout
    pub fn qwerty() -> Self {
        Self {
            chars: [
                'x', '1', '2', '3', 'q', 'w', 'e', 'a', 's', 'd', 'z', 'c', '4', 'r', 'f', 'v',
            ],
        }
    }

    /// Look up the logical key bound to a host character
    ///
    /// Uppercase input is folded to lowercase before the lookup. Returns
    /// `None` for characters outside the layout.
    pub fn key_for(&self, ch: char) -> Option<u8> {
        let ch = ch.to_ascii_lowercase();
        self.chars
            .iter()
            .position(|&c| c == ch)
            .map(|key| key as u8)
    }

    /// Host character bound to a logical key
    ///
    /// The key index is masked to its low nibble.
    pub fn char_for(&self, key: u8) -> char {
        self.chars[(key & 0x0F) as usize]
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::qwerty()
    }
}
