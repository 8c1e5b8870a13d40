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

//! CHIP-8 keypad state
//!
//! Sixteen logical keys (0x0-0xF) held as a 16-bit mask. The external
//! input source translates raw platform key events into
//! [`Keyboard::set_pressed`] / [`Keyboard::set_released`] calls; the
//! interpreter queries the mask through [`Keyboard::is_pressed`] and
//! consumes newly registered key-downs through
//! [`Keyboard::poll_for_press`] while suspended on the FX0A instruction.

use bitflags::bitflags;


/// One bit per logical keypad key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyMask(u16);

bitflags! {
    impl KeyMask: u16 {
        const KEY_0 = 1 << 0x0;
        const KEY_1 = 1 << 0x1;
        const KEY_2 = 1 << 0x2;
        const KEY_3 = 1 << 0x3;
        const KEY_4 = 1 << 0x4;
        const KEY_5 = 1 << 0x5;
        const KEY_6 = 1 << 0x6;
        const KEY_7 = 1 << 0x7;
        const KEY_8 = 1 << 0x8;
        const KEY_9 = 1 << 0x9;
        const KEY_A = 1 << 0xA;
        const KEY_B = 1 << 0xB;
        const KEY_C = 1 << 0xC;
        const KEY_D = 1 << 0xD;
        const KEY_E = 1 << 0xE;
        const KEY_F = 1 << 0xF;
    }
}

impl KeyMask {
    /// Mask bit for a logical key, ignoring everything above the low nibble
    fn for_key(key: u8) -> Self {
        KeyMask::from_bits_truncate(1 << (key & 0x0F))
    }
}

/// The 16-key keypad state register
///
/// Alongside the mask, the keypad latches the most recent clear-to-set
/// transition so FX0A can pick up exactly one new key-down per wait.
pub struct Keyboard {
    /// Current key state, one bit per key
    keys: KeyMask,

    /// First newly pressed key since the last poll
    pending_press: Option<u8>,
}

impl Keyboard {
    /// Create a new Keyboard with all keys up
    pub fn new() -> Self {
        Self {
            keys: KeyMask::empty(),
            pending_press: None,
        }
    }

    /// Reset to initial state: all keys up, pending press cleared
    pub fn reset(&mut self) {
        self.keys = KeyMask::empty();
        self.pending_press = None;
    }

    /// Register a key-down event for logical key 0x0-0xF
    ///
    /// A clear-to-set transition is latched for [`Keyboard::poll_for_press`];
    /// repeated key-down events for an already held key latch nothing.
    pub fn set_pressed(&mut self, key: u8) {
        let key = key & 0x0F;
        let mask = KeyMask::for_key(key);

        if !self.keys.contains(mask) {
            self.keys.insert(mask);
            if self.pending_press.is_none() {
                self.pending_press = Some(key);
            }
        }
    }

    /// Register a key-up event for logical key 0x0-0xF
    pub fn set_released(&mut self, key: u8) {
        self.keys.remove(KeyMask::for_key(key));
    }

    /// Test whether a key is currently held (EX9E / EXA1)
    ///
    /// The key value is masked to its low nibble before the test.
    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys.contains(KeyMask::for_key(key))
    }

    /// Take the first newly registered key-down since the last poll
    ///
    /// Non-blocking; returns `None` when no new key-down has been
    /// observed. Consuming the latch arms it for the next transition.
    pub fn poll_for_press(&mut self) -> Option<u8> {
        self.pending_press.take()
    }
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}
