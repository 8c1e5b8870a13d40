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

use super::super::decode::decode_x;
use super::super::{Cpu, ExecMode};
use crate::core::error::Result;
use crate::core::keyboard::Keyboard;

impl Cpu {
    // === Keypad Instructions ===

    /// SKP Vx (EX9E)
    ///
    /// Operation: skip next instruction if the key in Vx is held
    pub(crate) fn op_skp(&mut self, word: u16, keyboard: &Keyboard) -> Result<()> {
        if keyboard.is_pressed(self.reg(decode_x(word))) {
            self.skip_next();
        }
        Ok(())
    }

    /// SKNP Vx (EXA1)
    ///
    /// Operation: skip next instruction if the key in Vx is not held
    pub(crate) fn op_sknp(&mut self, word: u16, keyboard: &Keyboard) -> Result<()> {
        if !keyboard.is_pressed(self.reg(decode_x(word))) {
            self.skip_next();
        }
        Ok(())
    }

    /// LD Vx, K (FX0A)
    ///
    /// Waits for a key-down and stores the key index in Vx. The wait is
    /// a cooperative suspension: if no new key-down is pending, the PC
    /// is rewound over this instruction and the CPU enters
    /// `AwaitingKey`, polled once per subsequent [`Cpu::step`] call.
    pub(crate) fn op_wait_key(&mut self, word: u16, keyboard: &mut Keyboard) -> Result<()> {
        let x = decode_x(word);

        if let Some(key) = keyboard.poll_for_press() {
            self.set_reg(x, key);
        } else {
            self.pc = self.pc.wrapping_sub(2);
            self.mode = ExecMode::AwaitingKey { target: x };
        }
        Ok(())
    }
}
