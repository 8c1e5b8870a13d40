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

use super::super::decode::{decode_nn, decode_nnn, decode_x, decode_y};
use super::super::Cpu;
use crate::core::error::{EmulatorError, Result};

impl Cpu {
    // === Flow Control Instructions ===

    /// Skip the next instruction (shared by the SE/SNE/SKP family)
    #[inline(always)]
    pub(super) fn skip_next(&mut self) {
        self.pc = self.pc.wrapping_add(2);
    }

    /// JP addr (1NNN)
    ///
    /// Operation: pc = NNN
    pub(crate) fn op_jp(&mut self, word: u16) -> Result<()> {
        self.pc = decode_nnn(word);
        Ok(())
    }

    /// JP V0, addr (BNNN)
    ///
    /// Indexed jump; the 12-bit target plus V0.
    ///
    /// Operation: pc = NNN + V0
    pub(crate) fn op_jp_v0(&mut self, word: u16) -> Result<()> {
        self.pc = decode_nnn(word).wrapping_add(self.reg(0) as u16);
        Ok(())
    }

    /// CALL addr (2NNN)
    ///
    /// Pushes the return address (the already-advanced PC) and jumps.
    ///
    /// # Errors
    ///
    /// Returns `EmulatorError::StackOverflow` when the call stack is at
    /// its 16-entry bound, the depth of the COSMAC VIP stack.
    pub(crate) fn op_call(&mut self, word: u16) -> Result<()> {
        if self.stack.len() >= Self::STACK_DEPTH {
            return Err(EmulatorError::StackOverflow {
                depth: self.stack.len(),
            });
        }

        self.stack.push(self.pc);
        self.pc = decode_nnn(word);
        Ok(())
    }

    /// RET (00EE)
    ///
    /// Pops the return address into the PC. A return with an empty stack
    /// is a no-op rather than a fault.
    pub(crate) fn op_ret(&mut self) -> Result<()> {
        if let Some(addr) = self.stack.pop() {
            self.pc = addr;
        }
        Ok(())
    }

    /// SE Vx, byte (3XNN)
    ///
    /// Operation: skip next instruction if Vx == NN
    pub(crate) fn op_se_imm(&mut self, word: u16) -> Result<()> {
        if self.reg(decode_x(word)) == decode_nn(word) {
            self.skip_next();
        }
        Ok(())
    }

    /// SNE Vx, byte (4XNN)
    ///
    /// Operation: skip next instruction if Vx != NN
    pub(crate) fn op_sne_imm(&mut self, word: u16) -> Result<()> {
        if self.reg(decode_x(word)) != decode_nn(word) {
            self.skip_next();
        }
        Ok(())
    }

    /// SE Vx, Vy (5XY0)
    ///
    /// Operation: skip next instruction if Vx == Vy
    pub(crate) fn op_se_reg(&mut self, word: u16) -> Result<()> {
        if self.reg(decode_x(word)) == self.reg(decode_y(word)) {
            self.skip_next();
        }
        Ok(())
    }

    /// SNE Vx, Vy (9XY0)
    ///
    /// Operation: skip next instruction if Vx != Vy
    pub(crate) fn op_sne_reg(&mut self, word: u16) -> Result<()> {
        if self.reg(decode_x(word)) != self.reg(decode_y(word)) {
            self.skip_next();
        }
        Ok(())
    }
}
