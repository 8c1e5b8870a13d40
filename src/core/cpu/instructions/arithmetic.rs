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

use super::super::decode::{decode_nn, decode_x, decode_y};
use super::super::Cpu;
use crate::core::error::Result;

impl Cpu {
    // === Arithmetic Instructions ===

    /// ADD Vx, byte (7XNN)
    ///
    /// Adds an immediate to Vx, wrapping modulo 256. VF is untouched.
    ///
    /// Operation: Vx = Vx + NN
    pub(crate) fn op_add_imm(&mut self, word: u16) -> Result<()> {
        let x = decode_x(word);
        let nn = decode_nn(word);
        self.set_reg(x, self.reg(x).wrapping_add(nn));
        Ok(())
    }

    /// ADD Vx, Vy (8XY4)
    ///
    /// Adds Vy to Vx as a 9-bit sum; the low 8 bits land in Vx and the
    /// carry bit in VF. The flag write comes second, so it wins when
    /// x = F.
    ///
    /// Operation: Vx = Vx + Vy; VF = carry
    pub(crate) fn op_add_reg(&mut self, word: u16) -> Result<()> {
        let x = decode_x(word);
        let y = decode_y(word);

        let sum = self.reg(x) as u16 + self.reg(y) as u16;
        self.set_reg(x, sum as u8);
        self.set_reg(0xF, (sum >> 8) as u8);
        Ok(())
    }

    /// SUB Vx, Vy (8XY5)
    ///
    /// Subtracts Vy from Vx, wrapping. VF is the not-borrow flag: 1 when
    /// no borrow occurred (Vx >= Vy before mutation), 0 otherwise.
    ///
    /// Operation: Vx = Vx - Vy; VF = not borrow
    pub(crate) fn op_sub(&mut self, word: u16) -> Result<()> {
        let x = decode_x(word);
        let y = decode_y(word);

        let (vx, vy) = (self.reg(x), self.reg(y));
        self.set_reg(x, vx.wrapping_sub(vy));
        self.set_reg(0xF, (vx >= vy) as u8);
        Ok(())
    }

    /// SUBN Vx, Vy (8XY7)
    ///
    /// Subtracts Vx from Vy into Vx, wrapping. VF is the not-borrow
    /// flag for the reversed operands (Vy >= Vx before mutation).
    ///
    /// Operation: Vx = Vy - Vx; VF = not borrow
    pub(crate) fn op_subn(&mut self, word: u16) -> Result<()> {
        let x = decode_x(word);
        let y = decode_y(word);

        let (vx, vy) = (self.reg(x), self.reg(y));
        self.set_reg(x, vy.wrapping_sub(vx));
        self.set_reg(0xF, (vy >= vx) as u8);
        Ok(())
    }

    /// SHR Vx (8XY6)
    ///
    /// Shifts Vx right by one. VF receives the shifted-out bit, written
    /// before the result so the result wins when x = F.
    ///
    /// Operation: VF = Vx & 1; Vx = Vx >> 1
    pub(crate) fn op_shr(&mut self, word: u16) -> Result<()> {
        let x = decode_x(word);

        let vx = self.reg(x);
        self.set_reg(0xF, vx & 0x01);
        self.set_reg(x, vx >> 1);
        Ok(())
    }

    /// SHL Vx (8XYE)
    ///
    /// Shifts Vx left by one. VF receives the shifted-out bit, written
    /// before the result so the result wins when x = F.
    ///
    /// Operation: VF = Vx >> 7; Vx = Vx << 1
    pub(crate) fn op_shl(&mut self, word: u16) -> Result<()> {
        let x = decode_x(word);

        let vx = self.reg(x);
        self.set_reg(0xF, (vx >> 7) & 0x01);
        self.set_reg(x, vx << 1);
        Ok(())
    }

    /// RND Vx, byte (CXNN)
    ///
    /// Draws a pseudo-random byte, masks it with the immediate, and
    /// stores the result in Vx.
    ///
    /// Operation: Vx = random() & NN
    pub(crate) fn op_rnd(&mut self, word: u16) -> Result<()> {
        let x = decode_x(word);
        let nn = decode_nn(word);

        let value = self.random_byte() & nn;
        self.set_reg(x, value);
        Ok(())
    }
}
