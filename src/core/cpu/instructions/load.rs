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
use crate::core::error::Result;
use crate::core::memory::{Memory, GLYPH_SIZE};

impl Cpu {
    // === Load/Store Instructions ===

    /// LD Vx, byte (6XNN)
    ///
    /// Operation: Vx = NN
    pub(crate) fn op_ld_imm(&mut self, word: u16) -> Result<()> {
        self.set_reg(decode_x(word), decode_nn(word));
        Ok(())
    }

    /// LD Vx, Vy (8XY0)
    ///
    /// Operation: Vx = Vy
    pub(crate) fn op_ld_reg(&mut self, word: u16) -> Result<()> {
        let value = self.reg(decode_y(word));
        self.set_reg(decode_x(word), value);
        Ok(())
    }

    /// LD I, addr (ANNN)
    ///
    /// Operation: I = NNN
    pub(crate) fn op_ld_i(&mut self, word: u16) -> Result<()> {
        self.i = decode_nnn(word);
        Ok(())
    }

    /// ADD I, Vx (FX1E)
    ///
    /// 16-bit wrapping add; no flag effect and no special overflow
    /// handling.
    ///
    /// Operation: I = I + Vx
    pub(crate) fn op_add_i(&mut self, word: u16) -> Result<()> {
        self.i = self.i.wrapping_add(self.reg(decode_x(word)) as u16);
        Ok(())
    }

    /// LD F, Vx (FX29)
    ///
    /// Points I at the font glyph for the digit in Vx, five bytes per
    /// glyph from address 0x000. Vx is not masked; values above 0xF
    /// address past the font block.
    ///
    /// Operation: I = Vx * 5
    pub(crate) fn op_font_addr(&mut self, word: u16) -> Result<()> {
        self.i = self.reg(decode_x(word)) as u16 * GLYPH_SIZE as u16;
        Ok(())
    }

    /// LD B, Vx (FX33)
    ///
    /// Decomposes Vx into three decimal digits and writes them at I
    /// (hundreds), I+1 (tens), I+2 (units).
    ///
    /// # Errors
    ///
    /// Write faults (I pointing below 0x200 or past the address space)
    /// propagate.
    pub(crate) fn op_bcd(&mut self, word: u16, memory: &mut Memory) -> Result<()> {
        let value = self.reg(decode_x(word));

        memory.write(self.i, value / 100)?;
        memory.write(self.i.wrapping_add(1), (value / 10) % 10)?;
        memory.write(self.i.wrapping_add(2), value % 10)?;
        Ok(())
    }

    /// LD [I], Vx (FX55)
    ///
    /// Stores V0 through Vx inclusive at consecutive addresses starting
    /// at I. I itself is not modified.
    pub(crate) fn op_store_regs(&mut self, word: u16, memory: &mut Memory) -> Result<()> {
        let x = decode_x(word);

        for offset in 0..=x as u16 {
            memory.write(self.i.wrapping_add(offset), self.reg(offset as u8))?;
        }
        Ok(())
    }

    /// LD Vx, [I] (FX65)
    ///
    /// Loads V0 through Vx inclusive from consecutive addresses starting
    /// at I. I itself is not modified.
    pub(crate) fn op_load_regs(&mut self, word: u16, memory: &mut Memory) -> Result<()> {
        let x = decode_x(word);

        for offset in 0..=x as u16 {
            let value = memory.read(self.i.wrapping_add(offset))?;
            self.set_reg(offset as u8, value);
        }
        Ok(())
    }
}
