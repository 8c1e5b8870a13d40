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

use super::super::decode::{decode_n, decode_x, decode_y};
use super::super::Cpu;
use crate::core::display::Display;
use crate::core::error::Result;
use crate::core::memory::Memory;

impl Cpu {
    // === Display Instructions ===

    /// CLS (00E0)
    ///
    /// Operation: clear the display
    pub(crate) fn op_cls(&mut self, display: &mut Display) -> Result<()> {
        display.clear();
        Ok(())
    }

    /// DRW Vx, Vy, n (DXYN)
    ///
    /// Reads an N-row sprite from memory at I and XOR-draws it with Vx
    /// as the horizontal and Vy as the vertical origin. VF receives the
    /// collision flag.
    ///
    /// Coordinates wrap: x modulo 64, y modulo 32.
    ///
    /// # Errors
    ///
    /// Sprite reads past the address space propagate as `OutOfBounds`.
    pub(crate) fn op_drw(
        &mut self,
        word: u16,
        memory: &mut Memory,
        display: &mut Display,
    ) -> Result<()> {
        let x = self.reg(decode_x(word));
        let y = self.reg(decode_y(word));
        let height = decode_n(word);

        let mut sprite = [0u8; 15];
        for row in 0..height as u16 {
            sprite[row as usize] = memory.read(self.i.wrapping_add(row))?;
        }

        let collision = display.draw(x, y, &sprite[..height as usize]);
        self.set_reg(0xF, collision as u8);
        Ok(())
    }
}
