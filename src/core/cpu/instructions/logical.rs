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

use super::super::decode::{decode_x, decode_y};
use super::super::Cpu;
use crate::core::error::Result;

impl Cpu {
    // === Logical Instructions ===

    /// OR Vx, Vy (8XY1)
    ///
    /// Operation: Vx = Vx | Vy
    pub(crate) fn op_or(&mut self, word: u16) -> Result<()> {
        let x = decode_x(word);
        let y = decode_y(word);
        self.set_reg(x, self.reg(x) | self.reg(y));
        Ok(())
    }

    /// AND Vx, Vy (8XY2)
    ///
    /// Operation: Vx = Vx & Vy
    pub(crate) fn op_and(&mut self, word: u16) -> Result<()> {
        let x = decode_x(word);
        let y = decode_y(word);
        self.set_reg(x, self.reg(x) & self.reg(y));
        Ok(())
    }

    /// XOR Vx, Vy (8XY3)
    ///
    /// Operation: Vx = Vx ^ Vy
    pub(crate) fn op_xor(&mut self, word: u16) -> Result<()> {
        let x = decode_x(word);
        let y = decode_y(word);
        self.set_reg(x, self.reg(x) ^ self.reg(y));
        Ok(())
    }
}
