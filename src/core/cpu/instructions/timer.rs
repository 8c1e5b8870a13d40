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
use super::super::Cpu;
use crate::core::error::Result;

impl Cpu {
    // === Timer Instructions ===

    /// LD Vx, DT (FX07)
    ///
    /// Operation: Vx = delay timer
    pub(crate) fn op_ld_from_delay(&mut self, word: u16) -> Result<()> {
        let value = self.delay_timer;
        self.set_reg(decode_x(word), value);
        Ok(())
    }

    /// LD DT, Vx (FX15)
    ///
    /// Operation: delay timer = Vx
    pub(crate) fn op_set_delay(&mut self, word: u16) -> Result<()> {
        self.delay_timer = self.reg(decode_x(word));
        Ok(())
    }

    /// LD ST, Vx (FX18)
    ///
    /// Operation: sound timer = Vx
    pub(crate) fn op_set_sound(&mut self, word: u16) -> Result<()> {
        self.sound_timer = self.reg(decode_x(word));
        Ok(())
    }
}
