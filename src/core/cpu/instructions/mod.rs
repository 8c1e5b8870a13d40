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

//! CPU instruction implementations
//!
//! This module contains all 35 CHIP-8 instruction implementations,
//! organized by instruction type for better maintainability.

use super::Cpu;
use crate::core::display::Display;
use crate::core::error::Result;
use crate::core::keyboard::Keyboard;
use crate::core::memory::Memory;

// Instruction modules organized by type
mod arithmetic;
mod branch;
mod input;
mod load;
mod logical;
mod timer;
mod video;

impl Cpu {
    /// Decode and execute the current instruction
    ///
    /// Dispatches on the high nibble of the instruction word, with
    /// secondary selectors for the 0x0, 0x5, 0x8, 0x9, 0xE and 0xF
    /// groups. Unassigned bit patterns are not errors: they execute as
    /// no-ops (the PC has already advanced) and only log a warning.
    ///
    /// # Arguments
    ///
    /// * `memory` - Address space for load/store/draw operand access
    /// * `display` - Framebuffer for 00E0/DXYN
    /// * `keyboard` - Keypad state for EX9E/EXA1/FX0A
    ///
    /// # Returns
    ///
    /// Ok(()) on success, or an error if execution fails
    pub(super) fn execute_instruction(
        &mut self,
        memory: &mut Memory,
        display: &mut Display,
        keyboard: &mut Keyboard,
    ) -> Result<()> {
        let word = self.current_instruction;

        match word & 0xF000 {
            0x0000 => match word & 0x0FFF {
                0x0E0 => self.op_cls(display), // CLS
                0x0EE => self.op_ret(),        // RET
                // 0NNN (SYS) ran machine code on the original hardware;
                // it is ignored here like in every modern interpreter
                _ => self.op_unassigned(),
            },
            0x1000 => self.op_jp(word),           // JP addr
            0x2000 => self.op_call(word),         // CALL addr
            0x3000 => self.op_se_imm(word),       // SE Vx, byte
            0x4000 => self.op_sne_imm(word),      // SNE Vx, byte
            0x5000 => match word & 0x000F {
                0x0 => self.op_se_reg(word),      // SE Vx, Vy
                _ => self.op_unassigned(),
            },
            0x6000 => self.op_ld_imm(word),       // LD Vx, byte
            0x7000 => self.op_add_imm(word),      // ADD Vx, byte
            0x8000 => match word & 0x000F {
                0x0 => self.op_ld_reg(word),      // LD Vx, Vy
                0x1 => self.op_or(word),          // OR Vx, Vy
                0x2 => self.op_and(word),         // AND Vx, Vy
                0x3 => self.op_xor(word),         // XOR Vx, Vy
                0x4 => self.op_add_reg(word),     // ADD Vx, Vy
                0x5 => self.op_sub(word),         // SUB Vx, Vy
                0x6 => self.op_shr(word),         // SHR Vx
                0x7 => self.op_subn(word),        // SUBN Vx, Vy
                0xE => self.op_shl(word),         // SHL Vx
                _ => self.op_unassigned(),
            },
            0x9000 => match word & 0x000F {
                0x0 => self.op_sne_reg(word),     // SNE Vx, Vy
                _ => self.op_unassigned(),
            },
            0xA000 => self.op_ld_i(word),         // LD I, addr
            0xB000 => self.op_jp_v0(word),        // JP V0, addr
            0xC000 => self.op_rnd(word),          // RND Vx, byte
            0xD000 => self.op_drw(word, memory, display), // DRW Vx, Vy, n
            0xE000 => match word & 0x00FF {
                0x9E => self.op_skp(word, keyboard),  // SKP Vx
                0xA1 => self.op_sknp(word, keyboard), // SKNP Vx
                _ => self.op_unassigned(),
            },
            0xF000 => match word & 0x00FF {
                0x07 => self.op_ld_from_delay(word),     // LD Vx, DT
                0x0A => self.op_wait_key(word, keyboard), // LD Vx, K
                0x15 => self.op_set_delay(word),         // LD DT, Vx
                0x18 => self.op_set_sound(word),         // LD ST, Vx
                0x1E => self.op_add_i(word),             // ADD I, Vx
                0x29 => self.op_font_addr(word),         // LD F, Vx
                0x33 => self.op_bcd(word, memory),       // LD B, Vx
                0x55 => self.op_store_regs(word, memory), // LD [I], Vx
                0x65 => self.op_load_regs(word, memory), // LD Vx, [I]
                _ => self.op_unassigned(),
            },
            _ => unreachable!("high nibble match is exhaustive"),
        }
    }

    /// Unassigned bit pattern: no-op, PC already advanced
    fn op_unassigned(&mut self) -> Result<()> {
        log::warn!(
            "Unassigned opcode: 0x{:04X} at PC=0x{:03X}",
            self.current_instruction,
            self.pc.wrapping_sub(2)
        );
        Ok(())
    }
}
