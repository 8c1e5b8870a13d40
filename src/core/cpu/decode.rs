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

//! Instruction word field extraction
//!
//! Every CHIP-8 instruction is one 16-bit word. Operands are packed into
//! fixed nibble positions:
//!
//! Format: | op (4) | x (4) | y (4) | n (4) |
//!
//! with the overlapping immediates `nn` (low byte) and `nnn` (low 12
//! bits).

/// Extract the Vx register selector (bits 11-8)
#[inline(always)]
pub(super) fn decode_x(word: u16) -> u8 {
    ((word >> 8) & 0x0F) as u8
}

/// Extract the Vy register selector (bits 7-4)
#[inline(always)]
pub(super) fn decode_y(word: u16) -> u8 {
    ((word >> 4) & 0x0F) as u8
}

/// Extract the 4-bit immediate / sprite height (bits 3-0)
#[inline(always)]
pub(super) fn decode_n(word: u16) -> u8 {
    (word & 0x000F) as u8
}

/// Extract the 8-bit immediate (bits 7-0)
#[inline(always)]
pub(super) fn decode_nn(word: u16) -> u8 {
    (word & 0x00FF) as u8
}

/// Extract the 12-bit address (bits 11-0)
#[inline(always)]
pub(super) fn decode_nnn(word: u16) -> u16 {
    word & 0x0FFF
}
