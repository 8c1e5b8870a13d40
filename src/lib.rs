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

//! CHIP-8 emulator core library
//!
//! This library provides the core emulation components for a CHIP-8
//! emulator: the CPU (35-opcode interpreter), the 4KB memory map, the
//! 64x32 monochrome display, and the 16-key keypad state.
//!
//! # Example
//!
//! ```
//! use octo8::core::cpu::Cpu;
//! use octo8::core::display::Display;
//! use octo8::core::keyboard::Keyboard;
//! use octo8::core::memory::Memory;
//!
//! let mut cpu = Cpu::new();
//! let mut memory = Memory::new();
//! let mut display = Display::new();
//! let mut keyboard = Keyboard::new();
//!
//! // 00E0: clear the display
//! memory.load_program(&[0x00, 0xE0]).unwrap();
//! cpu.step(&mut memory, &mut display, &mut keyboard).unwrap();
//! ```

pub mod core;
pub mod frontend;
