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

//! System integration module
//!
//! This module ties together the emulator components (CPU, Memory,
//! Display, Keyboard) and provides the surface the external driver loop
//! runs against: instruction stepping, per-frame timer ticks with the
//! should-buzz result, framebuffer access for the render sink, and
//! keypad access for the input source.

use super::cpu::Cpu;
use super::display::{Display, HEIGHT, WIDTH};
use super::error::Result;
use super::keyboard::Keyboard;
use super::loader;
use super::memory::Memory;
use std::path::Path;


/// Instructions executed per 60 Hz frame by convention
///
/// Pacing is driver policy, not an interpreter invariant; this is the
/// reference cadence (~600 instructions per second).
pub const DEFAULT_INSTRUCTIONS_PER_FRAME: u32 = 10;

/// CHIP-8 system
///
/// Owns all hardware components and serializes access to them. The
/// driver calls [`System::step`] or [`System::run_frame`], renders from
/// [`System::framebuffer`], feeds key events through
/// [`System::keyboard_mut`], and forwards the should-buzz result to its
/// audio sink.
///
/// # Example
/// ```
/// use octo8::core::system::System;
///
/// let mut system = System::new();
/// system.load_rom_bytes(&[0x12, 0x00]).unwrap(); // JP 0x200
/// system.step().unwrap();
/// assert_eq!(system.pc(), 0x200);
/// ```
pub struct System {
    /// CPU instance
    cpu: Cpu,
    /// 4KB address space
    memory: Memory,
    /// 64x32 framebuffer
    display: Display,
    /// Keypad state
    keyboard: Keyboard,
    /// Total cycles executed
    cycles: u64,
}

impl System {
    /// Create a new System instance
    ///
    /// All components start in their reset state; the CPU RNG is seeded
    /// from OS entropy.
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            memory: Memory::new(),
            display: Display::new(),
            keyboard: Keyboard::new(),
            cycles: 0,
        }
    }

    /// Create a System with a deterministic CPU RNG seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            cpu: Cpu::with_seed(seed),
            ..Self::new()
        }
    }

    /// Reset the system to power-on state
    ///
    /// Clears CPU state, the program region, the display, and the
    /// keypad. A loaded ROM does not survive the reset.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.memory.reset();
        self.display.clear();
        self.keyboard.reset();
        self.cycles = 0;
    }

    /// Load a ROM file into memory
    ///
    /// # Errors
    ///
    /// `RomNotFound`, `ImageTooLarge`, or `Io` from the loader; nothing
    /// is written on failure.
    pub fn load_rom<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let image = loader::load_rom_file(path)?;
        self.memory.load_program(&image)
    }

    /// Load a ROM from a byte slice (tests, embedded images)
    pub fn load_rom_bytes(&mut self, image: &[u8]) -> Result<()> {
        self.memory.load_program(image)
    }

    /// Execute one instruction
    ///
    /// # Returns
    ///
    /// Number of cycles consumed
    pub fn step(&mut self) -> Result<u32> {
        let cycles = self
            .cpu
            .step(&mut self.memory, &mut self.display, &mut self.keyboard)?;
        self.cycles += cycles as u64;
        Ok(cycles)
    }

    /// Run one 60 Hz frame
    ///
    /// Executes `instructions_per_frame` instructions, then applies the
    /// once-per-frame timer tick.
    ///
    /// # Arguments
    ///
    /// * `instructions_per_frame` - Execution budget for this frame
    ///   (reference: [`DEFAULT_INSTRUCTIONS_PER_FRAME`])
    ///
    /// # Returns
    ///
    /// `true` if the audio sink should buzz during this frame.
    ///
    /// # Example
    /// ```
    /// use octo8::core::system::{System, DEFAULT_INSTRUCTIONS_PER_FRAME};
    ///
    /// let mut system = System::new();
    /// system.load_rom_bytes(&[0x12, 0x00]).unwrap();
    /// let buzz = system.run_frame(DEFAULT_INSTRUCTIONS_PER_FRAME).unwrap();
    /// assert!(!buzz);
    /// ```
    pub fn run_frame(&mut self, instructions_per_frame: u32) -> Result<bool> {
        for _ in 0..instructions_per_frame {
            self.step()?;
        }
        Ok(self.cpu.decrement_timers())
    }

    /// Get current PC value
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    /// Get total cycles executed
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Get CPU reference
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Get mutable CPU reference
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    /// Get memory reference
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Get mutable memory reference
    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Read-only framebuffer snapshot for the render sink
    pub fn framebuffer(&self) -> &[[bool; WIDTH]; HEIGHT] {
        self.display.framebuffer()
    }

    /// Mutable keypad access for the input source
    pub fn keyboard_mut(&mut self) -> &mut Keyboard {
        &mut self.keyboard
    }
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}
