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

use crate::core::display::Display;
use crate::core::error::Result;
use crate::core::keyboard::Keyboard;
use crate::core::memory::Memory;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// CHIP-8 CPU emulation implementation
///
/// # Specifications
/// - Registers: 16 general-purpose 8-bit registers V0-VF
///   (VF doubles as the carry/borrow/collision flag)
/// - Index register I: 16 bits
/// - Program counter: 16 bits, starts at 0x200
/// - Call stack: bounded to 16 return addresses
/// - Two 8-bit countdown timers (delay, sound)
///
/// # Example
/// ```
/// use octo8::core::cpu::Cpu;
///
/// let mut cpu = Cpu::new();
/// cpu.reset();
/// assert_eq!(cpu.pc(), 0x200);
/// ```
pub struct Cpu {
    /// General purpose registers V0-VF
    ///
    /// VF is written by arithmetic/shift/draw instructions as a flag and
    /// must not be relied on as storage across them
    v: [u8; 16],

    /// Index register
    i: u16,

    /// Program counter
    pc: u16,

    /// Call stack of return addresses, at most `STACK_DEPTH` deep
    stack: Vec<u16>,

    /// Delay timer, decremented once per frame while non-zero
    delay_timer: u8,

    /// Sound timer; non-zero means the buzzer should sound
    sound_timer: u8,

    /// Pseudo-random generator for the CXNN instruction
    rng: StdRng,

    /// Execution mode (running, or suspended on FX0A)
    mode: ExecMode,

    /// Current instruction word (for decode and diagnostics)
    current_instruction: u16,
}

/// Interpreter execution mode
///
/// FX0A suspends the instruction stream until a key-down arrives. The
/// suspension is a state, not a blocking call, so the host loop keeps
/// servicing rendering and cancellation while the CPU waits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecMode {
    /// Normal fetch/decode/execute
    Running,
    /// Suspended on FX0A until a new key-down, which lands in `target`
    AwaitingKey { target: u8 },
}

// Module declarations
mod decode;
mod instructions;
#[cfg(test)]
mod tests;

impl Cpu {
    /// Program counter reset value (start of the general region)
    pub const PC_START: u16 = 0x200;

    /// Maximum call stack depth, matching the COSMAC VIP
    ///
    /// Calls beyond this depth fail with `EmulatorError::StackOverflow`.
    pub const STACK_DEPTH: usize = 16;

    /// Create a new Cpu instance with initial state
    ///
    /// The RNG is seeded from OS entropy; use [`Cpu::with_seed`] for a
    /// deterministic instance.
    ///
    /// # Example
    /// ```
    /// use octo8::core::cpu::Cpu;
    ///
    /// let cpu = Cpu::new();
    /// assert_eq!(cpu.pc(), 0x200);
    /// assert_eq!(cpu.reg(0xF), 0);
    /// ```
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a Cpu with a deterministic RNG seed
    ///
    /// Two instances built from the same seed produce identical CXNN
    /// sequences, which makes random-dependent ROMs reproducible in
    /// tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            v: [0u8; 16],
            i: 0,
            pc: Self::PC_START,
            stack: Vec::with_capacity(Self::STACK_DEPTH),
            delay_timer: 0,
            sound_timer: 0,
            rng,
            mode: ExecMode::Running,
            current_instruction: 0,
        }
    }

    /// Reset CPU to initial state
    ///
    /// Clears registers, stack, timers, and the execution mode. The RNG
    /// stream is left where it is.
    pub fn reset(&mut self) {
        self.v = [0u8; 16];
        self.i = 0;
        self.pc = Self::PC_START;
        self.stack.clear();
        self.delay_timer = 0;
        self.sound_timer = 0;
        self.mode = ExecMode::Running;
        self.current_instruction = 0;
    }

    /// Read a general purpose register
    ///
    /// # Arguments
    /// - `index`: Register number (0x0-0xF)
    #[inline(always)]
    pub fn reg(&self, index: u8) -> u8 {
        self.v[(index & 0x0F) as usize]
    }

    /// Write a general purpose register
    ///
    /// # Arguments
    /// - `index`: Register number (0x0-0xF)
    /// - `value`: Value to write
    #[inline(always)]
    pub fn set_reg(&mut self, index: u8, value: u8) {
        self.v[(index & 0x0F) as usize] = value;
    }

    /// Get current PC value
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Get current index register value
    pub fn index(&self) -> u16 {
        self.i
    }

    /// Set the index register
    pub fn set_index(&mut self, value: u16) {
        self.i = value;
    }

    /// Get the delay timer value
    pub fn delay(&self) -> u8 {
        self.delay_timer
    }

    /// Get the sound timer value
    pub fn sound(&self) -> u8 {
        self.sound_timer
    }

    /// Whether the CPU is suspended on FX0A waiting for a key
    pub fn is_awaiting_key(&self) -> bool {
        matches!(self.mode, ExecMode::AwaitingKey { .. })
    }

    /// Execute one instruction
    ///
    /// This is the main CPU execution step. It performs:
    /// 1. Key-wait resolution if suspended on FX0A
    /// 2. Big-endian fetch of the instruction word at `[pc, pc+1]`
    /// 3. PC advance by 2 (jump/call handlers override it)
    /// 4. Decode and execution of exactly one operation
    ///
    /// While suspended, the PC does not move and no fetch happens; each
    /// call polls the keyboard once and consumes one cycle, so the host
    /// stays responsive and can cancel between calls.
    ///
    /// # Arguments
    ///
    /// * `memory` - Address space for fetch and load/store instructions
    /// * `display` - Framebuffer for 00E0/DXYN
    /// * `keyboard` - Keypad state for EX9E/EXA1/FX0A
    ///
    /// # Returns
    ///
    /// Number of cycles consumed (currently always 1)
    ///
    /// # Errors
    ///
    /// Memory faults (fetch or operand access past the address space) and
    /// call-stack overflow surface as errors; no opcode panics on any
    /// input.
    ///
    /// # Example
    ///
    /// ```
    /// use octo8::core::cpu::Cpu;
    /// use octo8::core::display::Display;
    /// use octo8::core::keyboard::Keyboard;
    /// use octo8::core::memory::Memory;
    ///
    /// let mut cpu = Cpu::new();
    /// let mut memory = Memory::new();
    /// let mut display = Display::new();
    /// let mut keyboard = Keyboard::new();
    ///
    /// memory.load_program(&[0x60, 0x2A]).unwrap(); // LD V0, 0x2A
    /// cpu.step(&mut memory, &mut display, &mut keyboard).unwrap();
    /// assert_eq!(cpu.reg(0), 0x2A);
    /// ```
    pub fn step(
        &mut self,
        memory: &mut Memory,
        display: &mut Display,
        keyboard: &mut Keyboard,
    ) -> Result<u32> {
        // Resolve a pending key-wait before considering any fetch
        if let ExecMode::AwaitingKey { target } = self.mode {
            if let Some(key) = keyboard.poll_for_press() {
                self.set_reg(target, key);
                self.pc = self.pc.wrapping_add(2);
                self.mode = ExecMode::Running;
            }
            return Ok(1);
        }

        // Instruction fetch, big-endian
        let hi = memory.read(self.pc)?;
        let lo = memory.read(self.pc.wrapping_add(1))?;
        self.current_instruction = u16::from_be_bytes([hi, lo]);

        // Advance PC before execution; jump/call/skip handlers override
        self.pc = self.pc.wrapping_add(2);

        self.execute_instruction(memory, display, keyboard)?;

        Ok(1)
    }

    /// Decrement the countdown timers for one 60 Hz frame
    ///
    /// Called once per frame by the external driver, independently of
    /// [`Cpu::step`].
    ///
    /// # Returns
    ///
    /// `true` if the sound timer was non-zero this tick, i.e. the audio
    /// sink should buzz for this frame.
    ///
    /// # Example
    ///
    /// ```
    /// use octo8::core::cpu::Cpu;
    ///
    /// let mut cpu = Cpu::new();
    /// assert!(!cpu.decrement_timers());
    /// ```
    pub fn decrement_timers(&mut self) -> bool {
        if self.delay_timer > 0 {
            self.delay_timer -= 1;
        }

        if self.sound_timer > 0 {
            self.sound_timer -= 1;
            return true;
        }

        false
    }

    /// Draw one byte from the RNG stream
    fn random_byte(&mut self) -> u8 {
        self.rng.gen()
    }

    /// Dump all CPU registers for debugging
    ///
    /// Prints the PC, index register, timers, stack depth, and all 16
    /// general-purpose registers.
    pub fn dump_registers(&self) {
        println!("CPU Registers:");
        println!(
            "PC: 0x{:03X}  I: 0x{:03X}  DT: {:3}  ST: {:3}  stack: {}",
            self.pc,
            self.i,
            self.delay_timer,
            self.sound_timer,
            self.stack.len()
        );

        for (idx, value) in self.v.iter().enumerate() {
            if idx % 4 == 0 && idx > 0 {
                println!();
            }
            print!("V{idx:X}: 0x{value:02X}  ");
        }
        println!();
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
