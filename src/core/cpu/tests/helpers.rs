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

//! Shared test fixtures for CPU tests

use super::super::Cpu;
use crate::core::display::Display;
use crate::core::error::Result;
use crate::core::keyboard::Keyboard;
use crate::core::memory::Memory;

/// A CPU wired to fresh peripherals, with a fixed RNG seed
pub(super) struct TestMachine {
    pub cpu: Cpu,
    pub memory: Memory,
    pub display: Display,
    pub keyboard: Keyboard,
}

impl TestMachine {
    pub fn new() -> Self {
        Self {
            cpu: Cpu::with_seed(0xC8),
            memory: Memory::new(),
            display: Display::new(),
            keyboard: Keyboard::new(),
        }
    }

    /// Build a machine with the given instruction words loaded at 0x200
    pub fn with_program(words: &[u16]) -> Self {
        let mut machine = Self::new();
        machine.load_program(words);
        machine
    }

    /// Load instruction words at 0x200, big-endian
    pub fn load_program(&mut self, words: &[u16]) {
        let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_be_bytes()).collect();
        self.memory.load_program(&bytes).unwrap();
    }

    /// Execute one instruction
    pub fn step(&mut self) -> Result<u32> {
        self.cpu
            .step(&mut self.memory, &mut self.display, &mut self.keyboard)
    }

    /// Execute `n` instructions, failing the test on any error
    pub fn step_n(&mut self, n: usize) {
        for _ in 0..n {
            self.step().unwrap();
        }
    }
}
