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

//! Core emulation components
//!
//! This module contains all hardware emulation components:
//! - CPU (fetch/decode/execute interpreter, timers, RNG)
//! - Memory (4KB address space with font/reserved/program regions)
//! - Display (64x32 monochrome XOR framebuffer)
//! - Keyboard (16-key keypad state)
//! - System integration and ROM loading

pub mod cpu;
pub mod display;
pub mod error;
pub mod keyboard;
pub mod loader;
pub mod memory;
pub mod system;

// Re-export commonly used types
pub use cpu::Cpu;
pub use display::Display;
pub use error::{EmulatorError, Result};
pub use keyboard::Keyboard;
pub use memory::Memory;
pub use system::System;
