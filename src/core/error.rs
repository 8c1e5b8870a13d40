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

/// Emulator error types
use thiserror::Error;

/// Result type for emulator operations
pub type Result<T> = std::result::Result<T, EmulatorError>;

/// Main error type for the emulator
#[derive(Error, Debug)]
pub enum EmulatorError {
    #[error("Memory access out of bounds at 0x{address:03X}")]
    OutOfBounds { address: u16 },

    #[error("Write to interpreter-reserved memory at 0x{address:03X}")]
    ReservedRegion { address: u16 },

    #[error("ROM image too large: {size} bytes (capacity {capacity})")]
    ImageTooLarge { size: usize, capacity: usize },

    #[error("Invalid font data: {got} bytes (expected {expected})")]
    MissingFontData { expected: usize, got: usize },

    #[error("Call stack overflow at depth {depth}")]
    StackOverflow { depth: usize },

    #[error("ROM file not found: {0}")]
    RomNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
