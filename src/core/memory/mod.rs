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

//! CHIP-8 memory map
//!
//! The Memory type is the single addressable byte store consulted by the
//! interpreter. It manages region classification and access control for
//! the 4KB logical address space.
//!
//! # Memory Map
//!
//! | Address Range | Region    | Size | Access                    |
//! |---------------|-----------|------|---------------------------|
//! | 0x000-0x04F   | Font      | 80B  | R only (built-in glyphs)  |
//! | 0x050-0x1FF   | Reserved  | 432B | R only (always reads 0)   |
//! | 0x200-0xFFE   | Program   | 3584B| R/W (ROM loaded at 0x200) |
//!
//! Addresses at or above 0xFFF are out of bounds. Reads never fail for
//! any address below 0xFFF; writes below 0x200 are rejected.
//!
//! # Example
//!
//! ```
//! use octo8::core::memory::Memory;
//!
//! let mut memory = Memory::new();
//! memory.write(0x200, 0xAB).unwrap();
//! assert_eq!(memory.read(0x200).unwrap(), 0xAB);
//!
//! // The reserved region reads as zero and rejects writes
//! assert_eq!(memory.read(0x100).unwrap(), 0);
//! assert!(memory.write(0x100, 0xFF).is_err());
//! ```

use crate::core::error::{EmulatorError, Result};

pub mod font;

#[cfg(test)]
mod tests;

pub use font::{FONT_DATA, FONT_SIZE, GLYPH_SIZE};

/// Memory region identification
///
/// Used to identify which memory region an address belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryRegion {
    /// Built-in font glyphs (0x000-0x04F)
    Font,
    /// Interpreter-reserved area (0x050-0x1FF), reads as zero
    Reserved,
    /// General program/data area (0x200-0xFFE)
    Program,
    /// Outside the 4KB address space
    OutOfBounds,
}

/// The 4KB CHIP-8 address space
///
/// Only the general region above 0x200 is backed by mutable storage; the
/// low 512 bytes belong to the interpreter and hold the font sprites.
#[derive(Debug)]
pub struct Memory {
    /// General program/data region (0x200-0xFFE)
    ram: [u8; Memory::PROGRAM_CAPACITY],

    /// Font sprite data, mapped read-only at 0x000
    font: [u8; FONT_SIZE],
}

impl Memory {
    /// End of the font block
    const FONT_END: u16 = 0x050;

    /// Start of the general program region
    pub const PROGRAM_START: u16 = 0x200;

    /// First invalid address
    const ADDRESS_LIMIT: u16 = 0xFFF;

    /// Capacity of the general region backing store
    pub const PROGRAM_CAPACITY: usize = 3584;

    /// Create a new Memory instance with the built-in font table
    ///
    /// The program region is initialized to zero.
    ///
    /// # Example
    ///
    /// ```
    /// use octo8::core::memory::Memory;
    ///
    /// let memory = Memory::new();
    /// assert_eq!(memory.read(0x000).unwrap(), 0xF0); // first row of glyph 0
    /// ```
    pub fn new() -> Self {
        Self {
            ram: [0u8; Self::PROGRAM_CAPACITY],
            font: FONT_DATA,
        }
    }

    /// Create a Memory instance with an externally supplied font table
    ///
    /// # Arguments
    ///
    /// * `font` - Replacement glyph data; must be exactly 80 bytes
    ///
    /// # Errors
    ///
    /// Returns `EmulatorError::MissingFontData` if the table is not
    /// exactly 16 glyphs of 5 bytes.
    pub fn with_font(font: &[u8]) -> Result<Self> {
        if font.len() != FONT_SIZE {
            return Err(EmulatorError::MissingFontData {
                expected: FONT_SIZE,
                got: font.len(),
            });
        }

        let mut table = [0u8; FONT_SIZE];
        table.copy_from_slice(font);

        Ok(Self {
            ram: [0u8; Self::PROGRAM_CAPACITY],
            font: table,
        })
    }

    /// Reset the memory to initial state
    ///
    /// Clears the program region to zero. The font block is preserved, as
    /// it represents read-only interpreter data.
    pub fn reset(&mut self) {
        self.ram.fill(0);
    }

    /// Identify the memory region for an address
    ///
    /// # Example
    ///
    /// ```
    /// use octo8::core::memory::{Memory, MemoryRegion};
    ///
    /// let memory = Memory::new();
    /// assert_eq!(memory.region(0x000), MemoryRegion::Font);
    /// assert_eq!(memory.region(0x050), MemoryRegion::Reserved);
    /// assert_eq!(memory.region(0x200), MemoryRegion::Program);
    /// assert_eq!(memory.region(0xFFF), MemoryRegion::OutOfBounds);
    /// ```
    pub fn region(&self, address: u16) -> MemoryRegion {
        match address {
            a if a < Self::FONT_END => MemoryRegion::Font,
            a if a < Self::PROGRAM_START => MemoryRegion::Reserved,
            a if a < Self::ADDRESS_LIMIT => MemoryRegion::Program,
            _ => MemoryRegion::OutOfBounds,
        }
    }

    /// Read one byte
    ///
    /// # Arguments
    ///
    /// * `address` - Logical address (0x000-0xFFE)
    ///
    /// # Returns
    ///
    /// The font byte, zero, or the stored program byte depending on the
    /// region.
    ///
    /// # Errors
    ///
    /// Returns `EmulatorError::OutOfBounds` for addresses at or above 0xFFF.
    pub fn read(&self, address: u16) -> Result<u8> {
        match self.region(address) {
            MemoryRegion::Font => Ok(self.font[address as usize]),
            MemoryRegion::Reserved => Ok(0),
            MemoryRegion::Program => Ok(self.ram[(address - Self::PROGRAM_START) as usize]),
            MemoryRegion::OutOfBounds => Err(EmulatorError::OutOfBounds { address }),
        }
    }

    /// Write one byte
    ///
    /// # Arguments
    ///
    /// * `address` - Logical address (0x200-0xFFE)
    /// * `value` - Byte to store
    ///
    /// # Errors
    ///
    /// - `EmulatorError::ReservedRegion` for any address below 0x200
    /// - `EmulatorError::OutOfBounds` for addresses at or above 0xFFF
    pub fn write(&mut self, address: u16, value: u8) -> Result<()> {
        match self.region(address) {
            MemoryRegion::Font | MemoryRegion::Reserved => {
                Err(EmulatorError::ReservedRegion { address })
            }
            MemoryRegion::Program => {
                self.ram[(address - Self::PROGRAM_START) as usize] = value;
                Ok(())
            }
            MemoryRegion::OutOfBounds => Err(EmulatorError::OutOfBounds { address }),
        }
    }

    /// Load a ROM image into the program region
    ///
    /// Copies the image starting at 0x200. The remainder of the region
    /// keeps its prior zero initialization.
    ///
    /// # Arguments
    ///
    /// * `image` - Raw ROM bytes, no header
    ///
    /// # Errors
    ///
    /// Returns `EmulatorError::ImageTooLarge` if the image exceeds the
    /// 3584-byte capacity of the program region.
    ///
    /// # Example
    ///
    /// ```
    /// use octo8::core::memory::Memory;
    ///
    /// let mut memory = Memory::new();
    /// memory.load_program(&[0x12, 0x00]).unwrap();
    /// assert_eq!(memory.read(0x200).unwrap(), 0x12);
    /// assert_eq!(memory.read(0x201).unwrap(), 0x00);
    /// ```
    pub fn load_program(&mut self, image: &[u8]) -> Result<()> {
        if image.len() > Self::PROGRAM_CAPACITY {
            return Err(EmulatorError::ImageTooLarge {
                size: image.len(),
                capacity: Self::PROGRAM_CAPACITY,
            });
        }

        self.ram[..image.len()].copy_from_slice(image);
        Ok(())
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
