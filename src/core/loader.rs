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

//! ROM image loading
//!
//! CHIP-8 ROMs are raw byte images with no header or metadata; the
//! whole file is copied to 0x200. Validation happens before any system
//! state is touched, so a failed load leaves nothing partially written.

use crate::core::error::{EmulatorError, Result};
use crate::core::memory::Memory;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read and validate a ROM file
///
/// # Arguments
///
/// * `path` - Path to the ROM file
///
/// # Returns
///
/// The raw ROM bytes, ready for [`Memory::load_program`].
///
/// # Errors
///
/// - `EmulatorError::RomNotFound` if the file cannot be opened
/// - `EmulatorError::ImageTooLarge` if it exceeds the 3584-byte program
///   region
/// - `EmulatorError::Io` on read failures
///
/// # Example
///
/// ```no_run
/// use octo8::core::loader::load_rom_file;
///
/// let image = load_rom_file("roms/pong.ch8").unwrap();
/// ```
pub fn load_rom_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let mut file = File::open(path)
        .map_err(|_| EmulatorError::RomNotFound(path.display().to_string()))?;

    let metadata = file.metadata()?;
    if metadata.len() > Memory::PROGRAM_CAPACITY as u64 {
        return Err(EmulatorError::ImageTooLarge {
            size: metadata.len() as usize,
            capacity: Memory::PROGRAM_CAPACITY,
        });
    }

    let mut image = Vec::with_capacity(metadata.len() as usize);
    file.read_to_end(&mut image)?;

    log::info!("Loaded ROM: {} ({} bytes)", path.display(), image.len());
    Ok(image)
}
