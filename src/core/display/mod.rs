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

//! CHIP-8 display model
//!
//! A 64x32 grid of boolean pixels mutated exclusively by XOR sprite
//! draws. The render sink reads the grid through [`Display::framebuffer`]
//! and is responsible for scaling and presentation; no pixels reach a
//! screen from here.
//!
//! Coordinates are (x, y) with x horizontal (0-63) and y vertical (0-31),
//! both wrapping modulo the grid dimensions.


/// Display width in pixels
pub const WIDTH: usize = 64;

/// Display height in pixels
pub const HEIGHT: usize = 32;

/// The 64x32 monochrome framebuffer
///
/// Created once at startup, cleared by the 00E0 instruction, mutated by
/// DXYN sprite draws, and read by the render step every frame.
pub struct Display {
    /// Pixel state, indexed `pixels[y][x]`
    pixels: [[bool; WIDTH]; HEIGHT],
}

impl Display {
    /// Create a new Display with all pixels off
    pub fn new() -> Self {
        Self {
            pixels: [[false; WIDTH]; HEIGHT],
        }
    }

    /// Clear the display (00E0)
    pub fn clear(&mut self) {
        self.pixels = [[false; WIDTH]; HEIGHT];
    }

    /// Draw a sprite by XOR composition (DXYN)
    ///
    /// Each byte of `sprite` is one row of 8 horizontally adjacent pixels,
    /// MSB first. Every set sprite bit toggles the pixel at
    /// `((x + bit) mod 64, (y + row) mod 32)`.
    ///
    /// # Arguments
    ///
    /// * `x` - Horizontal origin (wraps modulo 64)
    /// * `y` - Vertical origin (wraps modulo 32)
    /// * `sprite` - Sprite rows, 1-15 bytes
    ///
    /// # Returns
    ///
    /// `true` if any pixel transitioned from set to unset during this
    /// call (collision), `false` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use octo8::core::display::Display;
    ///
    /// let mut display = Display::new();
    /// assert!(!display.draw(0, 0, &[0x80])); // top-left pixel on
    /// assert!(display.pixel(0, 0));
    /// assert!(display.draw(0, 0, &[0x80])); // same draw again: collision
    /// assert!(!display.pixel(0, 0));
    /// ```
    pub fn draw(&mut self, x: u8, y: u8, sprite: &[u8]) -> bool {
        let mut collision = false;

        for (row, byte) in sprite.iter().enumerate() {
            let py = (y as usize + row) % HEIGHT;

            for bit in 0..8 {
                if byte & (0x80 >> bit) == 0 {
                    continue;
                }

                let px = (x as usize + bit) % WIDTH;
                self.pixels[py][px] = !self.pixels[py][px];
                if !self.pixels[py][px] {
                    collision = true;
                }
            }
        }

        collision
    }

    /// Read a single pixel
    ///
    /// Coordinates wrap the same way draws do.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.pixels[y % HEIGHT][x % WIDTH]
    }

    /// Read-only snapshot of the pixel grid, indexed `[y][x]`
    ///
    /// This is the render sink's interface; the sink composites the grid
    /// into its presentation surface at whatever scale it chooses.
    pub fn framebuffer(&self) -> &[[bool; WIDTH]; HEIGHT] {
        &self.pixels
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}
