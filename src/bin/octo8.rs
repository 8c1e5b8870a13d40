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

use std::time::Duration;

use clap::Parser;
use log::{error, info};
use octo8::core::error::Result;
use octo8::core::system::{System, DEFAULT_INSTRUCTIONS_PER_FRAME};

/// CHIP-8 emulator
#[derive(Parser)]
#[command(name = "octo8")]
#[command(about = "CHIP-8 emulator", long_about = None)]
struct Args {
    /// Path to CHIP-8 ROM image
    rom_file: String,

    /// Instructions executed per 60 Hz frame
    #[arg(short = 'i', long, default_value_t = DEFAULT_INSTRUCTIONS_PER_FRAME)]
    ipf: u32,

    /// Number of frames to run
    #[arg(short = 'n', long, default_value = "600")]
    frames: u64,

    /// Seed for the RND instruction (entropy-seeded if omitted)
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Pace execution at roughly 60 frames per second
    #[arg(long)]
    realtime: bool,
}

fn main() -> Result<()> {
    // Initialize logger with default level INFO
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("octo8 v{}", env!("CARGO_PKG_VERSION"));
    info!("CHIP-8 emulator");

    // Parse command line arguments
    let args = Args::parse();

    let mut system = match args.seed {
        Some(seed) => System::with_seed(seed),
        None => System::new(),
    };

    info!("Loading ROM from: {}", args.rom_file);

    if let Err(e) = system.load_rom(&args.rom_file) {
        error!("Failed to load ROM: {}", e);
        return Err(e);
    }

    info!("ROM loaded successfully");
    info!("Starting emulation...");

    let log_interval = (args.frames / 10).max(1); // Log ~10 times during execution
    let mut buzzing = false;

    for frame in 0..args.frames {
        if frame % log_interval == 0 && frame > 0 {
            info!(
                "Progress: {}/{} frames | PC: 0x{:03X} | Cycles: {}",
                frame,
                args.frames,
                system.pc(),
                system.cycles()
            );
        }

        let buzz = match system.run_frame(args.ipf) {
            Ok(buzz) => buzz,
            Err(e) => {
                error!("Error at PC=0x{:03X}: {}", system.pc(), e);
                error!("Frame: {}", frame);
                system.cpu().dump_registers();
                return Err(e);
            }
        };

        // Report sound edges rather than every buzzing frame
        if buzz != buzzing {
            buzzing = buzz;
            if buzzing {
                info!("Buzzer on");
            } else {
                info!("Buzzer off");
            }
        }

        if args.realtime {
            std::thread::sleep(Duration::from_micros(16_667));
        }
    }

    // Final status
    info!("Emulation completed successfully!");
    info!("Total frames: {}", args.frames);
    info!("Total cycles: {}", system.cycles());
    info!("Final PC: 0x{:03X}", system.pc());

    Ok(())
}
