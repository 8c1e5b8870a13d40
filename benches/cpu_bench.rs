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

use criterion::{criterion_group, criterion_main, Criterion};
use octo8::core::cpu::Cpu;
use octo8::core::display::Display;
use octo8::core::keyboard::Keyboard;
use octo8::core::memory::Memory;
use octo8::core::system::System;
use std::hint::black_box;

fn cpu_step_benchmark(c: &mut Criterion) {
    c.bench_function("cpu_step", |b| {
        let mut cpu = Cpu::with_seed(0);
        let mut memory = Memory::new();
        let mut display = Display::new();
        let mut keyboard = Keyboard::new();

        // ADD V0, 1 then jump back to it
        memory.load_program(&[0x70, 0x01, 0x12, 0x00]).unwrap();

        b.iter(|| {
            black_box(cpu.step(&mut memory, &mut display, &mut keyboard).unwrap());
        });
    });
}

fn cpu_register_access_benchmark(c: &mut Criterion) {
    c.bench_function("cpu_register_read", |b| {
        let cpu = Cpu::with_seed(0);
        b.iter(|| {
            for i in 0..16 {
                black_box(cpu.reg(i));
            }
        });
    });

    c.bench_function("cpu_register_write", |b| {
        let mut cpu = Cpu::with_seed(0);
        b.iter(|| {
            for i in 0..16 {
                cpu.set_reg(i, black_box(i.wrapping_mul(17)));
            }
        });
    });
}

fn sprite_draw_benchmark(c: &mut Criterion) {
    c.bench_function("display_draw_16_rows", |b| {
        let mut display = Display::new();
        let sprite = [0xAAu8; 15];
        b.iter(|| {
            black_box(display.draw(black_box(12), black_box(5), &sprite));
        });
    });
}

fn frame_benchmark(c: &mut Criterion) {
    c.bench_function("system_run_frame", |b| {
        let mut system = System::with_seed(0);
        // Tight arithmetic loop: ADD V0, 1; XOR V1, V0; JP 0x200
        system
            .load_rom_bytes(&[0x70, 0x01, 0x81, 0x03, 0x12, 0x00])
            .unwrap();

        b.iter(|| {
            black_box(system.run_frame(10).unwrap());
        });
    });
}

criterion_group!(
    benches,
    cpu_step_benchmark,
    cpu_register_access_benchmark,
    sprite_draw_benchmark,
    frame_benchmark
);
criterion_main!(benches);
