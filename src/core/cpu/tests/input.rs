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

use super::helpers::TestMachine;

#[test]
fn test_skp_skips_when_key_held() {
    let mut machine = TestMachine::with_program(&[0xE09E]); // SKP V0
    machine.cpu.set_reg(0, 0x5);
    machine.keyboard.set_pressed(0x5);
    machine.step().unwrap();
    assert_eq!(machine.cpu.pc, 0x204);

    let mut machine = TestMachine::with_program(&[0xE09E]);
    machine.cpu.set_reg(0, 0x5);
    machine.step().unwrap();
    assert_eq!(machine.cpu.pc, 0x202);
}

#[test]
fn test_sknp_skips_when_key_up() {
    let mut machine = TestMachine::with_program(&[0xE0A1]); // SKNP V0
    machine.cpu.set_reg(0, 0x5);
    machine.step().unwrap();
    assert_eq!(machine.cpu.pc, 0x204);

    let mut machine = TestMachine::with_program(&[0xE0A1]);
    machine.cpu.set_reg(0, 0x5);
    machine.keyboard.set_pressed(0x5);
    machine.step().unwrap();
    assert_eq!(machine.cpu.pc, 0x202);
}

#[test]
fn test_wait_key_freezes_pc_until_key_down() {
    let mut machine = TestMachine::with_program(&[0xF30A]); // LD V3, K
    machine.step().unwrap();

    // Suspended: PC rewound over the instruction, no fetch happens
    assert!(machine.cpu.is_awaiting_key());
    assert_eq!(machine.cpu.pc, 0x200);

    machine.step().unwrap();
    machine.step().unwrap();
    assert_eq!(machine.cpu.pc, 0x200);

    // A key-down resumes execution and stores the key
    machine.keyboard.set_pressed(0xB);
    machine.step().unwrap();

    assert!(!machine.cpu.is_awaiting_key());
    assert_eq!(machine.cpu.reg(3), 0xB);
    assert_eq!(machine.cpu.pc, 0x202);
}

#[test]
fn test_wait_key_takes_pending_press_immediately() {
    let mut machine = TestMachine::with_program(&[0xF00A]); // LD V0, K
    machine.keyboard.set_pressed(0x7);
    machine.step().unwrap();

    assert!(!machine.cpu.is_awaiting_key());
    assert_eq!(machine.cpu.reg(0), 0x7);
    assert_eq!(machine.cpu.pc, 0x202);
}

#[test]
fn test_wait_key_ignores_held_key_without_new_press() {
    let mut machine = TestMachine::with_program(&[0xF00A]);
    machine.keyboard.set_pressed(0x7);
    // The press latch is consumed before the wait starts
    assert_eq!(machine.keyboard.poll_for_press(), Some(0x7));

    machine.step().unwrap();
    assert!(machine.cpu.is_awaiting_key());

    // Only a fresh transition resumes, a key still held does not
    machine.step().unwrap();
    assert!(machine.cpu.is_awaiting_key());

    machine.keyboard.set_released(0x7);
    machine.keyboard.set_pressed(0x7);
    machine.step().unwrap();
    assert_eq!(machine.cpu.reg(0), 0x7);
}
