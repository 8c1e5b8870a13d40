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
use proptest::prelude::*;

fn run_binary_op(word: u16, vx: u8, vy: u8) -> TestMachine {
    let mut machine = TestMachine::with_program(&[word]);
    machine.cpu.set_reg(((word >> 8) & 0xF) as u8, vx);
    machine.cpu.set_reg(((word >> 4) & 0xF) as u8, vy);
    machine.step().unwrap();
    machine
}

#[test]
fn test_add_imm_wraps_without_flag() {
    let mut machine = TestMachine::with_program(&[0x70FF]); // ADD V0, 0xFF
    machine.cpu.set_reg(0, 0x02);
    machine.cpu.set_reg(0xF, 0x55);
    machine.step().unwrap();

    assert_eq!(machine.cpu.reg(0), 0x01);
    // VF is not a carry flag for the immediate form
    assert_eq!(machine.cpu.reg(0xF), 0x55);
}

#[test]
fn test_add_reg_with_carry() {
    let machine = run_binary_op(0x8014, 0xFF, 0x01); // ADD V0, V1
    assert_eq!(machine.cpu.reg(0), 0x00);
    assert_eq!(machine.cpu.reg(0xF), 1);

    let machine = run_binary_op(0x8014, 0x10, 0x20);
    assert_eq!(machine.cpu.reg(0), 0x30);
    assert_eq!(machine.cpu.reg(0xF), 0);
}

#[test]
fn test_sub_no_borrow() {
    let machine = run_binary_op(0x8015, 0x30, 0x10); // SUB V0, V1
    assert_eq!(machine.cpu.reg(0), 0x20);
    assert_eq!(machine.cpu.reg(0xF), 1);
}

#[test]
fn test_sub_with_borrow() {
    let machine = run_binary_op(0x8015, 0x10, 0x30);
    assert_eq!(machine.cpu.reg(0), 0xE0);
    assert_eq!(machine.cpu.reg(0xF), 0);
}

#[test]
fn test_sub_equal_operands_sets_no_borrow() {
    let machine = run_binary_op(0x8015, 0x42, 0x42);
    assert_eq!(machine.cpu.reg(0), 0x00);
    assert_eq!(machine.cpu.reg(0xF), 1);
}

#[test]
fn test_subn_no_borrow() {
    let machine = run_binary_op(0x8017, 0x10, 0x30); // SUBN V0, V1
    assert_eq!(machine.cpu.reg(0), 0x20);
    assert_eq!(machine.cpu.reg(0xF), 1);
}

#[test]
fn test_subn_with_borrow() {
    let machine = run_binary_op(0x8017, 0x30, 0x10);
    assert_eq!(machine.cpu.reg(0), 0xE0);
    assert_eq!(machine.cpu.reg(0xF), 0);
}

#[test]
fn test_subn_equal_operands_sets_no_borrow() {
    let machine = run_binary_op(0x8017, 0x42, 0x42);
    assert_eq!(machine.cpu.reg(0), 0x00);
    assert_eq!(machine.cpu.reg(0xF), 1);
}

#[test]
fn test_shr_captures_low_bit() {
    let mut machine = TestMachine::with_program(&[0x8006]); // SHR V0
    machine.cpu.set_reg(0, 0b0000_0101);
    machine.step().unwrap();
    assert_eq!(machine.cpu.reg(0), 0b0000_0010);
    assert_eq!(machine.cpu.reg(0xF), 1);

    let mut machine = TestMachine::with_program(&[0x8006]);
    machine.cpu.set_reg(0, 0b0000_0100);
    machine.step().unwrap();
    assert_eq!(machine.cpu.reg(0), 0b0000_0010);
    assert_eq!(machine.cpu.reg(0xF), 0);
}

#[test]
fn test_shl_captures_high_bit() {
    let mut machine = TestMachine::with_program(&[0x800E]); // SHL V0
    machine.cpu.set_reg(0, 0b1010_0000);
    machine.step().unwrap();
    assert_eq!(machine.cpu.reg(0), 0b0100_0000);
    assert_eq!(machine.cpu.reg(0xF), 1);

    let mut machine = TestMachine::with_program(&[0x800E]);
    machine.cpu.set_reg(0, 0b0010_0000);
    machine.step().unwrap();
    assert_eq!(machine.cpu.reg(0), 0b0100_0000);
    assert_eq!(machine.cpu.reg(0xF), 0);
}

#[test]
fn test_or_and_xor() {
    let machine = run_binary_op(0x8011, 0b1100, 0b1010); // OR
    assert_eq!(machine.cpu.reg(0), 0b1110);

    let machine = run_binary_op(0x8012, 0b1100, 0b1010); // AND
    assert_eq!(machine.cpu.reg(0), 0b1000);

    let machine = run_binary_op(0x8013, 0b1100, 0b1010); // XOR
    assert_eq!(machine.cpu.reg(0), 0b0110);
}

proptest! {
    /// ADD Vx, Vy: result is (a+b) mod 256 and VF is 1 iff a+b >= 256
    #[test]
    fn prop_add_reg_carry(a: u8, b: u8) {
        let machine = run_binary_op(0x8014, a, b);
        prop_assert_eq!(machine.cpu.reg(0), a.wrapping_add(b));
        prop_assert_eq!(machine.cpu.reg(0xF), (a as u16 + b as u16 >= 256) as u8);
    }

    /// SUB/SUBN: VF=1 exactly when no borrow occurred
    #[test]
    fn prop_sub_flags(a: u8, b: u8) {
        let machine = run_binary_op(0x8015, a, b);
        prop_assert_eq!(machine.cpu.reg(0), a.wrapping_sub(b));
        prop_assert_eq!(machine.cpu.reg(0xF), (a >= b) as u8);

        let machine = run_binary_op(0x8017, a, b);
        prop_assert_eq!(machine.cpu.reg(0), b.wrapping_sub(a));
        prop_assert_eq!(machine.cpu.reg(0xF), (b >= a) as u8);
    }
}
