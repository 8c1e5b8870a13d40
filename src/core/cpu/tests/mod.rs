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

//! CPU test modules
//!
//! Tests are organized into the following categories:
//! - `basic`: initialization, reset, register access, fetch/PC handling
//! - `arithmetic`: ADD/SUB/SUBN/SHR/SHL/RND flag and wrap semantics
//! - `branch`: jumps, calls, returns, skips, stack bound
//! - `load`: register/index loads, BCD, bulk store/load
//! - `video`: CLS and DRW through the framebuffer
//! - `input`: key skips and the FX0A key-wait state machine
//! - `timers`: countdown behavior and the buzz signal

mod helpers;


#[cfg(test)]
mod arithmetic;




#[cfg(test)]
mod input;
