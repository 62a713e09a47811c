// Copyright 2015 The Ramp Developers
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

#![crate_type = "lib"]
#![crate_name = "radixfact"]

extern crate log;
extern crate num_integer;
extern crate num_traits;
extern crate rand;
extern crate thiserror;

pub mod ll;

pub mod factorial;
pub mod int;

// Re-exports

pub use crate::factorial::{factorial, factorial_in_base};
pub use crate::int::BigInt;
pub use crate::int::Error;
pub use crate::int::RandomBigInt;
pub use crate::ll::digit::Digit;
