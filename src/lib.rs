// Copyright 2024 Cryolite
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Arithmetic-coding pipeline mapping observed mahjong tile permutations
//! onto verifiable random bits (or their Shannon entropy).
//!
//! A caller folds an observed prefix of a tile permutation into a
//! [`permutation_to_interval`] call, which yields an exact rational
//! [`Interval`] — the sub-interval of `[0, 1)` that arithmetic coding
//! assigns to every 136-tile permutation sharing that prefix. From there,
//! [`covering_binary_interval`] finds the tightest dyadic cover of that
//! interval at a chosen bit-width, and either [`interval_to_binary`] or
//! [`interval_to_entropy`] turns the cover into a sampled bit string or
//! its entropy. [`PaishanEncoder`] composes the whole pipeline behind a
//! single stateful session.
//!
//! Every intermediate value is an exact [`BigInt`]; nothing here rounds
//! until the very last step of [`BigInt::divide_as_double`].

pub mod bigint;
pub mod binary;
pub mod covering;
pub mod encoder;
pub mod entropy;
pub mod error;
pub mod interval;
pub mod permutation;
pub mod random;
pub mod tiles;

pub use bigint::BigInt;
pub use binary::{bits_to_bytes, interval_to_binary};
pub use covering::covering_binary_interval;
pub use encoder::PaishanEncoder;
pub use entropy::interval_to_entropy;
pub use error::{Error, Result};
pub use interval::Interval;
pub use permutation::permutation_to_interval;
pub use random::RandomState;
pub use tiles::{NUM_SLOTS, TILE_MULTIPLICITIES, TOTAL_TILES};
