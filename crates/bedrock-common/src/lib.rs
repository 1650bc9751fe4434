//! Canonical "no value" sentinels and numeric bounds.
//!
//! Everything here is a plain constant or a `Copy` value type. Consumers
//! decide whether something is absent by comparing against the published
//! constant, never by constructing a fresh null.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod bounds;
pub mod null;

pub use bounds::{
    DEG_TO_RAD, HALF_PI, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER, PI, RAD_TO_DEG, TWO_PI,
};
pub use null::{
    Date, DateTime, Time, NULL_DATE, NULL_DATETIME, NULL_TIME, NULL_TUID, NULL_UUID,
    TUID_EMPTY_CHAR, TUID_LENGTH,
};
