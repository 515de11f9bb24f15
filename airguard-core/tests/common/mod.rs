//! Common test utilities for integration tests
//!
//! This module provides:
//! - Input builders that panic on invalid fixtures
//! - Pre-built room scenarios with expected outcomes
//! - Proptest strategies covering the full accepted input ranges

#![allow(dead_code)]

use airguard_core::{
    constants::ranges::{
        HEART_RATE_MAX_BPM, HEART_RATE_MIN_BPM, RESPIRATION_RATE_MAX, RESPIRATION_RATE_MIN,
        ROOM_DIMENSION_MAX_FT, ROOM_DIMENSION_MIN_FT, SPO2_MAX_PCT, SPO2_MIN_PCT,
    },
    HealthReading, Inputs, RoomGeometry,
};
use proptest::prelude::*;

pub mod scenarios;

/// Build a health reading from known-good values
pub fn health(respiration_rate: u32, heart_rate: u32, spo2: u32) -> HealthReading {
    HealthReading::new(respiration_rate, heart_rate, spo2).expect("fixture health reading in range")
}

/// Build inputs from known-good values
pub fn inputs(length_ft: u32, width_ft: u32, people: u32, reading: HealthReading) -> Inputs {
    let room = RoomGeometry::new(length_ft, width_ft).expect("fixture room in range");
    Inputs::new(room, people, reading).expect("fixture head count in range")
}

/// Any health reading the sliders can produce
pub fn any_health() -> impl Strategy<Value = HealthReading> {
    (
        RESPIRATION_RATE_MIN..=RESPIRATION_RATE_MAX,
        HEART_RATE_MIN_BPM..=HEART_RATE_MAX_BPM,
        SPO2_MIN_PCT..=SPO2_MAX_PCT,
    )
        .prop_map(|(rr, hr, spo2)| HealthReading { respiration_rate: rr, heart_rate: hr, spo2 })
}

/// Health readings with every value in its normal band
pub fn normal_health() -> impl Strategy<Value = HealthReading> {
    (RESPIRATION_RATE_MIN..=18u32, 62u32..=99, 95u32..=SPO2_MAX_PCT)
        .prop_map(|(rr, hr, spo2)| HealthReading { respiration_rate: rr, heart_rate: hr, spo2 })
}

/// Any room the dimension inputs can produce
pub fn any_room() -> impl Strategy<Value = RoomGeometry> {
    (
        ROOM_DIMENSION_MIN_FT..=ROOM_DIMENSION_MAX_FT,
        ROOM_DIMENSION_MIN_FT..=ROOM_DIMENSION_MAX_FT,
    )
        .prop_map(|(length_ft, width_ft)| RoomGeometry { length_ft, width_ft })
}
