//! SHT1x Sensor Driver for Embedded Rust
//!
//! This crate provides a platform-agnostic driver for the Sensirion SHT1x
//! (SHT10, SHT11, SHT15) temperature and humidity sensor, built on top of the
//! [`embedded-hal`] traits.
//!
//! The sensor uses Sensibus, a two-wire clock/data protocol that resembles
//! I2C but is not compatible with it. The driver bit-bangs it over two GPIO
//! pins.
//!
//! # Features
//! - Blocking synchronous API using `embedded-hal` traits
//! - Designed for `no_std` environments, no allocation
//! - Temperature compensated humidity in %RH
//! - Status register access, soft reset and interface recovery
//! - Optional logging support via `defmt`
//!
//! # Dependencies
//! This driver depends on the following `embedded-hal` traits:
//! - [`InputPin`] and [`OutputPin`] for the open-drain DATA line
//! - [`OutputPin`] for SCK
//! - [`DelayNs`] for bit timing and measurement polling
//!
//! # Usage
//!
//! ```ignore
//! let mut sht = Sht11::new(data_pin, sck_pin, delay);
//!
//! let acquisition = sht.read();
//! if acquisition.is_ok() {
//!     let reading = acquisition.reading;
//!     // reading.temperature, reading.relative_humidity
//! } else {
//!     sht.connection_reset()?;
//! }
//! ```
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` and emits log messages through `defmt`
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`InputPin`]: embedded_hal::digital::InputPin
//! [`OutputPin`]: embedded_hal::digital::OutputPin
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod calibration;
pub mod command;
pub mod error;
pub mod sht11;
pub mod status;


pub use command::{Command, MeasurementKind};
pub use error::Error;
pub use sht11::{Acquisition, RawMeasurement, Reading, Sht11};
pub use status::StatusRegister;
