//! Conversion of raw SHT1x ticks to physical units.
//!
//! Coefficients are the datasheet values for 14-bit temperature and 12-bit
//! humidity readings at VDD = 5 V.

/// Temperature offset `d1` in degrees Celsius.
const D1: f64 = -40.0;
/// Temperature slope `d2` in degrees Celsius per tick.
const D2: f64 = 0.01;

/// Linear humidity coefficients for 12-bit readings.
const C1: f64 = -4.0;
const C2: f64 = 0.0405;
const C3: f64 = -2.8e-6;

/// Temperature compensation coefficients for 12-bit humidity readings.
const T1: f64 = 0.01;
const T2: f64 = 0.00008;

/// Physically meaningful humidity range; anything outside is clamped.
const HUMIDITY_MIN: f64 = 0.1;
const HUMIDITY_MAX: f64 = 100.0;

/// Converts raw temperature ticks to degrees Celsius.
pub fn temperature_celsius(raw: u16) -> f64 {
    f64::from(raw) * D2 + D1
}

/// Converts raw humidity ticks to relative humidity in percent, compensated
/// with the temperature measured in the same acquisition cycle.
///
/// The result is clamped to `[0.1, 100.0]`.
pub fn humidity_percent(raw_humi: u16, raw_temp: u16) -> f64 {
    let h = f64::from(raw_humi);
    let t_c = temperature_celsius(raw_temp);

    let rh_lin = C3 * h * h + C2 * h + C1;
    let rh_true = (t_c - 25.0) * (T1 + T2 * h) + rh_lin;

    rh_true.clamp(HUMIDITY_MIN, HUMIDITY_MAX)
}

/// Slack added before truncating to tenths, so that a value meant to be an
/// exact tenth but computed a hair below it (0.3999... for 0.4) is not cut
/// down to the previous tenth.
const TENTHS_EPSILON: f64 = 1e-9;

/// Temperature in tenths of a degree Celsius, rounded toward zero.
///
/// Computed on the ticks directly: one tick is 0.01 C, so this is exact.
pub fn temperature_tenths(raw: u16) -> i32 {
    (i32::from(raw) - 4000) / 10
}

/// Compensated relative humidity in tenths of a percent, rounded toward zero.
pub fn humidity_tenths(raw_humi: u16, raw_temp: u16) -> i32 {
    tenths(humidity_percent(raw_humi, raw_temp))
}

/// Drops everything past the first decimal digit, rounding toward zero
/// (25.34 becomes 25.3, -3.27 becomes -3.2).
pub fn truncate_tenths(value: f64) -> f64 {
    f64::from(tenths(value)) / 10.0
}

fn tenths(value: f64) -> i32 {
    let scaled = value * 10.0;
    if scaled < 0.0 {
        (scaled - TENTHS_EPSILON) as i32
    } else {
        (scaled + TENTHS_EPSILON) as i32
    }
}
