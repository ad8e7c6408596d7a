//! Conversion of validated raw samples to physical units.

const FULL_SCALE: f32 = 65535.0;

/// Temperature in °C: `175 * raw / 65535 - 45`.
pub fn temperature_celsius(raw: u16) -> f32 {
    175.0 * f32::from(raw) / FULL_SCALE - 45.0
}

/// Relative humidity in %: `100 * raw / 65535`.
pub fn humidity_percent(raw: u16) -> f32 {
    100.0 * f32::from(raw) / FULL_SCALE
}

pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    1.8 * celsius + 32.0
}
