//! Calibrated measurement values and unit conversions
//!
//! [`Temperature`] and [`Humidity`] are immutable value types. Every
//! conversion produces a new value; converting to the unit already held
//! returns an equal value.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvalidArgument;

/// Offset between the Celsius and Kelvin scales.
const KELVIN_OFFSET: f64 = 273.15;

/// Round `value` to `places` decimal places, halves away from zero.
///
/// Machine epsilon is added before scaling so decimal literals that sit just
/// below a half in binary (such as `1.005`) round up like their decimal form.
/// Values too large to scale are returned unchanged; they have no fractional
/// digits at that precision anyway.
///
/// # Errors
///
/// Returns [`InvalidArgument`] if `places` is negative or `value` is NaN or
/// infinite.
pub fn round(value: f64, places: i32) -> Result<f64, InvalidArgument> {
    if places < 0 {
        return Err(InvalidArgument::NegativePrecision(places));
    }
    if !value.is_finite() {
        return Err(InvalidArgument::NonFinite);
    }

    let factor = libm::pow(10.0, places as f64);
    let scaled = (value + f64::EPSILON) * factor;
    if !scaled.is_finite() {
        return Ok(value);
    }

    Ok(libm::round(scaled) / factor)
}

/// Units a [`Temperature`] can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A temperature in one of the supported units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    value: f64,
    unit: TemperatureUnit,
}

impl Temperature {
    pub const fn new(value: f64, unit: TemperatureUnit) -> Self {
        Self { value, unit }
    }

    pub const fn celsius(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Celsius)
    }

    pub const fn fahrenheit(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Fahrenheit)
    }

    pub const fn kelvin(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Kelvin)
    }

    pub const fn value(&self) -> f64 {
        self.value
    }

    pub const fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    /// The value rounded to `places` decimal places (see [`round`]).
    pub fn rounded(&self, places: i32) -> Result<f64, InvalidArgument> {
        round(self.value, places)
    }

    pub fn to_celsius(&self) -> Self {
        let value = match self.unit {
            TemperatureUnit::Celsius => self.value,
            TemperatureUnit::Fahrenheit => ((self.value - 32.0) * 5.0) / 9.0,
            TemperatureUnit::Kelvin => self.value - KELVIN_OFFSET,
        };
        Self::celsius(value)
    }

    pub fn to_fahrenheit(&self) -> Self {
        let value = match self.unit {
            TemperatureUnit::Celsius => (self.value * 9.0) / 5.0 + 32.0,
            TemperatureUnit::Fahrenheit => self.value,
            TemperatureUnit::Kelvin => ((self.value - KELVIN_OFFSET) * 9.0) / 5.0 + 32.0,
        };
        Self::fahrenheit(value)
    }

    pub fn to_kelvin(&self) -> Self {
        let value = match self.unit {
            TemperatureUnit::Celsius => self.value + KELVIN_OFFSET,
            TemperatureUnit::Fahrenheit => ((self.value - 32.0) * 5.0) / 9.0 + KELVIN_OFFSET,
            TemperatureUnit::Kelvin => self.value,
        };
        Self::kelvin(value)
    }

    /// Convert to an arbitrary unit.
    pub fn to_unit(&self, unit: TemperatureUnit) -> Self {
        match unit {
            TemperatureUnit::Celsius => self.to_celsius(),
            TemperatureUnit::Fahrenheit => self.to_fahrenheit(),
            TemperatureUnit::Kelvin => self.to_kelvin(),
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Units a [`Humidity`] can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HumidityUnit {
    /// Relative humidity in percent
    Percent,
}

impl HumidityUnit {
    pub const fn symbol(self) -> &'static str {
        match self {
            HumidityUnit::Percent => "%",
        }
    }
}

impl fmt::Display for HumidityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A relative humidity reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Humidity {
    value: f64,
    unit: HumidityUnit,
}

impl Humidity {
    pub const fn percent(value: f64) -> Self {
        Self {
            value,
            unit: HumidityUnit::Percent,
        }
    }

    pub const fn value(&self) -> f64 {
        self.value
    }

    pub const fn unit(&self) -> HumidityUnit {
        self.unit
    }

    /// The value rounded to `places` decimal places (see [`round`]).
    pub fn rounded(&self, places: i32) -> Result<f64, InvalidArgument> {
        round(self.value, places)
    }
}

impl fmt::Display for Humidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    const SAMPLES_CELSIUS: [f64; 9] = [-273.15, -46.85, -40.0, -0.5, 0.0, 21.5, 37.0, 100.0, 128.87];

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < TOLERANCE, "{} != {}", a, b);
    }

    #[test]
    fn test_round_reference_table() {
        assert_eq!(round(2.345, 2), Ok(2.35));
        assert_eq!(round(-2.345, 2), Ok(-2.34));
        assert_eq!(round(1.005, 2), Ok(1.01));
        assert_eq!(round(1.25, 1), Ok(1.3));
        assert_eq!(round(24.689, 1), Ok(24.7));
        assert_eq!(round(2.5, 0), Ok(3.0));
        assert_eq!(round(-2.5, 0), Ok(-3.0));
        assert_eq!(round(0.0, 2), Ok(0.0));
    }

    #[test]
    fn test_round_rejects_non_finite() {
        assert_eq!(round(f64::NAN, 2), Err(InvalidArgument::NonFinite));
        assert_eq!(round(f64::INFINITY, 2), Err(InvalidArgument::NonFinite));
        assert_eq!(round(f64::NEG_INFINITY, 0), Err(InvalidArgument::NonFinite));
    }

    #[test]
    fn test_round_stays_finite_when_scaling_overflows() {
        assert_eq!(round(f64::MAX, 1), Ok(f64::MAX));
        assert_eq!(round(-f64::MAX, 2), Ok(-f64::MAX));
        assert_eq!(round(1e300, 10), Ok(1e300));
        assert_eq!(round(1.5, 400), Ok(1.5));
        assert_eq!(round(0.0, 400), Ok(0.0));
    }

    #[test]
    fn test_round_rejects_negative_places() {
        assert_eq!(round(1.0, -1), Err(InvalidArgument::NegativePrecision(-1)));
    }

    #[test]
    fn test_celsius_fahrenheit_known_points() {
        assert_close(Temperature::celsius(0.0).to_fahrenheit().value(), 32.0);
        assert_close(Temperature::celsius(100.0).to_fahrenheit().value(), 212.0);
        assert_close(Temperature::celsius(-40.0).to_fahrenheit().value(), -40.0);
        assert_close(Temperature::fahrenheit(77.0).to_celsius().value(), 25.0);
    }

    #[test]
    fn test_celsius_kelvin_known_points() {
        assert_close(Temperature::celsius(25.0).to_kelvin().value(), 298.15);
        assert_close(Temperature::kelvin(0.0).to_celsius().value(), -273.15);
        assert_close(Temperature::fahrenheit(32.0).to_kelvin().value(), 273.15);
    }

    #[test]
    fn test_kelvin_to_fahrenheit_keeps_fractional_offset() {
        let fahrenheit = Temperature::kelvin(298.15).to_fahrenheit();
        assert_eq!(fahrenheit.unit(), TemperatureUnit::Fahrenheit);
        assert_close(fahrenheit.value(), 77.0);
        assert_close(Temperature::kelvin(273.15).to_fahrenheit().value(), 32.0);
    }

    #[test]
    fn test_round_trips() {
        for c in SAMPLES_CELSIUS {
            let celsius = Temperature::celsius(c);

            assert_close(celsius.to_fahrenheit().to_celsius().value(), c);
            assert_close(celsius.to_kelvin().to_celsius().value(), c);
            assert_close(celsius.to_fahrenheit().to_kelvin().to_celsius().value(), c);
            assert_close(celsius.to_kelvin().to_fahrenheit().to_celsius().value(), c);

            let kelvin = celsius.to_kelvin();
            assert_close(kelvin.to_celsius().to_kelvin().value(), kelvin.value());
        }
    }

    #[test]
    fn test_identity_conversions() {
        let celsius = Temperature::celsius(21.5);
        let fahrenheit = Temperature::fahrenheit(70.7);
        let kelvin = Temperature::kelvin(294.65);

        assert_eq!(celsius.to_celsius(), celsius);
        assert_eq!(fahrenheit.to_fahrenheit(), fahrenheit);
        assert_eq!(kelvin.to_kelvin(), kelvin);
    }

    #[test]
    fn test_to_unit_dispatch() {
        let celsius = Temperature::celsius(10.0);
        assert_eq!(celsius.to_unit(TemperatureUnit::Kelvin).unit(), TemperatureUnit::Kelvin);
        assert_eq!(celsius.to_unit(TemperatureUnit::Fahrenheit), celsius.to_fahrenheit());
        assert_eq!(celsius.to_unit(TemperatureUnit::Celsius), celsius);
    }

    #[test]
    fn test_conversion_leaves_source_untouched() {
        let celsius = Temperature::celsius(20.0);
        let _ = celsius.to_kelvin();
        assert_eq!(celsius.value(), 20.0);
        assert_eq!(celsius.unit(), TemperatureUnit::Celsius);
    }

    #[test]
    fn test_rounded_values() {
        assert_eq!(Temperature::celsius(24.6864).rounded(1), Ok(24.7));
        assert_eq!(Humidity::percent(32.3377).rounded(2), Ok(32.34));
        assert_eq!(
            Humidity::percent(f64::NAN).rounded(1),
            Err(InvalidArgument::NonFinite)
        );
    }

    #[test]
    fn test_humidity_unit() {
        let humidity = Humidity::percent(54.8);
        assert_eq!(humidity.unit(), HumidityUnit::Percent);
        assert_eq!(humidity.value(), 54.8);
        assert_eq!(humidity, Humidity::percent(54.8));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Temperature::celsius(24.69)), "24.69 °C");
        assert_eq!(format!("{}", Temperature::kelvin(300.0)), "300 K");
        assert_eq!(format!("{}", TemperatureUnit::Fahrenheit), "°F");
        assert_eq!(format!("{}", Humidity::percent(32.3)), "32.3 %");
    }
}
