#![cfg_attr(not(test), no_std)]

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{Error as _, I2c};
use log::debug;

mod constants;
pub use constants::*;

mod error;
pub use error::*;

mod config;
pub use config::*;

mod command;
pub use command::*;

mod checksum;
pub use checksum::*;

mod status;
pub use status::*;

pub mod convert;

/// Represents an SHT3x humidity and temperature sensor.
///
/// This struct owns the bus handle and provides methods to take single shot
/// measurements, read the serial number and status register, and reset the
/// sensor.
///
/// # Type Parameters
///
/// * `I2C`: The type of the I2C bus used to communicate with the sensor.
///   It must implement `embedded_hal::i2c::I2c`.
pub struct Sht3x<I2C> {
    i2c: I2C,
    config: Config,
}

/// Represents a single temperature and humidity sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Temperature in °C.
    pub temperature_c: f32,
    /// Temperature in °F.
    pub temperature_f: f32,
    /// Relative humidity in %.
    pub humidity: f32,
}

impl Measurement {
    /// Builds a measurement from checksum-validated raw samples.
    pub fn from_raw(raw_temperature: u16, raw_humidity: u16) -> Self {
        let temperature_c = convert::temperature_celsius(raw_temperature);
        Measurement {
            temperature_c,
            temperature_f: convert::celsius_to_fahrenheit(temperature_c),
            humidity: convert::humidity_percent(raw_humidity),
        }
    }
}

impl<I> Sht3x<I>
where
    I: I2c,
{
    /// Creates a new `Sht3x` sensor instance.
    ///
    /// # Arguments
    ///
    /// * `i2c`: The bus the sensor is attached to.
    /// * `config`: Address, default repeatability and status read attempts.
    pub fn new(i2c: I, config: Config) -> Self {
        Self { i2c, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gives the bus back.
    pub fn release(self) -> I {
        self.i2c
    }

    /// Takes a measurement at the configured repeatability.
    pub fn read<D: DelayNs>(&mut self, delay: &mut D) -> Result<Measurement, Error> {
        self.measure(delay, self.config.repeatability)
    }

    /// Takes a single shot temperature and humidity measurement.
    ///
    /// The sensor answers with two triplets, temperature first. Both must pass
    /// their checksum before anything is converted.
    ///
    /// # Returns
    ///
    /// * `Ok(Measurement)` with temperature in °C and °F and relative humidity.
    /// * `Err(Error::ChecksumMismatch)` if either triplet is corrupted.
    /// * `Err(Error::WriteFailure)` or `Err(Error::ReadFailure)` for bus issues.
    pub fn measure<D: DelayNs>(
        &mut self,
        delay: &mut D,
        repeatability: Repeatability,
    ) -> Result<Measurement, Error> {
        debug!("Measuring with {:?} repeatability", repeatability);
        let mut buffer = [0u8; 6];
        self.transaction(Command::Measure(repeatability), delay, &mut buffer)?;

        let (temperature, humidity) = Triplet::pair(&buffer);
        let raw_temperature = temperature.validated()?;
        let raw_humidity = humidity.validated()?;

        let measurement = Measurement::from_raw(raw_temperature, raw_humidity);
        debug!(
            "Measurement - T: {} C, RH: {} %",
            measurement.temperature_c, measurement.humidity
        );
        Ok(measurement)
    }

    /// Reads the 32-bit serial number.
    ///
    /// A serial number of `0` is returned as `Ok(0)`; checksum failures are
    /// reported as `Err(Error::ChecksumMismatch)`.
    pub fn serial_number<D: DelayNs>(&mut self, delay: &mut D) -> Result<u32, Error> {
        let mut buffer = [0u8; 6];
        self.transaction(Command::ReadSerialNumber, delay, &mut buffer)?;

        let (high, low) = Triplet::pair(&buffer);
        let serial = (u32::from(high.validated()?) << 16) | u32::from(low.validated()?);
        debug!("Serial number: {:08X}", serial);
        Ok(serial)
    }

    /// Reads the status register, repeating the command/read cycle until the
    /// checksum validates or the configured attempts run out.
    ///
    /// # Returns
    ///
    /// * `Ok(StatusRegister)` from the first attempt whose checksum matched.
    /// * `Err(Error::RetryExhausted)` carrying the last, unvalidated register.
    /// * `Err(Error::WriteFailure)` or `Err(Error::ReadFailure)` for bus issues,
    ///   which are not retried.
    pub fn status<D: DelayNs>(&mut self, delay: &mut D) -> Result<StatusRegister, Error> {
        let attempts = self.config.attempts();
        let mut last = StatusRegister::default();

        for attempt in 1..=attempts {
            let mut buffer = [0u8; 3];
            self.transaction(Command::ReadStatusRegister, delay, &mut buffer)?;

            let triplet = Triplet::new(buffer);
            last = StatusRegister::from_bytes(triplet.data);
            if triplet.validated().is_ok() {
                debug!("Status register: {:04X} (attempt {})", last.raw(), attempt);
                return Ok(last);
            }
            debug!("Status register attempt {}/{} failed", attempt, attempts);
        }

        log::error!(
            "Failed to read a valid status register after {} attempts",
            attempts
        );
        Err(Error::RetryExhausted { attempts, last })
    }

    /// Issues a soft reset, then reads back the status register.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` if the status register reports the last command as processed.
    /// * `Ok(false)` if its command status bit is set.
    /// * `Err(Error)` if the status register could not be read.
    pub fn soft_reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<bool, Error> {
        self.send(Command::SoftReset, delay)?;
        let status = self.status(delay).map_err(|e| {
            log::error!("Failed to read status after soft reset: {:?}", e);
            e
        })?;
        Ok(!status.command_failed())
    }

    // Writes the command frame and waits for the sensor to process it.
    fn send<D: DelayNs>(&mut self, command: Command, delay: &mut D) -> Result<(), Error> {
        let frame = command.to_bytes();
        debug!("Executing command {:?}: {:02X?}", command, frame);
        self.i2c
            .write(self.config.address.value(), &frame)
            .map_err(|e| {
                log::error!("I2C write of {:?} failed: {:?}", command, e.kind());
                Error::WriteFailure
            })?;
        delay.delay_ms(command.settle_delay_ms());
        Ok(())
    }

    // One full command, settle, read cycle.
    fn transaction<D: DelayNs>(
        &mut self,
        command: Command,
        delay: &mut D,
        buffer: &mut [u8],
    ) -> Result<(), Error> {
        debug_assert_eq!(buffer.len(), command.response_len());
        self.send(command, delay)?;
        self.i2c
            .read(self.config.address.value(), buffer)
            .map_err(|e| {
                log::error!("I2C read for {:?} failed: {:?}", command, e.kind());
                Error::ReadFailure
            })?;
        debug!("Received: {:02X?}", buffer);
        Ok(())
    }
}
