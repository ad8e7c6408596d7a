use crate::constants::{SENSOR_ADDRESS, SENSOR_ADDRESS_ALT, STATUS_READ_ATTEMPTS};
use crate::Error;

/// Selects the I2C address of the sensor, set by the level of its ADDR pin.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
pub enum Address {
    /// ADDR pin tied low (0x44).
    #[default]
    Default,
    /// ADDR pin tied high (0x45).
    Alternate,
}

impl Address {
    /// Returns the 7-bit bus address.
    pub fn value(self) -> u8 {
        match self {
            Address::Default => SENSOR_ADDRESS,
            Address::Alternate => SENSOR_ADDRESS_ALT,
        }
    }
}

/// Measurement precision/noise trade-off of a single shot measurement.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
pub enum Repeatability {
    /// 0.10 %RH and 0.06 °C repeatability.
    #[default]
    High,
    /// 0.15 %RH and 0.12 °C repeatability.
    Medium,
    /// 0.25 %RH and 0.24 °C repeatability.
    Low,
}

/// Configuration settings for the SHT3x sensor.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Config {
    /// The bus address of the sensor.
    pub address: Address,
    /// The repeatability used by `Sht3x::read`.
    pub repeatability: Repeatability,
    attempts: u8,
}

impl Config {
    /// Creates a new `Config` instance.
    ///
    /// # Arguments
    ///
    /// * `address` - The `Address` of the sensor.
    /// * `repeatability` - The default `Repeatability` for measurements.
    ///
    /// # Returns
    ///
    /// A new `Config` instance with the default status read attempts.
    pub fn new(address: Address, repeatability: Repeatability) -> Config {
        Config {
            address,
            repeatability,
            attempts: STATUS_READ_ATTEMPTS,
        }
    }

    /// Sets the bus address for the configuration.
    pub fn address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    /// Sets the default repeatability for the configuration.
    pub fn repeatability(mut self, repeatability: Repeatability) -> Self {
        self.repeatability = repeatability;
        self
    }

    /// Sets how many command/read cycles a status register read may take.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` with the updated attempt count.
    /// * `Err(Error::InvalidArg)` if `attempts` is zero.
    pub fn status_attempts(mut self, attempts: u8) -> Result<Self, Error> {
        if attempts == 0 {
            log::error!("Status read attempts must be at least 1");
            return Err(Error::InvalidArg);
        }
        self.attempts = attempts;
        Ok(self)
    }

    /// Returns the configured number of status read attempts.
    pub fn attempts(&self) -> u8 {
        self.attempts
    }
}

/// Provides default configuration values for the SHT3x sensor.
impl Default for Config {
    /// Returns the default configuration.
    ///
    /// The default configuration uses address `0x44`, `High` repeatability and
    /// ten status read attempts.
    fn default() -> Config {
        Config::new(Address::default(), Repeatability::default())
    }
}
