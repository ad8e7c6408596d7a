//! Decoding of the 16-bit status register.

const WRITE_CHECKSUM: u16 = 1 << 0;
const COMMAND: u16 = 1 << 1;
const SYSTEM_RESET: u16 = 1 << 4;
const TEMPERATURE_ALERT: u16 = 1 << 10;
const HUMIDITY_ALERT: u16 = 1 << 11;
const HEATER: u16 = 1 << 13;
const ALERT_PENDING: u16 = 1 << 15;

/// Bits 2-3, 5-9, 12 and 14 carry no documented meaning.
pub const RESERVED_MASK: u16 = 0b0101_0011_1110_1100;

/// A snapshot of the sensor's status register.
///
/// The raw value is kept whole so reserved bits survive; each flag is read
/// through its own mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusRegister(u16);

impl StatusRegister {
    pub fn new(raw: u16) -> Self {
        StatusRegister(raw)
    }

    /// Builds the register from the two data bytes of a response triplet.
    pub fn from_bytes(data: [u8; 2]) -> Self {
        StatusRegister(u16::from_be_bytes(data))
    }

    pub fn raw(&self) -> u16 {
        self.0
    }

    /// Checksum of the last write transfer failed.
    pub fn write_checksum_failed(&self) -> bool {
        self.0 & WRITE_CHECKSUM != 0
    }

    /// Last command was not processed (invalid or failed its checksum).
    pub fn command_failed(&self) -> bool {
        self.0 & COMMAND != 0
    }

    /// Reset (power-on, soft or hard) detected since the last clear.
    pub fn system_reset_detected(&self) -> bool {
        self.0 & SYSTEM_RESET != 0
    }

    pub fn temperature_alert(&self) -> bool {
        self.0 & TEMPERATURE_ALERT != 0
    }

    pub fn humidity_alert(&self) -> bool {
        self.0 & HUMIDITY_ALERT != 0
    }

    pub fn heater_on(&self) -> bool {
        self.0 & HEATER != 0
    }

    /// At least one alert is pending.
    pub fn alert_pending(&self) -> bool {
        self.0 & ALERT_PENDING != 0
    }

    pub fn reserved(&self) -> u16 {
        self.0 & RESERVED_MASK
    }
}
