use crate::config::Repeatability;
use crate::constants::*;

/// The sensor operations this driver issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Single shot temperature and humidity measurement.
    Measure(Repeatability),
    ReadSerialNumber,
    ReadStatusRegister,
    SoftReset,
}

impl Command {
    pub fn opcode(self) -> u16 {
        match self {
            Command::Measure(Repeatability::High) => CMD_MEASURE_HIGH,
            Command::Measure(Repeatability::Medium) => CMD_MEASURE_MEDIUM,
            Command::Measure(Repeatability::Low) => CMD_MEASURE_LOW,
            Command::ReadSerialNumber => CMD_READ_SERIAL_NUMBER,
            Command::ReadStatusRegister => CMD_READ_STATUS_REGISTER,
            Command::SoftReset => CMD_SOFT_RESET,
        }
    }

    /// The wire frame, high byte first.
    pub fn to_bytes(self) -> [u8; 2] {
        self.opcode().to_be_bytes()
    }

    /// Time the sensor needs between receiving the command and answering it.
    pub fn settle_delay_ms(self) -> u32 {
        match self {
            Command::Measure(_) => MEASUREMENT_DELAY_MS,
            _ => COMMAND_DELAY_MS,
        }
    }

    /// Number of bytes the sensor answers with.
    pub fn response_len(self) -> usize {
        match self {
            Command::Measure(_) | Command::ReadSerialNumber => 6,
            Command::ReadStatusRegister => 3,
            Command::SoftReset => 0,
        }
    }
}
