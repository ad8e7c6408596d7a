use core::fmt;

use crate::StatusRegister;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    WriteFailure,
    ReadFailure,
    InvalidArg,
    /// A triplet's checksum byte did not match the one computed over its data.
    ChecksumMismatch {
        expected: u8,
        received: u8,
    },
    /// Every status register read failed its checksum. `last` holds the
    /// unvalidated register decoded from the final attempt.
    RetryExhausted {
        attempts: u8,
        last: StatusRegister,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WriteFailure => f.write_str("failed to write to the sensor"),
            Error::ReadFailure => f.write_str("failed to read from the sensor"),
            Error::InvalidArg => f.write_str("invalid argument"),
            Error::ChecksumMismatch { expected, received } => write!(
                f,
                "bad checksum: calculated {:#04x}, received {:#04x}",
                expected, received
            ),
            Error::RetryExhausted { attempts, .. } => write!(
                f,
                "status register checksum failed {} times in a row",
                attempts
            ),
        }
    }
}
