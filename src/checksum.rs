//! CRC-8 used by the sensor to protect every 16-bit word it sends.
//!
//! Polynomial 0x31 (x^8 + x^5 + x^4 + 1), initial value 0xFF, MSB first,
//! no reflection and no final XOR.

use crc::{Crc, CRC_8_NRSC_5};

use crate::Error;

// NRSC-5 shares the sensor's parameters: poly 0x31, init 0xFF, xorout 0x00.
const CRC: Crc<u8> = Crc::<u8>::new(&CRC_8_NRSC_5);

/// Computes the checksum of two data bytes.
pub fn crc8(data: [u8; 2]) -> u8 {
    CRC.checksum(&data)
}

/// Two data bytes followed by their checksum, as sent for one 16-bit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triplet {
    pub data: [u8; 2],
    pub checksum: u8,
}

impl Triplet {
    pub fn new(frame: [u8; 3]) -> Self {
        Triplet {
            data: [frame[0], frame[1]],
            checksum: frame[2],
        }
    }

    /// Splits a 6-byte response into its two triplets, in wire order.
    pub fn pair(buffer: &[u8; 6]) -> (Triplet, Triplet) {
        (
            Triplet::new([buffer[0], buffer[1], buffer[2]]),
            Triplet::new([buffer[3], buffer[4], buffer[5]]),
        )
    }

    pub fn is_valid(&self) -> bool {
        crc8(self.data) == self.checksum
    }

    /// The big-endian 16-bit value, without checking the checksum.
    pub fn value(&self) -> u16 {
        u16::from_be_bytes(self.data)
    }

    /// Returns the 16-bit value if the checksum matches.
    pub fn validated(&self) -> Result<u16, Error> {
        let expected = crc8(self.data);
        if expected != self.checksum {
            log::warn!(
                "Bad checksum: Calculated {:02X}, Received {:02X}. Data: {:02X?}",
                expected,
                self.checksum,
                self.data
            );
            return Err(Error::ChecksumMismatch {
                expected,
                received: self.checksum,
            });
        }
        Ok(self.value())
    }
}
