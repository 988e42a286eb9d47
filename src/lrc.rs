use crate::base::{Checksum8, Error, Result};
use log::trace;
use std::io;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Modbus longitudinal redundancy check: the two's complement of the sum (mod 2^8)
/// of all input bytes, as defined in Modbus over Serial Line, section 6.2.1.
///
/// The running state is the plain sum, the complement is only applied when the
/// checksum is read. The zero value is ready to use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lrc(u8);

impl Lrc {
    /// Creates a new `Lrc` instance, initialized to 0.
    #[inline]
    pub fn new() -> Lrc {
        Lrc(0)
    }

    /// Returns a copy of `buf` with the checksum appended as two upper case
    /// hexadecimal digits, high nibble first.
    ///
    /// This is the representation used by the Modbus ASCII transmission mode
    /// (Modbus over Serial Line, section 2.5.2). The accumulator is not changed.
    ///
    /// # Arguments
    ///
    /// * `buf` - The bytes to place in front of the hex digits.
    pub fn hex_sum(&self, buf: &[u8]) -> Vec<u8> {
        let sum = self.sum8();
        let mut out = Vec::with_capacity(buf.len() + 2);
        out.extend_from_slice(buf);
        out.push(HEX_DIGITS[usize::from(sum >> 4)]);
        out.push(HEX_DIGITS[usize::from(sum & 0x0F)]);
        out
    }
}

impl Checksum8 for Lrc {
    #[inline]
    fn write(&mut self, data: &[u8]) -> usize {
        for &d in data {
            self.0 = self.0.wrapping_add(d);
        }
        data.len()
    }

    #[inline]
    fn sum8(&self) -> u8 {
        self.0.wrapping_neg()
    }

    fn reset(&mut self) {
        trace!("Resetting LRC state (was {:02X})", self.0);
        self.0 = 0;
    }

    fn marshal(&self) -> [u8; 1] {
        [self.0]
    }

    fn unmarshal(&mut self, data: &[u8]) -> Result<()> {
        let &[state] = data else {
            trace!("Rejecting LRC state of {} bytes", data.len());
            return Err(Error::InvalidLength {
                expected: 1,
                actual: data.len(),
            });
        };
        self.0 = state;
        Ok(())
    }
}

impl io::Write for Lrc {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        trace!("Writing {} bytes to LRC sink", buf.len());
        Ok(Checksum8::write(self, buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl From<u8> for Lrc {
    fn from(state: u8) -> Lrc {
        Lrc(state)
    }
}

impl From<Lrc> for u8 {
    fn from(lrc: Lrc) -> u8 {
        lrc.0
    }
}
