use crate::base::{Checksum8, Error, Result};
use log::trace;
use std::io;

/// Block check character (ISO 1155): the XOR of all input bytes.
///
/// The zero value is ready to use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bcc(u8);

impl Bcc {
    /// Creates a new `Bcc` instance, initialized to 0.
    #[inline]
    pub fn new() -> Bcc {
        Bcc(0)
    }
}

impl Checksum8 for Bcc {
    #[inline]
    fn write(&mut self, data: &[u8]) -> usize {
        for d in data {
            self.0 ^= d;
        }
        data.len()
    }

    /// XOR needs no final transform, the running state is the checksum.
    #[inline]
    fn sum8(&self) -> u8 {
        self.0
    }

    fn reset(&mut self) {
        trace!("Resetting BCC state (was {:02X})", self.0);
        self.0 = 0;
    }

    fn marshal(&self) -> [u8; 1] {
        [self.0]
    }

    fn unmarshal(&mut self, data: &[u8]) -> Result<()> {
        let &[state] = data else {
            trace!("Rejecting BCC state of {} bytes", data.len());
            return Err(Error::InvalidLength {
                expected: 1,
                actual: data.len(),
            });
        };
        self.0 = state;
        Ok(())
    }
}

impl io::Write for Bcc {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        trace!("Writing {} bytes to BCC sink", buf.len());
        Ok(Checksum8::write(self, buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl From<u8> for Bcc {
    fn from(state: u8) -> Bcc {
        Bcc(state)
    }
}

impl From<Bcc> for u8 {
    fn from(bcc: Bcc) -> u8 {
        bcc.0
    }
}
