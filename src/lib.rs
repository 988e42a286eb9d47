//! # LRC
//!
//! `lrc` implements two single-byte checksums that are both known as the
//! Longitudinal Redundancy Check, as used to detect transmission errors on serial lines.
//!
//! * [`Bcc`], the block check character of ISO 1155, is the XOR of all input bytes.
//! * [`Lrc`], the Modbus variant (Modbus over Serial Line, section 6.2.1), is the
//!   two's complement of the arithmetic sum (mod 2^8) of all input bytes.
//!
//! Both are streaming accumulators behind the [`Checksum8`] trait: bytes can be
//! written in any number of pieces, the checksum can be read at any time, and the
//! one-byte running state can be saved with `marshal` and restored with `unmarshal`
//! to resume a computation later.
//!
//! ```
//! use lrc::{Checksum8, Lrc};
//!
//! let mut lrc = Lrc::new();
//! lrc.write(b"Hello, ");
//! lrc.write(b"world!");
//! assert_eq!(lrc.sum8(), 0x77);
//! assert_eq!(lrc.hex_sum(b""), b"77");
//! ```
//!
//! Both types also implement [`std::io::Write`], so they can sit at the end of
//! `io::copy` or any writer-generic encoder. `Checksum8::write` and `io::Write::write`
//! share a name: with both traits imported, a plain `acc.write(..)` is ambiguous and
//! the call has to name its trait.
//!
//! ```
//! use lrc::{Bcc, Checksum8};
//! use std::io::{self, Write};
//!
//! let mut bcc = Bcc::new();
//! Checksum8::write(&mut bcc, b"Hello, ");
//! bcc.write_all(b"world!")?;
//! io::copy(&mut &b""[..], &mut bcc)?;
//! assert_eq!(bcc.sum8(), 0x0D);
//! # Ok::<(), io::Error>(())
//! ```

extern crate log;

pub mod base;
mod bcc;
mod lrc;

pub use crate::base::{Checksum8, Error, Result};
pub use crate::bcc::Bcc;
pub use crate::lrc::Lrc;

#[cfg(test)]
mod tests {
    use crate::{Bcc, Checksum8, Lrc};

    fn checkpoint(acc: &mut dyn Checksum8, fresh: &mut dyn Checksum8) -> u8 {
        acc.write(b"Hello, ");
        fresh.unmarshal(&acc.marshal()).unwrap();
        fresh.write(b"world!");
        fresh.sum8()
    }

    #[test]
    fn checksum_trait_objects() {
        assert_eq!(checkpoint(&mut Bcc::new(), &mut Bcc::new()), 0x0D);
        assert_eq!(checkpoint(&mut Lrc::new(), &mut Lrc::new()), 0x77);

        let mut accumulators: Vec<Box<dyn Checksum8>> =
            vec![Box::new(Bcc::new()), Box::new(Lrc::new())];
        for acc in accumulators.iter_mut() {
            acc.write(b"Hello, world!");
            assert_ne!(acc.sum8(), 0);
            acc.reset();
            assert_eq!(acc.sum8(), 0);
            assert_eq!(acc.sum(b"x"), b"x\0");
        }
    }
}
