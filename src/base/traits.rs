use crate::base::error::Result;

/// Defines the behavior shared by the single-byte checksum accumulators.
///
/// An accumulator folds every byte written to it into one byte of running state.
/// The checksum can be read at any point without disturbing that state, and the
/// state itself can be saved and restored to resume a computation later.
pub trait Checksum8 {
    /// Folds all bytes of `data` into the running state, in order.
    ///
    /// Returns the number of bytes consumed, which is always `data.len()`.
    fn write(&mut self, data: &[u8]) -> usize;

    /// Returns the checksum of everything written since creation or the last reset.
    fn sum8(&self) -> u8;

    /// Returns the accumulator to its initial, zeroed state.
    fn reset(&mut self);

    /// Serializes the raw running state.
    fn marshal(&self) -> [u8; 1];

    /// Restores the raw running state from a buffer produced by `marshal`.
    ///
    /// Fails with `Error::InvalidLength` unless `data` holds exactly one byte.
    /// The state is only replaced when this returns `Ok`.
    ///
    /// # Arguments
    ///
    /// * `data` - The serialized state.
    fn unmarshal(&mut self, data: &[u8]) -> Result<()>;

    /// The natural processing unit in bytes.
    fn block_size(&self) -> usize {
        1
    }

    /// The checksum size in bytes.
    fn digest_size(&self) -> usize {
        1
    }

    /// Returns a copy of `buf` with the checksum byte appended.
    ///
    /// # Arguments
    ///
    /// * `buf` - The bytes to place in front of the checksum.
    fn sum(&self, buf: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(buf.len() + self.digest_size());
        out.extend_from_slice(buf);
        out.push(self.sum8());
        out
    }

    /// Computes the checksum of a complete message in one pass.
    fn checksum(data: &[u8]) -> u8
    where
        Self: Default + Sized,
    {
        let mut acc = Self::default();
        acc.write(data);
        acc.sum8()
    }
}
