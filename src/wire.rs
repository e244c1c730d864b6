use crate::error::{Error, ErrorCode};

/// Internal decode interruption.
///
/// A short read is the defining non-error outcome of the incremental decode
/// contract, so the cursor's error channel carries it alongside definitive
/// failures; only the top-level entry point translates `Incomplete` into the
/// public [`crate::Decoded::Incomplete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Halt {
    /// The buffer ends before the current value is complete.
    Incomplete,
    /// The input can never decode, no matter how many bytes arrive.
    Failed(Error),
}

impl From<Error> for Halt {
    fn from(err: Error) -> Self {
        Self::Failed(err)
    }
}

/// Positioned reader over an input buffer.
#[derive(Clone, Copy)]
pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) const fn position(&self) -> usize {
        self.pos
    }

    /// The not-yet-consumed tail of the input.
    pub(crate) fn rest(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    pub(crate) fn take_u8(&mut self) -> Result<u8, Halt> {
        let b = *self.data.get(self.pos).ok_or(Halt::Incomplete)?;
        self.pos += 1;
        Ok(b)
    }

    pub(crate) fn take(&mut self, n: usize) -> Result<&'a [u8], Halt> {
        let off = self.pos;
        let end = self
            .pos
            .checked_add(n)
            .ok_or(Halt::Failed(Error::decode(ErrorCode::LengthOverflow, off)))?;
        if end > self.data.len() {
            return Err(Halt::Incomplete);
        }
        let s = &self.data[self.pos..end];
        self.pos = end;
        Ok(s)
    }

    pub(crate) fn take_be_u16(&mut self) -> Result<u16, Halt> {
        let s = self.take(2)?;
        Ok(u16::from_be_bytes([s[0], s[1]]))
    }

    pub(crate) fn take_be_u32(&mut self) -> Result<u32, Halt> {
        let s = self.take(4)?;
        Ok(u32::from_be_bytes([s[0], s[1], s[2], s[3]]))
    }

    pub(crate) fn take_be_u64(&mut self) -> Result<u64, Halt> {
        let s = self.take(8)?;
        Ok(u64::from_be_bytes([
            s[0], s[1], s[2], s[3], s[4], s[5], s[6], s[7],
        ]))
    }

    pub(crate) fn take_be_i8(&mut self) -> Result<i8, Halt> {
        Ok(i8::from_be_bytes([self.take_u8()?]))
    }

    pub(crate) fn take_be_i16(&mut self) -> Result<i16, Halt> {
        let s = self.take(2)?;
        Ok(i16::from_be_bytes([s[0], s[1]]))
    }

    pub(crate) fn take_be_i32(&mut self) -> Result<i32, Halt> {
        let s = self.take(4)?;
        Ok(i32::from_be_bytes([s[0], s[1], s[2], s[3]]))
    }

    pub(crate) fn take_be_i64(&mut self) -> Result<i64, Halt> {
        let s = self.take(8)?;
        Ok(i64::from_be_bytes([
            s[0], s[1], s[2], s[3], s[4], s[5], s[6], s[7],
        ]))
    }
}
