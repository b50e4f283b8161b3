//! Fixed-capacity circular byte buffer backing the receive path.
//!
//! Holds unconsumed link bytes between reassembly passes. Look-ahead is
//! non-destructive ([`RingBuffer::peek`]); consuming is a separate cursor
//! advance ([`RingBuffer::seek`]), which is what makes the one-byte resync of
//! [`crate::reader::FrameReader`] cheap.

use core::cmp::min;

use crate::Error;

pub struct RingBuffer<const N: usize> {
    buf: [u8; N],
    head: usize,
    len: usize,
}

impl<const N: usize> RingBuffer<N> {
    pub const fn new() -> Self {
        Self {
            buf: [0u8; N],
            head: 0,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Appends `bytes` at the tail.
    ///
    /// A chunk that does not fit is rejected whole with
    /// [`Error::CapacityExceeded`]; buffered bytes are never overwritten.
    pub fn push(&mut self, bytes: &[u8]) -> Result<(), Error> {
        if bytes.len() > N - self.len {
            return Err(Error::CapacityExceeded);
        }
        let tail = (self.head + self.len) % N;
        let contiguous = min(bytes.len(), N - tail);
        self.buf[tail..tail + contiguous].copy_from_slice(&bytes[..contiguous]);
        self.buf[..bytes.len() - contiguous].copy_from_slice(&bytes[contiguous..]);
        self.len += bytes.len();
        Ok(())
    }

    /// Copies the oldest `out.len()` buffered bytes into `out` without
    /// consuming them.
    pub fn peek(&self, out: &mut [u8]) -> Result<(), Error> {
        if out.len() > self.len {
            return Err(Error::LengthNotSufficient);
        }
        let contiguous = min(out.len(), N - self.head);
        let rest = out.len() - contiguous;
        out[..contiguous].copy_from_slice(&self.buf[self.head..self.head + contiguous]);
        out[contiguous..].copy_from_slice(&self.buf[..rest]);
        Ok(())
    }

    /// Advances the read cursor by `count` bytes, discarding them.
    pub fn seek(&mut self, count: usize) -> Result<(), Error> {
        if count > self.len {
            return Err(Error::LengthNotSufficient);
        }
        self.head = (self.head + count) % N;
        self.len -= count;
        Ok(())
    }

    /// Resets the buffer to empty, used at transport re-initialization.
    pub fn flush(&mut self) {
        self.head = 0;
        self.len = 0;
    }
}

impl<const N: usize> Default for RingBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_peek_seek() {
        let mut rb = RingBuffer::<8>::new();
        assert!(rb.is_empty());
        rb.push(&[1, 2, 3, 4]).unwrap();
        assert_eq!(rb.len(), 4);

        let mut out = [0u8; 2];
        rb.peek(&mut out).unwrap();
        assert_eq!(out, [1, 2]);
        // peek does not consume
        assert_eq!(rb.len(), 4);

        rb.seek(2).unwrap();
        rb.peek(&mut out).unwrap();
        assert_eq!(out, [3, 4]);
        assert_eq!(rb.len(), 2);
    }

    #[test]
    fn test_wrap_around() {
        let mut rb = RingBuffer::<8>::new();
        rb.push(&[0, 1, 2, 3, 4, 5]).unwrap();
        rb.seek(5).unwrap();
        // tail wraps: 5 buffered across the physical end
        rb.push(&[6, 7, 8, 9]).unwrap();
        let mut out = [0u8; 5];
        rb.peek(&mut out).unwrap();
        assert_eq!(out, [5, 6, 7, 8, 9]);
        rb.seek(5).unwrap();
        assert!(rb.is_empty());
    }

    #[test]
    fn test_peek_mostly_in_wrapped_segment() {
        let mut rb = RingBuffer::<8>::new();
        rb.push(&[0, 1, 2, 3, 4, 5, 6]).unwrap();
        rb.seek(7).unwrap();
        // head at 7: one byte before the physical end, five after the wrap
        rb.push(&[10, 11, 12, 13, 14, 15]).unwrap();
        let mut out = [0u8; 6];
        rb.peek(&mut out).unwrap();
        assert_eq!(out, [10, 11, 12, 13, 14, 15]);
    }

    #[test]
    fn test_push_beyond_capacity_is_rejected_whole() {
        let mut rb = RingBuffer::<8>::new();
        rb.push(&[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(rb.push(&[7, 8, 9]), Err(Error::CapacityExceeded));
        // previously buffered bytes stay intact
        assert_eq!(rb.len(), 6);
        let mut out = [0u8; 6];
        rb.peek(&mut out).unwrap();
        assert_eq!(out, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_peek_and_seek_beyond_length_fail() {
        let mut rb = RingBuffer::<8>::new();
        rb.push(&[1, 2]).unwrap();
        let mut out = [0u8; 3];
        assert_eq!(rb.peek(&mut out), Err(Error::LengthNotSufficient));
        assert_eq!(rb.seek(3), Err(Error::LengthNotSufficient));
        assert_eq!(rb.len(), 2);
    }

    #[test]
    fn test_fill_to_capacity() {
        let mut rb = RingBuffer::<4>::new();
        rb.push(&[1, 2, 3, 4]).unwrap();
        assert_eq!(rb.len(), rb.capacity());
        assert_eq!(rb.push(&[5]), Err(Error::CapacityExceeded));
        rb.seek(1).unwrap();
        rb.push(&[5]).unwrap();
        let mut out = [0u8; 4];
        rb.peek(&mut out).unwrap();
        assert_eq!(out, [2, 3, 4, 5]);
    }

    #[test]
    fn test_flush() {
        let mut rb = RingBuffer::<8>::new();
        rb.push(&[1, 2, 3]).unwrap();
        rb.flush();
        assert!(rb.is_empty());
        rb.push(&[9; 8]).unwrap();
        assert_eq!(rb.len(), 8);
    }
}
