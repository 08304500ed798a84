//! Regrouping of fixed-width values into a different fixed width.
//!
//! Bits are taken most significant first from each input value and
//! concatenated in input order, so the output stream carries exactly the
//! same bit sequence cut at different boundaries.

use std::iter::FusedIterator;

use crate::BaseXError;

/// Largest supported input or output width.
pub const MAX_WIDTH: u32 = 32;

#[inline]
fn mask(bits: u32) -> u64 {
    (1u64 << bits) - 1
}

fn check_width(width: u32) -> Result<u32, BaseXError> {
    if (1..=MAX_WIDTH).contains(&width) {
        Ok(width)
    } else {
        Err(BaseXError::InvalidBitWidth { width })
    }
}

/// Accumulates input bits and hands out `width`-bit symbols as soon as
/// enough bits are pending.
///
/// The packer never flushes on its own; call
/// [`flush_remainder`](Self::flush_remainder) once the input ends.
///
/// # Example
///
/// ```
/// use base_endecoder::BitPacker;
///
/// let mut packer = BitPacker::new(6).unwrap();
/// let mut out = Vec::new();
/// packer.consume(b'f' as u32, 8, |v| out.push(v)).unwrap();
/// assert_eq!(out, [0b011001]);
/// assert_eq!(packer.flush_remainder(), Some(0b100000));
/// assert_eq!(packer.flush_remainder(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitPacker {
    width: u32,
    pending: u64,
    count: u32,
}

impl BitPacker {
    /// Creates a packer that emits `width`-bit symbols.
    pub fn new(width: u32) -> Result<Self, BaseXError> {
        Ok(Self {
            width: check_width(width)?,
            pending: 0,
            count: 0,
        })
    }

    /// Output width in bits.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of bits consumed but not yet emitted.
    pub fn pending_bits(&self) -> u32 {
        self.count
    }

    /// Appends the low `input_width` bits of `value` and calls `emit` for
    /// every complete output symbol, in order. Higher bits of `value` are
    /// ignored.
    pub fn consume<F>(&mut self, value: u32, input_width: u32, mut emit: F) -> Result<(), BaseXError>
    where
        F: FnMut(u32),
    {
        self.push(value, check_width(input_width)?);
        while let Some(symbol) = self.pop() {
            emit(symbol);
        }
        Ok(())
    }

    /// Emits the pending bits as one last symbol, zero-filled on the right
    /// up to the output width. Returns `None` when nothing is pending.
    pub fn flush_remainder(&mut self) -> Option<u32> {
        if self.count == 0 {
            return None;
        }
        let symbol = (self.pending << (self.width - self.count)) & mask(self.width);
        self.clear();
        Some(symbol as u32)
    }

    /// Drops any pending bits.
    pub fn clear(&mut self) {
        self.pending = 0;
        self.count = 0;
    }

    // Callers drain with `pop` between pushes, so `count < width <= 32` here
    // and the buffer never holds more than 63 bits.
    #[inline]
    fn push(&mut self, value: u32, width: u32) {
        debug_assert!(self.count < self.width);
        self.pending = (self.pending << width) | (u64::from(value) & mask(width));
        self.count += width;
    }

    #[inline]
    fn pop(&mut self) -> Option<u32> {
        if self.count < self.width {
            return None;
        }
        self.count -= self.width;
        let symbol = (self.pending >> self.count) & mask(self.width);
        self.pending &= mask(self.count);
        Some(symbol as u32)
    }
}

/// What [`Repack`] does with bits left over when its input ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tail {
    /// Emit them as a final zero-filled symbol.
    Flush,
    /// Drop them.
    Discard,
}

/// Lazily regroups an iterator of `input_width`-bit values into
/// `output_width`-bit symbols.
///
/// # Example
///
/// ```
/// use base_endecoder::{Repack, Tail};
///
/// let bytes = [0xffu32, 0x00];
/// let sixes: Vec<u32> = Repack::new(bytes, 8, 6, Tail::Flush).unwrap().collect();
/// assert_eq!(sixes, [0b111111, 0b110000, 0b000000]);
/// ```
#[derive(Debug, Clone)]
pub struct Repack<I> {
    iter: I,
    input_width: u32,
    packer: BitPacker,
    tail: Tail,
    done: bool,
}

impl<I: Iterator<Item = u32>> Repack<I> {
    /// Regroups `values`, each holding `input_width` bits, into
    /// `output_width`-bit symbols.
    ///
    /// # Errors
    ///
    /// `InvalidBitWidth` when either width is outside 1..=[`MAX_WIDTH`].
    pub fn new<T>(values: T, input_width: u32, output_width: u32, tail: Tail) -> Result<Self, BaseXError>
    where
        T: IntoIterator<IntoIter = I>,
    {
        let input_width = check_width(input_width)?;
        Ok(Self::from_packer(values, input_width, BitPacker::new(output_width)?, tail))
    }

    /// Wraps an already validated packer; `input_width` must be in
    /// 1..=[`MAX_WIDTH`].
    pub(crate) fn from_packer<T>(values: T, input_width: u32, packer: BitPacker, tail: Tail) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        debug_assert!((1..=MAX_WIDTH).contains(&input_width));
        Self {
            iter: values.into_iter(),
            input_width,
            packer,
            tail,
            done: false,
        }
    }

    /// Symbols produced by `n` more input values, counting what is pending.
    fn symbols_for(&self, n: usize) -> Option<usize> {
        let bits = n
            .checked_mul(self.input_width as usize)?
            .checked_add(self.packer.count as usize)?;
        let width = self.packer.width as usize;
        let partial = self.tail == Tail::Flush && bits % width != 0;
        Some(bits / width + partial as usize)
    }
}

impl<I: Iterator<Item = u32>> Iterator for Repack<I> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        loop {
            if let Some(symbol) = self.packer.pop() {
                return Some(symbol);
            }
            if self.done {
                return None;
            }
            match self.iter.next() {
                Some(value) => self.packer.push(value, self.input_width),
                None => {
                    self.done = true;
                    return match self.tail {
                        Tail::Flush => self.packer.flush_remainder(),
                        Tail::Discard => {
                            self.packer.clear();
                            None
                        }
                    };
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        (
            self.symbols_for(lower).unwrap_or(usize::MAX),
            upper.and_then(|n| self.symbols_for(n)),
        )
    }
}

impl<I: Iterator<Item = u32>> FusedIterator for Repack<I> {}
