//! A fixed-size rectangular bitboard implementation using const generics.
//!
//! The type is `no_std` friendly and avoids heap allocations. Boards are
//! represented as a `W×H` grid packed into an unsigned integer `T`, with
//! cell `(x, y)` stored at bit `y * W + x`.

use core::ops::{BitAnd, BitOr, Not};
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested board size W*H exceeds capacity of `T::BITS`.
    SizeTooLarge { cells: usize, capacity: usize },
    /// Coordinate is outside [0..W)×[0..H).
    IndexOutOfBounds { x: usize, y: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { cells, capacity } => {
                write!(f, "SizeTooLarge: W*H={} exceeds T::BITS={}", cells, capacity)
            }
            BitBoardError::IndexOutOfBounds { x, y } => {
                write!(f, "IndexOutOfBounds: x={}, y={}", x, y)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}

/// A fixed-size W×H bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const W: usize, const H: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const W: usize, const H: usize> BitBoard<T, W, H>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of usable bits in the board (`W * H`).
    const BOARD_BITS: usize = W * H;

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS >= mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    /// Bits of a single column.
    fn column(x: usize) -> T {
        (0..H).fold(T::zero(), |acc, y| acc | (T::one() << (y * W + x)))
    }

    /// Create a new empty bitboard (all bits cleared) without size check.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if W*H > T::BITS.
    pub fn try_new() -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::BOARD_BITS > capacity {
            Err(BitBoardError::SizeTooLarge {
                cells: Self::BOARD_BITS,
                capacity,
            })
        } else {
            Ok(BitBoard { bits: T::zero() })
        }
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Gets the bit at (x, y).
    pub fn get(&self, x: usize, y: usize) -> Result<bool, BitBoardError> {
        self.check_bounds(x, y)?;
        Ok(self.contains_index(y * W + x))
    }

    /// Sets the bit at (x, y) to 1.
    pub fn set(&mut self, x: usize, y: usize) -> Result<(), BitBoardError> {
        self.check_bounds(x, y)?;
        self.insert_index(y * W + x);
        Ok(())
    }

    /// Clears the bit at (x, y) to 0.
    pub fn clear(&mut self, x: usize, y: usize) -> Result<(), BitBoardError> {
        self.check_bounds(x, y)?;
        self.remove_index(y * W + x);
        Ok(())
    }

    /// Whether the bit at a linear index is set. Indices past the board read as unset.
    #[inline]
    pub fn contains_index(&self, idx: usize) -> bool {
        idx < Self::BOARD_BITS && ((self.bits >> idx) & T::one()) != T::zero()
    }

    /// Sets the bit at a linear index; indices past the board are ignored.
    #[inline]
    pub fn insert_index(&mut self, idx: usize) {
        if idx < Self::BOARD_BITS {
            self.bits = self.bits | (T::one() << idx);
        }
    }

    /// Clears the bit at a linear index; indices past the board are ignored.
    #[inline]
    pub fn remove_index(&mut self, idx: usize) {
        if idx < Self::BOARD_BITS {
            self.bits = self.bits & !(T::one() << idx);
        }
    }

    #[inline]
    fn check_bounds(&self, x: usize, y: usize) -> Result<(), BitBoardError> {
        if x >= W || y >= H {
            Err(BitBoardError::IndexOutOfBounds { x, y })
        } else {
            Ok(())
        }
    }

    /// Cells orthogonally adjacent to any set bit, excluding the set bits
    /// themselves. Neighbours never wrap across rows or past the board edge.
    pub fn neighbors(&self) -> Self {
        let bits = self.bits;
        let first = Self::column(0);
        let last = Self::column(W - 1);
        let east = (bits & !last) << 1usize;
        let west = (bits & !first) >> 1usize;
        let (south, north) = if H > 1 {
            (bits << W, bits >> W)
        } else {
            (T::zero(), T::zero())
        };
        Self::from_raw((east | west | south | north) & !bits)
    }

    /// Consumes the board and returns the raw integer.
    #[inline]
    pub fn into_raw(self) -> T {
        self.bits
    }

    /// Creates a bitboard from the raw integer, masking out upper bits.
    #[inline]
    pub fn from_raw(raw: T) -> Self {
        BitBoard {
            bits: raw & Self::mask(),
        }
    }

    /// Creates a bitboard from an iterator over `(x, y)` positions.
    #[inline]
    pub fn from_iter<I>(iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::new();
        for (x, y) in iter {
            board.set(x, y)?;
        }
        Ok(board)
    }

    /// Iterator over the set bits of the board, row by row.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T, W, H> {
        SetBits {
            board: self,
            idx: 0,
        }
    }
}

impl<T, const W: usize, const H: usize> Default for BitBoard<T, W, H>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const W: usize, const H: usize> fmt::Debug for BitBoard<T, W, H>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}, {}, {}>:", any::type_name::<T>(), W, H)?;
        for y in 0..H {
            for x in 0..W {
                let bit = if self.contains_index(y * W + x) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set bits of a bitboard, yielding `(x, y)`.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T, const W: usize, const H: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T, W, H>,
    idx: usize,
}

impl<'a, T, const W: usize, const H: usize> Iterator for SetBits<'a, T, W, H>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < W * H {
            let idx = self.idx;
            self.idx += 1;
            if self.board.contains_index(idx) {
                return Some((idx % W, idx / W));
            }
        }
        None
    }
}

impl<T, const W: usize, const H: usize> BitAnd for BitBoard<T, W, H>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.into_raw() & rhs.into_raw())
    }
}

impl<T, const W: usize, const H: usize> BitOr for BitBoard<T, W, H>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.into_raw() | rhs.into_raw())
    }
}

/// Bitwise NOT, kept within board bounds.
impl<T, const W: usize, const H: usize> Not for BitBoard<T, W, H>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::from_raw(!self.bits)
    }
}
