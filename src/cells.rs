//! Sets of board cells packed into one machine word.
//!
//! Cell `(row, col)` of an `N×N` grid maps to bit `row * N + col`, so
//! iterating a set yields cells in row-major order. The spawner picks its
//! target cell from the set of empty cells without allocating, which keeps
//! it usable in `no_std` builds.

use core::fmt;
use num_traits::{PrimInt, Unsigned};

/// Unsigned integer wide enough to hold one bit per cell.
pub trait MaskWord: PrimInt + Unsigned {}

impl<W: PrimInt + Unsigned> MaskWord for W {}

/// A subset of the cells of an `N×N` grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellSet<W: MaskWord, const N: usize> {
    word: W,
}

impl<W: MaskWord, const N: usize> CellSet<W, N> {
    fn all_bits() -> W {
        let cells = N * N;
        if cells >= W::zero().count_zeros() as usize {
            !W::zero()
        } else {
            (W::one() << cells) - W::one()
        }
    }

    /// Collect the cells for which `keep` returns true.
    pub fn from_fn(mut keep: impl FnMut(usize, usize) -> bool) -> Self {
        let mut word = W::zero();
        for idx in 0..N * N {
            if keep(idx / N, idx % N) {
                word = word | (W::one() << idx);
            }
        }
        Self { word }
    }

    pub fn len(&self) -> usize {
        self.word.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_zero()
    }

    /// Cells of the grid not in this set.
    pub fn complement(self) -> Self {
        Self {
            word: !self.word & Self::all_bits(),
        }
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> Cells<W, N> {
        Cells { rest: self.word }
    }

    /// The `n`-th cell in row-major order, counting from zero.
    pub fn nth(&self, n: usize) -> Option<(usize, usize)> {
        self.cells().nth(n)
    }
}

impl<W: MaskWord, const N: usize> fmt::Debug for CellSet<W, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.cells()).finish()
    }
}

/// Iterator over the cells of a [`CellSet`].
#[derive(Debug, Clone, Copy)]
pub struct Cells<W: MaskWord, const N: usize> {
    rest: W,
}

impl<W: MaskWord, const N: usize> Iterator for Cells<W, N> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_zero() {
            return None;
        }
        let idx = self.rest.trailing_zeros() as usize;
        // clear lowest set bit
        self.rest = self.rest & (self.rest - W::one());
        Some((idx / N, idx % N))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.rest.count_ones() as usize;
        (len, Some(len))
    }
}

impl<W: MaskWord, const N: usize> ExactSizeIterator for Cells<W, N> {}
