//! This module contains the generator for the Chebyshev/cosine coefficient table
//! that bootstraps a fast transform-based quadrature scheme. The table is built
//! once by dyadic refinement and then consumed as precomputed basis coefficients
//! by a downstream evaluator that reads it through a discrete cosine transform.
//!
//! The transform itself is not implemented here. It enters through the
//! [`CosineTransform`] trait so the generator's bookkeeping can be exercised
//! against a deterministic stand-in, and so the production transform stays a
//! swappable collaborator.

use crate::Result;
use serde::{Deserialize, Serialize};

/// The discrete cosine/Fourier transform primitive consumed by
/// [`chebyshev_series`]. Implementations must transform `buffer[0..=len]` in
/// place, parameterized by two angle-derived scalars supplied by the caller.
///
/// The generator treats the transform as opaque and correct. Two
/// implementations that differ numerically will silently produce different
/// coefficient tables, so a table is only usable by an evaluator built on the
/// same transform.
pub trait CosineTransform {
    /// Transforms the first `len + 1` values of `buffer` in place.
    ///
    /// # Arguments
    ///
    /// * `len`: the transform length; `buffer[0..=len]` holds the input values
    /// * `angle1`: the first angle-derived scalar for this refinement level
    /// * `angle2`: the second angle-derived scalar for this refinement level
    /// * `buffer`: the coefficient block to transform in place
    fn transform(&self, len: usize, angle1: f64, angle2: f64, buffer: &mut [f64]);
}

impl<F> CosineTransform for F
where
    F: Fn(usize, f64, f64, &mut [f64]),
{
    fn transform(&self, len: usize, angle1: f64, angle2: f64, buffer: &mut [f64]) {
        self(len, angle1, angle2, buffer)
    }
}

/// Builds the coefficient table for the fast transform-based quadrature scheme.
///
/// The table is filled by dyadic refinement with two cooperating cursors. Each
/// level writes a block of cosine-series coefficients into the head of the
/// table, transforms that block in place through `transform`, then commits the
/// level's finalized values into the tail, walking the transformed block in
/// bit-reversed order so the downstream evaluator can read coefficients in the
/// access order it expects. The head block doubles and the tail cursor retreats
/// until the two regions would meet; the untouched middle is left at zero for
/// the evaluator's base-case lookup.
///
/// A `size` too small to admit even one refinement level (anything below 7)
/// returns an all-zero table rather than an error; [`ChebyshevTable::new`] is
/// the validating surface for callers that want the boundary rejected.
///
/// # Arguments
///
/// * `size`: the length of the table to generate
/// * `transform`: the discrete cosine transform applied to each head block
///
/// returns: Vec<f64, Global>
///
/// # Examples
///
/// ```
/// use enquad::chebyshev_series;
/// // A pass-through stand-in for the transform; the production table is built
/// // with the real primitive instead
/// let identity = |_len: usize, _a1: f64, _a2: f64, _buf: &mut [f64]| {};
/// let table = chebyshev_series(64, &identity);
/// assert_eq!(table.len(), 64);
/// ```
pub fn chebyshev_series<T>(size: usize, transform: &T) -> Vec<f64>
where
    T: CosineTransform + ?Sized,
{
    let mut table = vec![0.0; size];
    if size == 0 {
        return table;
    }

    // Tail cursor, head block length, and per-level scale factor
    let mut k = size - 1;
    let mut l = 2;
    let mut hl = 0.5;

    // Running half-angle values advanced once per refinement level
    let mut cos2 = 0.0;
    let mut sin1 = 1.0;
    let mut sin2 = 1.0;

    // Written as `l + l + 1 < k` rather than `l < k - l - 1` to keep the
    // guard free of unsigned underflow for small tables
    while l + l + 1 < k {
        // Cosine-series coefficients of this level, before the transform
        table[0] = hl * 0.5;
        for j in 1..=l {
            table[j] = hl / (1.0 - 4.0 * (j * j) as f64);
        }
        table[l] *= 0.5;

        transform.transform(l, 0.5 * cos2, sin1, &mut table[..=l]);

        cos2 = (2.0 + cos2).sqrt();
        sin1 /= cos2;
        sin2 /= 2.0 + cos2;

        // The level's finalized tail triple
        table[k] = sin2;
        table[k - 1] = table[0];
        table[k - 2] = table[l];
        k -= 3;

        // Relocate the interior of the transformed block into the tail,
        // visiting it in bit-reversed index order
        let mut m = l;
        while m > 1 {
            m >>= 1;
            let mut j = m;
            while j <= l - m {
                table[k] = table[j];
                k -= 1;
                j += m << 1;
            }
        }

        hl *= 0.5;
        l *= 2;
    }

    table
}

/// A generated coefficient table with the degenerate-size boundary turned into
/// an explicit construction error. The wrapped values are exactly what
/// [`chebyshev_series`] produces for the same size and transform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChebyshevTable {
    values: Vec<f64>,
}

impl ChebyshevTable {
    /// Generates a coefficient table of the given size, rejecting sizes with no
    /// room for a single refinement level. The smallest usable size is 7; below
    /// that the generator would return a table it never wrote to.
    ///
    /// # Arguments
    ///
    /// * `size`: the length of the table to generate, at least 7
    /// * `transform`: the discrete cosine transform applied to each head block
    ///
    /// returns: Result<ChebyshevTable, Box<dyn Error, Global>>
    ///
    /// # Examples
    ///
    /// ```
    /// use enquad::ChebyshevTable;
    /// let identity = |_len: usize, _a1: f64, _a2: f64, _buf: &mut [f64]| {};
    /// let table = ChebyshevTable::new(64, &identity).unwrap();
    /// assert_eq!(table.len(), 64);
    /// assert!(ChebyshevTable::new(4, &identity).is_err());
    /// ```
    pub fn new<T>(size: usize, transform: &T) -> Result<Self>
    where
        T: CosineTransform + ?Sized,
    {
        if size < 7 {
            return Err(Box::from(format!(
                "A coefficient table of size {} has no room for a refinement level; \
                the smallest usable size is 7",
                size
            )));
        }
        Ok(Self {
            values: chebyshev_series(size, transform),
        })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
