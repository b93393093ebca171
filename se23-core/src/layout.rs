//! Flattening conventions for matrices stored in contiguous buffers.
//!
//! Host-side matrices are column-major; the packed symmetric storage used
//! for covariances walks the lower triangle row by row.

/// Memory layout for matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Row-major (C-style): elements in a row are contiguous.
    RowMajor,
    /// Column-major (Fortran/Eigen-style): elements in a column are contiguous.
    #[default]
    ColMajor,
}

impl Layout {
    /// Leading dimension stride for an M x N matrix.
    #[inline(always)]
    pub fn leading_dim(self, rows: usize, cols: usize) -> usize {
        match self {
            Layout::RowMajor => cols,
            Layout::ColMajor => rows,
        }
    }

    /// Linear index into a flat array for element (i, j) of an M x N matrix.
    #[inline(always)]
    pub fn index(self, i: usize, j: usize, ld: usize) -> usize {
        match self {
            Layout::RowMajor => i * ld + j,
            Layout::ColMajor => j * ld + i,
        }
    }
}

/// Number of elements in the packed lower triangle of an N x N matrix.
#[inline(always)]
pub const fn packed_len(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Index of (i, j), `j <= i`, in the packed lower triangle (row by row).
#[inline(always)]
pub const fn packed_lower_index(i: usize, j: usize) -> usize {
    i * (i + 1) / 2 + j
}
