//! Litemath Matrix - dense matrix and vector arithmetic
//!
//! One [`DenseMatrix`] type covers every shape; vectors are n×1 matrices and
//! the 2×2/3×3/4×4 and 2-/3-/4-vector forms are factories over it.
//! - Construction (new, with_data, from_fn, identity, fixed sizes, vectors)
//! - Shape (transpose, with_storage_order, minor, column, row)
//! - Algebra (multiply, add_scaled, scale, componentwise max/min, abs, dot, cross)
//! - Invariants (trace, determinant, adjugate, characteristic coefficients)
//! - Root search (smallest non-negative real root of a cubic)
//! - Formatting (display string, TeX, CSV)
//! - Generalized inverses (adjugate, Moore-Penrose)
//!
//! Elements are `f64`. The flat buffer may be row-major or column-major; every
//! logical read goes through the storage order, so results never depend on it.

mod error;
mod types;
mod construct;
mod ops;
mod props;
mod vector_ops;
mod charpoly;
mod roots;
mod format;
mod inverse;

pub use error::{codes, MatrixError, Result};
pub use types::{DenseMatrix, StorageOrder};
pub use roots::{
    deflate_cubic, evaluate_polynomial, quadratic_roots, smallest_nonnegative_real_root,
    ROOT_SEARCH_ITERATIONS,
};
pub use inverse::{
    AdjugateInverse, MoorePenrose, PseudoInverse, PseudoInverseResult, DEFAULT_TOLERANCE,
};
