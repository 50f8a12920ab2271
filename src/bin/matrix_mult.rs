//! Dense 3x3 matrix multiplication demo.
//!
//! Multiplies the row-major 0,1,2,... matrix by itself and prints the
//! bracketed result. No arguments, no configuration.

use procprobe::matrix::Matrix;

fn main() {
    let lhs = Matrix::sequential();
    let rhs = Matrix::sequential();
    println!("{}", lhs.mul(&rhs));
}
