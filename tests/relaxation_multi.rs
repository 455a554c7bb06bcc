//! Block (multiple right-hand side) Jacobi tests.
//!
//! The block kernel must agree bit-for-bit with the single-vector kernel,
//! both for `nrhs == 1` and column by column for wider blocks.

use csr_relax::{jacobi, jacobi_multi, CsrMatrix, RowSweep};
use rand::Rng;

/// Random square CSR, columns deliberately left unsorted, with a few rows
/// missing their diagonal.
fn random_square(n: usize, per_row: usize) -> CsrMatrix<i64, f64> {
    let mut rng = rand::thread_rng();
    let mut row_ptr = vec![0i64];
    let mut col_idx = Vec::new();
    let mut values = Vec::new();
    for i in 0..n {
        for _ in 0..per_row {
            col_idx.push(rng.gen_range(0..n as i64));
            values.push(rng.gen_range(-1.0..1.0));
        }
        if i % 7 != 3 {
            col_idx.push(i as i64);
            values.push(per_row as f64 + rng.gen_range(0.5..1.5));
        }
        row_ptr.push(col_idx.len() as i64);
    }
    CsrMatrix::from_csr(n, n, row_ptr, col_idx, values).unwrap()
}

fn random_vec(len: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(-2.0..2.0)).collect()
}

fn column(data: &[f64], nrhs: usize, k: usize) -> Vec<f64> {
    data.iter().skip(k).step_by(nrhs).copied().collect()
}

#[test]
fn one_component_matches_single_kernel() {
    let n = 64;
    let m = random_square(n, 5);
    let b = random_vec(n);
    let x0 = random_vec(n);
    let mut temp = vec![0.0; n];

    for (sweep, omega) in [
        (RowSweep::forward(n), 1.0),
        (RowSweep::backward(n), 0.7),
        (RowSweep::new(1, n as isize, 2).unwrap(), 1.3),
    ] {
        let mut single = x0.clone();
        jacobi(&m.as_view(), &mut single, &b, &mut temp, sweep, omega).unwrap();
        let mut block = x0.clone();
        jacobi_multi(&m.as_view(), &mut block, &b, &mut temp, 1, sweep, omega).unwrap();
        let single_bits: Vec<u64> = single.iter().map(|v| v.to_bits()).collect();
        let block_bits: Vec<u64> = block.iter().map(|v| v.to_bits()).collect();
        assert_eq!(single_bits, block_bits);
    }
}

#[test]
fn each_column_matches_single_kernel() {
    let (n, nrhs) = (30, 4);
    let m = random_square(n, 4);
    let b = random_vec(n * nrhs);
    let x0 = random_vec(n * nrhs);

    let mut x = x0.clone();
    let mut temp = vec![0.0; n * nrhs];
    jacobi_multi(&m.as_view(), &mut x, &b, &mut temp, nrhs, RowSweep::forward(n), 0.9).unwrap();

    let mut t1 = vec![0.0; n];
    for k in 0..nrhs {
        let mut xk = column(&x0, nrhs, k);
        let bk = column(&b, nrhs, k);
        jacobi(&m.as_view(), &mut xk, &bk, &mut t1, RowSweep::forward(n), 0.9).unwrap();
        assert_eq!(column(&x, nrhs, k), xk);
    }
}

#[test]
fn zero_omega_leaves_block_unchanged() {
    let (n, nrhs) = (20, 3);
    let m = random_square(n, 3);
    let x0 = random_vec(n * nrhs);
    let mut x = x0.clone();
    let mut temp = vec![0.0; n * nrhs];
    jacobi_multi(&m.as_view(), &mut x, &random_vec(n * nrhs), &mut temp, nrhs, RowSweep::forward(n), 0.0)
        .unwrap();
    assert_eq!(x, x0);
}

#[test]
fn missing_diagonal_row_is_skipped_for_all_components() {
    // tridiagonal 5x5 whose row 3 holds only its off-diagonal neighbours
    let m = CsrMatrix::from_csr(
        5,
        5,
        vec![0i64, 2, 5, 8, 10, 12],
        vec![0, 1, 0, 1, 2, 1, 2, 3, 2, 4, 3, 4],
        vec![4.0, -1.0, -1.0, 4.0, -1.0, -1.0, 4.0, -1.0, -1.0, -1.0, -1.0, 4.0],
    )
    .unwrap();
    let (n, nrhs) = (5, 3);
    let x0 = random_vec(n * nrhs);
    let b = random_vec(n * nrhs);
    for sweep in [RowSweep::forward(n), RowSweep::backward(n)] {
        let mut x = x0.clone();
        let mut temp = vec![0.0; n * nrhs];
        jacobi_multi(&m.as_view(), &mut x, &b, &mut temp, nrhs, sweep, 1.0).unwrap();
        assert_eq!(&x[3 * nrhs..4 * nrhs], &x0[3 * nrhs..4 * nrhs]);
        for i in [0, 1, 2, 4] {
            assert_ne!(&x[i * nrhs..(i + 1) * nrhs], &x0[i * nrhs..(i + 1) * nrhs]);
        }
    }
}

#[cfg(feature = "rayon")]
#[test]
fn parallel_matches_serial() {
    let (n, nrhs) = (1200, 3);
    let m = random_square(n, 6);
    let b = random_vec(n * nrhs);
    let x0 = random_vec(n * nrhs);
    let mut temp = vec![0.0; n * nrhs];

    for sweep in [RowSweep::forward(n), RowSweep::new(n as isize - 2, 5, -5).unwrap()] {
        let mut serial = x0.clone();
        jacobi_multi(&m.as_view(), &mut serial, &b, &mut temp, nrhs, sweep, 0.8).unwrap();
        let mut parallel = x0.clone();
        csr_relax::jacobi_multi_parallel(&m.as_view(), &mut parallel, &b, &mut temp, nrhs, sweep, 0.8)
            .unwrap();
        assert_eq!(serial, parallel);
    }
}
