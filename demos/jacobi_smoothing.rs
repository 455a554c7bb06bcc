use csr_relax::{residual, BlockDisplay, CsrMatrix, JacobiSmoother, RelaxOptions, SweepType};

fn main() {
    let _ = env_logger::try_init();
    #[cfg(feature = "rayon")]
    csr_relax::parallel::init_thread_pool(None);
    let n: usize = 8;
    // 1D Poisson: tridiag(-1, 2, -1)
    let mut row_ptr = vec![0usize];
    let mut col_idx = Vec::new();
    let mut values = Vec::new();
    for i in 0..n {
        for (j, v) in [(i.wrapping_sub(1), -1.0), (i, 2.0), (i + 1, -1.0)] {
            if j < n {
                col_idx.push(j);
                values.push(v);
            }
        }
        row_ptr.push(col_idx.len());
    }
    let a = CsrMatrix::from_csr(n, n, row_ptr, col_idx, values).unwrap();
    let view = a.as_view();

    let b = vec![1.0; n];
    let mut x = vec![0.0; n];
    let mut r = vec![0.0; n];

    let mut smoother = JacobiSmoother::new(RelaxOptions::new(2.0 / 3.0, SweepType::SYMMETRIC, 10));
    println!("{}", smoother);
    for round in 0..5 {
        smoother.smooth(&view, &mut x, &b).unwrap();
        residual(&view, &x, &b, &mut r).unwrap();
        let rnorm = r.iter().map(|v| v * v).sum::<f64>().sqrt();
        println!("round {round}: ||r|| = {rnorm:.3e}");
    }
    print!("{:.4}", BlockDisplay::new(&x, 1));
}
