//! Benchmark driver: seeded inputs, timed kernel runs, cross-checks.
//!
//! The console is injected (`BufRead` in, `Write` out) so the whole run can
//! be driven from tests.

use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::dense::Matrix;
use crate::error::Result;
use crate::matrix::check_dims;
use crate::matrix::ikj_vec::matmul_ikj_vectorized;
use crate::matrix::naive_ijk::matmul_naive_ijk;
use crate::matrix::naive_ikj::matmul_ikj_scalar;
use crate::threaded::ikj_mt::{default_thread_count, matmul_ikj_parallel};

/// Element printed from every result for a visual sanity check.
pub const SAMPLE_ELEMENT: (usize, usize) = (99, 98);

/// Knobs for one benchmark run. `Default` is the classic run: 1000×1000,
/// seed 12345, pausing between kernels.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub size: usize,
    pub seed: u64,
    pub threads: usize,
    pub pause: bool,
    pub tolerance: f64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            size: 1000,
            seed: 12345,
            threads: default_thread_count(),
            pause: true,
            tolerance: 1e-9,
        }
    }
}

/// The four product strategies, in the order they're benchmarked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kernel {
    Naive,
    Smart,
    Vectorized,
    Parallel,
}

impl Kernel {
    pub const ALL: [Kernel; 4] = [
        Kernel::Naive,
        Kernel::Smart,
        Kernel::Vectorized,
        Kernel::Parallel,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Kernel::Naive => "Naive",
            Kernel::Smart => "Smart",
            Kernel::Vectorized => "Vectorized",
            Kernel::Parallel => "Parallel",
        }
    }

    /// Runs this kernel. `threads` only matters for [`Kernel::Parallel`].
    pub fn run(self, a: &Matrix, b: &Matrix, c: &mut Matrix, threads: usize) {
        match self {
            Kernel::Naive => matmul_naive_ijk(a, b, c),
            Kernel::Smart => matmul_ikj_scalar(a, b, c),
            Kernel::Vectorized => matmul_ikj_vectorized(a, b, c),
            Kernel::Parallel => matmul_ikj_parallel(a, b, c, threads),
        }
    }
}

/// Fills `m` row by row with uniform values in `[0, 1)` drawn from `rng`.
pub fn fill_random<R: Rng>(m: &mut Matrix, rng: &mut R) {
    for x in m.as_mut_slice() {
        *x = rng.gen_range(0.0..1.0);
    }
}

/// Two `size × size` operands filled from one generator seeded with `seed`,
/// A first, then B.
pub fn seeded_operands(size: usize, seed: u64) -> (Matrix, Matrix) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut a = Matrix::new(size, size);
    let mut b = Matrix::new(size, size);
    fill_random(&mut a, &mut rng);
    fill_random(&mut b, &mut rng);
    (a, b)
}

/// Runs `f` and returns its output with the wall-clock time it took.
pub fn timed<F, R>(f: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

/// One kernel's outcome.
#[derive(Debug, Clone)]
pub struct KernelRun {
    pub kernel: Kernel,
    pub elapsed: Duration,
    pub result: Matrix,
}

/// Outcome of a full benchmark run.
#[derive(Debug, Clone)]
pub struct BenchReport {
    pub runs: Vec<KernelRun>,
    /// naive vs smart, smart vs vectorized, vectorized vs parallel.
    pub checks: [bool; 3],
}

impl BenchReport {
    pub fn all_match(&self) -> bool {
        self.checks.iter().all(|&ok| ok)
    }
}

/// Runs every kernel over the same seeded inputs, reporting to `out`.
///
/// With `config.pause` set, waits for a line on `input` between kernels; end
/// of input also continues.
pub fn run_benchmark<I, O>(
    config: &BenchConfig,
    input: &mut I,
    out: &mut O,
) -> Result<BenchReport>
where
    I: BufRead,
    O: Write,
{
    info!(
        "benchmark: {0}x{0}, seed {1}, {2} threads",
        config.size, config.seed, config.threads
    );
    let (a, b) = seeded_operands(config.size, config.seed);

    let mut runs = Vec::with_capacity(Kernel::ALL.len());
    for (idx, kernel) in Kernel::ALL.into_iter().enumerate() {
        if idx > 0 && config.pause {
            write!(out, "Press enter to continue: ")?;
            out.flush()?;
            let mut line = String::new();
            input.read_line(&mut line)?;
        }

        let mut c = Matrix::new(a.rows(), b.cols());
        check_dims(&a, &b, &c)?;

        writeln!(out, "{} calculation starting", kernel.label())?;
        let ((), elapsed) = timed(|| kernel.run(&a, &b, &mut c, config.threads));
        writeln!(
            out,
            "{} calculation complete, MS = {}",
            kernel.label(),
            elapsed.as_millis()
        )?;
        debug!("{}: {:?}", kernel.label(), elapsed);

        runs.push(KernelRun {
            kernel,
            elapsed,
            result: c,
        });
    }

    let checks = [
        runs[0].result.approx_eq(&runs[1].result, config.tolerance),
        runs[1].result.approx_eq(&runs[2].result, config.tolerance),
        runs[2].result.approx_eq(&runs[3].result, config.tolerance),
    ];
    writeln!(out, "Check = {} , {} , {}", checks[0], checks[1], checks[2])?;

    if let Some((i, j)) = sample_position(&runs[0].result) {
        let samples: Vec<String> = runs
            .iter()
            .map(|run| run.result.get(i, j).to_string())
            .collect();
        writeln!(out, "Check2 = {}", samples.join(" , "))?;
    }

    let report = BenchReport { runs, checks };
    if !report.all_match() {
        let worst = report
            .runs
            .windows(2)
            .filter_map(|w| w[0].result.max_abs_diff(&w[1].result))
            .fold(0.0, f64::max);
        info!("results disagree, max abs difference {:e}", worst);
    }

    Ok(report)
}

/// [`SAMPLE_ELEMENT`] clamped into `m`, or `None` for an empty matrix.
fn sample_position(m: &Matrix) -> Option<(usize, usize)> {
    if m.rows() == 0 || m.cols() == 0 {
        return None;
    }
    let (i, j) = SAMPLE_ELEMENT;
    Some((i.min(m.rows() - 1), j.min(m.cols() - 1)))
}
