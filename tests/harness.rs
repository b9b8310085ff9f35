use std::io::Cursor;
use std::time::Duration;

use matprod::Matrix;
use matprod::harness::{
    BenchConfig, Kernel, fill_random, run_benchmark, seeded_operands, timed,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn small_config(pause: bool) -> BenchConfig {
    BenchConfig {
        size: 40,
        seed: 12345,
        threads: 3,
        pause,
        tolerance: 1e-9,
    }
}

#[test]
fn test_same_seed_same_inputs() {
    let (a1, b1) = seeded_operands(32, 12345);
    let (a2, b2) = seeded_operands(32, 12345);
    assert_eq!(a1, a2);
    assert_eq!(b1, b2);
    assert_ne!(a1, b1, "A and B come from one stream, not two identical ones");

    let (a3, _) = seeded_operands(32, 54321);
    assert_ne!(a1, a3);
}

#[test]
fn test_fill_random_range() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut m = Matrix::new(20, 30);
    fill_random(&mut m, &mut rng);

    assert!(m.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));
    // A fresh generator with the same seed replays the same values.
    let mut again = Matrix::new(20, 30);
    fill_random(&mut again, &mut StdRng::seed_from_u64(1));
    assert_eq!(m, again);
}

#[test]
fn test_timed_returns_value_and_duration() {
    let (value, elapsed) = timed(|| {
        std::thread::sleep(Duration::from_millis(5));
        42
    });
    assert_eq!(value, 42);
    assert!(elapsed >= Duration::from_millis(5));
}

#[test]
fn test_run_benchmark_without_pause() {
    let mut input = Cursor::new(Vec::new());
    let mut out = Vec::new();

    let report = run_benchmark(&small_config(false), &mut input, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(report.all_match(), "checks: {:?}", report.checks);
    assert_eq!(
        report.runs.iter().map(|r| r.kernel).collect::<Vec<_>>(),
        Kernel::ALL.to_vec()
    );
    for kernel in Kernel::ALL {
        assert!(text.contains(&format!("{} calculation starting", kernel.label())));
        assert!(text.contains(&format!("{} calculation complete, MS = ", kernel.label())));
    }
    assert!(!text.contains("Press enter"));
    assert!(text.contains("Check = true , true , true"));

    // 40x40 result: sample element clamps to (39, 39).
    let sample = report.runs[0].result.get(39, 39);
    assert!(text.contains(&format!("Check2 = {} , ", sample)));
}

#[test]
fn test_run_benchmark_pauses_between_kernels() {
    let mut input = Cursor::new(b"c\nc\nc\n".to_vec());
    let mut out = Vec::new();

    let report = run_benchmark(&small_config(true), &mut input, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(report.all_match());
    assert_eq!(text.matches("Press enter to continue: ").count(), 3);
    // All three lines consumed.
    assert_eq!(input.position() as usize, input.get_ref().len());
}

#[test]
fn test_run_benchmark_continues_on_eof() {
    let mut input = Cursor::new(Vec::new());
    let mut out = Vec::new();

    let report = run_benchmark(&small_config(true), &mut input, &mut out).unwrap();
    assert_eq!(report.runs.len(), 4);
}

#[test]
fn test_results_match_reference_product() {
    let config = small_config(false);
    let report = run_benchmark(&config, &mut Cursor::new(Vec::new()), &mut Vec::new()).unwrap();

    let (a, b) = seeded_operands(config.size, config.seed);
    let mut expected = Matrix::new(config.size, config.size);
    Kernel::Naive.run(&a, &b, &mut expected, 1);

    assert_eq!(report.runs[0].result, expected);
    assert!(report.runs[3].result.approx_eq(&expected, 1e-9));
}

#[test]
fn test_default_config_is_classic_run() {
    let config = BenchConfig::default();
    assert_eq!(config.size, 1000);
    assert_eq!(config.seed, 12345);
    assert!(config.pause);
    assert!(config.threads >= 1);
}
