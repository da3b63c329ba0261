/// Pure Rust benchmarks for the breach equation registry.
///
/// Uses std::time::Instant for timing, a deterministic LCG PRNG for input generation,
/// and std::hint::black_box to prevent dead-code elimination.
use std::hint::black_box;
use std::time::{Duration, Instant};

use breach_core::registry;
use breach_core::{
    AnyEquation, BreachEquation, Calibration, DamFailureInput, DamType, Erodibility, FailureMode,
};

const REPEATS: usize = 7;

/// Simple LCG PRNG for deterministic input generation.
fn make_inputs(n: usize, seed: u64) -> Vec<DamFailureInput> {
    let mut state = seed;
    let mut next_f64 = || -> f64 {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as f64 / (1u64 << 31) as f64
    };

    (0..n)
        .filter_map(|i| {
            let h_w = 1.0 + next_f64() * 40.0;
            let v_w = 10f64.powf(3.0 + next_f64() * 6.0);
            let h_b = h_w * (0.5 + next_f64() * 0.5);
            let erodibility = match i % 3 {
                0 => Erodibility::Low,
                1 => Erodibility::Medium,
                _ => Erodibility::High,
            };
            let failure_mode = if i % 2 == 0 {
                FailureMode::Overtopping
            } else {
                FailureMode::Piping
            };
            let dam_type = if i % 5 == 0 {
                DamType::CoreWall
            } else {
                DamType::HomogeneousFill
            };
            DamFailureInput::builder(h_w, v_w)
                .breach_depth(h_b)
                .erodibility(erodibility)
                .failure_mode(failure_mode)
                .dam_type(dam_type)
                .build()
                .ok()
        })
        .collect()
}

/// Run a closure `REPEATS` times, return the median duration.
fn median_time<F: FnMut()>(mut f: F) -> Duration {
    let mut times: Vec<Duration> = (0..REPEATS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    times.sort();
    times[REPEATS / 2]
}

fn bench_equation(
    eq: &AnyEquation,
    calibration: Calibration,
    sizes: &[usize],
) -> Vec<(String, usize, Duration)> {
    let label = format!("{} {}", eq.info().identifier, calibration);
    let mut results = Vec::new();

    for &n in sizes {
        let dams = make_inputs(n, 42);

        // Warmup
        black_box(eq.predict_many(&dams, calibration));

        let dur = median_time(|| {
            black_box(eq.predict_many(&dams, calibration));
        });
        results.push((label.clone(), n, dur));
    }
    results
}

fn main() {
    println!("Breach Equation Benchmarks");
    println!("============================================================");
    println!("{:<22} {:>7}   {:>12}", "Equation", "N", "Median (ms)");
    println!("--------------------------------------------");

    let mut all_results: Vec<(String, usize, Duration)> = Vec::new();

    for def in registry::all() {
        let Ok(eq) = AnyEquation::from_identifier(&def.identifier()) else {
            continue;
        };
        for calibration in [Calibration::Original, Calibration::Recalibrated] {
            all_results.extend(bench_equation(&eq, calibration, &[10_000, 100_000]));
        }
    }

    for (equation, n, dur) in &all_results {
        let ms = dur.as_secs_f64() * 1000.0;
        println!("{:<22} {:>7}      {:>8.2}", equation, n, ms);
    }

    println!("============================================================");
}
