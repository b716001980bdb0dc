//! Benchmark runner for the DCT kernels.

use dct2::Matrix;
use dct2::direct::forward::dct2_direct;
use dct2::direct::inverse::idct2_direct;
use dct2::separable::two_pass::{dct2_separable, idct2_separable};
use dct2::threaded::dct_mt::{dct2_direct_mt, idct2_direct_mt};
use std::process::ExitCode;
use std::time::Instant;

type Kernel = fn(&Matrix, &mut Matrix) -> dct2::Result<()>;

fn main() -> ExitCode {
    println!("=== 2D DCT Benchmark ===\n");

    let sizes = [16, 32, 64];
    let iterations = 3;
    let mut all_results = Vec::new();

    println!("Threads available: {}\n", num_threads());

    for &size in &sizes {
        println!("Matrix: {}×{}", size, size);
        println!("{}", "-".repeat(50));

        let src = Matrix::new(
            size,
            size,
            (0..size * size).map(|i| (i % 100) as f64).collect(),
        );

        let kernels: [(&str, Kernel); 6] = [
            ("Direct", dct2_direct),
            ("Separable", dct2_separable),
            ("Direct MT", |s, d| dct2_direct_mt(s, d, num_threads())),
            ("Direct IDCT", idct2_direct),
            ("Separable IDCT", idct2_separable),
            ("Direct MT IDCT", |s, d| idct2_direct_mt(s, d, num_threads())),
        ];

        let mut results = Vec::new();
        for (name, kernel) in kernels {
            match bench_fn(&src, iterations, kernel) {
                Ok(ms) => results.push((name, ms)),
                Err(e) => {
                    eprintln!("{}: {}", name, e);
                    return ExitCode::FAILURE;
                }
            }
        }

        // Round trip through the reference pair
        let mut coeffs = Matrix::default();
        let mut back = Matrix::default();
        if let Err(e) = dct2_direct(&src, &mut coeffs).and_then(|_| idct2_direct(&coeffs, &mut back)) {
            eprintln!("round trip: {}", e);
            return ExitCode::FAILURE;
        }
        let mut back_mt = Matrix::default();
        if let Err(e) = idct2_direct_mt(&coeffs, &mut back_mt, num_threads()) {
            eprintln!("round trip MT: {}", e);
            return ExitCode::FAILURE;
        }

        let baseline_time = results[0].1;
        for (i, (name, time_ms)) in results.iter().enumerate() {
            println!(
                "{}. {:16} {:10.3} ms  ({:.1}×)",
                i + 1,
                name,
                time_ms,
                baseline_time / time_ms
            );
        }
        println!(
            "   round trip ok: {}, threaded ok: {}\n",
            back.approx_eq(&src, 1e-10),
            back_mt.approx_eq(&src, 1e-10)
        );

        all_results.push((size, results));
    }

    print_summary_table(&all_results);
    ExitCode::SUCCESS
}

fn num_threads() -> usize {
    std::thread::available_parallelism().map_or(4, |n| n.get())
}

/// Average wall time of `f` over `iterations` runs, in milliseconds.
fn bench_fn(src: &Matrix, iterations: usize, f: Kernel) -> dct2::Result<f64> {
    // Warmup
    let mut dst = Matrix::default();
    f(src, &mut dst)?;

    let mut total = 0.0;
    for _ in 0..iterations {
        let start = Instant::now();
        f(src, &mut dst)?;
        total += start.elapsed().as_secs_f64();
    }

    Ok(total / iterations as f64 * 1000.0)
}

fn print_summary_table(all_results: &[(usize, Vec<(&str, f64)>)]) {
    println!("\n{}", "=".repeat(70));
    println!("SUMMARY");
    println!("{}", "=".repeat(70));

    print!("\n{:<18}", "Method");
    for (size, _) in all_results {
        print!(" {:>12}", format!("{}×{}", size, size));
    }
    println!();
    println!("{}", "-".repeat(70));

    let num_methods = all_results[0].1.len();
    for method_idx in 0..num_methods {
        print!("{:<18}", all_results[0].1[method_idx].0);
        for (_, results) in all_results {
            print!(" {:>9.3} ms", results[method_idx].1);
        }
        println!();
    }

    println!("{}", "=".repeat(70));
    println!("\nSpeedup relative to Direct. Higher is better.\n");
}
