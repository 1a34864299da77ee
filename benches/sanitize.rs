//! Filename validation and sanitization benchmarks.
//!
//! Benchmarks:
//! - Validation of clean, forbidden-char and reserved names
//! - Sanitization per platform
//! - Truncation of overlong names
//!
//! Run with:
//! ```bash
//! cargo bench --bench sanitize
//! ```
//!
//! For HTML reports:
//! ```bash
//! cargo bench --bench sanitize -- --verbose
//! open target/criterion/report/index.html
//! ```

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fsname::{FilenameSanitizer, FilenameValidator, Platform};
use std::hint::black_box;
use std::time::Duration;

const NAMES: [(&str, &str); 5] = [
    ("clean", "quarterly-report-2024.xlsx"),
    ("forbidden", "a:b*c?d<e>f|g\"h\\i/j.txt"),
    ("reserved", "Con.txt"),
    ("trailing", "notes. . ."),
    ("multibyte", "新規 Microsoft Excel Worksheet.xlsx"),
];

fn validate_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    group.measurement_time(Duration::from_secs(5));

    for platform in Platform::ALL {
        let Ok(validator) = FilenameValidator::new(platform, 1, None) else {
            continue;
        };
        for (label, name) in NAMES {
            group.bench_with_input(
                BenchmarkId::new(platform.as_str(), label),
                &name,
                |b, name| b.iter(|| validator.validate(black_box(name)).is_ok()),
            );
        }
    }

    group.finish();
}

fn sanitize_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitize");
    group.measurement_time(Duration::from_secs(5));

    for platform in Platform::ALL {
        let Ok(sanitizer) = FilenameSanitizer::new(platform, 1, None, "_") else {
            continue;
        };
        for (label, name) in NAMES {
            group.bench_with_input(
                BenchmarkId::new(platform.as_str(), label),
                &name,
                |b, name| b.iter(|| sanitizer.sanitize(black_box(name))),
            );
        }
    }

    group.finish();
}

fn truncation_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("truncation");
    group.measurement_time(Duration::from_secs(5));

    let ascii = "a".repeat(4096);
    let multibyte = "あ".repeat(4096);
    for max_len in [16usize, 255] {
        let Ok(sanitizer) = FilenameSanitizer::new(Platform::Universal, 1, Some(max_len), "")
        else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("ascii", max_len), &ascii, |b, name| {
            b.iter(|| sanitizer.sanitize(black_box(name)))
        });
        group.bench_with_input(
            BenchmarkId::new("multibyte", max_len),
            &multibyte,
            |b, name| b.iter(|| sanitizer.sanitize(black_box(name))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    validate_benchmarks,
    sanitize_benchmarks,
    truncation_benchmarks
);
criterion_main!(benches);
