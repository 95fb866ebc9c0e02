use criterion::{black_box, criterion_group, criterion_main, Criterion};

use countup_easing::{ease_out_poly, Easing, EasingName};

fn bench_named(c: &mut Criterion) {
    let mut group = c.benchmark_group("named");
    for name in EasingName::ALL {
        let easing = Easing::from(name);
        group.bench_function(name.as_str(), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for t in 0..100 {
                    acc += easing.eval(black_box(t as f64), 0.0, 100.0, 100.0);
                }
                acc
            })
        });
    }
    group.finish();
}

fn bench_poly(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly");
    for n in [3.0, 8.0, 32.0] {
        let easing = ease_out_poly(n);
        group.bench_function(format!("out_{n}"), |b| {
            b.iter(|| easing.eval(black_box(42.0), 0.0, 100.0, 100.0))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_named, bench_poly);
criterion_main!(benches);
