use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wellness_forest::scene::{derive_scene, EcoActions, TimeOfDay};

fn benchmark_derive_scene(c: &mut Criterion) {
    let busy = EcoActions {
        lights_off: true,
        exercise: true,
        eco_travel: true,
        long_work: true,
    };

    let mut group = c.benchmark_group("scene_derivation");

    group.bench_function("day_default", |b| {
        b.iter(|| {
            derive_scene(
                black_box(0.72),
                black_box(TimeOfDay::Day),
                black_box(EcoActions::default()),
                black_box(1.5),
            )
        })
    });

    group.bench_function("night_all_flags_digital_fog", |b| {
        b.iter(|| {
            derive_scene(
                black_box(0.35),
                black_box(TimeOfDay::Night),
                black_box(busy),
                black_box(6.0),
            )
        })
    });

    // Full sweep, roughly what a day of re-renders costs
    group.bench_function("full_grid", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for time in [TimeOfDay::Day, TimeOfDay::Evening, TimeOfDay::Night] {
                for health in [0.0, 0.25, 0.5, 0.75, 1.0] {
                    for screen in [0.0, 3.0, 5.0] {
                        let params =
                            derive_scene(black_box(health), time, busy, black_box(screen));
                        acc += params.fog_density;
                    }
                }
            }
            acc
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_derive_scene);
criterion_main!(benches);
