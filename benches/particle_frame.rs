use criterion::{black_box, criterion_group, criterion_main, Criterion};
use particled_car::particles::{
    create_particle_buffers, create_particle_pool, emit_for_frame, simulate_particles,
    smoke_emitter_config, sort_by_descending_camera_distance, NoSplash,
};
use cgmath::Point3;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn smoke_frame(c: &mut Criterion) {
    let config = smoke_emitter_config();
    let mut pool = create_particle_pool(config.capacity);
    let mut buffers = create_particle_buffers(config.capacity);
    let mut rng = StdRng::seed_from_u64(1);
    let camera = Point3::new(0.0, 0.0, 5.0);

    // Warm up to a steady-state population
    for _ in 0..400 {
        emit_for_frame(&mut pool, &config, 0.016, &mut rng);
        simulate_particles(&mut pool, &config, 0.016, camera, &mut buffers, &mut NoSplash);
    }

    c.bench_function("smoke_frame_100k", |b| {
        b.iter(|| {
            emit_for_frame(&mut pool, &config, black_box(0.016), &mut rng);
            let live =
                simulate_particles(&mut pool, &config, 0.016, camera, &mut buffers, &mut NoSplash);
            sort_by_descending_camera_distance(&mut pool);
            black_box(live)
        })
    });
}

criterion_group!(benches, smoke_frame);
criterion_main!(benches);
