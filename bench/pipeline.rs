criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .sample_size(20)
        .measurement_time(std::time::Duration::from_secs(2));
    targets =
        folding_a_full_wall_into_an_interval,
        covering_a_full_wall_interval_at_large_bit_width,
        sampling_bits_from_a_full_wall_interval,
}

fn full_wall() -> Vec<u8> {
    let mut wall = Vec::with_capacity(136);
    for (slot, &mult) in paishan::TILE_MULTIPLICITIES.iter().enumerate() {
        for _ in 0..mult {
            wall.push(slot as u8);
        }
    }
    wall
}

fn folding_a_full_wall_into_an_interval(c: &mut criterion::Criterion) {
    let wall = full_wall();
    c.bench_function("fold a full 136-tile wall into an Interval", |b| {
        b.iter(|| paishan::permutation_to_interval(&wall).unwrap())
    });
}

fn covering_a_full_wall_interval_at_large_bit_width(c: &mut criterion::Criterion) {
    let wall = full_wall();
    let interval = paishan::permutation_to_interval(&wall).unwrap();
    c.bench_function("cover a full-wall Interval at 4096 bits", |b| {
        b.iter(|| paishan::covering_binary_interval(&interval, 4096).unwrap())
    });
}

fn sampling_bits_from_a_full_wall_interval(c: &mut criterion::Criterion) {
    let wall = full_wall();
    let mut encoder = paishan::PaishanEncoder::seeded(0);
    c.bench_function("sample 4096 bits from a full-wall paishan", |b| {
        b.iter(|| encoder.encode_to_bits(&wall, 4096).unwrap())
    });
}
