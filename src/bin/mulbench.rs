//! Times the 256x256-bit multipliers, each followed by reduction modulo `2^256 - 1`, and the
//! `2^512 - 1` reducer, printing medians and a percentile table.

use core::hint::black_box;
use kara512::{
    ProductScanning, Random, Schoolbook, U256, U1024,
    bench::{
        BenchConfig, DEFAULT_SAMPLES, Harness, InstantCounter, Measurement, NAME_WIDTH,
        PercentileLegend, Report,
    },
    modular::{reduce_mod_2p256_minus_1, reduce_mod_2p512_minus_1},
};
use log::{LevelFilter, info};
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

fn initialize_logger() {
    env_logger::builder()
        .format_timestamp(None)
        .format_level(true)
        .format_target(false)
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Row labels, each at most [`NAME_WIDTH`] wide so the table stays aligned.
const SCHOOLBOOK: &str = "schoolbook";
const KARATSUBA: &str = "karatsuba";
const KARATSUBA_PS: &str = "kara-ps";
const MOD_512: &str = "mod512";

fn main() {
    initialize_logger();

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let a = U256::random(&mut rng);
    let b = U256::random(&mut rng);
    let wide = U1024::random(&mut rng);

    let config = BenchConfig::default();
    info!(
        "{DEFAULT_SAMPLES} samples, {} warmup and {} timed calls each",
        config.warmup, config.iterations
    );

    let mut harness = Harness::<_, DEFAULT_SAMPLES>::new(InstantCounter::new(), config);

    let runs: [(&str, Measurement<DEFAULT_SAMPLES>); 4] = [
        (
            SCHOOLBOOK,
            harness.run(|| {
                let mut p = black_box(&a).schoolbook_mul(black_box(&b));
                reduce_mod_2p256_minus_1(&mut p);
                black_box(p);
            }),
        ),
        (
            KARATSUBA,
            harness.run(|| {
                let mut p = black_box(&a).karatsuba_mul_with::<Schoolbook>(black_box(&b));
                reduce_mod_2p256_minus_1(&mut p);
                black_box(p);
            }),
        ),
        (
            KARATSUBA_PS,
            harness.run(|| {
                let mut p = black_box(&a).karatsuba_mul_with::<ProductScanning>(black_box(&b));
                reduce_mod_2p256_minus_1(&mut p);
                black_box(p);
            }),
        ),
        (
            MOD_512,
            harness.run(|| {
                black_box(reduce_mod_2p512_minus_1(black_box(&wide)));
            }),
        ),
    ];

    harness.finish();

    for (name, measurement) in &runs {
        println!("{}", Report::new(name, measurement));
    }

    println!();
    println!("{PercentileLegend}");

    for (name, measurement) in &runs {
        println!("{}", Report::new(name, measurement).percentiles());
    }
}
