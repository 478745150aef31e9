//! Checks the Karatsuba multiplier and both Mersenne reducers against `num-bigint` on random
//! operands, printing each case and the overall pass rate.

use kara512::{
    Random, U256,
    oracle::{Verdict, check_product, check_residue},
};
use log::{LevelFilter, info};
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

const NUM_TESTS: usize = 10;

fn initialize_logger() {
    env_logger::builder()
        .format_timestamp(None)
        .format_level(true)
        .format_target(false)
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
}

fn report(what: &str, verdict: &Verdict) {
    if let Verdict::Mismatch { expected, actual } = verdict {
        println!("{what} oracle: {expected:x}");
        println!("{what} yours : {actual:x}");
        if let Some(diff) = verdict.diff_bits() {
            println!("{what} diff  : {diff}");
        }
    }
}

fn main() {
    initialize_logger();

    let mut rng = ChaCha8Rng::from_os_rng();
    let mut passed = 0;

    for test in 1..=NUM_TESTS {
        let a = U256::random(&mut rng);
        let b = U256::random(&mut rng);

        let product = a.karatsuba_mul(&b);
        let square = product.schoolbook_mul(&product);

        let verdicts = [
            ("product", check_product(&a, &b, &product)),
            ("mod 2^256-1", check_residue(&product, 256, &product.rem_2p256_minus_1())),
            ("mod 2^512-1", check_residue(&square, 512, &square.rem_2p512_minus_1())),
        ];

        println!("==== Test Case {test} ====");
        println!("A     : {a:x}");
        println!("B     : {b:x}");

        if verdicts.iter().all(|(_, verdict)| verdict.is_pass()) {
            println!("Passed\n");
            passed += 1;
        } else {
            for (what, verdict) in &verdicts {
                report(what, verdict);
            }
            println!("Mismatch at Test Case {test}!\n");
        }
    }

    info!("{passed} of {NUM_TESTS} cases passed");
    println!(
        "Pass rate {}% ({passed}/{NUM_TESTS})",
        passed * 100 / NUM_TESTS
    );
}
