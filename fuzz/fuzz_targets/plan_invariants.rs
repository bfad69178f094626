#![no_main]

use libfuzzer_sys::fuzz_target;

use disksum::{PlanConfig, Planner};

fuzz_target!(|data: &[u8]| {
    // Derive a spread of total lengths from the input
    let mut seed = 0u64;
    for &byte in data.iter().take(8) {
        seed = (seed << 8) | byte as u64;
    }
    let totals = [
        data.len() as u64,
        seed % (1 << 24),
        seed,
    ];

    for max in [1u64, 2, 64, 1024, 1 << 20] {
        let planner = Planner::new(PlanConfig::new(max).unwrap());

        for &total in &totals {
            let plan = planner.plan(total).unwrap();

            // Verify: runs tile [0, total) without gaps or overlaps
            let mut next_offset = 0u64;
            for run in &plan {
                assert_eq!(run.offset, next_offset);
                assert!(run.block_size >= 1);
                assert!(run.block_count >= 1);
                assert!(run.block_size <= max);
                next_offset = run.end();
            }
            assert_eq!(next_offset, total);

            // Verify: emitted offsets are aligned to their block size
            for run in &plan {
                assert_eq!(run.offset % run.block_size, 0);
            }

            // Verify: block sizes are non-increasing, each dividing the last
            for pair in plan.descriptors().windows(2) {
                assert!(pair[0].block_size > pair[1].block_size);
                assert_eq!(pair[0].block_size % pair[1].block_size, 0);
            }

            // Verify: run count is logarithmically bounded
            assert!(plan.len() <= max.ilog2() as usize + 1);

            // Verify: determinism
            assert_eq!(plan, planner.plan(total).unwrap());
        }
    }
});
