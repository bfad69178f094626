// Integration tests for the Planner
// Tests cover: fixed plan vectors, coverage/ordering properties, config
// validation, descriptor-count bound

use disksum::{DigestError, PlanConfig, Planner, ReadDescriptor, ReadPlan};

fn plan(total_len: u64, max_block_size: u64) -> ReadPlan {
    Planner::new(PlanConfig::new(max_block_size).expect("valid config"))
        .plan(total_len)
        .expect("plan should succeed")
}

// ============================================================================
// Fixed Vectors
// ============================================================================

#[test]
fn test_small_file_single_block() {
    let p = plan(9, 1024);
    assert_eq!(p.descriptors(), &[ReadDescriptor::new(0, 9, 1)]);
}

#[test]
fn test_one_byte_over_block_size() {
    let p = plan(1025, 1024);
    assert_eq!(
        p.descriptors(),
        &[
            ReadDescriptor::new(0, 1024, 1),
            ReadDescriptor::new(1024, 1, 1),
        ]
    );
}

#[test]
fn test_two_bytes_over_block_size() {
    let p = plan(1026, 1024);
    assert_eq!(
        p.descriptors(),
        &[
            ReadDescriptor::new(0, 1024, 1),
            ReadDescriptor::new(1024, 2, 1),
        ]
    );
    // The remainder run sits 512 blocks of 2 bytes into the file
    assert_eq!(p.descriptors()[1].skip(), 512);
}

#[test]
fn test_large_file_halving_sequence() {
    let p = plan(2_138_934, 1024);

    let block_sizes: Vec<u64> = p.iter().map(|run| run.block_size).collect();
    assert_eq!(
        block_sizes,
        vec![1024, 512, 256, 32, 16, 4, 2],
        "block sizes must strictly halve across the sequence"
    );

    let counts: Vec<u64> = p.iter().map(|run| run.block_count).collect();
    assert_eq!(counts, vec![2088, 1, 1, 1, 1, 1, 1]);

    // Skip counts as the original dd invocations expressed them
    let skips: Vec<u64> = p.iter().map(|run| run.skip()).collect();
    assert_eq!(skips, vec![0, 4176, 8354, 66840, 133_682, 534_732, 1_069_466]);

    assert_eq!(
        p.total_len(),
        2_138_934,
        "coverage must sum to the total length"
    );
}

// ============================================================================
// Coverage and Ordering Properties
// ============================================================================

#[test]
fn test_coverage_is_exact_and_gap_free() {
    for max in [1u64, 2, 64, 1024, 1 << 20] {
        for total in [0u64, 1, 9, 63, 64, 65, 127, 1000, 4096, 70_001, 2_138_934] {
            let p = plan(total, max);

            let mut next_offset = 0u64;
            for run in &p {
                assert_eq!(
                    run.offset, next_offset,
                    "plan({total}, {max}): runs must tile [0, total) without gaps"
                );
                next_offset = run.end();
            }
            assert_eq!(
                next_offset, total,
                "plan({total}, {max}): coverage must end exactly at total"
            );
        }
    }
}

#[test]
fn test_offsets_strictly_increase_and_sizes_halve() {
    let p = plan(2_138_934, 1024);

    for pair in p.descriptors().windows(2) {
        assert!(pair[0].offset < pair[1].offset, "offsets must increase");
        assert!(
            pair[0].block_size > pair[1].block_size,
            "block sizes must decrease"
        );
        assert_eq!(
            pair[0].block_size % pair[1].block_size,
            0,
            "each block size must divide the previous one"
        );
    }
}

#[test]
fn test_emitted_block_sizes_are_aligned() {
    // Every loop-emitted run starts at a multiple of its own block size
    for total in [1024u64, 1025, 1026, 999_999, 2_138_934] {
        let p = plan(total, 1024);
        for run in &p {
            assert_eq!(
                run.offset % run.block_size,
                0,
                "plan({total}): offset {} must be aligned to block size {}",
                run.offset,
                run.block_size
            );
        }
    }
}

#[test]
fn test_descriptor_count_bound() {
    // At most log2(max_block_size) + 1 runs, regardless of file size
    for max in [64u64, 1024, 1 << 20] {
        let bound = max.ilog2() as usize + 1;
        for total in [max, max + 1, max * 3 + 7, 2_138_934, u32::MAX as u64] {
            let p = plan(total, max);
            assert!(
                p.len() <= bound,
                "plan({total}, {max}) produced {} runs, bound is {bound}",
                p.len()
            );
        }
    }
}

#[test]
fn test_zero_length_is_empty_plan() {
    let p = plan(0, 1024);
    assert!(p.is_empty(), "zero-length input must produce an empty plan");
    assert_eq!(p.total_len(), 0);
}

// ============================================================================
// Configuration Validation
// ============================================================================

#[test]
fn test_power_of_two_validation() {
    assert!(PlanConfig::new(2).is_ok());
    assert!(PlanConfig::new(1024).is_ok());
    assert!(PlanConfig::new(1025).is_err());
    assert!(PlanConfig::new(0).is_err());
}

#[test]
fn test_invalid_config_fails_before_planning() {
    let planner = Planner::new(PlanConfig::default().with_max_block_size(1000));
    let err = planner.plan(4096).unwrap_err();
    assert!(
        matches!(err, DigestError::InvalidConfig { .. }),
        "non-power-of-two max block size must fail with InvalidConfig"
    );
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_plans_are_deterministic() {
    for total in [0u64, 9, 1025, 2_138_934] {
        assert_eq!(plan(total, 1024), plan(total, 1024));
    }
}
