#![no_main]

use libfuzzer_sys::fuzz_target;
use sha2::{Digest as _, Sha256};

use disksum::{PlanConfig, StreamHasher};

fuzz_target!(|data: Vec<u8>| {
    let expected: [u8; 32] = Sha256::digest(&data).into();

    // The plan must never alter the byte stream fed to the hash,
    // whatever block size schedules the reads
    for max in [1u64, 2, 64, 1024, 1 << 20] {
        let hasher = StreamHasher::new(PlanConfig::new(max).unwrap());
        let digest = hasher.digest_bytes(data.clone()).unwrap();
        assert_eq!(digest.as_bytes(), &expected);
    }
});
