#![no_main]

use libfuzzer_sys::fuzz_target;
use pagededup::{DedupIndex, OwnerId};

const BLOCK: usize = 64;

fuzz_target!(|input: (Vec<u8>, Vec<u8>)| {
    let (data, owners) = input;
    let capacity = owners.len() % 8;
    let mut index = DedupIndex::new(capacity);

    let mut zero = 0u64;
    for (block, &owner) in data.chunks(BLOCK).zip(owners.iter().cycle()) {
        let before = index.stats();
        match index.observe(block, OwnerId::new(owner as u32)) {
            Ok(_) => {
                if block.iter().all(|&b| b == 0) {
                    zero += 1;
                    assert_eq!(index.stats().distinct_count, before.distinct_count);
                }
            }
            Err(_) => {
                // Verify: a failed insert changes nothing
                assert!(index.is_full());
                assert_eq!(index.stats(), before);
            }
        }

        let stats = index.stats();
        assert!(stats.distinct_count <= capacity);
        assert!(stats.distinct_cross_owner_matches <= stats.total_cross_owner_matches);
        assert_eq!(
            index.cross_owner_entries().count() as u64,
            stats.distinct_cross_owner_matches
        );
    }

    assert_eq!(index.stats().zero_count, zero);
});
