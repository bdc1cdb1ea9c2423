#![no_main]

use libfuzzer_sys::fuzz_target;
use md5::{Digest as _, Md5};
use pagededup::{HashState, digest_of};

fuzz_target!(|input: (Vec<u8>, Vec<u8>)| {
    let (data, splits) = input;

    // Verify: one-shot matches the reference implementation
    let expected = digest_of(&data);
    assert_eq!(expected.as_bytes().as_slice(), Md5::digest(&data).as_slice());

    // Verify: any chunking gives the same digest
    let mut state = HashState::new();
    let mut rest = data.as_slice();
    for &split in &splits {
        let n = (split as usize).min(rest.len());
        let (head, tail) = rest.split_at(n);
        state.append(head);
        rest = tail;
    }
    state.append(rest);

    assert_eq!(state.len(), data.len() as u64);
    assert_eq!(state.finish(), expected);
});
