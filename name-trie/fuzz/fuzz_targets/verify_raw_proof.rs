#![no_main]

use libfuzzer_sys::fuzz_target;
use name_trie_fuzz::fuzz_that_verify_never_panics;

fuzz_target!(|input: (Vec<Vec<u8>>, [u8; 32])| {
	fuzz_that_verify_never_panics::<name_trie::NameLayout>(&input.0, &input.1);
	fuzz_that_verify_never_panics::<name_trie::StrictNameLayout>(&input.0, &input.1);
});
