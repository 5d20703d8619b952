#![no_main]

use libfuzzer_sys::fuzz_target;
use name_trie_fuzz::fuzz_that_decode_is_stable;

fuzz_target!(|data: &[u8]| {
	fuzz_that_decode_is_stable::<name_trie::NameLayout>(data);
});
