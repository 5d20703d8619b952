#![no_main]

use libfuzzer_sys::fuzz_target;
use name_trie_fuzz::{fuzz_that_verify_rejects_invalid_proofs, FuzzProof};

fuzz_target!(|input: FuzzProof| {
	fuzz_that_verify_rejects_invalid_proofs::<name_trie::NameLayout>(&input);
	fuzz_that_verify_rejects_invalid_proofs::<name_trie::StrictNameLayout>(&input);
});
