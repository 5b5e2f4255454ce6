// These tests take too long for miri
#![cfg(not(miri))]
use std::path::Path;

use keccak_sponge::{Context, Sha3_224, Variant};

use crate::rsp::KatSet;

mod rsp;

fn load() -> KatSet {
    let kat_set = KatSet::load(Path::new("tests/test-vectors/SHA3_224Msg.rsp"));
    assert_eq!(224, kat_set.length);
    kat_set
}

#[test]
fn test_vectors() {
    for test in load().tests {
        let hash = keccak_sponge::sha3_224(&test.msg);
        assert_eq!(test.digest, hex::encode(hash), "length {} failed", test.len);
    }
}

#[test]
fn test_vectors_bytewise() {
    for test in load().tests {
        let mut hasher = Sha3_224::new();
        for byte in test.msg.chunks(1) {
            hasher.update(byte);
        }
        assert_eq!(
            test.digest,
            hex::encode(hasher.finalize()),
            "length {} failed",
            test.len
        );
    }
}

#[test]
fn test_vectors_context() {
    for test in load().tests {
        let mut context = Context::new(Variant::Sha3_224);
        for chunk in test.msg.chunks(13) {
            context.absorb(chunk).unwrap();
        }
        let digest = context.finalize_vec(224 / 8).unwrap();
        assert_eq!(test.digest, hex::encode(digest), "length {} failed", test.len);
    }
}
