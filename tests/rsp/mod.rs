//! Basic parser and datastructures for known answer tests.
//!
//! Understands the byte-oriented `.rsp` layout used by the NIST CAVP, both the
//! hash layout (`[L = ..]` header, `MD = ` results) and the XOF layout
//! (`[Outputlen = ..]` header, `Output = ` results).
#![allow(dead_code)]

use std::{fs, path::Path};

pub struct KatSet {
    /// Digest length, or output length for XOFs, in bits
    pub length: usize,
    pub tests: Vec<Test>,
}

pub struct Test {
    pub len: usize,
    pub msg: Vec<u8>,
    pub digest: String,
}

impl KatSet {
    pub fn load(path: &Path) -> Self {
        let content = fs::read_to_string(path).expect("unable to read test file");
        Self::parse(&content)
    }

    fn parse(inp: &str) -> Self {
        let mut tests = vec![];
        let mut lines = inp
            .lines()
            .filter(|line| !(line.starts_with('#') || line.is_empty()));

        let first_line = lines.next().expect("empty file");
        let length = first_line
            .strip_prefix("[L = ")
            .or_else(|| first_line.strip_prefix("[Outputlen = "))
            .expect("No length")
            .strip_suffix(']')
            .expect("missing ']'")
            .parse()
            .expect("length can't be parsed as usize");

        while let Some(len_line) = lines.next() {
            let len = len_line
                .strip_prefix("Len = ")
                .expect("missing Len")
                .parse()
                .expect("unable to parse Len");
            assert_eq!(0, len % 8);

            let mut msg = hex::decode(
                lines
                    .next()
                    .expect("missing Msg")
                    .strip_prefix("Msg = ")
                    .expect("missing msg"),
            )
            .expect("unable to decode msg");
            msg.truncate(len / 8);
            let digest_line = lines.next().expect("missing MD");
            let digest = digest_line
                .strip_prefix("MD = ")
                .or_else(|| digest_line.strip_prefix("Output = "))
                .expect("missing MD")
                .to_owned();

            tests.push(Test { len, msg, digest });
        }
        KatSet { length, tests }
    }
}
