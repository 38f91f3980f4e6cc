//! Known-answer vectors (FIPS 180-4 examples and NIST CAVP long messages)

/// One message and its expected digest
#[derive(Debug, Clone, Copy)]
pub struct KnownAnswer {
    /// Short label for reports
    pub name: &'static str,
    /// Repeated unit the message is built from
    pub unit: &'static [u8],
    /// How many times `unit` repeats
    pub repeat: usize,
    /// Expected digest, lowercase hex
    pub expected: &'static str,
}

impl KnownAnswer {
    /// Materialize the message bytes
    pub fn message(&self) -> Vec<u8> {
        self.unit.repeat(self.repeat)
    }
}

/// Built-in vector table used by the self-test binary
pub const KNOWN_ANSWERS: &[KnownAnswer] = &[
    KnownAnswer {
        name: "empty",
        unit: b"",
        repeat: 1,
        expected: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    },
    KnownAnswer {
        name: "abc",
        unit: b"abc",
        repeat: 1,
        expected: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    KnownAnswer {
        name: "448-bit",
        unit: b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        repeat: 1,
        expected: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    },
    KnownAnswer {
        name: "896-bit",
        unit: b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmn\
hijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        repeat: 1,
        expected: "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1",
    },
    KnownAnswer {
        name: "million-a",
        unit: b"a",
        repeat: 1_000_000,
        expected: "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
    },
];
