//! Embedded default data
//!
//! The default vocabulary is compiled into the binary at build time; the
//! default letter-frequency table mirrors `data/frequency.json`.

// Include the generated word list from the build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));

/// Default single-letter frequency scores (relative English letter
/// frequencies, in percent)
pub const LETTER_SCORES: &[(u8, f64)] = &[
    (b'a', 8.167),
    (b'b', 1.492),
    (b'c', 2.782),
    (b'd', 4.253),
    (b'e', 12.702),
    (b'f', 2.228),
    (b'g', 2.015),
    (b'h', 6.094),
    (b'i', 6.966),
    (b'j', 0.153),
    (b'k', 0.772),
    (b'l', 4.025),
    (b'm', 2.406),
    (b'n', 6.749),
    (b'o', 7.507),
    (b'p', 1.929),
    (b'q', 0.095),
    (b'r', 5.987),
    (b's', 6.327),
    (b't', 9.056),
    (b'u', 2.758),
    (b'v', 0.978),
    (b'w', 2.360),
    (b'x', 0.150),
    (b'y', 1.974),
    (b'z', 0.074),
];
