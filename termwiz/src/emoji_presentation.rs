//! A representative table of codepoints whose default Unicode presentation
//! is emoji rather than text. This is a hand-maintained approximation of the
//! ranges listed in Unicode's `emoji-data.txt` (`Emoji_Presentation=Yes`)
//! covering the blocks that show up in real terminal traffic; it is not a
//! byte-for-byte reproduction of the full property table.

pub struct PresentationRanges(&'static [(u32, u32)]);

impl PresentationRanges {
    pub fn contains_u32(&self, c: u32) -> bool {
        self.0
            .binary_search_by(|&(lo, hi)| {
                if c < lo {
                    std::cmp::Ordering::Greater
                } else if c > hi {
                    std::cmp::Ordering::Less
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }
}

pub static EMOJI_PRESENTATION: PresentationRanges = PresentationRanges(&[
    (0x231a, 0x231b),
    (0x23e9, 0x23ec),
    (0x23f0, 0x23f0),
    (0x23f3, 0x23f3),
    (0x25fd, 0x25fe),
    (0x2614, 0x2615),
    (0x2648, 0x2653),
    (0x267f, 0x267f),
    (0x2693, 0x2693),
    (0x26a1, 0x26a1),
    (0x26aa, 0x26ab),
    (0x26bd, 0x26be),
    (0x26c4, 0x26c5),
    (0x26ce, 0x26ce),
    (0x26d4, 0x26d4),
    (0x26ea, 0x26ea),
    (0x26f2, 0x26f3),
    (0x26f5, 0x26f5),
    (0x26fa, 0x26fa),
    (0x26fd, 0x26fd),
    (0x2705, 0x2705),
    (0x270a, 0x270b),
    (0x2728, 0x2728),
    (0x274c, 0x274c),
    (0x274e, 0x274e),
    (0x2753, 0x2755),
    (0x2757, 0x2757),
    (0x2795, 0x2797),
    (0x27b0, 0x27b0),
    (0x27bf, 0x27bf),
    (0x2b1b, 0x2b1c),
    (0x2b50, 0x2b50),
    (0x2b55, 0x2b55),
    (0x1f004, 0x1f004),
    (0x1f0cf, 0x1f0cf),
    (0x1f18e, 0x1f18e),
    (0x1f191, 0x1f19a),
    (0x1f1e6, 0x1f1ff),
    (0x1f201, 0x1f201),
    (0x1f21a, 0x1f21a),
    (0x1f22f, 0x1f22f),
    (0x1f232, 0x1f23a),
    (0x1f250, 0x1f251),
    (0x1f300, 0x1f5ff),
    (0x1f600, 0x1f64f),
    (0x1f680, 0x1f6ff),
    (0x1f700, 0x1f77f),
    (0x1f780, 0x1f7ff),
    (0x1f800, 0x1f8ff),
    (0x1f900, 0x1f9ff),
    (0x1fa00, 0x1fa6f),
    (0x1fa70, 0x1faff),
]);
