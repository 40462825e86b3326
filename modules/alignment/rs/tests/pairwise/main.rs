mod global;

use nwalign_alignment_rs::pairwise::{alignment, Alignment};

pub type Score = i32;
pub type Symbol = u8;

/// Swaps gap operations, i.e. the RLE of the same alignment with the sequences exchanged.
pub fn invrle(rle: &str) -> String {
    let gapfirst = alignment::Op::GapFirst.symbol();
    let gapsecond = alignment::Op::GapSecond.symbol();
    rle.chars()
        .map(|x| {
            if x == gapfirst {
                gapsecond
            } else if x == gapsecond {
                gapfirst
            } else {
                x
            }
        })
        .collect::<String>()
}

/// Gapped rows as text, gaps rendered with '-'.
pub fn rows(alignment: &Alignment<Score, Symbol>) -> (String, String) {
    let [first, _, second] = alignment.render();
    (first, second)
}
