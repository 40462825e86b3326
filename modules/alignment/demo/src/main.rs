use std::iter::once;

use eyre::Result;
use itertools::Itertools;
use log::info;

use nwalign_alignment_rs::pairwise::alignment::GAP;
use nwalign_alignment_rs::pairwise::nw::{self, LogTracer, ScoreMatrix, Tracer, Tracers};
use nwalign_alignment_rs::pairwise::{scoring, Op};
use nwalign_core_rs::parallelism;

type Score = i32;
type Symbol = u8;
type Engine = nw::Engine<Score, Symbol, scoring::Linear<Score, Symbol>>;

const SEQ1: &str = "GCATGCG";
const SEQ2: &str = "GATTACA";

// All available threads
const THREADS: isize = -1;

const BATCH: [(&str, &str); 6] = [
    ("GCATGCG", "GATTACA"),
    ("AAGAA", "AGA"),
    ("ACGTACGT", "ACGTAGCT"),
    ("ACGT", "TGCA"),
    ("GGAATT", "GAT"),
    ("ACGT", ""),
];

fn text(row: &[Option<Symbol>]) -> String {
    row.iter().map(|x| x.map_or(GAP, char::from)).collect()
}

/// Prints the alignment suffix after every traceback step.
struct Printer {
    width: usize,
}

impl Tracer<Score, Symbol> for Printer {
    fn step(
        &mut self,
        row: usize,
        col: usize,
        op: Op,
        aligned1: &[Option<Symbol>],
        aligned2: &[Option<Symbol>],
    ) {
        let width = self.width;
        println!(
            "  ({row}, {col}) {}  {:>width$}  {:>width$}",
            op.symbol(),
            text(aligned1),
            text(aligned2)
        );
    }
}

/// Score matrix with the first sequence down the rows and the second one across the columns.
fn table(seq1: &str, seq2: &str, matrix: &ScoreMatrix<Score>) -> String {
    let width = matrix
        .as_slice()
        .iter()
        .map(|x| x.to_string().len())
        .max()
        .unwrap_or(1)
        + 1;

    let header = once(GAP)
        .chain(seq2.chars())
        .map(|x| format!("{x:>width$}"))
        .join("");
    let rows = once(GAP)
        .chain(seq1.chars())
        .zip(matrix.iter_rows())
        .map(|(symbol, row)| {
            let cells = row.iter().map(|x| format!("{x:>width$}")).join("");
            format!("{symbol} {cells}")
        });
    once(format!("  {header}")).chain(rows).join("\n")
}

fn main() -> Result<()> {
    env_logger::init();

    let engine = Engine::default();
    let scheme = engine.scoring();

    let matrix = nw::build_traced(SEQ1, SEQ2, scheme, &mut LogTracer::default())?;
    println!("Score matrix, {SEQ1} vs {SEQ2} (match 2, mismatch -1, gap -1):");
    println!("{}\n", table(SEQ1, SEQ2, &matrix));

    println!("Traceback:");
    let mut tracers = Tracers::new(
        Printer {
            width: SEQ1.len() + SEQ2.len(),
        },
        LogTracer::default(),
    );
    let alignment = nw::reconstruct_traced(SEQ1, SEQ2, scheme, &matrix, &mut tracers)?;
    println!("\n{alignment}");
    println!("Score: {}, RLE: {}\n", alignment.score(), alignment.rle());

    let threads = parallelism::available(THREADS)?;
    let engine = engine.with_thread_pool(parallelism::pool(THREADS)?);
    info!("Aligning {} pairs with {} thread(s)", BATCH.len(), threads);

    for ((seq1, seq2), result) in BATCH.iter().zip(engine.align_all(&BATCH)) {
        let alignment = result?;
        println!(
            "{seq1} vs {seq2}: score {}, {}",
            alignment.score(),
            alignment.rle()
        );
    }
    Ok(())
}
