use nwalign_alignment_rs::pairwise::{nw, scoring};
use nwalign_core_rs::parallelism;

use super::*;

type Engine = nw::Engine<Score, Symbol, scoring::Linear<Score, Symbol>>;

struct Workload<'a> {
    seq1: &'a str,
    seq2: &'a str,
    aligned: (&'a str, &'a str),
    score: Score,
    rle: &'a str,
}

fn ensure(engine: &Engine, w: &Workload<'_>) {
    let result = engine
        .align(w.seq1, w.seq2)
        .unwrap_or_else(|err| panic!("Aligner failed: {:?} & {:?}: {err}", w.seq1, w.seq2));

    assert_eq!(*result.score(), w.score);
    assert_eq!(rows(&result), (w.aligned.0.to_string(), w.aligned.1.to_string()));
    assert_eq!(result.rle(), w.rle);
    assert_eq!(result.rescore(engine.scoring()).unwrap(), w.score);
    assert_eq!(result.ungapped1(), w.seq1.as_bytes());
    assert_eq!(result.ungapped2(), w.seq2.as_bytes());

    // Ties may resolve differently, the optimum may not
    let swapped = engine.align(w.seq2, w.seq1).unwrap();
    assert_eq!(*swapped.score(), w.score);
    assert_eq!(swapped.rescore(engine.scoring()).unwrap(), w.score);
}

fn test_empty(engine: &Engine) {
    let workload = [
        Workload {
            seq1: "",
            seq2: "",
            aligned: ("", ""),
            score: 0,
            rle: "",
        },
        Workload {
            seq1: "ACGT",
            seq2: "",
            aligned: ("ACGT", "----"),
            score: -4,
            rle: "4^",
        },
        Workload {
            seq1: "",
            seq2: "ACG",
            aligned: ("---", "ACG"),
            score: -3,
            rle: "3v",
        },
    ];
    for w in &workload {
        ensure(engine, w);
    }
}

fn test_single_symbol(engine: &Engine) {
    let workload = [
        Workload {
            seq1: "A",
            seq2: "A",
            aligned: ("A", "A"),
            score: 2,
            rle: "1=",
        },
        Workload {
            seq1: "A",
            seq2: "G",
            aligned: ("A", "G"),
            score: -1,
            rle: "1X",
        },
    ];
    for w in &workload {
        ensure(engine, w);
    }
}

fn test_gapped(engine: &Engine) {
    let workload = [
        Workload {
            seq1: "GCATGCG",
            seq2: "GATTACA",
            aligned: ("GCA-TGCG", "G-ATTACA"),
            score: 4,
            rle: "1=1^1=1v1=1X1=1X",
        },
        Workload {
            seq1: "GATTACA",
            seq2: "GCATGCG",
            aligned: ("G-ATTACA", "GCA-TGCG"),
            score: 4,
            rle: "1=1v1=1^1=1X1=1X",
        },
        Workload {
            seq1: "AAGAA",
            seq2: "AGA",
            aligned: ("AAGAA", "-AG-A"),
            score: 4,
            rle: "1^2=1^1=",
        },
        Workload {
            seq1: "ACGTACGT",
            seq2: "ACGTAGCT",
            aligned: ("ACGTA-CGT", "ACGTAGC-T"),
            score: 12,
            rle: "5=1v1=1^1=",
        },
        Workload {
            seq1: "AAAA",
            seq2: "AA",
            aligned: ("AAAA", "--AA"),
            score: 2,
            rle: "2^2=",
        },
        Workload {
            seq1: "ACGT",
            seq2: "TGCA",
            aligned: ("-ACGT", "TGC-A"),
            score: -2,
            rle: "1v1X1=1^1X",
        },
        Workload {
            seq1: "GGAATT",
            seq2: "GAT",
            aligned: ("GGAATT", "-G-A-T"),
            score: 3,
            rle: "1^1=1^1=1^1=",
        },
    ];
    for w in &workload {
        ensure(engine, w);
    }
}

fn test_free_mismatches(engine: &Engine) {
    let workload = [Workload {
        seq1: "ACGT",
        seq2: "AGT",
        aligned: ("ACGT", "A-GT"),
        score: 3,
        rle: "1=1^2=",
    }];
    for w in &workload {
        ensure(engine, w);
    }
}

fn test_free_everything(engine: &Engine) {
    let workload = [Workload {
        seq1: "AAAA",
        seq2: "AA",
        aligned: ("AAAA", "--AA"),
        score: 0,
        rle: "2^2=",
    }];
    for w in &workload {
        ensure(engine, w);
    }
}

#[test]
fn test_all() {
    let mut engine = Engine::default();
    test_empty(&engine);
    test_single_symbol(&engine);
    test_gapped(&engine);

    engine.with_scoring(scoring::linear(1, 0, 0));
    test_free_mismatches(&engine);

    engine.with_scoring(scoring::linear(0, 0, 0));
    test_free_everything(&engine);
}

#[test]
fn test_alignment_invariants() {
    let engine = Engine::new(scoring::linear(3, -2, -4));
    let sequences = [
        "", "A", "AC", "GATTACA", "GCATGCG", "TTTTTTTT", "ACGTACGTTGCA", "CCCAAAGGGTTT",
    ];

    for seq1 in sequences {
        for seq2 in sequences {
            let alignment = engine.align(seq1, seq2).unwrap();
            assert_eq!(alignment.aligned1().len(), alignment.aligned2().len());
            assert!(alignment.len() >= seq1.len().max(seq2.len()));
            assert!(alignment.len() <= seq1.len() + seq2.len());
            assert_eq!(alignment.ungapped1(), seq1.as_bytes());
            assert_eq!(alignment.ungapped2(), seq2.as_bytes());
            assert_eq!(alignment.rescore(engine.scoring()).unwrap(), *alignment.score());
            assert_eq!(alignment.ops().count(), alignment.len());

            let swapped = engine.align(seq2, seq1).unwrap();
            assert_eq!(swapped.score(), alignment.score());
        }
    }
}

#[test]
fn test_identical_sequences() {
    let engine = Engine::default();
    for seq in ["A", "GATTACA", "ACGTACGTACGTACGT"] {
        let alignment = engine.align(seq, seq).unwrap();
        assert_eq!(*alignment.score(), 2 * seq.len() as Score);
        assert_eq!(alignment.rle(), format!("{}=", seq.len()));
        assert_eq!(invrle(&alignment.rle()), alignment.rle());
    }
}

#[test]
fn test_matrix_matches_alignment() {
    let scheme = scoring::Linear::<Score, Symbol>::default();
    let matrix = nw::build("GCATGCG", "GATTACA", &scheme).unwrap();
    assert_eq!(matrix.shape(), (8, 8));
    assert_eq!(matrix.row(7), &[-7, -4, -1, 2, 2, 2, 4, 4]);

    let alignment = nw::reconstruct("GCATGCG", "GATTACA", &scheme, &matrix).unwrap();
    assert_eq!(*alignment.score(), matrix.score());

    // Traceback never touches the matrix, repeated calls agree
    let again = nw::reconstruct("GCATGCG", "GATTACA", &scheme, &matrix).unwrap();
    assert_eq!(alignment, again);
}

#[test]
fn test_long_sequences() {
    let seq1 = "ACGT".repeat(64);
    let seq2 = "ACGGT".repeat(48);
    let engine = Engine::default();

    let alignment = engine.align(&seq1, &seq2).unwrap();
    assert_eq!(alignment.ungapped1(), seq1.as_bytes());
    assert_eq!(alignment.ungapped2(), seq2.as_bytes());
    assert_eq!(alignment.rescore(engine.scoring()).unwrap(), *alignment.score());
}

#[test]
fn test_custom_symbols() {
    let engine = nw::Engine::<i64, char, _>::new(scoring::linear(1, -1, -1));
    let seq1: Vec<char> = "kitten".chars().collect();
    let seq2: Vec<char> = "sitting".chars().collect();

    let alignment = engine.align(&seq1, &seq2).unwrap();
    assert_eq!(alignment.ungapped1(), seq1);
    assert_eq!(alignment.ungapped2(), seq2);
    assert_eq!(*alignment.score(), 1);
    assert_eq!(alignment.rescore(engine.scoring()).unwrap(), 1);
}

#[test]
fn test_align_all() {
    let pairs: Vec<(&str, &str)> = vec![
        ("GCATGCG", "GATTACA"),
        ("", ""),
        ("ACGT", ""),
        ("AAGAA", "AGA"),
        ("ACGTACGT", "ACGTAGCT"),
        ("GGAATT", "GAT"),
    ];

    let sequential = Engine::default();
    let expected: Vec<_> = pairs
        .iter()
        .map(|(seq1, seq2)| sequential.align(seq1, seq2).unwrap())
        .collect();

    for threads in [1, 2, 4] {
        let engine = Engine::default().with_thread_pool(parallelism::pool(threads).unwrap());
        let results: Vec<_> = engine
            .align_all(&pairs)
            .into_iter()
            .collect::<eyre::Result<_>>()
            .unwrap();
        assert_eq!(results, expected);
    }

    // No pool: rayon's global one
    let results = sequential.align_all(&pairs);
    assert_eq!(results.len(), pairs.len());
    for (result, expected) in results.into_iter().zip(expected) {
        assert_eq!(result.unwrap(), expected);
    }
}

#[test]
fn test_narrow_score_type() {
    let engine = nw::Engine::<i8, u8, scoring::Linear<i8, u8>>::default();

    let seq = "A".repeat(63);
    let alignment = engine.align(&seq, &seq).unwrap();
    assert_eq!(*alignment.score(), 126);

    // 64 matches score 128, one past i8::MAX
    let seq = "A".repeat(64);
    assert!(engine.align(&seq, &seq).is_err());
    assert!(engine.align(&"C".repeat(200), "").is_err());
    assert!(nw::build("AAA", "", &scoring::linear::<i32, u8>(2, -1, i32::MIN / 2 - 1)).is_err());
}
