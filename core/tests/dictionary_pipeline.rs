// core/tests/dictionary_pipeline.rs
//
// End-to-end: raw word list -> trie -> solver on a 4x4 board.

use boggle_core::{normalize_line, Board, Config, DictionaryLoader, Solver, Token};

const WORD_LIST: &str = "\
# sample word list
quit
quite
Qatar
tie's
tile
tiles
lie
lies
site
sit
Iraq
blooooop
";

fn board(rows: &[&str]) -> Board {
    Board::from_rows(
        rows.iter()
            .map(|r| r.chars().filter_map(Token::from_char).collect())
            .collect(),
    )
    .unwrap()
}

#[test]
fn normalizer_examples() {
    let l = |s: &str| s.bytes().filter_map(Token::letter).collect::<Vec<_>>();
    assert_eq!(normalize_line("blooooop"), l("BLOOOOOP"));
    assert!(normalize_line("Qat").is_empty());
    assert_eq!(
        normalize_line("quilt"),
        [vec![Token::Qu], l("ILT")].concat()
    );
    assert!(normalize_line("# ignore").is_empty());
    assert_eq!(normalize_line("don't"), l("DONT"));
}

#[test]
fn word_list_to_solution() {
    let mut loader = DictionaryLoader::new();
    loader.extend(WORD_LIST.lines());
    let (trie, stats) = loader.finish();
    assert_eq!(stats.comments, 1);
    assert_eq!(stats.rejected, 2);
    assert_eq!(stats.inserted, 10);

    // Q I T E
    // X L S X
    // X E X X
    // X X X X
    let solver = Solver::new(trie, Config::default());
    let b = board(&["QITE", "XLSX", "XEXX", "XXXX"]);
    let solution = solver.solve(&b).unwrap();

    // I never touches an E, so TIES / LIE / LIES are absent
    assert_eq!(
        solution.words,
        vec!["QUITE", "TILES", "QUIT", "SITE", "TILE", "SIT"]
    );
    assert!(!solution.words.contains(&"QATAR".to_string()));
    assert!(solution.raw_hits >= solution.words.len());
}
