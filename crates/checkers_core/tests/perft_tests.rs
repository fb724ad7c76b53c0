use std::time::Instant;

use rayon::prelude::*;

use checkers_core::{perft, Board, Side};

const FULL_PERFT_ENV: &str = "FULL_PERFT";
const NODE_LIMIT: u64 = 5_000;

struct PerftCase {
    name: &'static str,
    side: Side,
    rows: [&'static str; 8],
    depths: &'static [(u8, u64)],
}

const START: [&str; 8] = [
    "_b_b_b_b", //
    "b_b_b_b_", //
    "_b_b_b_b", //
    "________", //
    "________", //
    "w_w_w_w_", //
    "_w_w_w_w", //
    "w_w_w_w_", //
];

fn cases() -> Vec<PerftCase> {
    vec![
        PerftCase {
            name: "start, black to move",
            side: Side::Black,
            rows: START,
            depths: &[(1, 7), (2, 49), (3, 302), (4, 1469), (5, 7361)],
        },
        PerftCase {
            name: "start, white to move",
            side: Side::White,
            rows: START,
            depths: &[(1, 7), (2, 49), (3, 302), (4, 1469), (5, 7361)],
        },
        PerftCase {
            name: "quiet middlegame",
            side: Side::Black,
            rows: [
                "_W_____b", //
                "________", //
                "_b_b_w_b", //
                "______b_", //
                "___w___w", //
                "________", //
                "________", //
                "w_w_B_B_", //
            ],
            depths: &[(1, 10)],
        },
        PerftCase {
            name: "king in a cross",
            side: Side::Black,
            rows: [
                "________", //
                "________", //
                "_w_w____", //
                "__B_____", //
                "_w_w____", //
                "________", //
                "________", //
                "________", //
            ],
            depths: &[(1, 4)],
        },
    ]
}

#[test]
fn start_position_matches_board_starting() {
    let parsed = Board::from_rows(Side::Black, &START).unwrap();
    assert_eq!(
        parsed.to_board_string(),
        Board::starting(8, Side::Black).to_board_string()
    );
}

#[test]
fn perft_reference_positions() {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();

    cases().par_iter().for_each(|case| {
        let board = Board::from_rows(case.side, &case.rows).unwrap();
        let start = Instant::now();
        let mut ran = Vec::new();

        for &(depth, expected) in case.depths {
            if !full && expected > NODE_LIMIT {
                eprintln!(
                    "Skipping depth {} for '{}' (expected {} nodes), set {}=1 to run all.",
                    depth, case.name, expected, FULL_PERFT_ENV
                );
                continue;
            }
            let got = perft(&board, depth);
            assert!(
                got == expected,
                "Perft mismatch for '{}' at depth {}: expected {}, got {}",
                case.name,
                depth,
                expected,
                got
            );
            ran.push(depth);
        }

        println!(
            "{} done: depths {:?}, elapsed {:.3?}",
            case.name,
            ran,
            start.elapsed()
        );
    });
}
