//! Example demonstrating word-search board generation.
//!
//! This example shows how to:
//! - Create a `BoardGenerator` from a `GeneratorConfig`
//! - Generate a board from a random seed, a fixed seed, or a phrase
//! - Display the grid, the seed, and where every word was placed
//! - Sample many boards and keep the one using a preferred direction most
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_board
//! ```
//!
//! Custom word list and grid size:
//!
//! ```sh
//! cargo run --example generate_board -- --size 12 --word puzzle --word search
//! ```
//!
//! Reproduce a board from its seed or from a phrase:
//!
//! ```sh
//! cargo run --example generate_board -- --seed <64 hex digits>
//! cargo run --example generate_board -- --phrase "daily puzzle"
//! ```
//!
//! Prefer a direction by sampling (default budget: 10000 boards):
//!
//! ```sh
//! cargo run --example generate_board -- --prefer diagonal --max-tries 10000
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use wordlace_core::{Direction, Word};
use wordlace_generator::{BoardGenerator, BoardSeed, GeneratedBoard, GeneratorConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PreferredDirection {
    Right,
    Down,
    Left,
    Up,
    Diagonal,
}

impl From<PreferredDirection> for Direction {
    fn from(preferred: PreferredDirection) -> Self {
        match preferred {
            PreferredDirection::Right => Self::Right,
            PreferredDirection::Down => Self::Down,
            PreferredDirection::Left => Self::Left,
            PreferredDirection::Up => Self::Up,
            PreferredDirection::Diagonal => Self::DiagonalDownRight,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid side length.
    #[arg(long, value_name = "SIZE", default_value_t = 10)]
    size: u8,

    /// Word to place (repeatable). Defaults to the reference list.
    #[arg(short, long = "word", value_name = "WORD", num_args = 1..)]
    words: Vec<String>,

    /// Fixed seed as 64 hex digits.
    #[arg(long, value_name = "SEED", conflicts_with = "phrase")]
    seed: Option<BoardSeed>,

    /// Derive the seed from a phrase.
    #[arg(long, value_name = "PHRASE")]
    phrase: Option<String>,

    /// Direction to prefer when sampling boards.
    #[arg(long, value_name = "DIRECTION")]
    prefer: Option<PreferredDirection>,

    /// Maximum boards to sample when a preferred direction is set.
    #[arg(long, value_name = "COUNT", default_value_t = 10_000)]
    max_tries: usize,
}

const REFERENCE_WORDS: [&str; 6] =
    ["swift", "kotlin", "objectivec", "variable", "java", "mobile"];

fn main() {
    env_logger::init();
    let args = Args::parse();

    let word_list: Vec<&str> = if args.words.is_empty() {
        REFERENCE_WORDS.to_vec()
    } else {
        args.words.iter().map(String::as_str).collect()
    };
    let words: Vec<Word> = match word_list.iter().map(|word| word.parse()).collect() {
        Ok(words) => words,
        Err(err) => {
            eprintln!("Invalid word: {err}");
            process::exit(2);
        }
    };

    let config = match GeneratorConfig::new(args.size, words) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Invalid configuration: {err}");
            process::exit(2);
        }
    };
    let generator = BoardGenerator::new(config);

    let seed = args
        .seed
        .or_else(|| args.phrase.as_deref().map(BoardSeed::from_phrase));

    if let Some(seed) = seed {
        match generator.generate_with_seed(seed) {
            Ok(board) => print_board(&board, None),
            Err(err) => {
                eprintln!("Generation failed: {err}");
                process::exit(1);
            }
        }
        return;
    }

    let Some(preferred) = args.prefer else {
        match generator.generate() {
            Ok(board) => print_board(&board, None),
            Err(err) => {
                eprintln!("Generation failed: {err}");
                process::exit(1);
            }
        }
        return;
    };

    if args.max_tries == 0 {
        eprintln!("--max-tries must be at least 1.");
        process::exit(1);
    }

    let direction = Direction::from(preferred);
    let best = (0..args.max_tries)
        .into_par_iter()
        .filter_map(|_| {
            let board = generator.generate().ok()?;
            let score = direction_count(&board, direction);
            Some((board, score))
        })
        .max_by(|a, b| a.1.cmp(&b.1));

    if let Some((board, score)) = best {
        print_board(&board, Some((direction, args.max_tries, score)));
        return;
    }

    eprintln!("No board could be generated with this configuration.");
    process::exit(1);
}

fn direction_count(board: &GeneratedBoard, direction: Direction) -> usize {
    board
        .answers
        .entries()
        .iter()
        .filter(|entry| entry.placement().direction() == direction)
        .count()
}

fn print_board(board: &GeneratedBoard, selection: Option<(Direction, usize, usize)>) {
    println!("Seed:");
    println!("  {}", board.seed);
    println!();

    if let Some((direction, max_tries, score)) = selection {
        println!("Selection:");
        println!("  Preferred direction: {direction}");
        println!("  Max tries: {max_tries}");
        println!("  Words along it: {score}");
        println!();
    }

    println!("Board:");
    for line in board.grid.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Answers:");
    for entry in board.answers.entries() {
        println!(
            "  {} {} from {}",
            entry.word(),
            entry.placement().direction(),
            entry.placement().start()
        );
    }
}
