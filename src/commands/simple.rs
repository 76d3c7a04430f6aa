//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: each line typed replaces the current guess.

use crate::core::{Hints, LENGTH, Word};
use crate::game::{
    Board, GameConfig, GameError, Key, KeySource, RngSource, RoundController, RoundState,
};
use crate::output::formatters::{colored_guess, lie_marker};
use crate::wordlists::Dictionary;
use colored::Colorize;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple(dictionary: &Dictionary, config: &GameConfig) -> Result<(), GameError> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Lying Wordle - Line Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the {LENGTH}-letter word in {} rounds. After every miss, exactly one",
        config.rounds
    );
    println!("of the colored hints is a lie. The lies are revealed when the game ends.\n");
    println!("  {} right letter, right place", " G ".black().on_green());
    println!("  {} letter elsewhere in the word", " Y ".black().on_yellow());
    println!("  {} letter not in the word\n", " - ".white().on_bright_black());
    println!("Type 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut keys = LineKeys::new(stdin.lock());
    let mut rng = RngSource::from_seed(config.seed);

    loop {
        let answer = dictionary.choose_answer(&mut rng)?.clone();
        let mut game = RoundController::new(answer, config, &mut rng)?;
        let mut board = ConsoleBoard::default();

        match game.play(&mut keys, &mut board, dictionary) {
            Ok(RoundState::Won { round }) => {
                println!(
                    "\n  Solved in {} {}",
                    (round + 1).to_string().bright_cyan().bold(),
                    if round == 0 { "guess" } else { "guesses" }
                );
            }
            Ok(_) => {}
            Err(GameError::InputClosed) => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Err(err) => return Err(err),
        }

        if !play_again(&mut keys)? {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }
        println!("\n🔄 New game started!\n");
    }
}

fn play_again<R: BufRead>(keys: &mut LineKeys<R>) -> Result<bool, GameError> {
    let answer = keys.read_line("Play again? (yes/no)")?;
    Ok(matches!(
        answer.as_deref().map(str::to_lowercase).as_deref(),
        Some("yes" | "y")
    ))
}

/// Keys from line-based input
///
/// Every line clears the buffer, types its letters and presses Enter.
struct LineKeys<R> {
    input: R,
    pending: VecDeque<Key>,
}

impl<R: BufRead> LineKeys<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, GameError> {
        print!("{prompt}: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead> KeySource for LineKeys<R> {
    fn next_key(&mut self) -> Result<Option<Key>, GameError> {
        while self.pending.is_empty() {
            let Some(line) = self.read_line("Guess")? else {
                return Ok(None);
            };

            if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
                return Ok(None);
            }

            if line.chars().filter(char::is_ascii_alphabetic).count() != LENGTH {
                println!("❌ Guesses must be exactly {LENGTH} letters\n");
                continue;
            }

            self.pending.extend([Key::Delete; LENGTH]);
            self.pending
                .extend(line.chars().filter(char::is_ascii_alphabetic).filter_map(Key::from_char));
            self.pending.push_back(Key::Enter);
        }

        Ok(self.pending.pop_front())
    }
}

/// Board printing each resolved round as colored tiles
#[derive(Default)]
struct ConsoleBoard {
    typed: Vec<u8>,
    rounds: Vec<Word>,
}

impl Board for ConsoleBoard {
    fn update_guess(&mut self, _round: usize, letters: &[u8]) -> Result<(), GameError> {
        self.typed = letters.to_vec();
        Ok(())
    }

    fn reveal_hint(&mut self, round: usize, hints: &Hints) -> Result<(), GameError> {
        let Ok(word) = Word::from_letters(&self.typed) else {
            return Ok(());
        };
        println!("  {:>2}. {}\n", round + 1, colored_guess(&word, hints));
        self.rounds.push(word);
        Ok(())
    }

    fn feedback(&mut self, message: &str) -> Result<(), GameError> {
        if !message.is_empty() {
            println!("{}\n", message.bright_yellow().bold());
        }
        Ok(())
    }

    fn mark_lie(&mut self, round: usize, position: usize) -> Result<(), GameError> {
        let word = self
            .rounds
            .get(round)
            .map_or_else(String::new, ToString::to_string);
        println!(
            "  {:>2}. {}  {}",
            round + 1,
            word,
            format!("lie at letter {}", position + 1).bright_red()
        );
        println!("      {}", lie_marker(position).bright_red().bold());
        Ok(())
    }
}
