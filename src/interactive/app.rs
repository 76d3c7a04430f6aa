//! TUI application state and logic

use crate::core::Hints;
use crate::game::{
    Board, GameConfig, GameError, INVALID_WORD, Key, KeySource, RngSource, RoundController,
    RoundState, WIN_MESSAGE,
};
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub config: GameConfig,
    pub view: BoardView,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    GameOver,
}

/// What the board currently shows
#[derive(Debug, Clone, Default)]
pub struct BoardView {
    pub rows: Vec<RowView>,
    pub feedback: String,
    /// Row flashing after an unknown word
    pub rejected_row: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct RowView {
    pub letters: Vec<u8>,
    pub hints: Option<Hints>,
    pub lie: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by round index
    pub guess_distribution: Vec<usize>,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, config: GameConfig) -> Self {
        Self {
            dictionary,
            config,
            view: BoardView::default(),
            messages: vec![Message {
                text: "Welcome! Every hint after a miss hides exactly one lie.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics {
                guess_distribution: vec![0; config.rounds],
                ..Statistics::default()
            },
            input_mode: InputMode::Playing,
        }
    }

    /// Clear the board for a fresh game
    pub fn start_game(&mut self) {
        self.view = BoardView {
            rows: vec![RowView::default(); self.config.rounds],
            ..BoardView::default()
        };
        self.input_mode = InputMode::Playing;
        self.add_message(
            &format!("New game: {} rounds to find the word.", self.config.rounds),
            MessageStyle::Info,
        );
    }

    /// Record the outcome of a finished game
    pub fn finish_game(&mut self, state: RoundState) {
        self.stats.total_games += 1;
        if let RoundState::Won { round } = state {
            self.stats.games_won += 1;
            if let Some(slot) = self.stats.guess_distribution.get_mut(round) {
                *slot += 1;
            }
        }
        self.input_mode = InputMode::GameOver;
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn row_mut(&mut self, round: usize) -> Option<&mut RowView> {
        self.view.rows.get_mut(round)
    }
}

/// Board that updates the view and redraws the terminal
pub struct TerminalBoard<'t, 'a, B: ratatui::backend::Backend> {
    pub terminal: &'t mut Terminal<B>,
    pub app: &'t mut App<'a>,
}

impl<B: ratatui::backend::Backend> TerminalBoard<'_, '_, B> {
    fn redraw(&mut self) -> Result<(), GameError> {
        let app = &*self.app;
        self.terminal.draw(|f| super::rendering::ui(f, app))?;
        Ok(())
    }
}

impl<B: ratatui::backend::Backend> Board for TerminalBoard<'_, '_, B> {
    fn update_guess(&mut self, round: usize, letters: &[u8]) -> Result<(), GameError> {
        self.app.view.rejected_row = None;
        if let Some(row) = self.app.row_mut(round) {
            row.letters = letters.to_vec();
        }
        self.redraw()
    }

    fn reveal_hint(&mut self, round: usize, hints: &Hints) -> Result<(), GameError> {
        if let Some(row) = self.app.row_mut(round) {
            row.hints = Some(*hints);
        }
        self.redraw()
    }

    fn feedback(&mut self, message: &str) -> Result<(), GameError> {
        self.app.view.feedback = message.to_string();
        if !message.is_empty() {
            let style = match message {
                INVALID_WORD => MessageStyle::Error,
                WIN_MESSAGE => MessageStyle::Success,
                _ => MessageStyle::Info,
            };
            self.app.add_message(&message.replace('\n', " "), style);
        }
        self.redraw()
    }

    fn mark_lie(&mut self, round: usize, position: usize) -> Result<(), GameError> {
        if let Some(row) = self.app.row_mut(round) {
            row.lie = Some(position);
        }
        self.redraw()
    }

    fn reject_guess(&mut self, round: usize) -> Result<(), GameError> {
        self.app.view.rejected_row = Some(round);
        self.redraw()
    }
}

/// Keys read from the terminal; Esc or Ctrl-C ends input
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> Result<Option<Key>, GameError> {
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };

            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(None);
                }
                KeyCode::Esc => return Ok(None),
                KeyCode::Enter => return Ok(Some(Key::Enter)),
                KeyCode::Backspace | KeyCode::Delete => return Ok(Some(Key::Delete)),
                KeyCode::Char(c) => {
                    if let Some(key) = Key::from_char(c) {
                        return Ok(Some(key));
                    }
                }
                _ => {}
            }
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let dictionary = app.dictionary;
    let config = app.config;
    let mut rng = RngSource::from_seed(config.seed);

    loop {
        app.start_game();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let mut game = RoundController::with_random_answer(dictionary, &config, &mut rng)?;
        let result = {
            let mut board = TerminalBoard {
                terminal: &mut *terminal,
                app: &mut app,
            };
            game.play(&mut TerminalKeys, &mut board, dictionary)
        };

        match result {
            Ok(state) => app.finish_game(state),
            Err(GameError::InputClosed) => return Ok(()),
            Err(err) => return Err(err.into()),
        }
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if !wait_for_new_game()? {
            return Ok(());
        }
    }
}

/// Block until the player asks for a new game (`true`) or quits (`false`)
fn wait_for_new_game() -> Result<bool> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(false);
                }
                KeyCode::Char('q') | KeyCode::Esc => return Ok(false),
                KeyCode::Char('n') => return Ok(true),
                _ => {
                    // In game-over mode, ignore other keys
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::collect_guess;
    use ratatui::backend::TestBackend;
    use std::collections::VecDeque;

    struct ScriptedKeys(VecDeque<Key>);

    impl KeySource for ScriptedKeys {
        fn next_key(&mut self) -> Result<Option<Key>, GameError> {
            Ok(self.0.pop_front())
        }
    }

    fn typing(text: &str) -> ScriptedKeys {
        ScriptedKeys(text.chars().filter_map(Key::from_char).collect())
    }

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["crane", "ghost"], ["mango"])
    }

    #[test]
    fn start_game_sizes_rows_to_rounds() {
        let dict = dictionary();
        let mut app = App::new(&dict, GameConfig::new(6, Some(1)));
        app.start_game();

        assert_eq!(app.view.rows.len(), 6);
        assert_eq!(app.stats.guess_distribution.len(), 6);
        assert_eq!(app.input_mode, InputMode::Playing);
    }

    #[test]
    fn terminal_board_tracks_a_whole_game() {
        let dict = dictionary();
        let mut app = App::new(&dict, GameConfig::default());
        app.start_game();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();

        let mut game = RoundController::new(
            Word::new("mango").unwrap(),
            &GameConfig::default(),
            RngSource::from_seed(Some(4)),
        )
        .unwrap();

        let state = {
            let mut board = TerminalBoard {
                terminal: &mut terminal,
                app: &mut app,
            };
            game.play(&mut typing("zzzzz+-----crane+mango+"), &mut board, &dict)
                .unwrap()
        };
        app.finish_game(state);

        assert_eq!(state, RoundState::Won { round: 1 });
        assert_eq!(app.view.rows[0].letters, b"CRANE");
        assert_eq!(app.view.rows[0].lie, game.lies().position_for(0));
        assert_eq!(app.view.rows[1].hints, Some(Hints::PERFECT));
        assert_eq!(app.view.feedback, WIN_MESSAGE);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == INVALID_WORD && matches!(m.style, MessageStyle::Error))
        );
    }

    #[test]
    fn rejected_row_clears_on_next_edit() {
        let dict = dictionary();
        let mut app = App::new(&dict, GameConfig::default());
        app.start_game();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut board = TerminalBoard {
            terminal: &mut terminal,
            app: &mut app,
        };

        let result = collect_guess(0, &mut typing("zzzzz+"), &mut board, &dict);
        assert!(matches!(result, Err(GameError::InputClosed)));
        assert_eq!(board.app.view.rejected_row, Some(0));

        board.update_guess(0, b"ZZZZ").unwrap();
        assert_eq!(board.app.view.rejected_row, None);
    }

    #[test]
    fn loss_is_counted_without_a_win() {
        let dict = dictionary();
        let mut app = App::new(&dict, GameConfig::default());
        app.finish_game(RoundState::Lost);

        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
    }

    #[test]
    fn messages_are_capped() {
        let dict = dictionary();
        let mut app = App::new(&dict, GameConfig::default());
        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "m9");
    }
}
