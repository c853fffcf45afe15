//! TUI application state and logic

use crate::core::{Error, FeedbackPattern, Word};
use crate::solver::entropy::{GuessMetrics, calculate_entropy, calculate_metrics};
use crate::solver::{RankedSuggestion, Session};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'d> {
    pub session: Session<'d>,
    /// Ranking for the current pool, best first
    pub suggestions: Vec<RankedSuggestion<'d>>,
    /// The word the next feedback applies to
    pub current_guess: Option<GuessInfo>,
    /// Entropy of the guess played at each turn, parallel to the session history
    pub turn_entropies: Vec<f64>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub manual_word: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    ManualWord,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct GuessInfo {
    pub word: Word,
    pub metrics: GuessMetrics,
    /// False when the player typed the word in
    pub suggested: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Finished games this run; a game abandoned with `n` counts as lost
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses
    pub guess_distribution: [usize; 7],
}

impl<'d> App<'d> {
    #[must_use]
    pub fn new(session: Session<'d>) -> Self {
        let turn_entropies = session
            .history()
            .iter()
            .zip(session.earlier_pools())
            .map(|(turn, pool)| calculate_entropy(&turn.guess, pool.words()))
            .collect();

        let mut app = Self {
            session,
            suggestions: Vec::new(),
            current_guess: None,
            turn_entropies,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Suggestions are ranked by expected information.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter feedback (e.g. 'GY-GY', '21021' or '🟩🟨⬜🟩🟨')".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Feedback,
            manual_word: String::new(),
        };
        app.compute_suggestion();
        app
    }

    /// Re-rank the current pool and pick the top word as the current guess
    pub fn compute_suggestion(&mut self) {
        match self.session.suggest() {
            Ok(suggestions) => {
                self.current_guess = suggestions.first().map(|top| GuessInfo {
                    word: top.word.clone(),
                    metrics: calculate_metrics(top.word, self.session.pool().words()),
                    suggested: true,
                });
                self.suggestions = suggestions;
            }
            Err(Error::EmptyPool) => {
                self.suggestions.clear();
                self.current_guess = None;
                self.add_message(
                    "No candidates remain - pattern may be incorrect. Press 'u' to undo.",
                    MessageStyle::Error,
                );
            }
            Err(e) => {
                self.suggestions.clear();
                self.current_guess = None;
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn handle_feedback(&mut self, feedback: &str) {
        let pattern = match FeedbackPattern::parse(feedback) {
            Ok(pattern) => pattern,
            Err(e) => {
                self.add_message(
                    &format!("Invalid pattern: {e}. Use G/Y/- or 🟩🟨⬜"),
                    MessageStyle::Error,
                );
                return;
            }
        };

        let Some(guess) = self.current_guess.take() else {
            self.add_message("No guess to give feedback for", MessageStyle::Error);
            return;
        };

        let candidates_after = match self.session.apply(guess.word.clone(), pattern) {
            Ok(remaining) => remaining,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                self.current_guess = Some(guess);
                return;
            }
        };
        self.turn_entropies.push(guess.metrics.entropy);
        self.input_buffer.clear();

        if pattern.is_solved() {
            self.record_win();
        } else if candidates_after == 0 {
            self.compute_suggestion();
        } else {
            self.compute_suggestion();
            self.add_message(
                &format!("{candidates_after} candidates remaining"),
                MessageStyle::Info,
            );
        }
    }

    fn record_win(&mut self) {
        self.stats.games_won += 1;
        self.stats.total_games += 1;
        let guess_count = self.session.history().len();
        if let Some(slot) = self.stats.guess_distribution.get_mut(guess_count) {
            *slot += 1;
        }

        self.input_mode = InputMode::WinCelebration;
        self.suggestions.clear();

        let celebration = match guess_count {
            1 => "🎯 HOLE IN ONE! 🌟",
            2 => "🔥 Two guesses! 🔥",
            3 => "✨ Three guesses! ✨",
            4 => "👏 Four guesses! 👏",
            5 => "🎉 Five guesses! 🎉",
            6 => "😅 Got it in six! 😅",
            _ => "🎊 SOLVED! 🎊",
        };

        self.add_message(celebration, MessageStyle::Success);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Win recorded for a game of `guess_count` guesses, taken back by undo
    fn forget_win(&mut self, guess_count: usize) {
        self.stats.games_won = self.stats.games_won.saturating_sub(1);
        self.stats.total_games = self.stats.total_games.saturating_sub(1);
        if let Some(slot) = self.stats.guess_distribution.get_mut(guess_count) {
            *slot = slot.saturating_sub(1);
        }
    }

    pub fn new_game(&mut self) {
        if self.input_mode != InputMode::WinCelebration && !self.session.history().is_empty() {
            self.stats.total_games += 1;
        }
        self.session.reset();
        self.turn_entropies.clear();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;
        self.add_message("New game started!", MessageStyle::Info);
        self.compute_suggestion();
    }

    pub fn undo_last(&mut self) {
        let guess_count = self.session.history().len();
        if let Some(turn) = self.session.undo() {
            if self.input_mode == InputMode::WinCelebration {
                self.forget_win(guess_count);
            }
            self.turn_entropies.pop();
            self.input_mode = InputMode::Feedback;
            self.compute_suggestion();
            self.add_message(
                &format!("Undid {}", turn.guess.text().to_uppercase()),
                MessageStyle::Info,
            );
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.session.pool().len()
    }

    /// Bits of information the played guesses were expected to yield
    #[must_use]
    pub fn bits_gained(&self) -> f64 {
        self.turn_entropies.iter().sum()
    }

    /// Replace the current guess with the typed word
    pub fn use_manual_word(&mut self) {
        let word = match Word::new(&self.manual_word) {
            Ok(word) => word,
            Err(e) => {
                self.add_message(&format!("Invalid word: {e}"), MessageStyle::Error);
                return;
            }
        };

        let metrics = calculate_metrics(&word, self.session.pool().words());
        if let Some(best) = self.suggestions.first()
            && metrics.entropy < best.entropy
        {
            self.add_message(
                &format!(
                    "Note: {} had {:.2} bits ({:.2} more)",
                    best.word.text().to_uppercase(),
                    best.entropy,
                    best.entropy - metrics.entropy
                ),
                MessageStyle::Info,
            );
        }

        self.add_message(
            &format!(
                "Using: {} (entropy: {:.2} bits, {:.1}x reduction)",
                word.text().to_uppercase(),
                metrics.entropy,
                metrics.entropy.exp2()
            ),
            MessageStyle::Success,
        );
        self.current_guess = Some(GuessInfo {
            word,
            metrics,
            suggested: false,
        });
        self.input_mode = InputMode::Feedback;
        self.manual_word.clear();
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::WinCelebration => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('u') => self.undo_last(),
                _ => {}
            },
            InputMode::Feedback => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('u') => self.undo_last(),
                KeyCode::Tab => {
                    if self.candidates_count() > 0 {
                        self.input_mode = InputMode::ManualWord;
                        self.add_message("Enter your own word (5 letters)", MessageStyle::Info);
                    }
                }
                KeyCode::Char(c) => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    let input = std::mem::take(&mut self.input_buffer);
                    self.handle_feedback(&input);
                }
                _ => {}
            },
            InputMode::ManualWord => match key.code {
                KeyCode::Esc => {
                    self.input_mode = InputMode::Feedback;
                    self.manual_word.clear();
                    self.add_message("Cancelled manual word entry", MessageStyle::Info);
                }
                KeyCode::Tab => {
                    self.input_mode = InputMode::Feedback;
                    self.manual_word.clear();
                }
                KeyCode::Char(c) => {
                    if self.manual_word.len() < 5 && c.is_ascii_alphabetic() {
                        self.manual_word.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.manual_word.pop();
                }
                KeyCode::Enter => {
                    if self.manual_word.len() == 5 {
                        self.use_manual_word();
                    } else {
                        self.add_message("Word must be exactly 5 letters!", MessageStyle::Error);
                    }
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App<'_>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App<'_>,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Windows reports releases too
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;
    use crate::solver::RankerConfig;

    fn dictionary() -> Dictionary {
        Dictionary::from_entries(["abuse", "alarm", "alloy", "arose", "alive"]).0
    }

    fn app(dictionary: &Dictionary) -> App<'_> {
        App::new(Session::new(
            dictionary,
            RankerConfig::default().with_seed(Some(6)),
        ))
    }

    fn type_text(app: &mut App<'_>, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
        app.handle_key(KeyEvent::from(KeyCode::Enter));
    }

    #[test]
    fn starts_with_suggestion() {
        let dictionary = dictionary();
        let app = app(&dictionary);

        assert_eq!(app.suggestions.len(), 5);
        let guess = app.current_guess.as_ref().unwrap();
        assert!(guess.suggested);
        assert_eq!(&guess.word, app.suggestions[0].word);
        assert_eq!(app.candidates_count(), 5);
    }

    #[test]
    fn manual_word_then_feedback() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);

        app.handle_key(KeyEvent::from(KeyCode::Tab));
        assert_eq!(app.input_mode, InputMode::ManualWord);
        type_text(&mut app, "ALARM");
        assert_eq!(app.input_mode, InputMode::Feedback);
        assert_eq!(app.current_guess.as_ref().unwrap().word.text(), "alarm");

        type_text(&mut app, "GG---");
        assert_eq!(app.candidates_count(), 2);
        assert_eq!(app.turn_entropies.len(), 1);
        assert_eq!(app.suggestions.len(), 2);
    }

    #[test]
    fn invalid_feedback_keeps_state() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);

        type_text(&mut app, "GG");
        assert_eq!(app.candidates_count(), 5);
        assert!(app.session.history().is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
        assert!(app.current_guess.is_some());
    }

    #[test]
    fn solving_enters_celebration() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);

        type_text(&mut app, "GGGGG");
        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);

        app.handle_key(KeyEvent::from(KeyCode::Char('n')));
        assert_eq!(app.input_mode, InputMode::Feedback);
        assert_eq!(app.candidates_count(), 5);
    }

    #[test]
    fn contradictory_feedback_then_undo() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        app.manual_word = "alar".into();
        app.use_manual_word();
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);

        app.manual_word = "alarm".into();
        app.use_manual_word();
        type_text(&mut app, "GGGG-");
        assert_eq!(app.candidates_count(), 0);
        assert!(app.current_guess.is_none());

        app.handle_key(KeyEvent::from(KeyCode::Char('u')));
        assert_eq!(app.candidates_count(), 5);
        assert!(app.turn_entropies.is_empty());
        assert!(app.current_guess.is_some());
    }

    #[test]
    fn manual_word_outside_dictionary_is_played() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);

        app.manual_word = "crane".into();
        app.use_manual_word();
        let guess = app.current_guess.as_ref().unwrap();
        assert_eq!(guess.word.text(), "crane");
        assert!(!guess.suggested);

        type_text(&mut app, "-----");
        assert_eq!(app.session.history().len(), 1);
        assert_eq!(app.session.history()[0].guess.text(), "crane");
    }

    #[test]
    fn strict_session_rejects_manual_word_at_feedback() {
        let dictionary = dictionary();
        let mut app = App::new(
            Session::new(&dictionary, RankerConfig::default().with_seed(Some(6))).strict(true),
        );

        app.manual_word = "crane".into();
        app.use_manual_word();
        type_text(&mut app, "-----");

        assert!(app.session.history().is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
        assert_eq!(app.current_guess.as_ref().unwrap().word.text(), "crane");
    }

    #[test]
    fn undoing_a_win_takes_it_back() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);

        type_text(&mut app, "GGGGG");
        app.handle_key(KeyEvent::from(KeyCode::Char('u')));
        assert_eq!(app.input_mode, InputMode::Feedback);
        assert_eq!(app.stats.games_won, 0);
        assert_eq!(app.stats.total_games, 0);
        assert_eq!(app.stats.guess_distribution[1], 0);

        type_text(&mut app, "GGGGG");
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
    }

    #[test]
    fn abandoned_game_counts_as_played() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);

        // Nothing played yet
        app.new_game();
        assert_eq!(app.stats.total_games, 0);

        app.manual_word = "alarm".into();
        app.use_manual_word();
        type_text(&mut app, "GG---");
        app.new_game();
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);

        type_text(&mut app, "GGGGG");
        app.new_game();
        assert_eq!(app.stats.total_games, 2);
        assert_eq!(app.stats.games_won, 1);
    }

    #[test]
    fn seeds_entropies_from_played_turns() {
        let dictionary = dictionary();
        let mut session = Session::new(&dictionary, RankerConfig::default().with_seed(Some(6)));
        session.apply_text("alarm", "GG---").unwrap();
        session.apply_text("alloy", "G----").unwrap();

        let app = App::new(session);
        assert_eq!(app.turn_entropies.len(), 2);
        // ALLOY splits {ALLOY, ALIVE} into two singletons
        assert!((app.turn_entropies[1] - 1.0).abs() < 1e-12);
        assert!(app.turn_entropies[0] > 0.0);
    }

    #[test]
    fn ctrl_c_quits() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
