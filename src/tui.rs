//! TUI (Terminal User Interface) module for Word Scramble
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! - `EnteringWord` → (rejected submission) → `ShowingError` → (Enter/Esc) → `EnteringWord`
//! - A reset (Ctrl-R) always lands back in `EnteringWord` with a fresh board.

use crate::game_state::{GameInterface, GameState, UserAction, describe_word};
use crate::validation::Rejection;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const MAX_INPUT_LENGTH: usize = 32;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const POPUP_WIDTH_PERCENT: u16 = 60;
const POPUP_HEIGHT: u16 = 7;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const BADGE_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Yellow);
const INPUT_STYLE: Style = Style::new().fg(Color::White).bg(Color::DarkGray);

#[derive(Debug, Clone, PartialEq)]
enum TuiState {
    EnteringWord,
    ShowingError { title: String, message: String },
}

struct RenderContext<'a> {
    root_word: &'a str,
    current_input: &'a str,
    used_words: &'a [String],
    score: usize,
    state: &'a TuiState,
    status: &'a str,
}

/// Full-screen implementation of [`GameInterface`].
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    root_word: String,
    current_input: String,
    used_words: Vec<String>,
    score: usize,
    state: TuiState,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            root_word: String::new(),
            current_input: String::new(),
            used_words: Vec::new(),
            score: 0,
            state: TuiState::EnteringWord,
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            root_word: &self.root_word,
            current_input: &self.current_input,
            used_words: &self.used_words,
            score: self.score,
            state: &self.state,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn sync_state(&mut self, state: &GameState) {
        self.root_word = state.root_word().to_string();
        self.used_words = state.used_words().to_vec();
        self.score = state.score();
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Root word
                Constraint::Length(3), // Input + score
                Constraint::Min(5),    // Accepted words
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0], ctx.root_word);
        Self::render_input(f, chunks[1], ctx.current_input, ctx.score);
        Self::render_used_words(f, chunks[2], ctx.used_words);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state);

        if let TuiState::ShowingError { title, message } = ctx.state {
            let area = f.area();
            Self::render_error_popup(f, area, title, message);
        }
    }

    fn render_title(f: &mut Frame, area: Rect, root_word: &str) {
        let title = Paragraph::new(root_word.to_uppercase())
            .style(HEADER_STYLE)
            .block(Block::default().title("Root word").borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_input(f: &mut Frame, area: Rect, current_input: &str, score: usize) {
        let line = Line::from(vec![
            Span::styled(format!(" {current_input:<width$} ", width = MAX_INPUT_LENGTH), INPUT_STYLE),
            Span::raw("  "),
            Span::styled(format!("Score: {score}"), SUCCESS_STYLE),
        ]);
        let paragraph =
            Paragraph::new(line).block(Block::default().title("Enter your word").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_used_words(f: &mut Frame, area: Rect, used_words: &[String]) {
        let block = Block::default()
            .title(format!("Your words ({})", used_words.len()))
            .borders(Borders::ALL);

        let visible = usize::from(block.inner(area).height);
        let mut lines: Vec<Line> = used_words
            .iter()
            .take(visible)
            .map(|word| {
                Line::from(vec![
                    Span::styled(format!(" {} ", word.chars().count()), BADGE_STYLE),
                    Span::raw(" "),
                    Span::raw(describe_word(word)),
                ])
            })
            .collect();
        if used_words.len() > visible && visible > 0 {
            lines.pop();
            lines.push(Line::from(format!(
                "  ... and {} more",
                used_words.len() - visible + 1
            )));
        }

        let paragraph = Paragraph::new(lines).block(block);
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: &TuiState) {
        let text = match state {
            TuiState::EnteringWord => "Type a word | ENTER: Submit | CTRL-R: New root word | ESC: Quit",
            TuiState::ShowingError { .. } => "ENTER / ESC: OK",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_error_popup(f: &mut Frame, area: Rect, title: &str, message: &str) {
        let popup = Self::centered_rect(area, POPUP_WIDTH_PERCENT, POPUP_HEIGHT);
        let lines = vec![
            Line::from(Span::styled(message, ERROR_STYLE)),
            Line::from(""),
            Line::from("[ OK ]"),
        ];
        let paragraph = Paragraph::new(lines)
            .block(Block::default().title(title).borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(Clear, popup);
        f.render_widget(paragraph, popup);
    }

    fn centered_rect(area: Rect, width_percent: u16, height: u16) -> Rect {
        let width = u16::try_from(u32::from(area.width) * u32::from(width_percent) / 100)
            .unwrap_or(area.width)
            .min(area.width);
        let height = height.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }

    /// Wait for the next key press. `Ok(None)` on timeout or non-key events.
    fn next_key() -> Result<Option<KeyEvent>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            // Only Press events, Release and Repeat would double the input
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
            other => {
                debug_log!("next_key() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn handle_word_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('r' | 'R') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                info_log!("handle_word_input() - CTRL-R pressed, returning Reset");
                Some(UserAction::Reset)
            }
            KeyCode::Char(c) if Self::has_modifier_keys(&key) => {
                debug_log!("handle_word_input() - Ignoring '{}' with modifier", c);
                None
            }
            KeyCode::Char(c)
                if !c.is_control() && self.current_input.chars().count() < MAX_INPUT_LENGTH =>
            {
                self.current_input.push(c);
                None
            }
            KeyCode::Backspace => {
                self.current_input.pop();
                None
            }
            KeyCode::Enter => {
                info_log!(
                    "handle_word_input() - Submitting '{}'",
                    self.current_input
                );
                Some(UserAction::Submit(self.current_input.clone()))
            }
            KeyCode::Esc => {
                info_log!("handle_word_input() - ESC pressed, returning Exit");
                Some(UserAction::Exit)
            }
            _ => {
                debug_log!("handle_word_input() - Ignoring key: {:?}", key.code);
                None
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_new_game(&mut self, state: &GameState) {
        self.sync_state(state);
        self.current_input.clear();
        self.state = TuiState::EnteringWord;
        self.status = format!(
            "New game - make words from '{}'",
            state.root_word().to_uppercase()
        );
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        if self.draw().is_err() {
            info_log!("read_action() - Draw failed, returning Exit");
            return Some(UserAction::Exit);
        }

        match Self::next_key() {
            Ok(Some(key)) => self.handle_word_input(key),
            Ok(None) => None,
            Err(e) => {
                info_log!("read_action() - Input error: {}, returning Exit", e);
                Some(UserAction::Exit)
            }
        }
    }

    fn display_accepted(&mut self, word: &str, state: &GameState) {
        self.sync_state(state);
        self.current_input.clear();
        self.status = format!("Accepted '{word}' (+{})", word.chars().count());
        self.draw_or_log();
    }

    fn acknowledge_rejection(&mut self, rejection: &Rejection, _state: &GameState) {
        self.state = TuiState::ShowingError {
            title: rejection.title().to_string(),
            message: rejection.message(),
        };
        self.status = rejection.title().to_string();

        loop {
            if self.draw().is_err() {
                break;
            }
            match Self::next_key() {
                Ok(Some(key)) if matches!(key.code, KeyCode::Enter | KeyCode::Esc) => break,
                Ok(_) => {}
                Err(e) => {
                    debug_log!("acknowledge_rejection() - Input error: {}", e);
                    break;
                }
            }
        }

        self.state = TuiState::EnteringWord;
        self.draw_or_log();
    }

    fn display_exit_message(&mut self, state: &GameState) {
        self.sync_state(state);
        self.status = format!("Exiting... final score {}", state.score());
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
