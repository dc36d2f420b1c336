//! Game state management for the Othello GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::board::{Board, Player, Pos};
use crate::config::EngineConfig;
use crate::engine::{AIEngine, MoveResult};
use crate::error::{Error, Result};
use crate::rules::{has_legal_move, is_game_over, is_legal_move, legal_moves, make_move, outcome, Outcome};

/// Depth used for hints, kept shallow so the UI stays responsive
const HINT_DEPTH: u8 = 4;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human: Player },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Player::Black }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    /// Waiting out the countdown before the search starts
    Countdown { ends_at: Instant },
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Disk counts once neither side can move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalScore {
    pub black: u32,
    pub white: u32,
    pub outcome: Outcome,
}

/// Everything needed to take a move back
#[derive(Debug, Clone, Copy)]
struct Snapshot {
    board: Board,
    turn: Player,
    last_move: Option<Pos>,
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Player,
    pub game_over: Option<FinalScore>,
    pub last_move: Option<Pos>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
    history: Vec<Snapshot>,
    config: EngineConfig,
}

impl GameState {
    pub fn new(mode: GameMode, config: EngineConfig) -> Self {
        Self {
            board: Board::initial(),
            mode,
            current_turn: Player::Black,
            game_over: None,
            last_move: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            suggested_move: None,
            message: None,
            history: Vec::new(),
            config,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.mode, self.config.clone());
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Moves played so far, passes excluded
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn == human,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn != human,
            GameMode::PvP => false,
        }
    }

    /// Check if the AI is counting down or searching
    pub fn is_ai_busy(&self) -> bool {
        !matches!(self.ai_state, AiState::Idle)
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Legal moves for the side to move, for the board hints
    pub fn legal_moves(&self) -> Vec<Pos> {
        if self.game_over.is_some() {
            return Vec::new();
        }
        legal_moves(&self.board, self.current_turn)
    }

    /// Attempt to place a disk for the human at the given position.
    ///
    /// Returns the number of disks flipped.
    pub fn try_place(&mut self, pos: Pos) -> Result<usize> {
        if self.game_over.is_some() {
            return Err(Error::GameOver);
        }
        if self.is_ai_busy() {
            return Err(Error::AiThinking);
        }
        if !self.is_human_turn() {
            return Err(Error::NotYourTurn);
        }
        if !is_legal_move(&self.board, pos, self.current_turn) {
            return Err(Error::IllegalMove { pos });
        }

        Ok(self.execute_move(pos))
    }

    /// Execute a legal move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) -> usize {
        let player = self.current_turn;
        self.history.push(Snapshot {
            board: self.board,
            turn: player,
            last_move: self.last_move,
        });

        let flipped = make_move(&mut self.board, pos, player);
        self.last_move = Some(pos);
        self.suggested_move = None;
        self.message = None;
        debug!(player = player.name(), %pos, flipped, "move played");

        self.advance_turn();
        flipped
    }

    /// Hand the turn over, passing for a side without legal moves.
    fn advance_turn(&mut self) {
        if is_game_over(&self.board) {
            let score = FinalScore {
                black: self.board.count(Player::Black),
                white: self.board.count(Player::White),
                outcome: outcome(&self.board),
            };
            info!(black = score.black, white = score.white, outcome = ?score.outcome, "game over");
            self.game_over = Some(score);
            return;
        }

        let next = self.current_turn.opponent();
        if has_legal_move(&self.board, next) {
            self.current_turn = next;
        } else {
            debug!(player = next.name(), "no legal move, passing");
            self.message = Some(format!("{} has no legal move and passes", next.name()));
        }
    }

    /// Drive the AI: start the countdown, then the search, then apply the
    /// result. Called once per frame.
    pub fn update_ai(&mut self) {
        match &self.ai_state {
            AiState::Idle => {
                if self.is_ai_turn() && self.game_over.is_none() {
                    let countdown = Duration::from_secs(self.config.countdown_secs);
                    if countdown.is_zero() {
                        self.start_ai_thinking();
                    } else {
                        self.ai_state = AiState::Countdown {
                            ends_at: Instant::now() + countdown,
                        };
                    }
                }
            }
            AiState::Countdown { ends_at } => {
                if Instant::now() >= *ends_at {
                    self.start_ai_thinking();
                }
            }
            AiState::Thinking { .. } => self.check_ai_result(),
        }
    }

    /// Time left before the AI starts searching
    pub fn countdown_remaining(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Countdown { ends_at } => Some(ends_at.saturating_duration_since(Instant::now())),
            _ => None,
        }
    }

    /// Start the search on a background thread
    fn start_ai_thinking(&mut self) {
        let board = self.board;
        let player = self.current_turn;
        let config = self.config.clone();

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_config(config);
            let result = engine.get_move_with_stats(&board, player);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if the AI has finished thinking
    fn check_ai_result(&mut self) {
        let move_result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    warn!("AI search thread stopped without a result");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            _ => return,
        };

        self.ai_state = AiState::Idle;
        self.last_ai_result = Some(move_result.clone());

        match move_result.best_move {
            Some(pos) => {
                self.execute_move(pos);
            }
            None => self.advance_turn(),
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            _ => None,
        }
    }

    /// Ask the engine for a move for the side to move (hotseat hint)
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || self.is_ai_busy() {
            return;
        }

        let mut engine = AIEngine::with_config(EngineConfig {
            depth: self.config.depth.min(HINT_DEPTH),
            ..self.config.clone()
        });
        let result = engine.get_move_with_stats(&self.board, self.current_turn);

        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    /// Undo the last move. Against the AI, moves are taken back until the
    /// human is to move again.
    pub fn undo(&mut self) {
        if self.history.is_empty() || self.is_ai_thinking() {
            return;
        }

        while let Some(snapshot) = self.history.pop() {
            self.board = snapshot.board;
            self.current_turn = snapshot.turn;
            self.last_move = snapshot.last_move;
            if self.is_human_turn() {
                break;
            }
        }

        self.ai_state = AiState::Idle;
        self.game_over = None;
        self.suggested_move = None;
        self.message = None;
    }

    /// Final score line, from the human's side against the AI
    pub fn final_score_text(&self) -> Option<String> {
        let score = self.game_over?;
        let text = match self.mode {
            GameMode::PvE { human } => {
                let (you, ai) = match human {
                    Player::Black => (score.black, score.white),
                    Player::White => (score.white, score.black),
                };
                format!("You: {you}, AI: {ai}")
            }
            GameMode::PvP => format!("Black: {}, White: {}", score.black, score.white),
        };
        Some(text)
    }
}
