//! Match series between two move pickers
//!
//! The AI always plays Black and moves first; the opponent plays White.
//! A side without a legal move passes, and a game ends when neither side
//! can move.

use std::fmt;

use tracing::info;

use crate::board::{Board, Player};
use crate::players::MovePicker;
use crate::rules::{apply_move, has_legal_move, is_game_over, outcome, Outcome};

/// Final disk counts of one finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    /// 1-based game number within the series
    pub number: usize,
    pub outcome: Outcome,
    /// Disks held by the AI (Black)
    pub ai_score: u32,
    /// Disks held by the opponent (White)
    pub opponent_score: u32,
}

impl fmt::Display for GameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = match self.outcome {
            Outcome::Win(Player::Black) => "AI won",
            Outcome::Win(Player::White) => "Opponent won",
            Outcome::Draw => "Draw",
        };
        write!(
            f,
            "Game {}: {} (AI {}, opponent {})",
            self.number, verdict, self.ai_score, self.opponent_score
        )
    }
}

/// Tally of a finished series.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationSummary {
    pub ai_wins: usize,
    pub opponent_wins: usize,
    pub draws: usize,
    pub games: Vec<GameRecord>,
}

impl SimulationSummary {
    pub fn total(&self) -> usize {
        self.ai_wins + self.opponent_wins + self.draws
    }

    /// Fraction of games won by the AI, 0 for an empty series.
    pub fn win_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.ai_wins as f64 / total as f64,
        }
    }

    fn record(&mut self, game: GameRecord) {
        match game.outcome {
            Outcome::Win(Player::Black) => self.ai_wins += 1,
            Outcome::Win(Player::White) => self.opponent_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
        self.games.push(game);
    }
}

/// Play one game from the initial position and return the final board.
///
/// A side with no legal move passes without consulting its picker. Pickers
/// must return a legal move whenever one exists, otherwise the game may
/// never end.
pub fn play_game(black: &mut dyn MovePicker, white: &mut dyn MovePicker) -> Board {
    let mut board = Board::initial();
    let mut player = Player::Black;

    while !is_game_over(&board) {
        if has_legal_move(&board, player) {
            let picker: &mut dyn MovePicker = match player {
                Player::Black => &mut *black,
                Player::White => &mut *white,
            };
            if let Some(mv) = picker.pick_move(&board, player) {
                board = apply_move(&board, mv, player);
            }
        }
        player = player.opponent();
    }

    board
}

/// Play `games` games of `ai` (Black) against `opponent` (White).
pub fn run_series(
    ai: &mut dyn MovePicker,
    opponent: &mut dyn MovePicker,
    games: usize,
) -> SimulationSummary {
    let mut summary = SimulationSummary::default();

    for number in 1..=games {
        let board = play_game(ai, opponent);
        let game = GameRecord {
            number,
            outcome: outcome(&board),
            ai_score: board.count(Player::Black),
            opponent_score: board.count(Player::White),
        };
        info!(
            game = number,
            ai = game.ai_score,
            opponent = game.opponent_score,
            outcome = ?game.outcome,
            "game finished"
        );
        summary.record(game);
    }

    info!(
        games = summary.total(),
        ai_wins = summary.ai_wins,
        opponent_wins = summary.opponent_wins,
        draws = summary.draws,
        win_rate = summary.win_rate(),
        "series finished"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::config::EngineConfig;
    use crate::engine::AIEngine;
    use crate::players::RandomPlayer;
    use crate::rules::legal_moves;

    /// Always plays the first legal move in row-major order.
    struct FirstMove;

    impl MovePicker for FirstMove {
        fn pick_move(&mut self, board: &Board, player: Player) -> Option<Pos> {
            legal_moves(board, player).first().copied()
        }

        fn name(&self) -> &str {
            "First"
        }
    }

    #[test]
    fn test_random_game_terminates() {
        let mut a = RandomPlayer::with_seed(1);
        let mut b = RandomPlayer::with_seed(2);
        let board = play_game(&mut a, &mut b);
        assert!(is_game_over(&board));
        assert!(board.disk_count() <= 64);
    }

    #[test]
    fn test_deterministic_game_repeats() {
        let first = play_game(&mut FirstMove, &mut FirstMove);
        let second = play_game(&mut FirstMove, &mut FirstMove);
        assert!(is_game_over(&first));
        assert_eq!(first, second);
    }

    #[test]
    fn test_series_tally() {
        let mut ai = AIEngine::with_config(EngineConfig {
            depth: 1,
            ..EngineConfig::default()
        });
        let mut opponent = RandomPlayer::with_seed(11);
        let summary = run_series(&mut ai, &mut opponent, 3);

        assert_eq!(summary.total(), 3);
        assert_eq!(summary.games.len(), 3);
        assert_eq!(summary.games[2].number, 3);
        for game in &summary.games {
            assert!(game.ai_score + game.opponent_score <= 64);
        }
        let rate = summary.win_rate();
        assert!((0.0..=1.0).contains(&rate));
    }

    #[test]
    fn test_same_seed_same_series() {
        let config = EngineConfig {
            depth: 1,
            ..EngineConfig::default()
        };
        let mut ai_a = AIEngine::with_config(config.clone());
        let mut ai_b = AIEngine::with_config(config);
        let a = run_series(&mut ai_a, &mut RandomPlayer::with_seed(5), 2);
        let b = run_series(&mut ai_b, &mut RandomPlayer::with_seed(5), 2);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_series() {
        let summary = SimulationSummary::default();
        assert_eq!(summary.win_rate(), 0.0);
    }

    #[test]
    fn test_record_display() {
        let game = GameRecord {
            number: 4,
            outcome: Outcome::Win(Player::Black),
            ai_score: 40,
            opponent_score: 24,
        };
        assert_eq!(game.to_string(), "Game 4: AI won (AI 40, opponent 24)");
    }
}
