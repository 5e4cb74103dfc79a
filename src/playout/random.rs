//! Random playout driver.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ClaimError, EngineConfig, Player, PlayoutRng};
use crate::engine::GameOrchestrator;

/// Counters for one playout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutStats {
    /// Marks attempted.
    pub attempted: usize,
    /// Marks the engine accepted.
    pub accepted: usize,
    /// Marks the engine refused.
    pub rejected: usize,
    /// Accepted marks that resolved a claim.
    pub claims: usize,
}

/// Plays random marks against an orchestrator.
#[derive(Clone, Debug)]
pub struct RandomPlayout {
    rng: PlayoutRng,
    moves: usize,
    first: Player,
}

impl RandomPlayout {
    /// Create a playout of `moves` attempted marks from `seed`.
    #[must_use]
    pub fn new(seed: u64, moves: usize) -> Self {
        Self::with_rng(PlayoutRng::new(seed), moves)
    }

    /// Create a playout from an existing RNG (e.g. a fork).
    #[must_use]
    pub fn with_rng(rng: PlayoutRng, moves: usize) -> Self {
        Self {
            rng,
            moves,
            first: Player::One,
        }
    }

    /// Set which player marks first.
    #[must_use]
    pub fn first_player(mut self, player: Player) -> Self {
        self.first = player;
        self
    }

    /// Start a fresh session from `config` and play it out.
    pub fn play(&mut self, config: EngineConfig) -> Result<(GameOrchestrator, PlayoutStats), ClaimError> {
        let mut game = GameOrchestrator::new(config)?;
        let stats = self.run(&mut game);
        Ok((game, stats))
    }

    /// Play random marks against an existing session.
    pub fn run(&mut self, game: &mut GameOrchestrator) -> PlayoutStats {
        let size = game.board().size();
        let mut stats = PlayoutStats::default();
        let mut player = self.first;

        for _ in 0..self.moves {
            let coord = self.rng.coordinate(size);
            stats.attempted += 1;

            match game.place(coord, player) {
                Ok(outcome) => {
                    stats.accepted += 1;
                    if outcome.claimed() {
                        stats.claims += 1;
                    }
                    player = player.opponent();
                }
                Err(_) => stats.rejected += 1,
            }
        }

        debug!(?stats, "playout finished");
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_add_up() {
        let (game, stats) = RandomPlayout::new(42, 200).play(EngineConfig::new(9)).unwrap();

        assert_eq!(stats.attempted, 200);
        assert_eq!(stats.accepted + stats.rejected, stats.attempted);
        assert_eq!(game.history().len(), stats.accepted);
        assert!(stats.claims <= stats.accepted);
    }

    #[test]
    fn test_same_seed_same_game() {
        let (a, sa) = RandomPlayout::new(7, 150).play(EngineConfig::new(8)).unwrap();
        let (b, sb) = RandomPlayout::new(7, 150).play(EngineConfig::new(8)).unwrap();

        assert_eq!(sa, sb);
        assert_eq!(a.board(), b.board());
    }

    #[test]
    fn test_players_alternate_on_accepted_marks() {
        let (game, _) = RandomPlayout::new(3, 60)
            .first_player(Player::Two)
            .play(EngineConfig::new(10))
            .unwrap();

        for (i, record) in game.history().iter().enumerate() {
            let expected = if i % 2 == 0 { Player::Two } else { Player::One };
            assert_eq!(record.player, expected);
        }
    }

    #[test]
    fn test_invalid_config() {
        assert!(RandomPlayout::new(1, 10).play(EngineConfig::new(0)).is_err());
    }
}
