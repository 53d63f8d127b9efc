use crate::game::{apply_move, Game, GameError, MoveOutcome};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};
use uuid::Uuid;

pub type GameId = String;

/// In-memory games keyed by id.
///
/// A single mutex guards the whole map and every operation holds it for its
/// full duration, reads included. Games are never removed.
#[derive(Debug, Default)]
pub struct GameStore {
    games: Mutex<HashMap<GameId, Game>>,
}

impl GameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fresh game under a new random id
    #[instrument(skip(self))]
    pub async fn create(&self) -> GameId {
        let mut games = self.games.lock().await;

        let game_id = Uuid::new_v4().to_string();
        games.insert(game_id.clone(), Game::new());

        info!(game_id = %game_id, total_games = games.len(), "Created new game");
        game_id
    }

    /// Snapshot of a stored game
    #[instrument(skip(self))]
    pub async fn get(&self, game_id: &str) -> Result<Game, GameError> {
        let games = self.games.lock().await;

        games.get(game_id).cloned().ok_or_else(|| {
            debug!("Game lookup missed");
            GameError::NotFound {
                game_id: game_id.to_string(),
            }
        })
    }

    /// Apply a move to a stored game under the store lock
    #[instrument(skip(self))]
    pub async fn make_move(
        &self,
        game_id: &str,
        row: i32,
        col: i32,
        player: &str,
    ) -> Result<MoveOutcome, GameError> {
        let mut games = self.games.lock().await;

        let game = games.get_mut(game_id).ok_or_else(|| GameError::NotFound {
            game_id: game_id.to_string(),
        })?;

        let was_ongoing = game.status.is_ongoing();
        let outcome = apply_move(game, row, col, player)?;

        if was_ongoing {
            info!(status = %outcome.status, "Move by {} in game {} at [{},{}]", player, game_id, row, col);
        } else {
            debug!(status = %outcome.status, "Move ignored, game already finished");
        }

        Ok(outcome)
    }

    pub async fn len(&self) -> usize {
        self.games.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.games.lock().await.is_empty()
    }
}

/// Build the store shared by every RPC handler
pub fn new_state() -> Arc<GameStore> {
    Arc::new(GameStore::new())
}
