//! Multiplayer tic-tac-toe backend.
//!
//! Games live in an in-memory [`state::GameStore`] behind a single lock.
//! The [`rpc`] layer serves CreateGame, MakeMove and GetGameState over a
//! binary TCP wire, and the [`api`] layer relays the same operations as
//! HTTP/JSON with an open CORS policy.

pub mod api;
pub mod config;
pub mod game;
pub mod rpc;
pub mod state;
