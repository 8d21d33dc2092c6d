//! Orchestrating layer around the Longnight simulation core.
//!
//! The runtime owns everything the core deliberately leaves outside: match
//! persistence with optimistic concurrency, replay records, production
//! randomness, and submission-time plan validation. The transport layer
//! calls into [`TurnService`]; the core never touches a repository itself.

pub mod repository;
pub mod replay;
pub mod rng;
pub mod service;

pub use replay::ReplayRecord;
pub use repository::{
    InMemoryMatchRepo, InMemoryReplayRepo, MatchRepository, ReplayRepository, RepositoryError,
    Version,
};
pub use rng::{EntropyRng, SeededRng};
pub use service::{SubmissionError, TurnService, TurnServiceError};
