pub mod config;

pub use config::BookConfig;

use crate::commitment::{CommitHash, CommitmentScheme, RoundRecord, Seed, Sha3Commitment};
use crate::games::RouletteBet;
use crate::{compute_outcome, FairdrawError, GameParams, GameType, Outcome, Result};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type RoundId = u64;

/// A bet waiting for its reveal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingRound {
    pub id: RoundId,
    pub game_type: GameType,
    pub bet: u64,
    pub commit_hash: CommitHash,
    pub params: GameParams,
    pub placed_at: DateTime<Utc>,
    pub reveal_deadline: DateTime<Utc>,
}

/// A revealed round with its payout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettledRound {
    pub id: RoundId,
    pub game_type: GameType,
    pub bet: u64,
    pub payout: u64,
    pub seed: Seed,
    pub commit_hash: CommitHash,
    pub params: GameParams,
    pub outcome: Outcome,
    pub placed_at: DateTime<Utc>,
    pub settled_at: DateTime<Utc>,
}

impl SettledRound {
    /// Publishable form for third-party verification.
    pub fn record(&self) -> RoundRecord {
        RoundRecord {
            game_type: self.game_type,
            seed: self.seed,
            commit_hash: self.commit_hash,
            params: self.params.clone(),
            outcome: self.outcome.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookTotals {
    pub rounds: usize,
    pub staked: u64,
    pub paid_out: u64,
}

#[derive(Debug)]
struct BookState {
    next_id: RoundId,
    pending: HashMap<RoundId, PendingRound>,
    history: Vec<SettledRound>,
    totals: BookTotals,
}

/// In-memory book of commit-reveal rounds.
///
/// Mirrors the place-bet / reveal flow of the remote authority: a bet is
/// registered against a commit hash, and only a seed hashing to that commit
/// settles it. Safe to share behind an `Arc`.
///
/// Settled rounds accumulate until [`RoundBook::drain_history`] is called;
/// long-lived books should drain periodically.
#[derive(Debug)]
pub struct RoundBook {
    config: BookConfig,
    state: Mutex<BookState>,
}

impl RoundBook {
    pub fn new(config: BookConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: Mutex::new(BookState {
                next_id: 1,
                pending: HashMap::new(),
                history: Vec::new(),
                totals: BookTotals::default(),
            }),
        })
    }

    pub fn place_bet(
        &self,
        game_type: GameType,
        bet: u64,
        commit_hash: CommitHash,
        params: GameParams,
    ) -> Result<RoundId> {
        self.place_bet_at(game_type, bet, commit_hash, params, Utc::now())
    }

    pub fn place_bet_at(
        &self,
        game_type: GameType,
        bet: u64,
        commit_hash: CommitHash,
        params: GameParams,
        now: DateTime<Utc>,
    ) -> Result<RoundId> {
        if bet < self.config.min_bet {
            return Err(FairdrawError::InvalidBet {
                bet,
                min: self.config.min_bet,
            });
        }
        if game_type == GameType::Roulette {
            RouletteBet::from_params(&params)?;
        }

        let reveal_deadline = now
            .checked_add_signed(self.config.reveal_window_chrono())
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        let mut state = self.state.lock();
        let id = state.next_id;
        state.next_id += 1;
        state.pending.insert(
            id,
            PendingRound {
                id,
                game_type,
                bet,
                commit_hash,
                params,
                placed_at: now,
                reveal_deadline,
            },
        );

        tracing::info!("Round {} placed: {} bet {} commit {}", id, game_type, bet, commit_hash);
        Ok(id)
    }

    pub fn reveal(&self, id: RoundId, seed: &Seed) -> Result<SettledRound> {
        self.reveal_at(id, seed, Utc::now())
    }

    /// Settle a round. A seed that does not hash to the commit is rejected
    /// and the round stays pending; a late reveal drops the round.
    pub fn reveal_at(&self, id: RoundId, seed: &Seed, now: DateTime<Utc>) -> Result<SettledRound> {
        let mut state = self.state.lock();

        let round = state.pending.get(&id).ok_or(FairdrawError::RoundNotFound(id))?;

        if now > round.reveal_deadline {
            state.pending.remove(&id);
            tracing::warn!("Round {} reveal arrived after deadline", id);
            return Err(FairdrawError::RevealExpired(id));
        }

        if !Sha3Commitment::verify(&round.commit_hash, seed) {
            tracing::warn!("Round {} reveal does not match commit", id);
            return Err(FairdrawError::InvalidReveal(id));
        }

        let outcome = compute_outcome(round.game_type, seed, &round.params);
        let payout = outcome.settle(round.bet, &round.params)?;

        let round = state
            .pending
            .remove(&id)
            .ok_or(FairdrawError::RoundNotFound(id))?;
        let settled = SettledRound {
            id,
            game_type: round.game_type,
            bet: round.bet,
            payout,
            seed: *seed,
            commit_hash: round.commit_hash,
            params: round.params,
            outcome,
            placed_at: round.placed_at,
            settled_at: now,
        };
        state.totals.rounds += 1;
        state.totals.staked = state.totals.staked.saturating_add(settled.bet);
        state.totals.paid_out = state.totals.paid_out.saturating_add(payout);
        state.history.push(settled.clone());

        tracing::info!(
            "Round {} settled: {} -> payout {}",
            id,
            settled.outcome.summary(),
            payout
        );
        Ok(settled)
    }

    /// Drop every pending round whose deadline is before `now`.
    pub fn expire_stale(&self, now: DateTime<Utc>) -> Vec<RoundId> {
        let mut state = self.state.lock();
        let mut expired: Vec<RoundId> = state
            .pending
            .values()
            .filter(|round| now > round.reveal_deadline)
            .map(|round| round.id)
            .collect();
        expired.sort_unstable();

        for id in &expired {
            state.pending.remove(id);
            tracing::warn!("Round {} expired without reveal", id);
        }
        expired
    }

    pub fn pending(&self, id: RoundId) -> Option<PendingRound> {
        self.state.lock().pending.get(&id).cloned()
    }

    pub fn pending_count(&self) -> usize {
        self.state.lock().pending.len()
    }

    pub fn history(&self) -> Vec<SettledRound> {
        self.state.lock().history.clone()
    }

    /// Take every settled round recorded so far. Totals keep counting them.
    pub fn drain_history(&self) -> Vec<SettledRound> {
        std::mem::take(&mut self.state.lock().history)
    }

    /// Stake and payout across every round settled by this book.
    pub fn totals(&self) -> BookTotals {
        self.state.lock().totals
    }
}
