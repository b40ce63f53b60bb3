pub mod scheme;

pub use scheme::{CommitHash, CommitmentScheme, Sha3Commitment};

use crate::{compute_outcome, FairdrawError, GameParams, GameType, Outcome, Result};
use rand::RngCore;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const SEED_LEN: usize = 32;

/// The 32-byte reveal value behind one round.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    /// Fresh seed from the thread-local CSPRNG. Never reuse one across rounds.
    pub fn generate() -> Self {
        let mut bytes = [0u8; SEED_LEN];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    pub fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; SEED_LEN] = bytes.try_into().map_err(|_| {
            FairdrawError::invalid_seed(format!("expected {} bytes, got {}", SEED_LEN, bytes.len()))
        })?;
        Ok(Self(bytes))
    }

    pub fn from_hex(text: &str) -> Result<Self> {
        let text = text.trim();
        let text = text.strip_prefix("0x").unwrap_or(text);
        let bytes = hex::decode(text).map_err(|e| FairdrawError::invalid_seed(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// First four bytes, big-endian.
    pub fn seed_number(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed({})", self.to_hex())
    }
}

impl FromStr for Seed {
    type Err = FairdrawError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Serialize for Seed {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Seed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_hex(&text).map_err(serde::de::Error::custom)
    }
}

/// Commit hash for a seed under the canonical scheme.
pub fn commit(seed: &Seed) -> CommitHash {
    Sha3Commitment::commit(seed)
}

/// A published round: enough for anyone to re-run the draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRecord {
    pub game_type: GameType,
    pub seed: Seed,
    pub commit_hash: CommitHash,
    #[serde(default)]
    pub params: GameParams,
    pub outcome: Outcome,
}

impl RoundRecord {
    pub fn new(game_type: GameType, seed: Seed, params: GameParams) -> Self {
        let outcome = compute_outcome(game_type, &seed, &params);
        Self {
            game_type,
            seed,
            commit_hash: commit(&seed),
            params,
            outcome,
        }
    }

    /// Parse a published record. An unknown `gameType` is reported as
    /// `UnsupportedGameType` rather than a generic serialization error.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        if let Some(tag) = value.get("gameType").and_then(|tag| tag.as_str()) {
            tag.parse::<GameType>()?;
        }
        Ok(serde_json::from_value(value)?)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Verification {
    pub commit_matches: bool,
    pub outcome_matches: bool,
    pub recomputed: Outcome,
}

impl Verification {
    pub fn is_valid(&self) -> bool {
        self.commit_matches && self.outcome_matches
    }
}

/// Recheck `hash(seed) == commit` and recompute the outcome.
pub fn verify_record(record: &RoundRecord) -> Verification {
    let commit_matches = Sha3Commitment::verify(&record.commit_hash, &record.seed);
    let recomputed = compute_outcome(record.game_type, &record.seed, &record.params);
    let outcome_matches = recomputed == record.outcome;

    if !commit_matches {
        tracing::warn!("Commit hash {} does not match revealed seed", record.commit_hash);
    } else if !outcome_matches {
        tracing::warn!("Recorded {} outcome differs from recomputation", record.game_type);
    }

    Verification {
        commit_matches,
        outcome_matches,
        recomputed,
    }
}
