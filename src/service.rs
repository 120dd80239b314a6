//! Score-submission collaborator contract
//!
//! After `GameOver` the host submits the final score exactly once to an
//! external score/profile service and gets a receipt back. The engine never
//! calls this itself; the reward policy below is the collaborator's contract,
//! not engine behavior.
//!
//! The real service is a JSON HTTP endpoint, so the payload types serialize
//! with serde; `LocalScoreService` is the in-process reference implementation
//! used by the terminal host and by tests.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Score points per coin earned (coins = score / 100, floored)
pub const POINTS_PER_COIN: u32 = 100;

/// Request payload for a completed game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSubmission {
    pub score: u32,
}

impl ScoreSubmission {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Response payload: reward and ranking outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReceipt {
    pub coins_earned: u32,
    pub new_high_score: bool,
}

impl ScoreReceipt {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The collaborator boundary the host submits through.
pub trait ScoreService {
    fn submit_final_score(&mut self, score: u32) -> Result<ScoreReceipt>;
}

/// Reference implementation: rewards `score / 100` coins and tracks the high
/// score across games in this process.
#[derive(Debug, Default)]
pub struct LocalScoreService {
    high_score: Option<u32>,
    coins: u32,
    submissions: u32,
}

impl LocalScoreService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn high_score(&self) -> Option<u32> {
        self.high_score
    }

    pub fn coins(&self) -> u32 {
        self.coins
    }

    pub fn submissions(&self) -> u32 {
        self.submissions
    }
}

impl ScoreService for LocalScoreService {
    fn submit_final_score(&mut self, score: u32) -> Result<ScoreReceipt> {
        let coins_earned = score / POINTS_PER_COIN;
        let new_high_score = match self.high_score {
            Some(best) => score > best,
            None => true,
        };

        if new_high_score {
            self.high_score = Some(score);
        }
        self.coins += coins_earned;
        self.submissions += 1;

        Ok(ScoreReceipt {
            coins_earned,
            new_high_score,
        })
    }
}
