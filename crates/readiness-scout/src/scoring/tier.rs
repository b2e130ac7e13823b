use std::fmt;

use serde::{Serialize, Serializer};

/// Discrete readiness category, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReadinessTier {
    AiReadyLeader,
    StrongPotential,
    EmergingInterest,
    EarlyStage,
    NotYetReady,
}

impl ReadinessTier {
    /// Ordered by descending inclusive lower bound.
    pub const ALL: [ReadinessTier; 5] = [
        ReadinessTier::AiReadyLeader,
        ReadinessTier::StrongPotential,
        ReadinessTier::EmergingInterest,
        ReadinessTier::EarlyStage,
        ReadinessTier::NotYetReady,
    ];

    pub fn from_score(score: f64) -> Self {
        Self::ALL
            .into_iter()
            .find(|tier| score >= tier.lower_bound())
            .unwrap_or(ReadinessTier::NotYetReady)
    }

    pub const fn lower_bound(self) -> f64 {
        match self {
            ReadinessTier::AiReadyLeader => 80.0,
            ReadinessTier::StrongPotential => 65.0,
            ReadinessTier::EmergingInterest => 50.0,
            ReadinessTier::EarlyStage => 35.0,
            ReadinessTier::NotYetReady => 0.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ReadinessTier::AiReadyLeader => "AI-Ready Leader",
            ReadinessTier::StrongPotential => "Strong Potential",
            ReadinessTier::EmergingInterest => "Emerging Interest",
            ReadinessTier::EarlyStage => "Early Stage",
            ReadinessTier::NotYetReady => "Not Yet Ready",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            ReadinessTier::AiReadyLeader => "ai_ready_leader",
            ReadinessTier::StrongPotential => "strong_potential",
            ReadinessTier::EmergingInterest => "emerging_interest",
            ReadinessTier::EarlyStage => "early_stage",
            ReadinessTier::NotYetReady => "not_yet_ready",
        }
    }
}

impl fmt::Display for ReadinessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ReadinessTier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
