use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Sentinel meaning "no constraint" for the selector filters
pub const ALL: &str = "all";

/// Score under which applying to a posting needs an explicit confirmation
pub const LOW_MATCH_THRESHOLD: u8 = 80;

/// Employment category of a posting
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    Cdi,
    Internship,
    Freelance,
}

impl ContractType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::Cdi => "cdi",
            ContractType::Internship => "internship",
            ContractType::Freelance => "freelance",
        }
    }
}

/// Seniority expected by a posting
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
        }
    }
}

/// Returned when a wire name does not match any known variant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown variant: {0}")]
pub struct UnknownVariant(pub String);

impl FromStr for ContractType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cdi" => Ok(ContractType::Cdi),
            "internship" => Ok(ContractType::Internship),
            "freelance" => Ok(ContractType::Freelance),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "junior" => Ok(ExperienceLevel::Junior),
            "mid" => Ok(ExperienceLevel::Mid),
            "senior" => Ok(ExperienceLevel::Senior),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// One advertised position. Postings never change once the catalog is loaded.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub contract: ContractType,
    pub experience: ExperienceLevel,
    /// Static compatibility score in [0, 100]
    #[serde(rename = "match")]
    pub match_score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
}

impl JobPosting {
    pub fn match_band(&self) -> MatchBand {
        MatchBand::from_score(self.match_score)
    }

    pub fn is_low_match(&self) -> bool {
        self.match_score < LOW_MATCH_THRESHOLD
    }
}

/// Display bucket for a match score
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchBand {
    Strong,
    Good,
    Weak,
}

impl MatchBand {
    pub fn from_score(score: u8) -> Self {
        if score >= 90 {
            MatchBand::Strong
        } else if score >= 70 {
            MatchBand::Good
        } else {
            MatchBand::Weak
        }
    }
}

/// Constraints narrowing a posting list. `None` means no constraint,
/// so `FilterCriteria::default()` keeps every posting. An empty or `"all"`
/// location is treated the same as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub query: Option<String>,
    pub location: Option<String>,
    pub contract: Option<ContractType>,
    pub experience: Option<ExperienceLevel>,
}

impl FilterCriteria {
    /// Location constraint with the `"all"` sentinel and empty values removed
    pub fn location_constraint(&self) -> Option<&str> {
        self.location
            .as_deref()
            .filter(|location| !location.is_empty() && *location != ALL)
    }

    pub fn is_identity(&self) -> bool {
        self.query.as_deref().map_or(true, str::is_empty)
            && self.location_constraint().is_none()
            && self.contract.is_none()
            && self.experience.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_parsing_is_exact() {
        assert_eq!("cdi".parse::<ContractType>(), Ok(ContractType::Cdi));
        assert!("CDI".parse::<ContractType>().is_err());
        assert!("all".parse::<ContractType>().is_err());
    }

    #[test]
    fn experience_round_trips_wire_name() {
        for level in [ExperienceLevel::Junior, ExperienceLevel::Mid, ExperienceLevel::Senior] {
            assert_eq!(level.as_str().parse::<ExperienceLevel>(), Ok(level));
        }
    }

    #[test]
    fn match_bands() {
        assert_eq!(MatchBand::from_score(95), MatchBand::Strong);
        assert_eq!(MatchBand::from_score(90), MatchBand::Strong);
        assert_eq!(MatchBand::from_score(89), MatchBand::Good);
        assert_eq!(MatchBand::from_score(70), MatchBand::Good);
        assert_eq!(MatchBand::from_score(69), MatchBand::Weak);
    }

    #[test]
    fn posting_serializes_match_field() {
        let posting = JobPosting {
            id: "job-1".into(),
            title: "Product Marketing Manager".into(),
            company: "NovaTech".into(),
            location: "Paris".into(),
            contract: ContractType::Cdi,
            experience: ExperienceLevel::Mid,
            match_score: 89,
            external_url: None,
        };

        let value = serde_json::to_value(&posting).unwrap();
        assert_eq!(value["match"], 89);
        assert_eq!(value["contract"], "cdi");
        assert!(value.get("external_url").is_none());
        assert!(!posting.is_low_match());
    }
}
