use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use super::models::{ContractType, ExperienceLevel, JobPosting};

/// Ids that collide with fixed routes under `/jobs`
const RESERVED_IDS: &[&str] = &["locations"];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse catalog file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("duplicate posting id: {0}")]
    DuplicateId(String),

    #[error("posting id {0:?} is reserved")]
    ReservedId(String),

    #[error("posting {id} has match score {score}, expected 0..=100")]
    ScoreOutOfRange { id: String, score: u8 },
}

/// Read-only set of postings, fixed at startup
#[derive(Debug, Clone)]
pub struct JobCatalog {
    postings: Arc<[JobPosting]>,
}

impl JobCatalog {
    /// Build a catalog, rejecting duplicate or reserved ids and out-of-range scores
    pub fn new(postings: Vec<JobPosting>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        for posting in &postings {
            if RESERVED_IDS.contains(&posting.id.as_str()) {
                return Err(CatalogError::ReservedId(posting.id.clone()));
            }
            if !ids.insert(posting.id.as_str()) {
                return Err(CatalogError::DuplicateId(posting.id.clone()));
            }
            if posting.match_score > 100 {
                return Err(CatalogError::ScoreOutOfRange {
                    id: posting.id.clone(),
                    score: posting.match_score,
                });
            }
        }

        Ok(Self {
            postings: postings.into(),
        })
    }

    /// Load postings from a JSON array on disk
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let path_str = path.display().to_string();
        debug!("Loading job catalog from {}", path_str);

        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path_str.clone(),
            source,
        })?;
        let postings: Vec<JobPosting> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path_str.clone(),
                source,
            })?;

        let catalog = Self::new(postings)?;
        info!("Loaded {} job postings from {}", catalog.len(), path_str);
        Ok(catalog)
    }

    /// Catalog from `JOBS_SEED_PATH` when configured, built-in samples otherwise
    pub fn load(seed_path: Option<&Path>) -> Result<Self, CatalogError> {
        match seed_path {
            Some(path) => Self::from_file(path),
            None => {
                let catalog = Self::new(sample_postings())?;
                info!("Using built-in sample catalog ({} postings)", catalog.len());
                Ok(catalog)
            }
        }
    }

    pub fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    pub fn get(&self, id: &str) -> Option<&JobPosting> {
        self.postings.iter().find(|posting| posting.id == id)
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

fn sample(
    id: &str,
    title: &str,
    company: &str,
    location: &str,
    contract: ContractType,
    experience: ExperienceLevel,
    match_score: u8,
) -> JobPosting {
    JobPosting {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        contract,
        experience,
        match_score,
        external_url: None,
    }
}

/// Built-in sample postings
pub fn sample_postings() -> Vec<JobPosting> {
    use ContractType::*;
    use ExperienceLevel::*;

    vec![
        sample("job-1", "Product Marketing Manager", "NovaTech", "Paris", Cdi, Mid, 89),
        sample("job-2", "Développeur Fullstack React/Node", "Kairos Labs", "Lyon", Cdi, Senior, 93),
        sample("job-3", "Stagiaire Data Analyst", "Mistral Retail", "Paris", Internship, Junior, 72),
        sample("job-4", "Consultant TypeScript", "Atelier Nord", "Lille", Freelance, Senior, 85),
        sample("job-5", "Chargé de communication digitale", "Bloom & Co", "Bordeaux", Cdi, Junior, 64),
        sample("job-6", "Frontend Architect", "NovaTech", "Lyon", Cdi, Senior, 91),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_form_a_valid_catalog() {
        let catalog = JobCatalog::load(None).unwrap();
        assert_eq!(catalog.len(), sample_postings().len());
        assert_eq!(catalog.postings()[0].title, "Product Marketing Manager");
        assert_eq!(catalog.get("job-1").map(|p| p.match_score), Some(89));
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut postings = sample_postings();
        postings.push(postings[0].clone());

        match JobCatalog::new(postings) {
            Err(CatalogError::DuplicateId(id)) => assert_eq!(id, "job-1"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn route_names_cannot_be_used_as_ids() {
        let mut postings = sample_postings();
        postings[1].id = "locations".to_string();

        match JobCatalog::new(postings) {
            Err(CatalogError::ReservedId(id)) => assert_eq!(id, "locations"),
            other => panic!("expected reserved id error, got {:?}", other),
        }
    }

    #[test]
    fn scores_above_hundred_are_rejected() {
        let mut postings = sample_postings();
        postings[2].match_score = 101;

        assert!(matches!(
            JobCatalog::new(postings),
            Err(CatalogError::ScoreOutOfRange { score: 101, .. })
        ));
    }

    #[test]
    fn loads_postings_from_json_file() {
        let path = std::env::temp_dir().join(format!("honaijob-catalog-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[{"id":"x","title":"Rust Engineer","company":"Ferris","location":"Nantes",
                "contract":"freelance","experience":"senior","match":77,
                "external_url":"https://example.org/jobs/x"}]"#,
        )
        .unwrap();

        let catalog = JobCatalog::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(catalog.len(), 1);
        let posting = catalog.get("x").unwrap();
        assert_eq!(posting.contract, ContractType::Freelance);
        assert_eq!(posting.external_url.as_deref(), Some("https://example.org/jobs/x"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = JobCatalog::from_file(Path::new("/nonexistent/honaijob.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
