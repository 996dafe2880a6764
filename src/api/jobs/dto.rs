use actix_web::web::Query;
use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use super::models::{FilterCriteria, JobPosting, MatchBand, ALL};
use crate::api::workspace::models::Application;

/// Raw query-string parameters of `GET /jobs`
#[derive(Debug, Default, Deserialize, Clone)]
pub struct JobSearchParams {
    pub q: Option<String>,
    pub location: Option<String>,
    pub contract: Option<String>,
    pub experience: Option<String>,
}

fn selector(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != ALL)
}

impl JobSearchParams {
    /// Read the parameters from a raw query string.
    ///
    /// A repeated key keeps its first value and unknown keys are ignored.
    /// A query string that cannot be decoded at all yields no constraint.
    pub fn from_query(query: &str) -> Self {
        let pairs = match Query::<Vec<(String, String)>>::from_query(query) {
            Ok(pairs) => pairs.into_inner(),
            Err(e) => {
                debug!("Ignoring undecodable job search query {:?}: {}", query, e);
                Vec::new()
            }
        };

        let mut params = JobSearchParams::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "q" => &mut params.q,
                "location" => &mut params.location,
                "contract" => &mut params.contract,
                "experience" => &mut params.experience,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    /// Parse the raw parameters into filter criteria.
    ///
    /// Empty values and `"all"` become `None`. Contract and experience
    /// values that name no known variant are dropped rather than rejected.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            query: self.q.clone().filter(|q| !q.is_empty()),
            location: selector(self.location.as_deref()).map(str::to_string),
            contract: selector(self.contract.as_deref()).and_then(|c| c.parse().ok()),
            experience: selector(self.experience.as_deref()).and_then(|e| e.parse().ok()),
        }
    }

    /// Echo of the filters actually applied, as a form would re-render them.
    /// Values that were dropped while parsing are echoed as `"all"`.
    pub fn applied(&self) -> AppliedFilters {
        let criteria = self.criteria();

        AppliedFilters {
            q: self.q.as_deref().map(str::to_lowercase).unwrap_or_default(),
            location: criteria.location.unwrap_or_else(|| ALL.to_string()),
            contract: criteria.contract.map_or(ALL, |c| c.as_str()).to_string(),
            experience: criteria.experience.map_or(ALL, |e| e.as_str()).to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppliedFilters {
    pub q: String,
    pub location: String,
    pub contract: String,
    pub experience: String,
}

/// Response for `GET /jobs`
#[derive(Debug, Serialize, Deserialize)]
pub struct JobSearchResponse {
    pub jobs: Vec<JobPosting>,
    /// Distinct locations across the whole catalog, not just `jobs`
    pub locations: Vec<String>,
    pub filters: AppliedFilters,
}

/// Response for `GET /jobs/{id}`
#[derive(Debug, Serialize)]
pub struct JobDetailResponse {
    #[serde(flatten)]
    pub job: JobPosting,
    pub match_band: MatchBand,
    pub low_match: bool,
}

impl From<JobPosting> for JobDetailResponse {
    fn from(job: JobPosting) -> Self {
        Self {
            match_band: job.match_band(),
            low_match: job.is_low_match(),
            job,
        }
    }
}

/// Body of `POST /jobs/{id}/apply`
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct ApplyRequest {
    #[validate(length(min = 1, max = 64, message = "cv_id must be between 1 and 64 characters"))]
    pub cv_id: Option<String>,
    /// Must be set to apply to a posting below the low-match threshold
    #[serde(default)]
    pub confirm_low_match: bool,
}

#[derive(Debug, Serialize)]
pub struct ApplyResponse {
    pub message: String,
    pub application: Application,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
}
