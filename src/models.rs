use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single job posting as returned by the search provider. Field names match
/// the provider's wire format, so both endpoints deserialize straight into
/// this shape. Only the identity fields are required; everything else
/// tolerates absence in the upstream body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub job_id: String,
    pub employer_name: String,
    #[serde(default)]
    pub employer_logo: Option<String>,
    pub job_title: String,
    pub job_description: String,
    #[serde(default)]
    pub job_city: Option<String>,
    #[serde(default)]
    pub job_state: Option<String>,
    #[serde(default)]
    pub job_country: Option<String>,
    #[serde(default)]
    pub job_is_remote: bool,
    #[serde(default)]
    pub job_employment_type: Option<String>, // open string, e.g. "FULLTIME"
    #[serde(default)]
    pub job_posted_at_datetime_utc: Option<DateTime<Utc>>,
    pub job_apply_link: String,
    #[serde(default)]
    pub job_publisher: Option<String>,
    #[serde(default)]
    pub job_min_salary: Option<i64>,
    #[serde(default)]
    pub job_max_salary: Option<i64>,
    #[serde(default)]
    pub job_salary_currency: Option<String>,
    #[serde(default)]
    pub job_salary_period: Option<String>,
    #[serde(default)]
    pub job_required_skills: Option<Vec<String>>,
    #[serde(default)]
    pub job_highlights: Option<JobHighlights>,
}

/// Structured highlight sections. The provider capitalizes these keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobHighlights {
    #[serde(rename = "Qualifications", default)]
    pub qualifications: Option<Vec<String>>,
    #[serde(rename = "Responsibilities", default)]
    pub responsibilities: Option<Vec<String>>,
    #[serde(rename = "Benefits", default)]
    pub benefits: Option<Vec<String>>,
}

/// Echo of the search request inside the response envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParameters {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub num_pages: u32,
}

/// Where a response actually came from. Canned results are structurally
/// identical to upstream ones; this tag is the only way to tell them apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DataSource {
    #[default]
    Upstream,
    Fallback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSearchResponse {
    pub status: String,
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub parameters: SearchParameters,
    pub data: Vec<Job>,
    #[serde(skip)]
    pub source: DataSource,
}

/// The locally saved profile. A saved record always carries a non-empty
/// trimmed name and desired position; about_me may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub desired_position: String,
    pub about_me: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_deserializes_with_only_required_fields() {
        let json = r#"{
            "job_id": "abc123",
            "employer_name": "Acme",
            "job_title": "Plumber",
            "job_description": "Fix pipes.",
            "job_apply_link": "https://example.com/apply"
        }"#;

        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.job_id, "abc123");
        assert_eq!(job.employer_name, "Acme");
        assert!(!job.job_is_remote);
        assert!(job.job_city.is_none());
        assert!(job.job_min_salary.is_none());
        assert!(job.job_posted_at_datetime_utc.is_none());
        assert!(job.job_required_skills.is_none());
        assert!(job.job_highlights.is_none());
    }

    #[test]
    fn test_job_rejects_missing_id() {
        let json = r#"{
            "employer_name": "Acme",
            "job_title": "Plumber",
            "job_description": "Fix pipes.",
            "job_apply_link": "https://example.com/apply"
        }"#;

        assert!(serde_json::from_str::<Job>(json).is_err());
    }

    #[test]
    fn test_highlights_use_capitalized_wire_keys() {
        let json = r#"{
            "Qualifications": ["A degree"],
            "Responsibilities": ["Ship code"],
            "Benefits": ["Snacks"]
        }"#;

        let highlights: JobHighlights = serde_json::from_str(json).unwrap();
        assert_eq!(highlights.qualifications.unwrap(), vec!["A degree"]);
        assert_eq!(highlights.responsibilities.unwrap(), vec!["Ship code"]);
        assert_eq!(highlights.benefits.unwrap(), vec!["Snacks"]);
    }

    #[test]
    fn test_posted_timestamp_parses_rfc3339() {
        let json = r##"{
            "job_id": "1",
            "employer_name": "Acme",
            "job_title": "Plumber",
            "job_description": "Fix pipes.",
            "job_apply_link": "#",
            "job_posted_at_datetime_utc": "2024-05-01T12:00:00.000Z"
        }"##;

        let job: Job = serde_json::from_str(json).unwrap();
        let posted = job.job_posted_at_datetime_utc.unwrap();
        assert_eq!(posted.to_rfc3339(), "2024-05-01T12:00:00+00:00");
    }

    #[test]
    fn test_response_source_defaults_to_upstream() {
        let json = r#"{
            "status": "OK",
            "request_id": "req-1",
            "parameters": {"query": "nurse", "page": 1, "num_pages": 1},
            "data": []
        }"#;

        let response: JobSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.source, DataSource::Upstream);
        assert_eq!(response.parameters.query, "nurse");
    }
}
