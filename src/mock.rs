use chrono::{Duration, Utc};

use crate::models::{
    DataSource, Job, JobHighlights, JobSearchResponse, SearchParameters,
};

/// Canned search results used whenever the provider is unreachable or no API
/// key is configured. Deterministic apart from the posting timestamps: entry
/// N is posted N-1 whole days before now. Callers get the same shape as a
/// genuine upstream response, tagged `DataSource::Fallback`.
pub fn search_response(query: &str, page: u32) -> JobSearchResponse {
    let now = Utc::now();

    let jobs = vec![
        Job {
            job_id: "1".to_string(),
            employer_name: "TechCorp Inc.".to_string(),
            employer_logo: Some(
                "https://images.unsplash.com/photo-1560472354-b33ff0c44a43?w=100&h=100&fit=crop&crop=center"
                    .to_string(),
            ),
            job_title: format!("{query} Developer"),
            job_description: format!(
                "We are looking for a talented {query} developer to join our dynamic team. \
                 This role offers excellent growth opportunities and competitive compensation."
            ),
            job_city: Some("San Francisco".to_string()),
            job_state: Some("CA".to_string()),
            job_country: Some("US".to_string()),
            job_is_remote: true,
            job_employment_type: Some("FULLTIME".to_string()),
            job_posted_at_datetime_utc: Some(now),
            job_apply_link: "#".to_string(),
            job_publisher: Some("TechJobs".to_string()),
            job_min_salary: Some(80000),
            job_max_salary: Some(120000),
            job_salary_currency: Some("USD".to_string()),
            job_salary_period: Some("YEAR".to_string()),
            job_required_skills: Some(vec![
                "JavaScript".to_string(),
                "React".to_string(),
                "TypeScript".to_string(),
                "Node.js".to_string(),
            ]),
            job_highlights: Some(JobHighlights {
                qualifications: Some(vec![
                    "Bachelor's degree in Computer Science".to_string(),
                    "3+ years experience".to_string(),
                ]),
                responsibilities: Some(vec![
                    "Develop web applications".to_string(),
                    "Collaborate with team".to_string(),
                    "Write clean code".to_string(),
                ]),
                benefits: Some(vec![
                    "Health insurance".to_string(),
                    "Remote work".to_string(),
                    "401k matching".to_string(),
                ]),
            }),
        },
        Job {
            job_id: "2".to_string(),
            employer_name: "StartupXYZ".to_string(),
            employer_logo: Some(
                "https://images.unsplash.com/photo-1549923746-c502d488b3ea?w=100&h=100&fit=crop&crop=center"
                    .to_string(),
            ),
            job_title: format!("Senior {query} Engineer"),
            job_description: format!(
                "Join our innovative startup as a Senior {query} Engineer. Help us build \
                 the future of technology with cutting-edge tools and methodologies."
            ),
            job_city: Some("New York".to_string()),
            job_state: Some("NY".to_string()),
            job_country: Some("US".to_string()),
            job_is_remote: false,
            job_employment_type: Some("FULLTIME".to_string()),
            job_posted_at_datetime_utc: Some(now - Duration::days(1)),
            job_apply_link: "#".to_string(),
            job_publisher: Some("StartupJobs".to_string()),
            job_min_salary: Some(100000),
            job_max_salary: Some(150000),
            job_salary_currency: Some("USD".to_string()),
            job_salary_period: Some("YEAR".to_string()),
            job_required_skills: Some(vec![
                "Python".to_string(),
                "Django".to_string(),
                "PostgreSQL".to_string(),
                "AWS".to_string(),
            ]),
            job_highlights: Some(JobHighlights {
                qualifications: Some(vec![
                    "5+ years experience".to_string(),
                    "Strong problem-solving skills".to_string(),
                ]),
                responsibilities: Some(vec![
                    "Lead development projects".to_string(),
                    "Mentor junior developers".to_string(),
                    "Architect solutions".to_string(),
                ]),
                benefits: Some(vec![
                    "Equity package".to_string(),
                    "Flexible hours".to_string(),
                    "Learning budget".to_string(),
                ]),
            }),
        },
        Job {
            job_id: "3".to_string(),
            employer_name: "Global Solutions Ltd.".to_string(),
            employer_logo: Some(
                "https://images.unsplash.com/photo-1553729459-efe14ef6055d?w=100&h=100&fit=crop&crop=center"
                    .to_string(),
            ),
            job_title: format!("{query} Specialist"),
            job_description: format!(
                "Seeking a dedicated {query} specialist to work on enterprise-level projects. \
                 Great opportunity for career advancement in a stable company."
            ),
            job_city: Some("Austin".to_string()),
            job_state: Some("TX".to_string()),
            job_country: Some("US".to_string()),
            job_is_remote: true,
            job_employment_type: Some("FULLTIME".to_string()),
            job_posted_at_datetime_utc: Some(now - Duration::days(2)),
            job_apply_link: "#".to_string(),
            job_publisher: Some("LinkedJobs".to_string()),
            job_min_salary: Some(70000),
            job_max_salary: Some(95000),
            job_salary_currency: Some("USD".to_string()),
            job_salary_period: Some("YEAR".to_string()),
            job_required_skills: Some(vec![
                "Java".to_string(),
                "Spring Boot".to_string(),
                "MySQL".to_string(),
                "Docker".to_string(),
            ]),
            job_highlights: Some(JobHighlights {
                qualifications: Some(vec![
                    "Bachelor's degree preferred".to_string(),
                    "2+ years experience".to_string(),
                ]),
                responsibilities: Some(vec![
                    "Develop enterprise applications".to_string(),
                    "Work with clients".to_string(),
                    "Maintain code quality".to_string(),
                ]),
                benefits: Some(vec![
                    "Health & dental".to_string(),
                    "Paid time off".to_string(),
                    "Professional development".to_string(),
                ]),
            }),
        },
    ];

    JobSearchResponse {
        status: "OK".to_string(),
        request_id: "mock-request".to_string(),
        parameters: SearchParameters {
            query: query.to_string(),
            page,
            num_pages: 1,
        },
        data: jobs,
        source: DataSource::Fallback,
    }
}
