mod api;
mod mock;
mod models;
mod prefs;
mod store;

use anyhow::Result;
use api::JobApiClient;
use clap::{Parser, Subcommand};
use models::{DataSource, Job};
use store::PrefStore;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jobscout")]
#[command(about = "Job search from the terminal - find postings, save them, keep a profile")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for jobs
    Search {
        /// Search terms; defaults to your profile's desired position
        query: Option<String>,

        /// Result page (1-based)
        #[arg(short, long, default_value = "1")]
        page: u32,
    },

    /// Show full details for a job
    Show {
        /// Job ID as reported by search results
        job_id: String,
    },

    /// Save a job to your liked list
    Like {
        /// Job ID
        job_id: String,
    },

    /// Remove a job from your liked list
    Unlike {
        /// Job ID
        job_id: String,
    },

    /// List your liked jobs
    Liked {
        /// Remove every liked job
        #[arg(long)]
        clear: bool,
    },

    /// Manage your profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Create or replace your profile
    Set {
        /// Your full name
        #[arg(short, long)]
        name: String,

        /// The position you are looking for
        #[arg(short, long)]
        position: String,

        /// A few sentences about yourself
        #[arg(short, long, default_value = "")]
        about: String,
    },

    /// Show the saved profile
    Show,

    /// Delete the saved profile
    Clear,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let store = PrefStore::open()?;

    match cli.command {
        Commands::Search { query, page } => {
            let client = JobApiClient::new()?;
            let query = query
                .or_else(|| prefs::profile(&store).map(|p| p.desired_position))
                .unwrap_or_else(|| "software developer".to_string());

            let response = client.search_jobs(&query, page);
            println!("Jobs for \"{}\" (page {}):", query, page);
            if response.source == DataSource::Fallback {
                println!("(provider unavailable - showing sample results)");
            }
            println!();
            print_job_table(&store, &response.data);
        }

        Commands::Show { job_id } => {
            let client = JobApiClient::new()?;
            match client.get_job_details(&job_id) {
                Some(job) => print_job_details(&store, &job),
                None => println!("Job '{}' not found.", job_id),
            }
        }

        Commands::Like { job_id } => {
            if prefs::like(&store, &job_id) {
                println!("Liked job {}.", job_id);
            } else {
                println!("Job {} is already liked.", job_id);
            }
        }

        Commands::Unlike { job_id } => {
            if prefs::unlike(&store, &job_id) {
                println!("Removed job {} from liked jobs.", job_id);
            } else {
                println!("Job {} was not liked.", job_id);
            }
        }

        Commands::Liked { clear } => {
            if clear {
                prefs::clear_liked(&store);
                println!("Cleared all liked jobs.");
            } else {
                let ids = prefs::liked_jobs(&store);
                if ids.is_empty() {
                    println!("No liked jobs yet. Like one with 'jobscout like <job_id>'.");
                } else {
                    let client = JobApiClient::new()?;
                    let jobs = client.fetch_liked_jobs(&ids);
                    print_job_table(&store, &jobs);
                    if jobs.len() < ids.len() {
                        println!(
                            "\n({} saved job(s) no longer available from the provider)",
                            ids.len() - jobs.len()
                        );
                    }
                }
            }
        }

        Commands::Profile { command } => match command {
            ProfileCommands::Set {
                name,
                position,
                about,
            } => {
                let profile = prefs::save_profile(&store, &name, &position, &about)?;
                println!("Saved profile for {}.", profile.name);
                println!(
                    "Searches now default to \"{}\" when no query is given.",
                    profile.desired_position
                );
            }

            ProfileCommands::Show => match prefs::profile(&store) {
                Some(profile) => {
                    println!("Name: {}", profile.name);
                    println!("Desired position: {}", profile.desired_position);
                    if !profile.about_me.is_empty() {
                        println!("About: {}", profile.about_me);
                    }
                }
                None => {
                    println!("No profile saved. Create one with 'jobscout profile set'.");
                }
            },

            ProfileCommands::Clear => {
                prefs::clear_profile(&store);
                println!("Profile cleared.");
            }
        },
    }

    Ok(())
}

fn print_job_table(store: &PrefStore, jobs: &[Job]) {
    if jobs.is_empty() {
        println!("No jobs found.");
        return;
    }

    println!(
        "{:<12} {:<2} {:<30} {:<20} {:<24} {:>12}",
        "ID", "", "TITLE", "EMPLOYER", "LOCATION", "SALARY"
    );
    println!("{}", "-".repeat(104));
    for job in jobs {
        let liked = if prefs::is_liked(store, &job.job_id) {
            "*"
        } else {
            ""
        };
        println!(
            "{:<12} {:<2} {:<30} {:<20} {:<24} {:>12}",
            truncate(&job.job_id, 10),
            liked,
            truncate(&job.job_title, 28),
            truncate(&job.employer_name, 18),
            truncate(&location_line(job), 22),
            salary_line(job),
        );
    }
}

fn print_job_details(store: &PrefStore, job: &Job) {
    println!("{}", job.job_title);
    println!("{}", "=".repeat(job.job_title.len()));
    println!("Employer: {}", job.employer_name);
    let location = location_line(job);
    if !location.is_empty() {
        println!("Location: {}", location);
    }
    if let Some(employment_type) = &job.job_employment_type {
        println!("Type: {}", employment_type);
    }
    let salary = salary_line(job);
    if salary != "-" {
        println!("Salary: {}", salary);
    }
    if let Some(posted) = job.job_posted_at_datetime_utc {
        println!("Posted: {}", posted.format("%Y-%m-%d"));
    }
    if let Some(publisher) = &job.job_publisher {
        println!("Source: {}", publisher);
    }
    if prefs::is_liked(store, &job.job_id) {
        println!("Liked: yes");
    }

    if let Some(skills) = &job.job_required_skills {
        if !skills.is_empty() {
            println!("Skills: {}", skills.join(", "));
        }
    }

    println!("\n{}", textwrap::fill(&job.job_description, 80));

    if let Some(highlights) = &job.job_highlights {
        print_highlight_section("Qualifications", highlights.qualifications.as_deref());
        print_highlight_section("Responsibilities", highlights.responsibilities.as_deref());
        print_highlight_section("Benefits", highlights.benefits.as_deref());
    }

    println!("\nApply: {}", job.job_apply_link);
}

fn print_highlight_section(label: &str, items: Option<&[String]>) {
    if let Some(items) = items {
        if !items.is_empty() {
            println!("\n{}:", label);
            for item in items {
                println!("  - {}", item);
            }
        }
    }
}

fn location_line(job: &Job) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if let Some(city) = job.job_city.as_deref() {
        parts.push(city);
    }
    if let Some(state) = job.job_state.as_deref() {
        parts.push(state);
    }
    if let Some(country) = job.job_country.as_deref() {
        parts.push(country);
    }

    let mut line = parts.join(", ");
    if job.job_is_remote {
        if line.is_empty() {
            line.push_str("Remote");
        } else {
            line.push_str(" (Remote)");
        }
    }
    line
}

fn salary_line(job: &Job) -> String {
    match (job.job_min_salary, job.job_max_salary) {
        (Some(min), Some(max)) => format!("${}k-${}k", min / 1000, max / 1000),
        (Some(min), None) => format!("${}k+", min / 1000),
        (None, Some(max)) => format!("<${}k", max / 1000),
        (None, None) => "-".to_string(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}...", &s[..max.saturating_sub(3)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job() -> Job {
        mock::search_response("software", 1).data.remove(0)
    }

    #[test]
    fn test_location_line_joins_parts() {
        let job = sample_job();
        assert_eq!(location_line(&job), "San Francisco, CA, US (Remote)");
    }

    #[test]
    fn test_location_line_remote_only() {
        let mut job = sample_job();
        job.job_city = None;
        job.job_state = None;
        job.job_country = None;
        assert_eq!(location_line(&job), "Remote");
    }

    #[test]
    fn test_location_line_empty_when_nothing_known() {
        let mut job = sample_job();
        job.job_city = None;
        job.job_state = None;
        job.job_country = None;
        job.job_is_remote = false;
        assert_eq!(location_line(&job), "");
    }

    #[test]
    fn test_salary_line_formats_range() {
        let job = sample_job();
        assert_eq!(salary_line(&job), "$80k-$120k");
    }

    #[test]
    fn test_salary_line_handles_missing_bounds() {
        let mut job = sample_job();
        job.job_min_salary = None;
        job.job_max_salary = None;
        assert_eq!(salary_line(&job), "-");
    }

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("nurse", 10), "nurse");
    }

    #[test]
    fn test_truncate_long_string_adds_ellipsis() {
        assert_eq!(truncate("Senior Platform Engineer", 10), "Senior ...");
    }
}
