use clap::{Args, Parser, Subcommand};

use crate::api::cv::dto::GenerateCvRequest;
use crate::api::jobs::{ExperienceLevel, dto::JobSearchParams};

#[derive(Parser, Debug)]
#[command(name = "honaijob", version, about = "Job board query service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server (default)
    Serve,

    /// Filter the job catalog and print the result as JSON
    Search(SearchArgs),

    /// Print the distinct locations of the job catalog
    Locations,

    /// Generate a draft CV from a short brief and print it as JSON
    GenerateCv(GenerateCvArgs),
}

#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Case-insensitive text matched against title and company
    #[arg(short, long)]
    pub query: Option<String>,

    /// Exact city name, or "all"
    #[arg(short, long)]
    pub location: Option<String>,

    /// cdi, internship, freelance or "all"
    #[arg(short, long)]
    pub contract: Option<String>,

    /// junior, mid, senior or "all"
    #[arg(short, long)]
    pub experience: Option<String>,
}

impl From<SearchArgs> for JobSearchParams {
    fn from(args: SearchArgs) -> Self {
        JobSearchParams {
            q: args.query,
            location: args.location,
            contract: args.contract,
            experience: args.experience,
        }
    }
}

#[derive(Args, Debug)]
pub struct GenerateCvArgs {
    /// Target job title
    #[arg(short = 't', long)]
    pub job_title: Option<String>,

    /// junior, mid or senior
    #[arg(short, long, value_parser = parse_level)]
    pub experience: ExperienceLevel,

    /// Comma-separated skills listed first on the CV
    #[arg(short, long)]
    pub skills: Option<String>,

    /// Industry, e.g. Tech, Finance, Marketing
    #[arg(short, long)]
    pub industry: Option<String>,

    /// Summary replacing the generated one
    #[arg(short, long)]
    pub description: Option<String>,
}

fn parse_level(value: &str) -> Result<ExperienceLevel, String> {
    value.parse().map_err(|e| format!("{} (expected junior, mid or senior)", e))
}

impl From<GenerateCvArgs> for GenerateCvRequest {
    fn from(args: GenerateCvArgs) -> Self {
        GenerateCvRequest {
            job_title: args.job_title,
            experience_level: args.experience,
            key_skills: args.skills,
            industry: args.industry,
            description: args.description,
        }
    }
}
