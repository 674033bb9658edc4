use clap::{Args, Subcommand};
use hive_core::forms::{EXPERTISE_AREAS, PROJECT_TYPES};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List engineers, optionally filtered by role.
    Engineers(EngineersArgs),
    /// List portfolio projects, optionally filtered by category.
    Projects(ProjectsArgs),
    /// Show one engineer and the projects they contributed to.
    Engineer(EngineerArgs),
    /// Show the service catalog.
    Services(ServicesArgs),
    /// Play the landing-page metric counters.
    Metrics(MetricsArgs),
    /// Render the page served at a site path.
    Page(PageArgs),
    /// Send a project inquiry.
    Inquire(InquireArgs),
    /// Apply to join the team.
    Apply(ApplyArgs),
}

#[derive(Clone, Debug, Args)]
pub struct EngineersArgs {
    /// Role to filter by ("all" for everyone)
    #[arg(long)]
    pub role: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ProjectsArgs {
    /// Category to filter by ("all" for every project)
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct EngineerArgs {
    /// Engineer id
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct ServicesArgs {
    /// Only show services whose title starts with this text
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct MetricsArgs {
    /// Play the ramp in real time instead of printing every frame
    #[arg(long)]
    pub animate: bool,

    /// Fraction of the metrics section on screen (0.0 - 1.0)
    #[arg(long, default_value_t = 1.0)]
    pub visibility: f64,
}

#[derive(Clone, Debug, Args)]
pub struct PageArgs {
    /// Site path, e.g. /engineers or /engineer/<id>
    pub path: String,
}

#[derive(Clone, Debug, Args)]
pub struct InquireArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long, value_parser = clap::builder::PossibleValuesParser::new(PROJECT_TYPES.iter().copied()))]
    pub project_type: String,

    /// One of the stored budget range values
    #[arg(long, default_value = "")]
    pub budget_range: String,

    #[arg(long)]
    pub message: String,
}

#[derive(Clone, Debug, Args)]
pub struct ApplyArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long, value_parser = clap::builder::PossibleValuesParser::new(EXPERTISE_AREAS.iter().copied()))]
    pub expertise: String,

    #[arg(long, default_value = "")]
    pub portfolio_url: String,

    #[arg(long)]
    pub message: String,
}
