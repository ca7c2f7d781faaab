//! Course Dashboard CLI
//!
//! Command-line interface for dashboard operations:
//! - Render the dashboard document
//! - List courses matching a filter
//! - Show the stat widgets
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use course_dashboard::loader::source_from_config;
use course_dashboard::store::ALL_CATEGORIES;
use course_dashboard::{
    format_currency, logging, render_document, Config, CourseFilter, Dashboard, ElementId, Page,
    PageEvent,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "course-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Course catalogue dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Data source: http(s) base URL or directory (overrides config)
    #[arg(short, long, global = true)]
    pub source: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the dashboard document
    Render {
        /// Search text (title or instructor)
        #[arg(long)]
        search: Option<String>,
        /// Category, or "all"
        #[arg(long)]
        category: Option<String>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List active courses matching a filter
    Courses {
        /// Search text (title or instructor)
        #[arg(long, default_value = "")]
        search: String,
        /// Category, or "all"
        #[arg(long, default_value = ALL_CATEGORIES)]
        category: String,
    },

    /// Show the stat widgets
    Stats,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let command = match cli.command {
        Commands::Config { output } => {
            let content = course_dashboard::config::generate_default_config();
            return write_output(output.as_ref(), &content);
        }
        command => command,
    };

    let mut config = Config::resolve(cli.config.as_deref())?;
    if let Some(source) = cli.source {
        config.data.source = source;
    }

    logging::init(&config.logging);

    let source = source_from_config(&config.data).context("invalid data source")?;
    let dashboard = Arc::new(Dashboard::new(source, Page::new()));

    match command {
        Commands::Render {
            search,
            category,
            output,
        } => {
            load(&dashboard).await;

            // Drive the filter the way the page controls would
            if let Some(category) = category {
                dashboard
                    .dispatch(PageEvent::change(ElementId::CategoryFilter, category))
                    .await;
            }
            if let Some(search) = search {
                dashboard
                    .dispatch(PageEvent::input(ElementId::CourseSearch, search))
                    .await;
            }

            let page = dashboard.page().await;
            let categories = dashboard.categories().await;
            let html =
                render_document(&page, &categories).context("failed to render dashboard")?;
            write_output(output.as_ref(), &html)?;
        }

        Commands::Courses { search, category } => {
            dashboard
                .load_courses()
                .await
                .context("failed to load courses")?;

            let courses = dashboard
                .filtered_courses(&CourseFilter::new(&search, &category))
                .await;

            if courses.is_empty() {
                println!("No courses found");
                return Ok(());
            }

            println!(
                "{:<36} {:<20} {:<14} {:>9} {:>12} {:>6}",
                "TITLE", "INSTRUCTOR", "CATEGORY", "SEATS", "PRICE", "DONE"
            );
            for course in &courses {
                println!(
                    "{:<36} {:<20} {:<14} {:>9} {:>12} {:>5}%",
                    truncate(&course.title, 36),
                    truncate(&course.instructor, 20),
                    truncate(&course.category, 14),
                    format!("{}/{}", course.enrolled, course.capacity),
                    format_currency(course.price),
                    course.completion
                );
            }
            println!("\n{} course(s)", courses.len());
        }

        Commands::Stats => {
            dashboard
                .load_stats()
                .await
                .context("failed to load stats")?;

            let page = dashboard.page().await;
            for (label, id) in [
                ("Total courses", ElementId::TotalCourses),
                ("Active students", ElementId::ActiveStudents),
                ("Average rating", ElementId::AvgRating),
                ("Total revenue", ElementId::TotalRevenue),
            ] {
                println!("{:<16} {}", label, page.text(id));
            }
        }

        Commands::Config { .. } => {}
    }

    Ok(())
}

/// Run every loader; failures are already logged by the dashboard
async fn load(dashboard: &Arc<Dashboard>) {
    if let Some(loads) = dashboard.boot().await {
        loads.join().await;
    }
}

fn write_output(output: Option<&PathBuf>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
