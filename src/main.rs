//! Desynced wiki CLI - generates MediaWiki Cargo pages from game data.
//!
//! This is the main entry point for the `desynced-wiki` command-line application.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use desynced::prelude::*;
use desynced::wiki::{build_table, page, DEFAULT_WIKI_OUTPUT_DIR};

/// Desynced wiki data generator
#[derive(Parser)]
#[command(name = "desynced-wiki")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log rendered page content
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate wiki pages from a game-data export
    Generate {
        /// Path to the exported game data (JSON)
        #[arg(env = "DESYNCED_DATA")]
        dump: PathBuf,

        /// Output directory
        #[arg(short, long, env = "WIKI_OUTPUT_DIR", default_value = DEFAULT_WIKI_OUTPUT_DIR)]
        output: PathBuf,

        /// Replace existing output without asking
        #[arg(long)]
        overwrite: bool,

        /// Comma separated tables to generate, e.g. "entity,item"
        #[arg(short, long)]
        table_filter: Option<String>,

        /// Only generate Template pages
        #[arg(long)]
        template_only: bool,
    },

    /// Print the declaration page of a table
    Declare {
        /// Table name, e.g. "entity"
        #[arg(short, long)]
        table: String,
    },

    /// Extract and render every object without writing anything
    Check {
        /// Path to the exported game data (JSON)
        #[arg(env = "DESYNCED_DATA")]
        dump: PathBuf,
    },

    /// Print the recipe template call of every object
    Recipes {
        /// Path to the exported game data (JSON)
        #[arg(env = "DESYNCED_DATA")]
        dump: PathBuf,
    },

    /// Check human pages against the blueprint of their table
    Lint {
        /// Table the pages belong to
        #[arg(short, long)]
        table: String,

        /// Page source files
        #[arg(required = true)]
        pages: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match cli.command {
        Commands::Generate {
            dump,
            output,
            overwrite,
            table_filter,
            template_only,
        } => {
            let table_filter = match table_filter {
                Some(filter) => parse_table_filter(&filter)?,
                None => Vec::new(),
            };
            let options = GenerateOptions {
                output_dir: output,
                overwrite,
                table_filter,
                template_only,
            };
            cmd_generate(&dump, options)?;
        }
        Commands::Declare { table } => {
            cmd_declare(&table)?;
        }
        Commands::Check { dump } => {
            cmd_check(&dump)?;
        }
        Commands::Recipes { dump } => {
            cmd_recipes(&dump)?;
        }
        Commands::Lint { table, pages } => {
            cmd_lint(&table, &pages)?;
        }
    }

    Ok(())
}

/// `--debug` wins over `RUST_LOG`.
fn init_logging(debug: bool) {
    let filter = if debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn progress_bar(len: usize) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    Ok(pb)
}

fn load(dump: &Path) -> Result<GameData> {
    println!("Loading game data: {}", dump.display());

    let start = Instant::now();
    let game = GameData::open(dump).context("Failed to load game data")?;
    println!("Loaded in {:?}", start.elapsed());

    Ok(game)
}

fn cmd_generate(dump: &Path, options: GenerateOptions) -> Result<()> {
    let game = load(dump)?;
    let generator = Generator::new(options).context("Failed to set up templates")?;

    println!("Generating into {}...", generator.options().output_dir.display());

    let pb = progress_bar(0)?;
    let start = Instant::now();

    let summary = generator
        .run_with_progress(&game, |category, done, total| {
            pb.set_length(total as u64);
            pb.set_position(done as u64);
            pb.set_message(category.to_string());
        })
        .context("Failed to generate wiki pages")?;

    pb.finish_with_message("Done");
    println!(
        "Wrote {} tables, {} pages in {:?}",
        summary.tables,
        summary.pages,
        start.elapsed()
    );

    Ok(())
}

fn cmd_declare(table: &str) -> Result<()> {
    let category: DataCategory = table.parse()?;
    let templater = Templater::new()?;

    let (declare, store) = build_table(category, &GameData::default()).declaration()?;
    println!("{}", templater.declaration(category, &declare, &store)?);

    Ok(())
}

fn cmd_check(dump: &Path) -> Result<()> {
    let game = load(dump)?;
    let generator = Generator::new(GenerateOptions::default())?;

    let tables = generator.tables(&game)?;
    generator.check_collisions(&tables)?;

    let pb = progress_bar(tables.len())?;
    let mut counts = Vec::with_capacity(tables.len());

    for table in &tables {
        pb.set_message(table.category().to_string());
        let rendered = generator
            .render_table(table.as_ref())
            .with_context(|| format!("Failed to render table {}", table.category()))?;
        counts.push((rendered.category, rendered.pages.len()));
        pb.inc(1);
    }

    pb.finish_with_message("Done");
    for (category, count) in &counts {
        println!("{:>16} {:>6}", category.as_str(), count);
    }
    println!("\nTotal: {} pages", counts.iter().map(|(_, c)| c).sum::<usize>());

    Ok(())
}

fn cmd_recipes(dump: &Path) -> Result<()> {
    let game = load(dump)?;

    let mut recipes = game.recipes();
    recipes.sort_by(|a, b| a.name.cmp(&b.name));
    for recipe in &recipes {
        println!("{}", recipe.to_template());
    }

    let mut mining = game.mining_recipes();
    mining.sort_by(|a, b| a.name.cmp(&b.name));
    for recipe in &mining {
        println!("{}", recipe.to_template());
    }

    println!("\n{} recipes, {} mining recipes", recipes.len(), mining.len());

    Ok(())
}

fn cmd_lint(table: &str, pages: &[PathBuf]) -> Result<()> {
    let category: DataCategory = table.parse()?;
    if !category.has_human_pages() {
        anyhow::bail!("Table {} has no human pages", category);
    }

    let mut failed = 0;
    for path in pages {
        let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let report = page::lint_page(category, &content);
        if report.is_clean() {
            continue;
        }

        failed += 1;
        println!("{}", path.display());
        for missing in &report.missing {
            println!("  missing template: {}", missing);
        }
        for (name, call) in &report.invalid {
            println!("  {} called with {} arguments", name, call.arg_count);
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} pages have template problems", failed, pages.len());
    }
    println!("{} pages OK", pages.len());

    Ok(())
}
