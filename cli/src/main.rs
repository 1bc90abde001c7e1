use std::io::Write;

use clap::{Parser, Subcommand};
use dossier_cli::{CliContext, commands, logging, readline};

#[tokio::main]
async fn main() -> Result<(), String> {
    logging::init();
    let ctx = CliContext::new();

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &ctx).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                writeln!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "film dossier dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the dataset (from the config path, or the given one)
    Load {
        #[arg(short, long)]
        path: Option<String>,
    },
    /// Switch data focus: core | search
    Mode { mode: String },
    /// List eligible actors and their selection state
    Actors,
    /// Tick one actor
    Select { actor: String },
    /// Untick one actor
    Deselect { actor: String },
    /// Tick every eligible actor
    SelectAll,
    /// Untick everything (yields an empty view)
    ClearActors,
    /// Set the inclusive release-year range
    Years { from: i32, to: i32 },
    /// Show KPIs for the current selection
    Kpis,
    /// Print one chart as Vega-Lite JSON
    Chart { slug: String },
    /// Write all charts as Vega-Lite files
    Export {
        #[arg(short, long, default_value = "charts")]
        dir: String,
    },
    /// Show the persisted configuration
    Config,
    /// Change the configured dataset path
    SetPath { path: String },
    Exit,
}

async fn respond(line: &str, ctx: &CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "dossier".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Load { path }) => commands::load(path.as_deref(), ctx).await?,
        Some(Commands::Mode { mode }) => commands::set_mode(mode, ctx).await?,
        Some(Commands::Actors) => commands::list_actors(ctx).await?,
        Some(Commands::Select { actor }) => commands::select_actor(actor, ctx).await?,
        Some(Commands::Deselect { actor }) => commands::deselect_actor(actor, ctx).await?,
        Some(Commands::SelectAll) => commands::select_all_actors(ctx).await?,
        Some(Commands::ClearActors) => commands::clear_actors(ctx).await?,
        Some(Commands::Years { from, to }) => commands::set_years(*from, *to, ctx).await?,
        Some(Commands::Kpis) => commands::show_kpis(ctx).await?,
        Some(Commands::Chart { slug }) => commands::show_chart(slug, ctx).await?,
        Some(Commands::Export { dir }) => commands::export_charts(dir, ctx).await?,
        Some(Commands::Config) => commands::show_settings(ctx).await,
        Some(Commands::SetPath { path }) => commands::set_dataset_path(path, ctx).await?,
        Some(Commands::Exit) => {
            commands::exit();
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
