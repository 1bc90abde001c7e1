use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dossier_core::context::AppConfigExt;
use dossier_core::dataset::DatasetCache;
use dossier_core::DashboardSession;
use dossier_types::{ChartId, FilterMode, KpiSummary};

use crate::CliContext;
use crate::data_watcher;
use crate::vega;

/// Load (or reload) the dataset and start a fresh session over it.
///
/// With no path argument the configured dataset path is used. A given path
/// is persisted to the config so the next launch picks it up.
pub async fn load(path: Option<&str>, ctx: &CliContext) -> Result<(), String> {
    let dataset_path = match path {
        Some(p) => {
            let mut config = ctx.config.write().await;
            config.dataset_path = p.to_string();
            if let Err(e) = config.save() {
                println!("Warning: failed to persist config: {e}");
            }
            PathBuf::from(p)
        }
        None => PathBuf::from(&ctx.config.read().await.dataset_path),
    };

    // Reuse the memoized cache when the path is unchanged so `load` only
    // re-reads the file after the watcher invalidated it.
    let cache = match ctx.cache().await {
        Some(existing) if existing.path() == dataset_path => existing,
        _ => {
            if let Some(old) = ctx.tasks.lock().await.watcher.take() {
                old.abort();
            }
            let cache = Arc::new(DatasetCache::new(&dataset_path));
            ctx.set_cache(Arc::clone(&cache)).await;
            if let Some(handle) = data_watcher::init_watcher(&dataset_path, Arc::clone(&cache)) {
                ctx.tasks.lock().await.watcher = Some(handle);
            }
            cache
        }
    };

    let dataset = cache.get().await.map_err(|e| e.to_string())?;

    let session = DashboardSession::new(Arc::clone(&dataset));
    let bounds = session.mode_year_bounds();
    let selected = session.selection().selected_actors.len();
    ctx.set_session(session).await;

    println!(
        "Loaded {} films from {}",
        dataset.len(),
        dataset_path.display()
    );
    match bounds {
        Some((lo, hi)) => println!("Core franchise view: {selected} actors, {lo}-{hi}"),
        None => println!("No core franchise films in this dataset"),
    }
    Ok(())
}

/// Switch between the core-franchise view and the general actor search.
pub async fn set_mode(mode: &str, ctx: &CliContext) -> Result<(), String> {
    let mode = match mode {
        "core" => FilterMode::CoreFranchise,
        "search" => FilterMode::GeneralSearch,
        other => return Err(format!("unknown mode '{other}' (expected core or search)")),
    };

    ctx.with_session_mut(|session| {
        session.set_mode(mode);
        println!("Mode: {}", session.selection().mode.label());
        println!(
            "Selection reset: {} actors, years {:?}",
            session.selection().selected_actors.len(),
            session.selection().year_range
        );
    })
    .await
}

/// List the actors selectable under the current mode, marking ticked ones.
pub async fn list_actors(ctx: &CliContext) -> Result<(), String> {
    ctx.sync_session().await?;
    ctx.with_session(|session| {
        let options = session.actor_options();
        if options.is_empty() {
            println!("No eligible actors in {} mode", session.selection().mode.label());
            return;
        }
        for actor in &options {
            let mark = if session.selection().selected_actors.contains(actor) {
                "[x]"
            } else {
                "[ ]"
            };
            println!("{mark} {actor}");
        }
        println!(
            "\n{} of {} selected",
            session.selection().selected_actors.len(),
            options.len()
        );
    })
    .await
}

pub async fn select_actor(actor: &str, ctx: &CliContext) -> Result<(), String> {
    ctx.with_session_mut(|session| session.select_actor(actor))
        .await?
}

pub async fn deselect_actor(actor: &str, ctx: &CliContext) -> Result<(), String> {
    ctx.with_session_mut(|session| session.deselect_actor(actor))
        .await
}

pub async fn select_all_actors(ctx: &CliContext) -> Result<(), String> {
    ctx.with_session_mut(|session| {
        session.select_all_actors();
        println!("Selected {} actors", session.selection().selected_actors.len());
    })
    .await
}

pub async fn clear_actors(ctx: &CliContext) -> Result<(), String> {
    ctx.with_session_mut(|session| session.clear_actors()).await
}

/// Set the inclusive year range. Reversed endpoints are reordered.
pub async fn set_years(from: i32, to: i32, ctx: &CliContext) -> Result<(), String> {
    ctx.with_session_mut(|session| {
        session.set_year_range((from, to));
        println!("Year range: {:?}", session.selection().year_range);
    })
    .await
}

/// Recompute and print the KPI strip for the current selection.
pub async fn show_kpis(ctx: &CliContext) -> Result<(), String> {
    ctx.sync_session().await?;
    ctx.with_session(|session| {
        let frame = session.recompute();
        println!("{} films in selection", frame.view_rows);
        print_kpis(&frame.kpis);
    })
    .await
}

fn print_kpis(kpis: &KpiSummary) {
    println!("{:<18} {}", "Total films:", kpis.total_films);
    println!("{:<18} {:.2}", "Average rating:", kpis.avg_rating);
    println!("{:<18} {:.1} min", "Average runtime:", kpis.avg_runtime);
    println!("{:<18} {}", "Total votes:", kpis.total_votes);
    println!(
        "{:<18} {}",
        "Top film:",
        kpis.top_film.as_deref().unwrap_or("N/A")
    );
}

/// Build one chart for the current selection and print its Vega-Lite JSON.
pub async fn show_chart(slug: &str, ctx: &CliContext) -> Result<(), String> {
    let id = ChartId::from_slug(slug).ok_or_else(|| {
        let known: Vec<&str> = ChartId::ALL.iter().map(|c| c.slug()).collect();
        format!("unknown chart '{slug}' (one of: {})", known.join(", "))
    })?;

    ctx.sync_session().await?;
    let theme = ctx.config.read().await.theme.clone();
    let spec = ctx
        .with_session(|session| {
            session
                .recompute()
                .charts
                .into_iter()
                .find(|c| c.id == id)
        })
        .await?
        .ok_or_else(|| format!("chart '{slug}' was not built"))?;

    let doc = vega::to_vega_lite(&spec, &theme);
    let rendered = serde_json::to_string_pretty(&doc).map_err(|e| e.to_string())?;
    println!("{rendered}");
    Ok(())
}

/// Export all ten charts as Vega-Lite documents under the given directory.
pub async fn export_charts(dir: &str, ctx: &CliContext) -> Result<(), String> {
    ctx.sync_session().await?;
    let theme = ctx.config.read().await.theme.clone();
    let charts = ctx
        .with_session(|session| session.recompute().charts)
        .await?;

    let dir = Path::new(dir);
    std::fs::create_dir_all(dir).map_err(|e| format!("cannot create {}: {e}", dir.display()))?;

    for spec in &charts {
        let doc = vega::to_vega_lite(spec, &theme);
        let path = dir.join(format!("{}.vl.json", spec.id.slug()));
        let rendered = serde_json::to_string_pretty(&doc).map_err(|e| e.to_string())?;
        std::fs::write(&path, rendered).map_err(|e| format!("cannot write {}: {e}", path.display()))?;
    }

    println!("Exported {} charts to {}", charts.len(), dir.display());
    Ok(())
}

pub async fn show_settings(ctx: &CliContext) {
    let config = ctx.config.read().await;
    println!("dataset_path: {}", config.dataset_path);
    println!("theme.background: {}", config.theme.background);
    println!("theme.accent_gold: {}", config.theme.accent_gold);
}

/// Point the config at a new dataset CSV without loading it.
pub async fn set_dataset_path(path: &str, ctx: &CliContext) -> Result<(), String> {
    let mut config = ctx.config.write().await;
    config.dataset_path = path.to_string();
    config.save().map_err(|e| e.to_string())?;
    println!("Dataset path set to {path} (run `load` to use it)");
    Ok(())
}

pub fn exit() {
    write!(std::io::stdout(), "quitting...").expect("error exiting");
    std::io::stdout().flush().expect("error flushing stdout");
}
