use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, info_span, warn};

use spoiler_cli::evaluate::{cycle_variants, evaluate_items, select_variant};
use spoiler_cli::profile::{ReaderProfile, resolve_profile_path};
use spoiler_cli::render::{cycle_lines, gate_footer, gate_table, profile_text, selection_line};
use spoiler_core::{ContentItem, GatedView, ItemKey, VariantGroup};

use crate::cli::{CycleArgs, GateArgs, ProfileAction, ProfileArgs, ProgressArgs, SelectArgs};

pub fn run_gate(args: &GateArgs, profile_path: Option<&Path>) -> Result<()> {
    let _span = info_span!("gate", items = %args.items.display()).entered();
    let items: Vec<ContentItem> = read_json(&args.items)?;
    let mut view = build_view(profile_path, args.progress)?;
    for raw in &args.reveal {
        match ItemKey::new(raw.as_str()) {
            Ok(key) => {
                view.reveal(key);
            }
            Err(error) => warn!(key = %raw, "ignoring reveal: {error}"),
        }
    }
    let mut summary = evaluate_items(&items, &view);
    let footer = gate_footer(&summary);
    if args.hidden_only {
        summary = summary.hidden_only();
    }
    println!("{}", gate_table(&summary));
    println!("{footer}");
    Ok(())
}

pub fn run_select(args: &SelectArgs, profile_path: Option<&Path>) -> Result<()> {
    let _span = info_span!("select", group = %args.group.display()).entered();
    let group: VariantGroup<Value> = read_json(&args.group)?;
    let view = build_view(profile_path, args.progress)?;
    println!("{}", selection_line(&select_variant(&group, &view)));
    Ok(())
}

pub fn run_cycle(args: &CycleArgs, profile_path: Option<&Path>) -> Result<()> {
    let _span = info_span!("cycle", group = %args.group.display()).entered();
    let group: VariantGroup<Value> = read_json(&args.group)?;
    let mut view = build_view(profile_path, args.progress)?;
    let outcome = cycle_variants(group, &mut view, args.steps, args.reveal);
    println!("{}", cycle_lines(&outcome));
    Ok(())
}

pub fn run_profile(args: &ProfileArgs, profile_path: Option<&Path>) -> Result<()> {
    let path = profile_file(profile_path)?;
    match &args.action {
        ProfileAction::Show => {
            let profile = ReaderProfile::load_from(&path)?;
            println!("{}", profile_text(&profile));
        }
        ProfileAction::Set(progress) => {
            let profile = ReaderProfile::load_from(&path)?.with_overrides((*progress).into());
            profile.save_to(&path)?;
            info!(path = %path.display(), "profile updated");
            println!("{}", profile_text(&profile));
        }
        ProfileAction::Path => println!("{}", path.display()),
    }
    Ok(())
}

fn build_view(profile_path: Option<&Path>, progress: ProgressArgs) -> Result<GatedView> {
    let path = profile_file(profile_path)?;
    let profile = ReaderProfile::load_or_default(&path).with_overrides(progress.into());
    let view = GatedView::from_source(profile.gate, &profile);
    info!(
        effective_progress = view.progress().effective_progress(),
        show_all = view.progress().show_all,
        "reader progress resolved"
    );
    Ok(view)
}

fn profile_file(explicit: Option<&Path>) -> Result<PathBuf> {
    resolve_profile_path(explicit).context("resolve profile path")
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parse {}", path.display()))
}
