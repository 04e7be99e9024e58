// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

use meikan::media::has_translation_pdf;
use meikan::period::extract_year;
use meikan::suggest::generate_suggestions_with;
use meikan::tier::detect_tiers;
use meikan::{
    filters_to_url_params, get_sword_periods, load_catalog_with_progress, parse_media_attachments,
    parse_url_filters, priority_thumbnail, Catalog, Era, Facet, FacetSelection, SearchTag,
    SwordRecord,
};

mod cli;
use cli::display::*;
use cli::{Cli, Commands, QueryArgs};

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    let result = match cli.command {
        Commands::Search {
            input,
            query,
            limit,
            json,
        } => run_search(&input, &query, limit, json),
        Commands::Suggest {
            input,
            query,
            max,
            json,
        } => run_suggest(&input, &query, max, json),
        Commands::Facets { input, query, json } => run_facets(&input, &query, json),
        Commands::Period { text } => {
            run_period(&text);
            Ok(())
        }
        Commands::Inspect { input, top } => run_inspect(&input, top),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn open_catalog(input: &Path) -> Result<Catalog> {
    load_catalog_with_progress(input)
        .with_context(|| format!("failed to load catalog from {}", input.display()))
}

/// Permalink first, flags on top; every `-q` tag is validated.
fn resolve_query(catalog: &Catalog, args: &QueryArgs) -> Result<(FacetSelection, Vec<SearchTag>)> {
    let decoded = args
        .permalink
        .as_deref()
        .map(parse_url_filters)
        .unwrap_or_default();
    let mut selection = decoded.selection;
    args.apply(&mut selection);

    let mut tags = decoded.search_tags;
    for text in &args.tags {
        let tag = catalog
            .parse_tag(text)
            .with_context(|| format!("invalid search {:?}", text))?;
        tags.push(tag);
    }
    Ok((selection, tags))
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

fn record_line(record: &SwordRecord) -> String {
    let mut line = format!(
        " {:>5}  {} {} {} {:>6}",
        truncate(&record.index, 5),
        pad_right(&themed(CYAN, &[BOLD], &truncate(&record.smith, 18)), 18),
        pad_right(&truncate(&record.school, 14), 14),
        pad_right(&truncate(&record.kind, 10), 10),
        truncate(&record.nagasa, 6),
    );
    for tier in detect_tiers(&record.authentication) {
        line.push(' ');
        line.push_str(&tier_badge(tier));
    }
    let media = parse_media_attachments(&record.media_attachments);
    if priority_thumbnail(&media).is_some() {
        line.push_str(&format!(" 📷{}", media.len()));
    }
    if has_translation_pdf(&media) {
        line.push_str(" PDF");
    }
    if let Some(name) = &record.meito_name {
        line.push_str(&themed(BRIGHT_YELLOW, &[], &format!(" ★ {}", name)));
    }
    line
}

fn run_search(input: &Path, args: &QueryArgs, limit: usize, json: bool) -> Result<()> {
    let catalog = open_catalog(input)?;
    let (selection, tags) = resolve_query(&catalog, args)?;
    let visible = catalog.filter(&tags, &selection, &[]);

    if json {
        let shown: Vec<&SwordRecord> = visible.iter().copied().take(limit).collect();
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    section_top(&format!("{} OF {} RECORDS", visible.len(), catalog.len()));
    if visible.is_empty() {
        row(&alert(" no records match"));
    }
    for record in visible.iter().take(limit) {
        row(&record_line(record));
    }
    if visible.len() > limit {
        row(&themed(GRAY, &[], &format!(" … {} more", visible.len() - limit)));
    }
    section_mid("PERMALINK");
    let permalink = filters_to_url_params(&selection, &tags);
    if permalink.is_empty() {
        row(&themed(GRAY, &[], " (no filters)"));
    } else {
        row(&format!(" ?{}", permalink));
    }
    section_bot();
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// SUGGEST
// ═══════════════════════════════════════════════════════════════════════════

fn run_suggest(input: &Path, query: &str, max: Option<usize>, json: bool) -> Result<()> {
    let catalog = open_catalog(input)?;
    let groups = match max {
        Some(max) => generate_suggestions_with(
            query,
            catalog.index(),
            max,
            catalog.config().autocomplete.min_chars,
        ),
        None => catalog.suggest(query),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    if groups.is_empty() {
        section_top("SUGGESTIONS");
        row(&themed(
            GRAY,
            &[],
            &format!(
                " nothing for {:?} (at least {} characters)",
                query,
                catalog.config().autocomplete.min_chars
            ),
        ));
        section_bot();
        return Ok(());
    }

    for (i, group) in groups.iter().enumerate() {
        if i == 0 {
            section_top(group.label());
        } else {
            section_mid(group.label());
        }
        for suggestion in &group.suggestions {
            row(&format!(
                " {} {}",
                count_value(suggestion.count),
                highlighted(&suggestion.text, suggestion.highlight)
            ));
        }
    }
    section_bot();
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// FACETS
// ═══════════════════════════════════════════════════════════════════════════

fn run_facets(input: &Path, args: &QueryArgs, json: bool) -> Result<()> {
    let catalog = open_catalog(input)?;
    let (selection, tags) = resolve_query(&catalog, args)?;
    let counts = catalog.facet_counts(&selection, &tags);

    if json {
        println!("{}", serde_json::to_string_pretty(&*counts)?);
        return Ok(());
    }

    for (i, facet) in Facet::ALL.into_iter().enumerate() {
        let label = facet.name().to_uppercase();
        if i == 0 {
            section_top(&label);
        } else {
            section_mid(&label);
        }
        let facet_counts = match facet {
            Facet::Authentication => Some(&counts.authentication),
            other => counts.facets.get(&other),
        };
        let selected = selection.get(facet);
        for option in counts.options.for_facet(facet) {
            let count = facet_counts.and_then(|m| m.get(option)).copied().unwrap_or(0);
            let marker = if option == selected { "▸" } else { " " };
            row(&format!(" {} {} {}", marker, count_value(count), option));
        }
    }

    section_mid("PERIODS");
    for era in Era::ALL {
        let count = counts.periods.get(era.id()).copied().unwrap_or(0);
        let marker = if selection.periods.iter().any(|p| p == era.id()) {
            "▸"
        } else {
            " "
        };
        row(&format!(" {} {} {}", marker, count_value(count), era.name()));
    }

    section_mid("MEDIA");
    for (key, label) in [("true", "with media"), ("false", "without media")] {
        let count = counts.media.get(key).copied().unwrap_or(0);
        row(&format!("   {} {}", count_value(count), label));
    }
    section_bot();
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// PERIOD / INSPECT
// ═══════════════════════════════════════════════════════════════════════════

fn run_period(text: &str) {
    let eras = get_sword_periods(text);
    section_top("PERIOD");
    row(&format!(" input: {:?}", text));
    if let Some(year) = extract_year(text) {
        row(&format!(" year:  {}", year));
    }
    if eras.is_empty() {
        row(&alert(" no era recognised"));
    }
    for era in eras {
        let years = era.years();
        row(&format!(
            " {} {}",
            pad_right(&themed(GREEN, &[BOLD], era.id()), 12),
            themed(GRAY, &[], &format!("{}–{}", years.start(), years.end()))
        ));
    }
    section_bot();
}

fn run_inspect(input: &Path, top: usize) -> Result<()> {
    let catalog = open_catalog(input)?;
    let meito = catalog.records().iter().filter(|r| r.is_meito()).count();

    section_top("CATALOG");
    row(&format!(" records      {}", catalog.len()));
    row(&format!(" meito        {}", meito));
    row(&format!(" fingerprint  {:08x}", catalog.fingerprint()));
    row(&format!(" index values {}", catalog.index().len()));

    for (category, entries) in catalog.index().iter() {
        section_mid(category.label());
        if entries.is_empty() {
            row(&themed(GRAY, &[], " (none)"));
        }
        for entry in entries.iter().take(top) {
            row(&format!(" {} {}", count_value(entry.count), entry.value));
        }
        if entries.len() > top {
            row(&themed(GRAY, &[], &format!(" … {} more", entries.len() - top)));
        }
    }
    section_bot();
    Ok(())
}
