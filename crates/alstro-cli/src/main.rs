//! Alstro - site tool for 劇團 或素翔鷺 (Gekidan Alstro)
//!
//! The `alstro` command renders, previews and publishes the company site.
//!
//! ## Commands
//!
//! - `routes`: List the route table
//! - `render`: Render one page to HTML
//! - `activities`: Print the filtered activity list
//! - `build`: Publish the static site
//! - `slideshow`: Run the home page slider in the terminal
//! - `contact`: Submit the contact form through the stub transport

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::time::Instant;
use tracing::{info, Level};

use alstro_content::Activity;
use alstro_core::config::parse_interval;
use alstro_core::pages::PageState;
use alstro_core::{
    publish_site, render_document, resolve, submit, ContactForm, Route, Site, SiteConfig,
    SiteError, SlideRotation, StubTransport, TagFilter, TagSelection, METRICS, NAV_ITEMS,
};

#[derive(Parser)]
#[command(name = "alstro")]
#[command(author = "Gekidan Alstro")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Site tool for 劇團 或素翔鷺 (Gekidan Alstro)", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    /// JSON catalog document (default: built-in sample catalog)
    #[arg(long, global = true, env = "ALSTRO_CATALOG")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the route table
    Routes,

    /// Render one page to HTML
    Render {
        /// URL path, e.g. `/activities`
        path: String,

        /// Tag selected on the activities filter (label or slug)
        #[arg(long)]
        tag: Option<TagSelection>,

        /// Slider position on the home page
        #[arg(long)]
        slide: Option<usize>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the filtered, partitioned activity list
    Activities {
        /// Tag to filter by (label or slug)
        #[arg(long)]
        tag: Option<TagSelection>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Publish every page and a manifest
    Build {
        /// Output directory (default: ALSTRO_OUT_DIR or `dist`)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Run the slider; stdin `n` / `p` / `q` for next, previous, quit
    Slideshow {
        /// Stop after this many timer ticks
        #[arg(long)]
        ticks: Option<u64>,

        /// Rotation period in milliseconds
        #[arg(long)]
        interval_ms: Option<String>,
    },

    /// Submit the contact form
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        subject: String,

        #[arg(long)]
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    alstro_core::init_tracing(cli.json, level);

    let mut config = SiteConfig::from_env().context("Invalid site configuration")?;
    if let Some(path) = cli.catalog {
        config = config.with_catalog_path(path);
    }

    let source = config.catalog_source();
    let site = Site::load(source.as_ref())
        .await
        .with_context(|| format!("Failed to load catalog from {}", source.describe()))?;

    let mut stdout = std::io::stdout();
    let result = match cli.command {
        Commands::Routes => cmd_routes(&mut stdout),
        Commands::Render {
            path,
            tag,
            slide,
            output,
        } => cmd_render(&mut stdout, &site, &path, tag, slide, output.as_deref()),
        Commands::Activities { tag, format } => cmd_activities(&mut stdout, &site, tag, format),
        Commands::Build { out } => {
            let out = out.unwrap_or_else(|| config.output_dir().to_path_buf());
            cmd_build(&mut stdout, &site, &out)
        }
        Commands::Slideshow { ticks, interval_ms } => {
            let period = match interval_ms {
                Some(raw) => parse_interval(&raw)?,
                None => config.slide_interval,
            };
            let input = BufReader::new(tokio::io::stdin());
            cmd_slideshow(&mut stdout, &site, period, ticks, input).await
        }
        Commands::Contact {
            name,
            email,
            subject,
            message,
        } => {
            let form = ContactForm::new(name, email, subject, message);
            cmd_contact(&mut stdout, &form).await
        }
    };
    METRICS.flush();
    result
}

/// List the route table
fn cmd_routes(out: &mut impl Write) -> Result<()> {
    for route in Route::ALL {
        let nav = NAV_ITEMS
            .iter()
            .find(|item| item.href == route.path())
            .map(|item| item.label)
            .unwrap_or("-");
        writeln!(out, "{:<12} {:<16} menu: {}", route.path(), route.title(), nav)?;
    }
    Ok(())
}

/// Render one page
fn cmd_render(
    out: &mut impl Write,
    site: &Site,
    path: &str,
    tag: Option<TagSelection>,
    slide: Option<usize>,
    output: Option<&Path>,
) -> Result<()> {
    let route = resolve(path).ok_or_else(|| SiteError::RouteNotFound(path.to_string()))?;

    let mut state = PageState::default();
    if let Some(tag) = tag {
        state.filter.select(tag);
    }
    if let Some(n) = slide {
        let mut rotation = site.rotation()?;
        for _ in 0..n {
            rotation.advance();
        }
        state.slider = Some(rotation);
    }

    let html = render_document(&site.page(route, &state));
    match output {
        Some(file) => {
            std::fs::write(file, &html).with_context(|| format!("write {:?}", file))?;
            info!(route = %route, path = %file.display(), "page written");
        }
        None => out.write_all(html.as_bytes())?,
    }
    Ok(())
}

#[derive(Serialize)]
struct ActivitiesReport<'a> {
    selected: TagSelection,
    tags: Vec<TagSelection>,
    current: Vec<&'a Activity>,
    past: Vec<&'a Activity>,
}

/// Print the filtered activity list
fn cmd_activities(
    out: &mut impl Write,
    site: &Site,
    tag: Option<TagSelection>,
    format: OutputFormat,
) -> Result<()> {
    let catalog = site.activities().ok_or(SiteError::InvalidCatalog("activity"))?;
    let mut filter = TagFilter::new();
    if let Some(tag) = tag {
        filter.select(tag);
    }
    let view = filter.view(catalog);

    if format == OutputFormat::Json {
        let report = ActivitiesReport {
            selected: view.selected,
            tags: view.tags,
            current: view.partition.current,
            past: view.partition.past,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    let tags: Vec<String> = view
        .tags
        .iter()
        .map(|t| {
            if *t == view.selected {
                format!("[{}]", t.label())
            } else {
                t.label().to_string()
            }
        })
        .collect();
    writeln!(out, "{}", tags.join(" "))?;

    if view.partition.is_empty() {
        writeln!(out, "該当する活動がありません。")?;
        return Ok(());
    }
    let groups = [
        ("現在／予定の活動", &view.partition.current),
        ("過去の活動", &view.partition.past),
    ];
    for (heading, list) in groups {
        if list.is_empty() {
            continue;
        }
        writeln!(out, "{heading}")?;
        for activity in list.iter() {
            writeln!(
                out,
                "  {}  [{}] {}",
                activity.date_label(),
                activity.tag.label(),
                activity.title
            )?;
            if let Some(link) = &activity.external_link {
                writeln!(out, "      {link}")?;
            }
        }
    }
    Ok(())
}

/// Publish the static site
fn cmd_build(out: &mut impl Write, site: &Site, dir: &Path) -> Result<()> {
    let manifest = publish_site(dir, site)?;
    for page in &manifest.pages {
        writeln!(
            out,
            "{}  {:>7}  {}",
            page.sha256.short(),
            page.bytes,
            page.path
        )?;
    }
    writeln!(out, "Published {} pages to {}", manifest.pages.len(), dir.display())?;
    Ok(())
}

fn print_slide(out: &mut impl Write, rotation: &SlideRotation) -> Result<()> {
    match (rotation.current_index(), rotation.current_slide()) {
        (Some(index), Some(slide)) => writeln!(
            out,
            "[{}/{}] {} ({})",
            index + 1,
            rotation.len(),
            slide.title,
            slide.schedule
        )?,
        _ => writeln!(out, "(no slides)")?,
    }
    out.flush()?;
    Ok(())
}

/// Mount a live slide show and print every displayed slide
async fn cmd_slideshow<R>(
    out: &mut impl Write,
    site: &Site,
    period: Duration,
    ticks: Option<u64>,
    input: R,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let show = site
        .mount_slideshow(period)
        .context("Failed to mount slide show")?;
    let mut rx = show.subscribe();
    let rotates = rx.borrow().rotates();
    print_slide(out, &rx.borrow_and_update())?;

    // Ticks over fewer than two slides change nothing and notify nobody, so
    // the limit becomes a deadline on the schedule instead.
    let deadline = match ticks {
        Some(limit) if !rotates => {
            let span = period.saturating_mul(u32::try_from(limit).unwrap_or(u32::MAX));
            Instant::now().checked_add(span)
        }
        _ => None,
    };

    let mut lines = input.lines();
    let mut input_open = true;
    let mut seen_ticks = 0u64;

    loop {
        if rotates && ticks.is_some_and(|limit| seen_ticks >= limit) {
            break;
        }
        tokio::select! {
            _ = tokio::time::sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => break,
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                seen_ticks += 1;
                print_slide(out, &rx.borrow_and_update())?;
            }
            line = lines.next_line(), if input_open => {
                match line?.as_deref().map(str::trim) {
                    Some("n") => {
                        show.next();
                        print_slide(out, &rx.borrow_and_update())?;
                    }
                    Some("p") => {
                        show.previous();
                        print_slide(out, &rx.borrow_and_update())?;
                    }
                    Some("q") => break,
                    Some(_) => {}
                    None => input_open = false,
                }
            }
        }
    }

    show.teardown();
    Ok(())
}

/// Validate and submit the contact form
async fn cmd_contact(out: &mut impl Write, form: &ContactForm) -> Result<()> {
    let ack = match submit(&StubTransport, form).await {
        Ok(ack) => ack,
        Err(e) => bail!("Contact form rejected: {e}"),
    };
    writeln!(out, "{}", ack.message)?;
    writeln!(out, "receipt: {}", ack.receipt_id)?;
    writeln!(
        out,
        "received: {}",
        ack.received_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    Ok(())
}
