//! `folio` - terminal front end for the portfolio library.
//!
//! Prints recorded algorithm frames, dumps site content, summarises the
//! signal and channel demos, and shows the effective configuration.

use std::any::Any;
use std::panic;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use colored::{ColoredString, Colorize};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info};

use folio::FolioConfig;
use folio::algorithms::{self, Algorithm, BarState, Frame};
use folio::content;
use folio::signal::{self, SignalKind, SignalParams};
use folio::wireless::{self, Modulation, Scenario};

#[derive(Parser, Debug)]
#[command(name = "folio", author, version, about = "Portfolio demos and content in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (TOML). Defaults to .folio/config.toml in the current directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Seed for every random choice, for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Record a sort and print every frame
    Sort {
        /// bubble, quick or merge
        #[arg(value_parser = parse_sort)]
        algorithm: Algorithm,
        /// Values to sort; 20 random values when omitted
        values: Vec<u32>,
        /// Print frames as JSON
        #[arg(long)]
        json: bool,
    },
    /// Record a search and print every probe
    Search {
        /// binary or linear
        #[arg(value_parser = parse_search)]
        algorithm: Algorithm,
        /// Value to look for
        #[arg(long, default_value_t = 42)]
        target: u32,
        /// Values to search; 15 random sorted values when omitted
        values: Vec<u32>,
        /// Print frames as JSON
        #[arg(long)]
        json: bool,
    },
    /// Dump site content
    Content {
        /// Only this section
        #[arg(long, value_enum)]
        section: Option<Section>,
        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Generate one frame of the signal demo and summarise it
    Signal {
        /// sine, am, fm or filter
        kind: SignalKind,
        /// Base frequency in Hz (1-20)
        #[arg(long, default_value_t = 5.0)]
        frequency: f64,
        /// Peak amplitude (0.1-2.0)
        #[arg(long, default_value_t = 1.0)]
        amplitude: f64,
        /// Low-pass cutoff in Hz (5-50)
        #[arg(long, default_value_t = 10.0)]
        cutoff: f64,
        /// Time offset in seconds
        #[arg(long, default_value_t = 0.0)]
        time: f64,
        /// Print the full frame as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print ideal and received constellation points
    Constellation {
        /// bpsk, qpsk, 16qam or 64qam
        modulation: Modulation,
        /// Signal-to-noise ratio in dB
        #[arg(long, default_value_t = 20.0, allow_negative_numbers = true)]
        snr: f64,
        /// Received symbols to draw
        #[arg(long, default_value_t = wireless::SYMBOLS_PER_FRAME)]
        count: usize,
        /// line-of-sight, multipath, fading, mimo or mimo:N
        #[arg(long, default_value = "line-of-sight")]
        scenario: Scenario,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the effective configuration as TOML
    Config {
        /// Read this file instead; errors are reported instead of falling back
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Section {
    Profile,
    Projects,
    Skills,
    Stats,
    Achievements,
    Education,
    Blog,
    Contact,
    Nav,
}

fn parse_sort(raw: &str) -> std::result::Result<Algorithm, String> {
    let algorithm: Algorithm = raw.parse().map_err(|e: folio::Error| e.to_string())?;
    if algorithm.is_search() {
        return Err(format!("`{raw}` is a search; use `folio search`"));
    }
    Ok(algorithm)
}

fn parse_search(raw: &str) -> std::result::Result<Algorithm, String> {
    let algorithm: Algorithm = raw.parse().map_err(|e: folio::Error| e.to_string())?;
    if !algorithm.is_search() {
        return Err(format!("`{raw}` is a sort; use `folio sort`"));
    }
    Ok(algorithm)
}

fn install_broken_pipe_handler() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let payload = info.payload();
        let is_broken = <dyn Any>::downcast_ref::<&str>(payload)
            .is_some_and(|s| s.contains("Broken pipe"))
            || <dyn Any>::downcast_ref::<String>(payload)
                .is_some_and(|s| s.contains("Broken pipe"));

        if is_broken {
            // Piped into `head`.
            std::process::exit(0);
        }

        default_hook(info);
    }));
}

fn main() {
    install_broken_pipe_handler();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    debug!(seed = ?cli.seed, "rng ready");

    // An explicit --config must load for every command, not just `config`.
    let explicit = match &cli.config {
        Some(path) => Some(
            FolioConfig::try_load_from_path(path)
                .with_context(|| format!("reading {}", path.display()))?,
        ),
        None => None,
    };

    match cli.command {
        Commands::Sort {
            algorithm,
            values,
            json,
        } => {
            let values = if values.is_empty() {
                algorithms::random_values(algorithms::SORT_LEN, &mut rng)
            } else {
                values
            };
            let frames = algorithms::record(algorithm, &values, 0);
            print_frames(algorithm, &frames, json)
        }
        Commands::Search {
            algorithm,
            target,
            values,
            json,
        } => {
            let values = if values.is_empty() {
                algorithms::search_values(algorithms::SEARCH_LEN, target, &mut rng)
            } else {
                values
            };
            let frames = algorithms::record(algorithm, &values, target);
            print_frames(algorithm, &frames, json)?;
            if !json {
                match frames.last().and_then(Frame::found) {
                    Some(index) => println!("found {target} at index {index}"),
                    None => println!("{target} not found"),
                }
            }
            Ok(())
        }
        Commands::Content { section, json } => print_content(section, json),
        Commands::Signal {
            kind,
            frequency,
            amplitude,
            cutoff,
            time,
            json,
        } => {
            let params = SignalParams {
                kind,
                frequency,
                amplitude,
                cutoff,
            }
            .clamped();
            let frame = signal::generate(&params, time);
            if json {
                return print_json(&frame);
            }
            println!("{} ({} samples at {} Hz)", kind.label().bold(), signal::SAMPLES, signal::SAMPLE_RATE);
            println!("  frequency  {:.1} Hz", params.frequency);
            println!("  amplitude  {:.2}", params.amplitude);
            if kind == SignalKind::Filter {
                println!("  cutoff     {:.1} Hz (window {})", params.cutoff, params.filter_window());
            }
            println!("  peak       {:.4}", frame.peak_amplitude());
            println!("  rms        {:.4}", frame.rms());
            if let Some(bin) = frame.peak_bin() {
                println!("  spectrum   peak bin {bin} ({:.4})", frame.spectrum[bin]);
            }
            Ok(())
        }
        Commands::Constellation {
            modulation,
            snr,
            count,
            scenario,
            json,
        } => {
            let ideal = modulation.constellation();
            let received = wireless::received_symbols(modulation, scenario, snr, count, &mut rng);
            if json {
                #[derive(Serialize)]
                struct Report<'a> {
                    modulation: &'a str,
                    scenario: String,
                    snr_db: f64,
                    noise_level: f64,
                    ideal: &'a [wireless::ConstellationPoint],
                    received: &'a [wireless::ReceivedSymbol],
                }
                return print_json(&Report {
                    modulation: modulation.label(),
                    scenario: scenario.to_string(),
                    snr_db: snr,
                    noise_level: wireless::noise_level(snr),
                    ideal: &ideal,
                    received: &received,
                });
            }
            println!(
                "{} over {scenario}, SNR {snr} dB (noise level {:.4})",
                modulation.label().bold(),
                wireless::noise_level(snr)
            );
            println!("{} bits/symbol, {} points", modulation.bits_per_symbol(), ideal.len());
            for point in &ideal {
                println!("  {:>6}  I {:+.3}  Q {:+.3}", point.symbol.cyan(), point.i, point.q);
            }
            println!("received:");
            for symbol in &received {
                println!(
                    "  {:>6}  I {:+.3}  Q {:+.3}",
                    ideal[symbol.sent].symbol.green(),
                    symbol.i,
                    symbol.q
                );
            }
            Ok(())
        }
        Commands::Config { path } => {
            let config = match (path, explicit) {
                (Some(path), _) => FolioConfig::try_load_from_path(&path)
                    .with_context(|| format!("reading {}", path.display()))?,
                (None, Some(config)) => config,
                (None, None) => {
                    let cwd = std::env::current_dir().context("resolving current directory")?;
                    FolioConfig::load(&cwd)
                }
            };
            info!("effective config loaded");
            print!("{}", config.to_toml_string()?);
            Ok(())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn paint(value: u32, state: BarState) -> ColoredString {
    let text = format!("{value:>3}");
    match state {
        BarState::Default => text.normal(),
        BarState::Comparing => text.blue(),
        BarState::Swapping => text.red(),
        BarState::Sorted => text.green(),
        BarState::Pivot => text.yellow(),
        BarState::Found => text.magenta().bold(),
    }
}

fn print_frames(algorithm: Algorithm, frames: &[Frame], json: bool) -> Result<()> {
    if json {
        return print_json(frames);
    }
    let Some(last) = frames.last() else {
        bail!("{algorithm} produced no frames");
    };

    println!(
        "{} {} - {} frames",
        algorithm.label().bold(),
        algorithm.complexity().dimmed(),
        frames.len()
    );
    let width = frames.len().to_string().len();
    for (step, frame) in frames.iter().enumerate() {
        let row: Vec<String> = frame
            .bars
            .iter()
            .map(|bar| paint(bar.value, bar.state).to_string())
            .collect();
        let window = frame
            .bounds
            .map(|b| format!("  [{}..={}] mid {}", b.left, b.right, b.mid))
            .unwrap_or_default();
        println!("{:>width$} {}{}", step + 1, row.join(" "), window.dimmed());
    }

    println!();
    let max = last.bars.iter().map(|b| b.value).max().unwrap_or(1).max(1);
    for bar in &last.bars {
        let len = (bar.value as usize * 40).div_ceil(max as usize);
        let fill = "█".repeat(len);
        let fill = match bar.state {
            BarState::Sorted => fill.green(),
            BarState::Found => fill.magenta(),
            _ => fill.normal(),
        };
        println!("{:>3} {}", bar.value, fill);
    }
    Ok(())
}

fn print_content(section: Option<Section>, json: bool) -> Result<()> {
    if json {
        return match section {
            None => print_json(&content::site()),
            Some(Section::Profile) => print_json(&content::PROFILE),
            Some(Section::Projects) => print_json(content::PROJECTS),
            Some(Section::Skills) => print_json(content::SKILLS),
            Some(Section::Stats) => print_json(content::STATS),
            Some(Section::Achievements) => print_json(content::ACHIEVEMENTS),
            Some(Section::Education) => print_json(content::EDUCATION),
            Some(Section::Blog) => print_json(content::POSTS),
            Some(Section::Contact) => print_json(content::CONTACT_LINKS),
            Some(Section::Nav) => print_json(content::NAV_ITEMS),
        };
    }

    let wants = |s: Section| section.is_none_or(|picked| picked == s);
    let profile = &content::PROFILE;

    if wants(Section::Profile) {
        println!("{} ({})", profile.name.bold(), profile.initials);
        println!("  {}", profile.title);
        println!("  {}", profile.specializations.join(" · "));
        println!("  {} · {}", profile.location, profile.email);
    }
    if wants(Section::Projects) {
        println!("{}", "Projects".bold());
        for project in content::PROJECTS {
            let star = if project.featured { "★" } else { " " };
            println!("  {star} {} {}  {}", project.icon.glyph(), project.title, project.github.dimmed());
        }
    }
    if wants(Section::Skills) {
        println!("{}", "Tech Stack".bold());
        for skill in content::SKILLS {
            println!("  {} {}", skill.icon.glyph(), skill.name);
        }
    }
    if wants(Section::Stats) {
        println!("{}", "Stats".bold());
        for stat in content::STATS {
            println!("  {}{} {}", stat.value, stat.suffix, stat.label);
        }
    }
    if wants(Section::Achievements) {
        println!("{}", "Achievements".bold());
        for a in content::ACHIEVEMENTS {
            println!("  {} {} - {}", a.icon.glyph(), a.title, a.description);
        }
    }
    if wants(Section::Education) {
        println!("{}", "Education".bold());
        for e in content::EDUCATION {
            println!("  {} {}, {} ({})", e.years, e.degree, e.school, e.note);
        }
    }
    if wants(Section::Blog) {
        println!("{}", "Blog".bold());
        for post in content::POSTS {
            println!("  {:<12} {} ({})", post.href(), post.title, post.read_time);
        }
    }
    if wants(Section::Contact) {
        println!("{}", "Contact".bold());
        println!("  Email     {}", profile.email);
        for link in content::CONTACT_LINKS {
            println!("  {:<9} {}", link.label, link.href);
        }
        println!("  Topics    {}", content::TOPICS.join(", "));
    }
    if wants(Section::Nav) {
        println!("{}", "Navigation".bold());
        for item in content::visible_nav_items() {
            println!("  {} #{}", item.name, item.anchor);
        }
    }
    Ok(())
}
