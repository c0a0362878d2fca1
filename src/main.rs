mod anim;
mod config;
mod error;
mod estimate;
mod fetch;
mod format;
mod interactive;
mod markup;
mod render;
mod ring;
mod sink;
mod snapshot;
mod types;
mod ui;

use clap::Parser;
use crossterm::event::{self, Event};
use std::process::exit;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

use config::{Cli, reset_config};
use estimate::EstimateReport;
use format::Formatters;
use interactive::run_interactive_mode;
use render::Renderer;
use types::App;

fn display_startup_info(url: &str, plain_numbers: bool) {
    eprintln!("🚀 Starting linetally...");
    eprintln!("🌐 Estimate URL: {}", url);
    eprintln!(
        "🔢 Numbers: {}",
        if plain_numbers { "Full digits" } else { "Abbreviated (K/M/B)" }
    );
    eprintln!("⏱️  Loading estimate... (Press 'q' to quit, 'r' to replay the count-up)");
    eprintln!();
}

fn show_url_help() {
    eprintln!("❌ No estimate URL specified!");
    eprintln!();
    eprintln!("💡 Usage examples:");
    eprintln!("   linetally --url https://example.org/data/estimate.json            # Animated TUI dashboard");
    eprintln!("   linetally --url https://example.org/data/estimate.json --json     # One-shot JSON report");
    eprintln!("   linetally --url https://example.org/data/estimate.json --html out.html   # Static HTML snapshot");
    eprintln!("   linetally --url https://example.org/data/estimate.json --plain    # Full digits, no K/M/B");
    eprintln!("   linetally --reset                                                 # Reset saved configuration");
    eprintln!();
    eprintln!("📖 Use --help for more options");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Handle reset flag first
    if cli.reset {
        match reset_config() {
            Ok(true) => {
                println!("✅ Saved configuration has been reset.");
                println!("   Next time you run the program, you'll see the full setup again.");
            }
            Ok(false) => {
                println!("ℹ️  No saved configuration found to reset.");
            }
            Err(e) => {
                eprintln!("❌ Error resetting configuration: {}", e);
                exit(1);
            }
        }
        return Ok(());
    }

    // Check if no arguments were provided - run interactive mode
    let (url, json_mode, html_path, plain_numbers) =
        if cli.url.is_none() && !cli.json && cli.html.is_none() && !cli.plain {
            match run_interactive_mode()? {
                Some(setup) => (setup.url, setup.json_mode, setup.html_path, setup.plain_numbers),
                None => {
                    // User cancelled or quit
                    return Ok(());
                }
            }
        } else if let Some(url) = cli.url {
            (url, cli.json, cli.html, cli.plain)
        } else {
            // Some arguments provided but no URL - show help
            show_url_help();
            return Ok(());
        };

    let formatters = Formatters {
        abbreviate: !plain_numbers,
    };
    let renderer = Renderer::new(formatters);

    // The loader never fails outward: any problem is logged and masked by
    // the bundled placeholder, so something always renders.
    let estimate = fetch::load_or_fallback(&url).await;

    if json_mode {
        let report = EstimateReport::new(&estimate, &formatters);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(path) = html_path {
        let html = snapshot::render_html(&estimate, formatters);
        if path == "-" {
            print!("{}", html);
        } else {
            std::fs::write(&path, html)?;
            eprintln!("📄 Snapshot written to {}", path);
        }
        return Ok(());
    }

    display_startup_info(&url, plain_numbers);

    // Start TUI
    let mut app = App::new(estimate);
    let loaded = app.estimate.clone();
    app.counters = renderer.render(&loaded, &mut app.slots);

    let mut terminal = ui::setup_terminal()?;

    let tick_rate = Duration::from_millis(16); // ~60 fps while counters run
    let mut last_tick = Instant::now();

    loop {
        // --- Draw UI ---
        ui::render_ui(&app, &mut terminal)?;

        // --- Input Handling ---
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if crossterm::event::poll(timeout)? {
            if let Event::Key(event) = event::read()? {
                if event.kind == crossterm::event::KeyEventKind::Press {
                    if ui::input::handle_key_event(&mut app, &renderer, event.code) {
                        break; // Exit condition
                    }
                }
            }
        }

        // --- Tick-based updates ---
        if last_tick.elapsed() >= tick_rate {
            renderer.tick(&mut app.counters, Instant::now(), &mut app.slots);
            last_tick = Instant::now();
        }
    }

    ui::restore_terminal(&mut terminal)?;
    Ok(())
}
