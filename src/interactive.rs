use std::io::{self, Write};

use crate::config::{SavedConfig, load_config, save_config};

pub struct InteractiveConfig {
    pub url: String,
    pub json_mode: bool,
    pub html_path: Option<String>,
    pub plain_numbers: bool,
}

/// Helper struct for managing user input operations
struct InputHandler;

impl InputHandler {
    /// Gets user input with automatic trimming
    fn get_input() -> Result<String, io::Error> {
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(input.trim().to_string())
    }

    /// Prompts user with a question and handles yes/no responses
    fn confirm_prompt(message: &str, default_yes: bool) -> Result<bool, io::Error> {
        let default_text = if default_yes { "[Y/n]" } else { "[y/N]" };

        loop {
            print!("{} {}: ", message, default_text);
            io::stdout().flush()?;

            let input = Self::get_input()?.to_lowercase();

            match input.as_str() {
                "" => return Ok(default_yes),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => {
                    println!("❌ Please enter Y for yes or N for no.");
                    println!();
                }
            }
        }
    }

    /// Prompts user for a numeric choice within a range
    fn numeric_choice_prompt(prompt: &str, min: usize, max: usize) -> Result<Option<usize>, io::Error> {
        loop {
            print!("{}: ", prompt);
            io::stdout().flush()?;

            let input = Self::get_input()?;

            match input.parse::<usize>() {
                Ok(0) if min == 0 => return Ok(None), // Quit option
                Ok(n) if n >= min && n <= max => return Ok(Some(n)),
                _ => {
                    println!(
                        "❌ Invalid selection. Please enter a number between {} and {}.",
                        min, max
                    );
                    println!();
                }
            }
        }
    }

    /// Prompts for a line of text, falling back to a default when empty
    fn text_prompt(prompt: &str, default: Option<&str>) -> Result<Option<String>, io::Error> {
        match default {
            Some(d) => print!("{} [{}]: ", prompt, d),
            None => print!("{}: ", prompt),
        }
        io::stdout().flush()?;

        let input = Self::get_input()?;
        if input.is_empty() {
            return Ok(default.map(str::to_string));
        }
        Ok(Some(input))
    }
}

/// Helper struct for display formatting
struct DisplayHelper;

impl DisplayHelper {
    fn print_header(title: &str, width: usize) {
        println!("{}", title);
        println!("{}", "=".repeat(width));
        println!();
    }

    fn print_config_summary(config: &InteractiveConfig) {
        let mode = if config.json_mode {
            "JSON report".to_string()
        } else if let Some(path) = &config.html_path {
            format!("HTML snapshot ({})", path)
        } else {
            "Interactive TUI".to_string()
        };
        println!("📋 Configuration Summary:");
        println!("   🌐 Estimate URL: {}", config.url);
        println!("   📊 Mode: {}", mode);
        println!(
            "   🔢 Numbers: {}",
            if config.plain_numbers { "Full digits" } else { "Abbreviated (K/M/B)" }
        );
        println!();
    }
}

pub fn run_interactive_mode() -> Result<Option<InteractiveConfig>, io::Error> {
    // Check if we have a saved configuration
    if let Some(saved) = load_config() {
        return handle_existing_config(saved);
    }

    // No saved config, run full interactive setup
    run_full_interactive_setup()
}

fn handle_existing_config(saved: SavedConfig) -> Result<Option<InteractiveConfig>, io::Error> {
    // Auto-use saved configuration for faster startup
    println!("🎯 Using Saved Configuration");
    println!("   🌐 Estimate URL: {}", saved.url);
    println!(
        "   📊 Mode: {}",
        if saved.json_mode { "JSON report" } else { "Interactive TUI" }
    );
    println!("🚀 Loading estimate...");
    println!();

    Ok(Some(InteractiveConfig {
        url: saved.url,
        json_mode: saved.json_mode,
        html_path: None,
        plain_numbers: saved.plain_numbers,
    }))
}

fn run_full_interactive_setup() -> Result<Option<InteractiveConfig>, io::Error> {
    DisplayHelper::print_header("🚀 Welcome to Linetally - Interactive Setup", 50);

    // Step 1: Estimate URL
    let url = choose_url()?;
    let Some(url) = url else {
        return Ok(None); // User chose to quit
    };

    // Step 2: Output mode
    let (json_mode, html_path) = choose_mode()?;

    // Step 3: Number formatting
    let plain_numbers = choose_number_style()?;

    let config = InteractiveConfig {
        url,
        json_mode,
        html_path,
        plain_numbers,
    };

    // Step 4: Show summary
    println!();
    DisplayHelper::print_config_summary(&config);

    // Step 5: Ask if user wants to save these settings
    let save_settings = ask_save_settings()?;

    // Step 6: Final confirmation
    if !InputHandler::confirm_prompt("🔥 Load the estimate with these settings?", true)? {
        println!("❌ Cancelled.");
        return Ok(None);
    }

    if save_settings {
        save_user_config(&config)?;
    }

    Ok(Some(config))
}

fn save_user_config(config: &InteractiveConfig) -> Result<(), io::Error> {
    let saved = SavedConfig {
        url: config.url.clone(),
        json_mode: config.json_mode,
        plain_numbers: config.plain_numbers,
    };

    match save_config(&saved) {
        Ok(_) => {
            println!("💾 Configuration saved! Next time you can start quickly.");
            println!();
        }
        Err(e) => {
            eprintln!("⚠️  Warning: Could not save configuration: {}", e);
            eprintln!("    (This won't affect this run, continuing...)");
            println!();
        }
    }

    Ok(())
}

fn ask_save_settings() -> Result<bool, io::Error> {
    println!("💾 Save these settings for future use?");
    println!("   (Next time you run the program, you can start without any prompts)");
    println!();

    InputHandler::confirm_prompt("💾 Save settings?", true)
}

fn choose_url() -> Result<Option<String>, io::Error> {
    println!("🌐 Where is the estimate document published?");
    println!("   The endpoint should serve JSON like {{\"ai_lines\": ..., \"human_lines\": ...}}.");
    println!("   (Leave empty to quit; an unreachable URL shows the bundled placeholder.)");
    println!();

    let url = InputHandler::text_prompt("🌐 Estimate URL", None)?;
    println!();
    Ok(url)
}

fn choose_mode() -> Result<(bool, Option<String>), io::Error> {
    println!("📊 Choose Output Mode:");
    println!("   1. Interactive TUI (recommended) - Animated dashboard in the terminal");
    println!("   2. JSON report - Single machine-readable report for automation");
    println!("   3. HTML snapshot - Static page with the rendered widget");
    println!();

    match InputHandler::numeric_choice_prompt("📊 Select mode (1-3)", 1, 3)? {
        Some(2) => Ok((true, None)),
        Some(3) => {
            println!();
            let path = InputHandler::text_prompt("📄 Snapshot path", Some("estimate.html"))?;
            Ok((false, path))
        }
        _ => Ok((false, None)),
    }
}

fn choose_number_style() -> Result<bool, io::Error> {
    println!();
    println!("🔢 Number Style:");
    println!("   Large counts are abbreviated (11.2B) with the exact value kept alongside.");
    println!();

    InputHandler::confirm_prompt("🔢 Show full digits instead?", false)
}
