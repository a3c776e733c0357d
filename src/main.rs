// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Console toolbox demo.
//!
//! An interactive tour of the `consolekit` helpers: pick an entry from the
//! numbered menu to see typing effects, progress bars, the matrix rain
//! animation, colours, tables and directory trees in action.
//!
//! Settings changed from the menu are persisted with `confy`. Diagnostics go
//! to stderr through `tracing`; set `RUST_LOG=consolekit=debug` to see them.

use std::{path::Path, thread, time::Duration};

use anyhow::{Context, Result};
use consolekit::{
    CancelToken, Colour, Console, NumberPrompt, choose_from_text_menu, clear_screen,
    colorize_text, config::{self, AppConfig}, matrix_rain, print_table, prompt_bool,
    prompt_number, skip_line, typing_input, visualize_directory, write_sentences,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const MENU: [&str; 8] = [
    "Typing effect",
    "Progress bar",
    "Matrix rain",
    "Colours",
    "Table",
    "Directory tree",
    "Settings",
    "Quit",
];

const MATRIX_RUN_TIME: Duration = Duration::from_secs(5);

/// The entry point of the application.
///
/// Installs logging, loads the configuration and runs the menu loop until
/// the user quits, restoring the console afterwards.
fn main() -> Result<()> {
    init_tracing();

    let mut config = config::load_config();
    let mut console = Console::stdio();

    let res = run(&mut console, &mut config);
    restore_console(&mut console);

    res.context("Application error occurred")
}

// Logs go to stderr so they never interleave with redrawn output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Puts the terminal back to its default colours.
///
/// This is "best-effort" and does not return a result, as it runs during
/// cleanup.
fn restore_console(console: &mut Console) {
    console.write_str(&Colour::Reset.escape()).ok();
    skip_line(console).ok();
}

/// Shows the main menu and dispatches to each demo until the user quits.
fn run(console: &mut Console, config: &mut AppConfig) -> Result<()> {
    info!("demo started");

    loop {
        clear_screen(console)?;

        let Some(choice) = choose_from_text_menu(console, &MENU, "Choose an option: ", true, 0)?
        else {
            continue;
        };

        match choice {
            0 => typing_demo(console, config)?,
            1 => progress_demo(console, config)?,
            2 => matrix_demo(console, config)?,
            3 => colour_demo(console)?,
            4 => table_demo(console)?,
            5 => tree_demo(console)?,
            6 => settings(console, config)?,
            _ => return Ok(()),
        }

        console
            .prompt("\nPress Enter to return to the menu...")
            .context("Failed to read from console")?;
    }
}

fn typing_demo(console: &mut Console, config: &AppConfig) -> Result<()> {
    let name = typing_input(console, "What should I call you? ", config.typing_delay())?;
    let name = if name.trim().is_empty() {
        "stranger"
    } else {
        name.trim()
    };

    let greeting = [
        format!("Hello, {name}. "),
        "Every character here is printed on its own. ".to_string(),
        "Nice to meet you.".to_string(),
    ];
    write_sentences(console, &greeting, config.typing_delay(), config.line_delay())?;
    skip_line(console)?;

    Ok(())
}

fn progress_demo(console: &mut Console, config: &AppConfig) -> Result<()> {
    let bar = config.progress_bar(60).with_name("Working");

    for step in 0..bar.total() {
        bar.draw(console, step)?;
        thread::sleep(Duration::from_millis(40));
    }
    skip_line(console)?;

    Ok(())
}

fn matrix_demo(console: &mut Console, config: &AppConfig) -> Result<()> {
    clear_screen(console)?;

    // Stop from a separate thread to show cancellation.
    let cancel = CancelToken::new();
    let timer = cancel.clone();
    thread::spawn(move || {
        thread::sleep(MATRIX_RUN_TIME);
        timer.cancel();
    });

    let frames = matrix_rain(console, &config.matrix_rain(), &cancel)?;
    console.write_str(&format!("{frames} frames drawn\n"))?;

    Ok(())
}

fn colour_demo(console: &mut Console) -> Result<()> {
    for row in Colour::ALL[..32].chunks(4) {
        let line = row
            .iter()
            .map(|colour| colour.paint(&format!("{:<18}", colour.name())))
            .collect::<String>();
        console.write_str(&line)?;
        console.write_str("\n")?;
    }

    let name = console.prompt("\nColour a word, enter a colour name: ")?;
    match colorize_text("consolekit", name.trim()) {
        Ok(text) => console.write_str(&format!("{text}\n"))?,
        Err(e) => console.write_str(&format!("{e}\n"))?,
    }

    Ok(())
}

fn table_demo(console: &mut Console) -> Result<()> {
    let rows = vec![
        vec!["Helper", "Module", "Blocks"],
        vec!["typing_print", "typing", "yes"],
        vec!["progress_bar", "progress", "no"],
        vec!["prompt_number", "prompt", "yes"],
        vec!["matrix_rain", "matrix", "yes"],
    ];

    // Render into a capture buffer first so the table can be recoloured.
    let (res, table) = console.suppressed(|c| print_table(c, &rows));
    res?;

    console.write_str(&Colour::BrightCyan.paint(&table))?;

    Ok(())
}

fn tree_demo(console: &mut Console) -> Result<()> {
    let answer = console.prompt("Directory to show [.]: ")?;
    let path = match answer.trim() {
        "" => Path::new("."),
        other => Path::new(other),
    };

    match visualize_directory(path) {
        Ok(lines) => {
            for line in lines {
                console.write_str(&line)?;
                console.write_str("\n")?;
            }
        }
        Err(e) => console.write_str(&Colour::Red.paint(&format!("{e}\n")))?,
    }

    Ok(())
}

fn settings(console: &mut Console, config: &mut AppConfig) -> Result<()> {
    let current = config.typing_delay_ms;
    let policy = NumberPrompt::default()
        .range(1, 500)
        .tries(3)
        .on_depleted(move |_| i64::try_from(current).ok());

    if let Some(delay) = prompt_number(console, "Typing delay in ms (1-500): ", &policy)? {
        config.typing_delay_ms = u64::try_from(delay).unwrap_or(current);
    }

    let (show_float, _) = prompt_bool(
        console,
        "Show progress with decimals? ",
        &config.bool_prompt(),
    )?;
    if let Some(show_float) = show_float {
        config.show_float = show_float;
    }

    let (save, _) = prompt_bool(console, "Save these settings? ", &config.bool_prompt())?;
    if save == Some(true) {
        config::save_config(config).context("Failed to save configuration")?;
        info!("configuration saved");
    }

    Ok(())
}
