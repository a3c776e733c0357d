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

//! Application configuration.
//!
//! This module manages the configuration file holding the defaults the demo
//! uses for each helper: typing speed, progress bar tiles, matrix rain
//! settings and prompt retry policy.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    matrix::MatrixRain,
    progress::{DisplayMode, ProgressBar},
    prompt::BoolPrompt,
};

const CONFIG_NAME: &str = "consolekit";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub typing_delay_ms: u64,
    pub line_delay_ms: u64,
    pub progress_length: usize,
    pub empty_tile: char,
    pub full_tile: char,
    pub show_float: bool,
    pub matrix_speed_ms: u64,
    pub matrix_density: f64,
    pub matrix_symbols: String,
    pub prompt_tries: u32,
    pub delete_lines: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            typing_delay_ms: 50,
            line_delay_ms: 700,
            progress_length: 20,
            empty_tile: ProgressBar::DEFAULT_EMPTY_TILE,
            full_tile: ProgressBar::DEFAULT_FULL_TILE,
            show_float: true,
            matrix_speed_ms: 100,
            matrix_density: 0.2,
            matrix_symbols: "01".to_string(),
            prompt_tries: 0,
            delete_lines: true,
        }
    }
}

impl AppConfig {
    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }

    pub fn line_delay(&self) -> Duration {
        Duration::from_millis(self.line_delay_ms)
    }

    /// A progress bar over `total` steps styled from this configuration.
    pub fn progress_bar(&self, total: u64) -> ProgressBar {
        ProgressBar::new(total, self.progress_length)
            .with_tiles(self.empty_tile, self.full_tile)
            .with_display_mode(DisplayMode::from_show_float(self.show_float))
    }

    /// Matrix rain settings sized to the terminal.
    pub fn matrix_rain(&self) -> MatrixRain {
        MatrixRain {
            speed: Duration::from_millis(self.matrix_speed_ms),
            density: self.matrix_density,
            symbols: self.matrix_symbols.chars().collect(),
            ..MatrixRain::default()
        }
    }

    pub fn bool_prompt(&self) -> BoolPrompt {
        BoolPrompt {
            tries: self.prompt_tries,
            delete_lines: self.delete_lines,
            ..BoolPrompt::default()
        }
    }
}

/// Loads the configuration, falling back to defaults if it is missing or
/// unreadable.
pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

pub fn save_config(cfg: &AppConfig) -> Result<()> {
    confy::store(CONFIG_NAME, None, cfg)?;
    Ok(())
}
