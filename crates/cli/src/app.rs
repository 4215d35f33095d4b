use crate::input::{Command, HELP_TEXT};
use crate::view::{render_history, render_status, CardGrid};
use anyhow::{Context, Result};
use gachapull_core::{GachaEngine, PlayerState, RngState};
use gachapull_data::{
    check_config_labels, load_catalog, load_gacha_config, load_player_state_or_default,
    save_player_state,
};
use std::path::PathBuf;
use tracing::error;

#[derive(Debug, Clone)]
pub struct AppOptions {
    pub catalog: PathBuf,
    pub config: Option<PathBuf>,
    pub save: Option<PathBuf>,
    pub seed: Option<u64>,
}

pub struct App {
    pub engine: GachaEngine,
    pub state: PlayerState,
    pub grid: CardGrid,
    pub save_path: Option<PathBuf>,
    pub should_quit: bool,
}

impl App {
    pub fn bootstrap(options: &AppOptions) -> Result<Self> {
        let catalog = load_catalog(&options.catalog)?;
        let config = match options.config.as_ref() {
            Some(path) => load_gacha_config(path)?,
            None => Default::default(),
        };
        check_config_labels(&catalog, &config);
        let rng = match options.seed {
            Some(seed) => RngState::from_seed(seed),
            None => RngState::from_entropy(),
        };
        let state = match options.save.as_ref() {
            Some(path) => load_player_state_or_default(path, &catalog, &config),
            None => PlayerState::new(&catalog),
        };
        Ok(Self {
            engine: GachaEngine::with_rng(config, catalog, rng),
            state,
            grid: CardGrid::default(),
            save_path: options.save.clone(),
            should_quit: false,
        })
    }

    /// Run one command and return the text to show.
    pub fn execute(&mut self, command: Command) -> String {
        match command {
            Command::Pull(count) => {
                if self.state.active_types().is_empty() {
                    return "Activate at least one type before pulling!".to_string();
                }
                let state = std::mem::take(&mut self.state);
                let batch = self.engine.pull(state, count);
                self.state = batch.state;
                self.grid.show(&batch.results);
                self.persist();
                self.grid.render()
            }
            Command::GuaranteedLegendary => {
                let rarity = self.engine.config.legendary_rarity.clone();
                self.guaranteed(&rarity)
            }
            Command::GuaranteedRare => {
                let rarity = self.engine.config.rare_rarity.clone();
                self.guaranteed(&rarity)
            }
            Command::ResetPity => {
                self.state.reset_pity();
                self.persist();
                "Pity counters reset to 0.".to_string()
            }
            Command::SetPity(value) => {
                match self.state.set_legendary_pity(value, &self.engine.config) {
                    Ok(()) => {
                        self.persist();
                        format!("Legendary pity set to {value}.")
                    }
                    Err(err) => err.to_string(),
                }
            }
            Command::ClearHistory => {
                self.state.clear_history();
                self.grid.clear();
                self.persist();
                "Result history cleared.".to_string()
            }
            Command::ToggleType(name) => match self.state.toggle_type(&self.engine.catalog, &name) {
                Ok(active) => {
                    self.persist();
                    let label = if active { "activated" } else { "deactivated" };
                    format!("{name} {label}.")
                }
                Err(err) => err.to_string(),
            },
            Command::ToggleMastery(name) => {
                match self.state.toggle_mastery(&self.engine.catalog, &name) {
                    Ok(true) => {
                        self.persist();
                        format!("Mastery enabled for {name}.")
                    }
                    Ok(false) if self.state.is_active(&name) => {
                        self.persist();
                        format!("Mastery removed from {name}.")
                    }
                    Ok(false) => format!("{name} is not active; mastery unchanged."),
                    Err(err) => err.to_string(),
                }
            }
            Command::ToggleAllTypes => {
                let active = self.state.toggle_all_types(&self.engine.catalog);
                self.persist();
                if active {
                    "All types activated.".to_string()
                } else {
                    "All types deactivated.".to_string()
                }
            }
            Command::ToggleAllMastery => match self.state.toggle_all_mastery() {
                Ok(enabled) => {
                    self.persist();
                    if enabled {
                        "Mastery enabled on every active type.".to_string()
                    } else {
                        "All mastery removed.".to_string()
                    }
                }
                Err(err) => format!("Cannot apply mastery: {err}."),
            },
            Command::Status => render_status(&self.engine.status(&self.state)),
            Command::History => render_history(&self.state.history),
            Command::Reveal(Some(index)) => {
                if self.grid.reveal(index) {
                    self.grid.render()
                } else {
                    format!("no card at {index}")
                }
            }
            Command::Reveal(None) => {
                let count = self.grid.reveal_all();
                format!("{}\n{count} card(s) revealed.", self.grid.render())
            }
            Command::Help => HELP_TEXT.to_string(),
            Command::Quit => {
                self.should_quit = true;
                String::new()
            }
            Command::Empty => String::new(),
            Command::Invalid(message) => message,
        }
    }

    fn guaranteed(&mut self, rarity: &str) -> String {
        let result = self.engine.guaranteed_pull(&self.state, rarity);
        self.grid.show(std::slice::from_ref(&result));
        self.grid.render()
    }

    fn persist(&self) {
        let Some(path) = self.save_path.as_ref() else {
            return;
        };
        if let Err(err) = save_player_state(path, &self.state)
            .with_context(|| format!("save state to {}", path.display()))
        {
            error!("{err:#}");
        }
    }
}
