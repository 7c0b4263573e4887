pub mod actors;
pub mod history;
pub mod init;
pub mod journal;
pub mod plots;
pub mod produce;
pub mod resolve;
pub mod status;

use std::path::PathBuf;

use ph_core::{JsonFileStore, PlayhouseStore, Rank};
use ph_engine::{Director, EngineConfig};

/// Where the game lives and how to seed its randomness.
pub struct Context {
    state: PathBuf,
    seed: Option<u64>,
}

impl Context {
    /// A context for the state file at `state`.
    pub fn new(state: PathBuf, seed: Option<u64>) -> Self {
        Self { state, seed }
    }

    fn store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.state)
    }

    fn config(&self) -> EngineConfig {
        match self.seed {
            Some(seed) => EngineConfig::default().with_seed(seed),
            None => EngineConfig::default(),
        }
    }

    /// Load the saved game.
    fn open(&self) -> Result<Director, String> {
        let store = self.store();
        if !store.exists() {
            return Err(format!(
                "no game at {}; run `ph init` first",
                self.state.display()
            ));
        }
        let house = store
            .load()
            .map_err(|e| format!("cannot load {}: {e}", self.state.display()))?;
        Ok(Director::new(house, self.config()))
    }

    /// Write the game back.
    fn save(&self, director: &Director) -> Result<(), String> {
        self.store()
            .save(director.playhouse())
            .map_err(|e| format!("cannot save {}: {e}", self.state.display()))
    }

    /// Load, run a mutating operation, and save only if it succeeded.
    fn update<T>(&self, op: impl FnOnce(&mut Director) -> Result<T, String>) -> Result<T, String> {
        let mut director = self.open()?;
        let out = op(&mut director)?;
        self.save(&director)?;
        Ok(out)
    }
}

fn parse_rank(s: &str) -> Result<Rank, String> {
    Rank::parse(s).ok_or_else(|| {
        let names: Vec<String> = Rank::all().iter().map(|r| r.to_string()).collect();
        format!("unknown rank '{s}' (expected one of: {})", names.join(", "))
    })
}
