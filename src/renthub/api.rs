//! # API Facade
//!
//! Thin facade over the command layer: the single entry point for every
//! renthub operation regardless of the UI driving it. It dispatches to the
//! command modules, owns the session's favorites set, and returns structured
//! `Result<CmdResult>` values.
//!
//! Business logic lives in `commands/*.rs`; I/O formatting lives in the CLI.
//! `RentHubApi<S: DataStore>` is generic over the storage backend: the binary
//! uses `FileStore`, the tests use `InMemoryStore`.

use crate::commands;
use crate::error::Result;
use crate::lease::LeaseAction;
use crate::model::Favorites;
use crate::search::SearchFilters;
use crate::store::DataStore;
use std::path::PathBuf;

/// The main API facade for renthub operations.
///
/// Favorites are held here because they are session state, not store state:
/// one API instance is one viewing session, and the set dies with it.
pub struct RentHubApi<S: DataStore> {
    store: S,
    paths: commands::RentHubPaths,
    favorites: Favorites,
}

impl<S: DataStore> RentHubApi<S> {
    pub fn new(store: S, paths: commands::RentHubPaths) -> Self {
        Self {
            store,
            paths,
            favorites: Favorites::new(),
        }
    }

    pub fn list_properties(&self, featured_only: bool) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, featured_only)
    }

    pub fn search_properties(
        &self,
        query: Option<&str>,
        filters: &SearchFilters,
    ) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, query, filters)
    }

    pub fn view_properties<I: AsRef<str>>(&self, ids: &[I]) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, ids)
    }

    pub fn toggle_favorites<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        commands::favorites::toggle(&self.store, &mut self.favorites, ids)
    }

    pub fn list_favorites(&self) -> Result<commands::CmdResult> {
        commands::favorites::list(&self.store, &self.favorites)
    }

    pub fn list_leases(&self) -> Result<commands::CmdResult> {
        commands::leases::run(&self.store)
    }

    pub fn show_lease(&self, id: &str) -> Result<commands::CmdResult> {
        commands::leases::show(&self.store, id)
    }

    pub fn draft_lease(&mut self, params: commands::draft::DraftParams) -> Result<commands::CmdResult> {
        commands::draft::run(&mut self.store, params)
    }

    pub fn edit_lease(&mut self, id: &str, terms: String) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, id, terms)
    }

    pub fn transition_lease(&mut self, id: &str, action: LeaseAction) -> Result<commands::CmdResult> {
        commands::transition::run(&mut self.store, id, action)
    }

    pub fn download_lease(&self, id: &str, out: Option<PathBuf>) -> Result<commands::CmdResult> {
        commands::download::run(&self.store, id, out)
    }

    pub fn export(&self, out: Option<PathBuf>) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, out)
    }

    pub fn import(&mut self, paths: Vec<PathBuf>) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, paths)
    }

    pub fn doctor(&self) -> Result<commands::CmdResult> {
        commands::doctor::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&mut self) -> Result<commands::CmdResult> {
        let paths = self.paths.clone();
        commands::init::run(&mut self.store, &paths)
    }

    pub fn paths(&self) -> &commands::RentHubPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::draft::DraftParams;
pub use commands::{CmdMessage, CmdResult, MessageLevel, RentHubPaths};
