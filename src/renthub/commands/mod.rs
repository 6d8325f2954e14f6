use crate::config::RentHubConfig;
use crate::model::{LeaseAgreement, Property};
use std::path::PathBuf;

pub mod config;
pub mod doctor;
pub mod download;
pub mod draft;
pub mod edit;
pub mod export;
pub mod favorites;
pub mod import;
pub mod init;
pub mod leases;
pub mod list;
pub mod search;
pub mod transition;
pub mod view;

/// Filesystem locations the commands may touch.
#[derive(Debug, Clone)]
pub struct RentHubPaths {
    pub data: PathBuf,
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured command output; the CLI layer decides how to render it.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub properties: Vec<Property>,
    pub leases: Vec<LeaseAgreement>,
    pub favorite_ids: Vec<String>,
    pub files: Vec<PathBuf>,
    pub config: Option<RentHubConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_properties(mut self, properties: Vec<Property>) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_leases(mut self, leases: Vec<LeaseAgreement>) -> Self {
        self.leases = leases;
        self
    }

    pub fn with_favorite_ids(mut self, ids: Vec<String>) -> Self {
        self.favorite_ids = ids;
        self
    }

    pub fn with_files(mut self, files: Vec<PathBuf>) -> Self {
        self.files = files;
        self
    }

    pub fn with_config(mut self, config: RentHubConfig) -> Self {
        self.config = Some(config);
        self
    }
}
