//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--data-dir, --json, --verbose) are inherited by all subcommands
//! - `upgrade --badge` and `earn --level` parse on purpose so the validator
//!   can reject them with a typed error

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::value_objects::{ActionRequest, Level, Track, UserKey};

/// Payladder - career progression ledger and salary calculator
#[derive(Parser, Debug)]
#[command(name = "payladder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding salary_grid.toml, badges.toml and ledger.jsonl
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Emit one JSON object per line
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Identifies a user within a track
#[derive(Args, Debug, Clone)]
pub struct UserArgs {
    #[arg(long)]
    pub username: String,

    #[arg(long, value_enum)]
    pub track: Track,
}

impl UserArgs {
    pub fn key(&self) -> UserKey {
        UserKey::new(self.username.clone(), self.track)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a user to a track at a starting level
    Join {
        #[command(flatten)]
        user: UserArgs,

        /// Starting level
        #[arg(long, value_enum)]
        level: Level,

        /// Badges already earned toward later levels (repeatable)
        #[arg(long = "badge", value_name = "NAME")]
        badges: Vec<String>,
    },

    /// Move a user to a new level
    Upgrade {
        #[command(flatten)]
        user: UserArgs,

        /// New level
        #[arg(long, value_enum)]
        level: Level,

        /// Not accepted for upgrades
        #[arg(long = "badge", value_name = "NAME", hide = true)]
        badges: Vec<String>,
    },

    /// Record badges for a user at their current level
    Earn {
        #[command(flatten)]
        user: UserArgs,

        /// Badge name (repeatable)
        #[arg(long = "badge", value_name = "NAME")]
        badges: Vec<String>,

        /// Not accepted for badge awards
        #[arg(long, value_enum, hide = true)]
        level: Option<Level>,
    },

    /// Show a user's salary with its breakdown
    Salary {
        #[command(flatten)]
        user: UserArgs,
    },

    /// Show a user's ledger rows
    History {
        #[command(flatten)]
        user: UserArgs,
    },

    /// Validate the reference tables and the ledger file
    Check,
}

impl Commands {
    /// Command name used in JSON events
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Join { .. } => "join",
            Commands::Upgrade { .. } => "upgrade",
            Commands::Earn { .. } => "earn",
            Commands::Salary { .. } => "salary",
            Commands::History { .. } => "history",
            Commands::Check => "check",
        }
    }

    /// The ledger mutation this command asks for, if any
    pub fn action_request(&self) -> Option<ActionRequest> {
        match self {
            Commands::Join {
                user,
                level,
                badges,
            } => Some(ActionRequest::join(user.key(), *level, badges.clone())),
            Commands::Upgrade {
                user,
                level,
                badges,
            } => Some(ActionRequest::upgrade(user.key(), *level).with_badges(badges.clone())),
            Commands::Earn {
                user,
                badges,
                level,
            } => Some(ActionRequest::earn_badge(user.key(), badges.clone()).with_level(*level)),
            Commands::Salary { .. } | Commands::History { .. } | Commands::Check => None,
        }
    }
}
