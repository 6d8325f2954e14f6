use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "renthub")]
#[command(about = "Browse rental listings and manage lease agreements", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List properties
    #[command(alias = "ls")]
    List {
        /// Only listings flagged for promotional placement
        #[arg(long)]
        featured: bool,
    },

    /// Search properties with a free-text query and structured filters
    #[command(alias = "s")]
    Search {
        /// Free-text query (matches title, description, location, amenities)
        #[arg(required = false)]
        query: Option<String>,

        /// City, state, or zip substring
        #[arg(short, long)]
        location: Option<String>,

        /// Minimum monthly rent (inclusive)
        #[arg(long, value_name = "DOLLARS")]
        min_rent: Option<String>,

        /// Maximum monthly rent (inclusive)
        #[arg(long, value_name = "DOLLARS")]
        max_rent: Option<String>,

        /// Property type, repeatable (apartment, house, condo, studio, room)
        #[arg(short = 't', long = "type")]
        property_types: Vec<String>,

        /// Minimum bedroom count ("N+"; 0 matches studios)
        #[arg(short, long)]
        bedrooms: Option<u32>,

        /// Minimum bathroom count
        #[arg(long)]
        bathrooms: Option<u32>,

        /// Required amenity, repeatable (all must be present)
        #[arg(short, long = "amenity")]
        amenities: Vec<String>,
    },

    /// View full details for one or more properties
    #[command(alias = "v")]
    View {
        /// Property ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Toggle properties in the session's favorites set, then list it
    #[command(alias = "f")]
    Fav {
        /// Property ids to toggle (empty just lists the set)
        #[arg(num_args = 0..)]
        ids: Vec<String>,
    },

    /// Manage lease agreements
    #[command(subcommand)]
    Lease(LeaseCommands),

    /// Export all listings and leases as a .tar.gz archive
    Export {
        /// Output path (defaults to renthub-<timestamp>.tar.gz)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Import property or lease JSON files into the store
    Import {
        /// Files to import
        #[arg(required = true, num_args = 1..)]
        paths: Vec<PathBuf>,
    },

    /// Check the store for referential inconsistencies
    Doctor,

    /// Get or set configuration
    Config {
        /// Configuration key (currency, date-format)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the store with sample data
    Init,
}

#[derive(Subcommand, Debug)]
pub enum LeaseCommands {
    /// List lease agreements
    #[command(alias = "ls")]
    List,

    /// Show one lease agreement with its available actions
    Show { id: String },

    /// Create a draft lease against a listing
    New {
        /// Property id to lease
        #[arg(long)]
        property: String,

        /// Tenant id
        #[arg(long)]
        tenant: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: String,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: String,

        /// Monthly rent (defaults to the listing's rent)
        #[arg(long)]
        rent: Option<u32>,

        /// Security deposit (defaults to the listing's deposit)
        #[arg(long)]
        deposit: Option<u32>,

        /// Contract body (opens the editor if omitted)
        #[arg(long)]
        terms: Option<String>,
    },

    /// Edit the contract body of a draft lease
    Edit {
        id: String,

        /// New contract body (opens the editor if omitted)
        #[arg(long)]
        terms: Option<String>,
    },

    /// Submit a draft lease for approval
    Submit { id: String },

    /// Approve a pending lease
    Approve { id: String },

    /// Sign an approved lease as the tenant
    Sign { id: String },

    /// Activate a signed lease
    Activate { id: String },

    /// Terminate a lease
    Terminate { id: String },

    /// Write a lease document to a text file
    Download {
        id: String,

        /// Output path (defaults to lease-<id>.txt)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}
