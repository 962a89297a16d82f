//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use super::commands;
use crate::client::ZmfClient;

/// zmfc - command-line client for the ChangeMan ZMF REST API
#[derive(Parser, Debug)]
#[command(
    name = "zmfc",
    version,
    about = "Command-line client for the ChangeMan ZMF REST API",
    long_about = "Drive ChangeMan ZMF change-management operations from the shell.\n\n\
                  Components are checked in and built per derived type; packages are\n\
                  audited, promoted, frozen and reverted through the REST endpoints."
)]
pub struct Cli {
    /// Base URL of the ZMF REST API
    #[arg(long, env = "ZMF_REST_URL")]
    pub url: String,

    /// User id for basic authentication
    #[arg(long, env = "ZMF_REST_USER")]
    pub user: String,

    /// Password for basic authentication
    #[arg(long, env = "ZMF_REST_PWD", hide_env_values = true)]
    pub password: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Supported operations, one subcommand per REST endpoint
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Checkin components from a partitioned dataset (PDS)
    Checkin {
        /// Package id, e.g. "APP 000001"
        package: String,

        /// Source PDS; the upper-cased component type is appended per group
        pds: String,

        /// Component paths; type derives from the extension
        #[arg(required = true)]
        components: Vec<String>,
    },

    /// Build source-like components
    Build {
        /// Package id
        package: String,

        /// Component paths; type derives from the extension
        #[arg(required = true)]
        components: Vec<String>,

        /// Build procedure
        #[arg(long, default_value = "CMNCOB2")]
        build_proc: String,

        /// Build language
        #[arg(long, default_value = "DELTACOB")]
        language: String,
    },

    /// Scratch components from a package, one request per component
    Scratch {
        /// Package id
        package: String,

        /// Component paths
        #[arg(required = true)]
        components: Vec<String>,
    },

    /// Audit a package
    Audit {
        /// Package id
        package: String,
    },

    /// Promote a package to a site and level
    Promote {
        /// Package id
        package: String,

        /// Promotion site name
        site: String,

        /// Promotion level
        level: String,

        /// Promotion name
        #[arg(long)]
        name: Option<String>,
    },

    /// Demote a package from a site and level
    Demote {
        /// Package id
        package: String,

        /// Promotion site name
        site: String,

        /// Promotion level
        level: String,

        /// Promotion name
        #[arg(long)]
        name: Option<String>,
    },

    /// Freeze a package
    Freeze {
        /// Package id
        package: String,
    },

    /// Revert a package to development status
    Revert {
        /// Package id
        package: String,
    },

    /// Search for a package by application name and exact title
    Search {
        /// Application name; searched as a prefix
        app: String,

        /// Package title, matched exactly
        title: String,
    },

    /// Create a package from a YAML/TOML config document
    Create {
        /// Config file path, or '-' for stdin
        #[arg(default_value = "-")]
        file: String,
    },

    /// Resolve a package id: literal id from the config, else search, else
    /// create
    GetPackage {
        /// Config file path, or '-' for stdin
        #[arg(default_value = "-")]
        file: String,
    },

    /// Delete a package, or a single component of it
    Delete {
        /// Package id
        package: String,

        /// Delete this component instead of the package
        #[arg(long)]
        component: Option<String>,
    },

    /// List the components of a package
    Components {
        /// Package id
        package: String,
    },

    /// Load detail records for one component of a package
    Load {
        /// Package id
        package: String,

        /// Component path
        component: String,
    },

    /// List the packages a component appears in
    Packagelist {
        /// Component path
        component: String,
    },

    /// Browse a component's source
    Browse {
        /// Package id
        package: String,

        /// Component path
        component: String,
    },
}

/// Parse arguments, set up logging, and dispatch to the command handlers
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let client = ZmfClient::new(&cli.url, &cli.user, &cli.password)?;

    match cli.command {
        Command::Checkin {
            package,
            pds,
            components,
        } => commands::component::checkin(&client, &package, &pds, &components),
        Command::Build {
            package,
            components,
            build_proc,
            language,
        } => commands::component::build(&client, &package, &components, &build_proc, &language),
        Command::Scratch {
            package,
            components,
        } => commands::component::scratch(&client, &package, &components),
        Command::Audit { package } => commands::package::audit(&client, &package),
        Command::Promote {
            package,
            site,
            level,
            name,
        } => commands::package::promote(&client, &package, &site, &level, name.as_deref()),
        Command::Demote {
            package,
            site,
            level,
            name,
        } => commands::package::demote(&client, &package, &site, &level, name.as_deref()),
        Command::Freeze { package } => commands::package::freeze(&client, &package),
        Command::Revert { package } => commands::package::revert(&client, &package),
        Command::Search { app, title } => commands::package::search(&client, &app, &title),
        Command::Create { file } => commands::package::create(&client, &file),
        Command::GetPackage { file } => commands::package::get_package(&client, &file),
        Command::Delete { package, component } => {
            commands::package::delete(&client, &package, component.as_deref())
        }
        Command::Components { package } => commands::component::list(&client, &package),
        Command::Load { package, component } => {
            commands::component::load(&client, &package, &component)
        }
        Command::Packagelist { component } => {
            commands::component::packagelist(&client, &component)
        }
        Command::Browse { package, component } => {
            commands::component::browse(&client, &package, &component)
        }
    }
}
