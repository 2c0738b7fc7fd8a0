use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "stratus")]
#[command(version)]
#[command(about = "Command-line client for the Stratus deployment platform", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Never prompt; fail instead when input would be required
    #[arg(long, global = true)]
    pub no_input: bool,

    /// Team to work in (id or name)
    #[arg(long, global = true, env = "STRATUS_TEAM")]
    pub team: Option<String>,

    /// Project to work in (id or name)
    #[arg(long, global = true, env = "STRATUS_PROJECT")]
    pub project: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Manage linked cloud providers
    #[command(subcommand)]
    Providers(ProvidersCommand),

    /// Manage teams
    #[command(subcommand)]
    Teams(TeamsCommand),

    /// Manage deployment environments
    #[command(subcommand)]
    Environments(EnvironmentsCommand),

    /// Manage cache clusters
    #[command(subcommand)]
    Caches(CachesCommand),

    /// Manage TLS certificates
    #[command(subcommand)]
    Certs(CertsCommand),

    /// Manage databases
    #[command(subcommand)]
    Databases(DatabasesCommand),

    /// Manage project secrets
    #[command(subcommand)]
    Secrets(SecretsCommand),

    /// Manage the CLI configuration file
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

// ============================================================================
// Providers
// ============================================================================

#[derive(Subcommand)]
pub enum ProvidersCommand {
    /// List linked providers
    List,

    /// Show one provider
    Show {
        /// Provider id or name
        provider: Option<String>,
    },

    /// Link a new provider
    Add(ProviderAddArgs),

    /// Unlink a provider
    Rm {
        /// Provider id or name
        provider: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Parser)]
pub struct ProviderAddArgs {
    /// Name for the new provider
    #[arg(long)]
    pub name: Option<String>,

    /// Cloud the provider runs on (aws, gcp, azure, hetzner)
    #[arg(long)]
    pub driver: Option<String>,
}

// ============================================================================
// Teams
// ============================================================================

#[derive(Subcommand)]
pub enum TeamsCommand {
    /// List teams
    List,

    /// Show one team
    Show {
        /// Team id or name
        team: Option<String>,
    },

    /// Create a team
    Add {
        /// Name for the new team
        #[arg(long)]
        name: Option<String>,
    },
}

// ============================================================================
// Environments
// ============================================================================

#[derive(Subcommand)]
pub enum EnvironmentsCommand {
    /// List environments
    List,

    /// Show one environment
    Show {
        /// Environment id or name
        environment: Option<String>,
    },

    /// Create an environment
    Add(EnvironmentAddArgs),

    /// Delete an environment
    Rm {
        /// Environment id or name
        environment: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Parser)]
pub struct EnvironmentAddArgs {
    /// Name for the new environment
    #[arg(long)]
    pub name: Option<String>,

    /// Environment tier (development, staging, production)
    #[arg(long)]
    pub tier: Option<String>,
}

// ============================================================================
// Caches
// ============================================================================

#[derive(Subcommand)]
pub enum CachesCommand {
    /// List cache clusters
    List,

    /// Show one cache cluster
    Show {
        /// Cache cluster id or name
        cache: Option<String>,
    },

    /// Create a cache cluster
    Add(CacheAddArgs),

    /// Delete a cache cluster
    Rm {
        /// Cache cluster id or name
        cache: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Parser)]
pub struct CacheAddArgs {
    /// Name for the new cluster
    #[arg(long)]
    pub name: Option<String>,

    /// Provider to host the cluster (id or name)
    #[arg(long)]
    pub provider: Option<String>,

    /// Provider region
    #[arg(long)]
    pub region: Option<String>,

    /// Cache engine (redis, valkey, memcached)
    #[arg(long)]
    pub engine: Option<String>,

    /// Plan (dev, standard, performance)
    #[arg(long)]
    pub plan: Option<String>,
}

// ============================================================================
// Certificates
// ============================================================================

#[derive(Subcommand)]
pub enum CertsCommand {
    /// List certificates
    List,

    /// Show one certificate
    Show {
        /// Certificate id or name
        certificate: Option<String>,
    },

    /// Issue a certificate
    Add(CertAddArgs),

    /// Revoke a certificate
    Rm {
        /// Certificate id or name
        certificate: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Parser)]
pub struct CertAddArgs {
    /// Domain the certificate covers
    #[arg(long)]
    pub domain: Option<String>,

    /// Provider to issue through (id or name)
    #[arg(long)]
    pub provider: Option<String>,
}

// ============================================================================
// Databases
// ============================================================================

#[derive(Subcommand)]
pub enum DatabasesCommand {
    /// List databases
    List,

    /// Show one database
    Show {
        /// Database id or name
        database: Option<String>,
    },

    /// Create a database
    Add(DatabaseAddArgs),

    /// Delete a database
    Rm {
        /// Database id or name
        database: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Parser)]
pub struct DatabaseAddArgs {
    /// Name for the new database
    #[arg(long)]
    pub name: Option<String>,

    /// Provider to host the database (id or name)
    #[arg(long)]
    pub provider: Option<String>,

    /// Provider region
    #[arg(long)]
    pub region: Option<String>,

    /// Database engine (postgres, mysql)
    #[arg(long)]
    pub engine: Option<String>,

    /// Plan (dev, standard, performance)
    #[arg(long)]
    pub plan: Option<String>,
}

// ============================================================================
// Secrets
// ============================================================================

#[derive(Subcommand)]
pub enum SecretsCommand {
    /// List secret names
    List,

    /// Store a secret
    Add {
        /// Name for the new secret
        #[arg(long)]
        name: Option<String>,

        /// Secret value (prompted for when omitted)
        #[arg(long)]
        value: Option<String>,
    },

    /// Delete a secret
    Rm {
        /// Secret id or name
        secret: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

// ============================================================================
// Config
// ============================================================================

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the active configuration
    Show,

    /// Write a default config file if none exists
    Init,

    /// Print the config file path
    Path,
}
