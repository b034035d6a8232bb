//! Gitee CLI - command-line access to the Gitee v5 API.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// Gitee - repositories, webhooks and git data from the command line
#[derive(Parser, Debug)]
#[command(name = "gitee")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a configuration file (TOML, YAML or JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Access token
    #[arg(long, env = "GITEE_ACCESS_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List repositories owned by the authenticated user
    Repos {
        /// Search keyword
        #[arg(short, long, default_value = "")]
        keyword: String,
        #[command(flatten)]
        page: PageArgs,
    },

    /// List repositories of an organization
    OrgRepos {
        /// Organization path
        org: String,
        #[command(flatten)]
        page: PageArgs,
    },

    /// Manage webhooks
    Hooks {
        #[command(subcommand)]
        command: HookCommands,
    },

    /// Show a blob
    Blob {
        owner: String,
        repo: String,
        sha: String,
    },

    /// Show a tree
    Tree {
        owner: String,
        repo: String,
        /// Tree SHA, branch name or commit
        sha: String,
        /// 1 to list recursively
        #[arg(short, long, default_value_t = 0)]
        level: i32,
    },

    /// Show a single commit
    Commit {
        owner: String,
        repo: String,
        sha: String,
    },

    /// Compare two refs
    Compare {
        owner: String,
        repo: String,
        base: String,
        head: String,
    },

    /// Exchange a refresh token for a new access token
    RefreshToken {
        /// Refresh token
        refresh_token: String,
    },
}

#[derive(Subcommand, Debug)]
enum HookCommands {
    /// List webhooks of a repository
    List {
        owner: String,
        repo: String,
        #[command(flatten)]
        page: PageArgs,
    },

    /// Create a webhook
    Create {
        owner: String,
        repo: String,
        #[command(flatten)]
        target: HookArgs,
    },

    /// Update a webhook
    Update {
        owner: String,
        repo: String,
        id: i64,
        #[command(flatten)]
        target: HookArgs,
    },

    /// Delete a webhook
    Delete {
        owner: String,
        repo: String,
        id: i64,
    },
}

#[derive(clap::Args, Debug, Clone, Copy)]
struct PageArgs {
    /// Page number
    #[arg(long, default_value_t = 1)]
    page: u32,
    /// Results per page
    #[arg(long, default_value_t = 20)]
    per_page: u32,
}

#[derive(clap::Args, Debug, Clone)]
struct HookArgs {
    /// Callback URL
    #[arg(long)]
    url: String,
    /// Shared secret
    #[arg(long, default_value = "")]
    secret: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("gitee_client={log_level},gitee={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = commands::Context::new(cli.config.as_deref(), cli.token)?;

    match cli.command {
        Commands::Repos { keyword, page } => {
            commands::repos(&ctx, &keyword, page.page, page.per_page).await
        }
        Commands::OrgRepos { org, page } => {
            commands::org_repos(&ctx, &org, page.page, page.per_page).await
        }
        Commands::Hooks { command } => match command {
            HookCommands::List { owner, repo, page } => {
                commands::hooks_list(&ctx, &owner, &repo, page.page, page.per_page).await
            }
            HookCommands::Create {
                owner,
                repo,
                target,
            } => commands::hooks_create(&ctx, &owner, &repo, target.url, target.secret).await,
            HookCommands::Update {
                owner,
                repo,
                id,
                target,
            } => commands::hooks_update(&ctx, &owner, &repo, id, target.url, target.secret).await,
            HookCommands::Delete { owner, repo, id } => {
                commands::hooks_delete(&ctx, &owner, &repo, id).await
            }
        },
        Commands::Blob { owner, repo, sha } => commands::blob(&ctx, &owner, &repo, &sha).await,
        Commands::Tree {
            owner,
            repo,
            sha,
            level,
        } => commands::tree(&ctx, &owner, &repo, &sha, level).await,
        Commands::Commit { owner, repo, sha } => {
            commands::commit(&ctx, &owner, &repo, &sha).await
        }
        Commands::Compare {
            owner,
            repo,
            base,
            head,
        } => commands::compare(&ctx, &owner, &repo, &base, &head).await,
        Commands::RefreshToken { refresh_token } => {
            commands::refresh_token(&ctx, &refresh_token).await
        }
    }
}
