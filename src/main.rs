//! Gmail Auto-Reply - command line client
//!
//! Sets or shows a Google Workspace user's out-of-office reply using a
//! service account with domain-wide delegation.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use gmail_auto_reply::autoreply::AutoReplyManager;
use gmail_auto_reply::config::Config;
use gmail_auto_reply::error::Result;

/// Reply body used when none is given on the command line
const DEFAULT_MESSAGE_HTML: &str = r#"
    <p><b>Hello,</b></p>
    <p>Thank you for your email. I am currently out of the office and will respond upon my return.</p>
    <p>Should your enquiry be urgent, please call the office or email our support team at
    <a href="mailto:support@example.com">support@example.com</a>.</p>
    "#;

/// Gmail Auto-Reply
#[derive(Parser)]
#[command(name = "gmail-auto-reply")]
#[command(author, version, about = "Set or show a Gmail user's out-of-office reply")]
struct Cli {
    /// Service account key file (overrides GMAIL_SERVICE_ACCOUNT_PATH)
    #[arg(long, global = true)]
    credentials: Option<PathBuf>,

    /// Seconds to wait between disabling and re-enabling the reply
    #[arg(long, global = true)]
    delay_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace the user's out-of-office reply
    Set {
        /// Mailbox to configure
        #[arg(long)]
        user: String,

        /// Reply subject line
        #[arg(long, default_value = "Out of Office")]
        subject: String,

        #[command(flatten)]
        message: MessageArgs,
    },
    /// Show the user's current out-of-office reply
    Status {
        /// Mailbox to inspect
        #[arg(long)]
        user: String,
    },
}

#[derive(Args)]
#[group(multiple = false)]
struct MessageArgs {
    /// Reply body as HTML
    #[arg(long)]
    message_html: Option<String>,

    /// File containing the HTML reply body
    #[arg(long)]
    message_file: Option<PathBuf>,
}

impl MessageArgs {
    fn resolve(self) -> Result<String> {
        match (self.message_html, self.message_file) {
            (Some(html), _) => Ok(html),
            (None, Some(path)) => Ok(std::fs::read_to_string(path)?),
            (None, None) => Ok(DEFAULT_MESSAGE_HTML.to_string()),
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::debug!("Exiting after failure: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.credentials, cli.delay_secs).inspect_err(|e| {
        tracing::error!("{}", e.log_message());
    })?;

    let manager = AutoReplyManager::from_config(config);

    match cli.command {
        Commands::Set {
            user,
            subject,
            message,
        } => {
            let message_html = message.resolve().inspect_err(|e| {
                tracing::error!("{}", e.log_message());
            })?;
            manager
                .set_out_of_office(&user, &subject, &message_html)
                .await?;
        }
        Commands::Status { user } => {
            manager.get_out_of_office_status(&user).await?;
        }
    }

    Ok(())
}

fn load_config(credentials: Option<PathBuf>, delay_secs: Option<u64>) -> Result<Config> {
    Config::with_overrides(credentials, delay_secs.map(Duration::from_secs))
}
