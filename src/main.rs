use anyhow::Result;
use clap::Parser;
use xbesh::commands::{self, Config, ConfigOverrides};

/// xbesh - launch toolkit for the xbe.sh desktop app
///
/// Detects the visitor's platform, shows the downloads catalog, runs the
/// launch countdown and submits the launch signup form.
///
/// Environment:
///   XBESH_FORM_ENDPOINT   form collection endpoint for `subscribe`
///   XBESH_LAUNCH_AT       RFC 3339 launch instant for `countdown`
///   XBESH_USER_AGENT      user agent to classify instead of the host OS
#[derive(Parser, Debug)]
#[command(author, version = env!("XBESH_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// User agent string to classify (defaults to the host OS)
    #[arg(long = "user-agent", short = 'u', value_name = "UA", global = true)]
    pub user_agent: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print the platform detected from the user agent
    Detect,

    /// Show downloads for every platform, marking the recommended one
    Downloads(DownloadsArgs),

    /// Count down to the launch
    Countdown(CountdownArgs),

    /// Sign up for launch news
    Subscribe(SubscribeArgs),

    /// List the site routes, or resolve one path
    Routes(RoutesArgs),
}

#[derive(clap::Args, Debug)]
pub struct DownloadsArgs {
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct CountdownArgs {
    /// Launch instant (RFC 3339), overrides XBESH_LAUNCH_AT
    #[arg(long, value_name = "TIMESTAMP")]
    pub target: Option<String>,

    /// Print the remaining time once and exit
    #[arg(long)]
    pub once: bool,
}

#[derive(clap::Args, Debug)]
pub struct SubscribeArgs {
    /// Email address to sign up
    #[arg(long, short = 'e')]
    pub email: String,

    /// Optional message sent along with the email
    #[arg(long, short = 'm', default_value = "")]
    pub message: String,

    /// Form endpoint URL, overrides XBESH_FORM_ENDPOINT
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct RoutesArgs {
    /// Path to resolve, e.g. /downloads
    #[arg(value_name = "PATH")]
    pub path: Option<String>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        let mut overrides = ConfigOverrides {
            user_agent: self.user_agent.clone(),
            ..Default::default()
        };
        match &self.command {
            Commands::Countdown(args) => overrides.launch_at = args.target.clone(),
            Commands::Subscribe(args) => overrides.form_endpoint = args.endpoint.clone(),
            _ => {}
        }
        overrides
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = xbesh::runtime::RealRuntime;
    let config = Config::load(&runtime, cli.overrides());

    match cli.command {
        Commands::Detect => commands::detect(&config)?,
        Commands::Downloads(args) => commands::downloads(&config, args.json)?,
        Commands::Countdown(args) => commands::countdown(&config, args.once).await?,
        Commands::Subscribe(args) => {
            commands::subscribe(&config, &args.email, &args.message).await?
        }
        Commands::Routes(args) => commands::routes(args.path.as_deref())?,
    }
    Ok(())
}
