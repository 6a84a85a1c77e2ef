use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use cabletv::dashboard::{ActiveView, ApiClient, Dashboard};

#[derive(Parser, Debug)]
#[command(author, version, about = "Terminal frontend for the CableTV gateway", long_about = None)]
struct Args {
    /// Gateway base URL
    #[arg(long, default_value = "http://localhost:3001")]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load every collection and print row counts
    Overview,
    /// Print one collection as returned by the gateway
    List { view: String },
    /// Print the PackageSummary view
    Summary,
    /// Run the demo function polls for the first few rows
    Poll,
}

fn print_rows<T: serde::Serialize>(rows: &[T]) {
    for row in rows {
        match serde_json::to_string(row) {
            Ok(line) => println!("{line}"),
            Err(e) => error!(error = %e, "Failed to render row"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();
    let client = ApiClient::new(&args.base_url, Duration::from_secs(args.timeout))?;
    let mut dashboard = Dashboard::new(client);

    // Everything starts from a bulk load; a single failed fetch fails the
    // whole command, same as the UI treats its initial load.
    dashboard.load_all().await?;

    match args.command {
        Command::Overview => {
            let c = &dashboard.collections;
            println!("customers:      {}", c.customers.len());
            println!("employees:      {}", c.employees.len());
            println!("installations:  {}", c.installations.len());
            println!("shows:          {}", c.shows.len());
            println!("episodes:       {}", c.episodes.len());
            println!("packages:       {}", c.packages.len());
            println!("channels:       {}", c.channels.len());
            println!("subscriptions:  {}", c.subscriptions.len());
            println!("billing:        {}", c.billings.len());
        }
        Command::List { view } => {
            let c = &dashboard.collections;
            match view.as_str() {
                "customers" => print_rows(&c.customers),
                "employees" => print_rows(&c.employees),
                "installations" => print_rows(&c.installations),
                "shows" => print_rows(&c.shows),
                "episodes" => print_rows(&c.episodes),
                "packages" => print_rows(&c.packages),
                "channels" => print_rows(&c.channels),
                "subscriptions" => print_rows(&c.subscriptions),
                "billing" => print_rows(&c.billings),
                other => {
                    error!("Unknown view: {other}");
                    std::process::exit(2);
                }
            }
        }
        Command::Summary => print_rows(&dashboard.collections.package_summary),
        Command::Poll => {
            dashboard.set_active_view(ActiveView::Procedures);
            dashboard.poll_demo_statuses().await;
            for (customer_id, status) in &dashboard.install_statuses {
                println!("installation {customer_id}: {status}");
            }
            for (subscription_id, status) in &dashboard.subscription_statuses {
                println!("subscription {subscription_id}: {status}");
            }
        }
    }

    Ok(())
}
