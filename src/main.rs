use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use ledgerlink_tools::client::Client;
use ledgerlink_tools::config::{ClientConfig, PageSize, SANDBOX_ENDPOINT};
use ledgerlink_tools::model::{Customer, Report, ReportKind};
use ledgerlink_tools::{Result, ToolError};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logging().and_then(|()| run(cli)) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Render(args) => execute_render(args),
        Command::Report(args) => execute_report(args),
        Command::Customers(args) => execute_customers(args),
    }
}

fn execute_render(args: RenderArgs) -> Result<()> {
    if !args.input.exists() {
        return Err(ToolError::MissingInput(args.input));
    }
    let data = std::fs::read_to_string(&args.input)?;
    let report: Report = serde_json::from_str(&data)?;
    print!("{}", report.formatted_report().render());
    Ok(())
}

fn execute_report(args: ReportArgs) -> Result<()> {
    let client = Client::connect(args.connection.resolve()?)?;
    let report = client.report(args.kind.into(), &args.customer)?;
    if args.raw {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.formatted_report().render());
    }
    Ok(())
}

fn execute_customers(args: CustomersArgs) -> Result<()> {
    let client = Client::connect(args.connection.resolve()?)?;
    let customers = match (&args.id, &args.name) {
        (Some(id), _) => vec![client.fetch_by_id::<Customer>(id)?],
        (None, Some(name)) => vec![client.query_customer_by_name(name)?],
        (None, None) => client.fetch_customers()?,
    };
    for customer in &customers {
        println!(
            "{}\t{}\t{}",
            customer.id,
            customer.display_name,
            customer.primary_email()
        );
    }
    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Query records and financial reports from a hosted accounting service."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Flatten and print a report saved as JSON.
    Render(RenderArgs),
    /// Fetch a report for one customer and print it.
    Report(ReportArgs),
    /// List customers, or look one up by identifier or display name.
    Customers(CustomersArgs),
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Report JSON file as returned by the service.
    #[arg(long)]
    input: PathBuf,
}

#[derive(clap::Args)]
struct ReportArgs {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Report to run.
    #[arg(long, value_enum)]
    kind: ReportKindArg,

    /// Customer identifier the report is filtered to.
    #[arg(long)]
    customer: String,

    /// Print the raw report JSON instead of the flattened view.
    #[arg(long)]
    raw: bool,
}

#[derive(clap::Args)]
struct CustomersArgs {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Fetch a single customer by identifier.
    #[arg(long, conflicts_with = "name")]
    id: Option<String>,

    /// Fetch a single customer by display name.
    #[arg(long)]
    name: Option<String>,
}

#[derive(clap::Args)]
struct ConnectionArgs {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// API base URL.
    #[arg(long)]
    endpoint: Option<String>,

    /// Use the sandbox API.
    #[arg(long, conflicts_with = "endpoint")]
    sandbox: bool,

    /// Company identifier.
    #[arg(long)]
    realm: Option<String>,

    /// Records requested per page when listing.
    #[arg(long)]
    page_size: Option<usize>,

    /// OAuth bearer token.
    #[arg(long, env = "LEDGERLINK_ACCESS_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

impl ConnectionArgs {
    fn resolve(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };
        if self.sandbox {
            config.endpoint = SANDBOX_ENDPOINT.to_string();
        }
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(realm) = &self.realm {
            config.realm_id = realm.clone();
        }
        if let Some(size) = self.page_size {
            config.page_size = PageSize::new(size)?;
        }
        if let Some(token) = &self.token {
            config.access_token = Some(token.clone());
        }
        Ok(config)
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ReportKindArg {
    CustomerSales,
    CashFlow,
    ProfitAndLoss,
    ProfitAndLossDetail,
    TransactionList,
    CustomerIncome,
    AccountList,
}

impl From<ReportKindArg> for ReportKind {
    fn from(kind: ReportKindArg) -> Self {
        match kind {
            ReportKindArg::CustomerSales => ReportKind::CustomerSales,
            ReportKindArg::CashFlow => ReportKind::CashFlow,
            ReportKindArg::ProfitAndLoss => ReportKind::ProfitAndLoss,
            ReportKindArg::ProfitAndLossDetail => ReportKind::ProfitAndLossDetail,
            ReportKindArg::TransactionList => ReportKind::TransactionList,
            ReportKindArg::CustomerIncome => ReportKind::CustomerIncome,
            ReportKindArg::AccountList => ReportKind::AccountList,
        }
    }
}
