//! roster CLI binary.
//!
//! A command-line host for the profile view: resolves a path through the
//! route table, loads the view's data and prints it.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use roster::cli::{Cli, Command};
use roster::output::PrettyPrint;
use roster::{routes, FetchClient, HomePage, HomeView, ResponseEnvelope, RosterError, View};
use serde::Serialize;
use tabled::{Table, Tabled};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let client = match FetchClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: ROSTER_HTTP_TIMEOUT_SECS must be a number of seconds");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &FetchClient, cli: Cli) -> roster::Result<()> {
    match cli.command {
        Command::Open { path } => handle_open(client, &path, &cli.url, cli.json).await,
        Command::Record { index } => handle_record(client, index, &cli.url, cli.json).await,
        Command::Routes => handle_routes(cli.json),
    }
}

async fn handle_open(
    client: &FetchClient,
    path: &str,
    url: &str,
    json: bool,
) -> roster::Result<()> {
    let route = routes()
        .resolve(path)
        .ok_or_else(|| RosterError::UnknownRoute(path.to_string()))?;

    match route.view {
        View::Home => {
            let HomePage { data, payload } = HomeView::new(url).load(client).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(payload.as_value())?);
            } else {
                println!("{}", Table::new(data.rows));
                println!("\n{}", data.info.pretty_print());
            }
        }
    }
    Ok(())
}

async fn handle_record(
    client: &FetchClient,
    index: usize,
    url: &str,
    json: bool,
) -> roster::Result<()> {
    let payload = client.get_data::<ResponseEnvelope>(url).await?;
    let record = payload.record(index)?;

    output_single(&record, json)
}

fn handle_routes(json: bool) -> roster::Result<()> {
    let table = routes();
    if json {
        println!("{}", serde_json::to_string_pretty(table)?);
    } else {
        let rows: Vec<RouteRow> = table.routes().iter().map(RouteRow::from).collect();
        println!("{}", Table::new(rows));
        println!("\nHistory: path (base {})", table.history().base());
    }
    Ok(())
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> roster::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}

// Table row types for non-JSON output

#[derive(Tabled)]
struct RouteRow {
    path: String,
    name: String,
    view: String,
}

impl From<&roster::Route> for RouteRow {
    fn from(r: &roster::Route) -> Self {
        Self {
            path: r.path.to_string(),
            name: r.name.to_string(),
            view: r.view.to_string(),
        }
    }
}
