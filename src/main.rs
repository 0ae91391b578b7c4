use anyhow::Result;
use escrutini::config::Config;
use escrutini::constants::{ERROR_DB_UNREACHABLE, ERROR_MISSING_DEMARCACIO, ERROR_UNKNOWN_DEMARCACIO};
use escrutini::results::ResultsService;
use escrutini::{logger, ElectionStore, StoreError};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    logger::init(&config.logging)?;

    // First argument selects the demarcació; `--general` asks for the
    // aggregate over all of them.
    let arg = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            eprintln!("{ERROR_MISSING_DEMARCACIO}");
            eprintln!("\n💡 Usage:");
            eprintln!("  escrutini <demarcació>   seats per party in one demarcació");
            eprintln!("  escrutini --general      seats per party over all demarcacions");
            std::process::exit(1);
        }
    };

    let store = match ElectionStore::connect(&config.database.url, config.database.max_connections).await {
        Ok(store) => store,
        Err(StoreError::Unavailable(e)) => {
            eprintln!("{ERROR_DB_UNREACHABLE}: {e}");
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    let results = ResultsService::new(store);

    let series = if arg == "--general" {
        let progress = results.progress().await?;
        println!(
            "Seats assigned in {} of {} demarcacions",
            progress.assignades, progress.total
        );
        results.chart_series_total().await?
    } else {
        match results.chart_series(&arg).await {
            Ok(series) => series,
            Err(StoreError::DemarcacioNotFound(_)) => {
                eprintln!("{ERROR_UNKNOWN_DEMARCACIO}");
                std::process::exit(1);
            }
            Err(e) => return Err(e.into()),
        }
    };

    for point in &series {
        println!("{:<10} {:>3}", point.name, point.y);
    }

    // Series payload in the shape the chart embeds
    println!("{}", serde_json::to_string_pretty(&series)?);

    Ok(())
}
