use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "livematch-cli")]
#[command(about = "Query a running IPL match-data API", long_about = None)]
struct Cli {
    #[arg(short, long, env = "LIVEMATCH_URL", default_value = "http://localhost:5000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full season schedule
    Schedule,
    /// The match in progress, if any
    Live,
    /// Upcoming fixtures, optionally filtered
    Upcoming {
        /// Team code (MI, CSK, ...)
        #[arg(long)]
        team: Option<String>,
        /// Stadium or city substring
        #[arg(long)]
        venue: Option<String>,
        /// Calendar date, YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
    },
    /// The next N upcoming fixtures
    Next { count: u32 },
    /// Points table of a season
    Points {
        #[arg(long)]
        season: Option<String>,
    },
    /// Seasons with a points table
    Seasons,
    /// Simulated live score update
    Simulate,
    /// Server health
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let request = match cli.command {
        Commands::Schedule => client.get(format!("{}/api/match-schedule", base)),
        Commands::Live => client.get(format!("{}/api/live-match", base)),
        Commands::Upcoming { team, venue, date } => {
            if team.is_none() && venue.is_none() && date.is_none() {
                client.get(format!("{}/api/upcoming-matches", base))
            } else {
                let filters: Vec<(&str, String)> = [("team", team), ("venue", venue), ("date", date)]
                    .into_iter()
                    .filter_map(|(key, value)| value.map(|v| (key, v)))
                    .collect();
                client
                    .get(format!("{}/api/upcoming-matches/search", base))
                    .query(&filters)
            }
        }
        Commands::Next { count } => {
            client.get(format!("{}/api/upcoming-matches/next/{}", base, count))
        }
        Commands::Points { season } => {
            let request = client.get(format!("{}/api/points-table", base));
            match season {
                Some(season) => request.query(&[("season", season)]),
                None => request,
            }
        }
        Commands::Seasons => client.get(format!("{}/api/points-table/seasons", base)),
        Commands::Simulate => client.get(format!("{}/api/live-match/simulate", base)),
        Commands::Health => client.get(format!("{}/api/health", base)),
    };

    let res = request.send().await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
