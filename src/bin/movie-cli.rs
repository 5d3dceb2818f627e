use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "movie-cli")]
#[command(about = "Command-line client for the movie proxy", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5000")]
    url: String,

    #[arg(short, long, env = "MOVIE_PROXY_API_KEY")]
    key: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a single movie by title
    Get {
        /// Movie title
        name: String,
    },
    /// List movies matching optional filters
    List {
        #[arg(long)]
        year: Option<String>,
        /// TMDb genre id(s), comma separated
        #[arg(long)]
        genre: Option<String>,
        /// Minimum average rating
        #[arg(long)]
        rating: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let mut headers = HeaderMap::new();
    headers.insert("X-API-Key", HeaderValue::from_str(&cli.key)?);

    let base = cli.url.trim_end_matches('/');

    let request = match cli.command {
        Commands::Get { name } => {
            let mut url = reqwest::Url::parse(&format!("{}/movies/", base))?;
            url.path_segments_mut()
                .map_err(|_| "URL cannot be a base")?
                .pop_if_empty()
                .push(&name);
            client.get(url)
        }
        Commands::List { year, genre, rating } => {
            let params: Vec<(&str, String)> = [("year", year), ("genre", genre), ("rating", rating)]
                .into_iter()
                .filter_map(|(k, v)| v.map(|v| (k, v)))
                .collect();
            client.get(format!("{}/movies", base)).query(&params)
        }
    };

    let res = request.headers(headers).send().await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    // Error bodies are JSON too, so pretty-print either way
    let rendered = match serde_json::from_str::<Value>(&text) {
        Ok(json) => serde_json::to_string_pretty(&json)?,
        Err(_) => text,
    };

    if status.is_success() {
        println!("{}", rendered);
    } else {
        eprintln!("Error: proxy returned status {}", status);
        eprintln!("{}", rendered);
    }
    Ok(())
}
