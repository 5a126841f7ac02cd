//! veg — vegvisir CLI client
//!
//! One subcommand per RPC shape, driven against a running vegd.

use clap::{Parser, Subcommand};
use futures_util::{StreamExt, stream};
use tokio::io::{AsyncBufReadExt, BufReader};

use vegvisir::client::ServiceClient;
use vegvisir::{Point, RecommendationRequest, Rectangle};

/// Vegvisir CLI client
#[derive(Parser)]
#[command(name = "veg")]
#[command(version = vegvisir::PKG_VERSION)]
#[command(about = "Vegvisir location-advisory client")]
struct Args {
    /// Server address
    #[arg(
        short,
        long,
        env = "VEGD_ADDRESS",
        default_value = "http://127.0.0.1:9470"
    )]
    address: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up the feature at an exact coordinate
    Feature {
        /// Coordinate as "lat,lng" in fixed-point degrees (×1e7)
        #[arg(value_parser = parse_point)]
        point: Point,
    },

    /// List features inside a rectangle
    List {
        /// One corner as "lat,lng"
        #[arg(value_parser = parse_point)]
        lo: Point,
        /// The opposite corner as "lat,lng" (either order works)
        #[arg(value_parser = parse_point)]
        hi: Point,
    },

    /// Record a route and print its summary
    Route {
        /// Route points as "lat,lng", in travel order
        #[arg(value_parser = parse_point, required = true)]
        points: Vec<Point>,
    },

    /// Interactive recommendation stream (reads stdin)
    Recommend,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let client = ServiceClient::connect(args.address).await?;

    match args.command {
        Command::Feature { point } => {
            let feature = client.get_feature(point).await?;
            println!("{feature}");
        }

        Command::List { lo, hi } => {
            let mut features = client.list_features(Rectangle::new(lo, hi)).await?;
            while let Some(feature) = features.next().await {
                println!("{}", feature?);
            }
        }

        Command::Route { points } => {
            let summary = client.record_route(stream::iter(points)).await?;
            println!("{summary}");
        }

        Command::Recommend => run_recommend(&client).await?,
    }

    Ok(())
}

/// Drive the bidirectional stream with decoupled send and receive loops:
/// stdin feeds requests while a spawned task drains replies, so neither
/// side ever waits on the other.
async fn run_recommend(client: &ServiceClient) -> Result<(), Box<dyn std::error::Error>> {
    let session = client.recommend().await?;
    let (requests, mut responses) = session.into_parts();

    let printer = tokio::spawn(async move {
        while let Some(item) = responses.next().await {
            match item {
                Ok(feature) => println!("recommended: {feature}"),
                Err(e) => {
                    eprintln!("stream error: {e}");
                    return;
                }
            }
        }
    });

    eprintln!("enter: <nearest|farthest> <lat> <lng>  (EOF finishes the session)");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_request(line) {
            Ok(request) => {
                if requests.send(request).await.is_err() {
                    break; // session ended server-side
                }
            }
            Err(msg) => eprintln!("{msg}"),
        }
    }

    // End-of-input: closing the sender ends the session cleanly; drain
    // whatever replies are still in flight.
    drop(requests);
    printer.await?;
    Ok(())
}

/// Parse "lat,lng" in fixed-point degrees.
fn parse_point(s: &str) -> Result<Point, String> {
    let (lat, lng) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"lat,lng\", got {s:?}"))?;
    let latitude = lat
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad latitude {lat:?}: {e}"))?;
    let longitude = lng
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad longitude {lng:?}: {e}"))?;
    Ok(Point::new(latitude, longitude))
}

/// Parse one interactive line: `<nearest|farthest> <lat> <lng>`.
fn parse_request(line: &str) -> Result<RecommendationRequest, String> {
    let mut parts = line.split_whitespace();
    let mode = parts.next().ok_or("missing mode")?;
    let lat = parts.next().ok_or("missing latitude")?;
    let lng = parts.next().ok_or("missing longitude")?;

    let point = parse_point(&format!("{lat},{lng}"))?;
    match mode {
        "nearest" | "n" => Ok(RecommendationRequest::nearest(point)),
        "farthest" | "f" => Ok(RecommendationRequest::farthest(point)),
        other => Err(format!("unknown mode {other:?} (want nearest|farthest)")),
    }
}
