use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use applicant_ranker::analysis::insights::{preview, DEFAULT_PREVIEW_ROWS};
use applicant_ranker::report::format_preview;
use applicant_ranker::{
    Config, OutputFormat, RankingConfig, RankingReport, RankingSession, RawWeights,
};

#[derive(Parser, Debug)]
#[command(name = "applicant-ranker")]
#[command(version = "0.1.0")]
#[command(about = "Rank job applicants from CSV data with a weighted scoring formula")]
struct Args {
    /// Applicant CSV file, or "-" to read from stdin
    #[arg(short, long)]
    data: Option<String>,

    /// Test score weight
    #[arg(long)]
    w_test: Option<f64>,

    /// Interview score weight
    #[arg(long)]
    w_interview: Option<f64>,

    /// Experience weight
    #[arg(long)]
    w_experience: Option<f64>,

    /// Company tier weight
    #[arg(long)]
    w_tier: Option<f64>,

    /// Number of candidates to display
    #[arg(short = 'n', long)]
    top: Option<usize>,

    /// Output format (text, markdown, json, csv)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Also print the first scored rows with their sub-scores
    #[arg(long)]
    preview: bool,
}

const DEFAULT_LOG_DIRECTIVE: &str = "applicant_ranker=info";

/// `RUST_LOG` wins when set; otherwise the crate logs at info.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    match rust_log.map(str::trim) {
        Some(directives) if !directives.is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new(DEFAULT_LOG_DIRECTIVE),
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so reports can be piped
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env()?;
    let format: OutputFormat = args.format.parse()?;

    let ranking = apply_overrides(RankingConfig::from(&config), &args);
    let data_path = args.data.clone().unwrap_or(config.data_path);

    let session = if data_path == "-" {
        RankingSession::from_reader(io::stdin().lock())
    } else {
        RankingSession::from_path(&data_path)
    };

    let mut session = match session {
        Ok(session) => session,
        Err(e) if e.is_missing_source() => {
            anyhow::bail!(
                "{}. Pass another CSV with --data <PATH>, or --data - to read from stdin.",
                e
            );
        }
        Err(e) => return Err(e.into()),
    };

    session.apply_weights(&ranking.weights)?;

    if args.preview {
        let columns = session.table().columns.display_columns();
        eprintln!("Data Preview (with scores):");
        eprintln!(
            "{}",
            format_preview(preview(session.table(), DEFAULT_PREVIEW_ROWS), &columns)
        );
    }

    let top = session.top(ranking.top_n)?;
    let output = RankingReport::new(&session, &top).render(format)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn apply_overrides(mut ranking: RankingConfig, args: &Args) -> RankingConfig {
    let RawWeights {
        test,
        interview,
        experience,
        tier,
    } = ranking.weights;

    ranking.weights = RawWeights {
        test: args.w_test.unwrap_or(test),
        interview: args.w_interview.unwrap_or(interview),
        experience: args.w_experience.unwrap_or(experience),
        tier: args.w_tier.unwrap_or(tier),
    };

    if let Some(top) = args.top {
        ranking.top_n = top;
    }

    ranking
}
