use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use life_quiz::client::{DEFAULT_SERVER_URL, HttpSubmitter};
use life_quiz::{
    Category, Mood, QuizSession, Rating, RatingError, SubmissionRecord, SubmitError,
    SubmitOutcome, format_score,
};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid rating '{0}': expected <category>=<1-10>")]
    InvalidRateArg(String),

    #[error(transparent)]
    Rating(#[from] RatingError),

    #[error(transparent)]
    Submit(#[from] SubmitError),
}

#[derive(Parser)]
#[command(name = "life-quiz")]
#[command(about = "Rate eight areas of life from 1 to 10 and submit them to a life-quiz server")]
struct Cli {
    /// Base URL of the submission server.
    #[arg(short, long, global = true, env = "LIFE_QUIZ_SERVER", default_value = DEFAULT_SERVER_URL)]
    server: String,

    /// Log request details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the categories that can be rated.
    Categories,

    /// Rate categories and submit the result.
    Submit {
        /// Rating for one category, e.g. `health=8`. Repeatable; unrated categories stay at 5.
        #[arg(short, long = "rate", value_name = "CATEGORY=VALUE", value_parser = parse_rate)]
        rates: Vec<(Category, Rating)>,
    },

    /// List every submission stored on the server.
    List,
}

/// Parse `category=value`.
fn parse_rate(arg: &str) -> Result<(Category, Rating), AppError> {
    let (id, value) = arg
        .split_once('=')
        .ok_or_else(|| AppError::InvalidRateArg(arg.to_string()))?;
    let category: Category = id.trim().parse()?;
    let value: i64 = value
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidRateArg(arg.to_string()))?;
    Ok((category, Rating::new(value)?))
}

fn init_logger(verbose: bool) {
    let default = if verbose { "life_quiz=debug,warn" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();
}

fn print_record(index: usize, record: &SubmissionRecord) {
    let aggregate = record.aggregate();
    let ratings: Vec<String> = record
        .ratings()
        .iter()
        .map(|(category, rating)| format!("{}={}", category, rating))
        .collect();
    println!(
        "{:>3}. {}  {} {}  {}",
        index + 1,
        record.timestamp(),
        Mood::from_score(aggregate),
        format_score(aggregate),
        ratings.join(" ")
    );
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Categories => {
            for category in Category::ALL {
                println!(
                    "{:<14} {:<16} {}",
                    category.id(),
                    category.label(),
                    category.description()
                );
            }
        }

        Commands::Submit { rates } => {
            let session = QuizSession::new(HttpSubmitter::new(cli.server));
            for (category, rating) in rates {
                session.set_rating(category, i64::from(rating.get()));
            }

            for category in Category::ALL {
                let rating = session.rating(category);
                println!("{:<16} {:>2} {}", category.label(), rating, Mood::from(rating));
            }
            println!();

            match session.submit().await {
                SubmitOutcome::Accepted(record) => {
                    let aggregate = session.aggregate();
                    println!("Thank you! Your responses have been recorded ({}).", record.timestamp());
                    println!(
                        "Your average life satisfaction score is: {} {}",
                        Mood::from_score(aggregate),
                        format_score(aggregate)
                    );
                }
                SubmitOutcome::Failed(err) => return Err(err.into()),
                SubmitOutcome::Ignored => {}
            }
        }

        Commands::List => {
            let submitter = HttpSubmitter::new(cli.server);
            let records = submitter.list_submissions().await?;
            if records.is_empty() {
                println!("No submissions yet.");
            }
            for (index, record) in records.iter().enumerate() {
                print_record(index, record);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rate() {
        let (category, rating) = parse_rate("health=8").unwrap();
        assert_eq!(category, Category::Health);
        assert_eq!(rating.get(), 8);

        assert!(matches!(parse_rate("health"), Err(AppError::InvalidRateArg(_))));
        assert!(matches!(parse_rate("health=x"), Err(AppError::InvalidRateArg(_))));
        assert!(matches!(
            parse_rate("wealth=3"),
            Err(AppError::Rating(RatingError::UnknownCategory(_)))
        ));
        assert!(matches!(
            parse_rate("fun=11"),
            Err(AppError::Rating(RatingError::OutOfRange(11)))
        ));
    }

    #[test]
    fn test_cli_parses_repeated_rates() {
        let cli = Cli::try_parse_from([
            "life-quiz",
            "--server",
            "http://127.0.0.1:9000",
            "submit",
            "--rate",
            "health=8",
            "-r",
            "career=3",
        ])
        .unwrap();
        assert_eq!(cli.server, "http://127.0.0.1:9000");
        match cli.command {
            Commands::Submit { rates } => assert_eq!(rates.len(), 2),
            _ => panic!("expected submit"),
        }
    }
}
