mod cli;
mod error;
mod fetcher;
mod genres;
mod query;

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::builder::BoolishValueParser;
use clap::{ArgAction, CommandFactory, Parser};
use fetcher::DiscoverClient;
use query::{Format, GenreSelection, Query, Ranking};
use tracing::{debug, warn};

#[derive(Parser, Debug)]
#[command(
    version,
    about = cli::ABOUT,
    long_about = None,
    after_help = cli::EXAMPLES
)]
struct Args {
    /// Genre or genre/subgenre to query
    #[arg(long, default_value = "all", allow_hyphen_values = true)]
    genre: String,

    /// Print all genres to stdout
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    list_genres: bool,

    /// Ranking to display (top, new, rec)
    #[arg(long, default_value = "top", allow_hyphen_values = true)]
    ranking: Ranking,

    /// Format to display (all, digital, vinyl, cd, cassette)
    #[arg(long, default_value = "all", allow_hyphen_values = true)]
    format: Format,

    /// Anything after the first non-flag argument is ignored.
    #[arg(hide = true, trailing_var_arg = true)]
    rest: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse_from(cli::normalize_args(std::env::args_os()));

    if args.list_genres {
        if let Err(e) = genres::print_genres(&mut io::stdout().lock()) {
            eprintln!("Failed printing genres: {e}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    if !args.rest.is_empty() {
        debug!("Ignoring trailing arguments: {:?}", args.rest);
    }

    let selection = genre_selection(&args.genre).unwrap_or_else(|e| e.exit());
    warn_if_unknown(&selection);

    let query = Query::new(selection, args.ranking, args.format);
    match run(&query) {
        Ok(urls) => {
            for url in urls {
                println!("{url}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed getting URLs: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Splits `-genre`, turning a malformed value into a clap usage error (exit code 2).
fn genre_selection(genre: &str) -> Result<GenreSelection, clap::Error> {
    GenreSelection::parse(genre)
        .map_err(|e| Args::command().error(ErrorKind::ValueValidation, e))
}

fn run(query: &Query) -> Result<Vec<String>> {
    let client = DiscoverClient::new().context("Failed to init Discover client")?;
    let urls = client.fetch_album_urls(&query.request_url())?;
    Ok(urls)
}

/// The API silently ignores facets it doesn't recognise, so an unknown value
/// is only worth a warning. It is still sent as given.
fn warn_if_unknown(selection: &GenreSelection) {
    if !genres::is_known_genre(&selection.genre) {
        warn!("Unknown genre {:?}; see -list-genres", selection.genre);
    } else if !selection.subgenre.is_empty()
        && !genres::is_known_subgenre(&selection.genre, &selection.subgenre)
    {
        warn!(
            "Unknown subgenre {:?} for genre {:?}",
            selection.subgenre, selection.genre
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        let args = args.iter().map(std::ffi::OsString::from);
        Args::try_parse_from(cli::normalize_args(args))
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["bcdiscover"]).unwrap();
        assert_eq!(args.genre, "all");
        assert!(!args.list_genres);
        assert_eq!(args.ranking, Ranking::Top);
        assert_eq!(args.format, Format::All);
    }

    #[test]
    fn test_single_dash_flags() {
        let args = parse(&[
            "bcdiscover",
            "-genre",
            "metal/doom",
            "-ranking",
            "rec",
            "-format=cassette",
        ])
        .unwrap();
        assert_eq!(args.genre, "metal/doom");
        assert_eq!(args.ranking, Ranking::Rec);
        assert_eq!(args.format, Format::Cassette);

        let query = Query::new(
            GenreSelection::parse(&args.genre).unwrap(),
            args.ranking,
            args.format,
        );
        assert_eq!(
            query.request_url(),
            "https://bandcamp.com/api/discover/3/get_web?g=metal&s=rec&f=cassette&p=0&gn=0&w=0&t=doom"
        );
    }

    #[test]
    fn test_list_genres_flag() {
        assert!(parse(&["bcdiscover", "-list-genres"]).unwrap().list_genres);
        assert!(parse(&["bcdiscover", "--list-genres"]).unwrap().list_genres);
    }

    #[test]
    fn test_unknown_ranking_passes_through() {
        let args = parse(&["bcdiscover", "-ranking", "hot"]).unwrap();
        assert_eq!(args.ranking, Ranking::Other("hot".to_string()));
    }

    #[test]
    fn test_genre_selection_usage_error() {
        let args = parse(&["bcdiscover", "-genre", "a/b/c"]).unwrap();
        let err = genre_selection(&args.genre).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert_eq!(err.exit_code(), 2);

        let selection = genre_selection("rock/indie").unwrap();
        assert_eq!(selection.genre, "rock");
        assert_eq!(selection.subgenre, "indie");
    }

    #[test]
    fn test_list_genres_takes_go_style_bool() {
        assert!(parse(&["bcdiscover", "-list-genres=true"]).unwrap().list_genres);
        assert!(!parse(&["bcdiscover", "-list-genres=false"]).unwrap().list_genres);
        assert!(!parse(&["bcdiscover", "--list-genres=0"]).unwrap().list_genres);
    }

    #[test]
    fn test_list_genres_does_not_swallow_next_arg() {
        let args = parse(&["bcdiscover", "-list-genres", "-ranking", "new"]).unwrap();
        assert!(args.list_genres);
        assert_eq!(args.ranking, Ranking::New);
    }

    #[test]
    fn test_trailing_arguments_are_ignored() {
        let args = parse(&["bcdiscover", "-ranking", "new", "extra", "-format", "cd"]).unwrap();
        assert_eq!(args.ranking, Ranking::New);
        assert_eq!(args.format, Format::All);
        assert_eq!(args.rest, ["extra", "-format", "cd"]);
    }

    #[test]
    fn test_flag_like_values_are_kept() {
        let args = parse(&["bcdiscover", "-genre", "-ranking"]).unwrap();
        assert_eq!(args.genre, "-ranking");
        assert_eq!(args.ranking, Ranking::Top);

        let args = parse(&["bcdiscover", "--format", "-genre", "-ranking", "rec"]).unwrap();
        assert_eq!(args.format, Format::Other("-genre".to_string()));
        assert_eq!(args.ranking, Ranking::Rec);
    }
}
