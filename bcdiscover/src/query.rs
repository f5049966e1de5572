use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::error::DiscoverError;

pub const DISCOVER_API_URL: &str = "https://bandcamp.com/api/discover/3/get_web";

/// Sort order of the discover listing (`s` parameter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ranking {
    Top,
    New,
    Rec,
    /// Anything else is forwarded untouched; the API ignores values it doesn't know.
    Other(String),
}

impl Ranking {
    pub fn as_str(&self) -> &str {
        match self {
            Ranking::Top => "top",
            Ranking::New => "new",
            Ranking::Rec => "rec",
            Ranking::Other(s) => s,
        }
    }
}

impl FromStr for Ranking {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "top" => Ranking::Top,
            "new" => Ranking::New,
            "rec" => Ranking::Rec,
            other => Ranking::Other(other.to_string()),
        })
    }
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Media format filter (`f` parameter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Format {
    All,
    Digital,
    Vinyl,
    Cd,
    Cassette,
    Other(String),
}

impl Format {
    pub fn as_str(&self) -> &str {
        match self {
            Format::All => "all",
            Format::Digital => "digital",
            Format::Vinyl => "vinyl",
            Format::Cd => "cd",
            Format::Cassette => "cassette",
            Format::Other(s) => s,
        }
    }
}

impl FromStr for Format {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "all" => Format::All,
            "digital" => Format::Digital,
            "vinyl" => Format::Vinyl,
            "cd" => Format::Cd,
            "cassette" => Format::Cassette,
            other => Format::Other(other.to_string()),
        })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `-genre` value split into genre and optional subgenre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreSelection {
    pub genre: String,
    /// Empty when no subgenre was given.
    pub subgenre: String,
}

impl GenreSelection {
    /// Accepts "genre" or "genre/subgenre". More than one '/' is a usage error.
    pub fn parse(value: &str) -> Result<Self, DiscoverError> {
        let parts: Vec<&str> = value.split('/').collect();
        match parts.as_slice() {
            [genre] => Ok(Self {
                genre: (*genre).to_string(),
                subgenre: String::new(),
            }),
            [genre, subgenre] => Ok(Self {
                genre: (*genre).to_string(),
                subgenre: (*subgenre).to_string(),
            }),
            _ => Err(DiscoverError::Usage(
                "-genre value should contain genre or genre/subgenre".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Query {
    pub genre: String,
    pub subgenre: String,
    pub ranking: Ranking,
    pub format: Format,
}

impl Query {
    pub fn new(selection: GenreSelection, ranking: Ranking, format: Format) -> Self {
        Self {
            genre: selection.genre,
            subgenre: selection.subgenre,
            ranking,
            format,
        }
    }

    pub fn request_url(&self) -> String {
        build_url(
            DISCOVER_API_URL,
            &self.genre,
            &self.subgenre,
            &self.ranking,
            &self.format,
        )
    }
}

/// Builds the discover request URL. Values are concatenated as-is: nothing is
/// percent-encoded, so a facet containing '&', '=' or '#' ends up corrupting
/// the query string.
pub fn build_url(
    base: &str,
    genre: &str,
    subgenre: &str,
    ranking: &Ranking,
    format: &Format,
) -> String {
    let mut url = format!("{base}?g={genre}&s={ranking}&f={format}&p=0&gn=0&w=0");
    if !subgenre.is_empty() {
        url.push_str("&t=");
        url.push_str(subgenre);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(url: &str) -> Vec<(String, String)> {
        let (_, query) = url.split_once('?').unwrap();
        query
            .split('&')
            .map(|pair| {
                let (k, v) = pair.split_once('=').unwrap();
                (k.to_string(), v.to_string())
            })
            .collect()
    }

    #[test]
    fn test_build_url_without_subgenre() {
        let url = build_url(DISCOVER_API_URL, "rock", "", &Ranking::Top, &Format::All);
        assert_eq!(
            url,
            "https://bandcamp.com/api/discover/3/get_web?g=rock&s=top&f=all&p=0&gn=0&w=0"
        );
        assert!(params(&url).iter().all(|(k, _)| k != "t"));
    }

    #[test]
    fn test_build_url_with_subgenre() {
        let url = build_url(
            DISCOVER_API_URL,
            "electronic",
            "synthwave",
            &Ranking::New,
            &Format::Vinyl,
        );
        let params = params(&url);
        for expected in [
            ("g", "electronic"),
            ("t", "synthwave"),
            ("s", "new"),
            ("f", "vinyl"),
            ("p", "0"),
            ("gn", "0"),
            ("w", "0"),
        ] {
            assert!(
                params.contains(&(expected.0.to_string(), expected.1.to_string())),
                "missing {expected:?} in {url}"
            );
        }
    }

    #[test]
    fn test_build_url_passes_unknown_values_through() {
        let ranking: Ranking = "hot".parse().unwrap();
        let format: Format = "8track".parse().unwrap();
        let url = build_url("http://x/api", "not-a-genre", "", &ranking, &format);
        assert_eq!(url, "http://x/api?g=not-a-genre&s=hot&f=8track&p=0&gn=0&w=0");
    }

    #[test]
    fn test_build_url_does_not_escape() {
        let url = build_url("http://x/api", "a b", "c&d", &Ranking::Rec, &Format::Cd);
        assert_eq!(url, "http://x/api?g=a b&s=rec&f=cd&p=0&gn=0&w=0&t=c&d");
    }

    #[test]
    fn test_query_request_url() {
        let query = Query::new(
            GenreSelection::parse("jazz/bebop").unwrap(),
            Ranking::Rec,
            Format::Cassette,
        );
        assert_eq!(
            query.request_url(),
            "https://bandcamp.com/api/discover/3/get_web?g=jazz&s=rec&f=cassette&p=0&gn=0&w=0&t=bebop"
        );
    }

    #[test]
    fn test_genre_selection_parse() {
        assert_eq!(
            GenreSelection::parse("a/b").unwrap(),
            GenreSelection {
                genre: "a".to_string(),
                subgenre: "b".to_string()
            }
        );
        assert_eq!(
            GenreSelection::parse("a").unwrap(),
            GenreSelection {
                genre: "a".to_string(),
                subgenre: String::new()
            }
        );
        assert!(matches!(
            GenreSelection::parse("a/b/c"),
            Err(DiscoverError::Usage(_))
        ));
    }

    #[test]
    fn test_ranking_and_format_round_trip_known_values() {
        for s in ["top", "new", "rec"] {
            assert_eq!(s.parse::<Ranking>().unwrap().as_str(), s);
        }
        assert_eq!("top".parse::<Ranking>().unwrap(), Ranking::Top);
        assert_eq!(Ranking::Other("hot".to_string()).to_string(), "hot");
        assert_eq!(Format::Cassette.to_string(), "cassette");
        assert_eq!("cd".parse::<Format>().unwrap(), Format::Cd);
        assert_eq!(
            "Vinyl".parse::<Format>().unwrap(),
            Format::Other("Vinyl".to_string())
        );
    }
}
