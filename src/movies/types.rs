//! Client-facing movie types.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::movies::error::MovieError;
use crate::tmdb::{CastMember, DiscoverFilter, UpstreamMovieSummary};

/// The normalized movie shape returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    /// Four-digit year, or empty when the release date is unknown.
    pub release_year: String,
    pub plot: String,
    pub cast: Vec<String>,
    pub rating: f64,
}

impl MovieRecord {
    /// Merge an upstream summary with its cast list.
    pub fn from_upstream(movie: UpstreamMovieSummary, cast: Vec<CastMember>) -> Self {
        Self {
            release_year: release_year(movie.release_date.as_deref()),
            title: movie.title,
            plot: movie.overview,
            cast: cast.into_iter().map(|member| member.name).collect(),
            rating: movie.vote_average,
        }
    }
}

/// Year prefix of a `YYYY-MM-DD` date. Anything that does not start with
/// four ASCII digits yields an empty string.
pub fn release_year(release_date: Option<&str>) -> String {
    match release_date.and_then(|date| date.get(..4)) {
        Some(year) if year.bytes().all(|b| b.is_ascii_digit()) => year.to_string(),
        _ => String::new(),
    }
}

/// Raw query parameters of `GET /movies`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListParams {
    pub year: Option<String>,
    pub genre: Option<String>,
    pub rating: Option<String>,
}

impl ListParams {
    /// Read filters from a raw query string. A repeated key keeps its first
    /// value; unknown keys are ignored.
    pub fn from_query(query: Option<&str>) -> Self {
        let mut params = Self::default();
        let Some(query) = query else {
            return params;
        };

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match &*key {
                "year" => &mut params.year,
                "genre" => &mut params.genre,
                "rating" => &mut params.rating,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        params
    }

    /// Validate and convert into an upstream discover filter.
    pub fn into_filter(self) -> Result<DiscoverFilter, MovieError> {
        let min_rating = self.rating.as_deref().map(parse_rating).transpose()?;
        Ok(DiscoverFilter {
            year: self.year,
            genre: self.genre,
            min_rating,
        })
    }
}

fn parse_rating(raw: &str) -> Result<f64, MovieError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(MovieError::InvalidRating),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_year() {
        assert_eq!(release_year(Some("1999-05-01")), "1999");
        assert_eq!(release_year(Some("")), "");
        assert_eq!(release_year(None), "");
        assert_eq!(release_year(Some("199")), "");
        assert_eq!(release_year(Some("TBA 2026")), "");
        // Multi-byte input must not panic on a non-boundary slice
        assert_eq!(release_year(Some("éé-01")), "");
    }

    #[test]
    fn test_record_from_upstream() {
        let movie = UpstreamMovieSummary {
            id: 1,
            title: "A".into(),
            release_date: Some("1999-05-01".into()),
            overview: "x".into(),
            vote_average: 7.5,
        };
        let record = MovieRecord::from_upstream(movie, vec![CastMember { name: "Alice".into() }]);

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            serde_json::json!({
                "title": "A",
                "release_year": "1999",
                "plot": "x",
                "cast": ["Alice"],
                "rating": 7.5
            })
        );
    }

    #[test]
    fn test_rating_parsing() {
        let params = ListParams {
            rating: Some(" 6.5 ".into()),
            ..ListParams::default()
        };
        assert_eq!(params.into_filter().unwrap().min_rating, Some(6.5));

        for bad in ["abc", "", "NaN", "inf", "7,5"] {
            let params = ListParams {
                rating: Some(bad.into()),
                ..ListParams::default()
            };
            assert!(
                matches!(params.into_filter(), Err(MovieError::InvalidRating)),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_query_first_value_wins() {
        let params = ListParams::from_query(Some("year=1999&rating=5&year=2000&rating=6&page=3"));
        assert_eq!(
            params,
            ListParams {
                year: Some("1999".into()),
                genre: None,
                rating: Some("5".into()),
            }
        );

        let params = ListParams::from_query(Some("genre=28%2C12&year="));
        assert_eq!(params.genre.as_deref(), Some("28,12"));
        assert_eq!(params.year.as_deref(), Some(""));

        assert_eq!(ListParams::from_query(None), ListParams::default());
    }

    #[test]
    fn test_year_and_genre_pass_through() {
        let params = ListParams {
            year: Some("2001".into()),
            genre: Some("28,12".into()),
            rating: None,
        };
        let filter = params.into_filter().unwrap();
        assert_eq!(filter.year.as_deref(), Some("2001"));
        assert_eq!(filter.genre.as_deref(), Some("28,12"));
        assert_eq!(filter.min_rating, None);
    }
}
