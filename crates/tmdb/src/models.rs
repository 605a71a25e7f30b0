use serde::{Deserialize, Serialize};

/// A movie as returned by list-shaped endpoints (search, upcoming,
/// person movie credits).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
    #[serde(default)]
    pub popularity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub page: i64,
    pub results: Vec<T>,
    pub total_pages: i64,
    pub total_results: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreListResponse {
    pub genres: Vec<Genre>,
}

/// Full movie record from `/movie/{id}`.
///
/// `release_date` here is the authoritative original release date, which can
/// differ from the regional date carried by list entries (re-releases).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    pub runtime: Option<i64>,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub key: String,
    pub name: String,
    pub site: String,
    #[serde(rename = "type")]
    pub video_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoListResponse {
    pub id: i64,
    pub results: Vec<Video>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastMember {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub character: String,
    pub profile_path: Option<String>,
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewMember {
    pub id: i64,
    pub name: String,
    pub job: String,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credits {
    pub id: i64,
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub biography: String,
    pub birthday: Option<String>,
    pub place_of_birth: Option<String>,
    pub profile_path: Option<String>,
}

/// Response of `/person/{id}/movie_credits`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonCredits {
    pub id: i64,
    pub cast: Vec<Movie>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_search_page() {
        let body = r#"{
            "page": 1,
            "results": [
                {
                    "id": 496243,
                    "title": "기생충",
                    "original_title": "기생충",
                    "overview": "전원 백수인 기택네 장남 기우는...",
                    "poster_path": "/pTgfDKLmv0dWWVlkHJ9BPYl6yd3.jpg",
                    "backdrop_path": null,
                    "release_date": "2019-05-30",
                    "vote_average": 8.5,
                    "genre_ids": [35, 53, 18],
                    "popularity": 94.2
                }
            ],
            "total_pages": 1,
            "total_results": 1
        }"#;

        let page: PaginatedResponse<Movie> = serde_json::from_str(body).unwrap();
        assert_eq!(page.total_results, 1);
        let movie = &page.results[0];
        assert_eq!(movie.id, 496243);
        assert!(movie.backdrop_path.is_none());
        assert_eq!(movie.release_date.as_deref(), Some("2019-05-30"));
        assert_eq!(movie.genre_ids, vec![35, 53, 18]);
    }

    #[test]
    fn list_entries_tolerate_missing_optional_fields() {
        // Person credits often omit scoring fields entirely.
        let body = r#"{"id": 1, "title": "무제", "poster_path": null,
                       "backdrop_path": null, "release_date": null}"#;
        let movie: Movie = serde_json::from_str(body).unwrap();
        assert_eq!(movie.vote_average, 0.0);
        assert!(movie.genre_ids.is_empty());
    }
}
