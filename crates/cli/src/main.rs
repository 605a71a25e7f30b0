use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use catalog::{
    Aggregator, Config, EnrichedMovie, FavoritesStore, FsBlobStore, GenreTable, KobisRegistry,
    LoadPhase, Session, Snapshot, TmdbCatalog, UpcomingReRelease, View,
};
use kobis::{KobisClient, RankOldAndNew};
use tmdb::models::Movie;
use tmdb::TmdbClient;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let http = reqwest::Client::new();
    let tmdb = Arc::new(
        TmdbClient::with_client(http.clone(), config.tmdb_api_key.clone())
            .with_language(config.language.clone()),
    );
    let kobis = Arc::new(KobisClient::with_client(http, config.kobis_api_key.clone()));

    let aggregator = Aggregator::new(
        Arc::new(TmdbCatalog::new(tmdb)),
        Arc::new(KobisRegistry::new(kobis)),
        config.region.clone(),
    );
    let favorites = FavoritesStore::load(FsBlobStore::new(&config.data_path)).await;
    let mut session = Session::new(aggregator, favorites);

    // A query argument switches to search mode; otherwise run a full load.
    if let Some(query) = env::args().nth(1) {
        if let Err(e) = session.search(&query).await {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
        if let View::Search { query, results } = session.view() {
            print_search(query, results);
        }
        return ExitCode::SUCCESS;
    }

    session.load().await;
    match session.phase() {
        LoadPhase::Failed(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
        _ => {
            print_sections(session.snapshot());
            ExitCode::SUCCESS
        }
    }
}

fn print_sections(snapshot: &Snapshot) {
    print_enriched_section("재개봉 화제작", &snapshot.re_releases, false, &snapshot.genres);
    print_upcoming_re_releases("재개봉 예정작", &snapshot.upcoming_re_releases);
    print_enriched_section("박스오피스 순위", &snapshot.box_office, true, &snapshot.genres);
    print_movie_section("상영 예정작", &snapshot.upcoming, &snapshot.genres);
}

fn print_enriched_section(title: &str, movies: &[EnrichedMovie], ranked: bool, genres: &GenreTable) {
    println!("\n== {title} ==");
    if movies.is_empty() {
        println!("  해당하는 영화 정보가 없습니다.");
        return;
    }
    for entry in movies {
        let rank = if ranked {
            format!("{:>2} {:<4} ", entry.box_office.rank, rank_marker(entry))
        } else {
            String::new()
        };
        let labels = entry
            .catalog
            .as_ref()
            .map(|m| genres.labels(&m.genre_ids).join(", "))
            .unwrap_or_default();
        println!(
            "  {rank}{} (개봉 {}) {labels}",
            entry.title(),
            entry.box_office.open_dt.trim()
        );
    }
}

fn print_upcoming_re_releases(title: &str, movies: &[UpcomingReRelease]) {
    println!("\n== {title} ==");
    if movies.is_empty() {
        println!("  해당하는 영화 정보가 없습니다.");
        return;
    }
    for rr in movies {
        println!(
            "  {} (최초 개봉 {}, 재개봉 예정 {})",
            rr.movie.title,
            rr.original_release_date,
            rr.re_release_date.as_deref().unwrap_or("미정")
        );
    }
}

fn print_movie_section(title: &str, movies: &[Movie], genres: &GenreTable) {
    println!("\n== {title} ==");
    for movie in movies {
        println!(
            "  {} (개봉 {}) {}",
            movie.title,
            movie.release_date.as_deref().unwrap_or("미정"),
            genres.labels(&movie.genre_ids).join(", ")
        );
    }
}

fn print_search(query: &str, results: &[Movie]) {
    println!("\n== 검색 결과: {query} ==");
    if results.is_empty() {
        println!("  검색 결과가 없습니다.");
        return;
    }
    for movie in results {
        println!(
            "  {} (개봉 {}) ★{:.1}",
            movie.title,
            movie.release_date.as_deref().unwrap_or("미정"),
            movie.vote_average
        );
    }
}

fn rank_marker(entry: &EnrichedMovie) -> String {
    match entry.box_office.rank_old_and_new {
        RankOldAndNew::New => "NEW".to_string(),
        RankOldAndNew::Old => match entry.box_office.rank_inten {
            d if d > 0 => format!("▲{d}"),
            d if d < 0 => format!("▼{}", -d),
            _ => "-".to_string(),
        },
    }
}
