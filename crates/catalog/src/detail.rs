//! Detail-view composition: the extra fetches behind a selected movie or a
//! cast member.

use tmdb::models::{CastMember, CrewMember, Movie, Person, Video};

use crate::{ArchiveError, CatalogProvider};

/// How many cast members the detail view shows.
const MAIN_CAST_LIMIT: usize = 6;

/// Trailer, director, and leading cast for one movie.
#[derive(Debug, Clone)]
pub struct MovieExtras {
    pub trailer: Option<Video>,
    pub director: Option<CrewMember>,
    pub cast: Vec<CastMember>,
}

/// Fetch videos and credits for a movie in one paired round trip.
pub async fn movie_extras<C>(catalog: &C, id: i64) -> Result<MovieExtras, ArchiveError>
where
    C: CatalogProvider + ?Sized,
{
    let (videos, credits) =
        futures::try_join!(catalog.movie_videos(id), catalog.movie_credits(id))?;

    let trailer = videos.into_iter().find(|v| v.video_type == "Trailer");
    let director = credits.crew.into_iter().find(|c| c.job == "Director");
    let cast = credits.cast.into_iter().take(MAIN_CAST_LIMIT).collect();

    Ok(MovieExtras {
        trailer,
        director,
        cast,
    })
}

/// A person and their filmography, for the cast-member popup.
#[derive(Debug, Clone)]
pub struct PersonProfile {
    pub person: Person,
    pub movie_credits: Vec<Movie>,
}

pub async fn person_profile<C>(catalog: &C, id: i64) -> Result<PersonProfile, ArchiveError>
where
    C: CatalogProvider + ?Sized,
{
    let (person, movie_credits) = futures::try_join!(
        catalog.person_detail(id),
        catalog.person_movie_credits(id)
    )?;

    Ok(PersonProfile {
        person,
        movie_credits,
    })
}
