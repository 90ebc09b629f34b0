use anyhow::{Context, Result};
use marquee_client::{Config, MovieGateway, RestGateway};

/// Print every genre the catalog knows, in service order.
pub async fn list_genres(config: &Config) -> Result<()> {
    let gateway = RestGateway::new(config)?;
    let genres = gateway
        .list_genres()
        .await
        .context("Failed to fetch genres")?;

    if genres.is_empty() {
        println!("No genres in catalog at {}", config.genres_endpoint());
        return Ok(());
    }

    for genre in &genres {
        println!("{:<26} {}", genre.id, genre.name);
    }

    Ok(())
}

/// Print the movie list as a table.
pub async fn list_movies(config: &Config) -> Result<()> {
    let gateway = RestGateway::new(config)?;
    let movies = gateway
        .list_movies()
        .await
        .context("Failed to fetch movies")?;

    if movies.is_empty() {
        println!("No movies in catalog at {}", config.movies_endpoint());
        return Ok(());
    }

    println!(
        "{:<26} {:<30} {:<12} {:>5} {:>5}",
        "ID", "TITLE", "GENRE", "STOCK", "RATE"
    );
    for movie in &movies {
        println!(
            "{:<26} {:<30} {:<12} {:>5} {:>5}",
            movie.id, movie.title, movie.genre.name, movie.number_in_stock, movie.daily_rental_rate
        );
    }
    println!("\n{} movies", movies.len());

    Ok(())
}
