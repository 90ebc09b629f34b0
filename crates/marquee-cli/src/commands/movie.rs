use anyhow::{Context, Result};

use marquee_client::{
    open_movie_page, Config, FormError, MovieForm, MovieGateway, Navigator, Notifier, RestGateway,
    Route, SubmitOutcome,
};
use marquee_core::{validate_all, MovieField, MovieId};

/// Field values given on the command line.
#[derive(Debug, Default, Clone, clap::Args)]
pub struct FieldArgs {
    /// Movie title (at least 5 characters)
    #[arg(long)]
    pub title: Option<String>,

    /// Genre name, as listed by `marquee genres`
    #[arg(long)]
    pub genre: Option<String>,

    /// Number in stock (0-100)
    #[arg(long = "stock")]
    pub number_in_stock: Option<String>,

    /// Daily rental rate (0-10)
    #[arg(long)]
    pub rate: Option<String>,
}

impl FieldArgs {
    /// The fields that were given, in form order.
    pub fn changes(self) -> Vec<(MovieField, String)> {
        [
            (MovieField::Title, self.title),
            (MovieField::Genre, self.genre),
            (MovieField::NumberInStock, self.number_in_stock),
            (MovieField::Rate, self.rate),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

/// Prints redirects instead of following them.
#[derive(Debug, Default)]
pub struct ConsoleNavigator {
    pub last: Option<Route>,
}

impl Navigator for ConsoleNavigator {
    fn navigate(&mut self, route: Route) {
        println!("→ {}", route);
        self.last = Some(route);
    }
}

#[derive(Debug, Clone, Copy)]
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        println!("{}", message);
    }
}

/// Create a movie from the given fields.
pub async fn run_new(config: &Config, fields: FieldArgs) -> Result<()> {
    let mut navigator = ConsoleNavigator::default();
    let form = open_page(config, None, &mut navigator).await?;
    fill_and_submit(config, form, fields, &mut navigator).await
}

/// Edit the movie `id` with the given fields.
pub async fn run_edit(config: &Config, id: MovieId, fields: FieldArgs) -> Result<()> {
    let mut navigator = ConsoleNavigator::default();
    let form = open_page(config, Some(id), &mut navigator).await?;
    fill_and_submit(config, form, fields, &mut navigator).await
}

/// Open the movie page the way the listing does: the movie list is fetched
/// first and handed to the page, which locates the movie in it.
async fn open_page(
    config: &Config,
    id: Option<MovieId>,
    navigator: &mut ConsoleNavigator,
) -> Result<MovieForm<RestGateway>> {
    let gateway = RestGateway::new(config)?;
    let movies = gateway
        .list_movies()
        .await
        .context("Failed to fetch movies")?;

    match open_movie_page(gateway, id, Some(movies.as_slice()), navigator) {
        Ok(Some(form)) => Ok(form),
        Ok(None) => anyhow::bail!("Movie page redirected to {}", Route::NotFound),
        Err(FormError::MovieNotFound(id)) => {
            anyhow::bail!("No movie with id {} (see `marquee movies`)", id)
        }
        Err(e) => Err(e.into()),
    }
}

async fn fill_and_submit(
    config: &Config,
    form: MovieForm<RestGateway>,
    fields: FieldArgs,
    navigator: &mut ConsoleNavigator,
) -> Result<()> {
    let mut form = form
        .with_notifier(Box::new(ConsoleNotifier))
        .with_save_delay(config.save_delay());
    println!("Movie page: {}", form.route());

    if let Err(e) = form.load_genre_options().await {
        log::warn!("Could not load genre options: {}", e);
    }

    for (field, value) in fields.changes() {
        form.set_field(field, value);
    }

    match form.submit(navigator).await {
        Ok(SubmitOutcome::Saved) => {
            println!("✓ Saved {:?}", form.record().title);
            Ok(())
        }
        Ok(SubmitOutcome::Invalid) => {
            print_field_errors(&form);
            anyhow::bail!("Movie not saved: fix the fields above")
        }
        Ok(SubmitOutcome::AlreadySubmitted) => Ok(()),
        Err(FormError::GenreNotFound(name)) => {
            print_genre_options(&form);
            anyhow::bail!("Movie not saved: unknown genre {:?}", name)
        }
        Err(FormError::Gateway(e)) if e.is_not_found() => {
            anyhow::bail!("Movie not saved: it no longer exists on the catalog service ({})", e)
        }
        Err(FormError::Gateway(e)) if e.is_client_error() => {
            anyhow::bail!("Movie not saved: the catalog service rejected it ({})", e)
        }
        Err(e) => Err(e).context("Movie not saved"),
    }
}

fn print_field_errors(form: &MovieForm<RestGateway>) {
    let Err(errors) = validate_all(form.record()) else {
        return;
    };

    println!("Invalid fields:");
    for (field, message) in errors.failing() {
        println!("  {:<14} {}", field.name(), message);
    }

    if !errors.genre.is_empty() {
        print_genre_options(form);
    }
}

fn print_genre_options(form: &MovieForm<RestGateway>) {
    let known: Vec<&str> = form
        .genre_options()
        .iter()
        .map(String::as_str)
        .filter(|name| !name.is_empty())
        .collect();

    if !known.is_empty() {
        println!("Known genres: {}", known.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changes_skip_missing_fields() {
        let args = FieldArgs {
            title: Some("Inception".to_string()),
            rate: Some("7.5".to_string()),
            ..FieldArgs::default()
        };

        assert_eq!(
            args.changes(),
            vec![
                (MovieField::Title, "Inception".to_string()),
                (MovieField::Rate, "7.5".to_string()),
            ]
        );
    }

    #[test]
    fn test_changes_empty() {
        assert!(FieldArgs::default().changes().is_empty());
    }

    #[test]
    fn test_console_navigator_remembers_last_route() {
        let mut navigator = ConsoleNavigator::default();
        navigator.navigate(Route::NotFound);
        navigator.navigate(Route::Movies);
        assert_eq!(navigator.last, Some(Route::Movies));
    }
}
