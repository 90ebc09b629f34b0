use anyhow::{Context, Result};
use marquee_client::{config, Config};
use toml_edit::{value, DocumentMut};

const STRING_KEYS: [&str; 3] = ["base_url", "movies_url", "genres_url"];
const INTEGER_KEYS: [&str; 3] = ["port", "save_delay_ms", "request_timeout_secs"];

fn valid_keys() -> String {
    STRING_KEYS
        .iter()
        .chain(INTEGER_KEYS.iter())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

/// Show the current effective configuration.
pub fn show_config() -> Result<()> {
    let config = Config::load()?;

    println!("Current Configuration");
    println!("=====================\n");

    let config_path = config::config_file_path();
    println!("Config file: {}", config_path.display());
    let exists = config_path.exists();
    println!("File exists: {}\n", if exists { "yes" } else { "no (using defaults)" });

    println!("Settings:");
    println!("  base_url: {}", config.base_url);
    println!("  port: {}", config.port);
    println!("  movies_url: {}", config.movies_url);
    println!("  genres_url: {}", config.genres_url);
    println!("  save_delay_ms: {}", config.save_delay_ms);
    println!("  request_timeout_secs: {}", config.request_timeout_secs);

    println!("\nEndpoints:");
    println!("  genres: {}", config.genres_endpoint());
    println!("  movies: {}", config.movies_endpoint());

    println!("\nPriority: CLI args > ENV vars (MARQUEE_*) > Config file > Defaults");

    Ok(())
}

/// Get a specific config value.
pub fn get_config(key: Option<String>) -> Result<()> {
    let Some(key) = key else {
        // No key provided, show entire config file contents
        let config_path = config::config_file_path();

        if config_path.exists() {
            let contents =
                std::fs::read_to_string(&config_path).context("Failed to read config file")?;
            print!("{}", contents);
        } else {
            println!("Config file does not exist: {}", config_path.display());
            println!("\nRun 'marquee config init' to create it.");
        }
        return Ok(());
    };

    let config = Config::load()?;
    match key.as_str() {
        "base_url" => println!("{}", config.base_url),
        "port" => println!("{}", config.port),
        "movies_url" => println!("{}", config.movies_url),
        "genres_url" => println!("{}", config.genres_url),
        "save_delay_ms" => println!("{}", config.save_delay_ms),
        "request_timeout_secs" => println!("{}", config.request_timeout_secs),
        _ => anyhow::bail!("Unknown config key: {}\n\nValid keys: {}", key, valid_keys()),
    }

    Ok(())
}

/// Set a config value.
pub fn set_config(key: &str, new_value: &str) -> Result<()> {
    let config_path = config::config_file_path();

    config::ensure_config_file()?;

    let contents = std::fs::read_to_string(&config_path).context("Failed to read config file")?;
    let updated = set_value(&contents, key, new_value)?;
    std::fs::write(&config_path, updated).context("Failed to write config file")?;

    println!("✓ Updated {} = {}", key, new_value);
    println!("  in {}", config_path.display());

    Ok(())
}

/// Replace (or add) `key` in a TOML document, keeping comments and layout.
fn set_value(contents: &str, key: &str, new_value: &str) -> Result<String> {
    let mut doc: DocumentMut = contents.parse().context("Config file is not valid TOML")?;

    if STRING_KEYS.contains(&key) {
        doc[key] = value(new_value);
    } else if INTEGER_KEYS.contains(&key) {
        let number: i64 = new_value
            .parse()
            .with_context(|| format!("{} must be a whole number, got {:?}", key, new_value))?;
        if key == "port" {
            u16::try_from(number).with_context(|| format!("port out of range: {}", number))?;
        } else if number < 0 {
            anyhow::bail!("{} must not be negative", key);
        }
        doc[key] = value(number);
    } else {
        anyhow::bail!("Unknown config key: {}\n\nValid keys: {}", key, valid_keys());
    }

    Ok(doc.to_string())
}

/// Show the config file path.
pub fn show_path() -> Result<()> {
    println!("{}", config::config_file_path().display());
    Ok(())
}

/// Show example configuration.
pub fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to point marquee at your catalog service.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_string_value_keeps_comments() {
        let updated = set_value(config::example_config(), "base_url", "http://catalog").unwrap();
        assert!(updated.contains("base_url = \"http://catalog\""));
        assert!(updated.contains("# Marquee Configuration File"));
        assert!(updated.contains("port = 3900"));
    }

    #[test]
    fn test_set_integer_value() {
        let updated = set_value(config::example_config(), "port", "4000").unwrap();
        assert!(updated.contains("port = 4000"));
        assert!(!updated.contains("port = 3900"));
    }

    #[test]
    fn test_set_adds_missing_key() {
        let updated = set_value("", "genres_url", "/genres").unwrap();
        assert_eq!(updated.trim(), "genres_url = \"/genres\"");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        assert!(set_value("", "port", "eighty").is_err());
        assert!(set_value("", "port", "70000").is_err());
        assert!(set_value("", "save_delay_ms", "-1").is_err());
        assert!(set_value("", "database_path", "/tmp").is_err());
    }

    #[test]
    fn test_set_rejects_invalid_document() {
        assert!(set_value("port = ", "port", "1").is_err());
    }
}
