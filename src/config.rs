use std::env;
use std::sync::OnceLock;
use dotenvy::dotenv;

use crate::domain::request::Locale;

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub default_locale: Locale,
}

pub fn config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| {
        dotenv().ok();

        Config {
            port: parse_port(env::var("PORT").ok().as_deref()),
            default_locale: parse_locale(env::var("DEFAULT_LOCALE").ok().as_deref()),
        }
    })
}

fn parse_port(raw: Option<&str>) -> u16 {
    match raw {
        None => 3000,
        Some(value) => value.parse().unwrap_or_else(|_| {
            tracing::warn!(value, "PORT is not a number, using 3000");
            3000
        }),
    }
}

fn parse_locale(raw: Option<&str>) -> Locale {
    match raw {
        None => Locale::default(),
        Some(value) => value.parse().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Falling back to default locale");
            Locale::default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port(None), 3000);
        assert_eq!(parse_port(Some("8080")), 8080);
        assert_eq!(parse_port(Some("eighty")), 3000);
    }

    #[test]
    fn test_parse_locale() {
        assert_eq!(parse_locale(None), Locale::En);
        assert_eq!(parse_locale(Some("ko")), Locale::Ko);
        assert_eq!(parse_locale(Some("fr")), Locale::En);
    }
}
