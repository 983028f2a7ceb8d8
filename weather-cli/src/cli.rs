use std::path::PathBuf;

use clap::Parser;
use i3blocks_weather_core::{
    Config, DarkSkyClient, DesktopNotifier, Flags, Options, Services, http, locator_for,
    notify::{self, BLOCK_BUTTON},
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "i3blocks-weather",
    version,
    about = "Current weather as Pango markup for i3blocks"
)]
pub struct Cli {
    /// Report degrees in Fahrenheit.
    #[arg(short = 'f', long = "farenheit", visible_alias = "fahrenheit")]
    pub farenheit: bool,

    /// Report degrees in Celsius.
    #[arg(short, long)]
    pub celsius: bool,

    /// API key for the Dark Sky-compatible forecast service.
    #[arg(short = 'k', long)]
    pub api_key: Option<String>,

    /// Address to report weather for; defaults to IP-based location.
    #[arg(short, long)]
    pub address: Option<String>,

    /// Decimal places of the temperature.
    #[arg(short = 'r', long, default_value_t = 0)]
    pub precision: usize,

    /// Language of the forecast summaries, e.g. "en" or "de".
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Point in time to report instead of now (RFC 3339 or `YYYY-MM-DD [HH:MM]`, UTC).
    #[arg(short, long)]
    pub time: Option<String>,

    /// Config file; defaults to the platform config directory.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    fn flags(&self) -> Flags {
        Flags {
            farenheit: self.farenheit,
            celsius: self.celsius,
            api_key: self.api_key.clone(),
            address: self.address.clone(),
            precision: self.precision,
            language: self.lang.clone(),
            time: self.time.clone(),
        }
    }

    fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let config = self.load_config()?;
        let options = Options::resolve(self.flags(), &config)?;

        let http = http::build_client(config.timeout())?;
        let locator = locator_for(options.address.as_deref(), &config.endpoints, http.clone());
        let forecast = DarkSkyClient::new(
            options.api_key.clone(),
            config.endpoints.forecast.clone(),
            http,
        );
        let notifier = DesktopNotifier;

        let clicked = notify::should_notify(std::env::var(BLOCK_BUTTON).ok().as_deref());
        log::debug!("unit: {}, clicked: {clicked}", options.unit);

        let services =
            Services { locator: locator.as_ref(), forecast: &forecast, notifier: &notifier };
        let line = i3blocks_weather_core::run(&options, &services, clicked).await?;

        println!("{line}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use i3blocks_weather_core::{ConfigError, Unit};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("i3blocks-weather").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn short_flags() {
        let cli = parse(&["-c", "-k", "KEY", "-a", "Oslo", "-r", "2"]);

        assert!(cli.celsius);
        assert!(!cli.farenheit);
        assert_eq!(cli.api_key.as_deref(), Some("KEY"));
        assert_eq!(cli.address.as_deref(), Some("Oslo"));
        assert_eq!(cli.precision, 2);
    }

    #[test]
    fn long_flags_and_alias() {
        let cli = parse(&["--farenheit", "--api-key", "KEY", "--precision", "1"]);
        assert!(cli.farenheit);

        let cli = parse(&["--fahrenheit", "--api-key", "KEY"]);
        assert!(cli.farenheit);
        assert_eq!(cli.precision, 0);
    }

    #[test]
    fn negative_precision_is_rejected() {
        let res = Cli::try_parse_from(["i3blocks-weather", "-f", "-k", "KEY", "-r", "-1"]);
        assert!(res.is_err());
    }

    #[test]
    fn flags_feed_validation() {
        let cli = parse(&["-f", "-c", "-k", "KEY"]);
        let err = Options::resolve(cli.flags(), &Config::default()).unwrap_err();
        assert_eq!(err, ConfigError::ConflictingUnits);

        let cli = parse(&["-k", "KEY"]);
        let err = Options::resolve(cli.flags(), &Config::default()).unwrap_err();
        assert_eq!(err, ConfigError::MissingUnit);

        let cli = parse(&["-c"]);
        let err = Options::resolve(cli.flags(), &Config::default()).unwrap_err();
        assert_eq!(err, ConfigError::MissingApiKey);

        let cli = parse(&["-c", "-k", "KEY", "-r", "18"]);
        let err = Options::resolve(cli.flags(), &Config::default()).unwrap_err();
        assert_eq!(err, ConfigError::PrecisionTooLarge(18));

        let cli = parse(&["-c", "-k", "KEY", "-l", "de"]);
        let opts = Options::resolve(cli.flags(), &Config::default()).unwrap();
        assert_eq!(opts.unit, Unit::Celsius);
        assert_eq!(opts.language, "de");
    }
}
