use std::{fmt, process::ExitCode, str::FromStr};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Select, Text};
use weather_core::{Config, DisplayUnit, OpenWeatherClient, StaticCredential, WeatherSession};

use crate::{credentials, render};

type Session = WeatherSession<OpenWeatherClient, StaticCredential>;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for a city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key and the default temperature unit.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, e.g. "London" or "Tokyo".
        city: String,

        /// Temperature unit; defaults to the configured one.
        #[arg(long, value_parser = DisplayUnit::from_str)]
        unit: Option<DisplayUnit>,
    },

    /// Look up cities one after another and switch units on demand.
    Interactive {
        /// Initial temperature unit; defaults to the configured one.
        #[arg(long, value_parser = DisplayUnit::from_str)]
        unit: Option<DisplayUnit>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<ExitCode> {
        let mut config = Config::load_or_default();

        match self.command {
            Command::Configure => {
                configure(&mut config)?;
                Ok(ExitCode::SUCCESS)
            }
            Command::Show { city, unit } => {
                let credentials = credentials::resolve(&mut config, false)?;
                let unit = unit.unwrap_or(config.default_unit);
                let mut session = Session::new(OpenWeatherClient::new(), credentials, unit);

                match session.lookup(&city).await {
                    Ok(view) => {
                        render::print_view(&view)?;
                        Ok(ExitCode::SUCCESS)
                    }
                    Err(err) => {
                        render::print_error(&err)?;
                        Ok(ExitCode::FAILURE)
                    }
                }
            }
            Command::Interactive { unit } => {
                let credentials = credentials::resolve(&mut config, true)?;
                let unit = unit.unwrap_or(config.default_unit);
                let session = Session::new(OpenWeatherClient::new(), credentials, unit);

                interactive(session).await?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

fn configure(config: &mut Config) -> Result<()> {
    if let Some(key) = credentials::prompt_api_key()? {
        config.set_api_key(key);
    } else if config.usable_api_key().is_none() {
        anyhow::bail!("No API key entered; configuration left unchanged.");
    }

    let units = DisplayUnit::all().to_vec();
    let start = units.iter().position(|u| *u == config.default_unit).unwrap_or(0);
    config.default_unit = Select::new("Default temperature unit:", units)
        .with_starting_cursor(start)
        .prompt()
        .context("Failed to read default unit")?;

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());
    Ok(())
}

enum Action {
    Toggle(String),
    Another,
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Toggle(label) => f.write_str(label),
            Action::Another => f.write_str("Look up another city"),
            Action::Quit => f.write_str("Quit"),
        }
    }
}

/// Prompt-driven event loop. Each lookup is awaited before the next prompt.
async fn interactive(mut session: Session) -> Result<()> {
    loop {
        let city = match Text::new("Enter city name:")
            .with_placeholder("e.g., London, Tokyo, Mumbai")
            .prompt()
        {
            Ok(city) => city,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(());
            }
            Err(e) => return Err(e).context("Failed to read city name"),
        };

        match session.lookup(&city).await {
            Ok(view) => render::print_view(&view)?,
            Err(err) => {
                render::print_error(&err)?;
                continue;
            }
        }

        loop {
            let actions = vec![
                Action::Toggle(session.state().unit().toggle_label()),
                Action::Another,
                Action::Quit,
            ];

            match Select::new("What next?", actions).prompt() {
                Ok(Action::Toggle(_)) => render::print_view(&session.toggle_unit())?,
                Ok(Action::Another) => break,
                Ok(Action::Quit)
                | Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    return Ok(());
                }
                Err(e) => return Err(e).context("Failed to read action"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_parses_unit_names_and_short_forms() {
        let cli = Cli::try_parse_from(["weather", "show", "Paris", "--unit", "celsius"])
            .expect("args should parse");
        match cli.command {
            Command::Show { city, unit } => {
                assert_eq!(city, "Paris");
                assert_eq!(unit, Some(DisplayUnit::Celsius));
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::try_parse_from(["weather", "interactive", "--unit", "F"])
            .expect("args should parse");
        assert!(matches!(
            cli.command,
            Command::Interactive { unit: Some(DisplayUnit::Fahrenheit) }
        ));
    }

    #[test]
    fn unit_is_optional() {
        let cli = Cli::try_parse_from(["weather", "show", "Oslo"]).expect("args should parse");
        assert!(matches!(cli.command, Command::Show { unit: None, .. }));
    }

    #[test]
    fn unknown_unit_is_rejected() {
        let err = Cli::try_parse_from(["weather", "show", "Oslo", "--unit", "kelvin"]).unwrap_err();
        assert!(err.to_string().contains("Unknown unit"));
    }
}
