//! Subcommand execution: load config and holidays, run one operation, print.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use tracing::{debug, info_span};

use workdays::calc::{DateCalculator, Request};
use workdays::config::{WorkdaysConfig, DEFAULT_CONFIG_PATH};
use workdays::time::{Date, FileStorage, HolidayStore, Settings};

use crate::cli::{Cli, Command, HolidayCommand};

type Store = HolidayStore<FileStorage>;

/// Run the command selected on the command line.
pub fn run(cli: Cli) -> Result<()> {
    let Cli {
        config,
        holidays,
        today,
        command,
        ..
    } = cli;

    let config = match config {
        Some(path) => WorkdaysConfig::load(&path, true)?,
        None => WorkdaysConfig::load(&PathBuf::from(DEFAULT_CONFIG_PATH), false)?,
    };

    let mut settings = config.settings()?;
    if let Some(today) = today {
        settings.set_evaluation_date(Date::parse(&today).map_err(invalid_input)?);
    }

    let path = holidays.unwrap_or_else(|| config.holidays_file.clone());
    let mut store = HolidayStore::open(FileStorage::new(path));
    if let Some((from, to)) = config.weekend_seed()? {
        store.seed_weekends(from, to, &config.weekends.label)?;
    }

    match command {
        Command::Until { target } => {
            calculate(&store, &config, &settings, Request::Countdown { target })
        }
        Command::Shift { offset, from } => {
            calculate(&store, &config, &settings, Request::Shift { offset, from })
        }
        Command::Span { start, end } => {
            calculate(&store, &config, &settings, Request::Span { start, end })
        }
        Command::Holiday(cmd) => holiday(&mut store, cmd),
    }
}

fn calculate(
    store: &Store,
    config: &WorkdaysConfig,
    settings: &Settings,
    request: Request,
) -> Result<()> {
    let _cmd = info_span!("calculate").entered();
    let calc = DateCalculator::with_policy(store.holidays(), config.policy);
    let result = calc.evaluate(settings, &request).map_err(invalid_input)?;
    println!("{result}");
    Ok(())
}

fn holiday(store: &mut Store, cmd: HolidayCommand) -> Result<()> {
    let _cmd = info_span!("holiday").entered();
    match cmd {
        HolidayCommand::Add { date, label } => {
            let date = Date::parse(&date).map_err(invalid_input)?;
            match store.add(date, &label).map_err(invalid_input)? {
                Some(previous) if previous != label => {
                    println!("{date} marked as holiday: {label} (was: {previous})")
                }
                _ => println!("{date} marked as holiday: {label}"),
            }
        }
        HolidayCommand::Remove { date } => {
            let date = Date::parse(&date).map_err(invalid_input)?;
            match store.remove(date) {
                Some(label) => println!("{date} is no longer a holiday (was: {label})"),
                None => println!("{date} is not a holiday, nothing removed"),
            }
        }
        HolidayCommand::List { year } => {
            let holidays = store.holidays();
            let listed: Vec<_> = match year {
                Some(y) => holidays.in_year(y).collect(),
                None => holidays.iter().collect(),
            };
            debug!(count = listed.len(), "listing holidays");
            if listed.is_empty() {
                println!("no holidays");
            }
            for (date, label) in listed {
                println!("{date} {} {label}", date.weekday().short_name());
            }
        }
        HolidayCommand::Weekends { from, to, label } => {
            let from = Date::parse(&from).map_err(invalid_input)?;
            let to = Date::parse(&to).map_err(invalid_input)?;
            let added = store
                .mark_weekends(from, to, &label)
                .map_err(invalid_input)?;
            println!("{added} weekend days marked between {from} and {to}");
        }
    }
    Ok(())
}

fn invalid_input(e: workdays::core::Error) -> anyhow::Error {
    anyhow!("invalid input: {e}")
}
