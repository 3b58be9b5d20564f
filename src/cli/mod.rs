mod calendar;
mod day;
mod week;

pub use calendar::calendar;
pub use day::day;
pub use week::week;

use std::{fmt::Display, io::Write};

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

fn print<T: Serialize>(format: Format, view: &T, text: impl Display) -> Result<()> {
    let mut stdout = std::io::stdout().lock();

    match format {
        Format::Text => write!(stdout, "{text}")?,
        Format::Json => writeln!(stdout, "{}", mealprep::render::json(view)?)?,
    }

    Ok(())
}
