use std::{path::Path, time::Duration};

use console::style;
use indicatif::HumanDuration;
use m3_theme::{Role, SeedColors, ThemeTypes};

const STATUS_WIDTH: usize = 12;
/// Seed lines sit one indent step right of the status labels.
const SEED_WIDTH: usize = STATUS_WIDTH + 4;

pub fn status(label: &str, message: impl AsRef<str>) {
    eprintln!("{}", status_line(label, message.as_ref()));
}

/// `Generating <types> theme`, then one `role seed` line per seed.
pub fn generating(theme_types: ThemeTypes, seeds: &SeedColors) {
    status("Generating", format!("{theme_types} theme"));
    for (role, seed) in seeds.iter() {
        eprintln!("{}", seed_line(role, seed));
    }
}

pub fn finished(path: &Path, elapsed: Duration) {
    status("Finished", finished_message(path, elapsed));
}

pub fn overwriting(path: &Path) {
    warn(format!("overwriting {}", path.display()));
}

pub fn warn(message: impl AsRef<str>) {
    eprintln!("{}: {}", style("warning").yellow().bold(), message.as_ref());
}

pub fn error(message: impl AsRef<str>) {
    eprintln!("{}: {}", style("error").red().bold(), message.as_ref());
}

fn status_line(label: &str, message: &str) -> String {
    format!(
        "{:>width$} {}",
        style(label).green().bold(),
        message,
        width = STATUS_WIDTH
    )
}

fn seed_line(role: Role, seed: &str) -> String {
    format!(
        "{:>width$} {}",
        style(role.name()).cyan(),
        seed,
        width = SEED_WIDTH
    )
}

fn finished_message(path: &Path, elapsed: Duration) -> String {
    format!("{} in {}", path.display(), HumanDuration(elapsed))
}
