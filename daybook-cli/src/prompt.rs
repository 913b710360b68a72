//! Interactive fallback for the three conversion inputs.

use anyhow::{bail, Result};
use std::io::{self, Write};
use std::path::PathBuf;

pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 2020..=2030;

fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush().ok();
    let mut s = String::new();
    if io::stdin().read_line(&mut s)? == 0 {
        bail!("no input for '{label}'");
    }
    Ok(s.trim().to_string())
}

/// Ask until `parse` accepts the answer. A blank answer aborts.
fn prompt_until<T>(label: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T> {
    loop {
        let s = prompt(label)?;
        if s.is_empty() {
            bail!("no value entered for '{label}'");
        }
        match parse(&s) {
            Some(v) => return Ok(v),
            None => println!("  '{s}' is not valid, try again"),
        }
    }
}

pub fn parse_month(s: &str) -> Option<u32> {
    s.trim().parse().ok().filter(|m| (1..=12).contains(m))
}

pub fn parse_year(s: &str) -> Option<i32> {
    s.trim().parse().ok().filter(|y| YEAR_RANGE.contains(y))
}

pub fn parse_input_path(s: &str) -> Option<PathBuf> {
    let s = s.trim().trim_matches(|c: char| c == '"' || c == '\'');
    (!s.is_empty()).then(|| PathBuf::from(s))
}

pub fn input_path() -> Result<PathBuf> {
    prompt_until("Shopify order export (CSV path)", parse_input_path)
}

pub fn month() -> Result<u32> {
    prompt_until("Month (1-12)", parse_month)
}

pub fn year(hint: i32) -> Result<i32> {
    prompt_until(&format!("Year (e.g. {hint})"), parse_year)
}
