// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Players setup.
use ahash::AHashSet;
use anyhow::{Result, bail};
use std::io::{BufRead, Write};

use showdown_bot::NICKNAMES;
use showdown_core::{poker::Chips, table::Seat};

/// Writes a prompt and reads the answer line.
pub fn prompt<R, W>(input: &mut R, out: &mut W, text: &str) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("Input closed");
    }

    Ok(line.trim().to_string())
}

/// Asks for the number of players, their names and their chips.
pub fn read_seats<R, W>(input: &mut R, out: &mut W, min: usize, max: usize) -> Result<Vec<Seat>>
where
    R: BufRead,
    W: Write,
{
    let count = loop {
        let line = prompt(input, out, &format!("How many players? ({min}-{max}) "))?;
        match line.parse::<usize>() {
            Ok(n) if (min..=max).contains(&n) => break n,
            Ok(_) => writeln!(out, "Players must be between {min} and {max}")?,
            Err(_) => writeln!(out, "Invalid input. Please try again.")?,
        }
    };

    writeln!(out)?;

    let mut names = Vec::with_capacity(count);
    let mut taken = AHashSet::new();
    for idx in 0..count {
        loop {
            let name = prompt(input, out, &format!("Player {} name? ", idx + 1))?;
            if name.is_empty() {
                writeln!(out, "Name cannot be empty. Please try again.")?;
            } else if !taken.insert(name.clone()) {
                writeln!(out, "Name already taken. Please try again.")?;
            } else {
                names.push(name);
                break;
            }
        }
    }

    writeln!(out)?;

    let mut seats = Vec::with_capacity(count);
    for name in names {
        let chips = loop {
            let line = prompt(input, out, &format!("How many chips for {name}? "))?;
            match line.parse::<u32>() {
                Ok(0) => writeln!(out, "Chips must be greater than 0.")?,
                Ok(chips) => break Chips::new(chips),
                Err(_) => writeln!(out, "Invalid input. Please try again.")?,
            }
        };

        seats.push(Seat::new(name, chips));
    }

    writeln!(out)?;
    Ok(seats)
}

/// Names for the bots that do not clash with the human players.
pub fn bot_names(humans: &[String], count: usize) -> Vec<String> {
    let named = NICKNAMES
        .iter()
        .map(|name| name.to_string())
        .filter(|name| !humans.contains(name));

    let numbered = (1..).map(|n| format!("Bot {n}")).filter(|name| !humans.contains(name));

    named.chain(numbered).take(count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_seats_retries_invalid_input() {
        let mut input = Cursor::new("2\nmany\n3\nAlice\n\nAlice\nBob\nCarol\n0\n500\nlots\n700\n900\n");
        let mut out = Vec::new();

        let seats = read_seats(&mut input, &mut out, 3, 8).unwrap();
        assert_eq!(
            seats,
            vec![
                Seat::new("Alice", Chips::new(500)),
                Seat::new("Bob", Chips::new(700)),
                Seat::new("Carol", Chips::new(900)),
            ]
        );

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Players must be between 3 and 8"));
        assert!(out.contains("Name cannot be empty"));
        assert!(out.contains("Name already taken"));
        assert!(out.contains("Chips must be greater than 0."));
        assert_eq!(out.matches("Invalid input").count(), 2);
    }

    #[test]
    fn read_seats_closed_input() {
        let mut input = Cursor::new("3\nAlice\n");
        let mut out = Vec::new();
        assert!(read_seats(&mut input, &mut out, 3, 8).is_err());
    }

    #[test]
    fn bot_names_skip_humans() {
        let humans = vec!["Alice".to_string(), "Carol".to_string()];
        assert_eq!(bot_names(&humans, 3), vec!["Bob", "Dave", "Erin"]);
        assert_eq!(bot_names(&[], 10).last().map(String::as_str), Some("Bot 2"));
    }
}
