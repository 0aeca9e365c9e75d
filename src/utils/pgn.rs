//! PGN export for selected starting positions.
//!
//! Non-standard starting positions travel in PGN through the `SetUp`/`FEN`
//! header pair; this module writes a game skeleton carrying those headers
//! and reads the headers back so hosts can recover the position from an
//! exported file.

use std::collections::BTreeMap;

use chrono::Utc;

use crate::setup::start_position::StartPosition;

/// Write a PGN game skeleton for the given selection: the seven-tag roster,
/// the `SetUp`/`FEN` pair, and an empty movetext terminated by `*`.
pub fn write_setup_pgn(position: &StartPosition, selection: usize) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Shuffle Chess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), Utc::now().format("%Y.%m.%d").to_string());
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), "*".to_owned());
    headers.insert("Variant".to_owned(), format!("Shuffle Chess #{selection}"));

    // Every shuffled start is a non-standard position, so the SetUp/FEN
    // pair is always present.
    headers.insert("SetUp".to_owned(), "1".to_owned());
    headers.insert("FEN".to_owned(), position.get_fen());

    write_setup_pgn_with_headers(&headers)
}

pub fn write_setup_pgn_with_headers(headers: &BTreeMap<String, String>) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let result = headers.get("Result").map(String::as_str).unwrap_or("*");
    out.push_str(result);
    out.push('\n');

    out
}

/// Collect the header tag pairs from a PGN skeleton.
pub fn read_setup_headers(pgn: &str) -> Result<BTreeMap<String, String>, String> {
    let mut headers = BTreeMap::new();

    for line in pgn.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || !trimmed.starts_with('[') {
            continue;
        }
        let (key, value) = parse_header_line(trimmed)?;
        headers.insert(key, value);
    }

    Ok(headers)
}

/// Rebuild the starting position from a PGN skeleton's headers.
pub fn read_setup_position(pgn: &str) -> Result<StartPosition, String> {
    let headers = read_setup_headers(pgn)?;

    if headers.get("SetUp").map(|x| x.as_str()) != Some("1") {
        return Err("PGN is missing the SetUp=1 header".to_owned());
    }
    let fen = headers
        .get("FEN")
        .ok_or("PGN SetUp=1 is present but FEN header is missing")?;

    StartPosition::from_fen(fen)
}

fn parse_header_line(line: &str) -> Result<(String, String), String> {
    if !line.starts_with('[') || !line.ends_with(']') {
        return Err(format!("Invalid PGN header line: {line}"));
    }
    let inner = &line[1..line.len() - 1];
    let mut parts = inner.splitn(2, ' ');
    let key = parts
        .next()
        .ok_or_else(|| format!("Invalid PGN header key: {line}"))?
        .trim();
    let value_raw = parts
        .next()
        .ok_or_else(|| format!("Invalid PGN header value: {line}"))?
        .trim();

    if !value_raw.starts_with('"') || !value_raw.ends_with('"') || value_raw.len() < 2 {
        return Err(format!("Invalid quoted PGN header value: {line}"));
    }
    let value = value_raw[1..value_raw.len() - 1].replace("\\\"", "\"");
    Ok((key.to_owned(), value))
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('"', "\\\"")
}
