//! The line-oriented text configuration format.
//!
//! ```text
//! .device LCMXO2-1200HC
//!
//! .comment Part: LCMXO2-1200HC-4TG100C
//!
//! .tile R6C11:PLC
//! arc: A0 E1_H02W0701
//! word: SLICEA.K0.INIT 1010101010101010
//! enum: SLICEA.MODE LOGIC
//!
//! .tile PT4:CFG0
//! unknown: F5B30
//!
//! ```
//!
//! Tiles are written in name order and empty tiles are omitted. Within a tile,
//! arcs come first, then words (most-significant bit first), enums and raw
//! bits, each group sorted by name.

use crate::chip_config::{ChipConfig, TileConfig};
use mosaic_common::ContentHash;
use std::fmt;

/// An error in a text configuration, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {message}")]
pub struct TextConfigError {
    /// The line the error was found on.
    pub line: usize,
    /// What was wrong.
    pub message: String,
}

impl fmt::Display for TileConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (sink, source) in &self.arcs {
            writeln!(f, "arc: {sink} {source}")?;
        }
        for (name, bits) in &self.words {
            if bits.is_empty() {
                writeln!(f, "word: {name}")?;
                continue;
            }
            let text: String = bits.iter().rev().map(|&b| if b { '1' } else { '0' }).collect();
            writeln!(f, "word: {name} {text}")?;
        }
        for (name, value) in &self.enums {
            writeln!(f, "enum: {name} {value}")?;
        }
        for unknown in &self.unknowns {
            writeln!(f, "unknown: F{}B{}", unknown.frame, unknown.bit)?;
        }
        Ok(())
    }
}

impl fmt::Display for ChipConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ".device {}", self.device_name)?;
        writeln!(f)?;
        for meta in &self.metadata {
            writeln!(f, ".comment {meta}")?;
        }
        writeln!(f)?;
        for (name, tile) in &self.tiles {
            if tile.is_empty() {
                continue;
            }
            writeln!(f, ".tile {name}")?;
            write!(f, "{tile}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl ChipConfig {
    /// Renders the document in the text configuration format.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Hashes the rendered text, so two runs can be compared cheaply.
    pub fn content_hash(&self) -> ContentHash {
        ContentHash::from_bytes(self.to_text().as_bytes())
    }

    /// Parses a text configuration.
    pub fn from_text(text: &str) -> Result<ChipConfig, TextConfigError> {
        let mut config = ChipConfig::new();
        let mut current: Option<String> = None;

        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            // Comment text keeps its own spacing.
            let untrimmed = raw.trim_start().trim_end_matches('\r');
            let line = untrimmed.trim_end();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let err = |message: String| TextConfigError {
                line: line_no,
                message,
            };

            if let Some(rest) = line.strip_prefix('.') {
                let (directive, arg) = rest.split_once(' ').unwrap_or((rest, ""));
                match directive {
                    "device" => config.device_name = arg.trim().to_string(),
                    "comment" => {
                        let text = &untrimmed[".comment".len()..];
                        config.metadata.push(text.strip_prefix(' ').unwrap_or(text).to_string());
                    }
                    "tile" => {
                        let name = arg.trim();
                        if name.is_empty() {
                            return Err(err("'.tile' needs a tile name".to_string()));
                        }
                        config.tile_mut(name);
                        current = Some(name.to_string());
                    }
                    other => return Err(err(format!("unknown directive '.{other}'"))),
                }
                continue;
            }

            let (kind, body) = line
                .split_once(':')
                .ok_or_else(|| err(format!("expected '<kind>: ...', found '{line}'")))?;
            let tile_name = current
                .as_deref()
                .ok_or_else(|| err(format!("'{kind}' outside of a '.tile' block")))?;
            let mut fields = body.split_whitespace();
            let (first, second) = (fields.next(), fields.next());
            if fields.next().is_some() {
                return Err(err(format!("too many fields in '{line}'")));
            }
            let tile = config.tile_mut(tile_name);

            match (kind, first, second) {
                ("arc", Some(sink), Some(source)) => tile.add_arc(sink, source),
                ("word", Some(name), Some(bits)) => tile.add_word(name, parse_word_bits(bits).map_err(err)?),
                ("word", Some(name), None) => tile.add_word(name, Vec::new()),
                ("enum", Some(name), Some(value)) => tile.add_enum(name, value),
                ("unknown", Some(bit), None) => {
                    let (frame, bit) = parse_unknown(bit).map_err(err)?;
                    tile.add_unknown(frame, bit);
                }
                ("arc" | "word" | "enum" | "unknown", _, _) => {
                    return Err(err(format!("wrong number of fields in '{line}'")));
                }
                (other, _, _) => return Err(err(format!("unknown feature kind '{other}'"))),
            }
        }

        Ok(config)
    }
}

/// Decodes an MSB-first bit string into LSB-first bits.
fn parse_word_bits(text: &str) -> Result<Vec<bool>, String> {
    text.chars()
        .rev()
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(format!("invalid bit '{c}' in word value '{text}'")),
        })
        .collect()
}

/// Decodes `F<frame>B<bit>`.
fn parse_unknown(text: &str) -> Result<(u32, u32), String> {
    let malformed = || format!("expected F<frame>B<bit>, found '{text}'");
    let rest = text.strip_prefix('F').ok_or_else(malformed)?;
    let (frame, bit) = rest.split_once('B').ok_or_else(malformed)?;
    let frame = frame.parse().map_err(|_| malformed())?;
    let bit = bit.parse().map_err(|_| malformed())?;
    Ok((frame, bit))
}
