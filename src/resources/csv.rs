//! Reader for `;`-separated float files.
//!
//! Every line holds any number of floats separated by `;` (and optional
//! whitespace). Lines carry no meaning: all floats end up in one flat buffer
//! in file order, and the caller decides how to group them into vertices.
//!
//! Each value is read as the longest decimal number at the current position,
//! so `0.5f` yields `0.5`. Reading a line stops at the first position that
//! doesn't start a number (text, an empty field, a value glued to a
//! number) and at the first value that isn't finite.

use std::path::Path;

use anyhow::Context;

pub const SEPARATOR: char = ';';

/// Parse the text of a CSV file into a flat float buffer.
///
/// Floats read before a malformed value are kept and parsing resumes on the
/// next line.
pub fn parse_csv(text: &str) -> Vec<f32> {
    let mut floats = Vec::new();
    for (line_idx, line) in text.lines().enumerate() {
        parse_line(line, line_idx + 1, &mut floats);
    }
    floats
}

fn parse_line(line: &str, line_number: usize, out: &mut Vec<f32>) {
    let mut rest = line.trim_start();
    while !rest.is_empty() {
        let len = number_prefix_len(rest);
        if len == 0 {
            log::warn!(
                "Expected a float at {rest:?} on line {line_number}, ignoring the rest of the line."
            );
            return;
        }

        let (number, tail) = rest.split_at(len);
        match number.parse::<f32>() {
            Ok(value) if value.is_finite() => out.push(value),
            _ => {
                log::warn!(
                    "{number:?} on line {line_number} is not a finite float, ignoring the rest of the line."
                );
                return;
            }
        }

        rest = tail.trim_start();
        if let Some(after) = rest.strip_prefix(SEPARATOR) {
            rest = after.trim_start();
        }
    }
}

/// Length of the decimal number at the start of `s`:
/// `[+-]digits[.digits][(e|E)[+-]digits]`, with at least one mantissa digit.
/// An exponent marker without digits is not part of the number.
fn number_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    end
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Read and parse a CSV file.
///
/// Fails if the file cannot be opened; malformed content never fails.
pub fn read_csv_file(path: impl AsRef<Path>) -> anyhow::Result<Vec<f32>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Could not open file {}", path.display()))?;
    Ok(parse_csv(&text))
}
