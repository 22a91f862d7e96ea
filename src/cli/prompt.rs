//! Line-oriented prompt helpers for the menu loop.
//!
//! Every helper returns `Ok(None)` when input has ended, so the caller can
//! wind the session down instead of spinning on a closed stream. Malformed
//! input is reported and re-prompted, never fatal.

use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

use roster::Name;

use super::terminal::Colorize;

/// Reads one line, trimmed, returning `None` at end of input.
pub fn read_line(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompts with `label` until the input parses as a `T`.
///
/// # Errors
///
/// Fails only on I/O errors; parse failures are reported to the user and
/// re-prompted.
pub fn parsed<T: FromStr>(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    label: &str,
) -> io::Result<Option<T>> {
    loop {
        write!(writer, "{label}: ")?;
        writer.flush()?;
        let Some(line) = read_line(reader)? else {
            return Ok(None);
        };
        if let Ok(value) = line.parse() {
            return Ok(Some(value));
        }
        writeln!(writer, "{}", "Invalid input. Try again.".error())?;
    }
}

/// Prompts for a non-empty employee name.
///
/// # Errors
///
/// Fails only on I/O errors; an empty name is reported and re-prompted.
pub fn name(reader: &mut impl BufRead, writer: &mut impl Write) -> io::Result<Option<Name>> {
    loop {
        write!(writer, "Name: ")?;
        writer.flush()?;
        let Some(line) = read_line(reader)? else {
            return Ok(None);
        };
        match Name::new(line) {
            Ok(name) => return Ok(Some(name)),
            Err(error) => writeln!(writer, "{}", error.to_string().error())?,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn read_line_trims_surrounding_whitespace() {
        let mut input = Cursor::new(b"  hello world \n".as_slice());
        assert_eq!(
            read_line(&mut input).unwrap(),
            Some("hello world".to_string())
        );
    }

    #[test]
    fn read_line_returns_none_at_eof() {
        let mut input = Cursor::new(b"".as_slice());
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn parsed_accepts_first_valid_input() {
        let mut input = Cursor::new(b"42\n".as_slice());
        let mut output = Vec::new();
        let value: Option<i64> = parsed(&mut input, &mut output, "Value").unwrap();
        assert_eq!(value, Some(42));
    }

    #[test]
    fn parsed_reprompts_on_malformed_input() {
        let mut input = Cursor::new(b"abc\n\n42\n".as_slice());
        let mut output = Vec::new();
        let value: Option<i64> = parsed(&mut input, &mut output, "Value").unwrap();
        assert_eq!(value, Some(42));

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Invalid input. Try again.").count(), 2);
    }

    #[test]
    fn parsed_returns_none_when_input_ends_mid_prompt() {
        let mut input = Cursor::new(b"abc\n".as_slice());
        let mut output = Vec::new();
        let value: Option<i64> = parsed(&mut input, &mut output, "Value").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn name_rejects_blank_then_accepts() {
        let mut input = Cursor::new(b"   \nAnn Smith\n".as_slice());
        let mut output = Vec::new();
        let name = name(&mut input, &mut output).unwrap().unwrap();
        assert_eq!(name.as_str(), "Ann Smith");

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("employee name must not be empty"));
    }
}
