use tbl::Result;

use std::io::{BufRead, Write};

/// Writes `message` and reads one line of input, trimmed.
///
/// Returns `None` once the input is exhausted.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<String>> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();

    if input.read_line(&mut line)? == 0 {
        log::debug!("End of input reached");
        return Ok(None);
    }

    return Ok(Some(line.trim().to_string()));
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    #[test]
    fn prompt_reads_lines_until_exhausted() {
        let mut input = Cursor::new("  first \nsecond\n\n");
        let mut output = vec![];

        assert_eq!(prompt(&mut input, &mut output, "a: ").unwrap(), Some("first".to_string()));
        assert_eq!(prompt(&mut input, &mut output, "b: ").unwrap(), Some("second".to_string()));
        assert_eq!(prompt(&mut input, &mut output, "c: ").unwrap(), Some(String::new()));
        assert_eq!(prompt(&mut input, &mut output, "d: ").unwrap(), None);

        assert_eq!(String::from_utf8(output).unwrap(), "a: b: c: d: ");
    }
}
