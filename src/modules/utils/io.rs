use std::io::{self, BufRead, Write};

/// Helper function to read a line from stdin
pub fn read_line() -> io::Result<String> {
    read_line_from(&mut io::stdin().lock())
}

/// Read one line from `reader` without the trailing newline.
///
/// End of input is reported as `UnexpectedEof` so callers can stop their loop.
pub fn read_line_from<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
    }
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

/// Print a prompt on the same line and read the answer
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    read_line()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_keeps_inner_whitespace() {
        let mut input = Cursor::new(" admin \r\nsecond\n");
        assert_eq!(read_line_from(&mut input).unwrap(), " admin ");
        assert_eq!(read_line_from(&mut input).unwrap(), "second");

        let err = read_line_from(&mut input).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
