use std::io::{BufRead, Cursor, Error, ErrorKind, Read, Result, Write};

/// Terminal stand-in: scripted keyboard input, captured screen output.
#[derive(Clone, Debug, Default)]
pub struct MockConsole {
    input: Cursor<Vec<u8>>,
    output: Vec<u8>,
}

impl MockConsole {
    pub fn new() -> MockConsole {
        MockConsole::default()
    }

    /// Console whose input holds each entry of `lines` followed by a newline.
    pub fn with_lines(lines: &[&str]) -> MockConsole {
        let mut console = MockConsole::new();
        for line in lines {
            console.push_line(line);
        }
        console
    }

    pub fn push_line(&mut self, line: &str) {
        let avail = self.input.get_ref().len();
        if self.input.position() == avail as u64 {
            self.input = Cursor::new(Vec::new());
        }
        self.input.get_mut().extend(line.bytes());
        self.input.get_mut().push(b'\n');
    }

    /// Everything written so far, lossily decoded.
    pub fn screen(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

impl Read for MockConsole {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.input.read(buf)
    }
}

impl BufRead for MockConsole {
    fn fill_buf(&mut self) -> Result<&[u8]> {
        self.input.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.input.consume(amt)
    }
}

impl Write for MockConsole {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.output.write(buf)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Output sink that fails every write with the given kind.
#[derive(Clone, Debug)]
pub struct FailingConsole {
    kind: ErrorKind,
    message: &'static str,
}

impl FailingConsole {
    pub fn new(kind: ErrorKind, message: &'static str) -> FailingConsole {
        FailingConsole { kind, message }
    }
}

impl Write for FailingConsole {
    fn write(&mut self, _: &[u8]) -> Result<usize> {
        Err(Error::new(self.kind, self.message))
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_mock_console_read_lines() {
        let mut console = MockConsole::with_lines(&["1", "2"]);

        let mut line = String::new();
        console.read_line(&mut line).unwrap();
        assert_eq!(line, "1\n");

        line.clear();
        console.read_line(&mut line).unwrap();
        assert_eq!(line, "2\n");

        line.clear();
        assert_eq!(console.read_line(&mut line).unwrap(), 0);
    }

    #[test]
    fn test_mock_console_refill_after_drain() {
        let mut console = MockConsole::with_lines(&["0"]);
        let mut line = String::new();
        console.read_line(&mut line).unwrap();

        console.push_line("2");
        line.clear();
        console.read_line(&mut line).unwrap();

        assert_eq!(line, "2\n");
    }

    #[test]
    fn test_mock_console_screen() {
        let mut console = MockConsole::new();
        write!(console, "[I {}]", 0).unwrap();

        assert_eq!(console.screen(), "[I 0]");
    }

    #[test]
    fn test_failing_console_write() {
        let mut console = FailingConsole::new(ErrorKind::BrokenPipe, "Terminal went away");

        let error = console.write_all(b"abcd").unwrap_err();

        assert_eq!(error.kind(), ErrorKind::BrokenPipe);
        assert_eq!(error.to_string(), "Terminal went away");
    }
}
