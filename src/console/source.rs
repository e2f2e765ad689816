use std::io::{self, BufRead, BufReader, Cursor, Read, Stdin};

/// Something a [`Console`](super::Console) can read lines from.
pub trait LineSource {
    /// Append the next line, terminator included, to `buf`.
    ///
    /// Returns the number of bytes read; `0` means the source is exhausted.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;

    /// Whether this is the process standard input, the only source that
    /// supports reading with echo turned off.
    fn is_stdin(&self) -> bool {
        false
    }
}

impl LineSource for Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        self.lock().read_line(buf)
    }

    fn is_stdin(&self) -> bool {
        true
    }
}

impl<R: Read> LineSource for BufReader<R> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl LineSource for &[u8] {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl<S: LineSource + ?Sized> LineSource for Box<S> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        (**self).read_line(buf)
    }

    fn is_stdin(&self) -> bool {
        (**self).is_stdin()
    }
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        (**self).read_line(buf)
    }

    fn is_stdin(&self) -> bool {
        (**self).is_stdin()
    }
}

/// Read one line that must end in `\n`.
///
/// Running out of input before the terminator, with or without partial data,
/// is reported as `UnexpectedEof`.
pub(crate) fn read_terminated_line<S: LineSource + ?Sized>(source: &mut S) -> io::Result<String> {
    let mut line = String::new();
    source.read_line(&mut line)?;
    if !line.ends_with('\n') {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before a line terminator",
        ));
    }
    Ok(line)
}
