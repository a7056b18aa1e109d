//! Console progress reporting for streamed downloads.

use std::io::Write;

/// Receives a notification after each chunk of a transfer reaches disk.
pub trait ProgressSink {
    /// `index` counts chunks from 1. A `total` of `None` or `Some(0)` means the
    /// server did not announce a length.
    fn on_chunk(
        &mut self,
        index: u64,
        chunk_len: usize,
        total: Option<u64>,
    ) -> std::io::Result<()>;
}

/// Overwriting status line: `"\r 42.0% ( 420 / 1000 bytes)"`.
pub fn format_known(received: u64, total: u64) -> String {
    let percent = received as f64 * 100.0 / total as f64;
    let width = total.to_string().len();
    format!("\r{percent:5.1}% ({received:>width$} / {total} bytes)")
}

pub fn format_unknown(received: u64) -> String {
    format!("read {received}\n")
}

/// Writes progress for one transfer to `W`, normally stderr.
pub struct ConsoleProgress<W: Write> {
    out: W,
    received: u64,
    terminated: bool,
}

impl ConsoleProgress<std::io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            received: 0,
            terminated: false,
        }
    }

    pub fn received(&self) -> u64 {
        self.received
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressSink for ConsoleProgress<W> {
    fn on_chunk(
        &mut self,
        _index: u64,
        chunk_len: usize,
        total: Option<u64>,
    ) -> std::io::Result<()> {
        self.received += chunk_len as u64;

        match total.filter(|&t| t > 0) {
            Some(total) => {
                self.out.write_all(format_known(self.received, total).as_bytes())?;
                if self.received >= total && !self.terminated {
                    self.out.write_all(b"\n")?;
                    self.terminated = true;
                }
            }
            None => self
                .out
                .write_all(format_unknown(self.received).as_bytes())?,
        }

        self.out.flush()
    }
}

/// Counts bytes without printing anything.
#[derive(Debug, Default)]
pub struct SilentProgress {
    pub received: u64,
}

impl ProgressSink for SilentProgress {
    fn on_chunk(
        &mut self,
        _index: u64,
        chunk_len: usize,
        _total: Option<u64>,
    ) -> std::io::Result<()> {
        self.received += chunk_len as u64;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(chunks: &[usize], total: Option<u64>) -> String {
        let mut progress = ConsoleProgress::new(Vec::new());
        for (i, len) in chunks.iter().enumerate() {
            progress.on_chunk(i as u64 + 1, *len, total).unwrap();
        }
        String::from_utf8(progress.into_inner()).unwrap()
    }

    #[test]
    fn test_format_known() {
        assert_eq!(format_known(100, 1000), "\r 10.0% ( 100 / 1000 bytes)");
        assert_eq!(format_known(1000, 1000), "\r100.0% (1000 / 1000 bytes)");
        assert_eq!(format_known(1, 3), "\r 33.3% (1 / 3 bytes)");
    }

    #[test]
    fn test_ten_chunks_of_known_total() {
        let output = render(&[100; 10], Some(1000));

        let percents: Vec<&str> = output
            .split('\r')
            .filter(|s| !s.is_empty())
            .map(|s| s.split('%').next().unwrap().trim())
            .collect();
        assert_eq!(
            percents,
            vec!["10.0", "20.0", "30.0", "40.0", "50.0", "60.0", "70.0", "80.0", "90.0", "100.0"]
        );

        assert_eq!(output.matches('\n').count(), 1);
        assert!(output.ends_with("(1000 / 1000 bytes)\n"));
    }

    #[test]
    fn test_no_newline_before_completion() {
        let output = render(&[100; 9], Some(1000));
        assert!(!output.contains('\n'));
    }

    #[test]
    fn test_overshoot_terminates_once() {
        let output = render(&[600, 600, 10], Some(1000));
        assert_eq!(output.matches('\n').count(), 1);
        assert!(output.contains("(1200 / 1000 bytes)\n"));
    }

    #[test]
    fn test_unknown_total_reports_cumulative_bytes() {
        for total in [None, Some(0)] {
            let output = render(&[5, 0, 7, 3], total);
            assert_eq!(output, "read 5\nread 5\nread 12\nread 15\n");
            assert!(!output.contains('%'));
        }
    }

    #[test]
    fn test_silent_progress_counts() {
        let mut silent = SilentProgress::default();
        silent.on_chunk(1, 10, Some(20)).unwrap();
        silent.on_chunk(2, 10, Some(20)).unwrap();
        assert_eq!(silent.received, 20);
    }
}
