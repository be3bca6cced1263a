// ============================================================
// Layer 4 — Line Cleaner
// ============================================================
// Turns one raw line of a data file into the "text" value of
// a dataset row.
//
// Data files end every sample with an end marker:
//
//   ( [ ] ) { } END
//
// Cleaning steps (applied in order):
//   1. Remove every occurrence of the end-marker token
//   2. Remove line terminators (\n, and \r from CRLF files)
//   3. Trim leading/trailing whitespace
//
// Whether blank results become rows is decided by the loader,
// not here.

/// Token that terminates each sample in the data files
pub const END_MARKER: &str = "END";

pub struct LineCleaner {
    end_marker: String,
}

impl LineCleaner {
    /// Create a LineCleaner that strips the standard `END` marker
    pub fn new() -> Self {
        Self::with_marker(END_MARKER)
    }

    /// Create a LineCleaner for a different end-marker token
    pub fn with_marker(end_marker: impl Into<String>) -> Self {
        Self { end_marker: end_marker.into() }
    }

    /// Clean a single line.
    pub fn clean(&self, line: &str) -> String {
        let without_marker = if self.end_marker.is_empty() {
            line.to_string()
        } else {
            line.replace(&self.end_marker, "")
        };

        without_marker
            .replace(['\n', '\r'], "")
            .trim()
            .to_string()
    }

    /// Clean every line of a file's contents.
    ///
    /// "\r\n", "\r" and "\n" each end a line. A missing final line
    /// ending still yields the last line, and an empty file yields no lines.
    pub fn clean_lines(&self, contents: &str) -> Vec<String> {
        let normalised = contents.replace("\r\n", "\n");
        let mut lines: Vec<&str> = normalised.split(['\n', '\r']).collect();

        // A trailing line ending leaves one empty piece behind
        if lines.last() == Some(&"") {
            lines.pop();
        }

        lines.into_iter().map(|line| self.clean(line)).collect()
    }
}

impl Default for LineCleaner {
    fn default() -> Self {
        Self::new()
    }
}
