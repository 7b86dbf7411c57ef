use std::fs::File;
use std::io::{self, BufRead, BufReader, Split};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// One roster line: the login user and the host (name or address).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRecord {
    pub user: String,
    pub host: String,
}

impl HostRecord {
    /// Login identity in `user@host` form.
    pub fn identity(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected `<user> <host>`, found {found} field(s)")]
pub struct ParseLineError {
    pub found: usize,
}

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to open roster {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read roster line {line}")]
    Io {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("Malformed roster line {line}: {content:?}")]
    Malformed {
        line: usize,
        content: String,
        #[source]
        source: ParseLineError,
    },
}

/// Split a roster line on whitespace. Tokens past the second are ignored.
pub fn parse_line(line: &str) -> Result<HostRecord, ParseLineError> {
    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next()) {
        (Some(user), Some(host)) => Ok(HostRecord {
            user: user.to_string(),
            host: host.to_string(),
        }),
        (Some(_), None) => Err(ParseLineError { found: 1 }),
        _ => Err(ParseLineError { found: 0 }),
    }
}

/// Lazy reader over a roster file. Yields one record per line, in file order.
///
/// Lines are split on raw `\n` bytes and decoded lossily, so bytes that are
/// not UTF-8 never stop the read. The file stays open until the iterator is
/// dropped.
pub struct Roster<R> {
    lines: Split<R>,
    line_no: usize,
}

impl Roster<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self, RosterError> {
        let file = File::open(path).map_err(|source| RosterError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> Roster<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            lines: reader.split(b'\n'),
            line_no: 0,
        }
    }
}

impl<R: BufRead> Iterator for Roster<R> {
    type Item = Result<HostRecord, RosterError>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.line_no += 1;
        let line_no = self.line_no;

        let item = match line {
            Ok(raw) => {
                let raw = raw.strip_suffix(b"\r").unwrap_or(&raw);
                let content = String::from_utf8_lossy(raw).into_owned();
                parse_line(&content).map_err(|source| RosterError::Malformed {
                    line: line_no,
                    content,
                    source,
                })
            }
            Err(source) => Err(RosterError::Io {
                line: line_no,
                source,
            }),
        };
        Some(item)
    }
}
