use thiserror::Error;

pub type CsvToolResult<T> = Result<T, CsvToolError>;

#[derive(Error, Debug)]
pub enum CsvToolError {
    #[error("ERR : IO Error =\n{0}")]
    Io(IoErrorWithMeta),
    #[error("ERR : Failed to parse csv =\n{0}")]
    Parse(String),
    #[error("ERR : Row is incomplete =\n{0}")]
    Validation(String),
    #[error("ERR : Row index {index} is out of range ( row count : {len} )")]
    OutOfRange { index: usize, len: usize },
    #[error("ERR : Invalid column =\n{0}")]
    InvalidColumn(String),
    #[error("ERR : Invalid command =\n{0}")]
    Command(String),
    #[error("ERR : Import #{ticket} was superseded by import #{current}")]
    Stale { ticket: u64, current: u64 },
}

impl CsvToolError {
    pub fn io_error(err: std::io::Error, meta: &str) -> Self {
        Self::Io(IoErrorWithMeta::new(err, meta))
    }

    pub(crate) fn from_csv(err: csv::Error) -> Self {
        match err.position() {
            Some(pos) => Self::Parse(format!("line {} : {}", pos.line(), err)),
            None => Self::Parse(err.to_string()),
        }
    }
}

pub struct IoErrorWithMeta {
    error: std::io::Error,
    meta: String,
}

impl IoErrorWithMeta {
    pub fn new(error: std::io::Error, meta: &str) -> Self {
        Self {
            error,
            meta: meta.to_owned(),
        }
    }

    pub fn kind(&self) -> std::io::ErrorKind {
        self.error.kind()
    }
}

impl std::fmt::Debug for IoErrorWithMeta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} :: {}", self.error, self.meta)
    }
}

impl std::fmt::Display for IoErrorWithMeta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} :: {}", self.error, self.meta)
    }
}
