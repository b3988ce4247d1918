use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// SQL text plus the name diagnostics should show for it.
#[derive(Debug, PartialEq, Eq)]
pub struct SqlSource {
    /// `None` for inline text.
    pub name: Option<String>,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("SQL is required: use a positional SOURCE, \"-\" for stdin, or -e/--sql")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),

    #[error("failed to read '{}': {source}", path.display())]
    File { path: PathBuf, source: io::Error },
}

pub fn load_sql_source(
    sql_path: Option<&Path>,
    sql_text: Option<&str>,
) -> Result<SqlSource, SourceError> {
    if let Some(text) = sql_text {
        return Ok(SqlSource {
            name: None,
            text: text.to_string(),
        });
    }

    match sql_path {
        Some(path) if path.as_os_str() == "-" => load_stdin(),
        Some(path) => load_file(path),
        None => Err(SourceError::Missing),
    }
}

fn load_stdin() -> Result<SqlSource, SourceError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(SourceError::Stdin)?;
    Ok(SqlSource {
        name: Some("<stdin>".to_string()),
        text: buf,
    })
}

fn load_file(path: &Path) -> Result<SqlSource, SourceError> {
    let text = fs::read_to_string(path).map_err(|source| SourceError::File {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SqlSource {
        name: Some(path.to_string_lossy().into_owned()),
        text,
    })
}
