//! Wordlist serialization
//!
//! Writes the frequency cache either as a plain wordlist (one word per
//! line, no counts) or as a JSON object mapping each word to its count.

use crate::storage::WordStore;
use crate::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Serialization format of the final wordlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One word per line, sorted
    #[default]
    Plain,
    /// `{"word": count, ...}` with sorted keys
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Plain
        }
    }
}

/// Writes the wordlist in the given format to any writer
///
/// # Example
///
/// ```
/// use skweez::output::{write_wordlist, OutputFormat};
/// use skweez::{FrequencyCache, WordStore};
///
/// let cache = FrequencyCache::new();
/// cache.increment("word");
/// cache.increment("word");
///
/// let mut out = Vec::new();
/// write_wordlist(&cache, OutputFormat::Json, &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "{\"word\":2}\n");
/// ```
pub fn write_wordlist<S, W>(store: &S, format: OutputFormat, mut writer: W) -> Result<()>
where
    S: WordStore + ?Sized,
    W: Write,
{
    match format {
        OutputFormat::Plain => {
            for word in store.words() {
                writeln!(writer, "{}", word)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut writer, &store.snapshot())?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Writes the wordlist to `path`, or to stdout when no path is given
///
/// The file is created or truncated. Failing to open or write it is an
/// error the caller should treat as fatal.
pub fn emit<S>(store: &S, format: OutputFormat, path: Option<&Path>) -> Result<()>
where
    S: WordStore + ?Sized,
{
    match path {
        Some(path) => {
            let file = File::create(path)?;
            write_wordlist(store, format, BufWriter::new(file))?;
            tracing::info!("Wrote {} words to {}", store.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            write_wordlist(store, format, stdout.lock())?;
        }
    }
    Ok(())
}
