use std::fs;
use std::io::Result;
use std::path::Path;

/// Block of text displayed by a demonstration: a label line plus the body.
///
/// The body is loaded once and never mutated afterwards, so passages are
/// freely shared by reference across the demonstration threads.
#[readonly::make]
#[derive(Clone, Debug)]
pub struct Passage {
    /// Label line printed immediately before the body.
    ///
    /// This field is read-only; writing to its value will not compile.
    #[readonly]
    pub title: String,

    /// Full text of the passage.
    ///
    /// This field is read-only; writing to its value will not compile.
    #[readonly]
    pub body: String,
}

impl Passage {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Passage {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Reads the passage body from a file.
    pub fn load(title: &str, path: impl AsRef<Path>) -> Result<Self> {
        let body = fs::read_to_string(path)?;
        Ok(Passage::new(title, body))
    }
}
