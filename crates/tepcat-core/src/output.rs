use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;

use crate::error::Result;

const INDENT: &[u8] = b"    ";

/// JSON with four-space indentation, keys in declaration order.
pub fn render_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Write already-rendered output to `path`, replacing any existing file.
pub fn export(text: &str, path: &Path) -> Result<()> {
    std::fs::write(path, text)?;
    info!(path = %path.display(), bytes = text.len(), "exported dataset");
    Ok(())
}
