use std::fs;
use std::io;
use std::path::Path;

/// Write the result log, one entry per line, replacing any previous file.
pub fn save_results<P: AsRef<Path>>(path: P, results: &[String]) -> io::Result<()> {
    let mut content = results.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    fs::write(path, content)
}
