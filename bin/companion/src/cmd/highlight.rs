//! Highlight command - print highlighter output for a file

use std::{io::Read, path::Path};

use color_eyre::eyre::{Result, WrapErr};

/// Read `path`, or stdin when it is `-`.
fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .wrap_err("reading stdin")?;
        return Ok(source);
    }

    std::fs::read_to_string(path).wrap_err_with(|| format!("reading {}", path.display()))
}

/// Run the highlight command.
///
/// With `wrap`, the fragment is wrapped in `<pre><code>` so it can be
/// pasted into a page as is.
pub fn run(path: &Path, wrap: bool) -> Result<()> {
    let source = read_source(path)?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "highlighting");

    let html = companion_highlight::highlight(&source);
    if wrap {
        println!("<pre><code>{html}</code></pre>");
    } else {
        println!("{html}");
    }

    Ok(())
}
