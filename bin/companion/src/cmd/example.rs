//! Example command - print an entry of the example registry

use color_eyre::eyre::Result;
use companion_core::ExampleRegistry;

/// Run the example command.
///
/// With `list`, prints every registered id instead. A missing id prints the
/// same placeholder the app would render and still succeeds.
pub fn run(id: Option<&str>, list: bool, highlight: bool) -> Result<()> {
    let registry = ExampleRegistry::builtin();

    let id = match id {
        Some(id) if !list => id,
        _ => {
            for id in registry.ids() {
                println!("{id}");
            }
            return Ok(());
        }
    };

    let source = registry.get(id);
    if highlight {
        println!("{}", companion_highlight::highlight(&source));
    } else {
        print!("{source}");
        if !source.ends_with('\n') {
            println!();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_example() {
        assert!(run(Some("state/cart.service.ts"), false, false).is_ok());
    }

    #[test]
    fn test_missing_example_is_not_an_error() {
        assert!(run(Some("nonexistent/path.ts"), false, true).is_ok());
    }

    #[test]
    fn test_list() {
        assert!(run(None, true, false).is_ok());
    }
}
