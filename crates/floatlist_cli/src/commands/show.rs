//! Show command implementation
//!
//! Prints the loaded samples and the effective resolver configuration.

use floatlist_core::sequence::FloatList;

use super::Output;
use crate::Result;

/// Run the show command
pub fn run(list: &FloatList<f64>, output: Output) -> Result<()> {
    println!("{}", render(list, output));
    Ok(())
}

/// Describe the list in a small table.
pub fn render(list: &FloatList<f64>, output: Output) -> String {
    let config = list.config();
    [
        format!("samples:        {}", output.values(list.as_slice())),
        format!("length:         {}", list.len()),
        format!("boundary:       {}", config.boundary),
        format!("mode:           {}", config.mode),
        format!("write_strategy: {}", config.write_strategy),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use floatlist_core::math::resolver::ResolverConfig;

    #[test]
    fn test_render() {
        let list = FloatList::with_config(vec![0.0, 4.5], ResolverConfig::wrapping());
        let text = render(&list, Output::default());
        assert!(text.contains("[0, 4.5]"));
        assert!(text.contains("length:         2"));
        assert!(text.contains("boundary:       wrap"));
        assert!(text.contains("write_strategy: proportional"));
    }
}
