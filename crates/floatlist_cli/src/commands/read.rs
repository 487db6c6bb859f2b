//! Read command implementation
//!
//! Prints the interpolated value at a fractional index.

use floatlist_core::sequence::FloatList;
use tracing::{debug, info};

use super::Output;
use crate::Result;

/// Run the read command
pub fn run(list: &FloatList<f64>, index: f64, output: Output) -> Result<()> {
    info!("Reading index {} of {} samples", index, list.len());
    println!("{}", evaluate(list, index, output)?);
    Ok(())
}

/// Resolve and format the value at `index`.
pub fn evaluate(list: &FloatList<f64>, index: f64, output: Output) -> Result<String> {
    let d = list.decompose(index)?;
    debug!(lo = d.lo, hi = d.hi, frac = d.frac, "Decomposed index {}", index);
    Ok(output.value(list.read(index)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use floatlist_core::math::resolver::ResolverConfig;

    #[test]
    fn test_read_interior() {
        let list = FloatList::new(vec![0.0, 4.0, 5.0, 6.0]);
        assert_eq!(evaluate(&list, 0.125, Output::default()).unwrap(), "0.5");
        assert_eq!(evaluate(&list, -0.5, Output::default()).unwrap(), "0");
    }

    #[test]
    fn test_read_wrapped() {
        let list = FloatList::with_config(vec![0.0, 4.0, 5.0, 6.0], ResolverConfig::wrapping());
        let output = Output { precision: Some(1) };
        assert_eq!(evaluate(&list, -0.5, output).unwrap(), "3.0");
    }

    #[test]
    fn test_read_empty_is_error() {
        let list = FloatList::new(Vec::new());
        assert!(matches!(
            evaluate(&list, 0.0, Output::default()),
            Err(CliError::Resolve(_))
        ));
    }
}
