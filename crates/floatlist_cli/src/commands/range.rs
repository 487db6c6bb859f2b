//! Range command implementation
//!
//! Prints the values of a fractional slice.

use floatlist_core::sequence::FloatList;
use tracing::info;

use super::Output;
use crate::Result;

/// Run the range command
pub fn run(
    list: &FloatList<f64>,
    start: f64,
    stop: f64,
    step: f64,
    inclusive: bool,
    output: Output,
) -> Result<()> {
    let bracket = if inclusive { ']' } else { ')' };
    info!("Slicing [{}, {}{} every {}", start, stop, bracket, step);
    println!("{}", evaluate(list, start, stop, step, inclusive, output)?);
    Ok(())
}

/// Read and format the slice.
pub fn evaluate(
    list: &FloatList<f64>,
    start: f64,
    stop: f64,
    step: f64,
    inclusive: bool,
    output: Output,
) -> Result<String> {
    let values = if inclusive {
        list.range_inclusive(start, stop, step)?
    } else {
        list.range(start, stop, step)?
    };
    info!("Slice has {} values", values.len());
    Ok(output.values(&values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use floatlist_core::types::ResolveError;

    #[test]
    fn test_range_half_open_and_inclusive() {
        let list = FloatList::new(vec![0.0, 4.0, 5.0, 6.0]);
        let output = Output { precision: Some(1) };

        let out = evaluate(&list, 0.0, 1.0, 0.2, false, output).unwrap();
        assert_eq!(out, "[0.0, 0.8, 1.6, 2.4, 3.2]");

        let out = evaluate(&list, 0.0, 1.0, 0.2, true, output).unwrap();
        assert_eq!(out, "[0.0, 0.8, 1.6, 2.4, 3.2, 4.0]");
    }

    #[test]
    fn test_range_zero_step() {
        let list = FloatList::new(vec![0.0, 4.0]);
        assert!(matches!(
            evaluate(&list, 0.0, 1.0, 0.0, false, Output::default()),
            Err(CliError::Resolve(ResolveError::InvalidStep { .. }))
        ));
    }
}
