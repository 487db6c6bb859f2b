//! Write command implementation
//!
//! Writes a value at a fractional index and prints the updated sequence.

use floatlist_core::sequence::FloatList;
use tracing::{debug, info};

use super::Output;
use crate::Result;

/// Run the write command
pub fn run(list: &mut FloatList<f64>, index: f64, value: f64, output: Output) -> Result<()> {
    info!(
        "Writing {} at index {} ({})",
        value,
        index,
        list.config().write_strategy
    );
    println!("{}", evaluate(list, index, value, output)?);
    Ok(())
}

/// Apply the write and format the resulting samples.
pub fn evaluate(
    list: &mut FloatList<f64>,
    index: f64,
    value: f64,
    output: Output,
) -> Result<String> {
    let d = list.decompose(index)?;
    let before = (list[d.lo], list[d.hi]);
    list.write(index, value)?;
    debug!(
        "Sample {} changed {} -> {}, sample {} changed {} -> {}",
        d.lo, before.0, list[d.lo], d.hi, before.1, list[d.hi]
    );
    Ok(output.values(list.as_slice()))
}
