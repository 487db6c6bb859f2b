//! Contains command implementation

use floatlist_core::sequence::FloatList;
use tracing::info;

use crate::Result;

/// Run the contains command
pub fn run(list: &FloatList<f64>, item: f64) -> Result<()> {
    let found = evaluate(list, item);
    info!("{} {} on the sampled curve", item, if found { "lies" } else { "does not lie" });
    println!("{}", found);
    Ok(())
}

/// Whether `item` lies on the sampled curve of `list`.
pub fn evaluate(list: &FloatList<f64>, item: f64) -> bool {
    list.contains(item)
}
