//! Built-in symbol set.
//!
//! The defaults are grouped by category in `symbols/defaults.rs`; this module
//! flattens them into a [`SymbolList`] and derives the trigger table the same
//! way a user-supplied list would be.

use crate::config::SymbolList;
use crate::engine::TriggerTable;
use once_cell::sync::Lazy;

#[path = "symbols/defaults.rs"]
mod defaults;


pub use defaults::Category;

static DEFAULT_LIST: Lazy<SymbolList> =
    Lazy::new(|| SymbolList::new(defaults::get().iter().flat_map(|category| category.symbols.iter().copied())));

/// Default symbols in authoring order.
pub fn default_list() -> SymbolList {
    DEFAULT_LIST.clone()
}

/// Default trigger table: shape-derived policies, longest key first.
pub fn default_table() -> TriggerTable {
    TriggerTable::new(
        DEFAULT_LIST
            .to_entries()
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match entry.into_rule(index) {
                Ok(rule) => Some(rule),
                Err(err) => {
                    tracing::error!(index, %err, "built-in symbol rejected");
                    None
                }
            })
            .collect(),
    )
}

/// Category names and their symbols, for listing.
pub fn categories() -> &'static [Category] {
    defaults::get()
}
