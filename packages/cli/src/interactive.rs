//! Interactive prompts using dialoguer.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::io;

use dialoguer::MultiSelect;

/// Whether prompts can be shown.
#[must_use]
pub fn is_interactive() -> bool {
    console::user_attended()
}

/// Select which files to eject.
///
/// Every item is preselected; an empty selection means nothing is ejected.
///
/// # Errors
///
/// * If the user cancels the selection
pub fn select_items(items: &[String]) -> io::Result<Vec<String>> {
    if items.len() <= 1 {
        return Ok(items.to_vec());
    }

    let defaults = vec![true; items.len()];
    let selections = MultiSelect::new()
        .with_prompt("Select files to eject")
        .items(items)
        .defaults(&defaults)
        .interact()?;

    Ok(selections.into_iter().map(|i| items[i].clone()).collect())
}
