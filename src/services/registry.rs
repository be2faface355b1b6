use anyhow::Result;
use std::collections::HashSet;

/// Which forms of a base slug are currently claimed by active products.
#[derive(Debug, Clone, Default)]
pub struct SuffixUsage {
    /// The bare, unsuffixed base is taken.
    pub bare: bool,
    /// Numeric suffixes in use (`base-1`, `base-2`, ...).
    pub numbered: HashSet<u32>,
}

/// Lookup over the active slug population. The storage layer implements
/// this; tests substitute an in-memory set.
pub trait ActiveSlugs {
    fn usage(&self, base: &str) -> Result<SuffixUsage>;
}

/// Returns the base slug itself when free, otherwise `base-N` for the
/// smallest positive `N` not held by an active product. Suffixes freed by
/// soft deletes are picked up again, so a delete-then-create can yield the
/// exact same string a previous product held.
///
/// Not atomic on its own: callers run it inside the create transaction,
/// with the active-slug unique index as the backstop.
pub fn reserve(lookup: &impl ActiveSlugs, base: &str) -> Result<String> {
    let usage = lookup.usage(base)?;
    if !usage.bare {
        return Ok(base.to_string());
    }

    let mut n = 1u32;
    while usage.numbered.contains(&n) {
        n += 1;
    }
    Ok(format!("{}-{}", base, n))
}
