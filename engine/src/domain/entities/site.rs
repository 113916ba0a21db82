//! Site entity
//! One virtual-host configuration entry as seen by the operator.
//! `enabled` is derived from symlink presence in the enabled set and is
//! never cached beyond a single request.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    /// File name in the available directory, e.g. `blog.conf`
    pub name: String,
    /// True iff an enabled-set symlink with the same name exists
    pub enabled: bool,
}
