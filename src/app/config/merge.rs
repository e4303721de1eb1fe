use toml::{Table, Value};

/// Merge `overlay` into `base`.
///
/// Tables present on both sides merge recursively; any other value from
/// `overlay` (arrays included) replaces the base value.
pub fn deep_merge(mut base: Table, overlay: Table) -> Table {
    for (key, value) in overlay {
        let merged = match (base.remove(&key), value) {
            (Some(Value::Table(existing)), Value::Table(incoming)) => {
                Value::Table(deep_merge(existing, incoming))
            }
            (_, incoming) => incoming,
        };
        base.insert(key, merged);
    }
    base
}
