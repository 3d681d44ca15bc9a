//! Physical table layout forwarded on the read path
//!
//! Redshift distributes rows across nodes by a distribution key and orders
//! them on disk by sort keys. When a table is re-materialized through the
//! staging path, forwarding the original layout preserves both properties.

/// Distribution key plus ordered sort keys for a warehouse table
///
/// Sort key order is caller-determined and preserved verbatim - no
/// reordering or deduplication happens here. An empty sort key sequence is
/// forwarded as-is; whether `COMPOUND SORTKEY()` is meaningful is left to
/// the connector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    /// Column determining physical row placement across nodes
    pub dist_key: String,
    /// Columns defining on-disk row ordering, in order
    pub sort_keys: Vec<String>,
}

impl TableLayout {
    /// Create a layout with a distribution key and no sort keys
    pub fn new(dist_key: impl Into<String>) -> Self {
        Self {
            dist_key: dist_key.into(),
            sort_keys: Vec::new(),
        }
    }

    /// Append a sort key, preserving insertion order
    pub fn with_sort_key(mut self, key: impl Into<String>) -> Self {
        self.sort_keys.push(key.into());
        self
    }

    /// Set the full sort key sequence at once
    pub fn with_sort_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sort_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Compound sort key clause as the connector expects it:
    /// `COMPOUND SORTKEY(<k1>,<k2>,...)`
    pub fn sort_key_spec(&self) -> String {
        format!("COMPOUND SORTKEY({})", self.sort_keys.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_spec_multiple() {
        let layout = TableLayout::new("user_id").with_sort_keys(["a", "b", "c"]);
        assert_eq!(layout.sort_key_spec(), "COMPOUND SORTKEY(a,b,c)");
    }

    #[test]
    fn test_sort_key_spec_single() {
        let layout = TableLayout::new("user_id").with_sort_key("x");
        assert_eq!(layout.sort_key_spec(), "COMPOUND SORTKEY(x)");
    }

    #[test]
    fn test_sort_key_spec_empty_passes_through() {
        let layout = TableLayout::new("user_id");
        assert_eq!(layout.sort_key_spec(), "COMPOUND SORTKEY()");
    }

    #[test]
    fn test_sort_key_order_preserved() {
        let layout = TableLayout::new("user_id")
            .with_sort_key("z")
            .with_sort_key("a")
            .with_sort_key("z");
        assert_eq!(layout.sort_key_spec(), "COMPOUND SORTKEY(z,a,z)");
    }
}
