use sentiscope_core::MANUAL_ENTRY;

/// Sector catalog: loaded once at startup, never re-fetched.
#[derive(Debug, Clone)]
pub enum CatalogState {
    Loading,
    Loaded(Vec<String>),
    Failed(String),
}

impl CatalogState {
    /// Choosable entries: the loaded sectors followed by the manual-paste
    /// sentinel. The sentinel is always present so pasting works even
    /// while the catalog is loading or after it failed.
    pub fn choices(&self) -> Vec<&str> {
        let mut out: Vec<&str> = match self {
            CatalogState::Loaded(sectors) => sectors.iter().map(String::as_str).collect(),
            CatalogState::Loading | CatalogState::Failed(_) => Vec::new(),
        };
        out.push(MANUAL_ENTRY);
        out
    }

    pub fn len(&self) -> usize {
        self.choices().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_always_last_choice() {
        let loaded = CatalogState::Loaded(vec!["Banking".into(), "Energy".into()]);
        assert_eq!(loaded.choices(), vec!["Banking", "Energy", MANUAL_ENTRY]);

        let loading = CatalogState::Loading;
        assert_eq!(loading.choices(), vec![MANUAL_ENTRY]);

        let failed = CatalogState::Failed("boom".into());
        assert_eq!(failed.choices(), vec![MANUAL_ENTRY]);
    }
}
