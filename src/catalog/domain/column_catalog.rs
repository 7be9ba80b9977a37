/// A projectable column: the lower-case field identifier and its display title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    identifier: &'static str,
    title: String,
}

impl Column {
    pub fn identifier(&self) -> &'static str {
        self.identifier
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Ordered identifier → title mapping for one record schema
///
/// Iteration order is the order of the static definition list, which is also
/// the default column order when the user does not pick columns.
#[derive(Debug, Clone)]
pub struct ColumnCatalog {
    columns: Vec<Column>,
}

impl ColumnCatalog {
    /// Builds a catalog by title-casing each identifier
    ///
    /// # Examples
    /// ```
    /// use wsusscn2_cli::catalog::domain::ColumnCatalog;
    ///
    /// let catalog = ColumnCatalog::new(&["update_uid", "more_info_url"]);
    /// assert_eq!(catalog.title("update_uid"), Some("UpdateUid"));
    /// assert_eq!(catalog.title("more_info_url"), Some("MoreInfoUrl"));
    /// ```
    pub fn new(identifiers: &[&'static str]) -> Self {
        let columns = identifiers
            .iter()
            .map(|&identifier| Column {
                identifier,
                title: title_case(identifier),
            })
            .collect();
        Self { columns }
    }

    pub fn title(&self, identifier: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|c| c.identifier == identifier)
            .map(|c| c.title.as_str())
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.title(identifier).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Every identifier, in definition order
    pub fn default_selection(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|c| c.identifier.to_string())
            .collect()
    }
}

/// `product_family_title` → `ProductFamilyTitle`
pub fn title_case(identifier: &str) -> String {
    identifier
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("kb"), "Kb");
        assert_eq!(title_case("update_uid"), "UpdateUid");
        assert_eq!(title_case("cvssv3_base_score"), "Cvssv3BaseScore");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_catalog_preserves_definition_order() {
        let catalog = ColumnCatalog::new(&["update_uid", "kb", "description", "arch"]);
        let ids: Vec<&str> = catalog.iter().map(|c| c.identifier()).collect();
        assert_eq!(ids, vec!["update_uid", "kb", "description", "arch"]);
        assert_eq!(
            catalog.default_selection(),
            vec!["update_uid", "kb", "description", "arch"]
        );
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = ColumnCatalog::new(&["classification_title"]);
        assert!(catalog.contains("classification_title"));
        assert!(!catalog.contains("ClassificationTitle"));
        assert_eq!(catalog.title("nope"), None);
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
    }
}
