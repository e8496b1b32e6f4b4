//! Template catalog - the registry of agent templates.
//!
//! The catalog is constructed explicitly and injected wherever templates
//! are needed, so tests can substitute fixtures. It never fails: unknown
//! categories and empty queries simply yield empty result sets.

pub mod builtin;
pub mod template;

pub use template::{DomainCategory, Template};

/// Registry of agent templates.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    /// Catalog holding only the built-in templates.
    pub fn builtin() -> Self {
        Self {
            templates: builtin::builtin_templates(),
        }
    }

    /// Catalog over an explicit template set (fixtures in tests).
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    /// All templates, in catalog order.
    pub fn list(&self) -> &[Template] {
        &self.templates
    }

    /// Templates in the given category. Unknown categories yield an
    /// empty list.
    pub fn find_by_category(&self, category: DomainCategory) -> Vec<&Template> {
        self.templates
            .iter()
            .filter(|t| t.category == category)
            .collect()
    }

    /// Look a template up by its stable id.
    pub fn find_by_id(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Case-insensitive substring search over name and description,
    /// optionally restricted to one category.
    pub fn search(&self, query: &str, category: Option<DomainCategory>) -> Vec<&Template> {
        let needle = query.to_lowercase();
        self.templates
            .iter()
            .filter(|t| category.is_none_or(|c| t.category == c))
            .filter(|t| {
                needle.is_empty()
                    || t.name.to_lowercase().contains(&needle)
                    || t.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Merge remotely fetched templates into the catalog, skipping ids
    /// that are already present so built-ins keep priority.
    pub fn extend(&mut self, templates: Vec<Template>) {
        for template in templates {
            if self.find_by_id(&template.id).is_none() {
                self.templates.push(template);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(id: &str, name: &str, category: DomainCategory, description: &str) -> Template {
        Template::new(id, name, category, "pulse-test-v1", description)
    }

    fn catalog() -> TemplateCatalog {
        TemplateCatalog::new(vec![
            fixture("a", "Stockout watch", DomainCategory::Stox, "coverage days per SKU"),
            fixture("b", "Margin drift", DomainCategory::Margen, "realized margin vs target"),
            fixture("c", "Order spike", DomainCategory::Ventas, "intake anomaly per channel"),
        ])
    }

    #[test]
    fn test_find_by_category() {
        let catalog = catalog();
        assert_eq!(catalog.find_by_category(DomainCategory::Stox).len(), 1);
        assert!(catalog.find_by_category(DomainCategory::Finanzas).is_empty());
    }

    #[test]
    fn test_search_matches_name_and_description() {
        let catalog = catalog();
        assert_eq!(catalog.search("STOCKOUT", None).len(), 1);
        assert_eq!(catalog.search("margin", None).len(), 1);
        assert_eq!(catalog.search("per", None).len(), 2);
        assert!(catalog.search("payroll", None).is_empty());
    }

    #[test]
    fn test_search_with_category_filter() {
        let catalog = catalog();
        let hits = catalog.search("per", Some(DomainCategory::Ventas));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "c");
    }

    #[test]
    fn test_empty_query_lists_category() {
        let catalog = catalog();
        assert_eq!(catalog.search("", Some(DomainCategory::Margen)).len(), 1);
        assert_eq!(catalog.search("", None).len(), 3);
    }

    #[test]
    fn test_extend_skips_existing_ids() {
        let mut catalog = catalog();
        catalog.extend(vec![
            fixture("a", "Duplicate", DomainCategory::Stox, "ignored"),
            fixture("d", "Cash guard", DomainCategory::Finanzas, "projected cash floor"),
        ]);
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.find_by_id("a").unwrap().name, "Stockout watch");
        assert!(catalog.find_by_id("d").is_some());
    }

    #[test]
    fn test_builtin_catalog_is_default() {
        let catalog = TemplateCatalog::default();
        assert!(!catalog.is_empty());
        assert!(catalog.find_by_id("stockout-risk").is_some());
    }
}
