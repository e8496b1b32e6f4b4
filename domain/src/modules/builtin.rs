//! Built-in per-category module configurations.

use super::config::{AutomatedAction, DomainModuleConfig, ScopeDimension};
use crate::catalog::DomainCategory;

/// Vocabulary for the inventory domain.
pub fn stox_config() -> DomainModuleConfig {
    DomainModuleConfig {
        scope_label: "Inventory scope".to_string(),
        dimensions: vec![
            ScopeDimension::new(
                "Product groups",
                "products",
                "emerald",
                vec![
                    "Raw materials",
                    "Components",
                    "Finished goods",
                    "Spare parts",
                    "Consumables",
                ],
            ),
            ScopeDimension::new(
                "Warehouses",
                "warehouses",
                "sky",
                vec!["Central DC", "North hub", "South hub", "Returns depot"],
            ),
            ScopeDimension::new(
                "ABC classes",
                "abc_classes",
                "amber",
                vec!["A", "B", "C"],
            ),
        ],
        actions: vec![
            AutomatedAction::new(
                "create_po",
                "Create purchase order",
                "Draft a replenishment order sized to restore target coverage",
            ),
            AutomatedAction::new(
                "adjust_safety_stock",
                "Adjust safety stock",
                "Raise or lower the safety stock level on the flagged SKU",
            ),
            AutomatedAction::new(
                "flag_obsolete",
                "Flag as obsolete",
                "Mark slow movers for the next writedown review",
            ),
            AutomatedAction::new(
                "notify_buyer",
                "Notify responsible buyer",
                "Send the finding to the buyer who owns the supplier",
            ),
        ],
        integration_modules: vec![
            "inventory".to_string(),
            "purchasing".to_string(),
            "warehouse".to_string(),
        ],
    }
}

/// Vocabulary for the margin and pricing domain.
pub fn margen_config() -> DomainModuleConfig {
    DomainModuleConfig {
        scope_label: "Margin scope".to_string(),
        dimensions: vec![
            ScopeDimension::new(
                "Product groups",
                "products",
                "emerald",
                vec![
                    "Private label",
                    "Brand A",
                    "Brand B",
                    "Seasonal",
                ],
            ),
            ScopeDimension::new(
                "Price lists",
                "price_lists",
                "violet",
                vec!["Retail", "Wholesale", "Key accounts", "Export"],
            ),
            ScopeDimension::new(
                "Suppliers",
                "suppliers",
                "amber",
                vec!["Strategic", "Preferred", "Spot"],
            ),
        ],
        actions: vec![
            AutomatedAction::new(
                "propose_price_update",
                "Propose price update",
                "Draft a price-list change that restores the target margin",
            ),
            AutomatedAction::new(
                "open_supplier_claim",
                "Open supplier claim",
                "Create a claim for invoices priced off the agreed list",
            ),
            AutomatedAction::new(
                "freeze_discounts",
                "Freeze discounts",
                "Suspend discretionary discounts on the affected group",
            ),
        ],
        integration_modules: vec!["pricing".to_string(), "invoicing".to_string()],
    }
}

/// Vocabulary for the sales domain.
pub fn ventas_config() -> DomainModuleConfig {
    DomainModuleConfig {
        scope_label: "Sales scope".to_string(),
        dimensions: vec![
            ScopeDimension::new(
                "Channels",
                "channels",
                "sky",
                vec!["Web shop", "Field sales", "Marketplace", "Phone"],
            ),
            ScopeDimension::new(
                "Regions",
                "regions",
                "emerald",
                vec!["North", "South", "East", "West", "Export"],
            ),
            ScopeDimension::new(
                "Customer segments",
                "segments",
                "violet",
                vec!["Key accounts", "SMB", "New customers"],
            ),
        ],
        actions: vec![
            AutomatedAction::new(
                "create_followup_task",
                "Create follow-up task",
                "Open a CRM task for the responsible account manager",
            ),
            AutomatedAction::new(
                "draft_campaign",
                "Draft win-back campaign",
                "Prepare a targeted campaign for at-risk customers",
            ),
            AutomatedAction::new(
                "notify_sales_lead",
                "Notify sales lead",
                "Send the finding to the regional sales lead",
            ),
        ],
        integration_modules: vec!["crm".to_string(), "orders".to_string()],
    }
}

/// Vocabulary for the finance domain.
pub fn finanzas_config() -> DomainModuleConfig {
    DomainModuleConfig {
        scope_label: "Finance scope".to_string(),
        dimensions: vec![
            ScopeDimension::new(
                "Ledgers",
                "ledgers",
                "amber",
                vec!["Receivables", "Payables", "Bank", "Accruals"],
            ),
            ScopeDimension::new(
                "Entities",
                "entities",
                "sky",
                vec!["HQ", "Subsidiary ES", "Subsidiary DE"],
            ),
            ScopeDimension::new(
                "Currencies",
                "currencies",
                "emerald",
                vec!["EUR", "USD", "GBP"],
            ),
        ],
        actions: vec![
            AutomatedAction::new(
                "draft_reminder_run",
                "Draft reminder run",
                "Prepare a dunning run for invoices over threshold",
            ),
            AutomatedAction::new(
                "propose_payment_plan",
                "Propose payment plan",
                "Draft an installment plan for large overdue balances",
            ),
            AutomatedAction::new(
                "notify_controller",
                "Notify controller",
                "Send the finding to the responsible controller",
            ),
        ],
        integration_modules: vec!["ledger".to_string(), "treasury".to_string()],
    }
}

/// Fallback vocabulary for categories without a dedicated entry.
pub fn default_config() -> DomainModuleConfig {
    DomainModuleConfig {
        scope_label: "Data scope".to_string(),
        dimensions: vec![ScopeDimension::new(
            "Data sets",
            "datasets",
            "slate",
            vec!["Orders", "Invoices", "Inventory", "Customers"],
        )],
        actions: vec![AutomatedAction::new(
            "notify_owner",
            "Notify data owner",
            "Send the finding to the data set owner",
        )],
        integration_modules: vec!["warehouse".to_string()],
    }
}

/// Builds the full category-to-config table.
pub fn builtin_configs() -> Vec<(DomainCategory, DomainModuleConfig)> {
    vec![
        (DomainCategory::Stox, stox_config()),
        (DomainCategory::Margen, margen_config()),
        (DomainCategory::Ventas, ventas_config()),
        (DomainCategory::Finanzas, finanzas_config()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_named_category_has_a_config() {
        let configs = builtin_configs();
        for category in [
            DomainCategory::Stox,
            DomainCategory::Margen,
            DomainCategory::Ventas,
            DomainCategory::Finanzas,
        ] {
            assert!(configs.iter().any(|(c, _)| *c == category));
        }
    }

    #[test]
    fn test_configs_are_well_formed() {
        let mut all: Vec<DomainModuleConfig> =
            builtin_configs().into_iter().map(|(_, c)| c).collect();
        all.push(default_config());

        for config in all {
            assert!(!config.dimensions.is_empty());
            assert!(!config.actions.is_empty());
            assert!(!config.integration_modules.is_empty());
            for dimension in &config.dimensions {
                assert!(!dimension.values.is_empty());
            }
        }
    }

    #[test]
    fn test_action_keys_unique_within_domain() {
        for (_, config) in builtin_configs() {
            let mut keys: Vec<&str> = config.actions.iter().map(|a| a.key.as_str()).collect();
            keys.sort();
            keys.dedup();
            assert_eq!(keys.len(), config.actions.len());
        }
    }
}
