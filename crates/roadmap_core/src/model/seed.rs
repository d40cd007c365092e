//! Initial 2026 payroll roadmap content.

use crate::model::card::{Card, CardId, Category, ColumnId};

const INITIAL_CARDS: &[(&str, Category, &str, ColumnId)] = &[
    (
        "card-1",
        Category::PayrollDataFoundation,
        "Preserving Deduction Code in ICT",
        ColumnId::Pi1,
    ),
    (
        "card-2",
        Category::DeductionCodeConfiguration,
        "Attribute Expansion",
        ColumnId::Pi1,
    ),
    (
        "card-3",
        Category::DeductionCodeConfiguration,
        "UI Redesign",
        ColumnId::Pi1,
    ),
    (
        "card-4",
        Category::TechDebt,
        "Payroll Files Historical Source of Data",
        ColumnId::Pi1,
    ),
    (
        "card-5",
        Category::PayrollDataFoundation,
        "Update Application Using Deduction Code Object",
        ColumnId::Pi2,
    ),
    (
        "card-6",
        Category::PayrollDataFoundation,
        "Update Reporting for Deduction Code Object",
        ColumnId::Pi2,
    ),
    (
        "card-7",
        Category::DeductionCodeConfiguration,
        "Export Functionality",
        ColumnId::Pi2,
    ),
    (
        "card-8",
        Category::PensionSupport,
        "Person Data Integration",
        ColumnId::Pi2,
    ),
    (
        "card-9",
        Category::PayrollDataFoundation,
        "Update Payroll Processing and Jobs to Use Deduction Code Object",
        ColumnId::Pi3,
    ),
    (
        "card-10",
        Category::DeductionCodeConfiguration,
        "Import Functionality",
        ColumnId::Pi3,
    ),
    (
        "card-11",
        Category::PensionSupport,
        "Premium Evaluation & Routing",
        ColumnId::Pi3,
    ),
    (
        "card-12",
        Category::SmallEnhancements,
        "Small Enhancements",
        ColumnId::Pi3,
    ),
    (
        "card-13",
        Category::PayrollDataFoundation,
        "Adjustment Balance Tracking",
        ColumnId::Pi4,
    ),
    (
        "card-14",
        Category::DeductionCodeConfiguration,
        "Audit & Traceability",
        ColumnId::Pi4,
    ),
    (
        "card-15",
        Category::DeductionCodeConfiguration,
        "Retro Strategies",
        ColumnId::Pi4,
    ),
    (
        "card-16",
        Category::PensionSupport,
        "Pension Deduction File Generation",
        ColumnId::Pi4,
    ),
    (
        "card-17",
        Category::PensionSupport,
        "Direct Billing for Insuff/Exempt Pensions",
        ColumnId::Pi4,
    ),
    (
        "card-18",
        Category::SmallEnhancements,
        "Small Enhancements",
        ColumnId::Pi4,
    ),
];

/// Returns the cards a new board starts with, in board insertion order.
pub fn initial_cards() -> Vec<Card> {
    INITIAL_CARDS
        .iter()
        .map(|&(id, category, title, column_id)| Card {
            id: CardId(id.to_string()),
            category,
            title: title.to_string(),
            column_id,
        })
        .collect()
}
