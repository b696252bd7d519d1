use super::transaction::LedgerKind;

/// A suggested category offered when a transaction is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub icon: &'static str,
}

/// Icon used for free-text categories outside the suggested sets.
pub const FALLBACK_ICON: &str = "🏷️";

const EXPENSE_CATEGORIES: [Category; 12] = [
    Category { name: "Automovil", icon: "🚗" },
    Category { name: "Casa", icon: "🏠" },
    Category { name: "Comida", icon: "🍴" },
    Category { name: "Deporte", icon: "⚽" },
    Category { name: "Ropa", icon: "👕" },
    Category { name: "Entretenimiento", icon: "🎮" },
    Category { name: "Facturas", icon: "📃" },
    Category { name: "Higiene", icon: "🧴" },
    Category { name: "Mascota", icon: "🐾" },
    Category { name: "Regalos", icon: "🎁" },
    Category { name: "Salud", icon: "💊" },
    Category { name: "Transporte", icon: "🚌" },
];

const INCOME_CATEGORIES: [Category; 4] = [
    Category { name: "Ahorros", icon: "🐷" },
    Category { name: "Depositos", icon: "💰" },
    Category { name: "Salario", icon: "💼" },
    Category { name: "Bonus", icon: "💵" },
];

pub fn suggested(kind: LedgerKind) -> &'static [Category] {
    match kind {
        LedgerKind::Expense => &EXPENSE_CATEGORIES,
        LedgerKind::Income => &INCOME_CATEGORIES,
    }
}

/// Looks up a suggested category by name, ignoring case.
pub fn find(kind: LedgerKind, name: &str) -> Option<Category> {
    let name = name.trim();
    suggested(kind)
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
        .copied()
}

pub fn icon_for(kind: LedgerKind, name: &str) -> &'static str {
    find(kind, name).map_or(FALLBACK_ICON, |c| c.icon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggested_sets() {
        assert_eq!(suggested(LedgerKind::Expense).len(), 12);
        assert_eq!(suggested(LedgerKind::Income).len(), 4);
        assert_eq!(suggested(LedgerKind::Income)[2].name, "Salario");
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let c = find(LedgerKind::Expense, " comida ").expect("Comida should exist");
        assert_eq!(c.name, "Comida");
        assert_eq!(c.icon, "🍴");
        assert!(find(LedgerKind::Income, "Comida").is_none());
    }

    #[test]
    fn test_icon_for_unknown_category() {
        assert_eq!(icon_for(LedgerKind::Income, "bonus"), "💵");
        assert_eq!(icon_for(LedgerKind::Expense, "Viajes"), FALLBACK_ICON);
    }
}
