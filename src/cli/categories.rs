use super::ui;
use crate::core::LedgerKind;
use crate::core::category;
use anyhow::Result;
use comfy_table::Cell;

pub fn render(kind: LedgerKind) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell(""), ui::header_cell("Category")]);
    for c in category::suggested(kind) {
        table.add_row(vec![Cell::new(c.icon), Cell::new(c.name)]);
    }
    table.to_string()
}

pub fn run(kind: LedgerKind) -> Result<()> {
    println!("{}", render(kind));
    Ok(())
}
