//! Build a grouped item log and print it as a table.

use tablerlib::{row, Schema, Table};

fn main() -> tablerlib::Result<()> {
    let received = [
        ("Alice", vec!["Sword", "Shield"]),
        ("Bob", vec![]),
        ("Carol", vec!["Bow"]),
    ];

    let schema = Schema::new(["Player Name", "Item Name", "Item Count"])?;
    let mut table: Table = schema.new_table();

    table.hline();
    for (player, items) in &received {
        for (index, item) in items.iter().enumerate() {
            table.add_row(row![player, item, index + 1])?;
        }
        table.hline();
    }

    print!("{}", table.format(true));
    println!();
    println!("{} rows, {} dividers", table.len(), table.dividers().count());
    Ok(())
}
