//! Scripted invoice desk session
//!
//! Composes, edits, cancels and deletes a few invoices, then prints the
//! history table the form would show.
//!
//! ```sh
//! cargo run --example desk                 # in-memory slot
//! cargo run --example desk -- desk.yaml    # backend from a config file
//! RUST_LOG=invoice_desk=debug cargo run --example desk
//! ```

use anyhow::Result;
use invoice_desk::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => DeskConfig::from_yaml_file(&path)?,
        None => DeskConfig::default(),
    };
    tracing::info!(slot = %config.storage_key, backend = ?config.storage, "Opening invoice desk");

    let mut editor = InvoiceEditor::from_config(&config)?;

    // A new invoice with two rows
    editor.update_draft_field(DraftField::ClientName, "שרה כהן");
    editor.update_draft_field(DraftField::Description, "סדנת צילום");
    editor.update_item_field(0, ItemField::Description, "סדנה");
    editor.update_item_field(0, ItemField::Quantity, "2");
    editor.update_item_field(0, ItemField::UnitPrice, "450");
    editor.add_item();
    editor.update_item_field(1, ItemField::Description, "הדפסות");
    editor.update_item_field(1, ItemField::Quantity, "12");
    editor.update_item_field(1, ItemField::UnitPrice, "7.5");
    tracing::info!(
        total = %editor.format_amount(editor.draft_grand_total()),
        "Draft ready"
    );
    let workshop = editor.save()?;

    // A second one, then a correction to its price
    editor.update_draft_field(DraftField::ClientName, "Acme Ltd");
    editor.update_item_field(0, ItemField::Description, "Consulting");
    editor.update_item_field(0, ItemField::UnitPrice, "1200");
    let consulting = editor.save()?;

    editor.edit_invoice(&consulting);
    editor.update_item_field(0, ItemField::UnitPrice, "1350");
    editor.save()?;

    // A mistaken one, cancelled and then removed
    editor.update_draft_field(DraftField::ClientName, "Test");
    let mistake = editor.save()?;
    editor.toggle_cancel(&mistake)?;
    editor.toggle_cancel(&workshop)?;
    editor.toggle_cancel(&workshop)?;
    editor.delete_invoice(&mistake)?;

    println!("{:>4}  {:<12} {:<10} {:>12}  status", "#", "client", "date", "total");
    for invoice in editor.history() {
        println!(
            "{:>4}  {:<12} {:<10} {:>12}  {}",
            invoice.invoice_number,
            invoice.client_name,
            format_local_date(&invoice.created_at),
            editor.format_amount(invoice.grand_total),
            if invoice.is_cancelled { "cancelled" } else { "active" },
        );
    }
    println!("next invoice number: {}", editor.draft().invoice_number);

    Ok(())
}
