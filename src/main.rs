//! # sales-orders
//!
//! Command-line front end of the order desk.
//!
//! - `create` builds an [`OrderDraft`] from `--item` and `--lookup` entries and submits it
//! - `list`, `show`, `summary` and `export` read the order list; `summary --json`
//!   adds status labels and badge colours for a front end
//! - `status` and `delete` change it
//! - `catalog` searches the item catalog
//!
//! Configuration is read from `--config` (TOML, see [`sales_orders::config`]); without
//! it the defaults apply and orders are kept in `./data/salesOrders.json`.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use resource_framework::tracing::setup_tracing;
use sales_orders::clients::DomainClient;
use sales_orders::config::Config;
use sales_orders::lifecycle::OrderDesk;
use sales_orders::model::{
    format_idr, ItemId, OrderDraft, OrderQuery, OrderStatus, SalesOrder, StatusFilter,
};
use std::path::PathBuf;
use tracing::{info, warn, Instrument};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "sales-orders")]
#[command(about = "Sales orders with line items, catalog lookup and status history")]
#[command(version)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an order
    Create {
        /// Purchase order number
        #[arg(long)]
        po: String,

        /// PO date as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        customer: String,

        #[arg(long)]
        address: String,

        /// Initial status
        #[arg(long, default_value = "pending-delivery")]
        status: OrderStatus,

        /// Manual line item, "DESCRIPTION:QTY:PRICE" (repeatable)
        #[arg(long = "item")]
        items: Vec<String>,

        /// Catalog line item, "ITEM_ID[:QTY]" (repeatable)
        #[arg(long = "lookup")]
        lookups: Vec<String>,
    },

    /// List orders in creation order
    List {
        /// Case-insensitive match on PO number and customer name
        #[arg(long, default_value = "")]
        search: String,

        /// A status, or "all"
        #[arg(long, default_value = "all")]
        status: StatusFilter,
    },

    /// Show one order with its items and status history
    Show { id: Uuid },

    /// Change the status of an order
    Status {
        id: Uuid,
        status: OrderStatus,

        /// Note stored with the history record
        #[arg(long)]
        note: Option<String>,
    },

    /// Delete an order
    Delete { id: Uuid },

    /// Order count per status
    Summary {
        /// Print JSON with labels and badge colours instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Search the item catalog by material description
    Catalog { term: Option<String> },

    /// Write orders as JSON
    Export {
        /// Output file (default: stdout)
        #[arg(long)]
        output: Option<PathBuf>,

        #[arg(long, default_value = "")]
        search: String,

        #[arg(long, default_value = "all")]
        status: StatusFilter,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    // Setup tracing once for the entire application
    setup_tracing(&config.logging.filter);

    let desk = OrderDesk::new(&config)?;

    let span = tracing::info_span!("command");
    let result = run(&desk, cli.command).instrument(span).await;

    desk.shutdown().await?;
    result
}

async fn run(desk: &OrderDesk, command: Commands) -> Result<()> {
    match command {
        Commands::Create {
            po,
            date,
            customer,
            address,
            status,
            items,
            lookups,
        } => {
            if items.is_empty() && lookups.is_empty() {
                bail!("An order needs at least one --item or --lookup");
            }

            let mut draft = OrderDraft::default();
            draft.po_number = po;
            if let Some(date) = date {
                draft.po_date = date;
            }
            draft.customer_name = customer;
            draft.customer_address = address;
            draft.status = status;

            let mut first_row = Some(draft.first_item_id());

            for spec in &items {
                let (description, quantity, price) = split_manual(spec)?;
                let row = next_row(&mut draft, &mut first_row);
                draft.set_description(row, description)?;
                if !draft.edit_quantity(row, quantity)? {
                    warn!(item = %spec, "Ignoring malformed quantity");
                }
                if !draft.edit_price(row, price)? {
                    warn!(item = %spec, "Ignoring malformed price");
                }
            }

            for spec in &lookups {
                let (item_id, quantity) = split_lookup(spec)?;
                let row = next_row(&mut draft, &mut first_row);
                if let Some(quantity) = quantity {
                    if !draft.edit_quantity(row, quantity)? {
                        warn!(lookup = %spec, "Ignoring malformed quantity");
                    }
                }
                desk.inventory_client
                    .attach_to_line(&mut draft, row, item_id)
                    .await?;
            }

            info!(total = draft.total_amount(), "Submitting order");
            let id = desk.order_client.submit(draft).await?;
            println!("{id}");
        }

        Commands::List { search, status } => {
            let orders = desk
                .order_client
                .list(OrderQuery::new(search, status))
                .await?;
            for order in &orders {
                println!(
                    "{}  {:<12} {:<24} {:<16} {:>16}",
                    order.id,
                    order.po_number,
                    order.customer_name,
                    order.status.label(),
                    format_idr(order.total_amount)
                );
            }
        }

        Commands::Show { id } => {
            let order = desk
                .order_client
                .get(id)
                .await?
                .with_context(|| format!("Order not found: {id}"))?;
            print_order(&order);
        }

        Commands::Status { id, status, note } => {
            let record = desk.order_client.change_status(id, status, note).await?;
            println!("{} at {}", record.status.label(), record.date.to_rfc3339());
        }

        Commands::Delete { id } => {
            desk.order_client.delete(id).await?;
            println!("Deleted {id}");
        }

        Commands::Summary { json } => {
            let summary = desk.order_client.summary().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                for entry in &summary {
                    println!("{:<16} {}", entry.label, entry.count);
                }
            }
        }

        Commands::Catalog { term } => {
            let items = desk
                .inventory_client
                .search(term.as_deref().unwrap_or(""))
                .await?;
            for item in &items {
                println!(
                    "{:>3}  {:<14} {:<38} {}  stock {}/{} (min {}){}",
                    item.id,
                    item.material_ci,
                    item.material_description,
                    item.plnt,
                    item.current_stock,
                    item.total_stock,
                    item.minimum_stock,
                    if item.is_below_minimum() { "  LOW" } else { "" }
                );
            }
        }

        Commands::Export {
            output,
            search,
            status,
        } => {
            let json = desk
                .order_client
                .export(OrderQuery::new(search, status))
                .await?;
            match output {
                Some(path) => {
                    tokio::fs::write(&path, json)
                        .await
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!(path = %path.display(), "Export written");
                }
                None => println!("{json}"),
            }
        }
    }
    Ok(())
}

/// The untouched first row of a fresh draft, then a new row per call.
fn next_row(draft: &mut OrderDraft, first_row: &mut Option<Uuid>) -> Uuid {
    first_row.take().unwrap_or_else(|| draft.add_item())
}

/// Splits `"DESCRIPTION:QTY:PRICE"`; the description may itself contain colons.
fn split_manual(spec: &str) -> Result<(&str, &str, &str)> {
    let mut parts = spec.rsplitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(price), Some(quantity), Some(description)) => Ok((description, quantity, price)),
        _ => bail!("Expected DESCRIPTION:QTY:PRICE, got {spec:?}"),
    }
}

/// Splits `"ITEM_ID[:QTY]"`.
fn split_lookup(spec: &str) -> Result<(ItemId, Option<&str>)> {
    let (id, quantity) = match spec.split_once(':') {
        Some((id, quantity)) => (id, Some(quantity)),
        None => (spec, None),
    };
    let id = id
        .parse::<ItemId>()
        .with_context(|| format!("Invalid catalog item id in {spec:?}"))?;
    Ok((id, quantity))
}

fn print_order(order: &SalesOrder) {
    println!("Order      {}", order.id);
    println!("PO         {} ({})", order.po_number, order.po_date);
    println!("Customer   {}", order.customer_name);
    println!("Address    {}", order.customer_address);
    println!("Status     {}", order.status.label());
    println!("Created    {}", order.created_at.to_rfc3339());
    println!();
    for item in &order.items {
        println!(
            "  {:<40} {:>5} x {:>14} = {:>16}{}",
            item.product_description(),
            item.quantity(),
            format_idr(item.price()),
            format_idr(item.total()),
            if item.from_lookup() { "  (catalog)" } else { "" }
        );
    }
    println!("  {:>80}", format_idr(order.total_amount));
    println!();
    for record in &order.status_history {
        match &record.note {
            Some(note) => println!(
                "  {}  {:<16} {}",
                record.date.to_rfc3339(),
                record.status.label(),
                note
            ),
            None => println!("  {}  {}", record.date.to_rfc3339(), record.status.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_item_keeps_colons_in_the_description() {
        assert_eq!(
            split_manual("Cap: red:2:1500").unwrap(),
            ("Cap: red", "2", "1500")
        );
        assert!(split_manual("Cap:2").is_err());
    }

    #[test]
    fn lookup_quantity_is_optional() {
        assert_eq!(split_lookup("3").unwrap(), (ItemId(3), None));
        assert_eq!(split_lookup("3:4").unwrap(), (ItemId(3), Some("4")));
        assert!(split_lookup("tyre:4").is_err());
    }

    #[test]
    fn first_row_is_reused_once() {
        let mut draft = OrderDraft::default();
        let mut first_row = Some(draft.first_item_id());

        let a = next_row(&mut draft, &mut first_row);
        let b = next_row(&mut draft, &mut first_row);
        assert_eq!(a, draft.first_item_id());
        assert_ne!(a, b);
        assert_eq!(draft.items().len(), 2);
    }

    #[test]
    fn cli_parses_create() {
        let cli = Cli::try_parse_from([
            "sales-orders",
            "create",
            "--po",
            "PO-1",
            "--customer",
            "Acme",
            "--address",
            "Addr",
            "--item",
            "Valve caps:2:50000",
            "--lookup",
            "1:4",
            "--status",
            "delivery",
        ])
        .unwrap();
        match cli.command {
            Commands::Create {
                status,
                items,
                lookups,
                ..
            } => {
                assert_eq!(status, OrderStatus::Delivery);
                assert_eq!(items, vec!["Valve caps:2:50000"]);
                assert_eq!(lookups, vec!["1:4"]);
            }
            _ => panic!("Expected create"),
        }

        assert!(Cli::try_parse_from(["sales-orders", "list", "--status", "shipped"]).is_err());
    }

    #[test]
    fn cli_parses_summary_json_flag() {
        let cli = Cli::try_parse_from(["sales-orders", "summary", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Summary { json: true }));
        let cli = Cli::try_parse_from(["sales-orders", "summary"]).unwrap();
        assert!(matches!(cli.command, Commands::Summary { json: false }));
    }
}
