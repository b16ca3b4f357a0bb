use std::io::{self, Write};

use anyhow::{Context, Result};
use prometheus_client::encoding::text::encode;

use crate::abstract_trait::DynProductGrpcClient;
use crate::controller::ProductListController;
use crate::state::AppState;

/// Runs the interactive product console until `q` or EOF. All list
/// mutations go through the controller; `v` reads a single product
/// through the client directly.
pub async fn run(state: AppState) -> Result<()> {
    let service = state.di_container.product_clients.clone();
    let mut controller = ProductListController::new(service.clone());

    controller.load().await;

    loop {
        render(&controller);
        print!("> ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let read = io::stdin()
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            break;
        }

        let input = line.trim();
        let (command, arg) = match input.split_once(' ') {
            Some((command, arg)) => (command, arg.trim()),
            None => (input, ""),
        };

        match command {
            "" => {}
            "q" => break,
            "h" => print_help(),
            "r" => controller.load().await,
            "n" => {
                if controller.next_page() {
                    controller.load().await;
                }
            }
            "p" => {
                if controller.prev_page() {
                    controller.load().await;
                }
            }
            "a" => {
                // Reuse an already-open create form so a failed submit
                // keeps what was typed.
                let form = &controller.state.form;
                if !(form.visible && form.editing.is_none()) {
                    controller.open_create_form();
                }
                fill_draft(&mut controller)?;
                controller.submit().await;
            }
            "e" => match parse_id(arg) {
                Some(id) => {
                    let resuming = controller.state.form.visible
                        && controller
                            .state
                            .form
                            .editing
                            .as_ref()
                            .is_some_and(|product| product.id == id);
                    if resuming || controller.open_edit_form(id) {
                        fill_draft(&mut controller)?;
                        controller.submit().await;
                    } else {
                        println!("No product with id {id} on this page");
                    }
                }
                None => println!("Usage: e <id>"),
            },
            "c" => controller.cancel_form(),
            "d" => match parse_id(arg) {
                Some(id) => {
                    if confirm(&format!("Delete product {id}? (y/N) "))? {
                        controller.delete(id).await;
                    }
                }
                None => println!("Usage: d <id>"),
            },
            "v" => match parse_id(arg) {
                Some(id) => show_product(&service, id).await,
                None => println!("Usage: v <id>"),
            },
            "m" => print_metrics(&state)?,
            other => println!("Unknown command '{other}', h for help"),
        }
    }

    Ok(())
}

fn render(controller: &ProductListController) {
    let state = &controller.state;

    println!();
    if let Some(error) = &state.error {
        println!("! {error}");
    }

    if state.items.is_empty() {
        println!("No products found");
    } else {
        println!(
            "{:>4}  {:<20} {:<30} {:>10} {:>8}",
            "id", "name", "description", "price", "quantity"
        );
        for product in &state.items {
            println!(
                "{:>4}  {:<20} {:<30} {:>10.2} {:>8}",
                product.id, product.name, product.description, product.price, product.quantity
            );
        }
    }

    let mut hints = Vec::new();
    if controller.can_prev_page() {
        hints.push("p = prev");
    }
    if controller.can_next_page() {
        hints.push("n = next");
    }
    let hint = if hints.is_empty() {
        String::new()
    } else {
        format!("  [{}]", hints.join(", "))
    };

    println!(
        "Page {} of {}{hint}",
        state.pagination.page + 1,
        controller.page_count()
    );

    if state.form.visible {
        let target = match &state.form.editing {
            Some(product) => format!("editing product {}", product.id),
            None => "new product".to_string(),
        };
        println!("Form open ({target}): a or e <id> resumes, c cancels");
    }
}

fn print_help() {
    println!("Commands:");
    println!("  r        refresh the product list");
    println!("  n / p    next / previous page");
    println!("  a        add a product");
    println!("  e <id>   edit a product on this page");
    println!("  c        cancel the open form");
    println!("  d <id>   delete a product");
    println!("  v <id>   view a product as JSON");
    println!("  m        dump client metrics");
    println!("  h        this help");
    println!("  q        quit");
}

/// Prompts for every form field. Enter keeps the bracketed value, so
/// resuming after a rejected submit only retypes the bad field.
fn fill_draft(controller: &mut ProductListController) -> Result<()> {
    match &controller.state.form.editing {
        Some(product) => println!("Edit product {} (enter keeps the value in brackets)", product.id),
        None => println!("New product (enter keeps the value in brackets)"),
    }

    let draft = &mut controller.state.form.draft;
    draft.name = prompt_field("Name", &draft.name)?;
    draft.description = prompt_field("Description", &draft.description)?;
    draft.price = prompt_field("Price", &draft.price)?;
    draft.quantity = prompt_field("Quantity", &draft.quantity)?;

    Ok(())
}

fn prompt_field(label: &str, current: &str) -> Result<String> {
    print!("  {label} [{current}]: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read input")?;

    let value = line.trim_end_matches(['\r', '\n']);
    if value.is_empty() {
        Ok(current.to_string())
    } else {
        Ok(value.to_string())
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt}");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read input")?;

    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn parse_id(arg: &str) -> Option<i64> {
    arg.parse::<i64>().ok()
}

async fn show_product(service: &DynProductGrpcClient, id: i64) {
    match service.get(id).await {
        Ok(product) => match serde_json::to_string_pretty(&product) {
            Ok(json) => println!("{json}"),
            Err(e) => println!("Failed to render product: {e}"),
        },
        Err(e) => println!("Failed to load product: {e}"),
    }
}

fn print_metrics(state: &AppState) -> Result<()> {
    let registry = state
        .registry
        .lock()
        .map_err(|_| anyhow::anyhow!("Metrics registry lock poisoned"))?;

    let mut buffer = String::new();
    encode(&mut buffer, &registry).context("Failed to encode metrics")?;
    println!("{buffer}");

    Ok(())
}
