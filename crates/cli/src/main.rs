//! Interactive shell for the stock manager backend.
//!
//! Thin plumbing only: reads commands from stdin, drives the view state
//! machine, prints the ordered working set. All inventory semantics live
//! in `stockmgr-view`.

use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::Result;

use stockmgr_client::HttpProductApi;
use stockmgr_core::{Product, SortKey, StatusFilter};
use stockmgr_view::InventoryView;

const AUTH_HELP: &str = "commands: register <user> <pass> | login <user> <pass> | quit";
const PRODUCTS_HELP: &str = "\
commands:
  list                    reload with the current query/status
  search <text>           set the free-text query and reload
  status <ACTIVE|DELETED|ALL>
  sort <ID|DESCRIPTION|QUANTITY|STATUS>
  dir                     toggle sort direction
  add <qty> <description>
  del <id>                soft-delete a product
  restore <id>
  out <id>                begin inline stock-out for a product
  qty <n>                 edit the drafted stock-out quantity
  confirm | cancel        finish or abandon the stock-out
  in <id> <qty>           stock-in
  logout | quit";

fn prompt(text: &str) -> Option<String> {
    print!("{text}");
    std::io::stdout().flush().ok()?;
    let mut line = String::new();
    match std::io::stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

fn print_products(items: &[Product]) {
    if items.is_empty() {
        println!("(no products found)");
        return;
    }
    println!("{:>6}  {:<32} {:>8}  {}", "id", "description", "qty", "status");
    for p in items {
        let status = if p.deleted { "DELETED" } else { "ACTIVE" };
        println!("{:>6}  {:<32} {:>8}  {}", p.id, p.description, p.quantity, status);
    }
}

fn print_view(view: &InventoryView) {
    print_products(&view.ordered_items());
    if let Some(message) = view.message() {
        println!("! {message}");
    }
}

/// Register/login loop. Returns false when the user quits.
async fn authenticate(api: &HttpProductApi) -> bool {
    println!("{AUTH_HELP}");
    loop {
        let Some(line) = prompt("auth> ") else {
            return false;
        };
        let mut parts = line.split_whitespace();
        let (cmd, user, pass) = (parts.next(), parts.next(), parts.next());

        match cmd {
            Some("quit") | Some("exit") => return false,
            Some(cmd @ ("login" | "register")) => {
                let (Some(user), Some(pass)) = (user, pass) else {
                    println!("! username and password are required");
                    continue;
                };
                let result = if cmd == "register" {
                    api.register(user, pass).await.map(|()| {
                        println!("registered; now log in");
                        false
                    })
                } else {
                    api.login(user, pass).await.map(|()| true)
                };
                match result {
                    Ok(true) => return true,
                    Ok(false) => {}
                    Err(err) => println!("! {err}"),
                }
            }
            Some(_) | None => println!("{AUTH_HELP}"),
        }
    }
}

async fn run_products(api: Arc<HttpProductApi>) {
    let mut view = InventoryView::new(api.clone());
    view.refresh().await;
    print_view(&view);

    loop {
        let Some(line) = prompt("stock> ") else {
            return;
        };
        let (cmd, rest) = match line.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line.as_str(), ""),
        };

        match cmd {
            "" => continue,
            "quit" | "exit" => return,
            "logout" => {
                api.logout();
                return;
            }
            "help" => println!("{PRODUCTS_HELP}"),
            "list" => {
                view.refresh().await;
                print_view(&view);
            }
            "search" => {
                view.set_query(rest);
                view.refresh().await;
                print_view(&view);
            }
            "status" => match rest.parse::<StatusFilter>() {
                Ok(status) => {
                    view.set_status(status).await;
                    print_view(&view);
                }
                Err(err) => println!("! {err}"),
            },
            "sort" => match rest.parse::<SortKey>() {
                Ok(key) => {
                    view.set_sort_by(key);
                    print_view(&view);
                }
                Err(err) => println!("! {err}"),
            },
            "dir" => {
                view.toggle_sort_direction();
                print_view(&view);
            }
            "add" => {
                let (qty, description) = match rest.split_once(' ') {
                    Some((qty, description)) => (qty, description.trim()),
                    None => (rest, ""),
                };
                view.set_draft_quantity(qty);
                view.set_draft_description(description);
                view.create().await;
                print_view(&view);
            }
            "del" | "restore" => match rest.parse() {
                Ok(id) => {
                    if cmd == "del" {
                        view.soft_delete(id).await;
                    } else {
                        view.restore(id).await;
                    }
                    print_view(&view);
                }
                Err(err) => println!("! {err}"),
            },
            "out" => match rest.parse() {
                Ok(id) => {
                    view.open_stock_out(id);
                    match view.stock_out().target() {
                        Some(id) => println!("stock-out open for product {id}; use qty/confirm/cancel"),
                        None => println!("! cannot open stock-out for product {rest}"),
                    }
                }
                Err(err) => println!("! {err}"),
            },
            "qty" => view.edit_stock_out_draft(rest),
            "confirm" => {
                view.confirm_stock_out().await;
                print_view(&view);
            }
            "cancel" => view.cancel_stock_out(),
            "in" => {
                let parsed = rest
                    .split_once(' ')
                    .and_then(|(id, qty)| Some((id.parse().ok()?, qty.trim().parse::<i64>().ok()?)));
                match parsed {
                    Some((id, qty)) => {
                        view.stock_in(id, qty).await;
                        print_view(&view);
                    }
                    None => println!("! usage: in <id> <qty>"),
                }
            }
            other => println!("! unknown command {other:?}; try help"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    stockmgr_observability::init();

    let api_url = std::env::var("STOCKMGR_API_URL").unwrap_or_else(|_| {
        tracing::debug!("STOCKMGR_API_URL not set; using http://localhost:8080");
        "http://localhost:8080".to_string()
    });

    let api = Arc::new(HttpProductApi::new(api_url));
    println!("stockmgr — stock manager client");

    loop {
        if !api.session().is_authenticated() {
            if !authenticate(&api).await {
                break;
            }
        }
        run_products(api.clone()).await;
        if api.session().is_authenticated() {
            // quit from the products loop with a live session ends the app.
            break;
        }
    }

    Ok(())
}
