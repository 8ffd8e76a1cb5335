//! # Commands Module
//!
//! Turns input lines into commands and runs them against the session state.
//!
//! ## Command Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Session Commands                                 │
//! │                                                                         │
//! │  ┌─────────────────────────┐       ┌─────────────────────────────────┐ │
//! │  │   Catalog (catalog.rs)  │       │   Cart (cart.rs)                │ │
//! │  │                         │       │                                 │ │
//! │  │   list / products       │       │   cart / show     get_cart      │ │
//! │  │     list_products       │       │   add <id>        add_to_cart   │ │
//! │  │                         │       │   inc|+ <id>      increment_item│ │
//! │  └─────────────────────────┘       │   dec|- <id>      decrement_item│ │
//! │                                    │   rm|remove <id>  remove_from.. │ │
//! │  help · quit|exit|q                │   clear           clear_cart    │ │
//! │                                    └─────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod catalog;

use serde::Serialize;
use shopcart_core::{Catalog, ProductId};

use crate::error::ApiError;
use crate::state::CartState;

pub use cart::CartResponse;
pub use catalog::CatalogResponse;

/// Usage lines printed by `help`.
pub const USAGE: &[&str] = &[
    "list            show the products on offer",
    "cart            show the cart",
    "add <id>        add one unit of a product",
    "inc <id>        add one more unit (alias: +)",
    "dec <id>        take one unit off (alias: -)",
    "rm <id>         drop a product from the cart (alias: remove)",
    "clear           empty the cart",
    "help            show this help",
    "quit            end the session (alias: exit, q)",
];

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ListProducts,
    ShowCart,
    Add(ProductId),
    Increment(ProductId),
    Decrement(ProductId),
    Remove(ProductId),
    Clear,
    Help,
    Quit,
}

impl Command {
    /// Whether the command changes the cart.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::Add(_)
                | Command::Increment(_)
                | Command::Decrement(_)
                | Command::Remove(_)
                | Command::Clear
        )
    }
}

/// Parses one input line.
///
/// Returns `Ok(None)` for blank lines and `#` comments.
///
/// ## Example
/// ```rust
/// use shopcart_cli::commands::{parse_command, Command};
/// use shopcart_core::ProductId;
///
/// assert_eq!(parse_command("add 2").unwrap(), Some(Command::Add(ProductId::new(2))));
/// assert_eq!(parse_command("  # note").unwrap(), None);
/// assert!(parse_command("add").is_err());
/// ```
pub fn parse_command(line: &str) -> Result<Option<Command>, ApiError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = line.split_whitespace();
    let verb = match tokens.next() {
        Some(verb) => verb.to_lowercase(),
        None => return Ok(None),
    };
    let arg = tokens.next();

    if let Some(extra) = tokens.next() {
        return Err(ApiError::validation(format!(
            "unexpected argument '{}' for '{}'",
            extra, verb
        )));
    }

    let command = match verb.as_str() {
        "list" | "products" => no_arg(Command::ListProducts, &verb, arg)?,
        "cart" | "show" => no_arg(Command::ShowCart, &verb, arg)?,
        "clear" => no_arg(Command::Clear, &verb, arg)?,
        "help" | "?" => no_arg(Command::Help, &verb, arg)?,
        "quit" | "exit" | "q" => no_arg(Command::Quit, &verb, arg)?,
        "add" => Command::Add(product_id(arg)?),
        "inc" | "+" => Command::Increment(product_id(arg)?),
        "dec" | "-" => Command::Decrement(product_id(arg)?),
        "rm" | "remove" => Command::Remove(product_id(arg)?),
        other => {
            return Err(ApiError::validation(format!(
                "unknown command '{}' (try 'help')",
                other
            )))
        }
    };

    Ok(Some(command))
}

fn no_arg(command: Command, verb: &str, arg: Option<&str>) -> Result<Command, ApiError> {
    match arg {
        None => Ok(command),
        Some(arg) => Err(ApiError::validation(format!(
            "unexpected argument '{}' for '{}'",
            arg, verb
        ))),
    }
}

fn product_id(arg: Option<&str>) -> Result<ProductId, ApiError> {
    Ok(arg.unwrap_or("").parse::<ProductId>()?)
}

/// What a command produced, ready for the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Response {
    Catalog(CatalogResponse),
    Cart(CartResponse),
    Help { commands: Vec<&'static str> },
    Error(ApiError),
}

/// Runs a command against the session state.
///
/// `Quit` is handled by the session loop and answers with the cart.
pub fn execute(
    command: Command,
    catalog: &Catalog,
    cart: &mut CartState,
) -> Result<Response, ApiError> {
    let response = match command {
        Command::ListProducts => Response::Catalog(catalog::list_products(catalog)),
        Command::ShowCart | Command::Quit => Response::Cart(cart::get_cart(cart)),
        Command::Add(id) => Response::Cart(cart::add_to_cart(catalog, cart, id)?),
        Command::Increment(id) => Response::Cart(cart::increment_item(cart, id)),
        Command::Decrement(id) => Response::Cart(cart::decrement_item(cart, id)),
        Command::Remove(id) => Response::Cart(cart::remove_from_cart(cart, id)),
        Command::Clear => Response::Cart(cart::clear_cart(cart)),
        Command::Help => Response::Help {
            commands: USAGE.to_vec(),
        },
    };

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn id(n: u32) -> ProductId {
        ProductId::new(n)
    }

    #[test]
    fn test_parse_verbs_and_aliases() {
        let cases = [
            ("list", Command::ListProducts),
            ("products", Command::ListProducts),
            ("cart", Command::ShowCart),
            ("SHOW", Command::ShowCart),
            ("add 1", Command::Add(id(1))),
            ("inc 2", Command::Increment(id(2))),
            ("+ 2", Command::Increment(id(2))),
            ("dec 3", Command::Decrement(id(3))),
            ("- 3", Command::Decrement(id(3))),
            ("rm 4", Command::Remove(id(4))),
            ("remove 4", Command::Remove(id(4))),
            ("clear", Command::Clear),
            ("help", Command::Help),
            ("?", Command::Help),
            ("quit", Command::Quit),
            ("exit", Command::Quit),
            ("q", Command::Quit),
        ];

        for (line, expected) in cases {
            assert_eq!(parse_command(line).unwrap(), Some(expected), "line: {}", line);
        }
    }

    #[test]
    fn test_parse_ignores_blank_and_comments() {
        assert_eq!(parse_command("").unwrap(), None);
        assert_eq!(parse_command("   \t").unwrap(), None);
        assert_eq!(parse_command("# add 1").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        for line in ["add", "add one", "inc -1", "frobnicate 1", "clear 1", "add 1 2"] {
            let err = parse_command(line).unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationError, "line: {}", line);
        }
    }

    #[test]
    fn test_mutation_flag() {
        assert!(Command::Add(id(1)).is_mutation());
        assert!(Command::Clear.is_mutation());
        assert!(!Command::ShowCart.is_mutation());
        assert!(!Command::Help.is_mutation());
    }

    #[test]
    fn test_execute_routes_to_handlers() {
        let catalog = Catalog::default();
        let mut cart = CartState::new();

        match execute(Command::ListProducts, &catalog, &mut cart).unwrap() {
            Response::Catalog(c) => assert_eq!(c.products.len(), 4),
            other => panic!("unexpected response {:?}", other),
        }

        match execute(Command::Add(id(4)), &catalog, &mut cart).unwrap() {
            Response::Cart(c) => assert_eq!(c.totals.total_items, 1),
            other => panic!("unexpected response {:?}", other),
        }

        let err = execute(Command::Add(id(40)), &catalog, &mut cart).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        assert!(matches!(
            execute(Command::Help, &catalog, &mut cart).unwrap(),
            Response::Help { .. }
        ));
    }

    #[test]
    fn test_response_json_is_tagged() {
        let json = serde_json::to_value(Response::Error(ApiError::validation("bad"))).unwrap();
        assert_eq!(json["kind"], "error");
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "bad");
    }
}
