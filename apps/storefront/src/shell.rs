//! # Storefront Shell
//!
//! Line-oriented front end: one command per line in, a rendered screen (or
//! a JSON response) out.
//!
//! ## Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  read line ──► ShellCommand::parse ──► Shell::execute ──► Reply         │
//! │      ▲              │ blank / #comment → skip      │                    │
//! │      │              │ bad verb → ApiError          ▼                    │
//! │      │              ▼                        write_reply (text | json)  │
//! │      └──────────────────────────────────────────────┘                   │
//! │                                   until `quit` or end of input          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use beesy_core::projection::Page;
use beesy_core::{Catalog, Product, Screen, View};
use serde::Serialize;
use tracing::{info, warn};

use crate::commands::{self, CartResponse, CheckoutResponse};
use crate::error::{ApiError, StorefrontError};
use crate::render::{CartSummaryText, CheckoutText, ProductText, ScreenText, HELP};
use crate::state::{ConfigState, SessionState};

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Navigate(View),
    /// `go <name>`: the name is parsed when executed so the error is an
    /// `ApiError` like any other command failure.
    NavigateByName(String),
    Add(String),
    Increase(String),
    Decrease(String),
    Delete(String),
    Info(String),
    Show,
    Checkout,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parses one line. Blank lines and `#` comments yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<ShellCommand>, ApiError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default().to_ascii_lowercase();
        let arg = words.next();

        if let Some(extra) = words.next() {
            return Err(ApiError::validation(format!(
                "Unexpected argument: {}",
                extra
            )));
        }

        let id = |verb: &str| {
            arg.map(str::to_string)
                .ok_or_else(|| ApiError::validation(format!("`{}` needs a product id", verb)))
        };

        let command = match verb.as_str() {
            "home" | "landing" => ShellCommand::Navigate(View::Landing),
            "plants" | "products" | "start" | "continue" => ShellCommand::Navigate(View::Products),
            "cart" => ShellCommand::Navigate(View::Cart),
            "go" => {
                let name = arg.ok_or_else(|| ApiError::validation("`go` needs a view name"))?;
                ShellCommand::NavigateByName(name.to_string())
            }
            "add" => ShellCommand::Add(id("add")?),
            "inc" | "+" => ShellCommand::Increase(id("inc")?),
            "dec" | "-" => ShellCommand::Decrease(id("dec")?),
            "del" | "rm" => ShellCommand::Delete(id("del")?),
            "info" => ShellCommand::Info(id("info")?),
            "show" => ShellCommand::Show,
            "checkout" => ShellCommand::Checkout,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => return Err(ApiError::unknown_command(other)),
        };

        Ok(Some(command))
    }
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reply", content = "data", rename_all = "camelCase")]
pub enum Reply {
    Screen(Screen),
    Cart(CartResponse),
    Product(Product),
    Checkout(CheckoutResponse),
    Help(String),
    Quit,
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Text,
    /// One JSON object per reply or error, one per line.
    Json,
}

/// The interactive session: state plus how to print it.
pub struct Shell {
    catalog: Catalog,
    session: SessionState,
    config: ConfigState,
    mode: OutputMode,
}

impl Shell {
    pub fn new(catalog: Catalog, config: ConfigState, mode: OutputMode) -> Self {
        Shell {
            catalog,
            session: SessionState::new(),
            config,
            mode,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Runs one command against the session.
    pub fn execute(&mut self, command: ShellCommand) -> Result<Reply, ApiError> {
        let catalog = &self.catalog;
        let session = &mut self.session;

        let reply = match command {
            ShellCommand::Navigate(view) => {
                Reply::Screen(commands::navigate(catalog, session, view))
            }
            ShellCommand::NavigateByName(name) => {
                Reply::Screen(commands::navigate_by_name(catalog, session, &name)?)
            }
            ShellCommand::Add(id) => Reply::Cart(commands::add_to_cart(catalog, session, &id)?),
            ShellCommand::Increase(id) => Reply::Cart(commands::increase_cart_item(session, &id)),
            ShellCommand::Decrease(id) => Reply::Cart(commands::decrease_cart_item(session, &id)),
            ShellCommand::Delete(id) => Reply::Cart(commands::remove_from_cart(session, &id)),
            ShellCommand::Info(id) => Reply::Product(commands::get_product(catalog, &id)?),
            ShellCommand::Show => Reply::Screen(commands::get_screen(catalog, session)),
            ShellCommand::Checkout => Reply::Checkout(commands::checkout(session)),
            ShellCommand::Help => Reply::Help(HELP.to_string()),
            ShellCommand::Quit => Reply::Quit,
        };

        Ok(reply)
    }

    /// Reads commands until `quit` or end of input.
    pub fn run<R, W>(&mut self, input: R, mut out: W) -> Result<(), StorefrontError>
    where
        R: BufRead,
        W: Write,
    {
        if self.mode == OutputMode::Text {
            let screen = commands::get_screen(&self.catalog, &self.session);
            self.write_screen(&mut out, &screen)?;
            write!(out, "{}", self.config.prompt)?;
            out.flush()?;
        }

        for line in input.lines() {
            let line = line?;

            let outcome = match ShellCommand::parse(&line) {
                Ok(None) => continue,
                Ok(Some(command)) => self.execute(command),
                Err(err) => Err(err),
            };

            match outcome {
                Ok(Reply::Quit) => {
                    self.write_reply(&mut out, &Reply::Quit)?;
                    out.flush()?;
                    break;
                }
                Ok(reply) => self.write_reply(&mut out, &reply)?,
                Err(err) => {
                    warn!(line = %line.trim(), error = %err, "command rejected");
                    self.write_error(&mut out, &err)?;
                }
            }

            if self.mode == OutputMode::Text {
                write!(out, "{}", self.config.prompt)?;
            }
            out.flush()?;
        }

        info!(revision = self.session.revision(), "session ended");
        Ok(())
    }

    fn write_reply<W: Write>(&self, out: &mut W, reply: &Reply) -> Result<(), StorefrontError> {
        if self.mode == OutputMode::Json {
            match serde_json::to_string(reply) {
                Ok(line) => writeln!(out, "{}", line)?,
                Err(e) => {
                    let err = ApiError::from(e);
                    warn!(error = %err, "reply dropped");
                    self.write_error(out, &err)?;
                }
            }
            return Ok(());
        }

        let config = &self.config;
        match reply {
            Reply::Screen(screen) => self.write_screen(out, screen)?,
            Reply::Cart(response) => {
                write!(out, "{}", CartSummaryText { response, config })?;
                // The cart page re-renders on every change, like the web UI.
                let screen = commands::get_screen(&self.catalog, &self.session);
                if matches!(screen.page, Page::Cart(_)) {
                    self.write_screen(out, &screen)?;
                }
            }
            Reply::Product(product) => write!(out, "{}", ProductText { product, config })?,
            Reply::Checkout(response) => write!(out, "{}", CheckoutText { response, config })?,
            Reply::Help(text) => write!(out, "{}", text)?,
            Reply::Quit => writeln!(out, "Thanks for visiting {}!", config.store_name)?,
        }

        Ok(())
    }

    fn write_screen<W: Write>(&self, out: &mut W, screen: &Screen) -> Result<(), StorefrontError> {
        write!(
            out,
            "{}",
            ScreenText {
                screen,
                config: &self.config,
            }
        )?;
        Ok(())
    }

    fn write_error<W: Write>(&self, out: &mut W, err: &ApiError) -> Result<(), StorefrontError> {
        match self.mode {
            OutputMode::Json => {
                serde_json::to_writer(&mut *out, &serde_json::json!({ "error": err }))?;
                writeln!(out)?;
            }
            OutputMode::Text => writeln!(out, "error: {}", err.message)?,
        }
        Ok(())
    }
}
