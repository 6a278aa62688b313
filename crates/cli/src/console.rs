//! Menu-driven console controller.
//!
//! An explicit read / dispatch loop over three states. Each pass through
//! `MainMenu` prints the menu and reads one choice; `AwaitingInput` collects the
//! fields for that choice with sequential prompts and calls into the store.

use std::io::{BufRead, Write};

use stockroom_core::{DomainError, ProductId};
use stockroom_inventory::Inventory;
use stockroom_products::{ExpiryDate, Product, WarrantyPeriod};

use crate::config::Config;
use crate::error::CliError;
use crate::menu::{CHOICE_PROMPT, INVALID_CHOICE, MENU, MenuChoice, ProductType};
use crate::prompt::Prompter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleState {
    MainMenu,
    AwaitingInput(MenuChoice),
    Exit,
}

#[derive(Debug)]
pub struct Console<R, W> {
    prompter: Prompter<R, W>,
    inventory: Inventory,
    state: ConsoleState,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W, config: &Config) -> Self {
        Self::with_inventory(
            reader,
            writer,
            config,
            Inventory::with_id_policy(config.id_policy),
        )
    }

    /// Start from an existing store (its id policy is kept).
    pub fn with_inventory(reader: R, writer: W, config: &Config, inventory: Inventory) -> Self {
        Self {
            prompter: Prompter::new(reader, writer, config.input_mode),
            inventory,
            state: ConsoleState::MainMenu,
        }
    }

    pub fn state(&self) -> ConsoleState {
        self.state
    }

    pub fn into_parts(self) -> (Inventory, W) {
        (self.inventory, self.prompter.into_writer())
    }

    /// Run until the operator picks Exit.
    ///
    /// Returns an error when input runs out, the console cannot be written, or
    /// (in `InputMode::Abort`) a value fails to parse.
    pub fn run(&mut self) -> Result<(), CliError> {
        tracing::info!(mode = ?self.prompter.mode(), "console session started");
        while self.state != ConsoleState::Exit {
            self.state = self.step()?;
        }
        tracing::info!(products = self.inventory.len(), "console session ended");
        Ok(())
    }

    /// Execute the current state once and return the next one.
    pub fn step(&mut self) -> Result<ConsoleState, CliError> {
        match self.state {
            ConsoleState::MainMenu => self.main_menu(),
            ConsoleState::AwaitingInput(choice) => {
                tracing::debug!(choice = choice.code(), "dispatching menu choice");
                match choice {
                    MenuChoice::AddProduct => self.add_product()?,
                    MenuChoice::UpdateProduct => self.update_product()?,
                    MenuChoice::ViewAll => self.view_all()?,
                    MenuChoice::UpdateStock => self.update_stock()?,
                    MenuChoice::Exit => return Ok(ConsoleState::Exit),
                }
                Ok(ConsoleState::MainMenu)
            }
            ConsoleState::Exit => Ok(ConsoleState::Exit),
        }
    }

    fn main_menu(&mut self) -> Result<ConsoleState, CliError> {
        self.prompter.print(MENU)?;
        let code = self.prompter.read_int(CHOICE_PROMPT, "choice")?;
        match MenuChoice::from_code(code) {
            Some(choice) => Ok(ConsoleState::AwaitingInput(choice)),
            None => {
                self.prompter.say(INVALID_CHOICE)?;
                Ok(ConsoleState::MainMenu)
            }
        }
    }

    fn add_product(&mut self) -> Result<(), CliError> {
        let p = &mut self.prompter;
        let product_type = ProductType::from_code(p.read_int(
            "Enter product type (1 for Perishable, 2 for Non-Perishable): ",
            "product type",
        )?);
        let id: ProductId = p.read_parsed("Enter product ID: ", "product ID")?;
        let name = p.read_text("Enter product name: ", "product name")?;
        let price: f64 = p.read_parsed("Enter product price: ", "price")?;
        let quantity = p.read_int("Enter product quantity in stock: ", "quantity")?;

        let product = match product_type {
            ProductType::Perishable => {
                let expiry: ExpiryDate =
                    p.read_parsed("Enter expiry date (yyyy-mm-dd): ", "expiry date")?;
                Product::perishable(id, name, price, quantity, expiry)
            }
            ProductType::NonPerishable => {
                let months = p.read_int("Enter warranty period (in months): ", "warranty period")?;
                Product::non_perishable(id, name, price, quantity, WarrantyPeriod::months(months))
            }
        };

        match self.inventory.add(product) {
            Ok(()) => Ok(()),
            Err(DomainError::Conflict(_)) => {
                self.prompter.say(format_args!("Product with ID {id} already exists."))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn update_product(&mut self) -> Result<(), CliError> {
        let p = &mut self.prompter;
        let id: ProductId = p.read_parsed("Enter product ID to update: ", "product ID")?;
        let name = p.read_text("Enter new product name: ", "product name")?;
        let price: f64 = p.read_parsed("Enter new product price: ", "price")?;
        let quantity = p.read_int("Enter new product quantity in stock: ", "quantity")?;

        let outcome = self.inventory.update(id, name, price, quantity);
        self.report(outcome)
    }

    fn view_all(&mut self) -> Result<(), CliError> {
        for line in self.inventory.list_all() {
            self.prompter.say(line)?;
        }
        Ok(())
    }

    fn update_stock(&mut self) -> Result<(), CliError> {
        let p = &mut self.prompter;
        let id: ProductId = p.read_parsed("Enter product ID to update stock: ", "product ID")?;
        let delta = p.read_int("Enter quantity to update: ", "quantity")?;

        let outcome = self.inventory.adjust_stock(id, delta).map(|_| ());
        self.report(outcome)
    }

    /// Not-found is printed and the loop carries on; anything else ends the session.
    fn report(&mut self, outcome: Result<(), DomainError>) -> Result<(), CliError> {
        match outcome {
            Ok(()) => Ok(()),
            Err(DomainError::NotFound(id)) => {
                self.prompter.say(format_args!("Product with ID {id} not found."))
            }
            Err(e) => Err(e.into()),
        }
    }
}
