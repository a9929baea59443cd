//! The interactive console.
//!
//! Shows the menu, collects the fields each command needs line by line, and
//! forwards the command to the inventory service. Bad numbers are re-asked
//! instead of ending the session. Closing the input behaves like
//! "Save and Exit".

mod menu;

pub use menu::*;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument, warn};

use crate::clients::InventoryClient;
use crate::domain::Product;
use crate::error::{CommandError, InventoryError};

const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
const INVALID_QUANTITY: &str = "Invalid quantity. Please enter a whole number of 0 or more.";
const INVALID_PRICE: &str = "Invalid price. Please enter a number of 0 or more.";
const NOT_FOUND: &str = "Product not found.";
const SAVED: &str = "Inventory saved to file.";

/// What the loop does after a command.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
    EndOfInput,
}

pub struct CommandLoop<R, W> {
    client: InventoryClient,
    reader: R,
    writer: W,
}

impl<R, W> CommandLoop<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(client: InventoryClient, reader: R, writer: W) -> Self {
        Self { client, reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Runs until "Save and Exit" succeeds or the input ends.
    #[instrument(name = "command_loop", skip(self))]
    pub async fn run(&mut self) -> Result<(), CommandError> {
        loop {
            self.say(MENU).await?;
            let Some(line) = self.prompt_text(CHOICE_PROMPT).await? else {
                return self.close_at_end_of_input().await;
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                debug!(input = %line, "Rejected menu choice");
                self.say(INVALID_CHOICE).await?;
                continue;
            };

            let flow = match choice {
                MenuChoice::Add => self.add_product().await?,
                MenuChoice::Remove => self.remove_product().await?,
                MenuChoice::Update => self.update_product().await?,
                MenuChoice::View => self.view_inventory().await?,
                MenuChoice::Search => self.search_product().await?,
                MenuChoice::SaveAndExit => self.save_and_exit().await?,
            };

            match flow {
                Flow::Continue => {}
                Flow::Exit => return Ok(()),
                Flow::EndOfInput => return self.close_at_end_of_input().await,
            }
        }
    }

    async fn add_product(&mut self) -> Result<Flow, CommandError> {
        let Some(id) = self.prompt_text("Enter Product ID: ").await? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(name) = self.prompt_text("Enter Product Name: ").await? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(quantity) = self.prompt_parsed("Enter Quantity: ", INVALID_QUANTITY, parse_quantity).await? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(price) = self.prompt_parsed("Enter Price: ", INVALID_PRICE, parse_price).await? else {
            return Ok(Flow::EndOfInput);
        };

        self.client.add_product(Product::new(id, name, quantity, price)).await?;
        self.say("Product added successfully.").await?;
        Ok(Flow::Continue)
    }

    async fn remove_product(&mut self) -> Result<Flow, CommandError> {
        let Some(id) = self.prompt_text("Enter Product ID to remove: ").await? else {
            return Ok(Flow::EndOfInput);
        };

        match self.client.remove_product(id).await? {
            Some(_) => self.say("Product removed successfully.").await?,
            None => self.say(NOT_FOUND).await?,
        }
        Ok(Flow::Continue)
    }

    async fn update_product(&mut self) -> Result<Flow, CommandError> {
        let Some(id) = self.prompt_text("Enter Product ID to update: ").await? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(quantity) = self.prompt_parsed("Enter new Quantity: ", INVALID_QUANTITY, parse_quantity).await? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(price) = self.prompt_parsed("Enter new Price: ", INVALID_PRICE, parse_price).await? else {
            return Ok(Flow::EndOfInput);
        };

        match self.client.update_product(id, quantity, price).await? {
            Some(_) => self.say("Product updated successfully.").await?,
            None => self.say(NOT_FOUND).await?,
        }
        Ok(Flow::Continue)
    }

    async fn view_inventory(&mut self) -> Result<Flow, CommandError> {
        let products = self.client.list_products().await?;
        if products.is_empty() {
            self.say("Inventory is empty.").await?;
        } else {
            for product in &products {
                self.say(&product.to_string()).await?;
            }
        }
        Ok(Flow::Continue)
    }

    async fn search_product(&mut self) -> Result<Flow, CommandError> {
        let Some(term) = self.prompt_text("Enter Product ID or Name to search: ").await? else {
            return Ok(Flow::EndOfInput);
        };

        match self.client.search_product(term).await? {
            Some(product) => self.say(&format!("Product found: {product}")).await?,
            None => self.say(NOT_FOUND).await?,
        }
        Ok(Flow::Continue)
    }

    /// A failed save keeps the session alive so the user can try again.
    async fn save_and_exit(&mut self) -> Result<Flow, CommandError> {
        match self.client.save_inventory().await {
            Ok(_) => {
                self.say(SAVED).await?;
                Ok(Flow::Exit)
            }
            Err(InventoryError::StorageError(reason)) => {
                self.say(&format!("Error saving inventory: {reason}")).await?;
                Ok(Flow::Continue)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn close_at_end_of_input(&mut self) -> Result<(), CommandError> {
        info!("Input closed, saving inventory");
        self.say("").await?;

        match self.client.save_inventory().await {
            Ok(_) => {
                self.say(SAVED).await?;
                Ok(())
            }
            Err(e) => {
                if let InventoryError::StorageError(reason) = &e {
                    self.say(&format!("Error saving inventory: {reason}")).await?;
                }
                Err(e.into())
            }
        }
    }

    /// Asks until `parse` accepts the answer. `None` means the input ended.
    async fn prompt_parsed<T>(
        &mut self,
        prompt: &str,
        invalid: &str,
        parse: fn(&str) -> Option<T>,
    ) -> Result<Option<T>, CommandError> {
        loop {
            let Some(line) = self.prompt_text(prompt).await? else {
                return Ok(None);
            };
            match parse(line.trim()) {
                Some(value) => return Ok(Some(value)),
                None => {
                    warn!(input = %line, "Rejected numeric input");
                    self.say(invalid).await?;
                }
            }
        }
    }

    async fn prompt_text(&mut self, prompt: &str) -> Result<Option<String>, CommandError> {
        self.writer.write_all(prompt.as_bytes()).await?;
        self.writer.flush().await?;
        self.read_line().await
    }

    /// Reads one line; bytes that are not UTF-8 become U+FFFD.
    async fn read_line(&mut self) -> Result<Option<String>, CommandError> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes).await? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&bytes).into_owned();
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    async fn say(&mut self, text: &str) -> Result<(), CommandError> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }
}

fn parse_quantity(input: &str) -> Option<u32> {
    input.parse().ok()
}

/// Finite and not negative; `-0` counts as negative.
fn parse_price(input: &str) -> Option<f64> {
    input
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && price.is_sign_positive())
}
