//! # Inventory Tracker
//!
//! A single-user inventory of products (id, name, quantity, price) driven
//! from an interactive console menu and kept in a JSON file between runs.
//!
//! The pieces, leaf first:
//!
//! - [`domain::Product`] - one line item
//! - [`inventory::Inventory`] - the keyed collection, in insertion order
//! - [`store::InventoryStore`] - whole-file load and save
//! - [`inventory_actor::InventoryService`] - the task that owns the inventory,
//!   reached through [`clients::InventoryClient`]
//! - [`command_loop::CommandLoop`] - the menu-driven console
//! - [`app_system::InventorySystem`] - startup and shutdown wiring

pub mod app_system;
pub mod clients;
pub mod command_loop;
pub mod config;
pub mod domain;
pub mod error;
pub mod inventory;
pub mod inventory_actor;
pub mod messages;
pub mod store;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod test_strategies;
