//! Connectors supply moves to the match driver from different kinds of players.

mod computer;
mod connector;
mod console;

pub use computer::SearchConnector;
pub use connector::{Connector, ConnectorError};
pub use console::ConsoleConnector;
