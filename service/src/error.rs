use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    RenameFailed(String),
    InventoryFailed(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Error::RenameFailed(message) => write!(f, "Rename failed: {}", message),
            Error::InventoryFailed(message) => write!(f, "Inventory update failed: {}", message),
        }
    }
}
