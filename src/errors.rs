use item::Item;
use std::error::Error;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum MiningError {
    // A threshold or length bound was out of range. Reported before any
    // mining work begins.
    InvalidParameter(String),
    // The taxonomy chain starting at this item loops back on itself.
    CyclicTaxonomy(Item),
}

impl fmt::Display for MiningError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MiningError::InvalidParameter(ref message) => {
                write!(f, "invalid parameter: {}", message)
            }
            MiningError::CyclicTaxonomy(item) => {
                write!(f, "taxonomy contains a cycle through item {}", item)
            }
        }
    }
}

impl Error for MiningError {}
