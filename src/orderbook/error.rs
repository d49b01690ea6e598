//! Order book error types

use super::order::{OrderId, Price, Quantity};
use std::fmt;

/// Errors that can occur when submitting orders to the book
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderBookError {
    /// An order with this id is already live in the book
    DuplicateOrderId(OrderId),

    /// Order quantity must be positive
    InvalidQuantity(Quantity),

    /// Limit price must be positive
    InvalidPrice(Price),
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::DuplicateOrderId(id) => {
                write!(f, "Duplicate order id: {}", id)
            }
            OrderBookError::InvalidQuantity(quantity) => {
                write!(f, "Invalid order quantity: {}", quantity)
            }
            OrderBookError::InvalidPrice(price) => {
                write!(f, "Invalid limit price: {}", price)
            }
        }
    }
}

impl std::error::Error for OrderBookError {}
