use derive_more::{Display, Error};

/// Order entity
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Order {
    pub id: String,
    pub price: f64,
    pub tax: f64,
    pub final_price: f64,
}

#[derive(Debug, Display, Error, PartialEq)]
pub(crate) enum OrderError {
    #[display("invalid id")]
    InvalidId,
    #[display("invalid price")]
    InvalidPrice,
    #[display("invalid tax")]
    InvalidTax,
}

impl Order {
    /// Build a validated order, the final price is price plus tax.
    pub fn new(id: impl Into<String>, price: f64, tax: f64) -> Result<Self, OrderError> {
        let id = id.into();
        if id.is_empty() {
            return Err(OrderError::InvalidId);
        }
        // NaN and infinities fail these checks too
        if !(price.is_finite() && price > 0.0) {
            return Err(OrderError::InvalidPrice);
        }
        if !(tax.is_finite() && tax > 0.0) {
            return Err(OrderError::InvalidTax);
        }
        let final_price = price + tax;
        if !final_price.is_finite() {
            return Err(OrderError::InvalidPrice);
        }
        Ok(Self {
            id,
            price,
            tax,
            final_price,
        })
    }
}

/// Persistence capability over orders.
pub(crate) trait OrderRepository {
    type Error: std::error::Error + 'static;

    /// Every stored order, oldest saved first.
    async fn get_all(&self) -> Result<Vec<Order>, Self::Error>;

    async fn save(&self, order: &Order) -> Result<(), Self::Error>;
}
