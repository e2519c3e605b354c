use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::ValidationError;

// ============================================================================
// Price - shared value object
// ============================================================================

/// Supported currencies. Only JPY for now; multi-currency is not supported yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Currency {
    #[default]
    Jpy,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Jpy => "JPY",
        }
    }
}

impl FromStr for Currency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "JPY" => Ok(Currency::Jpy),
            other => Err(ValidationError::UnsupportedCurrency(other.to_string())),
        }
    }
}

impl TryFrom<String> for Currency {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.code().to_string()
    }
}

/// Non-negative amount in the fixed currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PriceRepr", into = "PriceRepr")]
pub struct Price {
    amount: i32,
    currency: Currency,
}

impl Price {
    pub fn new(amount: i32) -> Result<Self, ValidationError> {
        if amount < 0 {
            return Err(ValidationError::NegativePrice(amount));
        }
        Ok(Self {
            amount,
            currency: Currency::Jpy,
        })
    }

    pub fn amount(&self) -> i32 {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount(), self.currency().code())
    }
}

#[derive(Serialize, Deserialize)]
struct PriceRepr {
    amount: i32,
    currency: Currency,
}

impl TryFrom<PriceRepr> for Price {
    type Error = ValidationError;

    fn try_from(repr: PriceRepr) -> Result<Self, Self::Error> {
        let price = Price::new(repr.amount)?;
        Ok(Self {
            currency: repr.currency,
            ..price
        })
    }
}

impl From<Price> for PriceRepr {
    fn from(price: Price) -> Self {
        Self {
            amount: price.amount,
            currency: price.currency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_positive_prices() {
        for amount in [0, 1, 1_980, i32::MAX] {
            let price = Price::new(amount).unwrap();
            assert_eq!(price.amount(), amount);
            assert_eq!(price.currency(), Currency::Jpy);
            assert_eq!(price.currency().code(), "JPY");
        }
    }

    #[test]
    fn test_negative_prices_rejected() {
        for amount in [-1, -500, i32::MIN] {
            assert!(matches!(
                Price::new(amount),
                Err(ValidationError::NegativePrice(a)) if a == amount
            ));
        }
    }

    #[test]
    fn test_price_display() {
        assert_eq!(Price::new(2_480).unwrap().to_string(), "2480 JPY");
    }

    #[test]
    fn test_price_serialization_shape() {
        let json = serde_json::to_value(Price::new(300).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({ "amount": 300, "currency": "JPY" }));
    }

    #[test]
    fn test_deserialization_rejects_invalid_prices() {
        let negative = serde_json::from_str::<Price>(r#"{"amount":-1,"currency":"JPY"}"#);
        assert!(negative.is_err());

        let usd = serde_json::from_str::<Price>(r#"{"amount":10,"currency":"USD"}"#);
        assert!(usd.is_err());
    }
}
