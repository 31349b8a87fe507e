// Transaction entity
// Wire form accepted from callers and the validated form the scorer consumes

use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DomainError, DomainResult};
use crate::value_objects::{Channel, CustomerId, TransactionId};

/// A transaction record as it arrives from upstream, before validation.
/// Fields are kept as raw JSON so that a missing or mistyped field surfaces
/// as a domain error naming that field instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTransaction {
    #[serde(default)]
    pub transaction_id: Option<Value>,
    #[serde(default)]
    pub customer_id: Option<Value>,
    #[serde(default)]
    pub amount: Option<Value>,
    #[serde(default)]
    pub currency: Option<Value>,
    #[serde(default)]
    pub merchant_name: Option<Value>,
    #[serde(default)]
    pub merchant_category: Option<Value>,
    #[serde(default)]
    pub transaction_type: Option<Value>,
    #[serde(default)]
    pub location: Option<Value>,
    #[serde(default)]
    pub channel: Option<Value>,
    #[serde(default)]
    pub timestamp: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub transaction_id: TransactionId,
    pub customer_id: Option<CustomerId>,
    pub amount: Decimal,
    pub currency: Option<String>,
    pub merchant_name: Option<String>,
    pub merchant_category: Option<String>,
    pub transaction_type: Option<String>,
    pub location: Option<String>,
    pub channel: Option<Channel>,
    pub timestamp: Option<DateTime<FixedOffset>>,
}

impl Transaction {
    pub fn new(transaction_id: impl Into<String>, amount: Decimal) -> Self {
        Self {
            transaction_id: TransactionId(transaction_id.into()),
            customer_id: None,
            amount,
            currency: None,
            merchant_name: None,
            merchant_category: None,
            transaction_type: None,
            location: None,
            channel: None,
            timestamp: None,
        }
    }

    pub fn with_customer(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(CustomerId(customer_id.into()));
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn with_merchant(mut self, merchant_name: impl Into<String>) -> Self {
        self.merchant_name = Some(merchant_name.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = Some(channel);
        self
    }

    pub fn with_transaction_type(mut self, transaction_type: impl Into<String>) -> Self {
        self.transaction_type = Some(transaction_type.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<FixedOffset>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

impl TryFrom<RawTransaction> for Transaction {
    type Error = DomainError;

    fn try_from(raw: RawTransaction) -> DomainResult<Self> {
        let transaction_id = text_field(raw.transaction_id, "transaction_id")?
            .ok_or_else(|| DomainError::invalid("transaction_id", "is required"))?;
        let amount = match raw.amount {
            Some(value) => parse_amount(&value)?,
            None => return Err(DomainError::invalid("amount", "is required")),
        };
        let channel = text_field(raw.channel, "channel")?
            .map(|value| Channel::from_str(&value))
            .transpose()?;
        let timestamp = text_field(raw.timestamp, "timestamp")?
            .map(|value| parse_timestamp(&value))
            .transpose()?;

        Ok(Self {
            transaction_id: TransactionId(transaction_id),
            customer_id: text_field(raw.customer_id, "customer_id")?.map(CustomerId),
            amount,
            currency: text_field(raw.currency, "currency")?.map(|value| value.to_uppercase()),
            merchant_name: text_field(raw.merchant_name, "merchant_name")?,
            merchant_category: text_field(raw.merchant_category, "merchant_category")?,
            transaction_type: text_field(raw.transaction_type, "transaction_type")?,
            location: text_field(raw.location, "location")?,
            channel,
            timestamp,
        })
    }
}

/// Null, absent and blank strings all read as `None`; any non-string is rejected.
fn text_field(value: Option<Value>, field: &'static str) -> DomainResult<Option<String>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
        }
        Some(_) => Err(DomainError::invalid(field, "must be a string")),
    }
}

/// Accepts a JSON number or a numeric string; anything else is rejected
/// rather than read as zero.
pub fn parse_amount(value: &Value) -> DomainResult<Decimal> {
    let text = match value {
        Value::Number(number) => number.to_string(),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(DomainError::invalid("amount", "is empty"));
            }
            trimmed.to_string()
        }
        Value::Null => return Err(DomainError::invalid("amount", "is required")),
        _ => return Err(DomainError::invalid("amount", "must be numeric")),
    };
    let amount = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| DomainError::invalid("amount", format!("'{text}' is not numeric")))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(DomainError::invalid(
            "amount",
            format!("must not be negative, got {amount}"),
        ));
    }
    Ok(amount)
}

/// RFC 3339 timestamps keep their offset; naive `YYYY-MM-DD HH:MM:SS`
/// timestamps are taken as UTC.
pub fn parse_timestamp(value: &str) -> DomainResult<DateTime<FixedOffset>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed);
    }
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(Utc.fix().from_utc_datetime(&naive));
        }
    }
    Err(DomainError::invalid(
        "timestamp",
        format!("'{value}' is not an RFC 3339 or 'YYYY-MM-DD HH:MM:SS' timestamp"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use serde_json::json;

    fn raw(value: Value) -> RawTransaction {
        serde_json::from_value(value).expect("raw transaction")
    }

    #[test]
    fn validates_complete_record() {
        let txn = Transaction::try_from(raw(json!({
            "transaction_id": "TXN001",
            "customer_id": "CUST001",
            "amount": 2500000,
            "currency": "kes",
            "merchant_name": "Naivas Supermarket",
            "location": "Nairobi",
            "channel": "Online",
            "timestamp": "2024-01-15 14:30:00"
        })))
        .expect("valid");
        assert_eq!(txn.transaction_id.0, "TXN001");
        assert_eq!(txn.amount, Decimal::from(2_500_000));
        assert_eq!(txn.currency.as_deref(), Some("KES"));
        assert_eq!(txn.channel, Some(Channel::Online));
        assert_eq!(txn.timestamp.map(|ts| ts.hour()), Some(14));
    }

    #[test]
    fn missing_amount_is_invalid_input() {
        let err = Transaction::try_from(raw(json!({ "transaction_id": "TXN002" })))
            .unwrap_err();
        assert_eq!(err.field(), "amount");
    }

    #[test]
    fn non_numeric_amount_is_invalid_input() {
        for amount in [json!("ten million"), json!(true), json!([1]), json!("")] {
            let err = Transaction::try_from(raw(json!({
                "transaction_id": "TXN003",
                "amount": amount
            })))
            .unwrap_err();
            assert_eq!(err.field(), "amount");
        }
    }

    #[test]
    fn numeric_strings_and_scientific_amounts_are_accepted() {
        assert_eq!(
            parse_amount(&json!(" 1500000.50 ")).expect("string"),
            Decimal::from_str("1500000.50").expect("decimal")
        );
        assert_eq!(
            parse_amount(&json!(1e7)).expect("float"),
            Decimal::from(10_000_000)
        );
    }

    #[test]
    fn negative_amount_is_rejected() {
        assert!(parse_amount(&json!(-5)).is_err());
    }

    #[test]
    fn missing_transaction_id_is_invalid_input() {
        let err = Transaction::try_from(raw(json!({ "transaction_id": "  ", "amount": 10 })))
            .unwrap_err();
        assert_eq!(err.field(), "transaction_id");
    }

    #[test]
    fn unknown_channel_is_rejected() {
        let err = Transaction::try_from(raw(json!({
            "transaction_id": "TXN004",
            "amount": 10,
            "channel": "carrier pigeon"
        })))
        .unwrap_err();
        assert_eq!(err.field(), "channel");
    }

    #[test]
    fn mistyped_text_field_names_the_field() {
        let err = Transaction::try_from(raw(json!({
            "transaction_id": "TXN005",
            "amount": 10,
            "merchant_name": 5
        })))
        .unwrap_err();
        assert_eq!(err.field(), "merchant_name");

        let err = Transaction::try_from(raw(json!({ "transaction_id": 42, "amount": 10 })))
            .unwrap_err();
        assert_eq!(err.field(), "transaction_id");
    }

    #[test]
    fn null_fields_read_as_missing() {
        let txn = Transaction::try_from(raw(json!({
            "transaction_id": "TXN006",
            "amount": 10,
            "location": null,
            "transaction_type": "transfer"
        })))
        .expect("valid");
        assert_eq!(txn.location, None);
        assert_eq!(
            txn,
            Transaction::new("TXN006", Decimal::from(10)).with_transaction_type("transfer")
        );
    }

    #[test]
    fn rfc3339_timestamp_keeps_local_hour() {
        let ts = parse_timestamp("2024-01-15T23:15:00+03:00").expect("timestamp");
        assert_eq!(ts.hour(), 23);
        assert!(parse_timestamp("yesterday").is_err());
    }
}
