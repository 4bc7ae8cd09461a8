//! Invoices issued for performances and the payments recorded against them.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Overdue,
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
        };
        f.write_str(label)
    }
}

impl FromStr for InvoiceStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            "overdue" => Ok(InvoiceStatus::Overdue),
            other => Err(format!("unknown invoice status `{other}`")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: Uuid,
    pub invoice_number: String,
    pub artist_name: String,
    pub event_date: NaiveDate,
    pub amount: f64,
    pub status: InvoiceStatus,
    pub due_date: NaiveDate,
    pub created_at: NaiveDate,
}

impl Invoice {
    pub fn new(
        invoice_number: impl Into<String>,
        artist_name: impl Into<String>,
        event_date: NaiveDate,
        amount: f64,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            invoice_number: invoice_number.into(),
            artist_name: artist_name.into(),
            event_date,
            amount,
            status: InvoiceStatus::Pending,
            due_date,
            created_at: event_date,
        }
    }

    pub fn with_status(mut self, status: InvoiceStatus) -> Self {
        self.status = status;
        self
    }
}

impl Identifiable for Invoice {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Invoice {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Invoice {
    fn display_label(&self) -> String {
        format!("{} {} ({})", self.invoice_number, self.artist_name, self.status)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    BankTransfer,
    Check,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMethod::CreditCard => "Credit card",
            PaymentMethod::BankTransfer => "Bank transfer",
            PaymentMethod::Check => "Check",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Completed,
    Failed,
    Pending,
}

/// A payment made towards an invoice. Recorded elsewhere; read-only here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Uuid,
    pub invoice_id: Uuid,
    pub amount: f64,
    pub method: PaymentMethod,
    pub date: NaiveDate,
    pub status: PaymentStatus,
}

impl Identifiable for Payment {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Payment {
    fn amount(&self) -> f64 {
        self.amount
    }
}
