//! Billing totals and invoice lookups for the billing page.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use uuid::Uuid;

use crate::core::errors::CoreError;
use crate::domain::{Amounted, Invoice, InvoiceStatus, Payment, PaymentStatus};
use crate::utils::percentage;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingMetrics {
    pub total_amount: f64,
    pub paid_amount: f64,
    pub pending_amount: f64,
    pub overdue_amount: f64,
    /// Share of the invoiced total already paid, one decimal.
    pub paid_percentage: f64,
}

/// Status selector of the invoice table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvoiceFilter {
    #[default]
    All,
    Status(InvoiceStatus),
}

impl InvoiceFilter {
    pub fn matches(self, invoice: &Invoice) -> bool {
        match self {
            InvoiceFilter::All => true,
            InvoiceFilter::Status(status) => invoice.status == status,
        }
    }
}

impl fmt::Display for InvoiceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvoiceFilter::All => f.write_str("all"),
            InvoiceFilter::Status(status) => write!(f, "{status}"),
        }
    }
}

impl FromStr for InvoiceFilter {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(InvoiceFilter::All);
        }
        value
            .parse::<InvoiceStatus>()
            .map(InvoiceFilter::Status)
            .map_err(CoreError::InvalidArgument)
    }
}

pub fn compute_billing_metrics(invoices: &[Invoice]) -> BillingMetrics {
    let mut metrics = invoices
        .iter()
        .fold(BillingMetrics::default(), |mut metrics, invoice| {
            let amount = invoice.amount();
            metrics.total_amount += amount;
            match invoice.status {
                InvoiceStatus::Paid => metrics.paid_amount += amount,
                InvoiceStatus::Pending => metrics.pending_amount += amount,
                InvoiceStatus::Overdue => metrics.overdue_amount += amount,
            }
            metrics
        });
    metrics.paid_percentage = percentage(metrics.paid_amount, metrics.total_amount, 1);
    metrics
}

/// Invoices passing both the status filter and the search box.
///
/// The search term matches artist name or invoice number, ignoring case.
pub fn filter_invoices<'a>(
    invoices: &'a [Invoice],
    filter: InvoiceFilter,
    search: &str,
) -> Vec<&'a Invoice> {
    let needle = search.to_lowercase();
    invoices
        .iter()
        .filter(|invoice| filter.matches(invoice))
        .filter(|invoice| {
            invoice.artist_name.to_lowercase().contains(&needle)
                || invoice.invoice_number.to_lowercase().contains(&needle)
        })
        .collect()
}

pub fn payments_for_invoice(payments: &[Payment], invoice_id: Uuid) -> Vec<&Payment> {
    payments
        .iter()
        .filter(|payment| payment.invoice_id == invoice_id)
        .collect()
}

/// Sum of completed payments; failed and pending ones have not landed.
pub fn payments_received(payments: &[Payment]) -> f64 {
    payments
        .iter()
        .filter(|payment| payment.status == PaymentStatus::Completed)
        .map(Amounted::amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn invoice(number: &str, artist: &str, amount: f64, status: InvoiceStatus) -> Invoice {
        let date = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        Invoice::new(number, artist, date, amount, date).with_status(status)
    }

    fn sample() -> Vec<Invoice> {
        vec![
            invoice("INV-2026-001", "Luna Waves", 500.0, InvoiceStatus::Pending),
            invoice("INV-2026-002", "The Midnight Echo", 750.0, InvoiceStatus::Paid),
            invoice("INV-2026-003", "Sonic Dreams", 600.0, InvoiceStatus::Overdue),
        ]
    }

    #[test]
    fn metrics_split_amounts_by_status() {
        let metrics = compute_billing_metrics(&sample());
        assert_eq!(metrics.total_amount, 1850.0);
        assert_eq!(metrics.paid_amount, 750.0);
        assert_eq!(metrics.pending_amount, 500.0);
        assert_eq!(metrics.overdue_amount, 600.0);
        assert_eq!(metrics.paid_percentage, 40.5);
    }

    #[test]
    fn no_invoices_means_zero_paid_percentage() {
        assert_eq!(compute_billing_metrics(&[]), BillingMetrics::default());
    }

    #[test]
    fn filter_requires_status_and_search() {
        let invoices = sample();
        let hits = filter_invoices(&invoices, InvoiceFilter::All, "ECHO");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].invoice_number, "INV-2026-002");

        let hits = filter_invoices(&invoices, InvoiceFilter::Status(InvoiceStatus::Pending), "echo");
        assert!(hits.is_empty());

        let hits = filter_invoices(&invoices, InvoiceFilter::All, "inv-2026-00");
        assert_eq!(hits.len(), 3);

        let hits = filter_invoices(&invoices, InvoiceFilter::Status(InvoiceStatus::Overdue), "");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn only_completed_payments_are_received() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        let payment = |amount: f64, status: PaymentStatus| Payment {
            id: Uuid::new_v4(),
            invoice_id: Uuid::new_v4(),
            amount,
            method: crate::domain::PaymentMethod::BankTransfer,
            date,
            status,
        };
        let payments = [
            payment(750.0, PaymentStatus::Completed),
            payment(200.0, PaymentStatus::Failed),
            payment(120.0, PaymentStatus::Pending),
            payment(50.0, PaymentStatus::Completed),
        ];
        assert_eq!(payments_received(&payments), 800.0);
        assert_eq!(payments_received(&[]), 0.0);
    }

    #[test]
    fn filter_parses_from_table_tabs() {
        assert_eq!("all".parse::<InvoiceFilter>().unwrap(), InvoiceFilter::All);
        assert_eq!(
            "Paid".parse::<InvoiceFilter>().unwrap(),
            InvoiceFilter::Status(InvoiceStatus::Paid)
        );
        assert!("void".parse::<InvoiceFilter>().is_err());
    }
}
