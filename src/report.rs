//! Plain-text dashboard report used by the `venue_report` binary.

use chrono::NaiveDate;
use colored::Colorize;

use crate::config::Config;
use crate::core::services::{
    compute_billing_metrics, compute_venue_metrics, payments_received, EventService,
    OnboardingService,
};
use crate::domain::{ChecklistCategory, Dataset, Displayable};
use crate::errors::Result;
use crate::ledger::{EventCatalog, NegotiationLedger, OnboardingChecklist};

const TOP_GENRES: usize = 3;

fn heading(out: &mut String, title: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(&title.bold().to_string());
    out.push('\n');
}

fn line(out: &mut String, text: impl AsRef<str>) {
    out.push_str("  ");
    out.push_str(text.as_ref());
    out.push('\n');
}

/// Renders every dashboard section for `dataset`.
///
/// `reference` splits upcoming from past events.
pub fn render_report(dataset: &Dataset, config: &Config, reference: NaiveDate) -> Result<String> {
    dataset.validate()?;
    let mut out = String::new();
    let money = |amount: f64| config.format_amount(amount);

    let ledger = NegotiationLedger::from_requests(dataset.requests.clone())?;
    let summary = ledger.summary();
    heading(&mut out, "Booking requests");
    line(
        &mut out,
        format!(
            "Pending: {}  Negotiating: {}  Accepted: {}  Rejected: {}",
            summary.pending, summary.negotiating, summary.accepted, summary.rejected
        ),
    );
    for request in ledger.open_requests() {
        let mut text = format!(
            "- {} asking {}",
            request.display_label(),
            money(request.asking_rate)
        );
        if let Some(proposed) = request.proposed_rate {
            text.push_str(&format!(", proposed {}", money(proposed)));
        }
        line(&mut out, text);
    }

    let metrics = compute_venue_metrics(&dataset.bookings);
    heading(&mut out, "Venue analytics");
    line(
        &mut out,
        format!(
            "Confirmed bookings: {} of {}",
            metrics.confirmed_count, metrics.total_count
        ),
    );
    line(&mut out, format!("Total revenue: {}", money(metrics.total_revenue)));
    line(&mut out, format!("Conversion rate: {:.1}%", metrics.conversion_rate));
    line(
        &mut out,
        format!("Average artist rate: {}", money(metrics.average_artist_rate)),
    );
    let genres: Vec<String> = metrics
        .top_genres(TOP_GENRES)
        .into_iter()
        .map(|(genre, count)| format!("{genre} ({count})"))
        .collect();
    if !genres.is_empty() {
        line(&mut out, format!("Top genres: {}", genres.join(", ")));
    }
    if let Some(bucket) = metrics.busiest_month() {
        line(
            &mut out,
            format!("Busiest month: {} ({})", bucket.month, money(bucket.revenue)),
        );
    }

    let billing = compute_billing_metrics(&dataset.invoices);
    heading(&mut out, "Billing");
    line(
        &mut out,
        format!(
            "Total: {}  Paid: {} ({:.1}%)  Pending: {}  Overdue: {}",
            money(billing.total_amount),
            money(billing.paid_amount),
            billing.paid_percentage,
            money(billing.pending_amount),
            money(billing.overdue_amount)
        ),
    );
    line(
        &mut out,
        format!(
            "Payments received: {}",
            money(payments_received(&dataset.payments))
        ),
    );

    let catalog = EventCatalog::with_events(dataset.events.clone());
    heading(&mut out, &format!("Upcoming events (after {reference})"));
    let upcoming = EventService::upcoming(&catalog, reference);
    if upcoming.is_empty() {
        line(&mut out, "No upcoming events");
    }
    for event in upcoming {
        line(
            &mut out,
            format!(
                "- {}, budget {:.0}% spent",
                event.display_label(),
                event.budget_utilization()
            ),
        );
    }

    let checklist = OnboardingChecklist::new(dataset.checklist.clone());
    if !checklist.is_empty() {
        heading(&mut out, "Onboarding");
        line(
            &mut out,
            format!(
                "{:.0}% complete ({} of {})",
                OnboardingService::completion_percentage(&checklist),
                checklist.completed_count(),
                checklist.len()
            ),
        );
        for category in ChecklistCategory::ALL {
            let (done, total) = OnboardingService::category_progress(&checklist, category);
            if total > 0 {
                line(&mut out, format!("{category}: {done}/{total}"));
            }
        }
    }

    Ok(out)
}
