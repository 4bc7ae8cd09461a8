//! Sample data the dashboard ships with before a venue imports its own.

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::domain::{
    BookingRecord, BookingRequest, BookingStatus, ChecklistCategory, ChecklistItem, Dataset,
    EventStatus, Invoice, InvoiceStatus, Payment, PaymentMethod, PaymentStatus, RequestStatus,
    VenueEvent,
};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid calendar days")
}

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("seed times are valid")
}

pub fn booking_requests() -> Vec<BookingRequest> {
    let mut negotiating = BookingRequest::new(
        "Luna Waves",
        day(2026, 3, 15),
        at(20, 0),
        500.0,
        day(2026, 1, 18),
    )
    .with_message("Can you do $450 instead? Budget is tight for this event.");
    negotiating.status = RequestStatus::Negotiating;
    negotiating.proposed_rate = Some(450.0);

    let pending = BookingRequest::new(
        "The Midnight Echo",
        day(2026, 2, 28),
        at(19, 30),
        750.0,
        day(2026, 1, 17),
    )
    .with_message("Interested in booking for our Valentine's Day special event.");

    let mut accepted = BookingRequest::new(
        "Sonic Dreams",
        day(2026, 1, 25),
        at(21, 0),
        600.0,
        day(2026, 1, 15),
    );
    accepted.status = RequestStatus::Accepted;

    vec![negotiating, pending, accepted]
}

pub fn booking_records() -> Vec<BookingRecord> {
    vec![
        BookingRecord::new(day(2026, 1, 25), BookingStatus::Confirmed, Some(600.0))
            .with_genres(["Electronic", "Ambient"]),
        BookingRecord::new(day(2026, 2, 14), BookingStatus::Confirmed, Some(1_250.0))
            .with_genres(["Jazz"]),
        BookingRecord::new(day(2026, 2, 28), BookingStatus::Pending, Some(750.0))
            .with_genres(["Jazz", "Soul"]),
        BookingRecord::new(day(2026, 3, 15), BookingStatus::Pending, Some(500.0))
            .with_genres(["Indie", "Pop"]),
    ]
}

/// Invoices plus the single payment recorded against the paid one.
pub fn invoices_and_payments() -> (Vec<Invoice>, Vec<Payment>) {
    let pending = Invoice::new(
        "INV-2026-001",
        "Luna Waves",
        day(2026, 3, 15),
        500.0,
        day(2026, 3, 22),
    );
    let paid = Invoice::new(
        "INV-2026-002",
        "The Midnight Echo",
        day(2026, 2, 28),
        750.0,
        day(2026, 3, 7),
    )
    .with_status(InvoiceStatus::Paid);
    let overdue = Invoice::new(
        "INV-2026-003",
        "Sonic Dreams",
        day(2026, 1, 25),
        600.0,
        day(2026, 2, 1),
    )
    .with_status(InvoiceStatus::Overdue);

    let payment = Payment {
        id: Uuid::new_v4(),
        invoice_id: paid.id,
        amount: 750.0,
        method: PaymentMethod::CreditCard,
        date: day(2026, 3, 5),
        status: PaymentStatus::Completed,
    };

    (vec![pending, paid, overdue], vec![payment])
}

pub fn events() -> Vec<VenueEvent> {
    let mut festival = VenueEvent::new(
        "Summer Music Festival",
        day(2026, 6, 15),
        at(18, 0),
        500,
        15_000.0,
    )
    .with_description("Annual summer festival featuring local and regional artists");
    festival.spent = 8_500.0;
    festival.artist_count = 8;

    let mut jazz = VenueEvent::new("Jazz Night", day(2026, 2, 14), at(20, 0), 150, 3_000.0)
        .with_description("Intimate jazz performance for Valentine's Day");
    jazz.spent = 2_500.0;
    jazz.artist_count = 2;
    jazz.status = EventStatus::Confirmed;

    vec![festival, jazz]
}

pub fn checklist() -> Vec<ChecklistItem> {
    use ChecklistCategory::*;

    vec![
        ChecklistItem::new(
            "1",
            "Complete Venue Profile",
            "Add venue name, location, capacity, and amenities",
            Profile,
        )
        .completed(),
        ChecklistItem::new(
            "2",
            "Set Booking Preferences",
            "Configure auto-accept, payment terms, and notification settings",
            Profile,
        )
        .completed(),
        ChecklistItem::new(
            "3",
            "Add Team Members",
            "Invite coordinators and promoters to your team",
            Setup,
        ),
        ChecklistItem::new(
            "4",
            "Browse Available Artists",
            "Explore and favorite artists that match your venue",
            Setup,
        ),
        ChecklistItem::new(
            "5",
            "Create Your First Event",
            "Set up an event and start booking artists",
            Features,
        ),
        ChecklistItem::new(
            "6",
            "Explore Analytics Dashboard",
            "Learn how to track bookings and revenue metrics",
            Features,
        ),
        ChecklistItem::new(
            "7",
            "Set Up Payment Methods",
            "Configure your preferred payment and billing options",
            Setup,
        ),
        ChecklistItem::new(
            "8",
            "Optimize Your Venue Profile",
            "Add high-quality photos and detailed descriptions",
            BestPractices,
        ),
    ]
}

pub fn dataset() -> Dataset {
    let (invoices, payments) = invoices_and_payments();
    Dataset {
        requests: booking_requests(),
        bookings: booking_records(),
        invoices,
        payments,
        events: events(),
        checklist: checklist(),
    }
}
