//! Booking analytics shown on the venue dashboard.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::Serialize;
use tracing::debug;

use crate::domain::BookingRecord;
use crate::utils::{average, percentage};

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Confirmed bookings and their revenue for one calendar month.
///
/// Buckets ignore the year: March 2025 and March 2026 land in the same one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyBucket {
    pub month: &'static str,
    pub bookings: usize,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueMetrics {
    pub total_count: usize,
    pub confirmed_count: usize,
    pub total_revenue: f64,
    /// Percentage of bookings confirmed, one decimal.
    pub conversion_rate: f64,
    /// Mean rate of confirmed bookings, two decimals.
    pub average_artist_rate: f64,
    /// Bookings per genre across every status, not only confirmed ones.
    pub genre_histogram: BTreeMap<String, usize>,
    pub monthly_trend: [MonthlyBucket; 12],
}

impl VenueMetrics {
    /// Most popular genres, ties broken alphabetically.
    pub fn top_genres(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut genres: Vec<_> = self
            .genre_histogram
            .iter()
            .map(|(genre, count)| (genre.as_str(), *count))
            .collect();
        genres.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        genres.truncate(limit);
        genres
    }

    /// The month with the most confirmed revenue, if any booking was confirmed.
    pub fn busiest_month(&self) -> Option<&MonthlyBucket> {
        self.monthly_trend
            .iter()
            .filter(|bucket| bucket.bookings > 0)
            .max_by(|a, b| a.revenue.total_cmp(&b.revenue))
    }
}

/// Derives the dashboard analytics from a set of bookings in a single pass.
pub fn compute_venue_metrics(bookings: &[BookingRecord]) -> VenueMetrics {
    let mut monthly_trend = MONTH_LABELS.map(|month| MonthlyBucket {
        month,
        bookings: 0,
        revenue: 0.0,
    });
    let mut genre_histogram = BTreeMap::new();
    let mut confirmed_count = 0;
    let mut total_revenue = 0.0;

    for booking in bookings {
        for genre in &booking.genres {
            *genre_histogram.entry(genre.clone()).or_insert(0) += 1;
        }
        if !booking.is_confirmed() {
            continue;
        }
        let rate = booking.artist_rate.unwrap_or(0.0);
        confirmed_count += 1;
        total_revenue += rate;

        let bucket = &mut monthly_trend[booking.event_date.month0() as usize];
        bucket.bookings += 1;
        bucket.revenue += rate;
    }

    debug!(
        total = bookings.len(),
        confirmed = confirmed_count,
        "computed venue metrics"
    );

    VenueMetrics {
        total_count: bookings.len(),
        confirmed_count,
        total_revenue,
        conversion_rate: percentage(confirmed_count as f64, bookings.len() as f64, 1),
        average_artist_rate: average(total_revenue, confirmed_count, 2),
        genre_histogram,
        monthly_trend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookingStatus;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_input_yields_zeroes() {
        let metrics = compute_venue_metrics(&[]);
        assert_eq!(metrics.confirmed_count, 0);
        assert_eq!(metrics.total_revenue, 0.0);
        assert_eq!(metrics.conversion_rate, 0.0);
        assert_eq!(metrics.average_artist_rate, 0.0);
        assert!(metrics.genre_histogram.is_empty());
        assert!(metrics.monthly_trend.iter().all(|b| b.bookings == 0));
        assert!(metrics.busiest_month().is_none());
    }

    #[test]
    fn missing_rate_counts_as_zero_revenue() {
        let bookings = vec![
            BookingRecord::new(date(2026, 5, 2), BookingStatus::Confirmed, None),
            BookingRecord::new(date(2026, 5, 9), BookingStatus::Confirmed, Some(300.0)),
        ];
        let metrics = compute_venue_metrics(&bookings);
        assert_eq!(metrics.total_revenue, 300.0);
        assert_eq!(metrics.average_artist_rate, 150.0);
        assert_eq!(metrics.monthly_trend[4].bookings, 2);
    }

    #[test]
    fn trend_buckets_ignore_year() {
        let bookings = vec![
            BookingRecord::new(date(2025, 3, 10), BookingStatus::Confirmed, Some(200.0)),
            BookingRecord::new(date(2026, 3, 10), BookingStatus::Confirmed, Some(400.0)),
            BookingRecord::new(date(2026, 7, 4), BookingStatus::Cancelled, Some(900.0)),
        ];
        let metrics = compute_venue_metrics(&bookings);
        assert_eq!(metrics.monthly_trend[2].bookings, 2);
        assert_eq!(metrics.monthly_trend[2].revenue, 600.0);
        assert_eq!(metrics.monthly_trend[6].bookings, 0);
        assert_eq!(metrics.busiest_month().map(|b| b.month), Some("Mar"));
    }

    #[test]
    fn top_genres_sorts_by_count_then_name() {
        let bookings = vec![
            BookingRecord::new(date(2026, 1, 1), BookingStatus::Pending, None)
                .with_genres(["Rock", "Jazz"]),
            BookingRecord::new(date(2026, 1, 2), BookingStatus::Pending, None)
                .with_genres(["Jazz", "Blues"]),
        ];
        let metrics = compute_venue_metrics(&bookings);
        assert_eq!(metrics.top_genres(2), vec![("Jazz", 2), ("Blues", 1)]);
    }
}
