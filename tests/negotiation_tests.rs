use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;
use venue_core::{
    core::CoreError,
    domain::{BookingRequest, RequestStatus},
    ledger::NegotiationLedger,
    seed,
};

fn seeded_ledger() -> NegotiationLedger {
    NegotiationLedger::from_requests(seed::booking_requests()).expect("seed requests are valid")
}

fn id_of(ledger: &NegotiationLedger, artist: &str) -> Uuid {
    ledger
        .requests()
        .iter()
        .find(|request| request.artist_name == artist)
        .map(|request| request.id)
        .expect("artist present in seed")
}

#[test]
fn seed_summary_matches_dashboard_counters() {
    let ledger = seeded_ledger();
    let summary = ledger.summary();
    assert_eq!(summary.pending, 1);
    assert_eq!(summary.negotiating, 1);
    assert_eq!(summary.accepted, 1);
    assert_eq!(summary.total, 3);
    assert_eq!(ledger.open_requests().len(), 2);
    assert_eq!(ledger.completed().len(), 1);
}

#[test]
fn negotiation_flow_reaches_agreed_rate() {
    let ledger = seeded_ledger();
    let echo = id_of(&ledger, "The Midnight Echo");

    let ledger = ledger.counter_offer(echo, 700.0).unwrap();
    assert_eq!(ledger.with_status(RequestStatus::Negotiating).len(), 2);

    let ledger = ledger.counter_offer(echo, 720.0).unwrap();
    let ledger = ledger.accept(echo).unwrap();
    let request = ledger.get(echo).unwrap();
    assert_eq!(request.status, RequestStatus::Accepted);
    assert_eq!(request.agreed_rate(), Some(720.0));
}

#[test]
fn accepting_without_counter_offer_uses_asking_rate() {
    let ledger = seeded_ledger();
    let echo = id_of(&ledger, "The Midnight Echo");
    let ledger = ledger.accept(echo).unwrap();
    assert_eq!(ledger.get(echo).unwrap().agreed_rate(), Some(750.0));
}

#[test]
fn rejected_counter_offers_leave_request_unchanged() {
    let ledger = seeded_ledger();
    let luna = id_of(&ledger, "Luna Waves");
    let before = ledger.get(luna).cloned().unwrap();

    for amount in [-50.0, 0.0, f64::NAN, f64::INFINITY] {
        let err = ledger.counter_offer(luna, amount).unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)), "{amount}: {err:?}");
    }
    assert_eq!(ledger.get(luna), Some(&before));
    assert_eq!(before.proposed_rate, Some(450.0));
}

#[test]
fn unknown_ids_are_not_found() {
    let ledger = seeded_ledger();
    let missing = Uuid::new_v4();
    assert_eq!(
        ledger.accept(missing).unwrap_err(),
        CoreError::RequestNotFound(missing)
    );
    assert_eq!(
        ledger.reject(missing).unwrap_err(),
        CoreError::RequestNotFound(missing)
    );
    assert_eq!(
        ledger.counter_offer(missing, 100.0).unwrap_err(),
        CoreError::RequestNotFound(missing)
    );
}

#[test]
fn rejecting_is_terminal() {
    let ledger = seeded_ledger();
    let luna = id_of(&ledger, "Luna Waves");
    let ledger = ledger.reject(luna).unwrap();

    let err = ledger.counter_offer(luna, 480.0).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("Cannot counter request {luna}: it is already rejected")
    );
    assert_eq!(ledger.get(luna).unwrap().proposed_rate, Some(450.0));
}

#[test]
fn ledger_round_trips_through_json() {
    let mut ledger = NegotiationLedger::new();
    assert!(ledger.is_empty());

    let request = BookingRequest::new(
        "Velvet Static",
        NaiveDate::from_ymd_opt(2026, 5, 2).unwrap(),
        NaiveTime::from_hms_opt(21, 30, 0).unwrap(),
        820.0,
        NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
    );
    let id = request.id;
    ledger = NegotiationLedger::from_requests(vec![request]).unwrap();
    ledger = ledger.counter_offer(id, 790.0).unwrap();

    let json = serde_json::to_string(&ledger).unwrap();
    assert!(json.contains("\"proposedRate\":790.0"));
    let restored: NegotiationLedger = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, ledger);
}
