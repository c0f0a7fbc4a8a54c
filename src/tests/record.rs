//! OutcomeRecord snapshots and their serialization.

use crate::{Outcome, OutcomeRecord};

#[test]
fn record_snapshots_a_status() {
    let record = OutcomeRecord::from(&Outcome::OK_CONT);

    assert_eq!(record.code, "OK_CONT");
    assert_eq!(record.message, None);
    assert!(record.ok);
    assert!(!record.finished);
}

#[test]
fn record_snapshots_an_error() {
    let rc = Outcome::from_message("disk on fire");
    let record = OutcomeRecord::from(&rc);

    assert_eq!(record.code, "ERROR");
    assert_eq!(record.message.as_deref(), Some("disk on fire"));
    assert!(!record.ok);
    assert!(record.finished);
}

#[test]
fn record_snapshots_the_sentinel() {
    let record = OutcomeRecord::from(&Outcome::default());

    assert_eq!(record.code, "ERROR");
    assert_eq!(record.message.as_deref(), Some("(not initialized)"));
}

#[cfg(feature = "serde")]
mod serde_tests {
    use crate::{Outcome, OutcomeRecord};

    #[test]
    fn record_serializes_to_json() {
        let rc = Outcome::from_message("timeout");
        let record = OutcomeRecord::from(&rc);
        let json: serde_json::Value = serde_json::to_value(&record).unwrap();

        assert_eq!(json["code"], "ERROR");
        assert_eq!(json["message"], "timeout");
        assert_eq!(json["ok"], false);
        assert_eq!(json["finished"], true);
    }

    #[test]
    fn status_record_serializes_without_message() {
        let record = OutcomeRecord::from(&Outcome::EOF);
        let json: serde_json::Value = serde_json::to_value(&record).unwrap();

        assert_eq!(json["code"], "NG_EOF");
        assert_eq!(json["message"], serde_json::Value::Null);
        assert_eq!(json["ok"], false);
        assert_eq!(json["finished"], true);
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = OutcomeRecord::from(&Outcome::from_message("retry me later"));
        let json = serde_json::to_string(&record).unwrap();
        let decoded: OutcomeRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, record);
    }
}
