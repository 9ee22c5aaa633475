use birthbook::model::*;
use birthbook::DirectoryError;
use chrono::NaiveDate;

// ==========================================================================
// MONTH DAY TESTS
// ==========================================================================

#[test]
fn month_day_new_valid() {
    let md = MonthDay::new(12, 25).unwrap();
    assert_eq!(md.month(), 12);
    assert_eq!(md.day(), 25);
}

#[test]
fn month_day_new_rejects_invalid() {
    assert_eq!(
        MonthDay::new(2, 30),
        Err(DirectoryError::InvalidBirthday { month: 2, day: 30 })
    );
    assert!(MonthDay::new(2, 29).is_err());
    assert!(MonthDay::new(0, 10).is_err());
}

#[test]
fn month_day_displays_without_padding() {
    assert_eq!(MonthDay::new(4, 9).unwrap().to_string(), "4/9");
    assert_eq!(MonthDay::new(11, 30).unwrap().to_string(), "11/30");
}

#[test]
fn month_day_from_date_drops_year() {
    let date = NaiveDate::from_ymd_opt(1990, 5, 15).unwrap();
    assert_eq!(MonthDay::from(date), MonthDay::new(5, 15).unwrap());
}

#[test]
fn month_day_from_leap_day_date() {
    let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    let md = MonthDay::from(date);
    assert_eq!((md.month(), md.day()), (2, 29));
}

#[test]
fn month_day_serializes_as_fields() {
    let md = MonthDay::new(7, 4).unwrap();
    let json = serde_json::to_string(&md).unwrap();
    assert_eq!(json, r#"{"month":7,"day":4}"#);
}

#[test]
fn month_day_deserialize_validates() {
    let ok: MonthDay = serde_json::from_str(r#"{"month":1,"day":31}"#).unwrap();
    assert_eq!(ok, MonthDay::new(1, 31).unwrap());

    let bad = serde_json::from_str::<MonthDay>(r#"{"month":2,"day":30}"#);
    assert!(bad.is_err());
}

// ==========================================================================
// ENTRY TESTS
// ==========================================================================

#[test]
fn entry_create_is_unset() {
    let entry = Entry::create();
    assert_eq!(entry.phone_number, None);
    assert_eq!(entry.birthday, None);
}

#[test]
fn entry_serializes_unset_fields_as_null() {
    let entry = Entry {
        phone_number: Some(5551234),
        birthday: None,
    };
    let json = serde_json::to_string(&entry).unwrap();
    assert_eq!(json, r#"{"phone_number":5551234,"birthday":null}"#);
}
