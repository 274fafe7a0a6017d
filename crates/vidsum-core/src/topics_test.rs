use chrono::NaiveDate;

use super::*;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn every_known_topic_has_records_with_title_and_link() {
    for topic in TOPIC_KEYS {
        let records = lookup(topic, day(2026, 10, 19));
        assert!(!records.is_empty(), "{topic} should have records");
        for record in &records {
            assert!(!record.title.is_empty(), "{topic}: empty title");
            assert!(!record.link.is_empty(), "{topic}: empty link");
        }
    }
}

#[test]
fn every_known_topic_maps_to_exactly_two_records() {
    for topic in TOPIC_KEYS {
        assert_eq!(lookup(topic, day(2026, 1, 1)).len(), 2, "{topic}");
    }
}

#[test]
fn catalogue_keys_match_topic_keys() {
    let keys: Vec<&str> = CATALOGUE.iter().map(|(key, _)| *key).collect();
    assert_eq!(keys, TOPIC_KEYS);
}

#[test]
fn unknown_and_empty_topics_yield_nothing() {
    let today = day(2026, 10, 19);
    assert!(lookup("", today).is_empty());
    assert!(lookup("未知主題", today).is_empty());
    assert!(lookup(" 人工智慧", today).is_empty());
    assert!(!is_known_topic("未知主題"));
    assert!(is_known_topic("科技新聞"));
}

#[test]
fn ai_topic_leads_with_gpt5_record() {
    let records = lookup("人工智慧", day(2026, 10, 19));
    assert!(records[0].title.contains("GPT-5"));
    assert_eq!(records[0].link, "https://www.youtube.com/watch?v=ai_latest_v1");
}

#[test]
fn first_record_is_dated_today_and_second_is_fixed() {
    let records = lookup("行銷趨勢", day(2026, 3, 7));
    assert_eq!(records[0].upload_date, "2026-03-07");
    assert_eq!(records[1].upload_date, "2025-11-20");
}

#[test]
fn repeated_lookups_on_the_same_day_are_equal() {
    let today = day(2026, 10, 19);
    assert_eq!(lookup("科技新聞", today), lookup("科技新聞", today));
}

#[test]
fn lookups_return_independent_copies() {
    let today = day(2026, 10, 19);
    let mut first = lookup("人工智慧", today);
    first[0].title.clear();
    first[0].quote = None;

    let second = lookup("人工智慧", today);
    assert!(second[0].title.contains("GPT-5"));
    assert!(second[0].quote.is_some());
}

#[test]
fn catalogue_records_carry_quote_and_timeline() {
    for topic in TOPIC_KEYS {
        for record in lookup(topic, day(2026, 10, 19)) {
            assert!(record.quote.is_some(), "{}", record.title);
            assert!(record.timeline.is_some(), "{}", record.title);
            assert!(!record.summary.is_empty(), "{}", record.title);
        }
    }
}
