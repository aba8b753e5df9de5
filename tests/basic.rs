//! End-to-end behaviour of a single filter

use siftbloom::encode::{Bytes, Seq};
use siftbloom::{element_record, SiftBloom, SiftBloomError};
use std::borrow::Cow;

struct Named {
    name: String,
}

element_record!(Named { name });

struct Order {
    id: u64,
    customer: String,
    total: f64,
    express: bool,
}

element_record!(Order {
    id,
    customer,
    total,
    express,
});

#[test]
fn test_new_reports_size_and_fanout() {
    let filter = SiftBloom::new(1000, 5).expect("valid parameters");
    assert_eq!(filter.size(), 1000);
    assert_eq!(filter.hash_fanout(), 5);
}

#[test]
fn test_mixed_elements_end_to_end() {
    let filter = SiftBloom::new(1000, 3).unwrap();

    filter.add("hello");
    filter.add("world");
    filter.add(&123);
    filter.add(&45.67);

    assert!(filter.contains("hello"));
    assert!(filter.contains("world"));
    assert!(filter.contains(&123));
    assert!(filter.contains(&45.67));
}

#[test]
fn test_reset_scenario() {
    let filter = SiftBloom::new(1000, 3).unwrap();
    filter.add("test1");
    filter.add("test2");
    assert!(filter.contains("test1"));

    filter.clear();

    assert!(!filter.contains("test1"));
    assert!(!filter.contains("test2"));
    assert_eq!(filter.hash_fanout(), 3);
}

#[test]
fn test_capacity_validation() {
    assert_eq!(
        SiftBloom::new(0, 5).unwrap_err(),
        SiftBloomError::InvalidSize { size: 0 }
    );
    assert_eq!(SiftBloom::new(1, 5).unwrap().size(), 1);
}

#[test]
fn test_fanout_validation() {
    assert!(matches!(
        SiftBloom::new(1000, 0),
        Err(SiftBloomError::InvalidHashFanout { count: 0, .. })
    ));
}

#[test]
fn test_fanout_above_sizing_clamp() {
    for k in [33, 40, 64] {
        let filter = SiftBloom::new(100_000, k).unwrap();
        filter.add("hello");
        filter.add("world");
        filter.add(&123);

        assert!(filter.contains("hello"), "k = {}", k);
        assert!(filter.contains("world"), "k = {}", k);
        assert!(filter.contains(&123), "k = {}", k);

        filter.clear();
        assert!(!filter.contains("hello"));
        assert_eq!(filter.hash_fanout(), k);
    }
}

#[test]
fn test_every_encoding_category_is_found() {
    let filter = SiftBloom::new(10_000, 5).unwrap();

    filter.add("str");
    filter.add(&String::from("string"));
    filter.add(&'c');
    filter.add(&Cow::Borrowed("cow"));
    filter.add(&-42i8);
    filter.add(&u128::MAX);
    filter.add(&3.25f32);
    filter.add(&f64::NAN);
    filter.add(&true);
    filter.add(&b"bytes"[..]);
    filter.add(&vec![0u8, 1, 2]);
    filter.add(&Bytes(b"wrapped"));
    filter.add(&("tuple", 7, false));
    filter.add(&Some("present"));
    filter.add(&None::<u32>);
    filter.add(&Seq(&["x", "y"]));
    filter.add(&Named { name: "John".into() });

    assert!(filter.contains("str"));
    assert!(filter.contains("string"));
    assert!(filter.contains(&'c'));
    assert!(filter.contains("cow"));
    assert!(filter.contains(&-42i64));
    assert!(filter.contains(&u128::MAX));
    assert!(filter.contains(&3.25f64));
    assert!(filter.contains(&-f64::NAN));
    assert!(filter.contains(&true));
    assert!(filter.contains(b"bytes"));
    assert!(filter.contains(&[0u8, 1, 2]));
    assert!(filter.contains(&b"wrapped".to_vec()));
    assert!(filter.contains(&("tuple", 7u64, false)));
    assert!(filter.contains(&Some("present")));
    assert!(filter.contains(&None::<u32>));
    assert!(filter.contains(&Seq(&vec!["x", "y"])));
    assert!(filter.contains(&Named { name: "John".into() }));
}

#[test]
fn test_records_with_equal_fields_match() {
    let filter = SiftBloom::new(4096, 4).unwrap();
    let order = |total| Order {
        id: 17,
        customer: "acme".into(),
        total,
        express: true,
    };

    filter.add(&order(99.5));
    assert!(filter.contains(&order(99.5)));
}

#[test]
fn test_signed_zero_is_one_element() {
    let filter = SiftBloom::new(1000, 5).unwrap();
    filter.add(&-0.0f64);
    assert!(filter.contains(&0.0f64));
}

#[test]
fn test_absent_elements_mostly_rejected() {
    let filter = SiftBloom::new(10_000, 5).unwrap();
    filter.add("apple");
    filter.add("banana");

    let probes = [
        "orange", "grape", "pear", "kiwi", "mango", "test123", "random456", "unknown789",
    ];
    let false_positives = probes.iter().filter(|p| filter.contains(*p)).count()
        + [999, 888, 777, 666, 555]
            .iter()
            .filter(|n| filter.contains(*n))
            .count();

    // 10 bits set out of 10 000: the chance of even one hit is negligible.
    assert_eq!(false_positives, 0);
}

#[test]
fn test_no_false_negatives() {
    let filter = SiftBloom::new(10_000, 5).unwrap();

    for i in 0..1000u64 {
        filter.add(&i);
    }

    for i in 0..1000u64 {
        assert!(filter.contains(&i), "False negative for {}", i);
    }
}

#[test]
fn test_observed_false_positive_rate_near_estimate() {
    let filter = SiftBloom::new(9_586, 7).unwrap();
    for i in 0..1000 {
        filter.add(&format!("member-{i}"));
    }

    let trials = 10_000;
    let hits = (0..trials)
        .filter(|i| filter.contains(&format!("outsider-{i}")))
        .count();
    let observed = hits as f64 / trials as f64;

    assert!(
        observed < 0.03,
        "observed false positive rate {:.4} well above 1% target",
        observed
    );
}
