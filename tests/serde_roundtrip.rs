#![cfg(feature = "serde")]

//! Wire-format checks for the serde derives on the wrapper types.

use millpond::{Either, Maybe, Outcome};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Settings {
    name: String,
    timeout: Maybe<u32>,
    backend: Either<String, u16>,
}

#[test]
fn maybe_serializes_as_a_tagged_variant() {
    let present = serde_json::to_string(&Maybe::new(42)).unwrap();
    assert_eq!(present, r#"{"Present":42}"#);

    let empty = serde_json::to_string(&Maybe::<u32>::empty()).unwrap();
    assert_eq!(empty, r#""Empty""#);
}

#[test]
fn outcome_round_trips_through_json() {
    let original: Outcome<u32, String> = Outcome::success(7);
    let json = serde_json::to_string(&original).unwrap();
    let restored: Outcome<u32, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, original);

    let original: Outcome<u32, String> = Outcome::fail("nope".to_string());
    let json = serde_json::to_string(&original).unwrap();
    let restored: Outcome<u32, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, original);
}

#[test]
fn wrappers_embed_in_larger_documents() {
    let settings = Settings {
        name: "relay".to_string(),
        timeout: Maybe::empty(),
        backend: Either::right(8080),
    };

    let json = serde_json::to_string(&settings).unwrap();
    let restored: Settings = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, settings);
}
