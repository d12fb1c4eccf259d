#![allow(missing_docs)]
#![cfg(feature = "serde")]

use textcursor::{Capabilities, DecodePower, Tier, Traversal, codec::BomState};

#[test]
fn capabilities_serialize_as_plain_data() {
    let caps = Capabilities::of(Traversal::Offsettable, DecodePower::FixedWidth);
    let json = serde_json::to_string(&caps).unwrap();
    insta::assert_snapshot!(json, @r#"{"tier":"RandomAccess","inspectable_range":true}"#);

    let back: Capabilities = serde_json::from_str(&json).unwrap();
    assert_eq!(back, caps);
    assert_eq!(back.tier, Tier::RandomAccess);
}

#[test]
fn codec_state_survives_serialization() {
    let state: BomState = serde_json::from_str(r#"{"started":true}"#).unwrap();
    assert!(state.started());
    assert_eq!(serde_json::to_string(&BomState::default()).unwrap(), r#"{"started":false}"#);
}
