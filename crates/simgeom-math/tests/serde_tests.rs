// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
// Built only with the `serde` feature (see `[[test]]` in Cargo.toml).

#![allow(missing_docs, clippy::unwrap_used, clippy::float_cmp)]
use simgeom_math::{Quat, Vec3};

#[test]
fn vec3_serializes_as_component_array() {
    let v = Vec3::new(1.0, -2.5, 3.0);
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, "[1.0,-2.5,3.0]");
    let back: Vec3 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
}

#[test]
fn quat_serializes_as_w_and_vector() {
    let q = Quat::new(0.5, Vec3::new(1.0, 2.0, 3.0));
    let json = serde_json::to_string(&q).unwrap();
    assert_eq!(json, r#"{"w":0.5,"v":[1.0,2.0,3.0]}"#);
    let back: Quat = serde_json::from_str(&json).unwrap();
    assert_eq!(back, q);
}
