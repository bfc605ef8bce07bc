//! Serialization behaviour of the color and norm types.

use simkit::{Norm, Rgba};

#[test]
fn test_rgba_serializes_as_hex_string() {
    let json = serde_json::to_string(&Rgba::new(255, 0, 128, 10)).unwrap();
    assert_eq!(json, "\"FF0080\"");
}

#[test]
fn test_rgba_deserializes_as_opaque() {
    let color: Rgba = serde_json::from_str("\"0aabcd\"").unwrap();
    assert_eq!(color, Rgba::rgb(10, 171, 205));
}

#[test]
fn test_rgba_deserialize_rejects_bad_hex() {
    assert!(serde_json::from_str::<Rgba>("\"ZZ0080\"").is_err());
    assert!(serde_json::from_str::<Rgba>("\"FF\"").is_err());
}

#[test]
fn test_norm_serializes_as_tagged_enum() {
    assert_eq!(serde_json::to_string(&Norm::Taxicab).unwrap(), "\"Taxicab\"");
    assert_eq!(serde_json::to_string(&Norm::Chebyshev).unwrap(), "\"Chebyshev\"");

    let cubic = Norm::from_exponent(3.0).unwrap();
    assert_eq!(serde_json::to_string(&cubic).unwrap(), "{\"Minkowski\":3.0}");
}

#[test]
fn test_norm_round_trips_for_every_kind() {
    for p in [1.0, 2.0, 3.5, f32::INFINITY] {
        let norm = Norm::from_exponent(p).unwrap();
        let json = serde_json::to_string(&norm).unwrap();
        let parsed: Norm = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, norm, "json was {}", json);
    }
}

#[test]
fn test_norm_deserialize_validates_exponent() {
    let err = serde_json::from_str::<Norm>("{\"Minkowski\":0.5}").unwrap_err();
    assert!(err.to_string().contains("Unsupported norm"));

    // A general exponent of 2 is the Euclidean norm.
    let norm: Norm = serde_json::from_str("{\"Minkowski\":2.0}").unwrap();
    assert_eq!(norm, Norm::Euclidean);
}
