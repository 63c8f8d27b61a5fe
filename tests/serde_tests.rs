// tests/serde_tests.rs

// Only compile and run these tests if the "serde" feature is enabled.
#![cfg(feature = "serde")]

use hexcover::{BBox, CellId, GeoLoop, GeoPolygon, LatLng};

#[test]
fn test_cellid_serde() {
  let cell = CellId(0x5_2000_8000_0000_17);
  let serialized = serde_json::to_string(&cell).unwrap();
  // CellId is repr(transparent) over u64, so it serializes as the inner value.
  assert_eq!(serialized, cell.0.to_string());
  let deserialized: CellId = serde_json::from_str(&serialized).unwrap();
  assert_eq!(cell, deserialized);
}

#[test]
fn test_latlng_serde() {
  let ll = LatLng::new(0.5, -1.2);
  let serialized = serde_json::to_string(&ll).unwrap();
  assert_eq!(serialized, r#"{"lat":0.5,"lng":-1.2}"#);
  let deserialized: LatLng = serde_json::from_str(&serialized).unwrap();
  assert_eq!(ll, deserialized);
}

#[test]
fn test_geopolygon_serde_roundtrip() {
  let polygon = GeoPolygon::new(
    GeoLoop::new(vec![
      LatLng::new(0.0, 0.0),
      LatLng::new(0.0, 0.1),
      LatLng::new(0.1, 0.1),
    ]),
    vec![GeoLoop::new(vec![
      LatLng::new(0.02, 0.02),
      LatLng::new(0.02, 0.04),
      LatLng::new(0.04, 0.04),
    ])],
  );
  let serialized = serde_json::to_string(&polygon).unwrap();
  let deserialized: GeoPolygon = serde_json::from_str(&serialized).unwrap();
  assert_eq!(polygon, deserialized);
}

#[test]
fn test_bbox_serde() {
  let bbox = BBox {
    north: 0.2,
    south: -0.1,
    east: 1.5,
    west: 1.1,
  };
  let serialized = serde_json::to_string(&bbox).unwrap();
  let deserialized: BBox = serde_json::from_str(&serialized).unwrap();
  assert_eq!(bbox, deserialized);
}
