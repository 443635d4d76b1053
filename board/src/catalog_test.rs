#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

fn make_tile(id: &str) -> TileDefinition {
    TileDefinition {
        id: id.to_owned(),
        path: format!("/tiles/{id}.png"),
        size: Size { width: 600.0, height: 323.0 },
        padding: Point::new(10.0, 20.0),
        hexes: vec![HexCoord::new(0, 0), HexCoord::new(1, 0), HexCoord::new(0, 1)],
        doors: vec![HexCoord::new(1, 0)],
        debug_scale: None,
    }
}

// =============================================================
// Serde
// =============================================================

#[test]
fn tile_definition_reads_catalog_file_shape() {
    let raw = json!({
        "id": "1A",
        "path": "/tiles/fh-01a-snow.png",
        "size": { "width": 600, "height": 323 },
        "padding": { "x": 4.5, "y": 2 },
        "hexes": [{ "x": 0, "y": 0 }, { "x": 1, "y": 0 }],
        "doors": [{ "x": 1, "y": 0 }],
        "debugScale": { "width": 140 }
    });
    let def: TileDefinition = serde_json::from_value(raw).unwrap();
    assert_eq!(def.id, "1A");
    assert_eq!(def.size, Size { width: 600.0, height: 323.0 });
    assert_eq!(def.padding, Point::new(4.5, 2.0));
    assert_eq!(def.hexes.len(), 2);
    assert_eq!(def.doors, vec![HexCoord::new(1, 0)]);
    assert_eq!(def.debug_scale, Some(DebugScale { width: 140.0 }));
}

#[test]
fn tile_definition_accepts_legacy_hex_key() {
    let raw = json!({
        "id": "1A",
        "path": "/tiles/a.png",
        "size": { "width": 10, "height": 10 },
        "padding": { "x": 0, "y": 0 },
        "hex": [{ "x": 2, "y": 3 }]
    });
    let def: TileDefinition = serde_json::from_value(raw).unwrap();
    assert_eq!(def.hexes, vec![HexCoord::new(2, 3)]);
    assert!(def.doors.is_empty());
    assert!(def.debug_scale.is_none());
}

#[test]
fn tile_definition_omits_empty_optionals_when_serialized() {
    let mut def = make_tile("2B");
    def.doors.clear();
    let value = serde_json::to_value(&def).unwrap();
    assert!(value.get("doors").is_none());
    assert!(value.get("debugScale").is_none());
    assert!(value.get("hexes").is_some());
}

#[test]
fn tile_definition_writes_camel_case_debug_scale() {
    let mut def = make_tile("2B");
    def.debug_scale = Some(DebugScale { width: 64.0 });
    let value = serde_json::to_value(&def).unwrap();
    assert_eq!(value["debugScale"]["width"], json!(64.0));
}

// =============================================================
// Hex width / center
// =============================================================

#[test]
fn effective_hex_width_defaults_without_override() {
    assert_eq!(make_tile("1A").effective_hex_width(), DEFAULT_HEX_WIDTH);
}

#[test]
fn effective_hex_width_uses_override() {
    let mut def = make_tile("1A");
    def.debug_scale = Some(DebugScale { width: 64.0 });
    assert_eq!(def.effective_hex_width(), 64.0);
}

#[test]
fn effective_hex_width_treats_zero_and_nan_as_absent() {
    let mut def = make_tile("1A");
    def.debug_scale = Some(DebugScale { width: 0.0 });
    assert_eq!(def.effective_hex_width(), DEFAULT_HEX_WIDTH);
    def.debug_scale = Some(DebugScale { width: f64::NAN });
    assert_eq!(def.effective_hex_width(), DEFAULT_HEX_WIDTH);
}

#[test]
fn center_is_half_the_size() {
    assert_eq!(make_tile("1A").center(), Point::new(300.0, 161.5));
}

// =============================================================
// Editor toggles
// =============================================================

#[test]
fn toggle_hex_adds_missing_hex() {
    let mut def = make_tile("1A");
    def.toggle_hex(HexCoord::new(5, 5));
    assert!(def.has_hex(HexCoord::new(5, 5)));
    assert_eq!(def.hexes.last(), Some(&HexCoord::new(5, 5)));
}

#[test]
fn toggle_hex_removing_a_door_hex_also_removes_the_door() {
    let mut def = make_tile("1A");
    def.toggle_hex(HexCoord::new(1, 0));
    assert!(!def.has_hex(HexCoord::new(1, 0)));
    assert!(def.doors.is_empty());
}

#[test]
fn toggle_door_on_occupied_hex_flips_flag() {
    let mut def = make_tile("1A");
    assert!(def.toggle_door(HexCoord::new(0, 1)));
    assert!(def.is_door(HexCoord::new(0, 1)));
    assert!(def.toggle_door(HexCoord::new(0, 1)));
    assert!(!def.is_door(HexCoord::new(0, 1)));
}

#[test]
fn toggle_door_outside_tile_is_rejected() {
    let mut def = make_tile("1A");
    assert!(!def.toggle_door(HexCoord::new(9, 9)));
    assert_eq!(def.doors, vec![HexCoord::new(1, 0)]);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_accepts_well_formed_tile() {
    assert!(make_tile("1A").validate().is_ok());
}

#[test]
fn validate_rejects_zero_size() {
    let mut def = make_tile("1A");
    def.size.width = 0.0;
    assert!(matches!(def.validate(), Err(CatalogError::InvalidSize { .. })));
}

#[test]
fn validate_rejects_nan_padding() {
    let mut def = make_tile("1A");
    def.padding.y = f64::NAN;
    assert!(matches!(def.validate(), Err(CatalogError::InvalidPadding { .. })));
}

#[test]
fn validate_rejects_negative_hex_width() {
    let mut def = make_tile("1A");
    def.debug_scale = Some(DebugScale { width: -3.0 });
    assert!(matches!(def.validate(), Err(CatalogError::InvalidHexWidth { .. })));
}

#[test]
fn validate_rejects_duplicate_hex() {
    let mut def = make_tile("1A");
    def.hexes.push(HexCoord::new(0, 0));
    let err = def.validate().unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateHex { hex, .. } if hex == HexCoord::new(0, 0)));
}

#[test]
fn validate_rejects_door_outside_hexes() {
    let mut def = make_tile("1A");
    def.doors.push(HexCoord::new(7, 7));
    let err = def.validate().unwrap_err();
    assert_eq!(err.to_string(), "tile `1A` has door (7, 7) outside its hexes");
}

// =============================================================
// TileCatalog
// =============================================================

#[test]
fn catalog_preserves_order_and_indexes_by_id() {
    let catalog = TileCatalog::new(vec![make_tile("3A"), make_tile("1A")]).unwrap();
    let ids: Vec<&str> = catalog.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, ["3A", "1A"]);
    assert_eq!(catalog.get("1A").map(|d| d.id.as_str()), Some("1A"));
    assert!(catalog.get("9Z").is_none());
    assert_eq!(catalog.len(), 2);
    assert!(!catalog.is_empty());
}

#[test]
fn catalog_rejects_duplicate_ids() {
    let err = TileCatalog::new(vec![make_tile("1A"), make_tile("1A")]).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(id) if id == "1A"));
}

#[test]
fn catalog_from_json_reports_malformed_input() {
    let err = TileCatalog::from_json("{ not json").unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)));
}

#[test]
fn catalog_json_round_trip_keeps_entries() {
    let catalog = TileCatalog::new(vec![make_tile("1A"), make_tile("3A")]).unwrap();
    let text = catalog.to_json_pretty().unwrap();
    assert!(text.starts_with("[\n  {"));
    let back = TileCatalog::from_json(&text).unwrap();
    assert_eq!(back.get("3A"), catalog.get("3A"));
}

#[test]
fn upsert_appends_new_definition() {
    let mut catalog = TileCatalog::new(vec![make_tile("1A")]).unwrap();
    assert_eq!(catalog.upsert(make_tile("3A")), Upsert::Inserted);
    assert_eq!(catalog.len(), 2);
    assert!(catalog.get("3A").is_some());
}

#[test]
fn upsert_replaces_existing_definition_in_place() {
    let mut catalog = TileCatalog::new(vec![make_tile("1A"), make_tile("3A")]).unwrap();
    let mut edited = make_tile("1A");
    edited.padding = Point::new(99.0, 98.0);
    assert_eq!(catalog.upsert(edited), Upsert::Replaced);
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.iter().next().map(|d| d.padding), Some(Point::new(99.0, 98.0)));
}

#[test]
fn validate_all_collects_every_failure() {
    let mut bad_size = make_tile("1A");
    bad_size.size.height = -1.0;
    let mut bad_door = make_tile("2A");
    bad_door.doors.push(HexCoord::new(8, 8));
    let catalog = TileCatalog::new(vec![bad_size, make_tile("3A"), bad_door]).unwrap();
    assert_eq!(catalog.validate_all().len(), 2);
}

#[test]
fn slice_lookup_scans_linearly() {
    let defs = vec![make_tile("1A"), make_tile("3A")];
    assert_eq!(defs.tile_def("3A").map(|d| d.id.as_str()), Some("3A"));
    assert!(defs.as_slice().tile_def("nope").is_none());
}

// =============================================================
// Figures
// =============================================================

#[test]
fn figure_definition_reads_palette_shape() {
    let raw = json!({
        "id": "blinkblade",
        "name": "Blinkblade",
        "type": "player",
        "color": "bg-yellow-500",
        "imagePath": "/standees/fh-blinkblade-standee-front.png"
    });
    let def: FigureDefinition = serde_json::from_value(raw).unwrap();
    assert_eq!(def.kind, FigureKind::Player);
    assert_eq!(def.image_path.as_deref(), Some("/standees/fh-blinkblade-standee-front.png"));
}

#[test]
fn figure_kind_rejects_unknown_type() {
    assert!(serde_json::from_str::<FigureKind>("\"loot\"").is_err());
}

#[test]
fn figure_catalog_looks_up_by_id() {
    let catalog = FigureCatalog::from_json(
        r#"[{"id":"guard","name":"Guard","type":"monster","color":"bg-red-500"},
            {"id":"archer","name":"Archer","type":"monster"}]"#,
    )
    .unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get("archer").map(|d| d.name.as_str()), Some("Archer"));
    assert!(catalog.get("zombie").is_none());
}

#[test]
fn figure_catalog_rejects_duplicate_ids() {
    let def = FigureDefinition {
        id: "guard".to_owned(),
        name: "Guard".to_owned(),
        kind: FigureKind::Monster,
        color: String::new(),
        image_path: None,
    };
    assert!(FigureCatalog::new(vec![def.clone(), def]).is_err());
}
