use std::path::PathBuf;

use impex_parser::{
    parse_line_items, parse_shipment_lines, Catalog, CatalogError, DelimiterChoice, LineFormat,
};

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

#[test]
fn toml_catalog_drives_shipment_parsing() {
    let catalog = Catalog::load(data_path("catalog.toml")).expect("catalog should load");

    assert_eq!(catalog.lookups.suppliers.len(), 2);
    assert!(catalog.tokens.is_currency("USD"), "built-in currency list kept");
    assert_eq!(catalog.tokens.vessel_joins.len(), 2);

    let content = std::fs::read_to_string(data_path("shipments_invoice_number.tsv"))
        .expect("fixture should exist");
    let options = catalog.parse_options(DelimiterChoice::Auto, true);
    let lines = parse_shipment_lines(&content, &options);

    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|line| line.is_valid()));
    assert_eq!(lines[0].supplier_id.as_deref(), Some("sup-1"));
}

#[test]
fn catalog_vessel_joins_reach_space_parser() {
    let catalog = Catalog::load(data_path("catalog.toml")).expect("catalog should load");
    let options = catalog.parse_options(DelimiterChoice::Auto, false);

    let text = "Shipment Test USD 100 FOB MSC ANNA 15-01-2024 20-01-2024 FCL Delivered Electronics";
    let lines = parse_shipment_lines(text, &options);

    assert_eq!(lines[0].format, LineFormat::SpaceDelimitedComplex);
    assert_eq!(lines[0].vessel_name.as_deref(), Some("MSC ANNA"));
}

#[test]
fn catalog_items_resolve_line_items() {
    let catalog = Catalog::load(data_path("catalog.toml")).expect("catalog should load");
    let options = catalog.line_item_options(DelimiterChoice::Auto, true);

    let content =
        std::fs::read_to_string(data_path("line_items.tsv")).expect("fixture should exist");
    let items = parse_line_items(&content, &options);

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].item_id.as_deref(), Some("item-1"));
}

#[test]
fn json_catalog_is_accepted() {
    let json = r#"{
        "lookups": {
            "currencies": [{ "id": "cur-usd", "name": "USD" }]
        },
        "tokens": { "currency_codes": ["USD"] }
    }"#;

    let catalog = Catalog::from_json_str(json).expect("json catalog should parse");
    assert_eq!(catalog.lookups.currencies.len(), 1);
    assert!(catalog.lookups.suppliers.is_empty());
    assert!(catalog.tokens.is_currency("usd"));
    assert!(!catalog.tokens.is_currency("EUR"));
    assert!(catalog.tokens.is_incoterm("FOB"));
}

#[test]
fn duplicate_option_ids_are_rejected() {
    let toml = r#"
        [lookups]
        suppliers = [
            { id = "sup-1", name = "Acme" },
            { id = "sup-1", name = "Acme Two" },
        ]
    "#;

    match Catalog::from_toml_str(toml) {
        Err(CatalogError::DuplicateOptionId { list, id }) => {
            assert_eq!(list, "suppliers");
            assert_eq!(id, "sup-1");
        }
        other => panic!("expected DuplicateOptionId error, got {other:?}"),
    }
}

#[test]
fn malformed_catalog_reports_toml_error() {
    match Catalog::from_toml_str("[lookups\nsuppliers = 3") {
        Err(CatalogError::Toml(_)) => {}
        other => panic!("expected Toml error, got {other:?}"),
    }
}

#[test]
fn missing_catalog_file_reports_path() {
    let path = data_path("does-not-exist.toml");
    match Catalog::load(&path) {
        Err(CatalogError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}
