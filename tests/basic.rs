use speckflow::{ConfigError, FieldConfig, FieldMetrics, Lattice, SpeckField};

#[test]
fn test_field_creation() {
    let field = SpeckField::with_seed(FieldConfig::default(), 300.0, 300.0, 1)
        .expect("valid dimensions should build");
    assert_eq!(field.lattice.num_cols, 10);
    assert_eq!(field.lattice.num_rows, 10);
    assert_eq!(field.lattice.cells.len(), 100);
    assert_eq!(field.particles.len(), 5000);
}

#[test]
fn test_default_config() {
    let config = FieldConfig::default();
    assert_eq!(config.speck_count, 5000);
    assert_eq!(config.resolution, 30.0);
    assert_eq!(config.pen_size, 100.0);
    assert_eq!(config.max_stroke_width, 2.0);
}

#[test]
fn test_config_partial_json_falls_back_to_defaults() {
    let config: FieldConfig = serde_json::from_str(r#"{"speck_count": 100}"#).unwrap();
    assert_eq!(config.speck_count, 100);
    assert_eq!(config.resolution, 30.0);
    assert_eq!(config.pen_size, 100.0);
}

#[test]
fn test_config_json_file() {
    let path = std::env::temp_dir().join("speckflow_basic_test_config.json");
    std::fs::write(&path, r#"{"resolution": 15.0, "pen_size": 50.0}"#).unwrap();

    let config = FieldConfig::from_json_file(&path).expect("config file should parse");
    assert_eq!(config.resolution, 15.0);
    assert_eq!(config.pen_size, 50.0);
    assert_eq!(config.speck_count, 5000);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_bad_resolution_rejected() {
    let mut config = FieldConfig::default();
    config.resolution = 0.0;

    match SpeckField::with_seed(config, 300.0, 300.0, 1) {
        Err(ConfigError::BadResolution { value }) => assert_eq!(value, 0.0),
        other => panic!("expected BadResolution, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_bad_surface_rejected() {
    match Lattice::new(-1.0, 300.0, 30.0) {
        Err(ConfigError::BadSurface { width, .. }) => assert_eq!(width, -1.0),
        other => panic!("expected BadSurface, got {:?}", other.map(|_| ())),
    }
    assert!(Lattice::new(300.0, f32::NAN, 30.0).is_err());
}

#[test]
fn test_fresh_field_metrics_are_quiescent() {
    let field = SpeckField::with_seed(FieldConfig::default(), 300.0, 300.0, 1).unwrap();
    let metrics = FieldMetrics::analyze(&field, 0);

    assert_eq!(metrics.total_kinetic_energy, 0.0);
    assert_eq!(metrics.max_cell_speed, 0.0);
    assert_eq!(metrics.moving_specks, 0);
}
