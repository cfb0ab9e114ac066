use super::*;

#[test]
fn catalog_has_five_presets_per_category() {
    assert_eq!(PRESETS.len(), 35);
    for category in PresetCategory::ALL {
        assert_eq!(presets_in(category).count(), 5, "{}", category.label());
    }
}

#[test]
fn ids_are_unique_and_prefixed_by_category() {
    let mut ids: Vec<&str> = PRESETS.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), PRESETS.len());
    assert!(presets_in(PresetCategory::DarkMood).all(|p| p.id.starts_with("dark-")));
}

#[test]
fn lookup_by_id() {
    let p = find_preset("cinematic-cold").unwrap();
    assert_eq!(p.name, "Cold Cinema");
    assert_eq!(p.config.hue_rotate, 200.0);
    assert!(find_preset("no-such-preset").is_none());
}

#[test]
fn interpolation_endpoints() {
    let cfg = find_preset("portrait-bw").unwrap().config;
    assert_eq!(cfg.interpolate(0.0), PresetConfig::IDENTITY);
    assert_eq!(cfg.interpolate(100.0), cfg);
    let half = cfg.interpolate(50.0);
    assert_eq!(half.saturation, 50.0);
    assert_eq!(half.brightness, 102.5);
}

#[test]
fn category_serializes_with_display_label() {
    let v = serde_json::to_value(PresetCategory::DarkMood).unwrap();
    assert_eq!(v, "Dark Mood");
}
