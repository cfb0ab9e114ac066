//! Built-in tonal presets, expressed as CSS-filter style percentages at full intensity.

/// Tonal percentages at 100% preset intensity. Identity is `100, 100, 0, 100, 0, 0`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetConfig {
    pub brightness: f32,
    pub contrast: f32,
    pub sepia: f32,
    pub saturation: f32,
    #[serde(default)]
    pub hue_rotate: f32,
    #[serde(default)]
    pub blur: f32,
}

impl PresetConfig {
    pub const IDENTITY: PresetConfig = tone(100.0, 100.0, 0.0, 100.0, 0.0);

    /// Lerp every field from identity towards `self` by `intensity / 100`.
    pub fn interpolate(&self, intensity: f32) -> PresetConfig {
        let t = intensity / 100.0;
        PresetConfig {
            brightness: 100.0 + (self.brightness - 100.0) * t,
            contrast: 100.0 + (self.contrast - 100.0) * t,
            sepia: self.sepia * t,
            saturation: 100.0 + (self.saturation - 100.0) * t,
            hue_rotate: self.hue_rotate * t,
            blur: self.blur * t,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PresetCategory {
    Cinematic,
    Vintage,
    Portrait,
    Landscape,
    #[serde(rename = "Dark Mood")]
    DarkMood,
    Urban,
    Dreamy,
}

impl PresetCategory {
    pub const ALL: [PresetCategory; 7] = [
        PresetCategory::Cinematic,
        PresetCategory::Vintage,
        PresetCategory::Portrait,
        PresetCategory::Landscape,
        PresetCategory::DarkMood,
        PresetCategory::Urban,
        PresetCategory::Dreamy,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Cinematic => "Cinematic",
            Self::Vintage => "Vintage",
            Self::Portrait => "Portrait",
            Self::Landscape => "Landscape",
            Self::DarkMood => "Dark Mood",
            Self::Urban => "Urban",
            Self::Dreamy => "Dreamy",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Preset {
    pub id: &'static str,
    pub name: &'static str,
    pub category: PresetCategory,
    pub config: PresetConfig,
}

const fn tone(
    brightness: f32,
    contrast: f32,
    sepia: f32,
    saturation: f32,
    hue: f32,
) -> PresetConfig {
    PresetConfig {
        brightness,
        contrast,
        sepia,
        saturation,
        hue_rotate: hue,
        blur: 0.0,
    }
}

const fn preset(
    id: &'static str,
    name: &'static str,
    category: PresetCategory,
    config: PresetConfig,
) -> Preset {
    Preset {
        id,
        name,
        category,
        config,
    }
}

pub static PRESETS: [Preset; 35] = [
    preset(
        "cinematic-cold",
        "Cold Cinema",
        PresetCategory::Cinematic,
        tone(95.0, 115.0, 5.0, 85.0, 200.0),
    ),
    preset(
        "cinematic-warm",
        "Warm Cinema",
        PresetCategory::Cinematic,
        tone(100.0, 120.0, 15.0, 90.0, 10.0),
    ),
    preset(
        "cinematic-teal-orange",
        "Teal & Orange",
        PresetCategory::Cinematic,
        tone(98.0, 118.0, 8.0, 110.0, 170.0),
    ),
    preset(
        "cinematic-blockbuster",
        "Blockbuster",
        PresetCategory::Cinematic,
        tone(102.0, 125.0, 6.0, 95.0, 185.0),
    ),
    preset(
        "cinematic-nordic",
        "Nordic Frost",
        PresetCategory::Cinematic,
        tone(105.0, 108.0, 2.0, 65.0, 195.0),
    ),
    preset(
        "vintage-classic",
        "Classic Vintage",
        PresetCategory::Vintage,
        tone(110.0, 90.0, 40.0, 80.0, 0.0),
    ),
    preset(
        "vintage-faded",
        "Faded Film",
        PresetCategory::Vintage,
        tone(115.0, 85.0, 30.0, 70.0, 0.0),
    ),
    preset(
        "vintage-retro",
        "Retro 70s",
        PresetCategory::Vintage,
        tone(108.0, 88.0, 50.0, 75.0, 15.0),
    ),
    preset(
        "vintage-kodachrome",
        "Kodachrome",
        PresetCategory::Vintage,
        tone(112.0, 95.0, 20.0, 110.0, 5.0),
    ),
    preset(
        "vintage-polaroid",
        "Polaroid",
        PresetCategory::Vintage,
        tone(118.0, 82.0, 15.0, 85.0, 358.0),
    ),
    preset(
        "portrait-soft",
        "Soft Portrait",
        PresetCategory::Portrait,
        tone(108.0, 95.0, 5.0, 90.0, 0.0),
    ),
    preset(
        "portrait-golden",
        "Golden Hour",
        PresetCategory::Portrait,
        tone(112.0, 100.0, 20.0, 105.0, 8.0),
    ),
    preset(
        "portrait-bw",
        "B&W Classic",
        PresetCategory::Portrait,
        tone(105.0, 110.0, 0.0, 0.0, 0.0),
    ),
    preset(
        "portrait-skin",
        "Skin Glow",
        PresetCategory::Portrait,
        tone(114.0, 92.0, 12.0, 95.0, 5.0),
    ),
    preset(
        "portrait-highkey",
        "High Key",
        PresetCategory::Portrait,
        tone(125.0, 85.0, 3.0, 80.0, 0.0),
    ),
    preset(
        "landscape-vivid",
        "Vivid Nature",
        PresetCategory::Landscape,
        tone(102.0, 112.0, 0.0, 140.0, 0.0),
    ),
    preset(
        "landscape-matte",
        "Matte Green",
        PresetCategory::Landscape,
        tone(105.0, 95.0, 5.0, 120.0, 340.0),
    ),
    preset(
        "landscape-golden",
        "Desert Gold",
        PresetCategory::Landscape,
        tone(108.0, 108.0, 25.0, 115.0, 20.0),
    ),
    preset(
        "landscape-ocean",
        "Ocean Breeze",
        PresetCategory::Landscape,
        tone(103.0, 110.0, 0.0, 130.0, 185.0),
    ),
    preset(
        "landscape-autumn",
        "Autumn Warm",
        PresetCategory::Landscape,
        tone(106.0, 105.0, 18.0, 118.0, 18.0),
    ),
    preset(
        "dark-noir",
        "Noir",
        PresetCategory::DarkMood,
        tone(80.0, 130.0, 0.0, 20.0, 0.0),
    ),
    preset(
        "dark-moody",
        "Moody Blue",
        PresetCategory::DarkMood,
        tone(85.0, 125.0, 0.0, 60.0, 210.0),
    ),
    preset(
        "dark-horror",
        "Horror Red",
        PresetCategory::DarkMood,
        tone(80.0, 130.0, 10.0, 80.0, 340.0),
    ),
    preset(
        "dark-shadow",
        "Deep Shadow",
        PresetCategory::DarkMood,
        tone(72.0, 140.0, 5.0, 40.0, 0.0),
    ),
    preset(
        "dark-emerald",
        "Dark Emerald",
        PresetCategory::DarkMood,
        tone(82.0, 122.0, 0.0, 70.0, 150.0),
    ),
    preset(
        "urban-street",
        "Street",
        PresetCategory::Urban,
        tone(98.0, 120.0, 5.0, 75.0, 0.0),
    ),
    preset(
        "urban-chrome",
        "Chrome",
        PresetCategory::Urban,
        tone(100.0, 128.0, 0.0, 55.0, 190.0),
    ),
    preset(
        "urban-neon",
        "Neon City",
        PresetCategory::Urban,
        tone(95.0, 130.0, 0.0, 160.0, 280.0),
    ),
    preset(
        "urban-concrete",
        "Concrete",
        PresetCategory::Urban,
        tone(96.0, 115.0, 8.0, 50.0, 0.0),
    ),
    preset(
        "urban-cyberpunk",
        "Cyberpunk",
        PresetCategory::Urban,
        tone(90.0, 135.0, 0.0, 180.0, 260.0),
    ),
    preset(
        "dreamy-pastel",
        "Pastel",
        PresetCategory::Dreamy,
        tone(118.0, 85.0, 8.0, 75.0, 0.0),
    ),
    preset(
        "dreamy-mist",
        "Morning Mist",
        PresetCategory::Dreamy,
        tone(120.0, 80.0, 5.0, 70.0, 190.0),
    ),
    preset(
        "dreamy-fairy",
        "Fairy Tale",
        PresetCategory::Dreamy,
        tone(115.0, 88.0, 10.0, 88.0, 310.0),
    ),
    preset(
        "dreamy-lavender",
        "Lavender",
        PresetCategory::Dreamy,
        tone(112.0, 90.0, 5.0, 80.0, 270.0),
    ),
    preset(
        "dreamy-cotton",
        "Cotton Candy",
        PresetCategory::Dreamy,
        tone(116.0, 86.0, 6.0, 90.0, 320.0),
    ),
];

pub fn find_preset(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.id == id)
}

pub fn presets_in(category: PresetCategory) -> impl Iterator<Item = &'static Preset> {
    PRESETS.iter().filter(move |p| p.category == category)
}

#[cfg(test)]
#[path = "../../tests/unit/model/preset.rs"]
mod tests;
