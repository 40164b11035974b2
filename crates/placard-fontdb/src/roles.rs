//! Font roles, the plan that resolves them, and the resulting font set

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use placard_core::{
    error::{PlacardError, Result},
    FontHandle,
};

use crate::BuiltinFont;

/// The job a font does on the card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontRole {
    /// Invitation heading
    Header,
    /// Recipient name
    Guest,
    /// Body lines, family names, closing
    Small,
    /// The couple's names
    Couple,
    /// The ampersand between the names
    Amp,
    /// Column labels
    Label,
    /// Large date numerals
    Date,
    /// Venue name
    Venue,
}

impl FontRole {
    pub const ALL: [FontRole; 8] = [
        FontRole::Header,
        FontRole::Guest,
        FontRole::Small,
        FontRole::Couple,
        FontRole::Amp,
        FontRole::Label,
        FontRole::Date,
        FontRole::Venue,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            FontRole::Header => "header",
            FontRole::Guest => "guest",
            FontRole::Small => "small",
            FontRole::Couple => "couple",
            FontRole::Amp => "amp",
            FontRole::Label => "label",
            FontRole::Date => "date",
            FontRole::Venue => "venue",
        }
    }
}

impl fmt::Display for FontRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered candidate files and a pixel size for one role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub candidates: Vec<PathBuf>,
    pub size: f32,
}

impl FontSpec {
    pub fn new<P: AsRef<Path>>(candidates: &[P], size: f32) -> Self {
        Self {
            candidates: candidates.iter().map(|p| p.as_ref().to_path_buf()).collect(),
            size,
        }
    }
}

const SERIF_REGULAR: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Times New Roman.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSerif-Regular.ttf",
    "/usr/share/fonts/liberation-serif/LiberationSerif-Regular.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSerif.ttf",
    "C:\\Windows\\Fonts\\times.ttf",
];

const SERIF_ITALIC: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Times New Roman Italic.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSerif-Italic.ttf",
    "/usr/share/fonts/liberation-serif/LiberationSerif-Italic.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSerif-Italic.ttf",
    "C:\\Windows\\Fonts\\timesi.ttf",
];

const SERIF_BOLD: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Times New Roman Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSerif-Bold.ttf",
    "/usr/share/fonts/liberation-serif/LiberationSerif-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSerif-Bold.ttf",
    "C:\\Windows\\Fonts\\timesbd.ttf",
];

/// Which files and sizes each role should try
///
/// Serialized as a JSON object keyed by role name. Roles a file leaves
/// out keep their default spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontPlan {
    specs: BTreeMap<FontRole, FontSpec>,
}

impl Default for FontPlan {
    fn default() -> Self {
        let specs = [
            (FontRole::Header, SERIF_REGULAR, 15.0),
            (FontRole::Guest, SERIF_ITALIC, 28.0),
            (FontRole::Small, SERIF_REGULAR, 11.0),
            (FontRole::Couple, SERIF_ITALIC, 42.0),
            (FontRole::Amp, SERIF_ITALIC, 32.0),
            (FontRole::Label, SERIF_REGULAR, 10.0),
            (FontRole::Date, SERIF_REGULAR, 60.0),
            (FontRole::Venue, SERIF_BOLD, 18.0),
        ]
        .into_iter()
        .map(|(role, candidates, size)| (role, FontSpec::new(candidates, size)))
        .collect();

        Self { specs }
    }
}

impl FontPlan {
    /// Load a plan from JSON, filling unspecified roles from the defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
            .map_err(|e| PlacardError::ConfigError(format!("{}: {}", path.display(), e)))
    }

    /// Parse a plan from a JSON string, filling unspecified roles from the defaults
    pub fn from_json_str(raw: &str) -> std::result::Result<Self, serde_json::Error> {
        let overrides: BTreeMap<FontRole, FontSpec> = serde_json::from_str(raw)?;
        let mut plan = Self::default();
        plan.specs.extend(overrides);
        Ok(plan)
    }

    pub fn spec(&self, role: FontRole) -> Option<&FontSpec> {
        self.specs.get(&role)
    }

    pub fn set(&mut self, role: FontRole, spec: FontSpec) {
        self.specs.insert(role, spec);
    }

    /// Roles in a stable order
    pub fn iter(&self) -> impl Iterator<Item = (FontRole, &FontSpec)> {
        self.specs.iter().map(|(role, spec)| (*role, spec))
    }

    /// Every role backed by the built-in font at its planned size
    ///
    /// Useful when no font files are available at all, and for tests that
    /// need deterministic metrics.
    pub fn builtin_set(&self) -> FontSet {
        let mut set = FontSet::new();
        for (role, spec) in self.iter() {
            set.insert(role, Arc::new(BuiltinFont::for_size(spec.size)));
        }
        set
    }
}

/// Resolved fonts for every role, shared read-only across renders
///
/// Lookups never fail: a role missing from the set gets the built-in font.
#[derive(Clone)]
pub struct FontSet {
    fonts: HashMap<FontRole, FontHandle>,
    fallback: FontHandle,
}

impl FontSet {
    pub fn new() -> Self {
        Self {
            fonts: HashMap::new(),
            fallback: Arc::new(BuiltinFont::for_size(12.0)),
        }
    }

    pub fn insert(&mut self, role: FontRole, font: FontHandle) {
        self.fonts.insert(role, font);
    }

    pub fn get(&self, role: FontRole) -> &FontHandle {
        self.fonts.get(&role).unwrap_or(&self.fallback)
    }

    /// Roles that ended up on the built-in font
    pub fn fallback_roles(&self) -> Vec<FontRole> {
        FontRole::ALL
            .into_iter()
            .filter(|role| self.get(*role).is_fallback())
            .collect()
    }
}

impl Default for FontSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FontSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for role in FontRole::ALL {
            let font = self.get(role);
            map.entry(&role.as_str(), &format!("{} @ {}px", font.name(), font.size()));
        }
        map.finish()
    }
}
