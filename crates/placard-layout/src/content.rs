//! The fixed wording printed on every card

use std::path::Path;

use serde::{Deserialize, Serialize};

use placard_core::error::{PlacardError, Result};

/// A column label with its value below, such as a day of the month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateColumn {
    pub label: String,
    pub value: String,
}

impl DateColumn {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// One side of the family block: a label and the names under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyColumn {
    pub label: String,
    pub lines: Vec<String>,
}

impl FamilyColumn {
    pub fn new(label: impl Into<String>, lines: &[&str]) -> Self {
        Self {
            label: label.into(),
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Every string on the card except the guest's name
///
/// Defaults are the wording of the reference wedding card. A JSON file may
/// replace any subset of fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvitationContent {
    pub title: String,
    /// Lines between the divider and the couple
    pub ceremony: Vec<String>,
    pub bride: String,
    pub ampersand: String,
    pub groom: String,
    pub time: String,
    pub date: Vec<DateColumn>,
    pub lunar_date: String,
    pub venue_header: String,
    pub venue_name: String,
    pub venue_address: String,
    pub bride_family: FamilyColumn,
    pub groom_family: FamilyColumn,
    pub closing: String,
}

impl Default for InvitationContent {
    fn default() -> Self {
        Self {
            title: "TRÂN TRỌNG KÍNH MỜI".into(),
            ceremony: vec![
                "TỚI DỰ BỮA CƠM THÂN MẬT".into(),
                "MỪNG LỄ VU QUY CỦA HAI CON CHÚNG TÔI".into(),
            ],
            bride: "Nguyễn Thị Hải Anh".into(),
            ampersand: "&".into(),
            groom: "Tạ Quang Thái".into(),
            time: "VÀO HỒI 11 GIỜ 00, THỨ BA".into(),
            date: vec![
                DateColumn::new("NGÀY", "20"),
                DateColumn::new("THÁNG", "01"),
                DateColumn::new("NĂM", "2026"),
            ],
            lunar_date: "TỨC NGÀY 02 THÁNG 12 NĂM ẤT TỴ".into(),
            venue_header: "TẠI TẦNG 2".into(),
            venue_name: "LONG VĨ PALACE".into(),
            venue_address: "SỐ 3A ĐẠO DUY ANH, ĐỐNG ĐA, HÀ NỘI".into(),
            bride_family: FamilyColumn::new(
                "NHÀ GÁI",
                &["ÔNG NGUYỄN VĂN LUÂN", "BÀ NGUYỄN THỊ MAI HƯƠNG"],
            ),
            groom_family: FamilyColumn::new(
                "NHÀ TRAI",
                &["ÔNG TẠ QUANG SÁNG", "BÀ NGUYỄN PHƯƠNG DUNG"],
            ),
            closing: "RẤT HÂN HẠNH ĐƯỢC ĐÓN TIẾP!".into(),
        }
    }
}

impl InvitationContent {
    /// Read card wording from JSON; missing fields keep their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let content: InvitationContent = serde_json::from_str(&raw)
            .map_err(|e| PlacardError::ConfigError(format!("{}: {}", path.display(), e)))?;
        content.validate()?;
        log::debug!("Loaded card content from {}", path.display());
        Ok(content)
    }

    /// Reject wording the layout has no place for
    pub fn validate(&self) -> Result<()> {
        if self.date.is_empty() {
            return Err(PlacardError::ConfigError(
                "at least one date column is required".into(),
            ));
        }
        Ok(())
    }
}
