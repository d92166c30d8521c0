use crate::utils::error::{CampsiteError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 正規化後的營地資料，所有欄位缺值時為空字串或 0
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campsite {
    pub name: String,
    pub municipality: String,
    pub province: String,
    pub category: String,
    pub places: i64,
    pub address: String,
}

impl Campsite {
    /// `"<municipality> - <province>"`
    pub fn location_line(&self) -> String {
        format!("{} - {}", self.municipality, self.province)
    }

    /// `"Category: <category> | Places: <places>"`
    pub fn summary_line(&self) -> String {
        format!("Category: {} | Places: {}", self.category, self.places)
    }

    /// Address to display, or `None` when it is blank.
    pub fn display_address(&self) -> Option<&str> {
        if self.address.trim().is_empty() {
            None
        } else {
            Some(&self.address)
        }
    }
}

/// 清單排序方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    #[default]
    NameAsc,
    NameDesc,
    PlacesDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 3] = [
        SortOption::NameAsc,
        SortOption::NameDesc,
        SortOption::PlacesDesc,
    ];

    /// Label shown on the sort bar.
    pub fn label(self) -> &'static str {
        match self {
            SortOption::NameAsc => "Name A-Z",
            SortOption::NameDesc => "Name Z-A",
            SortOption::PlacesDesc => "Places",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
            SortOption::PlacesDesc => "places-desc",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = CampsiteError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        SortOption::ALL
            .into_iter()
            .find(|option| option.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CampsiteError::InvalidConfigValueError {
                field: "sort".to_string(),
                value: s.to_string(),
                reason: "Valid options: name-asc, name-desc, places-desc".to_string(),
            })
    }
}

/// 預覽用的兩筆固定資料
pub fn sample_campsites() -> Vec<Campsite> {
    vec![
        Campsite {
            name: "Camping Costa Blanca".to_string(),
            municipality: "Denia".to_string(),
            province: "Alicante".to_string(),
            category: "3".to_string(),
            places: 250,
            address: "Carretera Les Marines, km 5".to_string(),
        },
        Campsite {
            name: "Camping Sierra Verde".to_string(),
            municipality: "Morella".to_string(),
            province: "Castellon".to_string(),
            category: "2".to_string(),
            places: 120,
            address: "Partida El Saso s/n".to_string(),
        },
    ]
}
