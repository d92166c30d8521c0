use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_list, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};

/// 營地紀錄的六個邏輯欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Municipality,
    Province,
    Category,
    Places,
    Address,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Municipality,
        Field::Province,
        Field::Category,
        Field::Places,
        Field::Address,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Municipality => "municipality",
            Field::Province => "province",
            Field::Category => "category",
            Field::Places => "places",
            Field::Address => "address",
        }
    }

    /// Raw keys accepted in the source data, highest priority first.
    pub fn default_variants(self) -> &'static [&'static str] {
        match self {
            Field::Name => &["Nombre", "nom", "NOM", "nombre", "NOMBRE"],
            Field::Municipality => &["Municipio", "municipi", "MUNICIPI", "municipio", "MUNICIPIO"],
            Field::Province => &["Provincia", "provincia", "PROVINCIA"],
            Field::Category => &["Categoria", "categoria", "CATEGORIA"],
            Field::Places => &["Plazas", "places", "PLACES"],
            Field::Address => &["Direccion", "direccion", "DIRECCION", "adreca", "ADRECA"],
        }
    }
}

/// `[fields]` 設定區塊：每個欄位可整份替換 key 清單
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldOverrides {
    pub name: Option<Vec<String>>,
    pub municipality: Option<Vec<String>>,
    pub province: Option<Vec<String>>,
    pub category: Option<Vec<String>>,
    pub places: Option<Vec<String>>,
    pub address: Option<Vec<String>>,
}

impl FieldOverrides {
    fn get(&self, field: Field) -> Option<&Vec<String>> {
        match field {
            Field::Name => self.name.as_ref(),
            Field::Municipality => self.municipality.as_ref(),
            Field::Province => self.province.as_ref(),
            Field::Category => self.category.as_ref(),
            Field::Places => self.places.as_ref(),
            Field::Address => self.address.as_ref(),
        }
    }
}

impl Validate for FieldOverrides {
    fn validate(&self) -> Result<()> {
        for field in Field::ALL {
            if let Some(keys) = self.get(field) {
                let name = format!("fields.{}", field.as_str());
                validate_non_empty_list(&name, keys)?;
                for key in keys {
                    validate_non_empty_string(&name, key)?;
                }
            }
        }
        Ok(())
    }
}

/// Ordered variant-key table used by the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAliases {
    table: [Vec<String>; 6],
}

impl FieldAliases {
    pub fn with_overrides(overrides: &FieldOverrides) -> Self {
        let mut aliases = Self::default();
        for field in Field::ALL {
            if let Some(keys) = overrides.get(field) {
                aliases.table[Self::slot(field)] = keys.clone();
            }
        }
        aliases
    }

    pub fn keys(&self, field: Field) -> &[String] {
        &self.table[Self::slot(field)]
    }

    fn slot(field: Field) -> usize {
        field as usize
    }
}

impl Default for FieldAliases {
    fn default() -> Self {
        let table = Field::ALL.map(|field| {
            field
                .default_variants()
                .iter()
                .map(|key| key.to_string())
                .collect::<Vec<String>>()
        });
        Self { table }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_order() {
        let aliases = FieldAliases::default();
        assert_eq!(aliases.keys(Field::Name)[0], "Nombre");
        assert_eq!(aliases.keys(Field::Places), ["Plazas", "places", "PLACES"]);
        assert_eq!(aliases.keys(Field::Address).len(), 5);
    }

    #[test]
    fn test_overrides_replace_single_field() {
        let overrides = FieldOverrides {
            places: Some(vec!["capacity".to_string(), "Plazas".to_string()]),
            ..FieldOverrides::default()
        };
        let aliases = FieldAliases::with_overrides(&overrides);
        assert_eq!(aliases.keys(Field::Places), ["capacity", "Plazas"]);
        assert_eq!(aliases.keys(Field::Name), FieldAliases::default().keys(Field::Name));
    }

    #[test]
    fn test_empty_override_is_invalid() {
        let overrides = FieldOverrides {
            name: Some(vec![]),
            ..FieldOverrides::default()
        };
        assert!(overrides.validate().is_err());

        let blank_key = FieldOverrides {
            province: Some(vec!["  ".to_string()]),
            ..FieldOverrides::default()
        };
        assert!(blank_key.validate().is_err());
    }
}
