use crate::core::extractor::RecordExtractor;
use crate::domain::fields::FieldAliases;
use crate::domain::model::Campsite;
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use serde_json::Value;

/// 編譯進執行檔的資料集
pub const BUNDLED_DATASET: &str = include_str!("../../data/campings.json");

/// Loads campsite datasets. Invalid JSON text is the only failure; anything
/// structurally odd inside valid JSON degrades to fewer or blank records.
#[derive(Debug, Clone, Default)]
pub struct CampsiteRepository {
    extractor: RecordExtractor,
}

impl CampsiteRepository {
    pub fn new(aliases: FieldAliases) -> Self {
        Self {
            extractor: RecordExtractor::new(aliases),
        }
    }

    pub fn parse_slice(&self, bytes: &[u8]) -> Result<Vec<Campsite>> {
        let document: Value = serde_json::from_slice(bytes)?;
        Ok(self.extractor.extract(&document))
    }

    pub fn parse_str(&self, content: &str) -> Result<Vec<Campsite>> {
        self.parse_slice(content.as_bytes())
    }

    pub fn load<S: Storage>(&self, storage: &S, path: &str) -> Result<Vec<Campsite>> {
        tracing::debug!("Reading dataset from: {}", path);
        let bytes = storage.read_file(path)?;
        tracing::debug!("Dataset size: {} bytes", bytes.len());
        self.parse_slice(&bytes)
    }

    pub fn bundled(&self) -> Result<Vec<Campsite>> {
        tracing::debug!("Using bundled dataset");
        self.parse_str(BUNDLED_DATASET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CampsiteError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MockStorage {
        files: Mutex<HashMap<String, Vec<u8>>>,
    }

    impl MockStorage {
        fn with_file(path: &str, data: &str) -> Self {
            let mut files = HashMap::new();
            files.insert(path.to_string(), data.as_bytes().to_vec());
            Self {
                files: Mutex::new(files),
            }
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().unwrap();
            files.get(path).cloned().ok_or_else(|| {
                CampsiteError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().unwrap();
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_bundled_dataset_loads() {
        let records = CampsiteRepository::default().bundled().unwrap();
        assert_eq!(records.len(), 8);
        assert_eq!(records[0].name, "Camping Costa Blanca");
        assert_eq!(records[1].places, 120);
        // 變體欄位名稱
        assert_eq!(records[2].municipality, "Benicàssim");
        assert_eq!(records[4].name, "CAMPING EL RACÓ");
        assert_eq!(records[4].address, "");
        // Plazas 為 null 時改用 places
        assert_eq!(records[5].places, 60);
        assert_eq!(records[7].places, 0);
    }

    #[test]
    fn test_load_through_storage() {
        let storage = MockStorage::with_file(
            "campings.json",
            r#"{"result":{"records":[{"Nombre":"A","Plazas":"10"},{"nom":"B","places":5}]}}"#,
        );
        let records = CampsiteRepository::default()
            .load(&storage, "campings.json")
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].places, 10);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let storage = MockStorage::with_file("other.json", "{}");
        let err = CampsiteRepository::default()
            .load(&storage, "campings.json")
            .unwrap_err();
        assert!(matches!(err, CampsiteError::IoError(_)));
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let err = CampsiteRepository::default()
            .parse_str("{\"result\": ")
            .unwrap_err();
        assert!(matches!(err, CampsiteError::SerializationError(_)));
    }

    #[test]
    fn test_valid_json_without_records_is_empty() {
        let records = CampsiteRepository::default()
            .parse_str(r#"{"success": false}"#)
            .unwrap();
        assert!(records.is_empty());
    }
}
