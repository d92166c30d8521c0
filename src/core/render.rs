use crate::domain::model::{Campsite, SortOption};
use crate::utils::error::{CampsiteError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

const HEADER: [&str; 6] = ["name", "municipality", "province", "category", "places", "address"];

/// 排序列：目前選取的選項以方括號標示
pub fn render_sort_bar(selected: SortOption) -> String {
    SortOption::ALL
        .iter()
        .map(|&option| {
            if option == selected {
                format!("[{}]", option.label())
            } else {
                option.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn render_item(camp: &Campsite) -> String {
    let mut lines = vec![camp.name.clone(), camp.location_line(), camp.summary_line()];
    if let Some(address) = camp.display_address() {
        lines.push(address.to_string());
    }
    lines.join("\n")
}

pub fn render_text(records: &[Campsite], selected: SortOption) -> String {
    let mut out = render_sort_bar(selected);
    out.push_str("\n\n");
    if records.is_empty() {
        out.push_str("No campsites found.\n");
        return out;
    }
    let items: Vec<String> = records.iter().map(render_item).collect();
    out.push_str(&items.join("\n\n"));
    out.push('\n');
    out
}

pub fn render_csv(records: &[Campsite]) -> Result<String> {
    render_delimited(records, b',')
}

pub fn render_tsv(records: &[Campsite]) -> Result<String> {
    render_delimited(records, b'\t')
}

fn render_delimited(records: &[Campsite], delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(Vec::new());

    // 空清單也要輸出表頭
    writer.write_record(HEADER)?;
    for camp in records {
        writer.serialize(camp)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CampsiteError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| {
        CampsiteError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

#[derive(Serialize)]
struct JsonListing<'a> {
    generated_at: DateTime<Utc>,
    sort: SortOption,
    count: usize,
    records: &'a [Campsite],
}

pub fn render_json(
    records: &[Campsite],
    sort: SortOption,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    let listing = JsonListing {
        generated_at,
        sort,
        count: records.len(),
        records,
    };
    Ok(serde_json::to_string_pretty(&listing)?)
}
