use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A single entry of the hiring list.
///
/// `id` and `listId` default to 0 when absent; no other validation is
/// applied to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiringItem {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "listId", default)]
    pub list_id: i64,
    #[serde(default)]
    pub name: Option<String>,
}

impl HiringItem {
    pub fn new(id: i64, list_id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            list_id,
            name: Some(name.into()),
        }
    }

    /// True when the name is absent, empty or whitespace-only.
    pub fn has_blank_name(&self) -> bool {
        self.name.as_deref().map_or(true, |n| n.trim().is_empty())
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// Items grouped by list id. Keys iterate in ascending order.
pub type HiringItemMap = BTreeMap<i64, Vec<HiringItem>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub const ALL: [&'static str; 3] = ["text", "json", "csv"];

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        f.write_str(s)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!(
                "unsupported format '{}', expected one of: {}",
                other,
                OutputFormat::ALL.join(", ")
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub hiring_item_map: HiringItemMap,
    pub rendered: String,
}

impl TransformResult {
    pub fn item_count(&self) -> usize {
        self.hiring_item_map.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_names() {
        let mut item = HiringItem::new(1, 1, "Item 1");
        assert!(!item.has_blank_name());
        item.name = Some("   ".to_string());
        assert!(item.has_blank_name());
        item.name = Some(String::new());
        assert!(item.has_blank_name());
        item.name = None;
        assert!(item.has_blank_name());
        assert_eq!(item.display_name(), "");
    }

    #[test]
    fn test_missing_fields_default() {
        let item: HiringItem = serde_json::from_str(r#"{"name": "Item 7"}"#).unwrap();
        assert_eq!(item.id, 0);
        assert_eq!(item.list_id, 0);
        assert_eq!(item.display_name(), "Item 7");
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("txt".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Csv.extension(), "csv");
    }
}
