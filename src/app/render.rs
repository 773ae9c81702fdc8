use crate::app::view_model::ViewState;
use crate::domain::model::{HiringItemMap, OutputFormat};
use crate::utils::error::Result;
use serde::Serialize;
use std::fmt::Write;

pub const LOADING_MESSAGE: &str = "Loading...";
pub const FAILURE_MESSAGE: &str = "Failed to load hiring items";
pub const EMPTY_MESSAGE: &str = "No hiring items";

#[derive(Serialize)]
struct ListSection<'a> {
    #[serde(rename = "listId")]
    list_id: i64,
    items: Vec<ItemRow<'a>>,
}

#[derive(Serialize)]
struct ItemRow<'a> {
    id: i64,
    name: &'a str,
}

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "listId")]
    list_id: i64,
    id: i64,
    name: &'a str,
}

pub fn render(map: &HiringItemMap, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(map)),
        OutputFormat::Json => render_json(map),
        OutputFormat::Csv => render_csv(map),
    }
}

/// One `List <id>` section per key, ascending, each followed by its rows.
pub fn render_text(map: &HiringItemMap) -> String {
    if map.is_empty() {
        return format!("{}\n", EMPTY_MESSAGE);
    }

    let mut out = String::new();
    for (i, (list_id, items)) in map.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        // Writing to a String cannot fail.
        let _ = writeln!(out, "List {}", list_id);
        for item in items {
            let _ = writeln!(out, "  ID: {:<6} Name: {}", item.id, item.display_name());
        }
    }
    out
}

pub fn render_json(map: &HiringItemMap) -> Result<String> {
    let sections: Vec<ListSection> = map
        .iter()
        .map(|(list_id, items)| ListSection {
            list_id: *list_id,
            items: items
                .iter()
                .map(|item| ItemRow {
                    id: item.id,
                    name: item.display_name(),
                })
                .collect(),
        })
        .collect();

    Ok(serde_json::to_string_pretty(&sections)?)
}

pub fn render_csv(map: &HiringItemMap) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    // serialize() only emits the header once a row exists.
    if map.is_empty() {
        writer.write_record(["listId", "id", "name"])?;
    }

    for (list_id, items) in map {
        for item in items {
            writer.serialize(CsvRow {
                list_id: *list_id,
                id: item.id,
                name: item.display_name(),
            })?;
        }
    }

    let data = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}

/// Renders what a viewer of `state` should see.
pub fn render_view_state(state: &ViewState, format: OutputFormat) -> Result<String> {
    if state.loading {
        return Ok(format!("{}\n", LOADING_MESSAGE));
    }
    if state.failure {
        return Ok(format!("{}\n", FAILURE_MESSAGE));
    }
    render(&state.hiring_item_map, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::HiringItem;

    fn sample_map() -> HiringItemMap {
        let mut map = HiringItemMap::new();
        map.insert(2, vec![HiringItem::new(2, 2, "A"), HiringItem::new(1, 2, "B")]);
        map.insert(1, vec![HiringItem::new(4, 1, "C")]);
        map
    }

    #[test]
    fn test_text_sections_in_key_order() {
        let text = render_text(&sample_map());

        let list_1 = text.find("List 1").unwrap();
        let list_2 = text.find("List 2").unwrap();
        assert!(list_1 < list_2);

        let a = text.find("Name: A").unwrap();
        let b = text.find("Name: B").unwrap();
        assert!(list_2 < a && a < b);
        assert!(text.contains("ID: 4"));
    }

    #[test]
    fn test_text_empty_map() {
        assert_eq!(render_text(&HiringItemMap::new()), "No hiring items\n");
    }

    #[test]
    fn test_json_shape() {
        let json = render_json(&sample_map()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["listId"], 1);
        assert_eq!(value[0]["items"][0]["id"], 4);
        assert_eq!(value[1]["items"][0]["name"], "A");
        assert_eq!(value[1]["items"][1]["name"], "B");
    }

    #[test]
    fn test_csv_rows() {
        let csv = render_csv(&sample_map()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines, vec!["listId,id,name", "1,4,C", "2,2,A", "2,1,B"]);
    }

    #[test]
    fn test_csv_empty_has_header() {
        let csv = render_csv(&HiringItemMap::new()).unwrap();
        assert_eq!(csv.trim_end(), "listId,id,name");
    }

    #[test]
    fn test_view_states() {
        let loading = ViewState::default();
        assert_eq!(
            render_view_state(&loading, OutputFormat::Text).unwrap(),
            "Loading...\n"
        );

        let failed = ViewState {
            loading: false,
            failure: true,
            hiring_item_map: HiringItemMap::new(),
        };
        assert_eq!(
            render_view_state(&failed, OutputFormat::Json).unwrap(),
            "Failed to load hiring items\n"
        );

        let loaded = ViewState {
            loading: false,
            failure: false,
            hiring_item_map: sample_map(),
        };
        assert!(render_view_state(&loaded, OutputFormat::Text)
            .unwrap()
            .starts_with("List 1"));
    }
}
