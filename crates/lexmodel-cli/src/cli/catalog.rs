//! Reference commands: schema, enums.

use anyhow::{Result, bail};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use lexmodel_core::schema::{schema_for_shape, shape_names};
use lexmodel_types::enums::{EnumDescriptor, catalog, describe};

/// Print the JSON schema for `shape`, or the list of known shapes.
pub fn print_schema(shape: Option<&str>, json: bool) -> Result<()> {
    let Some(shape) = shape else {
        let names: Vec<&str> = shape_names().collect();
        if json {
            println!("{}", serde_json::to_string_pretty(&names)?);
        } else {
            println!();
            println!("  {}", style("── Shapes ──").dim());
            for name in names {
                println!("  {name}");
            }
            println!();
        }
        return Ok(());
    };

    // A schema is JSON either way.
    let schema = schema_for_shape(shape)?;
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

/// Enums to list: one by name, or all of them.
fn select_enums(name: Option<&str>) -> Result<Vec<EnumDescriptor>> {
    match name {
        None => Ok(catalog()),
        Some(name) => match describe(name) {
            Some(descriptor) => Ok(vec![descriptor]),
            None => bail!(
                "unknown enum '{name}' (run {} to list them)",
                style("lexm enums").yellow()
            ),
        },
    }
}

/// Print enums and their allowed wire values.
pub fn print_enums(name: Option<&str>, json: bool) -> Result<()> {
    let enums = select_enums(name)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&enums)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Enum").fg(Color::White),
        Cell::new("Values").fg(Color::White),
    ]);

    for descriptor in &enums {
        table.add_row(vec![
            Cell::new(descriptor.name).fg(Color::Cyan),
            Cell::new(descriptor.values.join(", ")),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all_enums() {
        assert_eq!(select_enums(None).unwrap().len(), 10);
    }

    #[test]
    fn test_select_enum_by_name() {
        let enums = select_enums(Some("locale")).unwrap();
        assert_eq!(enums.len(), 1);
        assert_eq!(enums[0].values, vec!["en-US", "en-GB", "de-DE"]);
    }

    #[test]
    fn test_select_unknown_enum() {
        let err = select_enums(Some("Colour")).unwrap_err();
        assert!(err.to_string().contains("unknown enum 'Colour'"));
    }

    #[test]
    fn test_unknown_schema_shape() {
        let err = print_schema(Some("DeleteBotRequest"), true).unwrap_err();
        assert_eq!(err.to_string(), "unknown shape: 'DeleteBotRequest'");
    }
}
