use std::collections::HashSet;
use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/material_colors.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let hues = catalog.get("hues").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'hues' field\n\
             The catalog must have a top-level 'hues' array.\n"
        );
    });

    let hues = hues.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'hues' must be an array\n\
             Got: {hues}\n"
        );
    });

    assert!(
        !hues.is_empty(),
        "\n\nCATALOG BUILD ERROR: 'hues' must not be empty\n"
    );

    let total_colors = validate_hues(hues);

    println!(
        "cargo:warning=Validated catalog: {} hues, {total_colors} total colors",
        hues.len()
    );
}

fn validate_hues(hues: &[serde_json::Value]) -> usize {
    let mut seen = HashSet::new();
    let mut total_colors = 0;

    for (i, hue) in hues.iter().enumerate() {
        let name = hue
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or_else(|| {
                panic!("\n\nCATALOG BUILD ERROR: Hue at index {i} missing 'name' field\n")
            });

        assert!(
            seen.insert(name.to_string()),
            "\n\nCATALOG BUILD ERROR: Duplicate hue name '{name}' (index {i})\n"
        );

        validate_selector(hue, name);
        total_colors += validate_direct_values(hue, name);
        total_colors += validate_groups(hue, name);
    }

    total_colors
}

fn validate_selector(hue: &serde_json::Value, hue_name: &str) {
    let Some(selector) = hue.get("selector") else {
        return;
    };

    for field in ["light", "dark"] {
        if let Some(hex) = selector.get(field).and_then(|v| v.as_str()) {
            validate_hex(hex, hue_name, &format!("selector.{field}"));
        }
    }
}

fn validate_direct_values(hue: &serde_json::Value, hue_name: &str) -> usize {
    let Some(values) = hue.get("values").and_then(|v| v.as_array()) else {
        return 0;
    };

    let mut keys = HashSet::new();
    for (j, value) in values.iter().enumerate() {
        let key = value
            .get("key")
            .and_then(|v| v.as_str())
            .unwrap_or_else(|| {
                panic!(
                    "\n\nCATALOG BUILD ERROR: Hue '{hue_name}' value {j} missing 'key' field\n"
                )
            });
        assert!(
            keys.insert(key.to_string()),
            "\n\nCATALOG BUILD ERROR: Hue '{hue_name}' has duplicate value key '{key}'\n"
        );
        let name = value.get("name").and_then(|v| v.as_str()).unwrap_or(key);
        assert!(
            !name.is_empty(),
            "\n\nCATALOG BUILD ERROR: Hue '{hue_name}' value {j} has an empty name\n\
             Give the value a non-empty 'key' or 'name'.\n"
        );
        validate_hex_field(value, hue_name, key);
    }

    values.len()
}

fn validate_groups(hue: &serde_json::Value, hue_name: &str) -> usize {
    let Some(groups) = hue.get("groups").and_then(|g| g.as_array()) else {
        return 0;
    };

    let mut total = 0;
    for (j, group) in groups.iter().enumerate() {
        let colors = group
            .get("colors")
            .and_then(|c| c.as_array())
            .unwrap_or_else(|| {
                panic!(
                    "\n\nCATALOG BUILD ERROR: Hue '{hue_name}' group {j} missing 'colors' array\n"
                )
            });

        if let Some(title) = group.get("title").and_then(|t| t.as_str()) {
            assert!(
                !title.is_empty(),
                "\n\nCATALOG BUILD ERROR: Hue '{hue_name}' group {j} has an empty 'title'\n\
                 Omit the title for an untitled group.\n"
            );
        }

        for (k, color) in colors.iter().enumerate() {
            let name = color
                .get("name")
                .and_then(|v| v.as_str())
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| {
                    panic!(
                        "\n\nCATALOG BUILD ERROR: Hue '{hue_name}' group {j} color {k} needs a non-empty 'name'\n"
                    )
                });
            validate_hex_field(color, hue_name, name);
        }
        total += colors.len();
    }

    total
}

fn validate_hex_field(color: &serde_json::Value, hue_name: &str, value_name: &str) {
    let hex = color.get("hex").and_then(|v| v.as_str()).unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Hue '{hue_name}' value '{value_name}' missing 'hex' field\n"
        )
    });
    validate_hex(hex, hue_name, value_name);
}

fn validate_hex(hex: &str, hue_name: &str, value_name: &str) {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    assert!(
        digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()),
        "\n\nCATALOG BUILD ERROR: Hue '{hue_name}' value '{value_name}' has invalid hex '{hex}'\n\
         Colors must be 6-digit RGB hex strings.\n"
    );
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/material_colors.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
