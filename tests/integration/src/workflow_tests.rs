//! End-to-end workflow tests for the splicing engine
//!
//! These exercise the complete flow a manual refactor goes through:
//! extract a component from a big file, move the remainder in slices,
//! patch the import header, and carve marker-delimited blocks out of
//! legacy UTF-16 sources.

use splice_core::{CarveManifest, Encoding, LineRange, carve, io, ops};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use pretty_assertions::assert_eq;

/// A small App.tsx-shaped fixture: an import header, two components, and
/// a footer.
const APP: &str = "\
import React from 'react';
import { Reports } from './Reports';

const ReportsPanel = () => {
  return <Reports />;
};

const SettingsPanel = () => {
  return null;
};

export default SettingsPanel;
";

fn write_app(temp: &TempDir) -> PathBuf {
    let path = temp.path().join("App.tsx");
    fs::write(&path, APP).unwrap();
    path
}

fn write_utf16le(path: &Path, text: &str) {
    let mut bytes = vec![0xFF, 0xFE];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    fs::write(path, bytes).unwrap();
}

#[test]
fn test_component_move_workflow() {
    let temp = TempDir::new().unwrap();
    let app = write_app(&temp);
    let component = temp.path().join("ReportsPanel.tsx");
    let imports = temp.path().join("new_imports.txt");
    fs::write(&imports, "import React from 'react';\n").unwrap();

    // Lines 4-7 hold the ReportsPanel component (with its blank line).
    ops::extract_range(&app, LineRange::new(4, 7), &component, Encoding::Utf8, false).unwrap();
    ops::remove_range(&app, LineRange::new(4, 7), Encoding::Utf8, false).unwrap();

    // The Reports import is now dead; swap the two-line header for one.
    ops::replace_header(&app, &imports, 2, Encoding::Utf8, false).unwrap();

    assert_eq!(
        fs::read_to_string(&component).unwrap(),
        "const ReportsPanel = () => {\n  return <Reports />;\n};\n\n"
    );
    assert_eq!(
        fs::read_to_string(&app).unwrap(),
        "import React from 'react';\n\nconst SettingsPanel = () => {\n  return null;\n};\n\nexport default SettingsPanel;\n"
    );
}

#[test]
fn test_move_in_slices_matches_single_extract() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("big.txt");
    let content: String = (1..=30).map(|i| format!("row {i}\n")).collect();
    fs::write(&source, &content).unwrap();

    // One pass: extract everything at once.
    let whole = temp.path().join("whole.txt");
    ops::extract_range(&source, LineRange::new(1, 30), &whole, Encoding::Utf8, false).unwrap();

    // Sliced pass: extract the first chunk, then append the rest.
    let sliced = temp.path().join("sliced.txt");
    ops::extract_range(&source, LineRange::new(1, 10), &sliced, Encoding::Utf8, false).unwrap();
    ops::append_range(&source, LineRange::new(11, 20), &sliced, Encoding::Utf8, false).unwrap();
    ops::append_range(&source, LineRange::new(21, 30), &sliced, Encoding::Utf8, false).unwrap();

    assert_eq!(
        fs::read_to_string(&whole).unwrap(),
        fs::read_to_string(&sliced).unwrap()
    );
}

#[test]
fn test_failed_step_leaves_every_file_intact() {
    let temp = TempDir::new().unwrap();
    let app = write_app(&temp);
    let dest = temp.path().join("out.tsx");

    // The file has 12 lines; each of these asks for more.
    assert!(
        ops::extract_range(&app, LineRange::new(5, 40), &dest, Encoding::Utf8, false).is_err()
    );
    assert!(ops::remove_range(&app, LineRange::new(5, 40), Encoding::Utf8, false).is_err());

    assert_eq!(fs::read_to_string(&app).unwrap(), APP);
    assert!(!dest.exists());
}

#[test]
fn test_carve_legacy_utf16_component() {
    let temp = TempDir::new().unwrap();
    let legacy = temp.path().join("App.tsx");
    write_utf16le(&legacy, APP);

    fs::write(
        temp.path().join("carve.toml"),
        r#"
[[job]]
source = "App.tsx"
encodings = ["utf-16", "utf-8"]
start-marker = "const ReportsPanel"
end-marker = "const SettingsPanel"
dest = "components/ReportsPanel.tsx"
prelude = "import { Reports } from '../Reports';\n\n"
prefix = "export "
"#,
    )
    .unwrap();

    let manifest = CarveManifest::load(&temp.path().join("carve.toml")).unwrap();
    let report = carve::carve_all(&manifest, temp.path(), false);

    assert!(report.success(), "failures: {:?}", report.failures);
    assert_eq!(report.outcomes[0].encoding, Encoding::Utf16);

    let written = fs::read_to_string(temp.path().join("components/ReportsPanel.tsx")).unwrap();
    assert_eq!(
        written,
        "import { Reports } from '../Reports';\n\nexport const ReportsPanel = () => {\n  return <Reports />;\n};\n\n"
    );
}

#[test]
fn test_probe_then_extract_legacy_file() {
    let temp = TempDir::new().unwrap();
    let legacy = temp.path().join("legacy.tsx");
    write_utf16le(&legacy, "alpha\nbeta\ngamma\n");

    // Probe the encoding first, then drive extract with the answer.
    let (_, encoding) =
        io::read_text_with_fallback(&legacy, &[Encoding::Utf16, Encoding::Utf8]).unwrap();
    assert_eq!(encoding, Encoding::Utf16);

    let dest = temp.path().join("out.txt");
    ops::extract_range(&legacy, LineRange::new(2, 3), &dest, encoding, false).unwrap();

    assert_eq!(fs::read(&dest).unwrap(), b"beta\ngamma\n");
}

#[test]
fn test_mixed_terminators_survive_the_workflow() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("mixed.txt");
    fs::write(&source, "a\r\nb\nc\r\nd\ne").unwrap();
    let dest = temp.path().join("out.txt");

    ops::extract_range(&source, LineRange::new(2, 4), &dest, Encoding::Utf8, false).unwrap();
    ops::remove_range(&source, LineRange::new(2, 4), Encoding::Utf8, false).unwrap();

    assert_eq!(fs::read_to_string(&dest).unwrap(), "b\nc\r\nd\n");
    assert_eq!(fs::read_to_string(&source).unwrap(), "a\r\ne");
}
