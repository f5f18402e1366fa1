use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use crate::render::render_navigation;
use crate::scan::load_apps;
use crate::types::{AppRecord, INDEX_FILE, OUTPUT_FILES};
use crate::utils::display_file;

fn success_message(name: &str, total: usize, path: &Path) -> String {
    let link = display_file(path, name);
    if name == INDEX_FILE {
        format!("✅ Successfully generated {} with {} apps!", link, total)
    } else {
        format!("✅ Successfully generated {} (Compatibility Mode)!", link)
    }
}

/// Write the rendered page to every output file.
///
/// Every file is attempted even if an earlier one failed; the error lists all
/// files that couldn't be written.
pub fn write_outputs(dir: &Path, html: &str, total: usize, quiet: bool) -> Result<()> {
    let mut failed = Vec::new();

    for name in OUTPUT_FILES {
        let path = dir.join(name);
        match fs::write(&path, html) {
            Ok(()) => {
                if !quiet {
                    println!("{}", success_message(name, total, &path));
                }
            }
            Err(e) => {
                eprintln!("❌ Error writing {}: {}", name, e);
                failed.push(name);
            }
        }
    }

    if !failed.is_empty() {
        bail!("Failed to write {}", failed.join(", "));
    }

    Ok(())
}

/// Scan `dir` and regenerate its navigation pages
pub fn run_generate(dir: &Path, quiet: bool) -> Result<()> {
    let apps = load_apps(dir, quiet)?;

    if apps.is_empty() && !quiet {
        println!("No app files found in {}, writing an empty index", dir.display());
    }

    let html = render_navigation(&apps);
    write_outputs(dir, &html, apps.len(), quiet)
}

fn list_line(app: &AppRecord) -> String {
    format!("{}  {}  ({})", app.display_id(), app.title, app.filename)
}

/// App listing as plain lines or a pretty JSON array
fn format_list(apps: &[AppRecord], json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(apps).context("Failed to serialize app list");
    }
    Ok(apps.iter().map(list_line).collect::<Vec<_>>().join("\n"))
}

/// Print the discovered apps instead of rendering them
pub fn run_list(dir: &Path, json: bool, quiet: bool) -> Result<()> {
    // Progress goes to stdout too, so keep it out of machine-readable output
    let apps = load_apps(dir, quiet || json)?;

    let out = format_list(&apps, json)?;
    if !out.is_empty() {
        println!("{}", out);
    }

    Ok(())
}
