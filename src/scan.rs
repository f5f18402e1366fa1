//! App page discovery: directory listing, filename parsing and title extraction

use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::types::{AppRecord, APP_PREFIX, APP_SUFFIX};

/// `app_<digits>_<slug>.html`
static APP_FILENAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^app_([0-9]+)_(.+)\.html$").unwrap());

/// First `<title>...</title>`, any case, may span lines
static TITLE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title>(.*?)</title>").unwrap());

/// List entries of `dir` whose name looks like an app page.
///
/// Only the prefix and suffix are checked here; anything else (including
/// directories that happen to match) is left to `load_record`.
pub fn scan_app_files(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to list directory {}", dir.display()))?;

    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list directory {}", dir.display()))?;
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if name.starts_with(APP_PREFIX) && name.ends_with(APP_SUFFIX) {
            names.push(name);
        }
    }

    Ok(names)
}

/// Parse the numeric id out of an app filename.
///
/// Returns `Ok(None)` for names that don't follow the naming convention and an
/// error when the digits don't fit in a `u64`.
pub fn parse_app_id(filename: &str) -> Result<Option<u64>> {
    let Some(caps) = APP_FILENAME.captures(filename) else {
        return Ok(None);
    };
    let id = caps[1]
        .parse::<u64>()
        .with_context(|| format!("App id in {} is out of range", filename))?;
    Ok(Some(id))
}

/// Content of the first title tag, verbatim
pub fn extract_title(content: &str) -> Option<&str> {
    TITLE_TAG
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Read the page title, falling back to the filename when the file can't be
/// read or has no title tag
fn read_title(path: &Path, filename: &str) -> String {
    match fs::read_to_string(path) {
        Ok(content) => extract_title(&content)
            .map(str::to_string)
            .unwrap_or_else(|| filename.to_string()),
        Err(e) => {
            eprintln!("Error reading {}: {}", filename, e);
            filename.to_string()
        }
    }
}

/// Build the record for one candidate file, or `None` if the name doesn't match
pub fn load_record(dir: &Path, filename: &str) -> Option<AppRecord> {
    let id = match parse_app_id(filename) {
        Ok(Some(id)) => id,
        Ok(None) => return None,
        Err(e) => {
            eprintln!("Warning: Skipping {}: {:#}", filename, e);
            return None;
        }
    };

    Some(AppRecord {
        id,
        filename: filename.to_string(),
        title: read_title(&dir.join(filename), filename),
    })
}

/// Discover every app page in `dir`, sorted by id
pub fn load_apps(dir: &Path, quiet: bool) -> Result<Vec<AppRecord>> {
    let files = scan_app_files(dir)?;

    if !quiet {
        println!("Found {} app files. Parsing metadata...", files.len());
    }

    let mut apps: Vec<AppRecord> = files
        .iter()
        .filter_map(|name| load_record(dir, name))
        .collect();

    sort_apps(&mut apps);

    Ok(apps)
}

/// Ascending by id. Stable, so apps sharing an id keep their listing order.
pub fn sort_apps(apps: &mut [AppRecord]) {
    apps.sort_by_key(|app| app.id);
}
