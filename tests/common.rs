//! Shared test utilities for integration tests.
//!
//! Provides helpers for laying out wiki source trees and generated pages in
//! temporary directories.

#![allow(dead_code)]

use anyhow::Result;
use std::path::Path;

/// Manifest with two navigation sections and three pages.
///
/// `missing.md` is listed but never written by [`write_wiki_sources`].
pub const MANIFEST: &str = r#"
name = "HolonicEngine"
tagline = "Agents with Agency"
home = "/wiki/"
back_link = { href = "/", text = "Back to Holonic.org" }

[[nav]]
title = "Core Concepts"
links = [
    { href = "/wiki/architecture.html", text = "Architecture", page = "architecture.html" },
    { href = "/wiki/memory-lattice.html", text = "Memory Lattice", page = "memory-lattice.html" },
]

[[nav]]
title = "Systems"
links = [
    { href = "/wiki/heartbeat.html", text = "Heartbeat System", page = "heartbeat.html" },
]

[[pages]]
source = "architecture.md"
output = "architecture.html"
title = "Architecture"

[[pages]]
source = "memory-lattice.md"
output = "memory-lattice.html"
title = "Memory Lattice"

[[pages]]
source = "missing.md"
output = "heartbeat.html"
title = "Heartbeat System"
"#;

pub const ARCHITECTURE_MD: &str = "\
# Architecture

A holon has **three** parts.

## Parts

- Purpose
- Self
- Actions

```text
<holon>
```
";

pub const MEMORY_LATTICE_MD: &str = "\
# Memory Lattice

| Layer | Holds |
|-------|-------|
| Core  | Identity |

> Memory is structure.
";

/// Writes file under `root`, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// Writes the manifest and the two existing markdown sources.
///
/// # Errors
///
/// Returns error if any file write fails
pub fn write_wiki_sources(root: &Path) -> Result<()> {
    write_file(root, "wiki.toml", MANIFEST)?;
    write_file(root, "architecture.md", ARCHITECTURE_MD)?;
    write_file(root, "memory-lattice.md", MEMORY_LATTICE_MD)?;
    Ok(())
}
