//! Build script to generate embedded category word lists
//!
//! Reads every `data/categories/<name>.txt` file and generates Rust source with one
//! const array per category plus a `(name, words)` table.

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const CATEGORY_DIR: &str = "data/categories";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("categories.rs");

    let mut files: Vec<PathBuf> = fs::read_dir(CATEGORY_DIR)
        .unwrap_or_else(|e| panic!("Failed to read {CATEGORY_DIR}: {e}"))
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    files.sort();

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated category word lists").unwrap();
    writeln!(output).unwrap();

    let mut table = Vec::new();
    for path in &files {
        let stem = path.file_stem().unwrap().to_string_lossy().to_lowercase();
        let const_name = stem.to_uppercase();
        let display_name = capitalize(&stem);

        let content = fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
        let words: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .collect();

        writeln!(output, "/// Built-in {display_name} words ({} words)", words.len()).unwrap();
        writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();
        for word in &words {
            writeln!(output, "    \"{word}\",").unwrap();
        }
        writeln!(output, "];").unwrap();
        writeln!(output).unwrap();

        table.push((display_name, const_name));
        println!("cargo:rerun-if-changed={}", path.display());
    }

    writeln!(output, "/// Built-in categories as `(name, words)` pairs").unwrap();
    writeln!(output, "pub const DEFAULT_CATEGORIES: &[(&str, &[&str])] = &[").unwrap();
    for (display_name, const_name) in &table {
        writeln!(output, "    (\"{display_name}\", {const_name}),").unwrap();
    }
    writeln!(output, "];").unwrap();

    println!("cargo:rerun-if-changed={CATEGORY_DIR}");
}

fn capitalize(stem: &str) -> String {
    let mut chars = stem.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
