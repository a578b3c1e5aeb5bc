use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
struct TitleData {
    titles: Vec<String>,
    first_name_titles: Vec<String>,
}

#[derive(Deserialize)]
struct NameData {
    prefixes: Vec<String>,
    conjunctions: Vec<String>,
    suffixes: Vec<String>,
}

#[derive(Deserialize)]
struct CapitalizationData {
    capitalization_exceptions: HashMap<String, String>,
}

type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn main() -> Result<()> {
    let input = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let output = PathBuf::from(env::var("OUT_DIR")?);

    let json = read_file(&input, "build/title_data.json")?;
    let titles: TitleData = serde_json::from_str(&json)?;
    write_set(&output.join("titles.rs"), &titles.titles)?;
    write_set(
        &output.join("first_name_titles.rs"),
        &titles.first_name_titles,
    )?;

    let json = read_file(&input, "build/name_data.json")?;
    let names: NameData = serde_json::from_str(&json)?;
    write_set(&output.join("prefixes.rs"), &names.prefixes)?;
    write_set(&output.join("conjunctions.rs"), &names.conjunctions)?;
    write_set(&output.join("suffixes.rs"), &names.suffixes)?;

    let json = read_file(&input, "build/capitalization_data.json")?;
    let caps: CapitalizationData = serde_json::from_str(&json)?;
    write_map(
        &output.join("capitalization_exceptions.rs"),
        &caps.capitalization_exceptions,
        |v| format!("{:?}", v),
    )?;

    Ok(())
}

// Lookups happen on lowercase keys with periods removed, so the data is
// stored the same way regardless of how it was typed in the JSON
fn lookup_key(word: &str) -> String {
    word.chars()
        .filter(|&c| c != '.')
        .flat_map(char::to_lowercase)
        .collect()
}

fn write_map<F>(output: &Path, map: &HashMap<String, String>, transform: F) -> Result<()>
where
    F: Fn(&String) -> String,
{
    let mut seen = Vec::with_capacity(map.len());
    let mut builder = phf_codegen::Map::new();
    for (k, v) in map {
        let key = lookup_key(k);
        if !seen.contains(&key) {
            builder.entry(key.clone(), &transform(v));
            seen.push(key);
        }
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn write_set(output: &Path, set: &[String]) -> Result<()> {
    let mut keys = set.iter().map(|v| lookup_key(v)).collect::<Vec<_>>();
    keys.sort();
    keys.dedup();

    let mut builder = phf_codegen::Set::new();
    for key in keys {
        builder.entry(key);
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn read_file(input_dir: &Path, file_path: &str) -> Result<String> {
    println!("cargo:rerun-if-changed={}", file_path);
    let s = fs::read_to_string(input_dir.join(file_path))?;
    Ok(s)
}
