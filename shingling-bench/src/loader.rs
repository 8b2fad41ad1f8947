use anyhow::{Context, Result};
use shingling::text::StopwordSet;
use shingling::ShinglingConfig;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Reads one raw document per line, skipping blank lines.
pub fn load_documents_from_lines<R: Read>(reader: BufReader<R>) -> Result<Vec<String>> {
    let mut documents = Vec::new();
    for line in reader.lines() {
        let line = line.context("failed to read document line")?;
        if !line.trim().is_empty() {
            documents.push(line);
        }
    }
    Ok(documents)
}

pub fn load_documents(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open documents file {}", path.display()))?;
    load_documents_from_lines(BufReader::new(file))
        .with_context(|| format!("failed to read documents from {}", path.display()))
}

pub fn load_stopwords(path: &Path) -> Result<StopwordSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read stopwords file {}", path.display()))?;
    Ok(StopwordSet::from_lines(&content))
}

pub fn load_config(path: &Path) -> Result<ShinglingConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid config in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::{load_config, load_documents_from_lines};
    use shingling::minhash::HasherKind;
    use std::io::{BufReader, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_documents_from_lines() {
        let input = "first document\n\n  \nsecond, document\n";
        let documents = load_documents_from_lines(BufReader::new(input.as_bytes())).unwrap();
        assert_eq!(documents, vec!["first document", "second, document"]);
    }

    #[test]
    fn test_load_partial_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"shingle_size": 2, "hasher": "fnv"}}"#).unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.shingle_size, 2);
        assert_eq!(config.hasher, HasherKind::Fnv);
        assert_eq!(config.num_hashes, 500);
        assert_eq!(config.seed, 1);
        assert!(!config.parallel);
    }

    #[test]
    fn test_load_malformed_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"shingle_size": "two"}}"#).unwrap();
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("invalid config in"));
    }
}
