use crate::db::models::Collection;
use crate::db::sqlite::SqliteStore;
use crate::error::GymFlowError;
use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

/// Documents read from one `<collection>.json` seed file.
#[derive(Debug)]
pub struct SeedFile {
    pub path: PathBuf,
    pub collection: Collection,
    pub documents: Vec<Value>,
}

/// Load `<collection>.json` files (each a JSON array of objects) from a directory.
pub fn load_from_dir(dir: &Path) -> Result<Vec<SeedFile>, GymFlowError> {
    if !dir.exists() {
        info!(path = %dir.display(), "catalog directory not found; skipping load");
        return Ok(Vec::new());
    }

    let loaded: Vec<SeedFile> = fs::read_dir(dir)?
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                let err: GymFlowError = e.into();
                warn!(error = %err, "failed to read catalog dir entry");
                None
            }
        })
        .filter(|path| is_json_file(path))
        .filter_map(|path| {
            let Some(collection) = collection_for(&path) else {
                warn!(path = %path.display(), "no collection matches file name; skipping");
                return None;
            };
            load_documents(&path)
                .inspect_err(|e| {
                    warn!(path = %path.display(), error = %e, "failed to load catalog file");
                })
                .ok()
                .map(|documents| SeedFile {
                    path,
                    collection,
                    documents,
                })
        })
        .collect();

    Ok(loaded)
}

/// Load every seed file in `dir` into `store`. Returns the number of documents written.
pub async fn import_dir(store: &SqliteStore, dir: &Path) -> Result<u64, GymFlowError> {
    let mut total = 0;
    for seed in load_from_dir(dir)? {
        let written = store
            .insert_documents(seed.collection, &seed.documents)
            .await?;
        info!(
            path = %seed.path.display(),
            collection = seed.collection.as_str(),
            count = written,
            "imported catalog documents"
        );
        total += written;
    }
    Ok(total)
}

fn is_json_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        == Some(true)
}

fn collection_for(path: &Path) -> Option<Collection> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .and_then(Collection::from_name)
}

fn load_documents(path: &Path) -> Result<Vec<Value>, GymFlowError> {
    let contents = fs::read_to_string(path)?;
    let items: Vec<Value> = serde_json::from_str(&contents)?;
    let total = items.len();
    let objects: Vec<Value> = items.into_iter().filter(Value::is_object).collect();
    if objects.len() < total {
        warn!(
            path = %path.display(),
            skipped = total - objects.len(),
            "skipping non-object catalog entries"
        );
    }
    Ok(objects)
}
