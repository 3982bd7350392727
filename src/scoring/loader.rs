use super::{PairNames, Rankings};
use crate::error::{TgResult, TienGowError};
use crate::tiles::Tile;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

/// Loads a rankings table. `.csv` files are read as `tile,tile,score` rows;
/// anything else as the nested JSON object `{ "天": { "天": 68 } }`.
pub fn load_rankings<P: AsRef<Path>>(path: P) -> TgResult<Rankings> {
    let path = path.as_ref();
    info!("📂 Loading rankings: {}", path.display());

    let file = File::open(path)?;
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    let rankings = if is_csv {
        parse_rankings_csv(file)?
    } else {
        parse_rankings(BufReader::new(file))?
    };

    if rankings.is_empty() {
        return Err(TienGowError::Validation(format!(
            "'{}' holds no usable pair scores",
            path.display()
        )));
    }
    Ok(rankings)
}

pub fn parse_rankings<R: Read>(reader: R) -> TgResult<Rankings> {
    let raw: BTreeMap<String, BTreeMap<String, Value>> = serde_json::from_reader(reader)?;
    let mut rankings = Rankings::new();
    let mut skipped = 0;

    for (k1, row) in raw {
        let Some(t1) = parse_tile_key(&k1) else {
            skipped += row.len();
            continue;
        };
        for (k2, value) in row {
            let Some(t2) = parse_tile_key(&k2) else {
                skipped += 1;
                continue;
            };
            match parse_score(&value) {
                Some(score) => {
                    rankings.entry(t1).or_default().insert(t2, score);
                }
                None => {
                    warn!("Skipping non-numeric score for {}-{}: {}", k1, k2, value);
                    skipped += 1;
                }
            }
        }
    }

    debug!(
        "Rankings parsed: {} rows, {} entries skipped",
        rankings.len(),
        skipped
    );
    Ok(rankings)
}

pub fn parse_rankings_csv<R: Read>(reader: R) -> TgResult<Rankings> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let mut rankings = Rankings::new();

    for record in rdr.records().flatten() {
        if record.len() < 3 {
            continue;
        }
        let (Some(t1), Some(t2)) = (parse_tile_key(&record[0]), parse_tile_key(&record[1])) else {
            continue;
        };
        if let Some(score) = parse_score_str(&record[2]) {
            rankings.entry(t1).or_default().insert(t2, score);
        }
    }

    Ok(rankings)
}

pub fn load_pair_names<P: AsRef<Path>>(path: P) -> TgResult<PairNames> {
    let path = path.as_ref();
    info!("🏷️  Loading pair names: {}", path.display());
    parse_pair_names(BufReader::new(File::open(path)?))
}

pub fn parse_pair_names<R: Read>(reader: R) -> TgResult<PairNames> {
    let raw: BTreeMap<String, String> = serde_json::from_reader(reader)?;
    let mut names = BTreeMap::new();

    for (key, name) in raw {
        match parse_score_str(&key) {
            Some(score) => {
                names.insert(score, name);
            }
            None => warn!("Skipping pair name with non-numeric key '{}'", key),
        }
    }

    Ok(PairNames::new(names))
}

fn parse_tile_key(s: &str) -> Option<Tile> {
    let trimmed = s.trim();
    match trimmed.parse() {
        Ok(tile) => Some(tile),
        Err(_) => {
            warn!("Skipping unknown tile '{}'", trimmed);
            None
        }
    }
}

fn parse_score(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.trunc() as u64))
            .and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => parse_score_str(s),
        _ => None,
    }
}

/// Leading-integer parse: `"68"` and `"68.5"` both give 68.
fn parse_score_str(s: &str) -> Option<u32> {
    let trimmed = s.trim();
    let digits: &str = match trimmed.find(|c: char| !c.is_ascii_digit()) {
        Some(end) => &trimmed[..end],
        None => trimmed,
    };
    digits.parse().ok()
}
