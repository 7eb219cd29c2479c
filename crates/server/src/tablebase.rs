//! Syzygy tablebase access.
//!
//! Tables are registered once at startup and shared read-only between
//! requests. Table files are only opened when first probed.

use std::path::{Path, PathBuf};

use shakmaty::variant::{Atomic, VariantPosition};
use shakmaty::Chess;
use shakmaty_syzygy::{Dtz, MaybeRounded, SyzygyError, Tablebase};
use tb_core::{Probe, Prober, TablebaseVariant};

use crate::error::TablebaseError;

enum Tables {
    Chess(Tablebase<Chess>),
    Atomic(Tablebase<Atomic>),
}

/// DTZ prober backed by Syzygy tables of a single variant.
pub struct SyzygyProber {
    tables: Tables,
    max_cardinality: usize,
}

impl SyzygyProber {
    /// Register all tables found in `paths`.
    pub fn open(variant: TablebaseVariant, paths: &[PathBuf]) -> Result<Self, TablebaseError> {
        let mut tables = match variant {
            TablebaseVariant::Chess => Tables::Chess(Tablebase::new()),
            TablebaseVariant::Atomic => Tables::Atomic(Tablebase::new()),
        };

        let mut max_cardinality = 0;
        for path in paths {
            let result = match &mut tables {
                Tables::Chess(tb) => tb.add_directory(path).map(|_| ()),
                Tables::Atomic(tb) => tb.add_directory(path).map(|_| ()),
            };
            result.map_err(|source| TablebaseError::Directory {
                path: path.display().to_string(),
                source,
            })?;

            max_cardinality = max_cardinality.max(scan_cardinality(path, variant)?);
        }

        Ok(Self {
            tables,
            max_cardinality,
        })
    }

    /// Largest piece count among the registered WDL tables.
    pub fn max_cardinality(&self) -> usize {
        self.max_cardinality
    }
}

impl Prober for SyzygyProber {
    fn probe_dtz(&self, pos: &VariantPosition) -> Probe {
        let result = match (&self.tables, pos) {
            (Tables::Chess(tb), VariantPosition::Chess(pos)) => tb.probe_dtz(pos),
            (Tables::Atomic(tb), VariantPosition::Atomic(pos)) => tb.probe_dtz(pos),
            _ => return Probe::Unavailable,
        };

        match result {
            Ok(MaybeRounded::Precise(dtz)) | Ok(MaybeRounded::Rounded(dtz)) => Probe::Hit(plies(dtz)),
            Err(SyzygyError::Castling) | Err(SyzygyError::TooManyPieces) => Probe::Unavailable,
            Err(err) => Probe::Failed(err.to_string()),
        }
    }
}

fn plies(dtz: Dtz) -> i32 {
    i32::from(dtz)
}

/// Largest piece count among the WDL table files in `dir`, judged by their
/// file names (e.g. `KRPvKR.rtbw` covers 5 pieces).
pub fn scan_cardinality(dir: &Path, variant: TablebaseVariant) -> Result<usize, TablebaseError> {
    let pattern = format!(
        "{}/*.{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        variant.wdl_extension()
    );

    let max = glob::glob(&pattern)?
        .filter_map(Result::ok)
        .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).and_then(table_pieces))
        .max()
        .unwrap_or(0);

    Ok(max)
}

fn table_pieces(stem: &str) -> Option<usize> {
    let (white, black) = stem.split_once('v')?;
    let is_material = |side: &str| !side.is_empty() && side.chars().all(|c| "KQRBNP".contains(c));
    if !is_material(white) || !is_material(black) {
        return None;
    }
    Some(white.len() + black.len())
}
