use axum::{extract::Query, response::Response, Extension};
use tb_core::{build_position, classify_position, sort_moves, validate_fen};

use crate::context::AppContext;
use crate::error::ApiError;
use crate::response;

/// Query parameters of a probe request. Repeated keys keep their first value.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ProbeQuery {
    pub fen: Option<String>,
    pub callback: Option<String>,
}

impl ProbeQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut q = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "fen" => &mut q.fen,
                "callback" => &mut q.callback,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        q
    }
}

/// GET /?fen=...&callback=...
/// Classify every legal move of the given position.
pub async fn get_probe(
    Extension(ctx): Extension<AppContext>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let q = ProbeQuery::from_pairs(pairs);

    let fen = q
        .fen
        .filter(|fen| !fen.is_empty())
        .ok_or(ApiError::MissingFen)?
        .replace('_', " ");

    let variant = ctx.settings.variant;
    if !validate_fen(&fen, variant) {
        return Err(ApiError::InvalidFen);
    }

    if ctx.verbose {
        tracing::info!(%fen, "probing");
    }

    let pos = build_position(&fen, variant).map_err(|e| {
        tracing::debug!(%fen, "rejected: {e}");
        ApiError::IllegalFen
    })?;

    let mut info = classify_position(&pos, ctx.prober.as_ref(), &ctx.settings);
    sort_moves(&mut info.moves);

    let callback = q.callback.as_deref().filter(|cb| !cb.is_empty());
    Ok(response::render(&info, ctx.settings.dtm_enabled, callback))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_first_value_wins() {
        let q = ProbeQuery::from_pairs(pairs(&[
            ("fen", "first"),
            ("callback", "cb"),
            ("fen", "second"),
            ("callback", "other"),
        ]));
        assert_eq!(q.fen.as_deref(), Some("first"));
        assert_eq!(q.callback.as_deref(), Some("cb"));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let q = ProbeQuery::from_pairs(pairs(&[("variant", "atomic"), ("fen", "x")]));
        assert_eq!(q.fen.as_deref(), Some("x"));
        assert_eq!(q.callback, None);

        assert_eq!(ProbeQuery::from_pairs(Vec::new()), ProbeQuery::default());
    }
}
