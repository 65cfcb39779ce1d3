//! Lenient decoding of saved dashboards
//!
//! Accepts the current record layout and the one written before
//! versioning (`type`, `zIndex`, `data`, flat `width`/`height`).

use std::collections::HashSet;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;
use crate::background::BackgroundSettings;
use crate::error::BoardError;
use crate::math::{Size, Vec2};
use crate::widget::{first_free_seq, Payload, WidgetId, WidgetInstance, WidgetKind};
use super::DashboardState;

#[derive(Deserialize)]
struct RawState {
    #[serde(default)]
    version: Option<u32>,
    #[serde(default)]
    widgets: Vec<RawWidget>,
    #[serde(default)]
    background: Option<Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawWidget {
    #[serde(default)]
    id: Option<WidgetId>,
    #[serde(default, alias = "type")]
    kind: Option<WidgetKind>,
    #[serde(default)]
    position: Option<Vec2>,
    #[serde(default)]
    size: Option<RawSize>,
    #[serde(default)]
    width: Option<f32>,
    #[serde(default)]
    height: Option<f32>,
    #[serde(default, alias = "zIndex")]
    z_order: Option<i64>,
    #[serde(default, alias = "data")]
    payload: Option<Value>,
}

#[derive(Deserialize)]
struct RawSize {
    #[serde(default)]
    width: Option<f32>,
    #[serde(default)]
    height: Option<f32>,
}

/// Decode a saved record into a normalised dashboard
pub(super) fn decode_state(json: &str, base_z: i64, min_size: Size) -> Result<DashboardState, BoardError> {
    let raw: RawState = serde_json::from_str(json).map_err(|e| BoardError::LoadFailed(e.to_string()))?;

    let mut used_seqs: HashSet<u64> = raw
        .widgets
        .iter()
        .filter_map(|w| w.id.as_ref().and_then(WidgetId::seq))
        .collect();
    let mut next_seq = match used_seqs.iter().max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    };
    // saturates; the engine renumbers a saturated stack on restore
    let mut next_z = raw
        .widgets
        .iter()
        .filter_map(|w| w.z_order)
        .max()
        .unwrap_or(base_z)
        .max(base_z)
        .saturating_add(1);

    let mut widgets = Vec::with_capacity(raw.widgets.len());
    for (index, raw_widget) in raw.widgets.into_iter().enumerate() {
        let kind = raw_widget
            .kind
            .ok_or_else(|| BoardError::LoadFailed(format!("widget {} has no kind", index)))?;
        let position = raw_widget
            .position
            .filter(|p| p.is_finite())
            .ok_or_else(|| BoardError::LoadFailed(format!("widget {} has no position", index)))?;

        let defaults = kind.default_size();
        let (nested_w, nested_h) = raw_widget
            .size
            .map(|s| (s.width, s.height))
            .unwrap_or((None, None));
        let width = usable_dimension(raw_widget.width.or(nested_w));
        let height = usable_dimension(raw_widget.height.or(nested_h));
        if width.is_none() || height.is_none() {
            warn!(index, kind = kind.id(), "backfilling missing widget size");
        }
        let size = Size::new(width.unwrap_or(defaults.width), height.unwrap_or(defaults.height)).at_least(min_size);

        let id = match raw_widget.id {
            Some(id) => id,
            None => {
                let seq = match next_seq {
                    Some(seq) => {
                        next_seq = seq.checked_add(1);
                        seq
                    }
                    None => first_free_seq(&used_seqs),
                };
                used_seqs.insert(seq);
                let id = WidgetId::from_seq(seq);
                warn!(index, id = %id, "assigning identifier to saved widget");
                id
            }
        };

        let z_order = match raw_widget.z_order {
            Some(z) => z,
            None => {
                let z = next_z;
                next_z = next_z.saturating_add(1);
                z
            }
        };

        let payload = raw_widget
            .payload
            .and_then(Payload::from_value)
            .unwrap_or_default();

        widgets.push(WidgetInstance {
            id,
            kind,
            position,
            size,
            z_order,
            payload,
        });
    }

    let background = match raw.background {
        None | Some(Value::Null) => BackgroundSettings::default(),
        Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
            warn!(error = %e, "unreadable background, using default");
            BackgroundSettings::default()
        }),
    };

    Ok(DashboardState {
        version: raw.version.unwrap_or(0),
        widgets,
        background,
    })
}

/// A usable saved dimension, or `None` when it must be backfilled
fn usable_dimension(value: Option<f32>) -> Option<f32> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}
