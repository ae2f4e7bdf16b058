//! Live status fragment extractors.
//!
//! The firmware aggregates its sensor readouts into one small HTML fragment;
//! each readout lives in an anchor identified by its link target. The
//! fragment is fetched once and shared across all three extractors.

use crate::consts;
use crate::error::{ErrorKind, Result};
use exn::{OptionExt, ResultExt};
use scraper::Html;

#[derive(Debug)]
pub struct StatusPage {
    document: Html,
}

impl StatusPage {
    pub fn from_html(html: &str) -> Self {
        Self { document: Html::parse_document(html) }
    }

    /// CPU and RSX temperatures, in the order they appear in the widget text.
    ///
    /// This readout fails softly: a missing anchor, or anything other than
    /// exactly two integers in its text, logs a warning and yields `None`
    /// for both values. Callers must treat "no data" as a valid outcome.
    pub fn temperatures(&self) -> Option<(u32, u32)> {
        let Some(anchor) = self.document.select(&consts::TEMPERATURE_ANCHOR_SELECTOR).next() else {
            tracing::warn!("temperature anchor not found in status page");
            return None;
        };
        let text = anchor.text().collect::<String>();
        let values: Vec<u32> =
            consts::INTEGER_REGEX.find_iter(&text).filter_map(|m| m.as_str().parse().ok()).collect();
        match values.as_slice() {
            &[cpu, rsx] => Some((cpu, rsx)),
            _ => {
                tracing::warn!(count = values.len(), "expected exactly two temperature readings");
                None
            }
        }
    }

    /// Fan speed percentage. Unlike [`temperatures`](Self::temperatures),
    /// a missing anchor is a hard error.
    pub fn fan_speed(&self) -> Result<u32> {
        let anchor = self
            .document
            .select(&consts::FAN_ANCHOR_SELECTOR)
            .next()
            .ok_or_raise(|| ErrorKind::MissingElement("fan anchor"))?;
        let text = anchor.text().collect::<String>();
        let value = text
            .split(':')
            .nth(1)
            .ok_or_raise(|| ErrorKind::ParseError { field: "fan_speed", value: text.clone() })?
            .trim()
            .split('%')
            .next()
            .unwrap_or_default()
            .trim();
        value
            .parse::<u32>()
            .or_raise(|| ErrorKind::ParseError { field: "fan_speed", value: value.to_string() })
    }

    /// Free space on the primary storage volume, in gigabytes.
    pub fn hdd_space(&self) -> Result<f64> {
        let anchor = self
            .document
            .select(&consts::HDD_ANCHOR_SELECTOR)
            .next()
            .ok_or_raise(|| ErrorKind::MissingElement("storage anchor"))?;
        let text = anchor.text().collect::<String>();
        let value = text
            .split("HDD:")
            .nth(1)
            .ok_or_raise(|| ErrorKind::ParseError { field: "hdd_space", value: text.clone() })?
            .trim()
            .split("GB")
            .next()
            .unwrap_or_default()
            .trim();
        value
            .parse::<f64>()
            .or_raise(|| ErrorKind::ParseError { field: "hdd_space", value: value.to_string() })
    }
}
