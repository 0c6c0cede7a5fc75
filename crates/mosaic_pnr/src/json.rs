//! JSON interchange for placed-and-routed designs.
//!
//! ```text
//! {
//!   "cells": [
//!     { "name": "lut_0", "type": "FACADE_SLICE",
//!       "bel": { "row": 6, "col": 11, "name": "SLICEA" },
//!       "params": { "LUT0_INITVAL": 43690, "MODE": "LOGIC" } }
//!   ],
//!   "nets": [
//!     { "name": "n1", "pips": [{ "row": 6, "col": 11, "index": 3 }] }
//!   ]
//! }
//! ```
//!
//! Names are interned on load; BELs and PIPs are checked against the device.

use crate::data::PnrDesign;
use crate::property::Property;
use mosaic_arch::{Architecture, LoadError, Location, PipId};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Deserialize)]
struct RawDesign {
    #[serde(default)]
    cells: Vec<RawCell>,
    #[serde(default)]
    nets: Vec<RawNet>,
}

#[derive(Deserialize)]
struct RawCell {
    name: String,
    #[serde(rename = "type")]
    cell_type: String,
    #[serde(default)]
    bel: Option<RawBel>,
    #[serde(default)]
    params: BTreeMap<String, Property>,
    #[serde(default)]
    attrs: BTreeMap<String, Property>,
}

#[derive(Deserialize)]
struct RawBel {
    row: u32,
    col: u32,
    name: String,
}

#[derive(Deserialize)]
struct RawNet {
    name: String,
    #[serde(default)]
    pips: Vec<RawPip>,
}

#[derive(Deserialize)]
struct RawPip {
    row: u32,
    col: u32,
    index: u32,
}

impl PnrDesign {
    /// Reads and parses a JSON design from disk.
    pub fn load(path: &Path, arch: &dyn Architecture) -> Result<Self, LoadError> {
        Self::from_json(&LoadError::read_file(path)?, arch)
    }

    /// Parses a JSON design, resolving BEL names and PIP indices against `arch`.
    pub fn from_json(json: &str, arch: &dyn Architecture) -> Result<Self, LoadError> {
        let raw: RawDesign = serde_json::from_str(json)?;
        let mut design = PnrDesign::new();

        for raw_cell in raw.cells {
            if design.cell_by_name(&raw_cell.name).is_some() {
                return Err(LoadError::Invalid(format!(
                    "duplicate cell name '{}'",
                    raw_cell.name
                )));
            }
            let cell = design.add_cell(&raw_cell.name, &raw_cell.cell_type);
            if let Some(bel) = raw_cell.bel {
                let loc = Location::new(bel.row, bel.col);
                let bel_id = arch.bel_by_name(loc, &bel.name).ok_or_else(|| {
                    LoadError::Invalid(format!(
                        "cell '{}' is placed on unknown bel {}/{}",
                        raw_cell.name, loc, bel.name
                    ))
                })?;
                design.place(cell, bel_id);
            }
            for (key, value) in raw_cell.params {
                design.set_param(cell, &key, value);
            }
            for (key, value) in raw_cell.attrs {
                design.set_attr(cell, &key, value);
            }
        }

        for raw_net in raw.nets {
            let net = design.add_net(&raw_net.name);
            for raw_pip in raw_net.pips {
                let pip = PipId::new(Location::new(raw_pip.row, raw_pip.col), raw_pip.index);
                if !arch.pip_exists(pip) {
                    return Err(LoadError::Invalid(format!(
                        "net '{}' binds unknown pip {pip}",
                        raw_net.name
                    )));
                }
                if let Some(other) = design.bind_pip(net, pip) {
                    return Err(LoadError::Invalid(format!(
                        "pip {pip} is bound to both '{}' and '{}'",
                        design.name(design.net(other).name),
                        raw_net.name
                    )));
                }
            }
        }

        Ok(design)
    }
}
