//! CSV furniture loader.
//!
//! # CSV format
//!
//! One row per room or object.  Empty `cost` / `reserved_by` mean "none".
//!
//! ```csv
//! kind,label,utility,x,y,w,h,multi_user,cost,reserved_by
//! room,Cabin,,0,0,300,200,false,,
//! object,bunk bed,energy,20,20,30,60,false,,
//! object,IMAX hall,cinema_imax,100,20,120,150,true,35,
//! object,old desk,work,200,120,40,30,false,,0
//! ```
//!
//! `utility` is parsed with [`Utility::parse`], so unknown tags load as
//! [`Utility::Other`] rather than failing.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use town_core::AgentId;

use crate::{CatalogBuilder, ObjectCatalog, Rect, Utility, WorldError, WorldResult};

#[derive(Deserialize)]
struct ObjectRecord {
    kind:        String,
    label:       String,
    #[serde(default)]
    utility:     String,
    x:           f32,
    y:           f32,
    w:           f32,
    h:           f32,
    #[serde(default)]
    multi_user:  bool,
    cost:        Option<i64>,
    reserved_by: Option<u32>,
}

/// Load a catalog from a CSV file.
pub fn load_catalog_csv(path: &Path) -> WorldResult<ObjectCatalog> {
    let file = std::fs::File::open(path).map_err(WorldError::Io)?;
    load_catalog_reader(file)
}

/// Like [`load_catalog_csv`] but accepts any `Read` source.
pub fn load_catalog_reader<R: Read>(reader: R) -> WorldResult<ObjectCatalog> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut b = CatalogBuilder::new();

    for result in csv_reader.deserialize::<ObjectRecord>() {
        let row = result.map_err(|e| WorldError::Parse(e.to_string()))?;
        let rect = Rect::new(row.x, row.y, row.w, row.h);
        match row.kind.trim() {
            "room" => {
                b.add_room(&row.label, rect);
            }
            "object" => {
                let utility = Utility::parse(&row.utility);
                let id = match row.cost {
                    Some(cost) => b.add_priced(&row.label, utility, rect, cost, row.multi_user),
                    None if row.multi_user => b.add_shared(&row.label, utility, rect),
                    None => b.add(&row.label, utility, rect),
                };
                if let Some(owner) = row.reserved_by {
                    b.reserve(id, AgentId(owner));
                }
            }
            other => {
                return Err(WorldError::Parse(format!(
                    "invalid kind {other:?}: expected \"room\" or \"object\""
                )));
            }
        }
    }

    b.build()
}
