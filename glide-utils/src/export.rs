// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use glide_core::series::SampleRecord;

/// Write a series to a CSV file, one row per record.
pub fn write_csv(path: &std::path::Path, series: &[SampleRecord]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    for record in series {
        writer.serialize(record)?;
    }

    writer.flush()?;

    Ok(())
}
