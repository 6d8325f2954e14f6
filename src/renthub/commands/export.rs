use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RentHubError, Result};
use crate::store::DataStore;
use chrono::Utc;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Archives the whole store (listings + leases) as a gzipped tarball.
pub fn run<S: DataStore>(store: &S, out: Option<PathBuf>) -> Result<CmdResult> {
    let properties = store.list_properties()?;
    let leases = store.list_leases()?;

    if properties.is_empty() && leases.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("Nothing to export."));
        return Ok(res);
    }

    let path = out.unwrap_or_else(|| {
        PathBuf::from(format!(
            "renthub-{}.tar.gz",
            Utc::now().format("%Y-%m-%d_%H-%M-%S")
        ))
    });
    let file = File::create(&path).map_err(RentHubError::Io)?;
    write_archive(file, &properties, &leases)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} listing(s) and {} lease(s) to {}",
        properties.len(),
        leases.len(),
        path.display()
    )));
    Ok(result.with_files(vec![path]))
}

fn write_archive<W: Write>(
    writer: W,
    properties: &[crate::model::Property],
    leases: &[crate::model::LeaseAgreement],
) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    append_json(&mut tar, "renthub/listings.json", properties)?;
    append_json(&mut tar, "renthub/leases.json", leases)?;

    tar.finish().map_err(RentHubError::Io)?;
    Ok(())
}

fn append_json<W: Write, T: serde::Serialize>(
    tar: &mut tar::Builder<W>,
    entry_name: &str,
    records: &[T],
) -> Result<()> {
    let content = serde_json::to_string_pretty(records).map_err(RentHubError::Serialization)?;

    let mut header = tar::Header::new_gnu();
    header.set_size(content.len() as u64);
    header.set_mode(0o644);
    header.set_cksum();

    tar.append_data(&mut header, entry_name, content.as_bytes())
        .map_err(RentHubError::Io)?;
    Ok(())
}
