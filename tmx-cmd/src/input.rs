//! Reading the daily CSV from disk, plain or gzip-compressed.

use anyhow::Context;
use flate2::read::GzDecoder;
use log::info;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tmx_chart::config::MatrixConfig;
use tmx_chart::session::MatrixSession;
use tmx_db::Database;

/// Read `path` to a string, decompressing it when the name ends in `.gz`.
pub fn read_csv(path: &Path) -> anyhow::Result<String> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut text = String::new();
    if path.extension().is_some_and(|ext| ext == "gz") {
        GzDecoder::new(file)
            .read_to_string(&mut text)
            .with_context(|| format!("Failed to decompress {}", path.display()))?;
    } else {
        let mut file = file;
        file.read_to_string(&mut text)
            .with_context(|| format!("Failed to read {}", path.display()))?;
    }
    Ok(text)
}

/// Load `path` into a fresh store.
pub fn open_database(path: &Path) -> anyhow::Result<Database> {
    let csv = read_csv(path)?;
    let db = Database::new()?;
    let report = db.load_observations(&csv)?;
    info!(
        "Loaded {} observations from {} ({} skipped)",
        report.loaded,
        path.display(),
        report.skipped
    );
    Ok(db)
}

/// Load `path` and start a session showing `start..=end`. A missing bound
/// falls back to the matching end of the default range.
pub fn open_session(
    path: &Path,
    start: Option<i32>,
    end: Option<i32>,
    config: MatrixConfig,
) -> anyhow::Result<MatrixSession> {
    let mut session = MatrixSession::new(open_database(path)?, config)
        .with_context(|| format!("No usable data in {}", path.display()))?;
    if start.is_some() || end.is_some() {
        let range = session.range();
        session.set_range(start.unwrap_or(range.start()), end.unwrap_or(range.end()))?;
    }
    Ok(session)
}

/// The config at `path`, or the defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<MatrixConfig> {
    match path {
        Some(path) => MatrixConfig::from_json_file(path),
        None => Ok(MatrixConfig::default()),
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn reads_plain_csv() {
        let path = write_sample("plain.csv");
        assert_eq!(read_csv(&path).unwrap(), sample_csv());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn reads_gzipped_csv() {
        let path = temp_path("zipped.csv.gz");
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(sample_csv().as_bytes()).unwrap();
        encoder.finish().unwrap();

        assert_eq!(read_csv(&path).unwrap(), sample_csv());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_csv(Path::new("/no/such/temperature.csv")).is_err());
    }

    #[test]
    fn session_defaults_and_overrides() {
        let path = write_sample("session.csv");
        let session = open_session(&path, None, None, MatrixConfig::default()).unwrap();
        assert_eq!(session.range().start(), 2020);
        assert_eq!(session.range().end(), 2022);

        let session = open_session(&path, Some(2021), None, MatrixConfig::default()).unwrap();
        assert_eq!(session.range().start(), 2021);
        assert_eq!(session.range().end(), 2022);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn no_config_means_defaults() {
        assert_eq!(load_config(None).unwrap(), MatrixConfig::default());
    }
}
