//! Configuration loading from files on disk.

use std::collections::HashMap;
use std::io::Write;

use resume_api::config::{Config, DbConfig};
use tempfile::NamedTempFile;

const SECRET: &str = "config-test-secret-key-with-32-bytes!!";

fn write_descriptor(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_db_config_from_file() {
    let file = write_descriptor(
        "database:\n  host: localhost\n  port: 5432\n  user: app\n  password: pw\n  name: resumes\n",
    );

    let config = DbConfig::load(file.path()).unwrap();
    assert_eq!(config.host, "localhost");
    assert_eq!(config.port, 5432);
    assert_eq!(config.url(), "postgres://app:pw@localhost:5432/resumes");
}

#[test]
fn test_descriptor_overrides_database_url() {
    let file = write_descriptor(
        "database:\n  host: db\n  port: 5433\n  user: u\n  password: p\n  name: n\n",
    );
    let path = file.path().to_str().unwrap();

    let config = Config::from_lookup(
        lookup(&[("JWT_SECRET", SECRET), ("DATABASE_URL", "postgres://ignored")]),
        Some(path),
    )
    .unwrap();

    assert_eq!(config.database_url, "postgres://u:p@db:5433/n");
}

#[test]
fn test_malformed_descriptor_is_error() {
    let file = write_descriptor("database: [not, a, map]\n");
    assert!(DbConfig::load(file.path()).is_err());

    let path = file.path().to_str().unwrap();
    assert!(Config::from_lookup(lookup(&[("JWT_SECRET", SECRET)]), Some(path)).is_err());
}
