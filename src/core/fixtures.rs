//! `JQ_RECORD` support: saves live response bodies under `tests/fixtures` (or `JQ_FIXDIR`)
//! so offline tests can replay them. Compiled only with the `test-mode` feature.

use std::env;
use std::fs;
use std::path::PathBuf;

use crate::core::{ParamValue, Params};

fn fixture_dir() -> PathBuf {
    match env::var_os("JQ_FIXDIR") {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"),
    }
}

/// `{method}_{code}.csv`, with `all` standing in for a missing or empty `code`.
///
/// Characters outside `[A-Za-z0-9._-]` become `_`, so a multi-code request
/// (`000001.XSHE,600000.XSHG`) still maps to one flat file name.
pub(crate) fn fixture_name(method: &str, params: &Params) -> String {
    let key = match params.get("code") {
        Some(ParamValue::Str(code)) if !code.is_empty() => code
            .chars()
            .map(|c| match c {
                'A'..='Z' | 'a'..='z' | '0'..='9' | '.' | '_' | '-' => c,
                _ => '_',
            })
            .collect(),
        _ => "all".to_string(),
    };
    format!("{method}_{key}.csv")
}

pub(crate) fn record_fixture(
    method: &str,
    params: &Params,
    body: &str,
) -> Result<PathBuf, std::io::Error> {
    let dir = fixture_dir();
    fs::create_dir_all(&dir)?;
    let path = dir.join(fixture_name(method, params));
    fs::write(&path, body)?;
    Ok(path)
}
