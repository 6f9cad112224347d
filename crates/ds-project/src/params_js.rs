//! `params.js` export for browser front-ends.

use std::path::Path;

use ds_sim::Parameters;
use serde::Serialize;

use crate::ProjectResult;

/// Key order matches what existing pages read.
#[derive(Serialize)]
struct DampParams {
    m: f64,
    c: f64,
    k: f64,
    y0: f64,
    v0: f64,
    dt: f64,
    scale: f64,
    duration: f64,
}

/// Render `window.DAMP_PARAMS = {...};`.
pub fn render_params_js(p: &Parameters) -> ProjectResult<String> {
    let payload = DampParams {
        m: p.m,
        c: p.c,
        k: p.k,
        y0: p.y0,
        v0: p.v0,
        dt: p.dt,
        scale: p.scale,
        duration: p.duration,
    };
    Ok(format!(
        "window.DAMP_PARAMS = {};",
        serde_json::to_string(&payload)?
    ))
}

pub fn write_params_js(path: &Path, p: &Parameters) -> ProjectResult<()> {
    std::fs::write(path, render_params_js(p)?)?;
    Ok(())
}
