// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! SWF-Lite CLI - renders one shape from a decoded shape library to SVG.
//!
//! ```text
//! swf-lite <source_path> <symbol_name> <target_path>
//! ```
//!
//! `source_path` is a JSON shape-library document, `symbol_name` an exported
//! symbol in it, `target_path` the SVG file to write.

use anyhow::Context;

use swf_lite_core::ShapeDocument;
use swf_lite_shape::Shape;

mod svg;

use svg::SvgSink;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [source, symbol, target] = match <[String; 3]>::try_from(args) {
        Ok(args) => args,
        Err(_) => {
            eprintln!("usage: swf-lite <source_path> <symbol_name> <target_path>");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&source, &symbol, &target) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(source: &str, symbol: &str, target: &str) -> anyhow::Result<()> {
    let document = ShapeDocument::from_path(source)
        .with_context(|| format!("loading shape library {source}"))?;

    let definition = document
        .shape_for_symbol(symbol)
        .with_context(|| format!("resolving symbol {symbol}"))?;

    tracing::info!(
        symbol,
        records = definition.records.len(),
        "rendering shape"
    );

    let mut shape = Shape::new(definition.clone());
    let mut sink = SvgSink::new(shape.bounds());
    shape
        .export(&mut sink)
        .with_context(|| format!("exporting symbol {symbol}"))?;

    std::fs::write(target, sink.into_svg())
        .with_context(|| format!("writing {target}"))?;

    tracing::info!(target, "wrote SVG");
    Ok(())
}
