use jeonse_core::{assess, format_ratio, Assessment, PriceInput, SearchEndpoint};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
pub(crate) struct OnceReport {
    pub(crate) assessment: Assessment,
    pub(crate) search_url: Option<String>,
}

pub(crate) fn build_report(
    input: PriceInput,
    address: Option<&str>,
    endpoint: &SearchEndpoint,
) -> OnceReport {
    OnceReport {
        assessment: assess(input),
        search_url: address.and_then(|address| endpoint.url_for(address)),
    }
}

/// Writes one pretty-printed report. An undefined ratio is reported, not
/// treated as a failure.
pub(crate) fn run_once(
    input: PriceInput,
    address: Option<&str>,
    endpoint: &SearchEndpoint,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let report = build_report(input, address, endpoint);
    tracing::info!(
        sale_price = input.sale_price,
        deposit = input.deposit,
        ratio = %format_ratio(report.assessment.ratio),
        risk = report.assessment.label,
        search_url = report.search_url.as_deref().unwrap_or("-"),
        "one-shot assessment"
    );
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
