//! Format output dispatch helpers

/// Dispatch on the output format without repeating the match.
///
/// ```rust,ignore
/// output_by_format!(cli.format,
///     json => { write_json(&mut out, &report)? },
///     human => { write_human(&mut out, &report)? },
///     records => { write_records(&mut out, &report)? }
/// );
/// ```
#[macro_export]
macro_rules! output_by_format {
    ($format:expr, json => $json:block, human => $human:block, records => $records:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => $human,
            $crate::cli::OutputFormat::Records => $records,
        }
    };
}
